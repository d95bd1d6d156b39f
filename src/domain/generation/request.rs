//! Generation request types

use serde::{Deserialize, Serialize};

/// Request to generate a response for a query
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationRequest {
    /// The query text the response answers
    prompt: String,
}

impl GenerationRequest {
    /// Create a new generation request
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
        }
    }

    /// Get the prompt
    pub fn prompt(&self) -> &str {
        &self.prompt
    }
}
