//! Placeholder generator that stamps the query with the current time

use async_trait::async_trait;
use chrono::Local;

use crate::domain::generation::{GenerationRequest, ResponseGenerator};
use crate::domain::DomainError;

/// Generator that never calls a model.
///
/// Produces `This is a new response for '<query>' generated at HH:MM:SS`,
/// which makes cache hits easy to spot: a hit repeats an older timestamp.
#[derive(Debug, Default, Clone)]
pub struct TemplateResponseGenerator;

impl TemplateResponseGenerator {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ResponseGenerator for TemplateResponseGenerator {
    async fn generate(&self, request: GenerationRequest) -> Result<String, DomainError> {
        Ok(format!(
            "This is a new response for '{}' generated at {}",
            request.prompt(),
            Local::now().format("%H:%M:%S")
        ))
    }

    fn generator_name(&self) -> &'static str {
        "template"
    }
}
