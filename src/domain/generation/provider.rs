//! Response generator trait definition

use async_trait::async_trait;
use std::fmt::Debug;

use super::GenerationRequest;
use crate::domain::DomainError;

/// Trait for the expensive model whose answers the cache stores.
///
/// Treated as a pure function from query text to response text: no
/// conversation state is carried between calls.
#[async_trait]
pub trait ResponseGenerator: Send + Sync + Debug {
    /// Produce a response for the request
    async fn generate(&self, request: GenerationRequest) -> Result<String, DomainError>;

    /// Get the generator name
    fn generator_name(&self) -> &'static str;
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::collections::{HashMap, HashSet};
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Debug)]
    pub struct MockResponseGenerator {
        name: &'static str,
        responses: HashMap<String, String>,
        failing: HashSet<String>,
        error: Option<String>,
        calls: AtomicUsize,
    }

    impl MockResponseGenerator {
        pub fn new(name: &'static str) -> Self {
            Self {
                name,
                responses: HashMap::new(),
                failing: HashSet::new(),
                error: None,
                calls: AtomicUsize::new(0),
            }
        }

        pub fn with_response(mut self, prompt: impl Into<String>, response: impl Into<String>) -> Self {
            self.responses.insert(prompt.into(), response.into());
            self
        }

        pub fn with_failing_prompt(mut self, prompt: impl Into<String>) -> Self {
            self.failing.insert(prompt.into());
            self
        }

        pub fn with_error(mut self, error: impl Into<String>) -> Self {
            self.error = Some(error.into());
            self
        }

        pub fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl ResponseGenerator for MockResponseGenerator {
        async fn generate(&self, request: GenerationRequest) -> Result<String, DomainError> {
            self.calls.fetch_add(1, Ordering::SeqCst);

            if let Some(ref error) = self.error {
                return Err(DomainError::generation(self.name, error));
            }

            if self.failing.contains(request.prompt()) {
                return Err(DomainError::generation(self.name, "scripted failure"));
            }

            Ok(self
                .responses
                .get(request.prompt())
                .cloned()
                .unwrap_or_else(|| format!("mock response for '{}'", request.prompt())))
        }

        fn generator_name(&self) -> &'static str {
            self.name
        }
    }
}
