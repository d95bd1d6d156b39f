//! Infrastructure layer - External service implementations

pub mod embedding;
pub mod generation;
pub mod http_client;
pub mod logging;
pub mod observability;
pub mod semantic_cache;
pub mod services;

pub use http_client::{HttpClient, HttpClientTrait};

#[cfg(test)]
pub use http_client::mock::MockHttpClient;
