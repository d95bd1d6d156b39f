//! Response generation domain models and traits

mod provider;
mod request;

pub use provider::ResponseGenerator;
pub use request::GenerationRequest;

#[cfg(test)]
pub use provider::mock::MockResponseGenerator;
