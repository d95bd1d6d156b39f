//! Response generator implementations

mod ollama;
mod template;

pub use ollama::OllamaResponseGenerator;
pub use template::TemplateResponseGenerator;
