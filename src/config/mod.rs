//! Application configuration

mod app_config;

pub use app_config::{
    AppConfig, GeneratorConfig, GeneratorKind, LogFormat, LoggingConfig, OllamaConfig,
};
