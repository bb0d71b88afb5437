pub mod env;
mod loader;

pub use env::{AppConfig, ConfigError, DirectoryConfig, LoggingConfig, OpenAiConfig};
pub use loader::load_config;
