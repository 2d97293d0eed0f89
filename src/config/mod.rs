//! Application configuration

mod app_config;

pub use app_config::{AccountsConfig, AppConfig, LogFormat, LoggingConfig, ServerConfig};
