pub mod config;

pub use config::{AppConfig, ConfigError, UploadConfig, WashConfig};
