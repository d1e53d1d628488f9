pub mod api_conf;
pub mod session_conf;

pub use api_conf::ApiConfig;
pub use session_conf::SessionConfig;

/// Common configuration error type
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Environment variable not found: {0}")]
    EnvVarNotFound(String),

    #[error("Invalid configuration value: {0}")]
    InvalidValue(String),
}
