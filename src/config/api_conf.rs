use std::env;

use super::ConfigError;

/// Connection settings for the remote REST backend. The base URL is the one
/// piece of environment the whole gateway layer depends on.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

impl ApiConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let base_url = env::var("STUDIO_API_URL")
            .map_err(|_| ConfigError::EnvVarNotFound("STUDIO_API_URL".to_string()))?;
        if base_url.trim().is_empty() {
            return Err(ConfigError::InvalidValue(
                "STUDIO_API_URL must not be empty".to_string(),
            ));
        }

        let timeout_secs = match env::var("STUDIO_API_TIMEOUT_SECS") {
            Ok(raw) => raw.parse().map_err(|_| {
                ConfigError::InvalidValue(format!("STUDIO_API_TIMEOUT_SECS: {raw}"))
            })?,
            Err(_) => 30,
        };

        Ok(ApiConfig {
            base_url,
            timeout_secs,
        })
    }
}
