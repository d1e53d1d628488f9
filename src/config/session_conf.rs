use std::env;
use std::path::PathBuf;

use super::ConfigError;

/// Location of the local session store: a single JSON entry holding the
/// logged-in identity, cleared on logout.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub store_path: PathBuf,
}

impl SessionConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        if let Ok(path) = env::var("STUDIO_SESSION_FILE") {
            if path.trim().is_empty() {
                return Err(ConfigError::InvalidValue(
                    "STUDIO_SESSION_FILE must not be empty".to_string(),
                ));
            }
            return Ok(SessionConfig {
                store_path: PathBuf::from(path),
            });
        }

        let base = dirs::data_dir().ok_or_else(|| {
            ConfigError::InvalidValue("no user data directory available".to_string())
        })?;
        Ok(SessionConfig {
            store_path: base.join("studio-console").join("session.json"),
        })
    }
}
