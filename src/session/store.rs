use std::fs;
use std::path::PathBuf;

use tracing::warn;

use crate::config::SessionConfig;
use crate::model::user::AuthUser;

use super::SessionError;

/// The one local persistence point of the whole client: a single JSON file
/// holding the serialized logged-in identity. Cleared on logout.
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new(config: &SessionConfig) -> Self {
        SessionStore {
            path: config.store_path.clone(),
        }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Loads the stored identity, if any. A corrupt file is treated as no
    /// session rather than a fatal error.
    pub fn load(&self) -> Result<Option<AuthUser>, SessionError> {
        if !self.path.exists() {
            return Ok(None);
        }
        let raw = fs::read_to_string(&self.path)?;
        match serde_json::from_str(&raw) {
            Ok(user) => Ok(Some(user)),
            Err(e) => {
                warn!("Discarding corrupt session store: {}", e);
                Ok(None)
            }
        }
    }

    pub fn save(&self, user: &AuthUser) -> Result<(), SessionError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let raw = serde_json::to_string_pretty(user)?;
        fs::write(&self.path, raw)?;
        Ok(())
    }

    pub fn clear(&self) -> Result<(), SessionError> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
        }
        Ok(())
    }
}
