use serde::{Deserialize, Serialize};

/// The logged-in identity held by the session context and stamped onto
/// created records. Presence of a stored value is the whole authentication
/// model; there are no tokens to refresh or expire.
#[allow(non_snake_case)]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthUser {
    pub userId: u64,
    pub username: String,
    pub displayName: Option<String>,
    pub role: Option<String>,
}

impl AuthUser {
    pub fn display_name(&self) -> &str {
        self.displayName.as_deref().unwrap_or(&self.username)
    }
}
