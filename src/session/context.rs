use std::sync::RwLock;

use tracing::info;

use crate::model::user::AuthUser;

use super::store::SessionStore;
use super::SessionError;

/// Process-wide identity holder, passed explicitly to every service that
/// needs to gate an operation or stamp a foreign key. Populated on login,
/// cleared on logout; between those it mirrors the file store.
pub struct SessionContext {
    store: SessionStore,
    user: RwLock<Option<AuthUser>>,
}

impl SessionContext {
    /// Builds the context and restores any previously stored identity.
    pub fn init(store: SessionStore) -> Result<Self, SessionError> {
        let user = store.load()?;
        if let Some(u) = &user {
            info!("Restored session for {}", u.username);
        }
        Ok(SessionContext {
            store,
            user: RwLock::new(user),
        })
    }

    pub fn login(&self, user: AuthUser) -> Result<(), SessionError> {
        self.store.save(&user)?;
        info!("Logged in as {}", user.username);
        *self.user.write().expect("session lock poisoned") = Some(user);
        Ok(())
    }

    pub fn logout(&self) -> Result<(), SessionError> {
        self.store.clear()?;
        let mut guard = self.user.write().expect("session lock poisoned");
        if let Some(u) = guard.take() {
            info!("Logged out {}", u.username);
        }
        Ok(())
    }

    pub fn current(&self) -> Option<AuthUser> {
        self.user.read().expect("session lock poisoned").clone()
    }

    pub fn employee_id(&self) -> Option<u64> {
        self.current().map(|u| u.userId)
    }

    pub fn is_logged_in(&self) -> bool {
        self.user.read().expect("session lock poisoned").is_some()
    }

    /// Route-guard equivalent: operations on protected screens call this
    /// before doing anything else.
    pub fn require_user(&self) -> Result<AuthUser, SessionError> {
        self.current().ok_or(SessionError::NotLoggedIn)
    }
}
