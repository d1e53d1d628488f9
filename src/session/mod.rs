pub mod context;
pub mod store;

pub use context::SessionContext;
pub use store::SessionStore;

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("No user is logged in")]
    NotLoggedIn,

    #[error("Session store I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Session store is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
}
