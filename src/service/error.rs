use validator::ValidationErrors;

use crate::dto::first_message;
use crate::gateway::GatewayError;
use crate::model::InvalidTransition;
use crate::session::SessionError;

/// Error taxonomy of a user-initiated action: validation failures never
/// reach the wire, server rejections carry the backend's message, and
/// everything else is transport trouble surfaced generically. No variant is
/// fatal to the process.
#[derive(Debug)]
pub enum ServiceError {
    Validation(ValidationErrors),
    InvalidInput(String),
    InvalidTransition(InvalidTransition),
    NotLoggedIn,
    Rejected(String),
    Transport(String),
}

impl std::fmt::Display for ServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ServiceError::Validation(errors) => {
                write!(
                    f,
                    "Validation Error: {}",
                    first_message(errors).unwrap_or_else(|| "invalid input".to_string())
                )
            }
            ServiceError::InvalidInput(msg) => write!(f, "Invalid Input: {}", msg),
            ServiceError::InvalidTransition(err) => write!(f, "Invalid Transition: {}", err),
            ServiceError::NotLoggedIn => write!(f, "Not Logged In"),
            ServiceError::Rejected(msg) => write!(f, "Rejected: {}", msg),
            ServiceError::Transport(msg) => write!(f, "Transport Error: {}", msg),
        }
    }
}

impl std::error::Error for ServiceError {}

impl ServiceError {
    /// The message a notification would show. Transport detail stays in the
    /// logs; users get the generic line.
    pub fn user_message(&self) -> String {
        match self {
            ServiceError::Validation(errors) => {
                first_message(errors).unwrap_or_else(|| "Please check the form".to_string())
            }
            ServiceError::InvalidInput(msg) => msg.clone(),
            ServiceError::InvalidTransition(err) => err.to_string(),
            ServiceError::NotLoggedIn => "Please log in first".to_string(),
            ServiceError::Rejected(msg) => msg.clone(),
            ServiceError::Transport(_) => "Something went wrong while saving".to_string(),
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            ServiceError::Validation(_) | ServiceError::InvalidInput(_)
        )
    }
}

impl From<ValidationErrors> for ServiceError {
    fn from(errors: ValidationErrors) -> Self {
        ServiceError::Validation(errors)
    }
}

impl From<InvalidTransition> for ServiceError {
    fn from(err: InvalidTransition) -> Self {
        ServiceError::InvalidTransition(err)
    }
}

impl From<GatewayError> for ServiceError {
    fn from(err: GatewayError) -> Self {
        match err {
            GatewayError::Rejected(msg) => ServiceError::Rejected(msg),
            GatewayError::NotFound(msg) => ServiceError::Rejected(msg),
            GatewayError::Network(msg) => ServiceError::Transport(msg),
            GatewayError::Decode(msg) => ServiceError::Transport(msg),
            GatewayError::Generic(e) => ServiceError::Transport(e.to_string()),
        }
    }
}

impl From<SessionError> for ServiceError {
    fn from(err: SessionError) -> Self {
        match err {
            SessionError::NotLoggedIn => ServiceError::NotLoggedIn,
            other => ServiceError::Transport(other.to_string()),
        }
    }
}
