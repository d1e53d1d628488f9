use std::fmt;

pub type GatewayResult<T> = Result<T, GatewayError>;

/// Failure classes of a backend call. `Rejected` is the backend saying no
/// (`success: false` plus a message the user can read); everything else is
/// transport or decoding trouble and surfaces as a generic error.
#[derive(Debug)]
pub enum GatewayError {
    Network(String),
    Rejected(String),
    Decode(String),
    NotFound(String),
    /// Generic error that wraps any error implementing std::error::Error
    Generic(Box<dyn std::error::Error + Send + Sync>),
}

impl fmt::Display for GatewayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GatewayError::Network(msg) => write!(f, "Network Error: {}", msg),
            GatewayError::Rejected(msg) => write!(f, "Rejected: {}", msg),
            GatewayError::Decode(msg) => write!(f, "Decode Error: {}", msg),
            GatewayError::NotFound(msg) => write!(f, "Not Found: {}", msg),
            GatewayError::Generic(err) => write!(f, "Gateway Error: {}", err),
        }
    }
}

impl std::error::Error for GatewayError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GatewayError::Generic(err) => Some(err.as_ref()),
            _ => None,
        }
    }
}

// Convenient constructors
impl GatewayError {
    pub fn network<T: Into<String>>(msg: T) -> Self {
        GatewayError::Network(msg.into())
    }

    pub fn rejected<T: Into<String>>(msg: T) -> Self {
        GatewayError::Rejected(msg.into())
    }

    pub fn decode<T: Into<String>>(msg: T) -> Self {
        GatewayError::Decode(msg.into())
    }

    pub fn not_found<T: Into<String>>(msg: T) -> Self {
        GatewayError::NotFound(msg.into())
    }

    pub fn generic<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        GatewayError::Generic(Box::new(err))
    }
}

impl From<reqwest::Error> for GatewayError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            GatewayError::Network(format!("Request timed out: {}", err))
        } else if err.is_connect() {
            GatewayError::Network(format!("Connection failed: {}", err))
        } else if err.is_decode() {
            GatewayError::Decode(format!("Invalid response body: {}", err))
        } else if err.is_builder() {
            GatewayError::Generic(Box::new(err))
        } else {
            GatewayError::Network(format!("Request failed: {}", err))
        }
    }
}
