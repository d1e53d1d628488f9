pub mod attendance;
pub mod booking;
pub mod catalog;
pub mod employee;
pub mod lead;
pub mod quotation;
pub mod request;
pub mod user;

use std::fmt;

/// Rejected state-machine edge. Every lifecycle enum consults its transition
/// table before a status write goes out; a bad edge never reaches the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidTransition {
    pub entity: &'static str,
    pub from: String,
    pub to: String,
}

impl fmt::Display for InvalidTransition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} cannot move from {} to {}",
            self.entity, self.from, self.to
        )
    }
}

impl std::error::Error for InvalidTransition {}
