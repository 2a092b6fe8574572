use std::fmt;

use thiserror::Error;

/// Which upstream resource a request was for; used in error messages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Leagues,
    Badge,
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Resource::Leagues => write!(f, "leagues"),
            Resource::Badge => write!(f, "badge"),
        }
    }
}

/// Errors from the catalog and badge clients
///
/// `Cancelled` is not a failure from the user's point of view: whoever
/// requested the cancellation swallows it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("Failed to fetch {resource}: {status}")]
    RequestFailed { resource: Resource, status: u16 },

    #[error("Request cancelled")]
    Cancelled,

    #[error("{0}")]
    Network(String),

    #[error("Invalid response: {0}")]
    Decode(String),

    #[error("Invalid request URL: {0}")]
    InvalidUrl(String),
}

impl ApiError {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, ApiError::Cancelled)
    }
}
