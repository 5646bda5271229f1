use std::{fmt, result};

use thiserror::Error;

use crate::Id;

pub type Result<T, E = Error> = result::Result<T, E>;

/// Error types for idvec operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    #[error("ID: {id} is not a valid ID. {cause}")]
    InvalidId { id: Id, cause: InvalidCause },
}

impl Error {
    /// Returns why the identifier was rejected.
    pub fn invalid_cause(&self) -> InvalidCause {
        match self {
            Self::InvalidId { cause, .. } => *cause,
        }
    }
}

/// Reason an identifier failed the liveness check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InvalidCause {
    /// Negative, or never issued since the last reset.
    OutOfBounds,
    /// Issued, but currently sitting in the free pool.
    Removed,
}

impl fmt::Display for InvalidCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds => f.write_str("ID out of bounds."),
            Self::Removed => f.write_str("The object with this id has been deleted."),
        }
    }
}
