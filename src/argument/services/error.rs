//! Resolver error type.

use thiserror::Error;

use crate::argument::domain::ArgumentError;
use crate::argument::ports::DirectoryError;

/// Failure of an overload resolution.
#[derive(Debug, Clone, Error)]
pub enum ResolveError {
    /// The input matched no overload; the error is meant for the user.
    #[error(transparent)]
    Rejected(#[from] ArgumentError),

    /// A directory lookup failed and casting was aborted.
    #[error(transparent)]
    Directory(#[from] DirectoryError),
}

impl ResolveError {
    /// Returns the user-facing error, if this is a rejection.
    #[must_use]
    pub const fn argument_error(&self) -> Option<&ArgumentError> {
        match self {
            Self::Rejected(error) => Some(error),
            Self::Directory(_) => None,
        }
    }
}
