//! Failure taxonomy for the dispatch pipeline.
//!
//! Every stage returns one of these typed failures. Only the envelope formatter
//! downgrades them to text, so the kind survives for logging and tests.

use std::time::Duration;

use thiserror::Error;

/// A failed dispatch, classified by the stage that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DispatchError {
    /// The requested operation name is not registered.
    #[error("Error: Unknown operation '{0}'")]
    UnknownOperation(String),

    /// Caller arguments were malformed or a business rule was not met.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The upstream call did not produce a usable JSON payload.
    #[error("upstream request failed: {0}")]
    Transport(#[from] TransportFailure),
}

/// Rejected caller input. No network access happens after one of these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A declared parameter held something other than a string.
    #[error("Error: Invalid value for parameter '{field}': expected a string, got {found}")]
    InvalidType { field: String, found: &'static str },

    /// A cross-field precondition failed.
    #[error("{message}")]
    RuleFailed { message: &'static str },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportFailure {
    #[error("HTTP error! status: {0}")]
    Status(u16),

    #[error("network error: {0}")]
    Network(String),

    #[error("invalid JSON body: {0}")]
    Decode(String),

    #[error("timed out after {0:?}")]
    Timeout(Duration),

    #[error("request cancelled")]
    Cancelled,
}

impl DispatchError {
    /// Short label for structured log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::UnknownOperation(_) => "unknown_operation",
            Self::Validation(_) => "validation",
            Self::Transport(_) => "transport",
        }
    }
}
