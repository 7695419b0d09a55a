// Copyright 2025 Cowboy AI, LLC.

//! Error types raised by the result-type core itself

use std::time::Duration;

use thiserror::Error;

/// Errors produced by the core on its own account.
///
/// Failures produced by caller code travel as [`crate::Cause`] values; these
/// variants cover contract violations, captured panics and the outcomes a
/// [`crate::TryFuture`] reports when the computation never delivered a value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TryError {
    /// A value was demanded where none is present
    #[error("No such element: {0}")]
    NoSuchElement(String),

    /// Caller-supplied logic panicked and the panic was captured
    #[error("Panicked: {0}")]
    Panicked(String),

    /// A bounded wait expired before the computation completed
    #[error("Timed out after {after:?}")]
    Timeout {
        /// The bound that expired
        after: Duration,
    },

    /// The underlying task was cancelled before completing
    #[error("Task was cancelled")]
    Cancelled,

    /// The underlying task was dropped without reporting an outcome
    #[error("Task was abandoned before reporting an outcome")]
    Abandoned,

    /// The executor refused to accept the task
    #[error("Task rejected: {0}")]
    Rejected(String),
}

/// Result type for core operations
pub type TryResult<T> = Result<T, TryError>;

impl TryError {
    /// Create a no-such-element error
    pub fn no_such_element(what: impl Into<String>) -> Self {
        TryError::NoSuchElement(what.into())
    }

    /// Check if this reports a missing value
    pub fn is_no_such_element(&self) -> bool {
        matches!(self, TryError::NoSuchElement(_))
    }

    /// Check if this is a timeout
    pub fn is_timeout(&self) -> bool {
        matches!(self, TryError::Timeout { .. })
    }

    /// Check if the computation never delivered an outcome
    pub fn is_cancellation(&self) -> bool {
        matches!(self, TryError::Cancelled | TryError::Abandoned)
    }
}

impl From<tokio::task::JoinError> for TryError {
    fn from(err: tokio::task::JoinError) -> Self {
        if err.is_cancelled() {
            return TryError::Cancelled;
        }
        match err.try_into_panic() {
            Ok(payload) => TryError::Panicked(crate::capture::panic_message(payload.as_ref())),
            Err(err) => TryError::Panicked(err.to_string()),
        }
    }
}

impl From<tokio::sync::oneshot::error::RecvError> for TryError {
    fn from(_: tokio::sync::oneshot::error::RecvError) -> Self {
        TryError::Abandoned
    }
}
