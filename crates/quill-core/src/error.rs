//! Domain error types.

use thiserror::Error;

/// Top-level error type for local store and validation failures.
#[derive(Debug, Error)]
pub enum DomainError {
    /// A validation error in request handling.
    #[error("validation error: {0}")]
    Validation(String),

    /// A store/persistence error.
    #[error("store error: {0}")]
    Store(String),
}

/// Errors from the external event log.
///
/// These never reach a service's HTTP callers: emission failures are
/// swallowed at the emitter and replay fetch failures are logged and
/// tolerated at startup.
#[derive(Debug, Error)]
pub enum EventLogError {
    /// The request could not be delivered at all.
    #[error("event log transport error: {0}")]
    Transport(String),

    /// The log answered with a non-success status.
    #[error("event log returned status {0}")]
    Status(u16),

    /// The log answered with a body that could not be decoded.
    #[error("event log returned malformed body: {0}")]
    Malformed(String),
}
