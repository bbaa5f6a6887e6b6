//! Event log abstraction.
//!
//! The external log is the only channel through which services learn of each
//! other's writes. It offers exactly two operations: append one event and
//! read the full history. No ordering or delivery guarantee is assumed
//! beyond "all appended events eventually appear".

use async_trait::async_trait;

use crate::error::EventLogError;
use crate::event::EventEnvelope;

/// Client-side view of the external append-only event log.
#[async_trait]
pub trait EventLog: Send + Sync {
    /// Appends one event to the log.
    ///
    /// # Errors
    ///
    /// Returns `EventLogError` if the append could not be delivered or was
    /// refused. Callers on the emission path swallow this error.
    async fn append(&self, envelope: &EventEnvelope) -> Result<(), EventLogError>;

    /// Reads the complete event history, in log order.
    ///
    /// # Errors
    ///
    /// Returns `EventLogError` if the history could not be fetched or
    /// decoded.
    async fn read_all(&self) -> Result<Vec<EventEnvelope>, EventLogError>;
}
