//! Best-effort event emission.
//!
//! A producer's local write is the system of record; propagating it is the
//! log's job. The emitter therefore makes exactly one append attempt and
//! swallows any failure, logging it at `warn`. Nothing on the write path
//! blocks on, retries, or observes the outcome.

use std::sync::Arc;

use quill_core::event::Event;
use quill_core::log::EventLog;

/// Fire-and-forget wrapper around an `EventLog` append.
#[derive(Clone)]
pub struct EventEmitter {
    log: Arc<dyn EventLog>,
}

impl EventEmitter {
    /// Creates an emitter over the given log.
    #[must_use]
    pub fn new(log: Arc<dyn EventLog>) -> Self {
        Self { log }
    }

    /// Attempts to append `event` once. Failure is logged and discarded;
    /// the caller's result never depends on it.
    pub async fn emit(&self, event: &Event) {
        let envelope = event.to_envelope();
        if let Err(err) = self.log.append(&envelope).await {
            tracing::warn!(
                event_type = event.event_type(),
                error = %err,
                "event append failed; local write stands, event is not propagated"
            );
        }
    }
}

impl std::fmt::Debug for EventEmitter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventEmitter").finish_non_exhaustive()
    }
}
