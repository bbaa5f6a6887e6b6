//! Mock `EventLog` implementations for tests.

use std::sync::Mutex;

use async_trait::async_trait;
use quill_core::error::EventLogError;
use quill_core::event::EventEnvelope;
use quill_core::log::EventLog;

/// An event log held in memory. Appends are recorded in order and
/// `read_all` returns everything appended (or seeded) so far.
#[derive(Debug, Default)]
pub struct InMemoryEventLog {
    events: Mutex<Vec<EventEnvelope>>,
}

impl InMemoryEventLog {
    /// Creates an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a log pre-populated with `history`, as if earlier services
    /// had already appended to it.
    #[must_use]
    pub fn with_history(history: Vec<EventEnvelope>) -> Self {
        Self {
            events: Mutex::new(history),
        }
    }

    /// Returns a snapshot of everything in the log, in append order.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn events(&self) -> Vec<EventEnvelope> {
        self.events.lock().unwrap().clone()
    }
}

#[async_trait]
impl EventLog for InMemoryEventLog {
    async fn append(&self, envelope: &EventEnvelope) -> Result<(), EventLogError> {
        self.events.lock().unwrap().push(envelope.clone());
        Ok(())
    }

    async fn read_all(&self) -> Result<Vec<EventEnvelope>, EventLogError> {
        Ok(self.events())
    }
}

/// An event log that refuses every call with a transport error. Useful for
/// exercising swallowed-emit and degraded-replay paths.
#[derive(Debug, Default)]
pub struct FailingEventLog;

#[async_trait]
impl EventLog for FailingEventLog {
    async fn append(&self, _envelope: &EventEnvelope) -> Result<(), EventLogError> {
        Err(EventLogError::Transport("connection refused".into()))
    }

    async fn read_all(&self) -> Result<Vec<EventEnvelope>, EventLogError> {
        Err(EventLogError::Transport("connection refused".into()))
    }
}
