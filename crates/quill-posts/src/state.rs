//! Shared application state.

use std::sync::Arc;

use quill_core::store::PostStore;
use quill_event_log::EventEmitter;

/// Application state shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// The service's private post store.
    pub store: Arc<dyn PostStore>,
    /// Best-effort emitter to the external event log.
    pub emitter: EventEmitter,
}

impl AppState {
    /// Create new application state.
    #[must_use]
    pub fn new(store: Arc<dyn PostStore>, emitter: EventEmitter) -> Self {
        Self { store, emitter }
    }
}
