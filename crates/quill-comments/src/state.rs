//! Shared application state.

use std::sync::Arc;

use quill_core::store::CommentStore;
use quill_event_log::EventEmitter;

use crate::consumer::ModerationConsumer;

/// Application state shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// The service's private comment store.
    pub store: Arc<dyn CommentStore>,
    /// Best-effort emitter to the external event log.
    pub emitter: EventEmitter,
    /// Consumer applying `CommentModerated` events.
    pub consumer: ModerationConsumer,
}

impl AppState {
    /// Create new application state. The consumer shares the same store and
    /// emitter the request handlers use.
    #[must_use]
    pub fn new(store: Arc<dyn CommentStore>, emitter: EventEmitter) -> Self {
        let consumer = ModerationConsumer::new(store.clone(), emitter.clone());
        Self {
            store,
            emitter,
            consumer,
        }
    }
}
