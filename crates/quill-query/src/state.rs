//! Shared application state.

use std::sync::Arc;

use quill_core::store::ViewStore;

use crate::projector::Projector;

/// Application state shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// The derived view store.
    pub store: Arc<dyn ViewStore>,
    /// The projector shared by replay and the live receiver.
    pub projector: Projector,
}

impl AppState {
    /// Create new application state over one view store.
    #[must_use]
    pub fn new(store: Arc<dyn ViewStore>) -> Self {
        let projector = Projector::new(store.clone());
        Self { store, projector }
    }
}
