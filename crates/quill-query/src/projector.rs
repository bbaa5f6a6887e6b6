//! The event projector: one event in, one idempotent store mutation out.
//!
//! Every mutation is insert-if-absent (creation events) or an unconditional
//! single-row update (update events), which is what makes at-least-once,
//! unordered delivery safe without any deduplication bookkeeping. Applying
//! the full history to an empty store and applying it incrementally with
//! duplicates converge on the same state.

use std::sync::Arc;

use quill_core::event::{Event, EventEnvelope};
use quill_core::store::ViewStore;

/// Projects events from the log into the derived view.
#[derive(Clone)]
pub struct Projector {
    store: Arc<dyn ViewStore>,
}

impl Projector {
    /// Creates a projector over the given view store.
    #[must_use]
    pub fn new(store: Arc<dyn ViewStore>) -> Self {
        Self { store }
    }

    /// Applies one event. Total: never fails, whatever the envelope holds.
    /// Unknown and malformed events are ignored; store errors are logged
    /// and the event is dropped.
    pub async fn apply(&self, envelope: &EventEnvelope) {
        let Some(event) = Event::from_envelope(envelope) else {
            tracing::debug!(
                event_type = %envelope.event_type,
                "ignoring unrecognized event"
            );
            return;
        };

        let result = match &event {
            Event::PostCreated(p) => self.store.insert_post_if_absent(p.id, &p.title).await,
            Event::CommentCreated(c) => {
                // The referenced post may not exist yet; that is fine.
                self.store
                    .insert_comment_if_absent(c.id, c.post_id, &c.content, c.status)
                    .await
            }
            Event::CommentUpdated(u) => {
                // No-op when the comment is absent (update outran creation).
                self.store
                    .update_comment(u.id, u.post_id, &u.content, u.status)
                    .await
            }
            // Moderation decisions reach this service as CommentUpdated.
            Event::CommentModerated(_) => return,
        };

        if let Err(err) = result {
            tracing::error!(
                event_type = event.event_type(),
                error = %err,
                "failed to project event"
            );
        }
    }
}

impl std::fmt::Debug for Projector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Projector").finish_non_exhaustive()
    }
}
