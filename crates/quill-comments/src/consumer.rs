//! Moderation event consumer.
//!
//! Applies `CommentModerated` events to the local store and re-emits the
//! decision as `CommentUpdated` for the read side. The update is
//! unconditional on `(id, post_id)`: if the moderation event outran the
//! comment's creation, the update matches nothing and the decision is lost
//! unless the moderator retries. That gap is inherited from the system's
//! availability model, and `CommentUpdated` is still emitted afterwards —
//! downstream consumers no-op on it the same way.

use std::sync::Arc;

use quill_core::event::{CommentUpdated, Event, EventEnvelope};
use quill_core::store::CommentStore;
use quill_event_log::EventEmitter;

/// Applies moderation events delivered by the log.
#[derive(Clone)]
pub struct ModerationConsumer {
    store: Arc<dyn CommentStore>,
    emitter: EventEmitter,
}

impl ModerationConsumer {
    /// Creates a consumer over the given store and emitter.
    #[must_use]
    pub fn new(store: Arc<dyn CommentStore>, emitter: EventEmitter) -> Self {
        Self { store, emitter }
    }

    /// Applies one event. Idempotent: re-delivery repeats the same
    /// unconditional update and re-emission. Never fails; store errors are
    /// logged and the event is dropped.
    pub async fn apply(&self, envelope: &EventEnvelope) {
        match Event::from_envelope(envelope) {
            Some(Event::CommentModerated(moderated)) => {
                let applied = self
                    .store
                    .set_moderation(
                        moderated.id,
                        moderated.post_id,
                        moderated.status,
                        &moderated.content,
                    )
                    .await;

                match applied {
                    Ok(()) => {
                        self.emitter
                            .emit(&Event::CommentUpdated(CommentUpdated {
                                id: moderated.id,
                                post_id: moderated.post_id,
                                content: moderated.content,
                                status: moderated.status,
                            }))
                            .await;
                    }
                    Err(err) => {
                        tracing::error!(
                            comment_id = %moderated.id,
                            error = %err,
                            "failed to apply moderation decision"
                        );
                    }
                }
            }
            Some(other) => {
                tracing::debug!(
                    event_type = other.event_type(),
                    "event not consumed by this service"
                );
            }
            None => {
                tracing::debug!(
                    event_type = %envelope.event_type,
                    "ignoring unrecognized event"
                );
            }
        }
    }
}

impl std::fmt::Debug for ModerationConsumer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModerationConsumer").finish_non_exhaustive()
    }
}
