//! Live event receiver.
//!
//! Feeds pushed events through the same `ModerationConsumer` regardless of
//! origin and acknowledges immediately; the ack carries no durability
//! guarantee.

use axum::extract::State;
use axum::{Json, Router, routing::post};
use quill_core::event::EventEnvelope;
use serde_json::{Value, json};

use crate::state::AppState;

/// POST /events
async fn receive_event(
    State(state): State<AppState>,
    Json(envelope): Json<EventEnvelope>,
) -> Json<Value> {
    tracing::info!(event_type = %envelope.event_type, "event received");
    state.consumer.apply(&envelope).await;
    Json(json!({}))
}

/// Returns the event receiver router.
pub fn router() -> Router<AppState> {
    Router::new().route("/events", post(receive_event))
}
