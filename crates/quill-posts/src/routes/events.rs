//! Live event receiver.
//!
//! The posts service consumes no events today; the receiver exists so the
//! log can fan out to every subscriber uniformly. It logs the type and acks.

use axum::{Json, Router, routing::post};
use quill_core::event::EventEnvelope;
use serde_json::{Value, json};

use crate::state::AppState;

/// POST /events
async fn receive_event(Json(envelope): Json<EventEnvelope>) -> Json<Value> {
    tracing::info!(event_type = %envelope.event_type, "event received");
    Json(json!({}))
}

/// Returns the event receiver router.
pub fn router() -> Router<AppState> {
    Router::new().route("/events", post(receive_event))
}
