//! Events exchanged through the external log.
//!
//! The wire form is `{"type": "...", "data": {...}}` with camelCase payload
//! fields. Unknown or malformed envelopes decode to `None` and are ignored
//! by consumers, which keeps the log forward-compatible.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::model::CommentStatus;

/// Wire envelope for one event: a type tag plus an opaque payload.
///
/// `type` defaults to the empty string and `data` to JSON null so that any
/// callback body deserializes; envelopes that do not name a known event type
/// are simply ignored downstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventEnvelope {
    /// Event type tag.
    #[serde(rename = "type", default)]
    pub event_type: String,
    /// Type-specific payload.
    #[serde(default)]
    pub data: Value,
}

/// Payload of `PostCreated`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostCreated {
    /// Post identifier.
    pub id: Uuid,
    /// Post title.
    pub title: String,
}

/// Payload of `CommentCreated`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentCreated {
    /// Comment identifier.
    pub id: Uuid,
    /// Comment body.
    pub content: String,
    /// The post commented on.
    pub post_id: Uuid,
    /// Initial moderation status (always `pending` at the producer).
    pub status: CommentStatus,
}

/// Payload of `CommentModerated`, consumed by the comments service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentModerated {
    /// Comment identifier.
    pub id: Uuid,
    /// The post commented on.
    pub post_id: Uuid,
    /// Decided moderation status.
    pub status: CommentStatus,
    /// Possibly-rewritten comment body.
    pub content: String,
}

/// Payload of `CommentUpdated`, consumed by the query service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentUpdated {
    /// Comment identifier.
    pub id: Uuid,
    /// The post commented on.
    pub post_id: Uuid,
    /// Comment body after moderation.
    pub content: String,
    /// Moderation status after moderation.
    pub status: CommentStatus,
}

/// The events this system understands, decoded from an envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A post was created.
    PostCreated(PostCreated),
    /// A comment was created.
    CommentCreated(CommentCreated),
    /// A moderation decision was made for a comment.
    CommentModerated(CommentModerated),
    /// A comment's content/status changed after moderation.
    CommentUpdated(CommentUpdated),
}

impl Event {
    /// Returns the wire type tag for this event.
    #[must_use]
    pub fn event_type(&self) -> &'static str {
        match self {
            Self::PostCreated(_) => "PostCreated",
            Self::CommentCreated(_) => "CommentCreated",
            Self::CommentModerated(_) => "CommentModerated",
            Self::CommentUpdated(_) => "CommentUpdated",
        }
    }

    /// Serializes this event into its wire envelope.
    ///
    /// # Panics
    ///
    /// Never panics: serialization of derived `Serialize` payloads to a
    /// `Value` is infallible.
    #[must_use]
    pub fn to_envelope(&self) -> EventEnvelope {
        let data = match self {
            Self::PostCreated(p) => serde_json::to_value(p),
            Self::CommentCreated(p) => serde_json::to_value(p),
            Self::CommentModerated(p) => serde_json::to_value(p),
            Self::CommentUpdated(p) => serde_json::to_value(p),
        }
        .expect("event payload serialization is infallible");

        EventEnvelope {
            event_type: self.event_type().to_owned(),
            data,
        }
    }

    /// Decodes an envelope into a typed event.
    ///
    /// Returns `None` for unknown type tags and for known tags whose payload
    /// does not decode; consumers treat both as events to ignore.
    #[must_use]
    pub fn from_envelope(envelope: &EventEnvelope) -> Option<Self> {
        let data = envelope.data.clone();
        match envelope.event_type.as_str() {
            "PostCreated" => serde_json::from_value(data).ok().map(Self::PostCreated),
            "CommentCreated" => serde_json::from_value(data).ok().map(Self::CommentCreated),
            "CommentModerated" => serde_json::from_value(data)
                .ok()
                .map(Self::CommentModerated),
            "CommentUpdated" => serde_json::from_value(data).ok().map(Self::CommentUpdated),
            _ => None,
        }
    }
}
