//! Quill Comments — the comments service.
//!
//! Owns the comments table. Creates comments in `pending` status and emits
//! `CommentCreated`; consumes `CommentModerated` events from the log and
//! re-emits `CommentUpdated` for downstream views.

pub mod consumer;
pub mod routes;
pub mod state;
pub mod store;
