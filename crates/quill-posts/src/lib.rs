//! Quill Posts — the posts service.
//!
//! Owns the posts table. Every successful local write is followed by a
//! best-effort `PostCreated` emission to the external event log.

pub mod routes;
pub mod state;
pub mod store;
