//! Quill Query — the read-optimized query service.
//!
//! Holds no authoritative data. Its posts/comments view is derived entirely
//! from the event log: incrementally through the live receiver, and from
//! scratch through startup replay. Both paths share one projector, so
//! replayed and live delivery have identical semantics.

pub mod projector;
pub mod replay;
pub mod routes;
pub mod state;
pub mod store;
