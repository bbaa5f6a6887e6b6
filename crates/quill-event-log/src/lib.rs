//! Quill Event Log — HTTP client for the external event log, plus the
//! best-effort event emitter used on every producer write path.

pub mod emitter;
pub mod http;

pub use emitter::EventEmitter;
pub use http::HttpEventLog;
