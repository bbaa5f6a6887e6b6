//! Shared test mocks and utilities for the Quill services.

mod event_log;
mod http;
mod store;

pub use event_log::{FailingEventLog, InMemoryEventLog};
pub use http::{get_json, post_json};
pub use store::{
    FailingCommentStore, FailingPostStore, FailingViewStore, InMemoryCommentStore,
    InMemoryPostStore, InMemoryViewStore,
};
