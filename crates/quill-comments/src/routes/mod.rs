//! Route modules for the comments service.

pub mod comments;
pub mod events;
