//! Route modules for the posts service.

pub mod events;
pub mod posts;
