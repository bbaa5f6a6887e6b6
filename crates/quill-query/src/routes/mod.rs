//! Route modules for the query service.

pub mod events;
pub mod posts;
