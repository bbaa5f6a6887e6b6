//! Quill Core — shared domain abstractions.
//!
//! This crate defines the entity models, event types, and trait seams that
//! every Quill service depends on. It contains no infrastructure code.

pub mod error;
pub mod event;
pub mod log;
pub mod model;
pub mod store;
