//! Quill Service — plumbing shared by every service binary: environment
//! configuration, tracing setup, HTTP error mapping, and the health route.

pub mod config;
pub mod error;
pub mod health;
pub mod telemetry;
