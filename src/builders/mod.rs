//! Builders
//!
//! Fluent builders for protocol messages.

pub mod request;

pub use request::*;
