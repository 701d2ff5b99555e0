//! Domain layer for typed environment lookups
//!
//! This module contains the parsing rules and the port definitions that
//! readers are built on. Nothing here touches the process environment.

pub mod duration;
pub mod errors;
pub mod ports;
pub mod values;

// Re-export error types for convenient access
pub use errors::{DurationError, EnvError};
pub use ports::{EnvSource, ErrorHook};
