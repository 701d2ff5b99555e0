//! Infrastructure layer module
//!
//! Adapters behind the domain ports:
//! - Environment sources (process environment, in-memory map)
//! - Logging infrastructure and the default error hook

pub mod env;
pub mod logging;
