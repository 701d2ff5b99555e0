//! Logging infrastructure
//!
//! Structured logging using tracing and tracing-subscriber:
//! - JSON or pretty log formatting on stderr
//! - Log level and format configured from the environment
//! - The default error hook, which reports malformed values as warnings

pub mod config;
pub mod logger;

pub use config::{LogConfig, LogFormat};
pub use logger::{default_error_hook, log_error_hook, LoggerImpl};
