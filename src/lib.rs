//! typenv - Typed environment variable accessors
//!
//! Read environment variables as strings, booleans, integers, floats or
//! durations. Every accessor falls back to a caller-supplied default when the
//! variable is unset, empty or malformed, and never fails. Malformed values
//! are reported once through a replaceable error hook, which by default logs
//! a `tracing` warning.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain`): parsing rules, errors and port traits
//! - **Service Layer** (`services`): the typed reader and process-wide accessors
//! - **Infrastructure Layer** (`infrastructure`): environment sources and logging
//! - **CLI Layer** (`cli`): command-line interface
//!
//! # Example
//!
//! ```
//! use chrono::Duration;
//! use typenv::{EnvReader, MapEnv};
//!
//! let reader = EnvReader::with_source(MapEnv::from_pairs([
//!     ("HTTP_TIMEOUT", "1m30s"),
//!     ("VERBOSE", "T"),
//! ]));
//!
//! assert_eq!(reader.duration("HTTP_TIMEOUT", Duration::seconds(10)), Duration::seconds(90));
//! assert!(reader.bool("VERBOSE", false));
//! assert_eq!(reader.int("RETRIES", 3), 3);
//! ```

pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::duration::{format_duration, parse_duration};
pub use domain::{DurationError, EnvError, EnvSource, ErrorHook};
pub use infrastructure::env::{MapEnv, SystemEnv};
pub use infrastructure::logging::{default_error_hook, log_error_hook, LogConfig, LogFormat, LoggerImpl};
pub use services::{global, EnvReader};
