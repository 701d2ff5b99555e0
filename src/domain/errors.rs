//! Errors reported while parsing environment values.
//!
//! These never reach the caller of an accessor. They are handed to the
//! error hook together with the variable name.

use std::num::{ParseFloatError, ParseIntError};

use thiserror::Error;

/// Failure to parse a non-empty environment value as the requested type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnvError {
    /// Not one of `true`, `t`, `1`, `false`, `f`, `0`.
    #[error("unknown bool value: '{value}'")]
    UnknownBool {
        /// The value as read.
        value: String,
    },

    /// Not a base-10 `i64`.
    #[error("invalid integer: {0}")]
    Int(#[from] ParseIntError),

    /// Not a decimal `f64`.
    #[error("invalid float: {0}")]
    Float(#[from] ParseFloatError),

    /// Rejected by the duration grammar.
    #[error(transparent)]
    Duration(#[from] DurationError),

    /// Any other parser's message, from [`EnvReader::parsed`].
    ///
    /// [`EnvReader::parsed`]: crate::EnvReader::parsed
    #[error("{0}")]
    Other(String),
}

impl EnvError {
    /// Short tag naming the accessor type that failed, used as a log field.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::UnknownBool { .. } => "bool",
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::Duration(_) => "duration",
            Self::Other(_) => "other",
        }
    }
}

/// Failure to parse a duration literal such as `1h30m` or `500ms`.
///
/// Every variant carries the full input so the message stands on its own.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DurationError {
    /// Empty, sign only, or a component with no digits.
    #[error("invalid duration \"{0}\"")]
    Invalid(String),

    /// A number with no unit after it, other than the bare `0`.
    #[error("missing unit in duration \"{0}\"")]
    MissingUnit(String),

    /// A unit outside `ns`, `us`, `µs`, `ms`, `s`, `m` and `h`.
    #[error("unknown unit \"{unit}\" in duration \"{input}\"")]
    UnknownUnit {
        /// The unrecognized unit text.
        unit: String,
        /// The whole literal.
        input: String,
    },

    /// Outside the signed 64-bit nanosecond range.
    #[error("duration \"{0}\" overflows")]
    Overflow(String),
}
