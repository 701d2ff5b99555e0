//! Typed environment reader.
//!
//! Every accessor follows the same path: read the raw string, return the
//! default if it is unset or empty, otherwise parse it. A parse failure is
//! handed to the error hook once and the default is returned. Accessors
//! never fail and never cache.

use std::fmt;
use std::str::FromStr;

use chrono::Duration;

use crate::domain::duration::parse_duration;
use crate::domain::errors::EnvError;
use crate::domain::ports::{EnvSource, ErrorHook};
use crate::domain::values::parse_bool;
use crate::infrastructure::env::SystemEnv;
use crate::infrastructure::logging::default_error_hook;

/// Reads typed values from an [`EnvSource`], reporting malformed values
/// through an injected [`ErrorHook`].
///
/// ```
/// use std::sync::Arc;
/// use typenv::{EnvReader, MapEnv};
///
/// let env = MapEnv::from_pairs([("WORKERS", "8"), ("DEBUG", "maybe")]);
/// let reader = EnvReader::with_source(env)
///     .with_error_hook(Arc::new(|key: &str, err: &typenv::EnvError| {
///         eprintln!("{key}: {err}");
///     }));
///
/// assert_eq!(reader.int("WORKERS", 1), 8);
/// assert!(!reader.bool("DEBUG", false));
/// ```
pub struct EnvReader<E = SystemEnv> {
    source: E,
    hook: ErrorHook,
}

impl EnvReader<SystemEnv> {
    /// Reader over the process environment with the logging hook
    pub fn new() -> Self {
        Self::with_source(SystemEnv)
    }
}

impl Default for EnvReader<SystemEnv> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> fmt::Debug for EnvReader<E>
where
    E: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnvReader")
            .field("source", &self.source)
            .finish_non_exhaustive()
    }
}

impl<E: EnvSource> EnvReader<E> {
    /// Reader over a custom source with the logging hook
    pub fn with_source(source: E) -> Self {
        Self {
            source,
            hook: default_error_hook(),
        }
    }

    /// Replace the error hook, builder style
    #[must_use]
    pub fn with_error_hook(mut self, hook: ErrorHook) -> Self {
        self.hook = hook;
        self
    }

    /// Replace the error hook in place
    pub fn set_error_hook(&mut self, hook: ErrorHook) {
        self.hook = hook;
    }

    /// The source values are read from
    pub fn source(&self) -> &E {
        &self.source
    }

    /// The hook malformed values are reported to
    pub fn error_hook(&self) -> &ErrorHook {
        &self.hook
    }

    /// Get a string variable. Returns `def` if the variable is unset or empty.
    pub fn string(&self, key: &str, def: &str) -> String {
        self.raw(key).unwrap_or_else(|| def.to_string())
    }

    /// Get a bool variable.
    ///
    /// Matching is case-insensitive. Valid values are `true`, `t`, `1` and
    /// `false`, `f`, `0`; anything else is reported and yields `def`.
    pub fn bool(&self, key: &str, def: bool) -> bool {
        self.parse_or(key, def, parse_bool)
    }

    /// Get a base-10 signed integer variable.
    pub fn int(&self, key: &str, def: i64) -> i64 {
        self.parse_or(key, def, |raw| raw.parse::<i64>().map_err(EnvError::from))
    }

    /// Get a 64-bit float variable, in decimal or exponential notation.
    pub fn float64(&self, key: &str, def: f64) -> f64 {
        self.parse_or(key, def, |raw| raw.parse::<f64>().map_err(EnvError::from))
    }

    /// Get a duration variable such as `1h30m`, `500ms` or `-2s`.
    ///
    /// See [`parse_duration`] for the accepted grammar.
    pub fn duration(&self, key: &str, def: Duration) -> Duration {
        self.parse_or(key, def, |raw| parse_duration(raw).map_err(EnvError::from))
    }

    /// Get a variable of any [`FromStr`] type.
    ///
    /// Parse failures are reported as [`EnvError::Other`] carrying the
    /// parser's message.
    pub fn parsed<T>(&self, key: &str, def: T) -> T
    where
        T: FromStr,
        T::Err: fmt::Display,
    {
        self.parse_or(key, def, |raw| {
            raw.parse::<T>()
                .map_err(|err| EnvError::Other(err.to_string()))
        })
    }

    /// Non-empty raw value bound to `key`.
    fn raw(&self, key: &str) -> Option<String> {
        self.source.var(key).filter(|value| !value.is_empty())
    }

    fn parse_or<T>(&self, key: &str, def: T, parse: impl FnOnce(&str) -> Result<T, EnvError>) -> T {
        let Some(raw) = self.raw(key) else {
            return def;
        };
        match parse(&raw) {
            Ok(value) => value,
            Err(err) => {
                (self.hook)(key, &err);
                def
            }
        }
    }
}
