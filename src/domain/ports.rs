//! Port definitions (Hexagonal Architecture)
//!
//! - `EnvSource`: where raw values come from
//! - `ErrorHook`: where malformed values are reported
//!
//! Readers depend only on these, so tests can swap in an in-memory source
//! and a recording hook.

use std::sync::Arc;

use super::errors::EnvError;

/// Source of raw environment values.
///
/// Lookups are case-sensitive. A value that is absent or not valid Unicode
/// is `None`. Empty strings may be returned; readers treat them as unset.
pub trait EnvSource {
    /// Get the raw value bound to `key`
    fn var(&self, key: &str) -> Option<String>;
}

impl<E: EnvSource + ?Sized> EnvSource for &E {
    fn var(&self, key: &str) -> Option<String> {
        (**self).var(key)
    }
}

impl<E: EnvSource + ?Sized> EnvSource for Arc<E> {
    fn var(&self, key: &str) -> Option<String> {
        (**self).var(key)
    }
}

/// Callback invoked once per malformed, non-empty value with the variable
/// name and the parse error.
pub type ErrorHook = Arc<dyn Fn(&str, &EnvError) + Send + Sync>;
