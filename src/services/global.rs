//! Process-wide accessors over the live process environment.
//!
//! These mirror [`EnvReader`] for code that has no reader to pass around.
//! All of them share one error hook, which starts out as the logging hook.
//! Replace it once at startup with [`set_error_hook`]; replacement is
//! synchronized, but a concurrent lookup may still see the previous hook.

use std::fmt;
use std::str::FromStr;
use std::sync::{LazyLock, PoisonError, RwLock};

use chrono::Duration;

use super::env_reader::EnvReader;
use crate::domain::ports::ErrorHook;
use crate::infrastructure::env::SystemEnv;
use crate::infrastructure::logging::default_error_hook;

static ERROR_HOOK: LazyLock<RwLock<ErrorHook>> =
    LazyLock::new(|| RwLock::new(default_error_hook()));

/// Install `hook` as the process-wide error hook.
pub fn set_error_hook(hook: ErrorHook) {
    *ERROR_HOOK.write().unwrap_or_else(PoisonError::into_inner) = hook;
}

/// Restore the logging hook.
pub fn reset_error_hook() {
    set_error_hook(default_error_hook());
}

/// The currently installed process-wide hook.
pub fn error_hook() -> ErrorHook {
    ERROR_HOOK
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}

// The hook is cloned out of the lock first so a hook that itself calls
// `set_error_hook` cannot deadlock.
fn reader() -> EnvReader<SystemEnv> {
    EnvReader::new().with_error_hook(error_hook())
}

/// See [`EnvReader::string`].
pub fn string(key: &str, def: &str) -> String {
    reader().string(key, def)
}

/// See [`EnvReader::bool`].
pub fn bool(key: &str, def: bool) -> bool {
    reader().bool(key, def)
}

/// See [`EnvReader::int`].
pub fn int(key: &str, def: i64) -> i64 {
    reader().int(key, def)
}

/// See [`EnvReader::float64`].
pub fn float64(key: &str, def: f64) -> f64 {
    reader().float64(key, def)
}

/// See [`EnvReader::duration`].
pub fn duration(key: &str, def: Duration) -> Duration {
    reader().duration(key, def)
}

/// See [`EnvReader::parsed`].
pub fn parsed<T>(key: &str, def: T) -> T
where
    T: FromStr,
    T::Err: fmt::Display,
{
    reader().parsed(key, def)
}
