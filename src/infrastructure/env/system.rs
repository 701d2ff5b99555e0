use std::env;

use crate::domain::ports::EnvSource;

/// Zero-sized source that delegates to `std::env`.
///
/// Values that are not valid Unicode are treated as unset.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemEnv;

impl EnvSource for SystemEnv {
    #[inline]
    fn var(&self, key: &str) -> Option<String> {
        env::var(key).ok()
    }
}
