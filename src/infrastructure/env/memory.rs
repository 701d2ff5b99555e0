use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use crate::domain::ports::EnvSource;

/// In-memory environment source.
///
/// Uses an `RwLock` for interior mutability, so all methods take `&self`
/// and the map can be shared across threads behind an `Arc`.
///
/// ```
/// use typenv::{EnvReader, MapEnv};
///
/// let env = MapEnv::from_pairs([("PORT", "8080")]);
/// let reader = EnvReader::with_source(env);
/// assert_eq!(reader.int("PORT", 80), 8080);
/// ```
#[derive(Debug, Default)]
pub struct MapEnv {
    vars: RwLock<HashMap<String, String>>,
}

impl MapEnv {
    /// Empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Source seeded with `pairs`; later duplicates win.
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        pairs.into_iter().collect()
    }

    /// Set `key`, replacing any previous value.
    pub fn set(&self, key: impl Into<String>, value: impl Into<String>) {
        self.vars
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.into(), value.into());
    }

    /// Unset `key`, returning its previous value.
    pub fn remove(&self, key: &str) -> Option<String> {
        self.vars
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(key)
    }

    /// Unset every variable.
    pub fn clear(&self) {
        self.vars
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    /// Number of variables set, including empty ones.
    pub fn len(&self) -> usize {
        self.vars.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    /// Whether no variable is set.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for MapEnv {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: RwLock::new(
                iter.into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
        }
    }
}

impl EnvSource for MapEnv {
    fn var(&self, key: &str) -> Option<String> {
        self.vars
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }
}
