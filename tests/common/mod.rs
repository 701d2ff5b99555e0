//! Common test utilities for integration tests
//!
//! Provides a recording error hook shared across test files.

use std::sync::{Arc, Mutex};

use typenv::{EnvError, ErrorHook};

/// Collects every `(key, error)` pair handed to the hook.
#[derive(Clone, Default)]
pub struct RecordingHook {
    calls: Arc<Mutex<Vec<(String, EnvError)>>>,
}

#[allow(dead_code)]
impl RecordingHook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shareable hook that appends to this recorder
    pub fn hook(&self) -> ErrorHook {
        let calls = Arc::clone(&self.calls);
        Arc::new(move |key: &str, err: &EnvError| {
            calls.lock().unwrap().push((key.to_string(), err.clone()));
        })
    }

    pub fn calls(&self) -> Vec<(String, EnvError)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}
