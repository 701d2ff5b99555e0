//! Subscriber installation and the default logging error hook.

use super::config::{LogConfig, LogFormat};
use crate::domain::errors::EnvError;
use crate::domain::ports::{EnvSource, ErrorHook};
use crate::services::EnvReader;
use anyhow::{Context, Result};
use std::io;
use std::sync::{Arc, Mutex, PoisonError};
use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

/// Logger implementation using tracing
pub struct LoggerImpl;

impl LoggerImpl {
    /// Initialize the global subscriber with the given configuration
    ///
    /// Output goes to stderr so that stdout stays free for command results.
    /// `RUST_LOG` directives take precedence over `config.level`.
    ///
    /// # Errors
    /// Returns an error if the level is invalid or a global subscriber is
    /// already installed
    pub fn init(config: &LogConfig) -> Result<Self> {
        let default_level = parse_log_level(&config.level)?;

        let env_filter = EnvFilter::builder()
            .with_default_directive(default_level.into())
            .from_env_lossy();

        let layer = match config.format {
            LogFormat::Json => tracing_subscriber::fmt::layer()
                .json()
                .with_writer(io::stderr)
                .with_current_span(true)
                .with_target(true)
                .with_filter(env_filter)
                .boxed(),
            LogFormat::Pretty => tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .with_target(true)
                .with_filter(env_filter)
                .boxed(),
        };

        tracing_subscriber::registry()
            .with(layer)
            .try_init()
            .context("Failed to install tracing subscriber")?;

        tracing::debug!(
            level = %config.level,
            format = %config.format,
            "logger initialized"
        );

        Ok(Self)
    }

    /// Build a [`LogConfig`] from `reader`'s source and install it
    ///
    /// `level` overrides `TYPENV_LOG_LEVEL` when given. Malformed logging
    /// variables fall back to their defaults; their reports are held until
    /// the subscriber is installed and then passed to `reader`'s hook.
    ///
    /// # Errors
    /// Returns an error if `level` is invalid or a global subscriber is
    /// already installed
    pub fn init_from_env<E: EnvSource>(
        reader: &EnvReader<E>,
        level: Option<&str>,
    ) -> Result<Self> {
        let held: Arc<Mutex<Vec<(String, EnvError)>>> = Arc::default();
        let sink = Arc::clone(&held);
        let holding = EnvReader::with_source(reader.source()).with_error_hook(Arc::new(
            move |key: &str, err: &EnvError| {
                sink.lock()
                    .unwrap_or_else(PoisonError::into_inner)
                    .push((key.to_string(), err.clone()));
            },
        ));

        let mut config = LogConfig::from_env(&holding);
        if let Some(level) = level {
            config.level = level.to_string();
        }
        let logger = Self::init(&config);

        let reports = std::mem::take(&mut *held.lock().unwrap_or_else(PoisonError::into_inner));
        let hook = reader.error_hook();
        for (key, err) in &reports {
            hook(key, err);
        }

        logger
    }
}

/// Parse log level string to Level
pub fn parse_log_level(level: &str) -> Result<Level> {
    match level.to_lowercase().as_str() {
        "trace" => Ok(Level::TRACE),
        "debug" => Ok(Level::DEBUG),
        "info" => Ok(Level::INFO),
        "warn" => Ok(Level::WARN),
        "error" => Ok(Level::ERROR),
        _ => anyhow::bail!("Invalid log level: {level}"),
    }
}

/// Report a malformed environment value as a `WARN` event.
///
/// This is the hook every reader starts with.
pub fn log_error_hook(key: &str, err: &EnvError) {
    tracing::warn!(
        key,
        kind = err.kind(),
        error = %err,
        "error while parsing environment variable"
    );
}

/// The logging hook as a shareable [`ErrorHook`].
pub fn default_error_hook() -> ErrorHook {
    Arc::new(log_error_hook)
}
