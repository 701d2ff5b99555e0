//! Command execution: resolve one variable through an [`EnvReader`].

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use serde::Serialize;
use serde_json::json;

use super::output::CommandOutput;
use super::Commands;
use crate::domain::duration::format_duration;
use crate::domain::errors::EnvError;
use crate::domain::ports::{EnvSource, ErrorHook};
use crate::services::EnvReader;

/// Where a resolved value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    /// The variable was set and parsed cleanly.
    Environment,
    /// The variable was unset, empty or malformed.
    Default,
}

/// A resolved variable, ready to print.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Resolution {
    /// Variable name that was looked up.
    pub key: String,
    /// Accessor type: `string`, `bool`, `int`, `float` or `duration`.
    #[serde(rename = "type")]
    pub kind: &'static str,
    /// Resolved value.
    pub value: serde_json::Value,
    /// Whether `value` came from the environment or the default.
    pub source: ValueSource,
}

impl CommandOutput for Resolution {
    fn to_human(&self) -> String {
        match &self.value {
            serde_json::Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }

    fn to_json(&self) -> serde_json::Value {
        json!({
            "key": self.key,
            "type": self.kind,
            "value": self.value,
            "source": self.source,
        })
    }
}

/// JSON has no infinity or NaN, so non-finite floats are kept as strings.
fn float_value(value: f64) -> serde_json::Value {
    if value.is_finite() {
        json!(value)
    } else {
        json!(value.to_string())
    }
}

/// Resolve the variable named by `command` using `reader`'s source.
///
/// Malformed values still go to the reader's hook; the default is used and
/// the resolution is marked as coming from the default.
pub fn execute<E: EnvSource>(command: &Commands, reader: &EnvReader<E>) -> Resolution {
    let reported = Arc::new(AtomicBool::new(false));
    let inner = Arc::clone(reader.error_hook());
    let flag = Arc::clone(&reported);
    let hook: ErrorHook = Arc::new(move |key: &str, err: &EnvError| {
        flag.store(true, Ordering::Relaxed);
        inner(key, err);
    });
    let tracking = EnvReader::with_source(reader.source()).with_error_hook(hook);

    let (key, kind, value) = match command {
        Commands::String(args) => (
            &args.key,
            "string",
            json!(tracking.string(&args.key, &args.default)),
        ),
        Commands::Bool(args) => (
            &args.key,
            "bool",
            json!(tracking.bool(&args.key, args.default)),
        ),
        Commands::Int(args) => (
            &args.key,
            "int",
            json!(tracking.int(&args.key, args.default)),
        ),
        Commands::Float(args) => (
            &args.key,
            "float",
            float_value(tracking.float64(&args.key, args.default)),
        ),
        Commands::Duration(args) => (
            &args.key,
            "duration",
            json!(format_duration(tracking.duration(&args.key, args.default))),
        ),
    };

    let present = reader.source().var(key).is_some_and(|raw| !raw.is_empty());
    let source = if present && !reported.load(Ordering::Relaxed) {
        ValueSource::Environment
    } else {
        ValueSource::Default
    };

    tracing::debug!(key = %key, kind, ?source, "resolved environment variable");

    Resolution {
        key: key.clone(),
        kind,
        value,
        source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::output::render;
    use crate::cli::{BoolArgs, DurationArgs, FloatArgs, IntArgs, StringArgs};
    use crate::infrastructure::env::MapEnv;
    use chrono::Duration;

    fn quiet_reader(pairs: &[(&str, &str)]) -> EnvReader<MapEnv> {
        EnvReader::with_source(MapEnv::from_pairs(pairs.iter().copied()))
            .with_error_hook(Arc::new(|_: &str, _: &EnvError| {}))
    }

    #[test]
    fn test_execute_string_from_environment() {
        let reader = quiet_reader(&[("NAME", "typenv")]);
        let command = Commands::String(StringArgs {
            key: "NAME".to_string(),
            default: "fallback".to_string(),
        });

        let resolution = execute(&command, &reader);
        assert_eq!(resolution.value, json!("typenv"));
        assert_eq!(resolution.source, ValueSource::Environment);
        assert_eq!(render(&resolution, false), "typenv");
    }

    #[test]
    fn test_execute_missing_uses_default() {
        let reader = quiet_reader(&[]);
        let command = Commands::Int(IntArgs {
            key: "WORKERS".to_string(),
            default: 4,
        });

        let resolution = execute(&command, &reader);
        assert_eq!(resolution.value, json!(4));
        assert_eq!(resolution.source, ValueSource::Default);
    }

    #[test]
    fn test_execute_malformed_marks_default_and_forwards_to_hook() {
        let calls = Arc::new(AtomicBool::new(false));
        let seen = Arc::clone(&calls);
        let reader = EnvReader::with_source(MapEnv::from_pairs([("FLAG", "yes")]))
            .with_error_hook(Arc::new(move |key: &str, _: &EnvError| {
                assert_eq!(key, "FLAG");
                seen.store(true, Ordering::Relaxed);
            }));
        let command = Commands::Bool(BoolArgs {
            key: "FLAG".to_string(),
            default: true,
        });

        let resolution = execute(&command, &reader);
        assert_eq!(resolution.value, json!(true));
        assert_eq!(resolution.source, ValueSource::Default);
        assert!(calls.load(Ordering::Relaxed));
    }

    #[test]
    fn test_execute_duration_renders_canonical_form() {
        let reader = quiet_reader(&[("TIMEOUT", "90m")]);
        let command = Commands::Duration(DurationArgs {
            key: "TIMEOUT".to_string(),
            default: Duration::seconds(5),
        });

        let resolution = execute(&command, &reader);
        assert_eq!(resolution.value, json!("1h30m0s"));
        assert_eq!(resolution.kind, "duration");
    }

    #[test]
    fn test_execute_non_finite_float_renders_as_string() {
        let reader = quiet_reader(&[("RATE", "inf"), ("RATIO", "NaN"), ("FLOOR", "-infinity")]);
        let float = |key: &str| {
            Commands::Float(FloatArgs {
                key: key.to_string(),
                default: 1.0,
            })
        };

        let rate = execute(&float("RATE"), &reader);
        assert_eq!(rate.value, json!("inf"));
        assert_eq!(rate.source, ValueSource::Environment);
        assert_eq!(render(&rate, false), "inf");
        let rendered: serde_json::Value = serde_json::from_str(&render(&rate, true)).unwrap();
        assert_eq!(rendered["value"], json!("inf"));
        assert_eq!(rendered["source"], json!("environment"));

        let ratio = execute(&float("RATIO"), &reader);
        assert_eq!(ratio.value, json!("NaN"));
        assert_eq!(ratio.source, ValueSource::Environment);
        assert_eq!(render(&ratio, false), "NaN");

        let floor = execute(&float("FLOOR"), &reader);
        assert_eq!(floor.value, json!("-inf"));
    }

    #[test]
    fn test_json_rendering() {
        let reader = quiet_reader(&[("RATE", "1e3")]);
        let command = Commands::Float(FloatArgs {
            key: "RATE".to_string(),
            default: 0.0,
        });

        let resolution = execute(&command, &reader);
        let rendered: serde_json::Value =
            serde_json::from_str(&render(&resolution, true)).unwrap();
        assert_eq!(
            rendered,
            json!({
                "key": "RATE",
                "type": "float",
                "value": 1000.0,
                "source": "environment",
            })
        );
    }
}
