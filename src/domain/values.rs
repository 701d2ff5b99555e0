//! Token rules for scalar values.

use super::errors::EnvError;

/// Parses a boolean using the six-token allow-list.
///
/// Matching is ASCII case-insensitive. `true`, `t` and `1` mean true;
/// `false`, `f` and `0` mean false. Spellings such as `yes`/`no` or
/// `on`/`off` are rejected.
pub fn parse_bool(raw: &str) -> Result<bool, EnvError> {
    match raw.to_ascii_lowercase().as_str() {
        "true" | "t" | "1" => Ok(true),
        "false" | "f" | "0" => Ok(false),
        _ => Err(EnvError::UnknownBool {
            value: raw.to_string(),
        }),
    }
}
