//! Duration literal grammar.
//!
//! A duration is an optional sign followed by one or more `number unit`
//! pairs, e.g. `1h30m`, `1.5s`, `-2m3.25s`. The bare literal `0` is also
//! accepted. Recognized units are `ns`, `us` (or `µs`/`μs`), `ms`, `s`, `m`
//! and `h`. The total must fit in a signed 64-bit nanosecond count.

use chrono::Duration;

use super::errors::DurationError;

const NANOSECOND: u128 = 1;
const MICROSECOND: u128 = 1_000 * NANOSECOND;
const MILLISECOND: u128 = 1_000 * MICROSECOND;
const SECOND: u128 = 1_000 * MILLISECOND;
const MINUTE: u128 = 60 * SECOND;
const HOUR: u128 = 60 * MINUTE;

/// Magnitude of `i64::MIN` in nanoseconds; the largest total a negative
/// duration may reach. Positive totals must stay one below it.
const MAX_MAGNITUDE: u128 = 1 << 63;

/// Fraction digits past this point are below nanosecond resolution for
/// every unit and are truncated.
const MAX_FRACTION_DIGITS: usize = 19;

fn unit_nanos(unit: &str) -> Option<u128> {
    match unit {
        "ns" => Some(NANOSECOND),
        "us" | "\u{b5}s" | "\u{3bc}s" => Some(MICROSECOND),
        "ms" => Some(MILLISECOND),
        "s" => Some(SECOND),
        "m" => Some(MINUTE),
        "h" => Some(HOUR),
        _ => None,
    }
}

/// Splits `s` into its leading run of ASCII digits and the remainder.
fn split_digits(s: &str) -> (&str, &str) {
    let end = s.bytes().position(|b| !b.is_ascii_digit()).unwrap_or(s.len());
    s.split_at(end)
}

/// Nanoseconds contributed by one `whole.fraction unit` component, or `None`
/// when it alone exceeds the representable range.
fn component_nanos(whole: &str, fraction: &str, scale: u128) -> Option<u128> {
    let mut value: u128 = 0;
    for digit in whole.bytes() {
        value = value.checked_mul(10)?.checked_add(u128::from(digit - b'0'))?;
        if value > MAX_MAGNITUDE {
            return None;
        }
    }
    let mut nanos = value.checked_mul(scale)?;

    let fraction = &fraction[..fraction.len().min(MAX_FRACTION_DIGITS)];
    if !fraction.is_empty() {
        let mut numerator: u128 = 0;
        let mut denominator: u128 = 1;
        for digit in fraction.bytes() {
            numerator = numerator * 10 + u128::from(digit - b'0');
            denominator *= 10;
        }
        nanos = nanos.checked_add(numerator * scale / denominator)?;
    }

    Some(nanos)
}

/// Parses a duration literal such as `1h30m`, `500ms` or `-2s`.
///
/// # Examples
///
/// ```
/// use chrono::Duration;
/// use typenv::parse_duration;
///
/// assert_eq!(parse_duration("1h30m").unwrap(), Duration::minutes(90));
/// assert_eq!(parse_duration("-1.5s").unwrap(), Duration::milliseconds(-1500));
/// assert!(parse_duration("10").is_err());
/// ```
pub fn parse_duration(input: &str) -> Result<Duration, DurationError> {
    let invalid = || DurationError::Invalid(input.to_string());
    let overflow = || DurationError::Overflow(input.to_string());

    let (negative, mut rest) = match input.as_bytes().first() {
        Some(b'-') => (true, &input[1..]),
        Some(b'+') => (false, &input[1..]),
        _ => (false, input),
    };

    if rest == "0" {
        return Ok(Duration::zero());
    }
    if rest.is_empty() {
        return Err(invalid());
    }

    let mut total: u128 = 0;
    while !rest.is_empty() {
        let (whole, after_whole) = split_digits(rest);
        let (fraction, after_number) = match after_whole.strip_prefix('.') {
            Some(after_dot) => split_digits(after_dot),
            None => ("", after_whole),
        };
        if whole.is_empty() && fraction.is_empty() {
            return Err(invalid());
        }

        let unit_len = after_number
            .find(|c: char| c == '.' || c.is_ascii_digit())
            .unwrap_or(after_number.len());
        if unit_len == 0 {
            return Err(DurationError::MissingUnit(input.to_string()));
        }
        let (unit, remainder) = after_number.split_at(unit_len);
        let scale = unit_nanos(unit).ok_or_else(|| DurationError::UnknownUnit {
            unit: unit.to_string(),
            input: input.to_string(),
        })?;

        let nanos = component_nanos(whole, fraction, scale).ok_or_else(overflow)?;
        total = total.checked_add(nanos).ok_or_else(overflow)?;
        if total > MAX_MAGNITUDE {
            return Err(overflow());
        }
        rest = remainder;
    }

    let nanos = if negative {
        if total == MAX_MAGNITUDE {
            i64::MIN
        } else {
            -i64::try_from(total).map_err(|_| overflow())?
        }
    } else {
        i64::try_from(total).map_err(|_| overflow())?
    };

    Ok(Duration::nanoseconds(nanos))
}

/// Renders `whole.fraction` with `digits` fractional places, trailing zeros
/// removed.
fn with_fraction(whole: u128, fraction: u128, digits: usize) -> String {
    if fraction == 0 {
        return whole.to_string();
    }
    let padded = format!("{fraction:0digits$}");
    format!("{whole}.{}", padded.trim_end_matches('0'))
}

/// Formats a duration in the same unit grammar [`parse_duration`] accepts.
///
/// Durations under one second use the largest fitting sub-second unit
/// (`1.5µs`, `500ms`); longer ones use `h`, `m` and `s` (`1h30m0s`).
/// The zero duration is `0s`.
pub fn format_duration(duration: Duration) -> String {
    let total = i128::from(duration.num_seconds()) * 1_000_000_000
        + i128::from(duration.subsec_nanos());
    if total == 0 {
        return "0s".to_string();
    }

    let sign = if total < 0 { "-" } else { "" };
    let nanos = total.unsigned_abs();

    let body = if nanos < MICROSECOND {
        format!("{nanos}ns")
    } else if nanos < MILLISECOND {
        format!(
            "{}\u{b5}s",
            with_fraction(nanos / MICROSECOND, nanos % MICROSECOND, 3)
        )
    } else if nanos < SECOND {
        format!(
            "{}ms",
            with_fraction(nanos / MILLISECOND, nanos % MILLISECOND, 6)
        )
    } else {
        let whole_secs = nanos / SECOND;
        let hours = whole_secs / 3600;
        let minutes = (whole_secs / 60) % 60;
        let seconds = with_fraction(whole_secs % 60, nanos % SECOND, 9);

        let mut out = String::new();
        if hours > 0 {
            out.push_str(&format!("{hours}h"));
        }
        if hours > 0 || minutes > 0 {
            out.push_str(&format!("{minutes}m"));
        }
        out.push_str(&format!("{seconds}s"));
        out
    };

    format!("{sign}{body}")
}
