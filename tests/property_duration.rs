use chrono::Duration;
use proptest::prelude::*;
use std::sync::Arc;
use typenv::{format_duration, parse_duration, EnvError, EnvReader, MapEnv};

proptest! {
    /// Property: formatting then parsing returns the same duration
    #[test]
    fn prop_format_parse_roundtrip(nanos in any::<i64>()) {
        let duration = Duration::nanoseconds(nanos);
        prop_assert_eq!(parse_duration(&format_duration(duration)).unwrap(), duration);
    }

    /// Property: a single `<n><unit>` component scales exactly
    #[test]
    fn prop_single_component_scales(value in 0i64..1_000_000, unit_index in 0usize..6) {
        let (unit, expected) = [
            ("ns", Duration::nanoseconds(value)),
            ("us", Duration::microseconds(value)),
            ("ms", Duration::milliseconds(value)),
            ("s", Duration::seconds(value)),
            ("m", Duration::minutes(value)),
            ("h", Duration::hours(value)),
        ][unit_index];

        prop_assert_eq!(parse_duration(&format!("{value}{unit}")).unwrap(), expected);
        prop_assert_eq!(parse_duration(&format!("-{value}{unit}")).unwrap(), -expected);
    }

    /// Property: components add up regardless of order
    #[test]
    fn prop_components_commute(h in 0i64..1000, m in 0i64..1000, s in 0i64..1000) {
        let forward = parse_duration(&format!("{h}h{m}m{s}s")).unwrap();
        let backward = parse_duration(&format!("{s}s{m}m{h}h")).unwrap();
        prop_assert_eq!(forward, backward);
        prop_assert_eq!(forward, Duration::hours(h) + Duration::minutes(m) + Duration::seconds(s));
    }

    /// Property: the reader never panics and reports at most once per call
    #[test]
    fn prop_reader_is_total(raw in ".*") {
        let count = Arc::new(std::sync::atomic::AtomicUsize::new(0));
        let seen = Arc::clone(&count);
        let reader = EnvReader::with_source(MapEnv::from_pairs([("VALUE", raw.clone())]))
            .with_error_hook(Arc::new(move |_: &str, _: &EnvError| {
                seen.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
            }));

        let _ = reader.string("VALUE", "def");
        let _ = reader.bool("VALUE", false);
        let _ = reader.int("VALUE", 0);
        let _ = reader.float64("VALUE", 0.0);
        let _ = reader.duration("VALUE", Duration::zero());

        let reports = count.load(std::sync::atomic::Ordering::SeqCst);
        prop_assert!(reports <= 4);
        if raw.is_empty() {
            prop_assert_eq!(reports, 0);
        }
    }
}
