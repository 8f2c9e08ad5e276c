//! Property tests for the normalizer.
//!
//! These tests validate type-inference and sanitization invariants across
//! generated input using property-based testing.

use effective_type::{is_numeric, normalize, Key, Options, RawValue, Value, HTML_DENYLIST};
use proptest::prelude::*;

// Strategy: every combination of the three flags
fn arb_options() -> impl Strategy<Value = Options> {
    (any::<bool>(), any::<bool>(), any::<bool>()).prop_map(|(trim, force, html)| {
        Options::new()
            .with_trim(trim)
            .with_force_string(force)
            .with_sanitize_html(html)
    })
}

// Strategy: flat raw scalars
fn arb_scalar() -> impl Strategy<Value = RawValue> {
    prop_oneof![
        Just(RawValue::Null),
        any::<bool>().prop_map(RawValue::Bool),
        any::<i64>().prop_map(RawValue::Int),
        prop::num::f64::NORMAL.prop_map(RawValue::Float),
        ".{0,20}".prop_map(RawValue::String),
    ]
}

// Strategy: text that is already free of markup, entities and denylisted characters
fn arb_clean_text() -> impl Strategy<Value = String> {
    prop::string::string_regex("[A-Za-z0-9 .,;:!?'=_/-]{0,40}").unwrap()
}

proptest! {
    /// Property: null is returned for null regardless of options
    #[test]
    fn proptest_null_is_always_null(options in arb_options()) {
        prop_assert_eq!(normalize(&RawValue::Null, options), Value::Null);
    }

    /// Property: native integers keep value and kind
    #[test]
    fn proptest_native_int_round_trips(number in any::<i64>(), trim in any::<bool>()) {
        let options = Options::new().with_trim(trim);
        prop_assert_eq!(normalize(&RawValue::Int(number), options), Value::Int(number));
    }

    /// Property: native finite floats keep value and kind
    #[test]
    fn proptest_native_float_round_trips(number in prop::num::f64::NORMAL) {
        prop_assert_eq!(normalize(&RawValue::Float(number), Options::new()), Value::Float(number));
    }

    /// Property: an integer spelled as text, with padding, coerces back to the integer
    #[test]
    fn proptest_int_text_coerces(
        number in any::<i64>(),
        left in "[ \t]{0,3}",
        right in "[ \t\n]{0,3}"
    ) {
        let text = format!("{}{}{}", left, number, right);
        prop_assert!(is_numeric(&text));
        prop_assert_eq!(normalize(&RawValue::from(text), Options::new()), Value::Int(number));
    }

    /// Property: text containing a letter that can never be part of a numeral stays text
    #[test]
    fn proptest_non_numeric_text_is_unchanged(
        text in prop::string::string_regex("[0-9.]{0,4}[g-zG-Z][a-zA-Z0-9 .]{0,10}").unwrap()
    ) {
        prop_assert!(!is_numeric(&text));
        prop_assert_eq!(normalize(&RawValue::from(text.clone()), Options::new()), Value::String(text));
    }

    /// Property: force_string always yields a string for non-null scalars
    #[test]
    fn proptest_force_string_yields_string(scalar in arb_scalar(), trim in any::<bool>(), html in any::<bool>()) {
        let options = Options::new()
            .with_force_string(true)
            .with_trim(trim)
            .with_sanitize_html(html);
        let result = normalize(&scalar, options);

        if scalar == RawValue::Null {
            prop_assert_eq!(result, Value::Null);
        } else {
            prop_assert!(result.as_str().is_some(), "expected string, got {:?}", result);
        }
    }

    /// Property: trimmed string output has no surrounding whitespace
    #[test]
    fn proptest_trimmed_output_has_no_padding(text in "[ \t\r\n]{0,3}[a-z]{1,10}[ \t\r\n]{0,3}") {
        let result = normalize(&RawValue::from(text.clone()), Options::new().with_trim(true));
        prop_assert_eq!(result, Value::String(text.trim().to_string()));
    }

    /// Property: HTML sanitized output never contains denylisted characters
    #[test]
    fn proptest_sanitized_output_is_clean(text in ".{0,60}") {
        let options = Options::new().with_force_string(true).with_sanitize_html(true);
        let result = normalize(&RawValue::from(text), options);
        let output = result.as_str().expect("forced string");

        for c in output.chars() {
            prop_assert!(!HTML_DENYLIST.contains(&c), "denylisted {:?} in {:?}", c, output);
        }
    }

    /// Property: clean text is left untouched and sanitization is idempotent on it
    #[test]
    fn proptest_clean_text_sanitization_is_idempotent(text in arb_clean_text()) {
        let options = Options::new().with_force_string(true).with_sanitize_html(true);

        let once = normalize(&RawValue::from(text.clone()), options);
        prop_assert_eq!(&once, &Value::String(text.clone()));

        let twice = normalize(&RawValue::from(once.as_str().unwrap_or_default()), options);
        prop_assert_eq!(twice, once);
    }

    /// Property: collections keep every key in input order
    #[test]
    fn proptest_collections_preserve_keys(
        entries in prop::collection::vec(("[a-z]{1,6}", arb_scalar()), 0..8),
        options in arb_options()
    ) {
        let raw = RawValue::map(entries.clone());
        let result = normalize(&raw, options);

        let normalized = result.entries().expect("map stays a map");
        let keys: Vec<&Key> = normalized.iter().map(|(k, _)| k).collect();
        let expected: Vec<Key> = entries.iter().map(|(k, _)| Key::from(k.as_str())).collect();
        prop_assert_eq!(keys, expected.iter().collect::<Vec<_>>());

        for ((_, raw_child), (_, child)) in entries.iter().zip(normalized) {
            prop_assert_eq!(child, &normalize(raw_child, options));
        }
    }
}
