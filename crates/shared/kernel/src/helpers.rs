//! String, time and validation helpers.

use chrono::Local;
use serde_json::{Map, Value};
use std::borrow::Cow;

/// Limit used by [`truncate_string_default`].
pub const DEFAULT_MAX_LENGTH: usize = 100;
/// Marker appended to truncated text.
pub const ELLIPSIS: &str = "...";

const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

/// Returns the current local time as an ISO-8601 string without offset,
/// e.g. `2025-12-30T06:11:17.123456`.
#[must_use]
pub fn get_timestamp() -> String {
    Local::now().naive_local().format(TIMESTAMP_FORMAT).to_string()
}

/// Returns `true` when the value still has content after trimming whitespace.
#[must_use]
pub fn validate_input(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Builds a new mapping from `a` overlaid with `b`. Keys present in both take `b`'s value.
#[must_use]
pub fn merge_dicts(a: &Map<String, Value>, b: &Map<String, Value>) -> Map<String, Value> {
    let mut merged = a.clone();
    merged.extend(b.iter().map(|(key, value)| (key.clone(), value.clone())));
    merged
}

/// Truncates `text` to at most `max_length` characters, ending with [`ELLIPSIS`] when cut.
///
/// Lengths count characters, not bytes. Text that already fits is borrowed unchanged.
/// When `max_length` is too small to hold the marker, the text is cut to `max_length`
/// characters with no marker.
#[must_use]
pub fn truncate_string(text: &str, max_length: usize) -> Cow<'_, str> {
    if text.chars().count() <= max_length {
        return Cow::Borrowed(text);
    }

    let ellipsis_len = ELLIPSIS.chars().count();
    let Some(keep) = max_length.checked_sub(ellipsis_len) else {
        return Cow::Owned(text.chars().take(max_length).collect());
    };

    let mut truncated: String = text.chars().take(keep).collect();
    truncated.push_str(ELLIPSIS);
    Cow::Owned(truncated)
}

/// [`truncate_string`] with [`DEFAULT_MAX_LENGTH`].
#[must_use]
pub fn truncate_string_default(text: &str) -> Cow<'_, str> {
    truncate_string(text, DEFAULT_MAX_LENGTH)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;
    use serde_json::json;

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("expected an object, got {other}"),
        }
    }

    #[test]
    fn test_timestamp_is_iso8601() {
        let ts = get_timestamp();
        assert!(
            NaiveDateTime::parse_from_str(&ts, "%Y-%m-%dT%H:%M:%S%.f").is_ok(),
            "unexpected timestamp format: {ts}"
        );
        assert_eq!(ts.len(), "2025-12-30T06:11:17.123456".len());
    }

    #[test]
    fn test_validate_input() {
        assert!(!validate_input(""));
        assert!(!validate_input("   "));
        assert!(!validate_input("\t\n"));
        assert!(validate_input("x"));
        assert!(validate_input("  x  "));
    }

    #[test]
    fn test_merge_dicts_right_precedence() {
        let a = object(json!({ "a": 1 }));
        let b = object(json!({ "a": 2, "b": 3 }));

        assert_eq!(merge_dicts(&a, &b), object(json!({ "a": 2, "b": 3 })));
        assert_eq!(a, object(json!({ "a": 1 })));
        assert_eq!(b, object(json!({ "a": 2, "b": 3 })));
    }

    #[test]
    fn test_merge_dicts_with_empty() {
        let x = object(json!({ "k": "v", "n": [1, 2] }));
        assert_eq!(merge_dicts(&x, &Map::new()), x);
        assert_eq!(merge_dicts(&Map::new(), &x), x);
    }

    #[test]
    fn test_truncate_short_text_is_borrowed() {
        assert!(matches!(truncate_string("hello", 100), Cow::Borrowed("hello")));
        assert_eq!(truncate_string("hello", 5), "hello");
        assert_eq!(truncate_string_default("hello"), "hello");
    }

    #[test]
    fn test_truncate_long_text() {
        assert_eq!(truncate_string("abcdefghij", 5), "ab...");
        assert_eq!(truncate_string("abcdefghij", 3), "...");
        assert_eq!(truncate_string_default(&"z".repeat(150)).chars().count(), 100);
    }

    #[test]
    fn test_truncate_limit_below_marker() {
        assert_eq!(truncate_string("abcdefghij", 2), "ab");
        assert_eq!(truncate_string("abcdefghij", 0), "");
    }

    #[test]
    fn test_truncate_counts_characters() {
        assert_eq!(truncate_string("héllo wörld", 6), "hél...");
        assert_eq!(truncate_string("日本語テキスト", 7), "日本語テキスト");
    }
}
