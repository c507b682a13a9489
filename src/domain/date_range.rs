//! Due-date property value and its wire codec.
//!
//! A due date is stored on the card as a string. Three shapes exist:
//!
//! - `""` - unset
//! - `"1700000000000"` - legacy single date, epoch milliseconds
//! - `{"from":..,"to":..,"includeTime":..}` - JSON object, every key optional
//!
//! Decoding never fails: anything unreadable is treated as unset. Encoding
//! always produces the JSON shape (or `""`), the legacy integer form is
//! read-only.

use serde::{Deserialize, Serialize};
use tracing::debug;

/// A single date or an inclusive span of dates, in epoch milliseconds.
///
/// A range with only `to` set is a single selected date. When
/// `include_time` is false or absent the bounds are date-only values whose
/// UTC wall clock is the viewer's local wall clock (see
/// [`to_local_display`](super::to_local_display)).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateRange {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include_time: Option<bool>,
}

impl DateRange {
    /// A single selected date.
    #[must_use]
    pub const fn single(to: i64) -> Self {
        Self {
            from: None,
            to: Some(to),
            include_time: None,
        }
    }

    /// An inclusive span.
    #[must_use]
    pub const fn span(from: i64, to: i64) -> Self {
        Self {
            from: Some(from),
            to: Some(to),
            include_time: None,
        }
    }

    /// Builder-style setter for the `includeTime` flag.
    #[must_use]
    pub const fn with_include_time(mut self, include_time: bool) -> Self {
        self.include_time = Some(include_time);
        self
    }

    /// True when neither bound is set.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.from.is_none() && self.to.is_none()
    }

    /// True when a start bound is set.
    #[must_use]
    pub const fn is_range(&self) -> bool {
        self.from.is_some()
    }

    /// Whether bounds carry an explicit time of day.
    #[must_use]
    pub fn includes_time(&self) -> bool {
        self.include_time.unwrap_or(false)
    }

    /// Decode a serialized property value.
    ///
    /// Empty input yields the empty range, a plain integer is a legacy
    /// single date, anything else must be a JSON object. Malformed input
    /// is logged and treated as empty.
    pub fn decode(serialized: &str) -> Self {
        if serialized.is_empty() {
            return Self::default();
        }

        if let Ok(millis) = serialized.parse::<i64>() {
            return Self::single(millis);
        }

        match serde_json::from_str::<Self>(serialized) {
            Ok(range) => range,
            Err(e) => {
                debug!(error = %e, value = serialized, "Unreadable due date, treating as unset");
                Self::default()
            }
        }
    }

    /// Encode to the wire format; `""` when neither bound is set.
    #[must_use]
    pub fn encode(&self) -> String {
        if self.is_empty() {
            return String::new();
        }
        // Serializing a struct of integers and booleans cannot fail.
        serde_json::to_string(self).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_empty_is_empty_range() {
        assert_eq!(DateRange::decode(""), DateRange::default());
    }

    #[test]
    fn decode_garbage_is_empty_range() {
        assert_eq!(DateRange::decode("not json"), DateRange::default());
        assert_eq!(DateRange::decode("{\"from\":"), DateRange::default());
        assert_eq!(DateRange::decode("[1,2]"), DateRange::default());
        assert_eq!(DateRange::decode("null"), DateRange::default());
    }

    #[test]
    fn decode_wrong_field_types_is_empty_range() {
        assert_eq!(
            DateRange::decode(r#"{"from":"yesterday","to":1}"#),
            DateRange::default()
        );
        assert_eq!(DateRange::decode(r#"{"to":1.5}"#), DateRange::default());
    }

    #[test]
    fn decode_legacy_integer_is_single_date() {
        assert_eq!(
            DateRange::decode("1700000000000"),
            DateRange::single(1_700_000_000_000)
        );
    }

    #[test]
    fn decode_negative_legacy_integer() {
        assert_eq!(DateRange::decode("-86400000"), DateRange::single(-86_400_000));
    }

    #[test]
    fn decode_json_span() {
        let range = DateRange::decode(r#"{"from":1700000000000,"to":1700086400000}"#);
        assert_eq!(range, DateRange::span(1_700_000_000_000, 1_700_086_400_000));
    }

    #[test]
    fn decode_json_with_include_time() {
        let range = DateRange::decode(r#"{"to":5,"includeTime":true}"#);
        assert_eq!(range.to, Some(5));
        assert_eq!(range.from, None);
        assert!(range.includes_time());
    }

    #[test]
    fn decode_ignores_unknown_keys() {
        let range = DateRange::decode(r#"{"to":5,"label":"x"}"#);
        assert_eq!(range, DateRange::single(5));
    }

    #[test]
    fn encode_empty_is_empty_string() {
        assert_eq!(DateRange::default().encode(), "");
        assert_eq!(
            DateRange::default().with_include_time(true).encode(),
            "",
            "includeTime alone does not make a value"
        );
    }

    #[test]
    fn encode_span_matches_wire_format() {
        let range = DateRange::span(1_700_000_000_000, 1_700_086_400_000);
        assert_eq!(
            range.encode(),
            r#"{"from":1700000000000,"to":1700086400000}"#
        );
    }

    #[test]
    fn encode_single_date_omits_from() {
        assert_eq!(DateRange::single(42).encode(), r#"{"to":42}"#);
    }

    #[test]
    fn encode_include_time_uses_camel_case() {
        let range = DateRange::single(42).with_include_time(false);
        assert_eq!(range.encode(), r#"{"to":42,"includeTime":false}"#);
    }

    #[test]
    fn encode_never_emits_legacy_form() {
        let legacy = DateRange::decode("1700000000000");
        assert_eq!(legacy.encode(), r#"{"to":1700000000000}"#);
    }

    #[test]
    fn decode_reverses_encode() {
        let ranges = [
            DateRange::single(0),
            DateRange::single(-1),
            DateRange::span(1_700_000_000_000, 1_700_086_400_000),
            DateRange::span(10, 20).with_include_time(true),
            DateRange {
                from: Some(3),
                to: None,
                include_time: Some(false),
            },
            DateRange::single(i64::MAX),
        ];
        for range in ranges {
            assert_eq!(DateRange::decode(&range.encode()), range, "{range:?}");
        }
    }

    #[test]
    fn is_range_follows_from() {
        assert!(!DateRange::single(1).is_range());
        assert!(DateRange::span(1, 2).is_range());
        assert!(DateRange::default().is_empty());
    }
}
