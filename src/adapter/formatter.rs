//! chrono-backed date formatter.

use std::fmt::Write;

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, FixedOffset, NaiveDate};

use crate::domain::DatePattern;
use crate::port::DateFormatter;

/// Display format used when none is configured, e.g. `Nov 14, 2023`.
pub const DEFAULT_DISPLAY_FORMAT: &str = "%b %-d, %Y";

/// Formats with a strftime string for display and a [`DatePattern`] for input.
#[derive(Debug, Clone)]
pub struct PatternFormatter {
    display_format: String,
    input: DatePattern,
}

impl Default for PatternFormatter {
    fn default() -> Self {
        Self {
            display_format: DEFAULT_DISPLAY_FORMAT.to_string(),
            input: DatePattern::default(),
        }
    }
}

impl PatternFormatter {
    pub fn new(display_format: impl Into<String>, input: DatePattern) -> Self {
        Self {
            display_format: display_format.into(),
            input,
        }
    }

    /// True when chrono understands every specifier in `format`.
    pub fn is_valid_format(format: &str) -> bool {
        !StrftimeItems::new(format).any(|item| matches!(item, Item::Error))
    }
}

impl DateFormatter for PatternFormatter {
    fn display_date(&self, date: &DateTime<FixedOffset>) -> String {
        let mut out = String::new();
        if write!(out, "{}", date.format(&self.display_format)).is_err() {
            // Invalid specifiers are rejected at config load; keep a readable fallback.
            return date.date_naive().to_string();
        }
        out
    }

    fn input_date(&self, date: &DateTime<FixedOffset>) -> String {
        self.input.format(date.date_naive())
    }

    fn parse_input(&self, text: &str) -> Option<NaiveDate> {
        self.input.parse_date(text)
    }

    fn input_placeholder(&self) -> String {
        self.input.placeholder()
    }
}
