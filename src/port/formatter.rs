//! Date formatting port.

use chrono::{DateTime, FixedOffset, NaiveDate};

/// Renders dates for the viewer and reads dates the viewer typed.
///
/// Stands in for the host application's localization layer; the editor
/// never formats or parses dates itself.
pub trait DateFormatter: Send + Sync {
    /// Text shown on the field button and in read-only cells.
    fn display_date(&self, date: &DateTime<FixedOffset>) -> String;

    /// Text placed in an input when it gains focus.
    fn input_date(&self, date: &DateTime<FixedOffset>) -> String;

    /// Parse text typed into an input. `None` when it is not a date.
    fn parse_input(&self, text: &str) -> Option<NaiveDate>;

    /// Placeholder for an empty input.
    fn input_placeholder(&self) -> String;
}
