//! Due-date property type.

use chrono::{Days, NaiveDate};
use chrono_tz::Tz;

use super::{CalculationOption, DisplayContext, PropertyKind, PropertyType, VALUE_CALCULATIONS};
use crate::domain::{to_local_display, Card, DateRange, LocalRange, PropertyValue};
use crate::port::DateFormatter;

/// Separator between the two ends of a span.
pub const RANGE_SEPARATOR: &str = " → ";

/// Render a displayed range: `from → to` for spans, the single date otherwise.
pub fn display_range(local: &LocalRange, formatter: &dyn DateFormatter) -> String {
    match (&local.from, &local.to) {
        (Some(from), Some(to)) => format!(
            "{}{RANGE_SEPARATOR}{}",
            formatter.display_date(from),
            formatter.display_date(to)
        ),
        (Some(date), None) | (None, Some(date)) => formatter.display_date(date),
        (None, None) => String::new(),
    }
}

/// A single due date or an inclusive span of dates.
#[derive(Debug, Clone, Copy, Default)]
pub struct DueDateProperty;

impl DueDateProperty {
    fn local_range(value: Option<&PropertyValue>, tz: &Tz) -> LocalRange {
        let range = value
            .and_then(PropertyValue::as_text)
            .map(DateRange::decode)
            .unwrap_or_default();
        to_local_display(&range, range.includes_time(), tz)
    }
}

impl PropertyType for DueDateProperty {
    fn kind(&self) -> PropertyKind {
        PropertyKind::DueDate
    }

    fn name(&self) -> &'static str {
        "Due Date"
    }

    fn is_date(&self) -> bool {
        true
    }

    fn calculation_options(&self) -> &'static [CalculationOption] {
        VALUE_CALCULATIONS
    }

    fn display_value(&self, value: Option<&PropertyValue>, ctx: &DisplayContext<'_>) -> String {
        display_range(&Self::local_range(value, &ctx.tz), ctx.formatter)
    }

    /// Start day of the span; a single date starts on itself. Unset values
    /// fall back to the day the card was created.
    fn date_from(&self, value: Option<&PropertyValue>, card: &Card, tz: &Tz) -> Option<NaiveDate> {
        let local = Self::local_range(value, tz);
        let day = local
            .from
            .or(local.to)
            .map_or_else(|| card.created_local_date(tz), |d| d.date_naive());
        Some(day)
    }

    /// Exclusive end: the day after the last covered day.
    fn date_to(&self, value: Option<&PropertyValue>, card: &Card, tz: &Tz) -> Option<NaiveDate> {
        let local = Self::local_range(value, tz);
        let last = local
            .to
            .or(local.from)
            .map_or_else(|| card.created_local_date(tz), |d| d.date_naive());
        last.checked_add_days(Days::new(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::PatternFormatter;
    use chrono_tz::{America, Asia, Tz};

    // 2023-11-14T00:00:00Z / 2023-11-16T00:00:00Z
    const NOV_14: i64 = 1_699_920_000_000;
    const NOV_16: i64 = 1_700_092_800_000;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn text(s: &str) -> PropertyValue {
        PropertyValue::from(s)
    }

    #[test]
    fn display_value_single_date() {
        let formatter = PatternFormatter::default();
        let ctx = DisplayContext::new(America::New_York, &formatter);
        let value = text(&DateRange::single(NOV_14).encode());

        assert_eq!(DueDateProperty.display_value(Some(&value), &ctx), "Nov 14, 2023");
    }

    #[test]
    fn display_value_legacy_integer() {
        let formatter = PatternFormatter::default();
        let ctx = DisplayContext::new(Asia::Tokyo, &formatter);
        let value = text(&NOV_14.to_string());

        assert_eq!(DueDateProperty.display_value(Some(&value), &ctx), "Nov 14, 2023");
    }

    #[test]
    fn display_value_span() {
        let formatter = PatternFormatter::default();
        let ctx = DisplayContext::new(Tz::UTC, &formatter);
        let value = text(&DateRange::span(NOV_14, NOV_16).encode());

        assert_eq!(
            DueDateProperty.display_value(Some(&value), &ctx),
            "Nov 14, 2023 → Nov 16, 2023"
        );
    }

    #[test]
    fn display_value_unset_or_garbage_is_empty() {
        let formatter = PatternFormatter::default();
        let ctx = DisplayContext::new(Tz::UTC, &formatter);

        assert_eq!(DueDateProperty.display_value(None, &ctx), "");
        assert_eq!(DueDateProperty.display_value(Some(&text("oops")), &ctx), "");
        let list = PropertyValue::List(vec![NOV_14.to_string()]);
        assert_eq!(DueDateProperty.display_value(Some(&list), &ctx), "");
    }

    #[test]
    fn date_span_of_range_is_inclusive() {
        let card = Card::new("c1", "b1");
        let value = text(&DateRange::span(NOV_14, NOV_16).encode());

        let prop = DueDateProperty;
        assert_eq!(prop.date_from(Some(&value), &card, &America::Chicago), Some(day(2023, 11, 14)));
        assert_eq!(prop.date_to(Some(&value), &card, &America::Chicago), Some(day(2023, 11, 17)));
    }

    #[test]
    fn date_span_of_single_date_is_one_day() {
        let card = Card::new("c1", "b1");
        let value = text(&DateRange::single(NOV_16).encode());

        let prop = DueDateProperty;
        assert_eq!(prop.date_from(Some(&value), &card, &Tz::UTC), Some(day(2023, 11, 16)));
        assert_eq!(prop.date_to(Some(&value), &card, &Tz::UTC), Some(day(2023, 11, 17)));
    }

    #[test]
    fn date_span_unset_falls_back_to_creation_day() {
        let card = Card::new("c1", "b1").with_create_at(NOV_16 + 3_600_000);

        let prop = DueDateProperty;
        assert_eq!(prop.date_from(None, &card, &Tz::UTC), Some(day(2023, 11, 16)));
        assert_eq!(prop.date_to(None, &card, &Tz::UTC), Some(day(2023, 11, 17)));
    }

    #[test]
    fn include_time_values_use_viewer_calendar() {
        // 2023-11-14T20:00:00Z is already Nov 15 in Tokyo.
        let value = text(&DateRange::single(NOV_14 + 20 * 3_600_000).with_include_time(true).encode());
        let card = Card::new("c1", "b1");

        assert_eq!(
            DueDateProperty.date_from(Some(&value), &card, &Asia::Tokyo),
            Some(day(2023, 11, 15))
        );
    }

    #[test]
    fn capabilities() {
        let prop = DueDateProperty;
        assert!(prop.is_date());
        assert_eq!(prop.kind(), PropertyKind::DueDate);
        assert_eq!(prop.calculation_options().len(), 8);
        assert_eq!(prop.calculation_options()[0], CalculationOption::None);
    }
}
