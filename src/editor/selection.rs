//! Calendar range selection.

use chrono::{DateTime, FixedOffset, NaiveDate};

use crate::domain::LocalRange;

fn day_of(bound: &Option<DateTime<FixedOffset>>) -> Option<NaiveDate> {
    bound.as_ref().map(DateTime::date_naive)
}

/// Apply a day click to a displayed range.
///
/// Days compare by calendar date, the time of day is ignored:
///
/// - nothing set yet: the day becomes the start
/// - only an end: the day and the end form the span, earlier day first
/// - start and end on the same day, clicked again: collapses to that single date
/// - before the start: moves the start
/// - on the end: start and end both become the day
/// - otherwise the day becomes the end, swapping with the start if earlier
pub fn add_day_to_range(day: DateTime<FixedOffset>, range: &LocalRange) -> LocalRange {
    let clicked = day.date_naive();
    let (from, to) = (day_of(&range.from), day_of(&range.to));

    let (new_from, new_to) = match (range.from, range.to) {
        (None, None) => (Some(day), None),
        (None, Some(end)) if clicked <= end.date_naive() => (Some(day), Some(end)),
        (None, Some(end)) => (Some(end), Some(day)),
        (Some(_), Some(_)) if from == to && Some(clicked) == from => (None, Some(day)),
        (Some(_), Some(_)) if from.is_some_and(|f| clicked < f) => (Some(day), range.to),
        (Some(_), Some(_)) if Some(clicked) == to => (Some(day), Some(day)),
        (Some(start), _) if clicked < start.date_naive() => (Some(day), Some(start)),
        (Some(start), _) => (Some(start), Some(day)),
    };

    LocalRange {
        from: new_from,
        to: new_to,
        include_time: range.include_time,
    }
}
