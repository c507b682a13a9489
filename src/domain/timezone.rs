//! Conversion between stored due-date values and the viewer's calendar.
//!
//! Date-only values are stored so that their UTC wall clock equals the wall
//! clock the viewer picked. Displaying adds the viewer's offset back, storing
//! subtracts it. The offset is resolved for the wall clock itself rather than
//! for a UTC instant, so DST transitions round-trip exactly.

use chrono::{DateTime, FixedOffset, LocalResult, NaiveDateTime, Offset, TimeZone, Utc};
use tracing::warn;

use super::DateRange;

/// A due date as the viewer sees it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LocalRange {
    pub from: Option<DateTime<FixedOffset>>,
    pub to: Option<DateTime<FixedOffset>>,
    /// Carried through unchanged from the stored value.
    pub include_time: Option<bool>,
}

impl LocalRange {
    /// True when a start bound is displayed.
    #[must_use]
    pub const fn is_range(&self) -> bool {
        self.from.is_some()
    }
}

/// Place a wall-clock time in `tz`.
///
/// Ambiguous times (DST fall-back) take the earlier offset. Times inside a
/// DST gap keep their wall clock and take the offset in force at that UTC
/// instant, so the result never shifts to a different day.
pub fn local_datetime<Z: TimeZone>(wall: NaiveDateTime, tz: &Z) -> Option<DateTime<FixedOffset>> {
    let offset = match tz.offset_from_local_datetime(&wall) {
        LocalResult::Single(offset) | LocalResult::Ambiguous(offset, _) => offset.fix(),
        LocalResult::None => tz.offset_from_utc_datetime(&wall).fix(),
    };
    offset.from_local_datetime(&wall).single()
}

/// Convert a stored range to the viewer's calendar.
///
/// With `include_time` the instants are kept and only expressed in `tz`.
/// Otherwise the stored UTC wall clock becomes the local wall clock.
/// Bounds chrono cannot represent are dropped.
pub fn to_local_display<Z: TimeZone>(range: &DateRange, include_time: bool, tz: &Z) -> LocalRange {
    LocalRange {
        from: range
            .from
            .and_then(|millis| display_bound(millis, include_time, tz)),
        to: range
            .to
            .and_then(|millis| display_bound(millis, include_time, tz)),
        include_time: range.include_time,
    }
}

/// Inverse of [`to_local_display`].
#[must_use]
pub fn to_stored_utc(local: &LocalRange, include_time: bool) -> DateRange {
    DateRange {
        from: local.from.map(|bound| stored_bound(&bound, include_time)),
        to: local.to.map(|bound| stored_bound(&bound, include_time)),
        include_time: local.include_time,
    }
}

fn display_bound<Z: TimeZone>(
    millis: i64,
    include_time: bool,
    tz: &Z,
) -> Option<DateTime<FixedOffset>> {
    let Some(instant) = DateTime::<Utc>::from_timestamp_millis(millis) else {
        warn!(millis, "Due date outside representable range, dropping bound");
        return None;
    };

    if include_time {
        return Some(instant.with_timezone(tz).fixed_offset());
    }
    local_datetime(instant.naive_utc(), tz)
}

fn stored_bound(bound: &DateTime<FixedOffset>, include_time: bool) -> i64 {
    if include_time {
        bound.timestamp_millis()
    } else {
        bound.naive_local().and_utc().timestamp_millis()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Timelike};
    use chrono_tz::{America, Asia, Australia, Europe};

    fn utc_millis(y: i32, m: u32, d: u32, h: u32, min: u32) -> i64 {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
            .and_utc()
            .timestamp_millis()
    }

    #[test]
    fn date_only_keeps_calendar_day_west_of_utc() {
        let range = DateRange::single(utc_millis(2023, 11, 14, 0, 0));
        let local = to_local_display(&range, false, &America::Los_Angeles);
        let to = local.to.unwrap();
        assert_eq!(to.date_naive(), NaiveDate::from_ymd_opt(2023, 11, 14).unwrap());
        assert_eq!(to.hour(), 0);
        assert_eq!(to.offset().local_minus_utc(), -8 * 3600);
    }

    #[test]
    fn date_only_keeps_calendar_day_east_of_utc() {
        let range = DateRange::single(utc_millis(2023, 11, 14, 12, 0));
        let local = to_local_display(&range, false, &Asia::Tokyo);
        let to = local.to.unwrap();
        assert_eq!(to.date_naive(), NaiveDate::from_ymd_opt(2023, 11, 14).unwrap());
        assert_eq!(to.hour(), 12);
    }

    #[test]
    fn include_time_keeps_instant() {
        let millis = utc_millis(2023, 11, 14, 23, 30);
        let range = DateRange::single(millis).with_include_time(true);
        let local = to_local_display(&range, true, &Asia::Tokyo);
        let to = local.to.unwrap();
        assert_eq!(to.timestamp_millis(), millis);
        assert_eq!(to.date_naive(), NaiveDate::from_ymd_opt(2023, 11, 15).unwrap());
    }

    #[test]
    fn round_trip_is_lossless_across_zones() {
        let ranges = [
            DateRange::single(1_700_000_000_000),
            DateRange::span(1_700_000_000_000, 1_700_086_400_000),
            DateRange::span(utc_millis(2024, 3, 31, 2, 30), utc_millis(2024, 10, 27, 2, 30)),
            DateRange::single(utc_millis(2024, 3, 10, 2, 15)),
            DateRange::single(0).with_include_time(false),
        ];
        let fixed = [
            FixedOffset::east_opt(0).unwrap(),
            FixedOffset::east_opt(5 * 3600 + 1800).unwrap(),
            FixedOffset::west_opt(11 * 3600).unwrap(),
            FixedOffset::east_opt(14 * 3600).unwrap(),
        ];

        for range in ranges {
            for tz in fixed {
                let back = to_stored_utc(&to_local_display(&range, false, &tz), false);
                assert_eq!(back, range, "{range:?} in {tz}");
            }
            for back in [
                to_stored_utc(&to_local_display(&range, false, &Europe::Berlin), false),
                to_stored_utc(&to_local_display(&range, false, &America::New_York), false),
                to_stored_utc(&to_local_display(&range, false, &Australia::Lord_Howe), false),
            ] {
                assert_eq!(back, range);
            }
        }
    }

    #[test]
    fn dst_gap_wall_clock_is_preserved() {
        // 02:30 does not exist in Berlin on 2024-03-31.
        let range = DateRange::single(utc_millis(2024, 3, 31, 2, 30));
        let local = to_local_display(&range, false, &Europe::Berlin);
        let to = local.to.unwrap();
        assert_eq!(to.naive_local(), range_wall(&range));
    }

    fn range_wall(range: &DateRange) -> NaiveDateTime {
        DateTime::<Utc>::from_timestamp_millis(range.to.unwrap())
            .unwrap()
            .naive_utc()
    }

    #[test]
    fn dst_fall_back_takes_earlier_offset() {
        let wall = NaiveDate::from_ymd_opt(2024, 10, 27)
            .unwrap()
            .and_hms_opt(2, 30, 0)
            .unwrap();
        let local = local_datetime(wall, &Europe::Berlin).unwrap();
        assert_eq!(local.offset().local_minus_utc(), 2 * 3600);
    }

    #[test]
    fn unrepresentable_bound_is_dropped() {
        let range = DateRange::span(i64::MIN, 1_700_000_000_000);
        let local = to_local_display(&range, false, &Utc);
        assert!(local.from.is_none());
        assert!(local.to.is_some());
    }

    #[test]
    fn empty_range_stays_empty() {
        let local = to_local_display(&DateRange::default(), false, &Europe::Berlin);
        assert_eq!(local, LocalRange::default());
        assert!(to_stored_utc(&local, false).is_empty());
    }
}
