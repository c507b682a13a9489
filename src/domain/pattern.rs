//! Typed-date input patterns such as `MM/DD/YYYY`.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};

/// Order of the day, month and year fields in typed input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldOrder {
    MonthDayYear,
    DayMonthYear,
    YearMonthDay,
}

/// A numeric date input pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DatePattern {
    pub order: FieldOrder,
    pub separator: char,
}

/// Error returned when a pattern string cannot be understood.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported date pattern '{0}', expected e.g. MM/DD/YYYY, DD.MM.YYYY or YYYY-MM-DD")]
pub struct PatternError(String);

const SEPARATORS: [char; 3] = ['/', '-', '.'];

impl Default for DatePattern {
    fn default() -> Self {
        Self {
            order: FieldOrder::MonthDayYear,
            separator: '/',
        }
    }
}

impl DatePattern {
    /// Parse typed text. Accepts this pattern or ISO `YYYY-MM-DD`.
    ///
    /// Returns `None` for text that is not a real calendar date.
    pub fn parse_date(&self, text: &str) -> Option<NaiveDate> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return None;
        }
        Self::parse_with_order(trimmed, self.order)
            .or_else(|| Self::parse_with_order(trimmed, FieldOrder::YearMonthDay))
    }

    /// Render a date as input text.
    #[must_use]
    pub fn format(&self, date: NaiveDate) -> String {
        let sep = self.separator;
        let (y, m, d) = (date.year(), date.month(), date.day());
        match self.order {
            FieldOrder::MonthDayYear => format!("{m:02}{sep}{d:02}{sep}{y:04}"),
            FieldOrder::DayMonthYear => format!("{d:02}{sep}{m:02}{sep}{y:04}"),
            FieldOrder::YearMonthDay => format!("{y:04}{sep}{m:02}{sep}{d:02}"),
        }
    }

    /// Placeholder text shown in an empty input.
    #[must_use]
    pub fn placeholder(&self) -> String {
        self.to_string()
    }

    fn parse_with_order(text: &str, order: FieldOrder) -> Option<NaiveDate> {
        let parts: Vec<&str> = text.split(|c: char| SEPARATORS.contains(&c)).collect();
        let [p1, p2, p3] = parts[..] else {
            return None;
        };
        let number = |s: &str| s.trim().parse::<u32>().ok();

        let (y, m, d) = match order {
            FieldOrder::MonthDayYear => (number(p3)?, number(p1)?, number(p2)?),
            FieldOrder::DayMonthYear => (number(p3)?, number(p2)?, number(p1)?),
            FieldOrder::YearMonthDay => (number(p1)?, number(p2)?, number(p3)?),
        };
        NaiveDate::from_ymd_opt(i32::try_from(y).ok()?, m, d)
    }
}

impl fmt::Display for DatePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sep = self.separator;
        match self.order {
            FieldOrder::MonthDayYear => write!(f, "MM{sep}DD{sep}YYYY"),
            FieldOrder::DayMonthYear => write!(f, "DD{sep}MM{sep}YYYY"),
            FieldOrder::YearMonthDay => write!(f, "YYYY{sep}MM{sep}DD"),
        }
    }
}

impl FromStr for DatePattern {
    type Err = PatternError;

    fn from_str(spec: &str) -> Result<Self, Self::Err> {
        let invalid = || PatternError(spec.to_string());
        let normalized = spec.trim().to_ascii_lowercase();

        let separator = normalized
            .chars()
            .find(|c| SEPARATORS.contains(c))
            .ok_or_else(invalid)?;
        let fields: Vec<char> = normalized
            .split(separator)
            .map(|part| {
                let mut chars = part.chars();
                let first = chars.next()?;
                chars.all(|c| c == first).then_some(first)
            })
            .collect::<Option<_>>()
            .ok_or_else(invalid)?;

        let order = match fields.as_slice() {
            ['m', 'd', 'y'] => FieldOrder::MonthDayYear,
            ['d', 'm', 'y'] => FieldOrder::DayMonthYear,
            ['y', 'm', 'd'] => FieldOrder::YearMonthDay,
            _ => return Err(invalid()),
        };
        Ok(Self { order, separator })
    }
}
