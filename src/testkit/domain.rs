//! Builders for domain primitives used across tests.

use chrono::NaiveDate;

use crate::domain::{BoardId, Card, TemplateId};

/// Board every test card lives on.
pub const BOARD: &str = "board-1";

/// Template id of the due-date property.
pub const DUE: &str = "due";

pub fn board_id() -> BoardId {
    BoardId::new(BOARD)
}

pub fn due_template() -> TemplateId {
    TemplateId::new(DUE)
}

/// A card on [`BOARD`] with no properties.
pub fn card(id: &str) -> Card {
    Card::new(id, BOARD)
}

/// A card on [`BOARD`] whose due date is `value`.
pub fn card_with_due(id: &str, value: &str) -> Card {
    let mut card = card(id);
    card.set_property(due_template(), value);
    card
}

/// Epoch milliseconds of `y-m-d` at `hour`:00 UTC.
pub fn utc_millis(y: i32, m: u32, d: u32, hour: u32) -> i64 {
    NaiveDate::from_ymd_opt(y, m, d)
        .and_then(|date| date.and_hms_opt(hour, 0, 0))
        .map(|wall| wall.and_utc().timestamp_millis())
        .unwrap_or_default()
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}
