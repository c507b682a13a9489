//! Board-agnostic due-date domain logic.

mod card;
mod date_range;
mod ids;
mod pattern;
mod timezone;

pub mod property;

pub use card::{Card, PropertyTemplate, PropertyValue};
pub use date_range::DateRange;
pub use ids::{BoardId, CardId, TemplateId};
pub use pattern::{DatePattern, FieldOrder, PatternError};
pub use timezone::{local_datetime, to_local_display, to_stored_utc, LocalRange};
