//! Property type abstraction for card fields.
//!
//! Every custom field on a card has a type tag ([`PropertyKind`]). Each tag
//! maps to one [`PropertyType`] implementation providing a fixed set of
//! capabilities:
//!
//! - `name()` / `kind()` - identity for logging and schema lookups
//! - `display_value()` - read-only rendering of a stored value
//! - `calculation_options()` - aggregations the board footer may offer
//! - `date_from()` / `date_to()` - calendar span for date-like types
//!
//! The [`PropertyRegistry`] selects the implementation for a tag.
//!
//! # Example
//!
//! ```
//! use duedate::domain::property::{PropertyKind, PropertyRegistry};
//!
//! let registry = PropertyRegistry::with_builtin();
//! assert!(registry.for_kind(PropertyKind::DueDate).is_date());
//! ```

mod due_date;
mod unknown;

pub use due_date::{display_range, DueDateProperty};
pub use unknown::UnknownProperty;

use chrono::NaiveDate;
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use super::{Card, PropertyValue};
use crate::port::DateFormatter;

/// Type tag of a property template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyKind {
    DueDate,
    /// Any tag this crate has no dedicated type for.
    #[serde(other)]
    Unknown,
}

/// Aggregations a board can compute over one property column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CalculationOption {
    None,
    Count,
    CountEmpty,
    CountNotEmpty,
    PercentEmpty,
    PercentNotEmpty,
    CountValue,
    CountUniqueValue,
}

/// Calculations shared by string-valued types.
pub(crate) const VALUE_CALCULATIONS: &[CalculationOption] = &[
    CalculationOption::None,
    CalculationOption::Count,
    CalculationOption::CountEmpty,
    CalculationOption::CountNotEmpty,
    CalculationOption::PercentEmpty,
    CalculationOption::PercentNotEmpty,
    CalculationOption::CountValue,
    CalculationOption::CountUniqueValue,
];

/// What a property type needs to render values for one viewer.
#[derive(Clone, Copy)]
pub struct DisplayContext<'a> {
    pub tz: Tz,
    pub formatter: &'a dyn DateFormatter,
}

impl<'a> DisplayContext<'a> {
    pub fn new(tz: Tz, formatter: &'a dyn DateFormatter) -> Self {
        Self { tz, formatter }
    }
}

/// Capabilities every property type provides.
pub trait PropertyType: Send + Sync {
    fn kind(&self) -> PropertyKind;

    /// Human-readable type name.
    fn name(&self) -> &'static str;

    /// Whether values place the card on a calendar or timeline.
    fn is_date(&self) -> bool {
        false
    }

    fn calculation_options(&self) -> &'static [CalculationOption];

    /// Read-only rendering of a stored value; `""` when unset.
    fn display_value(&self, value: Option<&PropertyValue>, ctx: &DisplayContext<'_>) -> String;

    /// First calendar day covered by the value.
    fn date_from(&self, _value: Option<&PropertyValue>, _card: &Card, _tz: &Tz) -> Option<NaiveDate> {
        None
    }

    /// Day after the last calendar day covered by the value.
    fn date_to(&self, _value: Option<&PropertyValue>, _card: &Card, _tz: &Tz) -> Option<NaiveDate> {
        None
    }
}

/// Registry of property types, selected by tag.
pub struct PropertyRegistry {
    types: Vec<Box<dyn PropertyType>>,
    fallback: UnknownProperty,
}

impl Default for PropertyRegistry {
    fn default() -> Self {
        Self {
            types: Vec::new(),
            fallback: UnknownProperty,
        }
    }
}

impl PropertyRegistry {
    /// Create a new empty registry. Every tag resolves to the fallback.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding every type this crate ships.
    pub fn with_builtin() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(DueDateProperty));
        registry.register(Box::new(UnknownProperty));
        registry
    }

    /// Register a type. A later registration for the same tag wins.
    pub fn register(&mut self, property_type: Box<dyn PropertyType>) {
        self.types.retain(|t| t.kind() != property_type.kind());
        self.types.push(property_type);
    }

    /// Type for `kind`, or the plain-text fallback.
    pub fn for_kind(&self, kind: PropertyKind) -> &dyn PropertyType {
        match self.types.iter().find(|t| t.kind() == kind) {
            Some(property_type) => property_type.as_ref(),
            None => &self.fallback,
        }
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_tags_round_trip_through_json() {
        assert_eq!(serde_json::to_string(&PropertyKind::DueDate).unwrap(), "\"duedate\"");
        let kind: PropertyKind = serde_json::from_str("\"duedate\"").unwrap();
        assert_eq!(kind, PropertyKind::DueDate);
    }

    #[test]
    fn unrecognised_tag_is_unknown() {
        let kind: PropertyKind = serde_json::from_str("\"multiSelect\"").unwrap();
        assert_eq!(kind, PropertyKind::Unknown);
    }

    #[test]
    fn calculation_option_tags() {
        assert_eq!(
            serde_json::to_string(&CalculationOption::CountUniqueValue).unwrap(),
            "\"countUniqueValue\""
        );
    }

    #[test]
    fn registry_new_is_empty() {
        let registry = PropertyRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.for_kind(PropertyKind::DueDate).kind(), PropertyKind::Unknown);
    }

    #[test]
    fn registry_builtin_selects_by_tag() {
        let registry = PropertyRegistry::with_builtin();
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.for_kind(PropertyKind::DueDate).name(), "Due Date");
        assert_eq!(registry.for_kind(PropertyKind::Unknown).name(), "Text");
    }

    #[test]
    fn registry_replaces_same_tag() {
        let mut registry = PropertyRegistry::with_builtin();
        registry.register(Box::new(DueDateProperty));
        assert_eq!(registry.len(), 2);
    }
}
