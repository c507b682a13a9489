//! Fallback for property tags without a dedicated type.

use super::{CalculationOption, DisplayContext, PropertyKind, PropertyType, VALUE_CALCULATIONS};
use crate::domain::PropertyValue;

/// Shows the stored value as plain text under the `Text` type name.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnknownProperty;

impl PropertyType for UnknownProperty {
    fn kind(&self) -> PropertyKind {
        PropertyKind::Unknown
    }

    fn name(&self) -> &'static str {
        "Text"
    }

    fn calculation_options(&self) -> &'static [CalculationOption] {
        VALUE_CALCULATIONS
    }

    fn display_value(&self, value: Option<&PropertyValue>, _ctx: &DisplayContext<'_>) -> String {
        match value {
            Some(PropertyValue::Text(s)) => s.clone(),
            Some(PropertyValue::List(items)) => items.join(", "),
            None => String::new(),
        }
    }
}
