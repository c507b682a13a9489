//! Mutation dispatcher port.

use crate::domain::{BoardId, Card, TemplateId};
use crate::error::Result;

/// Writes a card property back to the board.
///
/// # Implementation Notes
///
/// - An empty `value` means the property is unset and should be removed
/// - Implementations must be thread-safe (`Send + Sync`)
pub trait PropertyMutator: Send + Sync {
    /// Replace the value stored under `template_id` on `card`.
    fn change_property_value(
        &self,
        board_id: &BoardId,
        card: &Card,
        template_id: &TemplateId,
        value: &str,
    ) -> Result<()>;
}
