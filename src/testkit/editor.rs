//! Due-date editor wired to an in-memory store.

use std::sync::Arc;

use chrono_tz::Tz;

use super::domain::due_template;
use crate::adapter::{MemoryCardStore, PatternFormatter};
use crate::domain::Card;
use crate::editor::DueDateEditor;

/// Store the card and open an editor on its due date.
pub fn editor_for(card: Card, tz: Tz) -> (DueDateEditor, Arc<MemoryCardStore>) {
    editor_with_formatter(card, tz, PatternFormatter::default())
}

pub fn editor_with_formatter(
    card: Card,
    tz: Tz,
    formatter: PatternFormatter,
) -> (DueDateEditor, Arc<MemoryCardStore>) {
    let store = Arc::new(MemoryCardStore::new());
    store.insert(card.clone());
    let editor = DueDateEditor::new(
        card,
        due_template(),
        tz,
        Arc::new(formatter),
        store.clone(),
    );
    (editor, store)
}
