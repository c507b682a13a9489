//! In-memory card store.

use std::collections::HashMap;

use parking_lot::RwLock;
use tracing::info;

use crate::domain::{BoardId, Card, CardId, TemplateId};
use crate::error::{Error, Result};
use crate::port::PropertyMutator;

/// One applied property change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyChange {
    pub board_id: BoardId,
    pub card_id: CardId,
    pub template_id: TemplateId,
    pub old_value: String,
    pub new_value: String,
}

/// Cards held in memory, with a log of every change applied to them.
#[derive(Debug, Default)]
pub struct MemoryCardStore {
    cards: RwLock<HashMap<CardId, Card>>,
    changes: RwLock<Vec<PropertyChange>>,
}

impl MemoryCardStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a card.
    pub fn insert(&self, card: Card) {
        self.cards.write().insert(card.id.clone(), card);
    }

    /// Current state of a card.
    pub fn card(&self, id: &CardId) -> Option<Card> {
        self.cards.read().get(id).cloned()
    }

    /// Every change applied so far, oldest first.
    pub fn changes(&self) -> Vec<PropertyChange> {
        self.changes.read().clone()
    }
}

impl PropertyMutator for MemoryCardStore {
    fn change_property_value(
        &self,
        board_id: &BoardId,
        card: &Card,
        template_id: &TemplateId,
        value: &str,
    ) -> Result<()> {
        let mut cards = self.cards.write();
        let stored = cards
            .get_mut(&card.id)
            .ok_or_else(|| Error::CardNotFound(card.id.clone()))?;

        if stored.board_id != *board_id {
            return Err(Error::Mutation {
                card_id: card.id.clone(),
                template_id: template_id.clone(),
                reason: format!("card belongs to board {}", stored.board_id),
            });
        }

        let old_value = stored.property_text(template_id).to_string();
        stored.set_property(template_id.clone(), value);
        info!(
            card_id = %card.id,
            template_id = %template_id,
            old = %old_value,
            new = value,
            "Property changed"
        );

        self.changes.write().push(PropertyChange {
            board_id: board_id.clone(),
            card_id: card.id.clone(),
            template_id: template_id.clone(),
            old_value,
            new_value: value.to_string(),
        });
        Ok(())
    }
}
