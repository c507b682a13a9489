//! Board cards and their custom property values.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use super::ids::{BoardId, CardId, TemplateId};
use super::property::PropertyKind;

/// Value of a custom property on a card.
///
/// Most property types store a single string; multi-select style types
/// store a list. The due date is always a single string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyValue {
    Text(String),
    List(Vec<String>),
}

impl PropertyValue {
    /// The single string value, if this is not a list.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            Self::List(_) => None,
        }
    }
}

impl From<&str> for PropertyValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for PropertyValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

/// Schema entry describing one custom field on a board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyTemplate {
    pub id: TemplateId,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: PropertyKind,
}

impl PropertyTemplate {
    pub fn new(id: impl Into<TemplateId>, name: impl Into<String>, kind: PropertyKind) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind,
        }
    }
}

/// A card on a board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub id: CardId,
    pub board_id: BoardId,
    #[serde(default)]
    pub title: String,
    /// Creation time in epoch milliseconds.
    #[serde(default)]
    pub create_at: i64,
    #[serde(default)]
    pub properties: BTreeMap<TemplateId, PropertyValue>,
}

impl Card {
    pub fn new(id: impl Into<CardId>, board_id: impl Into<BoardId>) -> Self {
        Self {
            id: id.into(),
            board_id: board_id.into(),
            title: String::new(),
            create_at: 0,
            properties: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    #[must_use]
    pub fn with_create_at(mut self, create_at: i64) -> Self {
        self.create_at = create_at;
        self
    }

    #[must_use]
    pub fn property(&self, template_id: &TemplateId) -> Option<&PropertyValue> {
        self.properties.get(template_id)
    }

    /// The property as a single string, `""` when unset.
    #[must_use]
    pub fn property_text(&self, template_id: &TemplateId) -> &str {
        self.property(template_id)
            .and_then(PropertyValue::as_text)
            .unwrap_or_default()
    }

    /// Set a property. An empty string removes it.
    pub fn set_property(&mut self, template_id: TemplateId, value: impl Into<PropertyValue>) {
        match value.into() {
            PropertyValue::Text(s) if s.is_empty() => {
                self.properties.remove(&template_id);
            }
            value => {
                self.properties.insert(template_id, value);
            }
        }
    }

    /// Calendar day the card was created on, in the viewer's zone.
    pub fn created_local_date<Z: TimeZone>(&self, tz: &Z) -> NaiveDate {
        DateTime::<Utc>::from_timestamp_millis(self.create_at)
            .unwrap_or_default()
            .with_timezone(tz)
            .date_naive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    #[test]
    fn set_property_inserts_and_overwrites() {
        let mut card = Card::new("c1", "b1");
        let due = TemplateId::new("due");

        card.set_property(due.clone(), "1");
        card.set_property(due.clone(), "2");

        assert_eq!(card.property_text(&due), "2");
    }

    #[test]
    fn set_property_empty_string_removes() {
        let mut card = Card::new("c1", "b1");
        let due = TemplateId::new("due");
        card.set_property(due.clone(), "1");

        card.set_property(due.clone(), "");

        assert!(card.property(&due).is_none());
        assert_eq!(card.property_text(&due), "");
    }

    #[test]
    fn list_values_have_no_text() {
        let value = PropertyValue::List(vec!["a".into()]);
        assert_eq!(value.as_text(), None);
    }

    #[test]
    fn card_deserializes_from_board_json() {
        let json = r#"{
            "id": "c1",
            "boardId": "b1",
            "title": "Ship it",
            "createAt": 1700000000000,
            "properties": {"due": "1700000000000", "tags": ["x", "y"]}
        }"#;
        let card: Card = serde_json::from_str(json).unwrap();

        assert_eq!(card.board_id, BoardId::new("b1"));
        assert_eq!(card.property_text(&TemplateId::new("due")), "1700000000000");
        assert_eq!(
            card.property(&TemplateId::new("tags")),
            Some(&PropertyValue::List(vec!["x".into(), "y".into()]))
        );
    }

    #[test]
    fn created_local_date_uses_viewer_zone() {
        // 2023-11-14T22:13:20Z
        let card = Card::new("c1", "b1").with_create_at(1_700_000_000_000);
        let tokyo = FixedOffset::east_opt(9 * 3600).unwrap();
        assert_eq!(
            card.created_local_date(&tokyo),
            NaiveDate::from_ymd_opt(2023, 11, 15).unwrap()
        );
        assert_eq!(
            card.created_local_date(&Utc),
            NaiveDate::from_ymd_opt(2023, 11, 14).unwrap()
        );
    }

    #[test]
    fn template_kind_serializes_as_type() {
        let template = PropertyTemplate::new("due", "Due", PropertyKind::DueDate);
        let json = serde_json::to_string(&template).unwrap();
        assert_eq!(json, r#"{"id":"due","name":"Due","type":"duedate"}"#);
    }
}
