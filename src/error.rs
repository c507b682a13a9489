use thiserror::Error;

use crate::domain::{CardId, TemplateId};

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("card not found: {0}")]
    CardNotFound(CardId),

    #[error("property {template_id} rejected on card {card_id}: {reason}")]
    Mutation {
        card_id: CardId,
        template_id: TemplateId,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
