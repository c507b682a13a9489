//! Handlers for the value conversion commands.

use chrono_tz::Tz;
use tracing::debug;

use super::output;
use super::{DisplayArgs, EncodeArgs, SpanArgs};
use crate::config::Config;
use crate::domain::property::{DisplayContext, DueDateProperty, PropertyType};
use crate::domain::{Card, DateRange, PropertyValue};
use crate::error::{ConfigError, Result};

/// Execute `decode`.
pub fn execute_decode(value: &str) -> Result<()> {
    let range = DateRange::decode(value);
    output::value(serde_json::to_string(&range)?);
    Ok(())
}

/// Execute `encode`.
pub fn execute_encode(args: &EncodeArgs) -> Result<()> {
    let range = DateRange {
        from: args.from,
        to: args.to,
        include_time: args.include_time.then_some(true),
    };
    output::value(range.encode());
    Ok(())
}

/// Execute `display`.
pub fn execute_display(config: &Config, args: &DisplayArgs) -> Result<()> {
    let tz = resolve_timezone(config, args.tz.as_deref())?;
    let formatter = config.display.formatter()?;
    let ctx = DisplayContext::new(tz, &formatter);

    let value = PropertyValue::from(args.value.as_str());
    let text = DueDateProperty.display_value(Some(&value), &ctx);
    debug!(%tz, value = %args.value, "Rendered due date");

    if text.is_empty() && config.display.show_empty_placeholder {
        output::value(crate::editor::EMPTY_PLACEHOLDER);
    } else {
        output::value(text);
    }
    Ok(())
}

/// Execute `span`.
pub fn execute_span(config: &Config, args: &SpanArgs) -> Result<()> {
    let tz = resolve_timezone(config, args.tz.as_deref())?;
    let card = Card::new("cli", "cli").with_create_at(args.created_at);
    let value = PropertyValue::from(args.value.as_str());

    let property = DueDateProperty;
    let from = property.date_from(Some(&value), &card, &tz);
    let to = property.date_to(Some(&value), &card, &tz);

    output::key_value("Start", display_day(from));
    output::key_value("End (excl.)", display_day(to));
    Ok(())
}

fn display_day(day: Option<chrono::NaiveDate>) -> String {
    day.map_or_else(|| "-".to_string(), |d| d.to_string())
}

fn resolve_timezone(config: &Config, flag: Option<&str>) -> Result<Tz> {
    match flag {
        Some(name) => name.parse::<Tz>().map_err(|e| {
            ConfigError::InvalidValue {
                field: "tz",
                reason: e.to_string(),
            }
            .into()
        }),
        None => config.display.timezone(),
    }
}
