//! Viewer display settings.

use chrono_tz::Tz;
use serde::Deserialize;

use crate::adapter::{PatternFormatter, DEFAULT_DISPLAY_FORMAT};
use crate::domain::DatePattern;
use crate::error::{ConfigError, Result};

/// How dates are shown to and typed by the viewer.
#[derive(Debug, Clone, Deserialize)]
pub struct DisplayConfig {
    /// IANA timezone of the viewer, e.g. `Europe/Berlin`.
    #[serde(default = "default_timezone")]
    pub timezone: String,

    /// strftime-style format for rendered dates.
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Pattern for typed dates, e.g. `MM/DD/YYYY`.
    #[serde(default = "default_input_format")]
    pub input_format: String,

    /// Show a placeholder on the button when no date is set.
    #[serde(default = "default_true")]
    pub show_empty_placeholder: bool,
}

fn default_timezone() -> String {
    "UTC".into()
}

fn default_date_format() -> String {
    DEFAULT_DISPLAY_FORMAT.into()
}

fn default_input_format() -> String {
    "MM/DD/YYYY".into()
}

fn default_true() -> bool {
    true
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            timezone: default_timezone(),
            date_format: default_date_format(),
            input_format: default_input_format(),
            show_empty_placeholder: true,
        }
    }
}

impl DisplayConfig {
    /// The viewer's timezone.
    pub fn timezone(&self) -> Result<Tz> {
        if self.timezone.trim().is_empty() {
            return Err(ConfigError::MissingField { field: "timezone" }.into());
        }
        self.timezone.trim().parse::<Tz>().map_err(|e| {
            ConfigError::InvalidValue {
                field: "timezone",
                reason: e.to_string(),
            }
            .into()
        })
    }

    /// The typed-date pattern.
    pub fn input_pattern(&self) -> Result<DatePattern> {
        self.input_format.parse::<DatePattern>().map_err(|e| {
            ConfigError::InvalidValue {
                field: "input_format",
                reason: e.to_string(),
            }
            .into()
        })
    }

    /// Formatter built from these settings.
    pub fn formatter(&self) -> Result<PatternFormatter> {
        if self.date_format.is_empty() {
            return Err(ConfigError::MissingField {
                field: "date_format",
            }
            .into());
        }
        if !PatternFormatter::is_valid_format(&self.date_format) {
            return Err(ConfigError::InvalidValue {
                field: "date_format",
                reason: format!("unsupported specifier in '{}'", self.date_format),
            }
            .into());
        }
        Ok(PatternFormatter::new(
            self.date_format.clone(),
            self.input_pattern()?,
        ))
    }

    pub(crate) fn validate(&self) -> Result<()> {
        self.timezone()?;
        self.formatter()?;
        Ok(())
    }
}
