//! Configuration loading and validation.
//!
//! Configuration is read from a TOML file. Every section is optional; the
//! viewer timezone can be overridden with `DUEDATE_TIMEZONE`.
//!
//! # Example
//!
//! ```no_run
//! use duedate::config::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("duedate.toml")?;
//!     config.init_logging();
//!     Ok(())
//! }
//! ```

mod display;
mod logging;

pub use display::DisplayConfig;
pub use logging::LoggingConfig;

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{ConfigError, Result};

/// Environment variable overriding `display.timezone`.
pub const TIMEZONE_ENV: &str = "DUEDATE_TIMEZONE";

/// Main application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Viewer display settings.
    #[serde(default)]
    pub display: DisplayConfig,

    /// Logging and tracing configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load, apply the `DUEDATE_TIMEZONE` override and validate.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::load_with_timezone_override(path, std::env::var(TIMEZONE_ENV).ok())
    }

    /// Load with an explicit timezone override in place of the environment.
    ///
    /// The override is applied before validation, so it replaces a bad
    /// timezone in the file.
    pub fn load_with_timezone_override<P: AsRef<Path>>(
        path: P,
        timezone: Option<String>,
    ) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        let config = Self::from_toml(&content)?.with_timezone_override(timezone);
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate TOML without touching the environment.
    pub fn parse_toml(content: &str) -> Result<Self> {
        let config = Self::from_toml(content)?;
        config.validate()?;
        Ok(config)
    }

    fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content).map_err(ConfigError::Parse)?)
    }

    /// Replace the configured timezone when an override is present.
    #[must_use]
    pub fn with_timezone_override(mut self, timezone: Option<String>) -> Self {
        if let Some(tz) = timezone.filter(|tz| !tz.trim().is_empty()) {
            self.display.timezone = tz;
        }
        self
    }

    pub fn validate(&self) -> Result<()> {
        self.display.validate()
    }

    pub fn init_logging(&self) {
        self.logging.init();
    }
}
