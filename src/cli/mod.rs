//! Command-line interface definitions.

pub mod codec;
pub mod config;
pub mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::Config;
use crate::error::Result;

/// Inspect and convert card due-date values.
#[derive(Parser, Debug)]
#[command(name = "duedate")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file (defaults apply when omitted)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Override log level (debug, info, warn, error)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Decode a stored value and print it as JSON
    Decode(ValueArg),

    /// Encode bounds into the stored form
    Encode(EncodeArgs),

    /// Show a stored value as the viewer sees it
    Display(DisplayArgs),

    /// Show the calendar days a stored value covers
    Span(SpanArgs),

    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

/// Subcommands for `duedate config`
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Validate configuration file
    Validate,
    /// Show effective configuration
    Show,
}

/// A stored property value.
#[derive(Parser, Debug)]
pub struct ValueArg {
    /// Stored value: empty, epoch milliseconds, or JSON
    #[arg(allow_hyphen_values = true)]
    pub value: String,
}

/// Arguments for the `encode` subcommand.
#[derive(Parser, Debug)]
pub struct EncodeArgs {
    /// Start of the span in epoch milliseconds
    #[arg(long, allow_hyphen_values = true)]
    pub from: Option<i64>,

    /// Due date (or end of the span) in epoch milliseconds
    #[arg(long, allow_hyphen_values = true)]
    pub to: Option<i64>,

    /// Bounds carry a time of day
    #[arg(long)]
    pub include_time: bool,
}

/// Arguments for the `display` subcommand.
#[derive(Parser, Debug)]
pub struct DisplayArgs {
    /// Stored value: empty, epoch milliseconds, or JSON
    #[arg(allow_hyphen_values = true)]
    pub value: String,

    /// Viewer timezone, overrides configuration
    #[arg(long)]
    pub tz: Option<String>,
}

/// Arguments for the `span` subcommand.
#[derive(Parser, Debug)]
pub struct SpanArgs {
    /// Stored value: empty, epoch milliseconds, or JSON
    #[arg(allow_hyphen_values = true)]
    pub value: String,

    /// Card creation time in epoch milliseconds, used for unset values
    #[arg(long, default_value_t = 0)]
    pub created_at: i64,

    /// Viewer timezone, overrides configuration
    #[arg(long)]
    pub tz: Option<String>,
}

impl Cli {
    /// Configuration for this invocation: the file when given, defaults otherwise.
    pub fn load_config(&self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::load(path)?,
            None => {
                let config = Config::default()
                    .with_timezone_override(std::env::var(crate::config::TIMEZONE_ENV).ok());
                config.validate()?;
                config
            }
        };
        if let Some(level) = &self.log_level {
            config.logging.level.clone_from(level);
        }
        Ok(config)
    }
}

/// Run a parsed command line.
pub fn execute(cli: &Cli) -> Result<()> {
    if let Commands::Config(command) = &cli.command {
        return match command {
            ConfigCommand::Validate => config::execute_validate(cli),
            ConfigCommand::Show => config::execute_show(cli),
        };
    }

    let config = cli.load_config()?;
    config.init_logging();

    match &cli.command {
        Commands::Decode(args) => codec::execute_decode(&args.value),
        Commands::Encode(args) => codec::execute_encode(args),
        Commands::Display(args) => codec::execute_display(&config, args),
        Commands::Span(args) => codec::execute_span(&config, args),
        Commands::Config(_) => Ok(()),
    }
}
