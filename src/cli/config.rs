//! Handler for the `config` command group.

use super::{output, Cli};
use crate::error::Result;

/// Execute `config validate`.
pub fn execute_validate(cli: &Cli) -> Result<()> {
    output::section("Config Validation");
    if let Some(path) = &cli.config {
        output::key_value("Path", path.display());
    } else {
        output::key_value("Path", "(defaults)");
    }

    cli.load_config()?;
    output::ok("Config is valid");
    Ok(())
}

/// Execute `config show`.
pub fn execute_show(cli: &Cli) -> Result<()> {
    let config = cli.load_config()?;

    output::section("Display");
    output::key_value("Timezone", config.display.timezone()?);
    output::key_value("Date format", &config.display.date_format);
    output::key_value("Input format", config.display.input_pattern()?);
    output::key_value("Placeholder", config.display.show_empty_placeholder);

    output::section("Logging");
    output::key_value("Level", &config.logging.level);
    output::key_value("Format", &config.logging.format);
    Ok(())
}
