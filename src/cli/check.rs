//! Configuration validation command.

use std::path::Path;

use crate::cli::output;
use crate::error::Result;
use crate::infrastructure::config::line::USER_ID_VAR;
use crate::infrastructure::config::Config;

/// Validate configuration and credentials without starting the bot.
pub fn execute_config<P: AsRef<Path>>(config_path: P) -> Result<()> {
    let path = config_path.as_ref();
    println!("Checking configuration: {}", path.display());
    if !path.exists() {
        output::warn("Config file not found, using defaults");
    }

    let config = Config::load(path)?;
    output::ok("Configuration values are valid");

    output::section("Summary");
    output::key_value("Listen address", config.server.bind_addr());
    output::key_value("Index URL", &config.index.url);
    output::key_value("LINE API", &config.line.api_base);
    output::key_value("Daily pushes", config.schedule.daily_times.join(", "));
    output::key_value(
        "Change check every",
        format!("{}s", config.schedule.change_check_interval_secs),
    );
    output::key_value("UTC offset", format!("{:+}h", config.schedule.utc_offset_hours));
    println!();

    config.line.credentials()?;
    output::ok("LINE channel credentials found");

    match config.line.recipient()? {
        Some(recipient) => output::ok(&format!("Push recipient preset: {recipient}")),
        None => {
            output::warn("No push recipient preset");
            println!("  Set {USER_ID_VAR} or message the bot once to enable pushes");
        }
    }

    println!();
    println!("Configuration is ready to use.");
    Ok(())
}
