//! Handler for the `index` command.

use std::path::Path;

use crate::application::format::reading_message;
use crate::error::Result;
use crate::infrastructure::bootstrap::build_index_source;
use crate::infrastructure::config::Config;

/// Fetch the current reading and print the reply a user would get.
pub async fn execute<P: AsRef<Path>>(config_path: P) -> Result<()> {
    let config = Config::load(config_path)?;
    let source = build_index_source(&config)?;
    let reading = source.fetch().await?;

    if let Some(text) = reading_message(&reading).as_text() {
        println!("{text}");
    }
    Ok(())
}
