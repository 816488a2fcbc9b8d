//! Handler for the `run` command.

use tokio::signal;
use tracing::info;

use crate::cli::RunArgs;
use crate::error::Result;
use crate::infrastructure::bootstrap;
use crate::infrastructure::config::logging::LogFormat;
use crate::infrastructure::config::Config;

/// Execute the run command.
pub async fn execute(args: &RunArgs) -> Result<()> {
    let mut config = Config::load(&args.config)?;

    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(ref level) = args.log_level {
        config.logging.level = level.clone();
    }
    if args.json_logs {
        config.logging.format = LogFormat::Json;
    }

    config.init_logging();

    info!(
        addr = %config.server.bind_addr(),
        index_url = %config.index.url,
        daily_times = ?config.schedule.daily_times,
        "greedwatch starting"
    );

    bootstrap::run(config, async {
        if signal::ctrl_c().await.is_ok() {
            info!("Shutdown signal received");
        }
    })
    .await?;

    info!("greedwatch stopped");
    Ok(())
}
