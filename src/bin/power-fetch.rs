//! Fetch stage with the built-in configuration.

use anyhow::Context;
use power_climate::cli::run_fetch;
use power_climate::config::Settings;
use power_climate::utils::init_logging;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _log_guard = init_logging(false, None)?;
    let settings = Settings::load(None).context("invalid configuration")?;
    run_fetch(settings.fetch)
        .await
        .context("fetch stage aborted")?;
    Ok(())
}
