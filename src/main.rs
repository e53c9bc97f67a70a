use clap::Parser;
use power_climate::cli::{run, Cli};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    run(cli).await?;
    Ok(())
}
