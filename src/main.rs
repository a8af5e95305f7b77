//! Entry point wiring CLI dispatch to the risk engine.

use air_risk::{cli::Cli, config::Settings, logging};
use anyhow::Result;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_tracing(logging::directive_for(cli.verbose))?;
    let settings = Settings::load()?;

    info!(?cli, "starting command");
    cli.dispatch(settings).await
}
