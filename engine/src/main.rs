// Engine main entry point
use anyhow::Result;
use clap::Parser;

use ppp_engine::cli::{self, Cli};
use ppp_engine::logging;

fn main() -> Result<()> {
    logging::init_logging().map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    let cli = Cli::parse();
    tracing::debug!(command = ?cli.command, "Starting PPP salary converter");

    cli::execute(cli)
}
