//! Inventory application entry point.

use anyhow::Context;
use clap::Parser;

use inventory_app::{Cli, run};

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    app_support::init_tracing(cli.common.verbose);
    tracing::info!(version = build_info::LONG_VERSION, "inventory-app starting");

    run(&mut std::io::stdout().lock()).context("inventory-app could not print its greeting")?;
    Ok(())
}
