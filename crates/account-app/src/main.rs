//! Account application entry point.

use anyhow::Context;
use clap::Parser;

use account_app::{Cli, run};

fn main() -> anyhow::Result<()> {
    // Load environment variables (RUST_LOG may live in .env)
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    app_support::init_tracing(cli.common.verbose);
    tracing::info!(version = build_info::LONG_VERSION, "account-app starting");

    run(&mut std::io::stdout().lock()).context("account-app could not print its greeting")?;
    Ok(())
}
