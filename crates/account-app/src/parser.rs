//! Command-line definition for the account application.

use app_support::CommonArgs;
use clap::Parser;

/// Greets the current profile with the greeter's message.
#[derive(Debug, Parser)]
#[command(name = "account-app")]
#[command(version = build_info::LONG_VERSION)]
pub struct Cli {
    #[command(flatten)]
    pub common: CommonArgs,
}
