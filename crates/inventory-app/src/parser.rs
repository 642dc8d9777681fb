//! Command-line definition for the inventory application.

use app_support::CommonArgs;
use clap::Parser;

/// Greets the current profile.
#[derive(Debug, Parser)]
#[command(name = "inventory-app")]
#[command(version = build_info::LONG_VERSION)]
pub struct Cli {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parser_builds() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_short_verbose_flag() {
        assert!(Cli::parse_from(["inventory-app", "-v"]).common.verbose);
    }
}
