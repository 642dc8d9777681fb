//! Arguments shared by every application binary.

use clap::Args;

/// Global options flattened into each application's parser.
#[derive(Debug, Clone, Copy, Default, Args)]
pub struct CommonArgs {
    /// Enable verbose/debug output on stderr
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::{CommandFactory, Parser};

    #[derive(Parser)]
    #[command(name = "harness")]
    struct Harness {
        #[command(flatten)]
        common: CommonArgs,
    }

    #[test]
    fn test_harness_parser_builds() {
        Harness::command().debug_assert();
    }

    #[test]
    fn test_verbose_defaults_off() {
        let cli = Harness::parse_from(["harness"]);
        assert!(!cli.common.verbose);
    }

    #[test]
    fn test_verbose_flag_forms() {
        assert!(Harness::parse_from(["harness", "-v"]).common.verbose);
        assert!(Harness::parse_from(["harness", "--verbose"]).common.verbose);
    }

    #[test]
    fn test_unknown_flag_rejected() {
        assert!(Harness::try_parse_from(["harness", "--name", "Bob"]).is_err());
    }
}
