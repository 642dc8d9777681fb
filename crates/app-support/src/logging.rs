//! Tracing initialization for the application binaries.
//!
//! Log output goes to stderr so stdout carries only the program's result.
//! Filter priority: `RUST_LOG` > `--verbose` > `warn`.

use tracing_subscriber::EnvFilter;

/// Filter used when neither `RUST_LOG` nor `--verbose` is given.
pub(crate) const DEFAULT_FILTER: &str = "warn";

/// Filter used for `--verbose` when `RUST_LOG` is not set.
pub(crate) const VERBOSE_FILTER: &str = "debug";

/// Install the global tracing subscriber.
///
/// Safe to call more than once; later calls are ignored.
pub fn init_tracing(verbose: bool) {
    let filter = build_filter(std::env::var(EnvFilter::DEFAULT_ENV).ok().as_deref(), verbose);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .compact()
        .try_init()
        .ok(); // Ignore error if already initialized
}

fn build_filter(rust_log: Option<&str>, verbose: bool) -> EnvFilter {
    let fallback = if verbose { VERBOSE_FILTER } else { DEFAULT_FILTER };
    rust_log
        .filter(|directives| !directives.trim().is_empty())
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(fallback))
}
