#![doc = include_str!(concat!(env!("OUT_DIR"), "/README_GENERATED.md"))]
#![deny(unused_crate_dependencies)]

pub mod cli;
pub mod error;
pub mod logging;
pub mod output;

pub use cli::CommonArgs;
pub use error::AppError;
pub use logging::init_tracing;
pub use output::write_line;
