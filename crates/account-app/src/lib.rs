#![doc = include_str!(concat!(env!("OUT_DIR"), "/README_GENERATED.md"))]
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Silence unused dev-dependency warnings for the end-to-end tests in tests/
#[cfg(test)]
use assert_cmd as _;
#[cfg(test)]
use predicates as _;

// Dependencies used only by the binary entry point
use anyhow as _;
use dotenvy as _;

pub mod app;
pub mod parser;

pub use app::{AccountApp, SERVICE_TAG, run};
pub use parser::Cli;
