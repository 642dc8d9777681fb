#![doc = include_str!(concat!(env!("OUT_DIR"), "/README_GENERATED.md"))]
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

#[cfg(test)]
use assert_cmd as _;
#[cfg(test)]
use predicates as _;

// Binary-only dependencies
use anyhow as _;
use dotenvy as _;

pub mod app;
pub mod parser;

pub use app::{InventoryApp, SERVICE_TAG, run};
pub use parser::Cli;
