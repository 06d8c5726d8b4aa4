//! Library exports for innkeep-cli.
//!
//! This module exports the CLI structure for use by the binary, the build
//! script and the benchmarks.

pub mod cli;
pub mod commands;
pub mod error;
pub mod utils;

pub use cli::Cli;
