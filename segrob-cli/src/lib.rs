//! segrob-convert CLI library
//!
//! Command definitions, configuration file handling and output for the
//! `segrob-convert` binary.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;

pub use error::{CliError, CliResult};
