//! Output formatting module
//!
//! A document is rendered into memory first and written in a single call, so
//! a failed conversion never leaves partial output behind.

use crate::error::{CliError, CliResult};
use anyhow::Context;
use segrob_core::Document;
use std::fs;
use std::io::Write;
use std::path::Path;

pub mod json;

pub use json::JsonFormatter;

/// Trait for document formatters
pub trait OutputFormatter {
    /// Render a whole document
    fn format_document(&self, doc: &Document) -> CliResult<Vec<u8>>;
}

/// Write rendered output to a file, or to stdout when no path is given
pub fn write_output(bytes: &[u8], path: Option<&Path>) -> CliResult<()> {
    match path {
        Some(path) => fs::write(path, bytes)
            .with_context(|| format!("Failed to write output file: {}", path.display())),
        None => {
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            handle
                .write_all(bytes)
                .and_then(|_| handle.flush())
                .map_err(|e| CliError::OutputError(e.to_string()).into())
        }
    }
}
