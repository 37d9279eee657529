//! JSON output formatter

use super::OutputFormatter;
use crate::error::CliResult;
use segrob_core::Document;

/// JSON formatter, compact by default
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFormatter {
    pretty: bool,
}

impl JsonFormatter {
    /// Create a new JSON formatter
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_document(&self, doc: &Document) -> CliResult<Vec<u8>> {
        let mut buffer = if self.pretty {
            serde_json::to_vec_pretty(doc)?
        } else {
            serde_json::to_vec(doc)?
        };
        buffer.push(b'\n');
        Ok(buffer)
    }
}
