//! Migrate command implementation

use super::convert::SchemaArg;
use super::init_logging;
use crate::error::CliResult;
use crate::input::FileReader;
use crate::output::{write_output, JsonFormatter, OutputFormatter};
use anyhow::Context;
use clap::Args;
use segrob_core::{Document, Schema};
use std::path::PathBuf;

/// Arguments for the migrate command
#[derive(Debug, Args)]
pub struct MigrateArgs {
    /// segrob document to migrate
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    /// Target schema
    #[arg(long, value_enum, default_value = "grouped")]
    pub schema: SchemaArg,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Pretty print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Suppress log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl MigrateArgs {
    /// Execute the migrate command
    pub fn execute(&self) -> CliResult<()> {
        init_logging(self.quiet, self.verbose);

        let document = self.migrate()?;
        let formatter = JsonFormatter::new(self.pretty);
        let bytes = formatter.format_document(&document)?;
        write_output(&bytes, self.output.as_deref())
    }

    /// Read the input document and rewrite it in the target schema
    pub fn migrate(&self) -> CliResult<Document> {
        let content = FileReader::read_text(&self.input)?;
        let document: Document = serde_json::from_str(&content)
            .with_context(|| format!("Not a segrob document: {}", self.input.display()))?;

        let target = Schema::from(self.schema);
        log::info!(
            "Migrating {} from {} to {} schema",
            self.input.display(),
            document.schema(),
            target
        );

        Ok(document.into_schema(target))
    }
}
