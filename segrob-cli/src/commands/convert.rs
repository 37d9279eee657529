//! Convert command implementation

use super::init_logging;
use crate::config::CliConfig;
use crate::output::{write_output, JsonFormatter, OutputFormatter};
use crate::error::CliResult;
use anyhow::Context;
use clap::Args;
use segrob_core::{Converter, Input, PipelineKind, Schema};
use std::path::PathBuf;

/// Arguments for the convert command
#[derive(Debug, Args)]
pub struct ConvertArgs {
    /// Pipeline output to convert (JSON)
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    /// Pipeline that produced the input
    #[arg(short, long, value_enum)]
    pub pipeline: Pipeline,

    /// Original text file whose name supplies the filename labels (default: FILE)
    #[arg(short, long, value_name = "PATH")]
    pub source: Option<PathBuf>,

    /// Pipeline version for the pipeline label (default: from profile)
    #[arg(long, value_name = "VERSION")]
    pub pipeline_version: Option<String>,

    /// Output schema (default: from profile)
    #[arg(long, value_enum)]
    pub schema: Option<SchemaArg>,

    /// Extra document label, may be repeated
    #[arg(short, long = "label", value_name = "LABEL")]
    pub labels: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Pretty print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Suppress log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported pipelines
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Pipeline {
    /// Stanza `to_dict()` output
    Stanza,
    /// spaCy `Doc.to_json()` output
    Spacy,
}

impl From<Pipeline> for PipelineKind {
    fn from(pipeline: Pipeline) -> Self {
        match pipeline {
            Pipeline::Stanza => PipelineKind::Stanza,
            Pipeline::Spacy => PipelineKind::Spacy,
        }
    }
}

/// Output schema variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum SchemaArg {
    /// Sentences grouped with an explicit id
    Grouped,
    /// Flat list of per-sentence token lists
    Flat,
}

impl From<SchemaArg> for Schema {
    fn from(schema: SchemaArg) -> Self {
        match schema {
            SchemaArg::Grouped => Schema::Grouped,
            SchemaArg::Flat => Schema::Flat,
        }
    }
}

impl ConvertArgs {
    /// Execute the convert command
    pub fn execute(&self) -> CliResult<()> {
        init_logging(self.quiet, self.verbose);

        log::info!("Converting {}", self.input.display());
        log::debug!("Arguments: {:?}", self);

        let config = match &self.config {
            Some(path) => CliConfig::from_file(path)?,
            None => CliConfig::default(),
        };

        let converter = self.build_converter(&config)?;
        let document = converter
            .convert(Input::from_file(&self.input))
            .with_context(|| format!("Failed to convert {}", self.input.display()))?;

        log::info!(
            "Converted {} sentences, {} tokens",
            document.sentence_count(),
            document.token_count()
        );

        let formatter = JsonFormatter::new(self.pretty || config.output.pretty);
        let bytes = formatter.format_document(&document)?;
        write_output(&bytes, self.output.as_deref())
    }

    /// Build the converter: profile defaults, then config file, then flags
    pub fn build_converter(&self, config: &CliConfig) -> CliResult<Converter> {
        let pipeline = PipelineKind::from(self.pipeline);
        let overrides = config.pipeline(pipeline);

        let mut builder = Converter::builder(pipeline)
            .labels(config.conversion.labels.iter().cloned())
            .labels(self.labels.iter().cloned());

        if let Some(source) = &self.source {
            builder = builder.source(source);
        }

        let version = self
            .pipeline_version
            .clone()
            .or_else(|| overrides.and_then(|o| o.version.clone()));
        if let Some(version) = version {
            builder = builder.version(version);
        }

        let schema = self
            .schema
            .map(Schema::from)
            .or_else(|| overrides.and_then(|o| o.schema));
        if let Some(schema) = schema {
            builder = builder.schema(schema);
        }

        let converter = builder.build().context("Failed to configure converter")?;
        log::debug!("Converter configuration: {:?}", converter.config());
        Ok(converter)
    }
}
