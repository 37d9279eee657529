//! High-level conversion API

use crate::assembler::DocumentAssembler;
use crate::error::{ConvertError, Result};
use crate::input::Input;
use crate::labels::build_labels;
use crate::pipeline::{PipelineKind, PipelineReader};
use crate::types::{Document, Schema};
use std::path::{Path, PathBuf};

/// Resolved conversion settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConverterConfig {
    /// Pipeline that produced the input
    pub pipeline: PipelineKind,
    /// Pipeline version used in the pipeline label
    pub version: String,
    /// Output schema variant
    pub schema: Schema,
    /// User labels, appended after the derived ones
    pub labels: Vec<String>,
    /// Original text file the labels are derived from
    pub source: Option<PathBuf>,
}

/// Converts one pipeline's output into canonical documents
pub struct Converter {
    config: ConverterConfig,
    reader: Box<dyn PipelineReader>,
    assembler: DocumentAssembler,
}

impl std::fmt::Debug for Converter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Converter")
            .field("config", &self.config)
            .field("assembler", &self.assembler)
            .finish_non_exhaustive()
    }
}

impl Converter {
    /// Converter with the pipeline profile's defaults
    pub fn new(pipeline: PipelineKind) -> Result<Self> {
        Self::builder(pipeline).build()
    }

    /// Create a builder
    pub fn builder(pipeline: PipelineKind) -> ConverterBuilder {
        ConverterBuilder::new(pipeline)
    }

    /// Current configuration
    pub fn config(&self) -> &ConverterConfig {
        &self.config
    }

    /// Labels for a document; `fallback_source` is used when no source file
    /// was configured
    pub fn labels(&self, fallback_source: Option<&Path>) -> Vec<String> {
        let source = self.config.source.as_deref().or(fallback_source);
        build_labels(
            source,
            self.config.pipeline.name(),
            &self.config.version,
            &self.config.labels,
        )
    }

    /// Convert pipeline output read from `input`.
    ///
    /// When no source file was configured and the input is a file, labels
    /// are derived from the input path.
    pub fn convert(&self, input: Input) -> Result<Document> {
        let labels = self.labels(input.path());
        let json = input.read_text()?;
        self.convert_with_labels(&json, labels)
    }

    /// Convert pipeline output held in a string
    pub fn convert_str(&self, json: &str) -> Result<Document> {
        self.convert_with_labels(json, self.labels(None))
    }

    fn convert_with_labels(&self, json: &str, labels: Vec<String>) -> Result<Document> {
        let sentences = self.reader.read(json)?;
        log::debug!(
            "read {} sentences of {} output",
            sentences.len(),
            self.config.pipeline
        );
        self.assembler.assemble(labels, sentences)
    }
}

/// Converter builder
#[derive(Debug, Clone)]
pub struct ConverterBuilder {
    pipeline: PipelineKind,
    version: Option<String>,
    schema: Option<Schema>,
    labels: Vec<String>,
    source: Option<PathBuf>,
}

impl ConverterBuilder {
    /// Builder for a pipeline, all settings at their defaults
    pub fn new(pipeline: PipelineKind) -> Self {
        Self {
            pipeline,
            version: None,
            schema: None,
            labels: Vec::new(),
            source: None,
        }
    }

    /// Set the pipeline version (defaults to the profile's version)
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Set the output schema (defaults to the profile's schema)
    pub fn schema(mut self, schema: Schema) -> Self {
        self.schema = Some(schema);
        self
    }

    /// Append a user label
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.labels.push(label.into());
        self
    }

    /// Append user labels, keeping their order
    pub fn labels<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.labels.extend(labels.into_iter().map(Into::into));
        self
    }

    /// Set the original text file labels are derived from
    pub fn source(mut self, source: impl Into<PathBuf>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Build the converter
    pub fn build(self) -> Result<Converter> {
        let profile = self.pipeline.profile()?;

        let version = self
            .version
            .unwrap_or_else(|| profile.metadata.default_version.clone());
        if version.trim().is_empty() {
            return Err(ConvertError::Configuration(
                "pipeline version must not be empty".to_string(),
            ));
        }

        let schema = self.schema.unwrap_or(profile.output.schema);

        Ok(Converter {
            reader: self.pipeline.reader(),
            assembler: DocumentAssembler::new(schema),
            config: ConverterConfig {
                pipeline: self.pipeline,
                version,
                schema,
                labels: self.labels,
                source: self.source,
            },
        })
    }
}
