//! Configuration module
//!
//! ```toml
//! [conversion]
//! labels = ["es", "novela"]
//!
//! [pipelines.stanza]
//! version = "1.9.2"
//! schema = "grouped"
//!
//! [output]
//! pretty = true
//! ```

use crate::error::{CliError, CliResult};
use anyhow::Context;
use segrob_core::{PipelineKind, Schema};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default, PartialEq, Eq)]
pub struct CliConfig {
    /// Conversion configuration
    #[serde(default)]
    pub conversion: ConversionConfig,

    /// Per-pipeline overrides, keyed by pipeline name
    #[serde(default)]
    pub pipelines: BTreeMap<String, PipelineConfig>,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// Conversion-related configuration
#[derive(Debug, Deserialize, Serialize, Default, PartialEq, Eq)]
pub struct ConversionConfig {
    /// Labels added to every document, before command-line labels
    #[serde(default)]
    pub labels: Vec<String>,
}

/// Overrides for one pipeline
#[derive(Debug, Deserialize, Serialize, Default, PartialEq, Eq)]
pub struct PipelineConfig {
    /// Pipeline version used in the pipeline label
    pub version: Option<String>,

    /// Output schema
    pub schema: Option<Schema>,
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize, Default, PartialEq, Eq)]
pub struct OutputConfig {
    /// Pretty print JSON output
    #[serde(default)]
    pub pretty: bool,
}

impl CliConfig {
    /// Load a configuration file
    pub fn from_file(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_toml(&content)
            .with_context(|| format!("Invalid config file: {}", path.display()))
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> CliResult<Self> {
        let config: CliConfig = toml::from_str(content)?;

        for name in config.pipelines.keys() {
            if name.parse::<PipelineKind>().is_err() {
                return Err(CliError::ConfigError(format!(
                    "unknown pipeline section [pipelines.{name}]"
                ))
                .into());
            }
        }

        Ok(config)
    }

    /// Overrides for a pipeline, if any
    pub fn pipeline(&self, pipeline: PipelineKind) -> Option<&PipelineConfig> {
        self.pipelines.get(pipeline.name())
    }
}
