//! Embedded pipeline profiles
//!
//! Each supported pipeline ships a small TOML descriptor with its display
//! name, the version assumed when none is given and the schema variant its
//! documents use by default.

use crate::error::{ConvertError, Result};
use crate::types::Schema;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::OnceLock;

static PROFILES: OnceLock<HashMap<String, PipelineProfile>> = OnceLock::new();

macro_rules! embed_profile {
    ($name:expr, $path:expr) => {
        ($name, include_str!($path))
    };
}

/// Descriptor of a supported pipeline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineProfile {
    pub metadata: ProfileMetadata,
    pub output: ProfileOutput,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileMetadata {
    pub name: String,
    pub description: String,
    pub default_version: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileOutput {
    pub schema: Schema,
}

fn load_embedded_profiles() -> Result<HashMap<String, PipelineProfile>> {
    let mut profiles = HashMap::new();

    let embedded = [
        embed_profile!("stanza", "../../configs/pipelines/stanza.toml"),
        embed_profile!("spacy", "../../configs/pipelines/spacy.toml"),
    ];

    for (name, toml_content) in embedded {
        let profile: PipelineProfile = toml::from_str(toml_content).map_err(|e| {
            ConvertError::Configuration(format!("Failed to parse {name} profile: {e}"))
        })?;

        if profile.metadata.name != name {
            return Err(ConvertError::Configuration(format!(
                "Profile name mismatch: expected {}, got {}",
                name, profile.metadata.name
            )));
        }

        profiles.insert(name.to_string(), profile);
    }

    Ok(profiles)
}

fn profiles() -> &'static HashMap<String, PipelineProfile> {
    PROFILES.get_or_init(|| load_embedded_profiles().expect("Failed to load embedded pipeline profiles"))
}

/// Profile for a pipeline name
pub fn get_profile(name: &str) -> Result<&'static PipelineProfile> {
    profiles()
        .get(name)
        .ok_or_else(|| ConvertError::UnknownPipeline(name.to_string()))
}

/// Names of all embedded profiles, sorted
pub fn list_profiles() -> Vec<&'static str> {
    let mut names: Vec<&'static str> = profiles().keys().map(String::as_str).collect();
    names.sort_unstable();
    names
}
