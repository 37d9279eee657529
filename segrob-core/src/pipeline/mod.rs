//! Pipeline output readers
//!
//! A reader turns one pipeline's native JSON serialization into sentences of
//! [`SurfaceUnit`](crate::unit::SurfaceUnit)s. Readers only reshape: offsets
//! are resolved and fields normalized later, identically for every pipeline.

pub mod profile;
pub mod spacy;
pub mod stanza;

use crate::error::{ConvertError, Result};
use crate::unit::SentenceUnits;
use std::fmt;
use std::str::FromStr;

pub use profile::{get_profile, list_profiles, PipelineProfile};
pub use spacy::SpacyReader;
pub use stanza::StanzaReader;

/// Reads a pipeline's serialized output
pub trait PipelineReader {
    /// Parse serialized output into sentences of surface units
    fn read(&self, json: &str) -> Result<Vec<SentenceUnits>>;
}

/// Supported annotation pipelines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PipelineKind {
    /// Stanza, hierarchical multi-word tokens
    Stanza,
    /// spaCy, multi-word lemmas separated by spaces
    Spacy,
}

impl PipelineKind {
    /// All supported pipelines
    pub const ALL: [PipelineKind; 2] = [PipelineKind::Stanza, PipelineKind::Spacy];

    /// Pipeline name, as used in labels and profiles
    pub fn name(&self) -> &'static str {
        match self {
            PipelineKind::Stanza => "stanza",
            PipelineKind::Spacy => "spacy",
        }
    }

    /// Embedded profile of the pipeline
    pub fn profile(&self) -> Result<&'static PipelineProfile> {
        get_profile(self.name())
    }

    /// Reader for the pipeline's serialized output
    pub fn reader(&self) -> Box<dyn PipelineReader> {
        match self {
            PipelineKind::Stanza => Box::new(StanzaReader),
            PipelineKind::Spacy => Box::new(SpacyReader),
        }
    }
}

impl fmt::Display for PipelineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PipelineKind {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "stanza" => Ok(PipelineKind::Stanza),
            "spacy" => Ok(PipelineKind::Spacy),
            other => Err(ConvertError::UnknownPipeline(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_match_profiles() {
        for kind in PipelineKind::ALL {
            let profile = kind.profile().unwrap();
            assert_eq!(profile.metadata.name, kind.name());
        }
    }

    #[test]
    fn test_from_str() {
        assert_eq!("stanza".parse::<PipelineKind>().unwrap(), PipelineKind::Stanza);
        assert_eq!("spacy".parse::<PipelineKind>().unwrap(), PipelineKind::Spacy);
        assert!("Stanza".parse::<PipelineKind>().is_err());
    }
}
