//! Canonical document types
//!
//! These are the records consumed by segrob. Field names, field order and the
//! two body shapes are a compatibility contract: changing any of them needs a
//! new [`Schema`] variant.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One syntactic word in the canonical document format
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanonicalToken {
    /// Global 0-based sequential index across the whole document
    pub id: usize,
    /// Coarse part-of-speech tag
    pub pos: String,
    /// `pos`, or `pos__features` when morphological features exist
    pub tag: String,
    /// Lower-cased dependency relation
    pub dep: String,
    /// 0-based sentence-relative index of the governor (0 also for roots)
    pub head: usize,
    /// Text of the enclosing surface unit
    pub text: String,
    /// Start character offset of the enclosing surface unit
    pub idx: usize,
    /// 0-based position in the sentence after multi-word expansion
    pub index: usize,
    /// Lower-cased lemma
    pub lemma: String,
}

/// A sentence in the grouped schema
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sentence {
    /// Sequential sentence index in the document
    pub id: usize,
    /// Records of the sentence, in order
    pub tokens: Vec<CanonicalToken>,
}

/// Document body, one shape per schema variant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DocumentBody {
    /// `{"sentences": [{"id": .., "tokens": [..]}, ..]}`
    Grouped {
        /// Sentences with explicit ids
        sentences: Vec<Sentence>,
    },
    /// `{"tokens": [[..], ..]}`
    Flat {
        /// One record list per sentence
        tokens: Vec<Vec<CanonicalToken>>,
    },
}

/// A complete canonical document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Metadata labels
    pub labels: Vec<String>,
    /// Sentence records
    #[serde(flatten)]
    pub body: DocumentBody,
}

impl Document {
    /// Schema variant of this document
    pub fn schema(&self) -> Schema {
        match self.body {
            DocumentBody::Grouped { .. } => Schema::Grouped,
            DocumentBody::Flat { .. } => Schema::Flat,
        }
    }

    /// Iterate over the record lists of every sentence, in order
    pub fn sentences(&self) -> Box<dyn Iterator<Item = &[CanonicalToken]> + '_> {
        match &self.body {
            DocumentBody::Grouped { sentences } => {
                Box::new(sentences.iter().map(|s| s.tokens.as_slice()))
            }
            DocumentBody::Flat { tokens } => Box::new(tokens.iter().map(Vec::as_slice)),
        }
    }

    /// Number of sentences
    pub fn sentence_count(&self) -> usize {
        match &self.body {
            DocumentBody::Grouped { sentences } => sentences.len(),
            DocumentBody::Flat { tokens } => tokens.len(),
        }
    }

    /// Total number of records
    pub fn token_count(&self) -> usize {
        self.sentences().map(<[CanonicalToken]>::len).sum()
    }

    /// Rewrite the body in another schema variant.
    ///
    /// Grouped output numbers sentences 0..n in document order, even when
    /// the source was already grouped. Records pass through untouched.
    pub fn into_schema(self, schema: Schema) -> Document {
        let tokens: Vec<Vec<CanonicalToken>> = match self.body {
            DocumentBody::Grouped { sentences } => {
                sentences.into_iter().map(|s| s.tokens).collect()
            }
            DocumentBody::Flat { tokens } => tokens,
        };

        let body = match schema {
            Schema::Grouped => DocumentBody::Grouped {
                sentences: tokens
                    .into_iter()
                    .enumerate()
                    .map(|(id, tokens)| Sentence { id, tokens })
                    .collect(),
            },
            Schema::Flat => DocumentBody::Flat { tokens },
        };

        Document {
            labels: self.labels,
            body,
        }
    }
}

/// Target schema variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Schema {
    /// Sentences grouped with an explicit id
    Grouped,
    /// Flat list of per-sentence record lists
    Flat,
}

impl Schema {
    /// All schema variants
    pub const ALL: [Schema; 2] = [Schema::Grouped, Schema::Flat];

    /// Name used in configuration files and on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            Schema::Grouped => "grouped",
            Schema::Flat => "flat",
        }
    }
}

impl fmt::Display for Schema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Schema {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "grouped" => Ok(Schema::Grouped),
            "flat" => Ok(Schema::Flat),
            other => Err(format!("unknown schema '{other}' (expected grouped or flat)")),
        }
    }
}
