//! Pipeline-neutral surface units
//!
//! Both pipeline readers produce [`SurfaceUnit`]s. The way a surface unit
//! expands into several syntactic words differs per pipeline and is captured
//! by [`Decomposition`], so everything downstream is written once.

use smallvec::SmallVec;

/// Offset metadata exposed by the pipeline for a surface unit
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OffsetHint {
    /// Structured start-character field, when the pipeline has one
    pub start_char: Option<usize>,
    /// `key=value|key=value` metadata string used by older pipeline releases
    pub misc: Option<String>,
}

impl OffsetHint {
    /// Hint carrying a structured offset
    pub fn structured(start_char: usize) -> Self {
        Self {
            start_char: Some(start_char),
            misc: None,
        }
    }

    /// Hint carrying only a metadata string
    pub fn misc(misc: impl Into<String>) -> Self {
        Self {
            start_char: None,
            misc: Some(misc.into()),
        }
    }
}

/// Reference to the governing word as the pipeline encodes it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadRef {
    /// 1-based sentence-relative id; 0 (or below) marks the root
    OneBased(i64),
    /// Absolute document token index; the root points at itself
    Absolute {
        /// Absolute index of the governor
        head: usize,
        /// Absolute index of the first token of the sentence
        sentence_start: usize,
    },
}

/// One syntactic word inside a surface unit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubUnit {
    /// Pipeline-native position of the word
    pub native_id: usize,
    /// Coarse part-of-speech tag
    pub pos: String,
    /// Morphological feature string, `None` when the pipeline has none
    pub features: Option<String>,
    /// Dependency relation as emitted by the pipeline
    pub dep: String,
    /// Governor reference
    pub head: HeadRef,
    /// Lemma as emitted by the pipeline (case preserved)
    pub lemma: String,
}

/// How a surface unit expands into syntactic words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decomposition {
    /// The pipeline lists every syntactic word; multi-word tokens hold several
    Explicit(SmallVec<[SubUnit; 1]>),
    /// A single analysis whose lemma separates several words with spaces
    LemmaSeparated(SubUnit),
}

impl Decomposition {
    /// Decomposition holding a single word
    pub fn single(word: SubUnit) -> Self {
        let mut words = SmallVec::new();
        words.push(word);
        Decomposition::Explicit(words)
    }
}

/// Span of original text as segmented by the pipeline
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurfaceUnit {
    /// Original surface text
    pub text: String,
    /// Offset metadata
    pub offset: OffsetHint,
    /// Syntactic words the unit expands into
    pub decomposition: Decomposition,
}

/// Surface units of one sentence, in order
pub type SentenceUnits = Vec<SurfaceUnit>;
