//! spaCy `Doc.to_json()` reader
//!
//! spaCy keeps one analysis per token. Tokens the model treats as several
//! words only show it in the lemma (`"combinar él"`), so every token becomes a
//! lemma-separated surface unit. Token text is not part of the serialization
//! and is sliced out of `text` using the character offsets. Heads are absolute
//! token indexes and the root points at itself.

use super::PipelineReader;
use crate::error::{ConvertError, Result};
use crate::unit::{Decomposition, HeadRef, OffsetHint, SentenceUnits, SubUnit, SurfaceUnit};
use serde::Deserialize;

const PIPELINE: &str = "spacy";

/// Reader for spaCy output
#[derive(Debug, Clone, Copy, Default)]
pub struct SpacyReader;

#[derive(Debug, Deserialize)]
struct SpacyDoc {
    text: String,
    #[serde(default)]
    sents: Vec<Span>,
    #[serde(default)]
    tokens: Vec<SpacyToken>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
struct Span {
    #[allow(dead_code)]
    start: usize,
    end: usize,
}

#[derive(Debug, Deserialize)]
struct SpacyToken {
    id: usize,
    start: usize,
    end: usize,
    pos: Option<String>,
    morph: Option<String>,
    lemma: Option<String>,
    dep: Option<String>,
    head: Option<usize>,
}

/// Byte position of every character, for slicing by character offsets
struct CharIndex {
    bytes: Vec<usize>,
}

impl CharIndex {
    fn new(text: &str) -> Self {
        let mut bytes: Vec<usize> = text.char_indices().map(|(i, _)| i).collect();
        bytes.push(text.len());
        Self { bytes }
    }

    fn slice<'t>(&self, text: &'t str, start: usize, end: usize) -> Option<&'t str> {
        if start > end {
            return None;
        }
        let from = *self.bytes.get(start)?;
        let to = *self.bytes.get(end)?;
        text.get(from..to)
    }
}

impl SpacyToken {
    fn required<T>(field: &str, text: &str, value: Option<T>) -> Result<T> {
        value.ok_or_else(|| {
            ConvertError::malformed(PIPELINE, format!("token '{text}' has no {field}"))
        })
    }

    fn into_unit(self, text: String, sentence_start: usize) -> Result<SurfaceUnit> {
        let head = Self::required("head", &text, self.head)?;
        let word = SubUnit {
            native_id: self.id,
            pos: Self::required("pos", &text, self.pos)?,
            features: self.morph.filter(|m| !m.is_empty()),
            dep: Self::required("dep", &text, self.dep)?,
            head: HeadRef::Absolute {
                head,
                sentence_start,
            },
            lemma: Self::required("lemma", &text, self.lemma)?,
        };

        Ok(SurfaceUnit {
            text,
            offset: OffsetHint::structured(self.start),
            decomposition: Decomposition::LemmaSeparated(word),
        })
    }
}

impl PipelineReader for SpacyReader {
    fn read(&self, json: &str) -> Result<Vec<SentenceUnits>> {
        let doc: SpacyDoc = serde_json::from_str(json)?;
        let chars = CharIndex::new(&doc.text);

        // Without a parser or sentencizer there is no segmentation: one sentence
        let spans = if doc.sents.is_empty() && !doc.tokens.is_empty() {
            vec![Span {
                start: 0,
                end: usize::MAX,
            }]
        } else {
            doc.sents
        };

        let mut sentences: Vec<SentenceUnits> = Vec::with_capacity(spans.len());
        let mut current: SentenceUnits = Vec::new();
        let mut span = 0;
        let mut sentence_start = 0;

        for token in doc.tokens {
            while span < spans.len() && token.start >= spans[span].end {
                sentences.push(std::mem::take(&mut current));
                span += 1;
            }
            if span == spans.len() {
                return Err(ConvertError::malformed(
                    PIPELINE,
                    format!("token {} at offset {} is outside every sentence", token.id, token.start),
                ));
            }

            let text = chars
                .slice(&doc.text, token.start, token.end)
                .ok_or_else(|| {
                    ConvertError::malformed(
                        PIPELINE,
                        format!(
                            "token {} span {}..{} is outside the text",
                            token.id, token.start, token.end
                        ),
                    )
                })?
                .to_string();

            if current.is_empty() {
                sentence_start = token.id;
            }
            current.push(token.into_unit(text, sentence_start)?);
        }

        if span < spans.len() {
            sentences.push(current);
            sentences.extend((span + 1..spans.len()).map(|_| Vec::new()));
        }

        Ok(sentences)
    }
}
