//! Document assembly
//!
//! Runs the normalization steps over every surface unit in document order
//! and assigns the positional fields: the global `id` and the per-sentence
//! `index`. The pipeline's sentence segmentation is taken as-is.

use crate::error::Result;
use crate::normalize::{flatten, normalize, rebase, resolve_offset};
use crate::types::{CanonicalToken, Document, DocumentBody, Schema, Sentence};
use crate::unit::{SentenceUnits, SurfaceUnit};

/// Assembler for canonical documents
#[derive(Debug, Clone, Copy)]
pub struct DocumentAssembler {
    schema: Schema,
}

impl DocumentAssembler {
    /// Create an assembler for a schema variant
    pub fn new(schema: Schema) -> Self {
        Self { schema }
    }

    /// Schema the assembler produces
    pub fn schema(&self) -> Schema {
        self.schema
    }

    /// Assemble sentences of surface units into a document.
    ///
    /// Fails on the first unit whose offset cannot be resolved; no partial
    /// document is ever returned.
    pub fn assemble<I>(&self, labels: Vec<String>, sentences: I) -> Result<Document>
    where
        I: IntoIterator<Item = SentenceUnits>,
    {
        let mut next_id = 0;
        let mut records = Vec::new();

        for units in sentences {
            records.push(assemble_sentence(&units, &mut next_id)?);
        }

        log::debug!(
            "assembled {} records in {} sentences ({} schema)",
            next_id,
            records.len(),
            self.schema
        );

        let body = match self.schema {
            Schema::Grouped => DocumentBody::Grouped {
                sentences: records
                    .into_iter()
                    .enumerate()
                    .map(|(id, tokens)| Sentence { id, tokens })
                    .collect(),
            },
            Schema::Flat => DocumentBody::Flat { tokens: records },
        };

        Ok(Document { labels, body })
    }
}

impl Default for DocumentAssembler {
    fn default() -> Self {
        Self::new(Schema::Grouped)
    }
}

fn assemble_sentence(units: &[SurfaceUnit], next_id: &mut usize) -> Result<Vec<CanonicalToken>> {
    let mut tokens = Vec::with_capacity(units.len());

    for unit in units {
        let idx = resolve_offset(unit)?;

        for flat in flatten(unit) {
            let fields = normalize(&flat, idx);
            tokens.push(CanonicalToken {
                id: *next_id,
                pos: fields.pos,
                tag: fields.tag,
                dep: fields.dep,
                head: rebase(flat.word.head),
                text: fields.text,
                idx: fields.idx,
                index: tokens.len(),
                lemma: fields.lemma,
            });
            *next_id += 1;
        }
    }

    Ok(tokens)
}
