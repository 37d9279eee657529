//! Stanza `to_dict()` reader
//!
//! Stanza serializes a document as a list of sentences, each a flat list of
//! entries. A multi-word token is a range entry (`[13, 14]`, or `"13-14"` in
//! older releases) carrying the surface text and offset, immediately followed
//! by the entries of its syntactic words:
//!
//! ```text
//! {"id": [13, 14], "text": "meterse", "start_char": 62, "end_char": 69}
//! {"id": 13, "text": "meter", "lemma": "meter", "upos": "VERB", "head": 5, ...}
//! {"id": 14, "text": "se", "lemma": "él", "upos": "PRON", "head": 13, ...}
//! ```
//!
//! Ordinary words are a single entry. Older releases carry the offsets in
//! `misc` (`start_char=62|end_char=69`) instead of `start_char`.
//!
//! Heads are 1-based word ids within the sentence; a head past the last word
//! is malformed output.

use super::PipelineReader;
use crate::error::{ConvertError, Result};
use crate::unit::{Decomposition, HeadRef, OffsetHint, SentenceUnits, SubUnit, SurfaceUnit};
use serde::Deserialize;
use smallvec::SmallVec;
use std::iter::Peekable;

const PIPELINE: &str = "stanza";

/// Reader for Stanza output
#[derive(Debug, Clone, Copy, Default)]
pub struct StanzaReader;

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawId {
    Number(usize),
    List(Vec<usize>),
    Text(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EntryId {
    Word(usize),
    Range(usize, usize),
}

#[derive(Debug, Deserialize)]
struct Entry {
    id: RawId,
    text: Option<String>,
    lemma: Option<String>,
    upos: Option<String>,
    feats: Option<String>,
    head: Option<i64>,
    deprel: Option<String>,
    start_char: Option<usize>,
    misc: Option<String>,
}

impl RawId {
    fn parse(&self) -> Result<EntryId> {
        let id = match self {
            RawId::Number(n) => Some(EntryId::Word(*n)),
            RawId::List(ids) => match ids.as_slice() {
                [n] => Some(EntryId::Word(*n)),
                [first, last] => Some(EntryId::Range(*first, *last)),
                _ => None,
            },
            RawId::Text(text) => match text.split_once('-') {
                Some((first, last)) => first
                    .parse::<usize>()
                    .ok()
                    .zip(last.parse::<usize>().ok())
                    .map(|(first, last)| EntryId::Range(first, last)),
                None => text.parse().ok().map(EntryId::Word),
            },
        };

        id.ok_or_else(|| ConvertError::malformed(PIPELINE, format!("unsupported id {self:?}")))
    }
}

impl Entry {
    fn display_text(&self) -> &str {
        self.text.as_deref().unwrap_or("<no text>")
    }

    fn offset_hint(&self) -> OffsetHint {
        OffsetHint {
            start_char: self.start_char,
            misc: self.misc.clone(),
        }
    }

    fn surface_text(&self) -> Result<String> {
        self.text.clone().ok_or_else(|| {
            ConvertError::malformed(PIPELINE, format!("token {:?} has no text", self.id))
        })
    }

    fn required(&self, field: &str, value: Option<String>) -> Result<String> {
        value.ok_or_else(|| {
            ConvertError::malformed(
                PIPELINE,
                format!("word '{}' has no {field}", self.display_text()),
            )
        })
    }

    fn into_sub_unit(self, native_id: usize) -> Result<SubUnit> {
        let head = self.head.ok_or_else(|| {
            ConvertError::malformed(
                PIPELINE,
                format!("word '{}' has no head", self.display_text()),
            )
        })?;
        let pos = self.required("upos", self.upos.clone())?;
        let dep = self.required("deprel", self.deprel.clone())?;
        let lemma = self.required("lemma", self.lemma.clone())?;

        Ok(SubUnit {
            native_id,
            pos,
            features: self.feats.filter(|f| !f.is_empty()),
            dep,
            head: HeadRef::OneBased(head),
            lemma,
        })
    }
}

impl PipelineReader for StanzaReader {
    fn read(&self, json: &str) -> Result<Vec<SentenceUnits>> {
        let sentences: Vec<Vec<Entry>> = serde_json::from_str(json)?;

        sentences
            .into_iter()
            .map(|entries| read_sentence(entries.into_iter().peekable()))
            .collect()
    }
}

fn read_sentence<I>(mut entries: Peekable<I>) -> Result<SentenceUnits>
where
    I: Iterator<Item = Entry>,
{
    let mut units = Vec::new();

    while let Some(entry) = entries.next() {
        let unit = match entry.id.parse()? {
            EntryId::Word(native_id) => SurfaceUnit {
                text: entry.surface_text()?,
                offset: entry.offset_hint(),
                decomposition: Decomposition::single(entry.into_sub_unit(native_id)?),
            },
            EntryId::Range(first, last) => read_multi_word(entry, first, last, &mut entries)?,
        };
        units.push(unit);
    }

    check_heads(&units)?;
    Ok(units)
}

/// Heads are 1-based word ids, so none may exceed the sentence's word count
fn check_heads(units: &[SurfaceUnit]) -> Result<()> {
    let words = units
        .iter()
        .map(|unit| match &unit.decomposition {
            Decomposition::Explicit(words) => words.len(),
            Decomposition::LemmaSeparated(_) => 1,
        })
        .sum::<usize>();

    for unit in units {
        if let Decomposition::Explicit(sub_units) = &unit.decomposition {
            for word in sub_units {
                if let HeadRef::OneBased(head) = word.head {
                    if usize::try_from(head).is_ok_and(|head| head > words) {
                        return Err(ConvertError::malformed(
                            PIPELINE,
                            format!(
                                "word {} of '{}' has head {head} outside a sentence of {words} words",
                                word.native_id, unit.text
                            ),
                        ));
                    }
                }
            }
        }
    }

    Ok(())
}

fn read_multi_word<I>(
    header: Entry,
    first: usize,
    last: usize,
    entries: &mut Peekable<I>,
) -> Result<SurfaceUnit>
where
    I: Iterator<Item = Entry>,
{
    let text = header.surface_text()?;
    if last < first {
        return Err(ConvertError::malformed(
            PIPELINE,
            format!("multi-word token '{text}' has inverted range {first}-{last}"),
        ));
    }

    let expected = last
        .checked_sub(first)
        .and_then(|span| span.checked_add(1))
        .ok_or_else(|| {
            ConvertError::malformed(
                PIPELINE,
                format!("multi-word token '{text}' has unsupported range {first}-{last}"),
            )
        })?;

    let mut words = SmallVec::new();
    loop {
        let native_id = match entries.peek() {
            Some(next) => match next.id.parse()? {
                EntryId::Word(n) if (first..=last).contains(&n) => n,
                _ => break,
            },
            None => break,
        };
        if let Some(word) = entries.next() {
            words.push(word.into_sub_unit(native_id)?);
        }
    }

    if words.len() != expected {
        return Err(ConvertError::malformed(
            PIPELINE,
            format!(
                "multi-word token '{text}' ({first}-{last}) lists {} of {expected} words",
                words.len()
            ),
        ));
    }

    log::trace!("multi-word token '{}' expands to {} words", text, expected);

    Ok(SurfaceUnit {
        text,
        offset: header.offset_hint(),
        decomposition: Decomposition::Explicit(words),
    })
}
