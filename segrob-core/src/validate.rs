//! Canonical document invariant checks

use crate::types::{Document, DocumentBody};
use thiserror::Error;

/// A broken invariant in a canonical document
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Violation {
    /// Global ids must run 0, 1, 2, ... without gaps
    #[error("token id {found} where {expected} was expected")]
    IdGap { expected: usize, found: usize },

    /// Sentence ids in the grouped schema must be sequential
    #[error("sentence id {found} where {expected} was expected")]
    SentenceId { expected: usize, found: usize },

    /// `index` must restart at 0 in every sentence and grow by one
    #[error("token {id} has index {found}, expected {expected}")]
    Index {
        id: usize,
        expected: usize,
        found: usize,
    },

    /// `head` must point inside the sentence
    #[error("token {id} has head {head} outside a sentence of {length} tokens")]
    HeadOutOfRange { id: usize, head: usize, length: usize },

    /// Lemmas are always lower-case
    #[error("token {id} lemma '{lemma}' is not lower-case")]
    LemmaCase { id: usize, lemma: String },

    /// Dependency labels are always lower-case
    #[error("token {id} dep '{dep}' is not lower-case")]
    DepCase { id: usize, dep: String },
}

/// Check a document against the canonical invariants, returning every
/// violation found in document order
pub fn validate(doc: &Document) -> Vec<Violation> {
    let mut violations = Vec::new();

    if let DocumentBody::Grouped { sentences } = &doc.body {
        for (expected, sentence) in sentences.iter().enumerate() {
            if sentence.id != expected {
                violations.push(Violation::SentenceId {
                    expected,
                    found: sentence.id,
                });
            }
        }
    }

    let mut expected_id = 0;
    for tokens in doc.sentences() {
        for (position, token) in tokens.iter().enumerate() {
            if token.id != expected_id {
                violations.push(Violation::IdGap {
                    expected: expected_id,
                    found: token.id,
                });
            }
            expected_id = token.id.saturating_add(1);

            if token.index != position {
                violations.push(Violation::Index {
                    id: token.id,
                    expected: position,
                    found: token.index,
                });
            }
            if token.head >= tokens.len() {
                violations.push(Violation::HeadOutOfRange {
                    id: token.id,
                    head: token.head,
                    length: tokens.len(),
                });
            }
            if token.lemma != token.lemma.to_lowercase() {
                violations.push(Violation::LemmaCase {
                    id: token.id,
                    lemma: token.lemma.clone(),
                });
            }
            if token.dep != token.dep.to_lowercase() {
                violations.push(Violation::DepCase {
                    id: token.id,
                    dep: token.dep.clone(),
                });
            }
        }
    }

    violations
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{CanonicalToken, Sentence};

    fn token(id: usize, index: usize, head: usize) -> CanonicalToken {
        CanonicalToken {
            id,
            pos: "NOUN".to_string(),
            tag: "NOUN".to_string(),
            dep: "obj".to_string(),
            head,
            text: "pan".to_string(),
            idx: 0,
            index,
            lemma: "pan".to_string(),
        }
    }

    fn flat(sentences: Vec<Vec<CanonicalToken>>) -> Document {
        Document {
            labels: vec![],
            body: DocumentBody::Flat { tokens: sentences },
        }
    }

    #[test]
    fn test_valid_document() {
        let doc = flat(vec![vec![token(0, 0, 0), token(1, 1, 0)], vec![token(2, 0, 0)]]);
        assert!(validate(&doc).is_empty());
    }

    #[test]
    fn test_id_gap() {
        let doc = flat(vec![vec![token(0, 0, 0), token(2, 1, 0)]]);
        assert_eq!(
            validate(&doc),
            vec![Violation::IdGap {
                expected: 1,
                found: 2
            }]
        );
    }

    #[test]
    fn test_index_must_reset() {
        let doc = flat(vec![vec![token(0, 0, 0)], vec![token(1, 1, 0)]]);
        assert_eq!(
            validate(&doc),
            vec![Violation::Index {
                id: 1,
                expected: 0,
                found: 1
            }]
        );
    }

    #[test]
    fn test_head_out_of_range() {
        let doc = flat(vec![vec![token(0, 0, 3)]]);
        assert!(matches!(
            validate(&doc)[0],
            Violation::HeadOutOfRange { head: 3, length: 1, .. }
        ));
    }

    #[test]
    fn test_case_violations() {
        let mut bad = token(0, 0, 0);
        bad.lemma = "Pan".to_string();
        bad.dep = "ROOT".to_string();
        let violations = validate(&flat(vec![vec![bad]]));
        assert_eq!(violations.len(), 2);
        assert_eq!(violations[0].to_string(), "token 0 lemma 'Pan' is not lower-case");
    }

    #[test]
    fn test_sentence_ids() {
        let doc = Document {
            labels: vec![],
            body: DocumentBody::Grouped {
                sentences: vec![Sentence {
                    id: 1,
                    tokens: vec![token(0, 0, 0)],
                }],
            },
        };
        assert_eq!(
            validate(&doc),
            vec![Violation::SentenceId {
                expected: 0,
                found: 1
            }]
        );
    }

    #[test]
    fn test_largest_id_is_reported() {
        let doc: Document = serde_json::from_str(&format!(
            r#"{{"labels": [], "tokens": [[
                {{"id": {}, "pos": "NOUN", "tag": "NOUN", "dep": "obj", "head": 0, "text": "pan", "idx": 0, "index": 0, "lemma": "pan"}},
                {{"id": 0, "pos": "NOUN", "tag": "NOUN", "dep": "obj", "head": 0, "text": "pan", "idx": 4, "index": 1, "lemma": "pan"}}
            ]]}}"#,
            usize::MAX
        ))
        .unwrap();

        assert_eq!(
            validate(&doc),
            vec![
                Violation::IdGap {
                    expected: 0,
                    found: usize::MAX
                },
                Violation::IdGap {
                    expected: usize::MAX,
                    found: 0
                },
            ]
        );
    }
}
