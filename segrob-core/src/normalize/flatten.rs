//! Multi-word token flattening

use crate::unit::{Decomposition, SubUnit, SurfaceUnit};
use smallvec::SmallVec;

/// Separator spaCy uses inside the lemma of a multi-word token
pub const LEMMA_SEPARATOR: char = ' ';

/// One syntactic word paired with the surface unit it came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlatWord<'a> {
    /// Enclosing surface unit
    pub unit: &'a SurfaceUnit,
    /// Analysis the word inherits pos, features, dep and head from
    pub word: &'a SubUnit,
    /// Lemma of this word (a segment of `word.lemma` for split lemmas)
    pub lemma: &'a str,
}

/// Expand a surface unit into its syntactic words, preserving order.
///
/// Explicit decompositions yield one entry per listed word. Lemma-separated
/// units split on single spaces, exactly as the pipeline joined them;
/// contractions the pipeline leaves unsplit (`del`, `al`) stay one entry.
pub fn flatten(unit: &SurfaceUnit) -> SmallVec<[FlatWord<'_>; 2]> {
    match &unit.decomposition {
        Decomposition::Explicit(words) => words
            .iter()
            .map(|word| FlatWord {
                unit,
                word,
                lemma: &word.lemma,
            })
            .collect(),
        Decomposition::LemmaSeparated(word) => {
            let flat: SmallVec<[FlatWord<'_>; 2]> = word
                .lemma
                .split(LEMMA_SEPARATOR)
                .map(|lemma| FlatWord { unit, word, lemma })
                .collect();
            if flat.len() > 1 {
                log::trace!(
                    "split '{}' into {} words from lemma '{}'",
                    unit.text,
                    flat.len(),
                    word.lemma
                );
            }
            flat
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::unit::{HeadRef, OffsetHint};

    fn word(native_id: usize, pos: &str, lemma: &str) -> SubUnit {
        SubUnit {
            native_id,
            pos: pos.to_string(),
            features: None,
            dep: "obj".to_string(),
            head: HeadRef::OneBased(1),
            lemma: lemma.to_string(),
        }
    }

    fn unit(text: &str, decomposition: Decomposition) -> SurfaceUnit {
        SurfaceUnit {
            text: text.to_string(),
            offset: OffsetHint::structured(0),
            decomposition,
        }
    }

    #[test]
    fn test_single_word() {
        let u = unit("casa", Decomposition::single(word(1, "NOUN", "casa")));
        let flat = flatten(&u);
        assert_eq!(flat.len(), 1);
        assert_eq!(flat[0].lemma, "casa");
    }

    #[test]
    fn test_explicit_multi_word_preserves_order() {
        let words = smallvec::smallvec![word(3, "ADP", "de"), word(4, "DET", "el")];
        let u = unit("del", Decomposition::Explicit(words));
        let flat = flatten(&u);

        assert_eq!(flat.len(), 2);
        assert_eq!(flat[0].word.pos, "ADP");
        assert_eq!(flat[1].word.pos, "DET");
        assert!(flat.iter().all(|f| f.unit.text == "del"));
    }

    #[test]
    fn test_lemma_split_inherits_analysis() {
        let u = unit(
            "combinarlo",
            Decomposition::LemmaSeparated(word(7, "VERB", "combinar él")),
        );
        let flat = flatten(&u);

        let lemmas: Vec<&str> = flat.iter().map(|f| f.lemma).collect();
        assert_eq!(lemmas, vec!["combinar", "él"]);
        assert!(flat.iter().all(|f| f.word.pos == "VERB"));
    }

    #[test]
    fn test_unsplit_contraction_stays_single() {
        let u = unit("del", Decomposition::LemmaSeparated(word(2, "ADP", "del")));
        assert_eq!(flatten(&u).len(), 1);
    }

    #[test]
    fn test_consecutive_separators_keep_empty_segment() {
        let u = unit("x", Decomposition::LemmaSeparated(word(1, "X", "a  b")));
        let lemmas: Vec<&str> = flatten(&u).iter().map(|f| f.lemma).collect();
        assert_eq!(lemmas, vec!["a", "", "b"]);
    }
}
