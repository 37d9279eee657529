//! spaCy conversion tests

use segrob_core::{Converter, DocumentBody, Input, PipelineKind, Schema};
use std::fs;
use tempfile::TempDir;

const DOC: &str = r#"{
    "text": "Quiero combinarlo. Vino del campo.",
    "ents": [],
    "sents": [{"start": 0, "end": 18}, {"start": 19, "end": 34}],
    "tokens": [
        {"id": 0, "start": 0, "end": 6, "tag": "VERB", "pos": "VERB", "morph": "Mood=Ind|Person=1", "lemma": "Querer", "dep": "ROOT", "head": 0},
        {"id": 1, "start": 7, "end": 17, "tag": "VERB", "pos": "VERB", "morph": "VerbForm=Inf", "lemma": "combinar él", "dep": "xcomp", "head": 0},
        {"id": 2, "start": 17, "end": 18, "tag": "PUNCT", "pos": "PUNCT", "morph": "PunctType=Peri", "lemma": ".", "dep": "punct", "head": 0},
        {"id": 3, "start": 19, "end": 23, "tag": "VERB", "pos": "VERB", "morph": "", "lemma": "venir", "dep": "ROOT", "head": 3},
        {"id": 4, "start": 24, "end": 27, "tag": "ADP", "pos": "ADP", "morph": "", "lemma": "del", "dep": "case", "head": 5},
        {"id": 5, "start": 28, "end": 33, "tag": "NOUN", "pos": "NOUN", "morph": "Gender=Masc", "lemma": "campo", "dep": "obl", "head": 3},
        {"id": 6, "start": 33, "end": 34, "tag": "PUNCT", "pos": "PUNCT", "morph": "", "lemma": ".", "dep": "punct", "head": 3}
    ]
}"#;

fn converter() -> Converter {
    Converter::new(PipelineKind::Spacy).unwrap()
}

#[test]
fn test_flat_by_default() {
    let doc = converter().convert_str(DOC).unwrap();
    assert_eq!(doc.schema(), Schema::Flat);
    assert!(matches!(doc.body, DocumentBody::Flat { .. }));
    assert_eq!(doc.sentence_count(), 2);
}

#[test]
fn test_split_lemma_becomes_two_records() {
    let doc = converter().convert_str(DOC).unwrap();
    let first: Vec<_> = doc.sentences().next().unwrap().to_vec();
    assert_eq!(first.len(), 4);

    let (combinar, el) = (&first[1], &first[2]);
    assert_eq!(combinar.text, "combinarlo");
    assert_eq!(el.text, "combinarlo");
    assert_eq!(combinar.idx, 7);
    assert_eq!(el.idx, 7);
    assert_eq!(combinar.lemma, "combinar");
    assert_eq!(el.lemma, "él");
    assert_eq!(el.tag, "VERB__VerbForm=Inf");
    assert_eq!(el.dep, "xcomp");
    assert_eq!((combinar.index, el.index), (1, 2));
    assert_eq!(first[3].index, 3);
}

#[test]
fn test_unsplit_contraction_stays_single() {
    let doc = converter().convert_str(DOC).unwrap();
    let second: Vec<_> = doc.sentences().nth(1).unwrap().to_vec();
    assert_eq!(second.len(), 4);

    let del = &second[1];
    assert_eq!(del.text, "del");
    assert_eq!(del.lemma, "del");
    assert_eq!(del.tag, "ADP");
    assert_eq!(del.idx, 24);
    assert_eq!(del.head, 2);
}

#[test]
fn test_ids_and_heads() {
    let doc = converter().convert_str(DOC).unwrap();
    let tokens: Vec<_> = doc.sentences().flatten().collect();

    let ids: Vec<usize> = tokens.iter().map(|t| t.id).collect();
    assert_eq!(ids, (0..8).collect::<Vec<_>>());

    let heads: Vec<usize> = tokens.iter().map(|t| t.head).collect();
    assert_eq!(heads, vec![0, 0, 0, 0, 0, 2, 0, 0]);

    assert_eq!(tokens[0].lemma, "querer");
    assert_eq!(tokens[0].dep, "root");
}

#[test]
fn test_labels_from_input_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("quijote-cervantes-spacy.json");
    fs::write(&path, DOC).unwrap();

    let doc = Converter::builder(PipelineKind::Spacy)
        .version("3.7.5")
        .label("es")
        .build()
        .unwrap()
        .convert(Input::from_file(&path))
        .unwrap();

    assert_eq!(
        doc.labels,
        vec!["quijote", "cervantes", "spacy", "spacy-3.7.5", "es"]
    );
}
