//! Normalization of NLP pipeline output into the segrob document format
//!
//! Stanza and spaCy disagree on how a surface word that holds several
//! syntactic words is represented. Stanza lists the words under a multi-word
//! token; spaCy keeps one token and joins the lemmas with spaces. This crate
//! reads both serializations into a common surface-unit model and flattens it
//! into one record per syntactic word, each carrying the surface text and
//! offset needed to rebuild the original spacing.
//!
//! # Example
//!
//! ```rust
//! use segrob_core::{Converter, PipelineKind, Schema};
//!
//! let json = r#"[[
//!     {"id": [1, 2], "text": "del", "start_char": 0, "end_char": 3},
//!     {"id": 1, "text": "de", "lemma": "de", "upos": "ADP", "head": 3, "deprel": "case"},
//!     {"id": 2, "text": "el", "lemma": "el", "upos": "DET", "head": 3, "deprel": "det"},
//!     {"id": 3, "text": "campo", "lemma": "campo", "upos": "NOUN", "head": 0, "deprel": "root", "start_char": 4}
//! ]]"#;
//!
//! let converter = Converter::builder(PipelineKind::Stanza)
//!     .version("1.9.2")
//!     .schema(Schema::Grouped)
//!     .build()
//!     .unwrap();
//! let doc = converter.convert_str(json).unwrap();
//!
//! let tokens: Vec<_> = doc.sentences().flatten().collect();
//! assert_eq!(tokens.len(), 3);
//! assert_eq!(tokens[0].text, "del");
//! assert_eq!(tokens[1].text, "del");
//! assert_eq!(tokens[1].idx, tokens[0].idx);
//! ```

pub mod assembler;
pub mod converter;
pub mod error;
pub mod input;
pub mod labels;
pub mod normalize;
pub mod pipeline;
pub mod types;
pub mod unit;
pub mod validate;

pub use assembler::DocumentAssembler;
pub use converter::{Converter, ConverterBuilder, ConverterConfig};
pub use error::{ConvertError, Result};
pub use input::Input;
pub use labels::build_labels;
pub use pipeline::{PipelineKind, PipelineReader};
pub use types::{CanonicalToken, Document, DocumentBody, Schema, Sentence};
pub use unit::{Decomposition, HeadRef, OffsetHint, SubUnit, SurfaceUnit};
pub use validate::{validate, Violation};
