//! Normalization rules shared by both pipelines
//!
//! Each surface unit goes through the same steps, in this order:
//! offset resolution, flattening into syntactic words, field mapping and
//! head rebasing. The [`crate::assembler`] drives them and assigns positions.

pub mod fields;
pub mod flatten;
pub mod head;
pub mod offset;

pub use fields::{compose_tag, normalize, NormalizedFields, TAG_SEPARATOR};
pub use flatten::{flatten, FlatWord, LEMMA_SEPARATOR};
pub use head::rebase;
pub use offset::{parse_misc_start, resolve_offset};
