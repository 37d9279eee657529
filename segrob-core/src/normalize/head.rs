//! Head index rebasing
//!
//! Canonical heads are 0-based and sentence-relative. A root maps to 0, which
//! is also the value for "governed by the first word of the sentence". The
//! two cases cannot be told apart in the output; consumers that need true
//! roots must look at `dep`.

use crate::unit::HeadRef;

/// Convert a native head reference to its canonical value
pub fn rebase(head: HeadRef) -> usize {
    match head {
        HeadRef::OneBased(native) if native > 0 => (native - 1) as usize,
        HeadRef::OneBased(_) => 0,
        HeadRef::Absolute {
            head,
            sentence_start,
        } => head.saturating_sub(sentence_start),
    }
}
