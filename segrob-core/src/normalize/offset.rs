//! Start-offset resolution

use crate::error::{ConvertError, Result};
use crate::unit::SurfaceUnit;
use regex::Regex;
use std::sync::OnceLock;

static START_CHAR: OnceLock<Regex> = OnceLock::new();

fn start_char_pattern() -> &'static Regex {
    START_CHAR.get_or_init(|| {
        Regex::new(r"(?:^|\|)start_char=(\d+)(?:\||$)").expect("start_char pattern is valid")
    })
}

/// Extract `start_char` from a `key=value|key=value` metadata string
pub fn parse_misc_start(misc: &str) -> Option<usize> {
    start_char_pattern()
        .captures(misc)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

/// Absolute start offset of a surface unit.
///
/// The structured field wins; the metadata string is only consulted when the
/// pipeline did not expose one. A unit with neither is a fatal error.
pub fn resolve_offset(unit: &SurfaceUnit) -> Result<usize> {
    if let Some(start) = unit.offset.start_char {
        return Ok(start);
    }

    unit.offset
        .misc
        .as_deref()
        .and_then(parse_misc_start)
        .ok_or_else(|| ConvertError::MissingOffset {
            text: unit.text.clone(),
        })
}
