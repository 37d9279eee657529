//! Document label derivation
//!
//! Source files are conventionally named `<title>-<author>-<translator>.txt`.
//! Nothing checks that convention: the stem is split on `-` and whatever
//! comes out becomes a label.

use std::path::Path;

/// Separator between filename label parts
pub const FILENAME_SEPARATOR: char = '-';

/// Labels recovered from the stem of the source filename
pub fn filename_labels(source: &Path) -> Vec<String> {
    source
        .file_stem()
        .map(|stem| {
            stem.to_string_lossy()
                .split(FILENAME_SEPARATOR)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

/// Identifier of the pipeline that produced the annotations
pub fn pipeline_label(name: &str, version: &str) -> String {
    format!("{name}-{version}")
}

/// Build the full label list: filename parts, pipeline identifier, then
/// user labels in the order given
pub fn build_labels(
    source: Option<&Path>,
    pipeline: &str,
    version: &str,
    user_labels: &[String],
) -> Vec<String> {
    let mut labels = source.map(filename_labels).unwrap_or_default();
    labels.push(pipeline_label(pipeline, version));
    labels.extend(user_labels.iter().cloned());
    labels
}
