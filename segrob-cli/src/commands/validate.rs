//! Validate command implementation

use crate::error::{CliError, CliResult};
use crate::input::FileReader;
use anyhow::Context;
use clap::Args;
use segrob_core::{validate, Document};
use std::path::PathBuf;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// segrob document to validate
    #[arg(value_name = "FILE")]
    pub input: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> CliResult<()> {
        let content = FileReader::read_text(&self.input)?;
        let document: Document = serde_json::from_str(&content)
            .with_context(|| format!("Not a segrob document: {}", self.input.display()))?;

        let violations = validate(&document);
        if violations.is_empty() {
            println!("✓ Document is valid: {}", self.input.display());
            println!(
                "  {} schema, {} sentences, {} tokens",
                document.schema(),
                document.sentence_count(),
                document.token_count()
            );
            return Ok(());
        }

        println!("✗ Document is invalid: {}", self.input.display());
        for violation in &violations {
            println!("  {violation}");
        }

        Err(CliError::InvalidDocument {
            path: self.input.display().to_string(),
            violations: violations.len(),
        }
        .into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn args_for(content: &str) -> (NamedTempFile, ValidateArgs) {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", content).unwrap();
        let args = ValidateArgs {
            input: file.path().to_path_buf(),
        };
        (file, args)
    }

    #[test]
    fn test_validate_valid_document() {
        let (_file, args) = args_for(
            r#"{"labels": ["spacy-3.7.5"], "tokens": [[
                {"id": 0, "pos": "INTJ", "tag": "INTJ", "dep": "root", "head": 0, "text": "Hola", "idx": 0, "index": 0, "lemma": "hola"}
            ]]}"#,
        );
        assert!(args.execute().is_ok());
    }

    #[test]
    fn test_validate_invalid_document() {
        let (_file, args) = args_for(
            r#"{"labels": [], "sentences": [{"id": 0, "tokens": [
                {"id": 1, "pos": "INTJ", "tag": "INTJ", "dep": "ROOT", "head": 0, "text": "Hola", "idx": 0, "index": 0, "lemma": "hola"}
            ]}]}"#,
        );
        let err = args.execute().unwrap_err();
        match err.downcast_ref::<CliError>() {
            Some(CliError::InvalidDocument { violations, .. }) => assert_eq!(*violations, 2),
            other => panic!("Expected InvalidDocument, got {other:?}"),
        }
    }

    #[test]
    fn test_validate_not_a_document() {
        let (_file, args) = args_for(r#"[[{"id": 1}]]"#);
        let err = args.execute().unwrap_err();
        assert!(err.to_string().contains("Not a segrob document"));
    }
}
