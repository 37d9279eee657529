//! Input sources for pipeline output

use crate::error::{ConvertError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Where the serialized pipeline output comes from
#[derive(Clone, PartialEq, Eq)]
pub enum Input {
    /// JSON already in memory
    Text(String),
    /// JSON file on disk; its path also feeds the filename labels
    File(PathBuf),
}

// Only the length of in-memory text is shown
impl std::fmt::Debug for Input {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Input::Text(text) => write!(f, "Text({} bytes)", text.len()),
            Input::File(path) => write!(f, "File({})", path.display()),
        }
    }
}

impl Input {
    /// Input held in memory
    pub fn from_text(text: impl Into<String>) -> Self {
        Input::Text(text.into())
    }

    /// Input read from a file
    pub fn from_file(path: impl Into<PathBuf>) -> Self {
        Input::File(path.into())
    }

    /// Path of the input, when it is a file
    pub fn path(&self) -> Option<&Path> {
        match self {
            Input::File(path) => Some(path.as_path()),
            Input::Text(_) => None,
        }
    }

    /// Read the whole input as UTF-8 text
    pub fn read_text(self) -> Result<String> {
        match self {
            Input::Text(text) => Ok(text),
            Input::File(path) => {
                fs::read_to_string(&path).map_err(|e| ConvertError::InputRead {
                    origin: path.display().to_string(),
                    reason: e.to_string(),
                })
            }
        }
    }
}
