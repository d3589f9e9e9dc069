//! Error types for SceneTree operations.
//!
//! This module provides the main error type [`SceneTreeError`] which wraps
//! the error conditions that can occur while parsing and exporting scenes.

use std::io;

use thiserror::Error;

use scenetree_parser::error::ParseError;

/// The main error type for SceneTree operations.
///
/// # Diagnostic Variants
///
/// The `Parse` variant keeps the scene source next to the structured
/// [`ParseError`], so its spans can be rendered against the text.
#[derive(Debug, Error)]
pub enum SceneTreeError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{err}")]
    Parse { err: ParseError, src: String },

    #[error("Export error: {0}")]
    Export(Box<dyn std::error::Error + Send + Sync>),
}

impl From<crate::export::Error> for SceneTreeError {
    fn from(error: crate::export::Error) -> Self {
        Self::Export(Box::new(error))
    }
}

impl SceneTreeError {
    /// Create a new `Parse` error with the associated source text.
    pub fn new_parse_error(err: ParseError, src: impl Into<String>) -> Self {
        Self::Parse {
            err,
            src: src.into(),
        }
    }
}
