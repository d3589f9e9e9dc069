//! Export functionality for scene trees.
//!
//! This module provides the [`Exporter`] trait that converts an assembled
//! [`Node`] tree into text. It is the final stage of the pipeline.
//!
//! # Pipeline Position
//!
//! ```text
//! Scene Source
//!     ↓ parse
//! Node Tree
//!     ↓ export (this module)
//! Output Text
//! ```
//!
//! # Available Backends
//!
//! - [`json`] - Tagged JSON tree via [`json::JsonExporter`]
//! - [`outline`] - Indented text outline via [`outline::OutlineExporter`]

/// JSON export backend.
pub mod json;
/// Outline export backend.
pub mod outline;

use scenetree_core::node::Node;

/// Abstraction for scene tree export backends.
pub trait Exporter {
    /// Exports the tree rooted at `root` to the backend's output format.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Json`] if serialization fails, or [`Error::Render`]
    /// if the tree cannot be written in the target format.
    fn export(&self, root: &Node) -> Result<String, Error>;
}

/// Errors that can occur during scene tree export.
///
/// This type is converted into [`SceneTreeError::Export`] at the crate
/// boundary.
///
/// [`SceneTreeError::Export`]: crate::SceneTreeError::Export
#[derive(Debug)]
pub enum Error {
    /// A rendering failure described by `message`.
    Render(String),
    /// A JSON serialization failure.
    Json(serde_json::Error),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Render(msg) => write!(f, "Render error: {msg}"),
            Self::Json(err) => write!(f, "JSON error: {err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Render(_) => None,
            Self::Json(err) => Some(err),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}
