//! SceneTree - Godot scene files as typed node trees.
//!
//! Parsing and export for Godot text scenes (`.tscn`). A scene is read into a
//! [`Node`](node::Node) tree of in-line nodes and references to other scenes,
//! which can then be exported as JSON or as a text outline.

pub mod config;
pub mod export;

mod error;

pub use scenetree_core::node;

pub use error::SceneTreeError;

use log::{debug, info, trace};

use config::{AppConfig, OutputFormat};
use export::{Exporter, json::JsonExporter, outline::OutlineExporter};
use scenetree_core::node::Node;

/// Builder for parsing and exporting scene trees.
///
/// # Examples
///
/// ```rust
/// use scenetree::{SceneTreeBuilder, config::AppConfig};
///
/// let source = "[node name=\"Main\" type=\"Node2D\"]";
///
/// // With custom config
/// let config = AppConfig::default();
/// let builder = SceneTreeBuilder::new(config);
///
/// // Parse source to node tree
/// let tree = builder.parse(source)
///     .expect("Failed to parse");
///
/// // Export node tree
/// let json = builder.render(&tree)
///     .expect("Failed to render");
/// assert!(json.contains("\"Main\""));
/// ```
#[derive(Default)]
pub struct SceneTreeBuilder {
    config: AppConfig,
}

impl SceneTreeBuilder {
    /// Create a new scene tree builder with the given configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Application configuration including output settings
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Parse scene source into its node tree.
    ///
    /// # Arguments
    ///
    /// * `source` - Scene file content as a string
    ///
    /// # Errors
    ///
    /// Returns `SceneTreeError::Parse` carrying the source for malformed
    /// declarations, duplicated resources, or an invalid tree.
    pub fn parse(&self, source: &str) -> Result<Node, SceneTreeError> {
        info!("Parsing scene");

        let tree = scenetree_parser::parse(source)
            .map_err(|err| SceneTreeError::new_parse_error(err, source))?;

        debug!(nodes = tree.node_count(); "Scene parsed successfully");
        trace!(tree:?; "Parsed scene");

        Ok(tree)
    }

    /// Export a node tree in the configured output format.
    ///
    /// # Errors
    ///
    /// Returns `SceneTreeError::Export` if the exporter fails.
    pub fn render(&self, tree: &Node) -> Result<String, SceneTreeError> {
        let output = self.config.output();
        info!(format:? = output.format(); "Exporting scene tree");

        let text = match output.format() {
            OutputFormat::Json => JsonExporter::new(output.pretty()).export(tree)?,
            OutputFormat::Outline => OutlineExporter::new().export(tree)?,
        };

        debug!(bytes = text.len(); "Scene tree exported");
        Ok(text)
    }
}
