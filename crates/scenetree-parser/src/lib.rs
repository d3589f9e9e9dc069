//! # SceneTree Parser
//!
//! Parser for Godot text scene files (`.tscn`). This crate turns the scene
//! source into a [`Node`] tree.
//!
//! ## Usage
//!
//! ```
//! # use scenetree_parser::{parse, ParseError};
//!
//! fn main() -> Result<(), ParseError> {
//!     let source = r#"
//! [gd_scene load_steps=2 format=3]
//!
//! [ext_resource type="PackedScene" path="res://enemy.tscn" id="1_enemy"]
//!
//! [node name="Main" type="Node2D"]
//!
//! [node name="Enemy" parent="." instance=ExtResource("1_enemy")]
//! "#;
//!
//!     let tree = parse(source)?;
//!     assert_eq!(tree.name(), "Main");
//!     assert_eq!(tree.children().len(), 1);
//!     Ok(())
//! }
//! ```

pub mod error;

mod lines;
mod params;
#[cfg(test)]
mod parser_tests;
mod records;
mod resources;
mod span;
mod tree;

pub use error::ParseError;
pub use records::{NodeKind, NodeParams, extract_node_records};
pub use resources::{ResourceIndex, SceneResource, build_resource_index};
pub use span::Span;
pub use tree::assemble_tree;

use log::info;

use scenetree_core::node::Node;

/// Parse scene source text into its node tree.
///
/// This is the main entry point. It runs the pipeline:
///
/// 1. **Resources** - Build the table of external scene resources
/// 2. **Records** - Extract and validate the node declarations
/// 3. **Assemble** - Build the tree from the single root, resolving
///    instanced scenes against the resource table
///
/// # Arguments
///
/// * `source` - The complete scene file content
///
/// # Errors
///
/// Returns the first [`ParseError`] encountered; no partial tree is produced.
pub fn parse(source: &str) -> Result<Node, ParseError> {
    info!(bytes = source.len(); "Parsing scene");

    // Step 1: Resources
    let resources = build_resource_index(source)?;

    // Step 2: Records
    let records = extract_node_records(source)?;

    // Step 3: Assemble
    assemble_tree(&records, &resources)
}
