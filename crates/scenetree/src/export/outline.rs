use std::fmt::Write;

use log::debug;

use scenetree_core::node::Node;

use crate::export::{Error, Exporter};

const INDENT: &str = "  ";

/// Writes the tree as an indented outline, one node per line.
///
/// ```text
/// Main (Node2D)
///   Player -> Player
///   Enemies (Node2D)
///     Enemy1 -> Enemy
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct OutlineExporter;

impl OutlineExporter {
    pub fn new() -> Self {
        Self
    }

    fn write_node(out: &mut String, node: &Node, depth: usize) -> std::fmt::Result {
        let indent = INDENT.repeat(depth);
        match node {
            Node::Container(container) => {
                writeln!(out, "{indent}{} ({})", container.name(), container.node_type())?;
                for child in container.children() {
                    Self::write_node(out, child, depth + 1)?;
                }
            }
            Node::SceneReference(reference) => {
                writeln!(out, "{indent}{} -> {}", reference.name(), reference.scene_name())?;
            }
        }
        Ok(())
    }
}

impl Exporter for OutlineExporter {
    fn export(&self, root: &Node) -> Result<String, Error> {
        debug!(nodes = root.node_count(); "Exporting outline");

        let mut out = String::new();
        Self::write_node(&mut out, root, 0).map_err(|err| Error::Render(err.to_string()))?;
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scenetree_core::node::{ContainerNode, SceneReferenceNode};

    #[test]
    fn test_outline() {
        let tree = Node::from(ContainerNode::new(
            "Main",
            "Node2D",
            vec![
                Node::from(SceneReferenceNode::new("Player", "Player")),
                Node::from(ContainerNode::new(
                    "Enemies",
                    "Node2D",
                    vec![Node::from(SceneReferenceNode::new("Enemy1", "Enemy"))],
                )),
            ],
        ));

        let outline = OutlineExporter::new().export(&tree).unwrap();

        assert_eq!(
            outline,
            "Main (Node2D)\n  Player -> Player\n  Enemies (Node2D)\n    Enemy1 -> Enemy\n"
        );
    }

    #[test]
    fn test_single_reference_root() {
        let tree = Node::from(SceneReferenceNode::new("Derived", "Base"));

        assert_eq!(
            OutlineExporter::new().export(&tree).unwrap(),
            "Derived -> Base\n"
        );
    }
}
