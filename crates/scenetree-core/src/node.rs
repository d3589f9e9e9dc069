//! The node tree produced from a scene file.
//!
//! A scene is a strict hierarchy: every [`Node`] is owned by its parent and
//! the root is owned by the caller. Two kinds of nodes exist:
//!
//! - [`ContainerNode`] - a node declared in-line, with its children assembled
//!   recursively in declaration order.
//! - [`SceneReferenceNode`] - a placeholder for a subtree defined in another
//!   scene file. The referenced scene is not expanded.
//!
//! # Serialization
//!
//! Nodes serialize as a tagged tree: a `kind` discriminator followed by the
//! fields of the variant.
//!
//! ```
//! # use scenetree_core::node::{ContainerNode, Node, SceneReferenceNode};
//! let root = Node::from(ContainerNode::new(
//!     "Main",
//!     "Node2D",
//!     vec![Node::from(SceneReferenceNode::new("Player", "Player"))],
//! ));
//!
//! assert_eq!(root.name(), "Main");
//! assert_eq!(root.node_count(), 2);
//! assert!(root.get("Player").is_some());
//! ```

use serde::{Deserialize, Serialize};

/// Separator between node names in a node path.
pub const PATH_SEPARATOR: char = '/';

/// A node of a scene tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Node {
    /// An in-line node with a type and children.
    Container(ContainerNode),
    /// An instance of another scene.
    SceneReference(SceneReferenceNode),
}

impl Node {
    /// Returns the name of the node.
    pub fn name(&self) -> &str {
        match self {
            Node::Container(node) => node.name(),
            Node::SceneReference(node) => node.name(),
        }
    }

    /// Returns the children of the node.
    ///
    /// Scene references are never expanded, so they have no children.
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Container(node) => node.children(),
            Node::SceneReference(_) => &[],
        }
    }

    /// Returns the number of nodes in this subtree, including this node.
    pub fn node_count(&self) -> usize {
        1 + self.children().iter().map(Node::node_count).sum::<usize>()
    }

    /// Looks up a descendant by a `/`-separated path of child names.
    ///
    /// The empty path and `.` both refer to this node. When several siblings
    /// share a name, the first one in declaration order is returned.
    pub fn get(&self, path: &str) -> Option<&Node> {
        if path.is_empty() || path == "." {
            return Some(self);
        }

        path.split(PATH_SEPARATOR)
            .try_fold(self, |node, name| {
                node.children().iter().find(|child| child.name() == name)
            })
    }

    /// Returns `true` if this node is a [`ContainerNode`].
    pub fn is_container(&self) -> bool {
        matches!(self, Node::Container(_))
    }

    /// Returns `true` if this node is a [`SceneReferenceNode`].
    pub fn is_scene_reference(&self) -> bool {
        matches!(self, Node::SceneReference(_))
    }
}

impl From<ContainerNode> for Node {
    fn from(node: ContainerNode) -> Self {
        Node::Container(node)
    }
}

impl From<SceneReferenceNode> for Node {
    fn from(node: SceneReferenceNode) -> Self {
        Node::SceneReference(node)
    }
}

/// A node declared in-line in the scene file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContainerNode {
    name: String,
    #[serde(rename = "type")]
    node_type: String,
    children: Vec<Node>,
}

impl ContainerNode {
    /// Creates a new container node.
    ///
    /// # Arguments
    ///
    /// * `name` - Name of the node.
    /// * `node_type` - Engine type of the node (for example `Node2D`).
    /// * `children` - Child nodes in declaration order.
    pub fn new(name: impl Into<String>, node_type: impl Into<String>, children: Vec<Node>) -> Self {
        Self {
            name: name.into(),
            node_type: node_type.into(),
            children,
        }
    }

    /// Returns the name of the node.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the engine type of the node.
    pub fn node_type(&self) -> &str {
        &self.node_type
    }

    /// Returns the children in declaration order.
    pub fn children(&self) -> &[Node] {
        &self.children
    }
}

/// A placeholder for a subtree defined in another scene file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SceneReferenceNode {
    name: String,
    #[serde(rename = "scene")]
    scene_name: String,
}

impl SceneReferenceNode {
    /// Creates a new scene reference.
    ///
    /// # Arguments
    ///
    /// * `name` - Name of the node in the referencing scene.
    /// * `scene_name` - Logical name of the referenced scene.
    pub fn new(name: impl Into<String>, scene_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            scene_name: scene_name.into(),
        }
    }

    /// Returns the name of the node.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the logical name of the referenced scene.
    pub fn scene_name(&self) -> &str {
        &self.scene_name
    }
}
