//! Tree assembly and scene reference resolution.
//!
//! Node records link to their parent by path only. Assembly groups the
//! records by their `parent` value and walks down from the single root,
//! looking up each node's children under its
//! [`children_key`](NodeParams::children_key). Instanced nodes are resolved
//! against the [`ResourceIndex`] and become [`SceneReferenceNode`]s; their
//! referenced scene is not expanded.

use indexmap::IndexMap;
use log::{debug, trace};

use scenetree_core::node::{ContainerNode, Node, SceneReferenceNode};

use crate::{
    error::{NodeOrigin, ParseError, Result},
    records::{NodeKind, NodeParams},
    resources::ResourceIndex,
};

const SCENE_PATH_PREFIX: &str = "res://";
const SCENE_EXTENSION: &str = ".tscn";

/// Assemble the node tree from validated records.
///
/// Children appear in the order of the records.
///
/// # Errors
///
/// - [`ParseError::MissingRootNode`] / [`ParseError::AmbiguousRootNode`] unless
///   exactly one record has no parent.
/// - [`ParseError::UnexpectedSceneResource`] if an instanced id is not in
///   `resources`.
/// - [`ParseError::UnexpectedSceneFormat`] if a referenced path is not
///   `res://<name>.tscn`.
/// - [`ParseError::CyclicNodePath`] if a node's children key is also the key
///   of one of its ancestors.
pub fn assemble_tree(records: &[NodeParams], resources: &ResourceIndex) -> Result<Node> {
    debug!(count = records.len(); "Assembling node tree");

    let root = single_root(records)?;

    let mut children_by_parent: IndexMap<&str, Vec<&NodeParams>> = IndexMap::new();
    for record in records {
        if let Some(parent) = record.parent() {
            children_by_parent.entry(parent).or_default().push(record);
        }
    }

    let assembler = TreeAssembler {
        children_by_parent,
        resources,
    };
    assembler.build(root, &mut Vec::new())
}

fn single_root(records: &[NodeParams]) -> Result<&NodeParams> {
    let roots: Vec<&NodeParams> = records
        .iter()
        .filter(|record| record.parent().is_none())
        .collect();

    match roots.as_slice() {
        [] => Err(ParseError::MissingRootNode),
        [root] => Ok(*root),
        _ => Err(ParseError::AmbiguousRootNode {
            roots: roots
                .iter()
                .map(|root| NodeOrigin::new(root.name(), root.span()))
                .collect(),
        }),
    }
}

struct TreeAssembler<'a> {
    children_by_parent: IndexMap<&'a str, Vec<&'a NodeParams>>,
    resources: &'a ResourceIndex,
}

impl TreeAssembler<'_> {
    /// Build the subtree of `params`; `ancestors` holds the children keys of
    /// the nodes above it.
    fn build(&self, params: &NodeParams, ancestors: &mut Vec<String>) -> Result<Node> {
        match params.kind() {
            NodeKind::Typed(node_type) => {
                let key = params.children_key();
                if ancestors.iter().any(|ancestor| *ancestor == key) {
                    return Err(ParseError::CyclicNodePath {
                        path: key.into_owned(),
                        span: params.span(),
                    });
                }

                let children = self
                    .children_by_parent
                    .get(&*key)
                    .map(Vec::as_slice)
                    .unwrap_or_default();

                ancestors.push(key.into_owned());
                let children = children
                    .iter()
                    .map(|child| self.build(child, ancestors))
                    .collect::<Result<Vec<_>>>()?;
                ancestors.pop();

                Ok(ContainerNode::new(params.name(), node_type.as_str(), children).into())
            }
            NodeKind::Instance(id) => self.resolve(params, id),
        }
    }

    fn resolve(&self, params: &NodeParams, id: &str) -> Result<Node> {
        let scene = self
            .resources
            .get(id)
            .ok_or_else(|| ParseError::UnexpectedSceneResource {
                id: id.to_string(),
                node: params.name().to_string(),
                span: params.span(),
            })?;

        let scene_name =
            scene_name(scene.path()).ok_or_else(|| ParseError::UnexpectedSceneFormat {
                path: scene.path().to_string(),
                span: params.span(),
                resource_span: scene.span(),
            })?;

        trace!(node = params.name(), scene = scene_name; "Resolved scene reference");
        Ok(SceneReferenceNode::new(params.name(), scene_name).into())
    }
}

/// The logical scene name of `res://<name>.tscn`: `<name>` with its first
/// character upper-cased.
fn scene_name(path: &str) -> Option<String> {
    let inner = path
        .strip_prefix(SCENE_PATH_PREFIX)?
        .strip_suffix(SCENE_EXTENSION)?;

    let mut chars = inner.chars();
    let first = chars.next()?;
    Some(first.to_uppercase().chain(chars).collect())
}
