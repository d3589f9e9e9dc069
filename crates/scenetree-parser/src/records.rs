//! Node declarations and their typed records.
//!
//! Every `[node ...]` line is tokenized into a flat parameter map and then
//! validated into a [`NodeParams`]:
//!
//! ```text
//! [node name="Main" type="Node2D"]
//! [node name="Enemy" parent="." instance=ExtResource("3_x")]
//! ```
//!
//! Declarations without a `name`, or with both or neither of `type` and
//! `instance`, are not tree nodes and are dropped without an error.

use std::borrow::Cow;

use indexmap::IndexMap;
use log::{debug, trace};

use crate::{
    error::{ParseError, Result},
    lines::{self, Line},
    params::{self, ParamValue},
    span::Span,
};

/// Line marker of a node declaration.
const NODE_MARKER: &str = "[node";
/// Parent value of the root's direct children.
const ROOT_PARENT: &str = ".";

/// What a node is: an in-line typed node or an instance of another scene.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    /// `type="Node2D"`
    Typed(String),
    /// `instance=ExtResource("<id>")`, holding the resource id.
    Instance(String),
}

/// A validated node declaration, linked to its parent by path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeParams {
    name: String,
    kind: NodeKind,
    parent: Option<String>,
    span: Span,
}

impl NodeParams {
    /// Create node parameters from the declared values.
    ///
    /// # Arguments
    ///
    /// * `name` - Name of the node.
    /// * `node_type` - Value of `type`, if declared.
    /// * `instance` - Resource id of `instance`, if declared.
    /// * `parent` - Value of `parent`; `None` marks a root candidate.
    /// * `span` - Span of the declaring line.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::UnexpectedNodeParameters`] unless exactly one of
    /// `node_type` and `instance` is given.
    pub fn new(
        name: impl Into<String>,
        node_type: Option<String>,
        instance: Option<String>,
        parent: Option<String>,
        span: Span,
    ) -> Result<Self> {
        let name = name.into();
        let kind = match (node_type, instance) {
            (Some(node_type), None) => NodeKind::Typed(node_type),
            (None, Some(instance)) => NodeKind::Instance(instance),
            (node_type, instance) => {
                return Err(ParseError::UnexpectedNodeParameters {
                    name,
                    node_type,
                    instance,
                    span,
                });
            }
        };

        Ok(Self {
            name,
            kind,
            parent,
            span,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    /// The declared parent path, `None` for the root.
    pub fn parent(&self) -> Option<&str> {
        self.parent.as_deref()
    }

    pub fn span(&self) -> Span {
        self.span
    }

    /// The key under which this node's children declare their `parent`.
    ///
    /// - the root's children use `.`;
    /// - children of a direct child of the root use that child's name;
    /// - otherwise the key is `<parent>/<name>`.
    pub fn children_key(&self) -> Cow<'_, str> {
        match self.parent() {
            None => Cow::Borrowed(ROOT_PARENT),
            Some(ROOT_PARENT) => Cow::Borrowed(&self.name),
            Some(parent) => Cow::Owned(format!("{parent}/{}", self.name)),
        }
    }
}

/// The flat parameters of one node declaration.
struct RawNodeRecord<'src> {
    params: IndexMap<&'src str, ParamValue<'src>>,
    span: Span,
}

impl<'src> RawNodeRecord<'src> {
    /// The value of `key` with its quotes stripped.
    fn text(&self, key: &str) -> Option<&'src str> {
        self.params.get(key).map(ParamValue::text)
    }

    /// The value of `key` with its wrapper stripped.
    fn reference(&self, key: &str) -> Option<&'src str> {
        self.params.get(key).map(ParamValue::reference)
    }
}

/// Extract the typed node records of the scene source, in source order.
///
/// # Errors
///
/// Returns [`ParseError::UnexpectedNodeFormat`] if a selected line is not of
/// the form `[node <parameters>]`.
pub fn extract_node_records(source: &str) -> Result<Vec<NodeParams>> {
    let lines = lines::declarations(source, NODE_MARKER);
    debug!(count = lines.len(); "Selected node lines");

    let records = lines
        .into_iter()
        .map(raw_record)
        .collect::<Result<Vec<_>>>()?;

    Ok(records.iter().filter_map(typed_record).collect())
}

fn raw_record(line: Line<'_>) -> Result<RawNodeRecord<'_>> {
    trace!(line = line.text(); "Parsing node");

    let segment = params::segment(line.text(), NODE_MARKER).ok_or_else(|| {
        ParseError::UnexpectedNodeFormat {
            line: line.text().to_string(),
            span: line.span(),
        }
    })?;

    let params = params::node_params(segment)
        .into_iter()
        .map(|param| (param.key(), param.value()))
        .collect();

    Ok(RawNodeRecord {
        params,
        span: line.span(),
    })
}

fn typed_record(raw: &RawNodeRecord<'_>) -> Option<NodeParams> {
    let Some(name) = raw.text("name") else {
        debug!(span:% = raw.span; "Skipping node without name");
        return None;
    };

    let node_type = raw.text("type").map(str::to_string);
    let instance = raw.reference("instance").map(str::to_string);
    let parent = raw.text("parent").map(str::to_string);

    match NodeParams::new(name, node_type, instance, parent, raw.span) {
        Ok(params) => Some(params),
        Err(err) => {
            debug!(name, reason:% = err; "Skipping node");
            None
        }
    }
}
