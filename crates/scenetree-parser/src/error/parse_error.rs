//! The error type of the parsing pipeline.

use thiserror::Error;

use crate::{
    error::{Diagnostic, ErrorCode},
    span::Span,
};

/// A type alias for `Result<T, ParseError>`.
pub type Result<T> = std::result::Result<T, ParseError>;

/// A resource id shared by several external scene declarations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicatedResource {
    id: String,
    declarations: Vec<(String, Span)>,
}

impl DuplicatedResource {
    /// Create a duplicate entry from the id and every `(path, span)` declaring it.
    pub fn new(id: impl Into<String>, declarations: Vec<(String, Span)>) -> Self {
        Self {
            id: id.into(),
            declarations,
        }
    }

    /// The shared resource id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The conflicting paths, in declaration order.
    pub fn paths(&self) -> Vec<&str> {
        self.declarations
            .iter()
            .map(|(path, _)| path.as_str())
            .collect()
    }

    /// The spans of the conflicting declarations, in declaration order.
    pub fn spans(&self) -> Vec<Span> {
        self.declarations.iter().map(|(_, span)| *span).collect()
    }
}

/// A node name and the span of its declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeOrigin {
    name: String,
    span: Span,
}

impl NodeOrigin {
    pub fn new(name: impl Into<String>, span: Span) -> Self {
        Self {
            name: name.into(),
            span,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn span(&self) -> Span {
        self.span
    }
}

/// Error type for the parsing pipeline.
///
/// Every variant is fatal; the pipeline stops at the first one.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unexpected scene resource format: {line}")]
    UnexpectedResourceFormat { line: String, span: Span },

    #[error("scene resources declared with duplicated ids: {}", list_ids(.duplicates))]
    DuplicatedSceneResources { duplicates: Vec<DuplicatedResource> },

    #[error("unexpected node format: {line}")]
    UnexpectedNodeFormat { line: String, span: Span },

    #[error("node `{name}` must declare exactly one of `type` or `instance`")]
    UnexpectedNodeParameters {
        name: String,
        node_type: Option<String>,
        instance: Option<String>,
        span: Span,
    },

    #[error("scene has no root node")]
    MissingRootNode,

    #[error("scene has multiple root nodes: {}", list_names(.roots))]
    AmbiguousRootNode { roots: Vec<NodeOrigin> },

    #[error("node `{node}` references unknown scene resource `{id}`")]
    UnexpectedSceneResource { id: String, node: String, span: Span },

    #[error("unexpected scene path format: {path}")]
    UnexpectedSceneFormat {
        path: String,
        span: Span,
        resource_span: Span,
    },

    #[error("node path `{path}` refers back to one of its ancestors")]
    CyclicNodePath { path: String, span: Span },
}

impl ParseError {
    /// The error code of this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            ParseError::UnexpectedResourceFormat { .. } => ErrorCode::E100,
            ParseError::DuplicatedSceneResources { .. } => ErrorCode::E101,
            ParseError::UnexpectedNodeFormat { .. } => ErrorCode::E200,
            ParseError::UnexpectedNodeParameters { .. } => ErrorCode::E201,
            ParseError::MissingRootNode => ErrorCode::E300,
            ParseError::AmbiguousRootNode { .. } => ErrorCode::E301,
            ParseError::UnexpectedSceneResource { .. } => ErrorCode::E302,
            ParseError::UnexpectedSceneFormat { .. } => ErrorCode::E303,
            ParseError::CyclicNodePath { .. } => ErrorCode::E304,
        }
    }

    /// Lower this error into diagnostics for presentation.
    ///
    /// A duplicate-resource error yields one diagnostic per duplicated id;
    /// every other error yields exactly one.
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        let code = self.code();
        match self {
            ParseError::UnexpectedResourceFormat { span, .. } => vec![
                Diagnostic::error(self.to_string())
                    .with_code(code)
                    .with_label(*span, "expected `[ext_resource <parameters>]`"),
            ],
            ParseError::DuplicatedSceneResources { duplicates } => duplicates
                .iter()
                .map(|duplicate| {
                    duplicate.declarations.iter().enumerate().fold(
                        Diagnostic::error(format!(
                            "scene resource `{}` is declared multiple times",
                            duplicate.id()
                        ))
                        .with_code(code)
                        .with_help("give every external scene resource a unique id"),
                        |diag, (index, (path, span))| {
                            if index == 0 {
                                diag.with_secondary_label(
                                    *span,
                                    format!("first declared with `{path}`"),
                                )
                            } else {
                                diag.with_label(*span, format!("declared again with `{path}`"))
                            }
                        },
                    )
                })
                .collect(),
            ParseError::UnexpectedNodeFormat { span, .. } => vec![
                Diagnostic::error(self.to_string())
                    .with_code(code)
                    .with_label(*span, "expected `[node <parameters>]`"),
            ],
            ParseError::UnexpectedNodeParameters {
                node_type,
                instance,
                span,
                ..
            } => {
                let label = if node_type.is_some() && instance.is_some() {
                    "declares both `type` and `instance`"
                } else {
                    "declares neither `type` nor `instance`"
                };
                vec![
                    Diagnostic::error(self.to_string())
                        .with_code(code)
                        .with_label(*span, label),
                ]
            }
            ParseError::MissingRootNode => vec![
                Diagnostic::error(self.to_string())
                    .with_code(code)
                    .with_help("declare exactly one `[node]` without a `parent`"),
            ],
            ParseError::AmbiguousRootNode { roots } => vec![
                roots.iter().fold(
                    Diagnostic::error(self.to_string())
                        .with_code(code)
                        .with_help("every node except the root needs a `parent`"),
                    |diag, root| {
                        diag.with_label(root.span(), format!("`{}` has no parent", root.name()))
                    },
                ),
            ],
            ParseError::UnexpectedSceneResource { span, .. } => vec![
                Diagnostic::error(self.to_string())
                    .with_code(code)
                    .with_label(*span, "instanced here")
                    .with_help("declare the scene with an `[ext_resource type=\"PackedScene\"]` line"),
            ],
            ParseError::UnexpectedSceneFormat {
                span,
                resource_span,
                ..
            } => vec![
                Diagnostic::error(self.to_string())
                    .with_code(code)
                    .with_label(*resource_span, "expected `res://<name>.tscn`")
                    .with_secondary_label(*span, "instanced here"),
            ],
            ParseError::CyclicNodePath { span, .. } => vec![
                Diagnostic::error(self.to_string())
                    .with_code(code)
                    .with_label(*span, "declared here"),
            ],
        }
    }
}

fn list_ids(duplicates: &[DuplicatedResource]) -> String {
    duplicates
        .iter()
        .map(|duplicate| format!("{} -> [{}]", duplicate.id(), duplicate.paths().join(", ")))
        .collect::<Vec<_>>()
        .join("; ")
}

fn list_names(roots: &[NodeOrigin]) -> String {
    roots
        .iter()
        .map(NodeOrigin::name)
        .collect::<Vec<_>>()
        .join(", ")
}
