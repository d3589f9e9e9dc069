//! The presentation form of a parse error.
//!
//! A [`Diagnostic`] carries an error code, a message, labeled source spans,
//! and optional help text. It is what front ends (such as the CLI) render.

use std::fmt;

use crate::{
    error::{error_code::ErrorCode, label::Label},
    span::Span,
};

/// A rich diagnostic message with source location information.
///
/// # Example
///
/// ```text
/// error[E101]: scene resource `1` is declared multiple times
///   --> main.tscn:3:1
///    |
///  3 | [ext_resource type="PackedScene" path="res://b.tscn" id="1"]
///    | ^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^ declares `res://b.tscn`
///    |
///  2 | [ext_resource type="PackedScene" path="res://a.tscn" id="1"]
///    | ------------------------------------------------------------ declares `res://a.tscn`
///    |
///    = help: give every external scene resource a unique id
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    code: Option<ErrorCode>,
    message: String,
    labels: Vec<Label>,
    help: Option<String>,
}

impl Diagnostic {
    /// Create an error diagnostic.
    ///
    /// # Example
    ///
    /// ```
    /// # use scenetree_parser::error::{Diagnostic, ErrorCode};
    /// # use scenetree_parser::Span;
    ///
    /// let diag = Diagnostic::error("node `Enemy` references unknown scene resource `3`")
    ///     .with_code(ErrorCode::E302)
    ///     .with_label(Span::new(0..10), "instanced here")
    ///     .with_help("declare the resource with an `[ext_resource]` line");
    /// ```
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            code: None,
            message: message.into(),
            labels: Vec::new(),
            help: None,
        }
    }

    /// Get the error code, if any.
    pub fn code(&self) -> Option<ErrorCode> {
        self.code
    }

    /// Get the primary message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get all labels attached to this diagnostic.
    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    /// Get the help text, if any.
    pub fn help(&self) -> Option<&str> {
        self.help.as_deref()
    }

    /// Set the error code.
    pub fn with_code(mut self, code: ErrorCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Add a primary label to this diagnostic.
    pub fn with_label(mut self, span: Span, message: impl Into<String>) -> Self {
        self.labels.push(Label::primary(span, message));
        self
    }

    /// Add a secondary label to this diagnostic.
    pub fn with_secondary_label(mut self, span: Span, message: impl Into<String>) -> Self {
        self.labels.push(Label::secondary(span, message));
        self
    }

    /// Set the help text.
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Format: "error[E101]: message" or "error: message"
        write!(f, "error")?;
        if let Some(code) = self.code {
            write!(f, "[{}]", code)?;
        }
        write!(f, ": {}", self.message)
    }
}

impl std::error::Error for Diagnostic {}
