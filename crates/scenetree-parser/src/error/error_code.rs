//! Error codes for the scene parser diagnostics.
//!
//! Error codes are organized by pipeline stage:
//! - `E1xx` - Resource table errors
//! - `E2xx` - Node record errors
//! - `E3xx` - Tree assembly errors

use std::fmt;

/// Error codes for categorizing diagnostic errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // =========================================================================
    // Resource Table Errors (E1xx)
    // =========================================================================
    /// Unexpected resource format.
    ///
    /// An `[ext_resource ...]` line could not be split into its parameters.
    E100,

    /// Duplicated scene resource.
    ///
    /// Two or more external scene resources share the same id.
    E101,

    // =========================================================================
    // Node Record Errors (E2xx)
    // =========================================================================
    /// Unexpected node format.
    ///
    /// A `[node ...]` line could not be split into its parameters.
    E200,

    /// Unexpected node parameters.
    ///
    /// A node declares both or neither of `type` and `instance`.
    E201,

    // =========================================================================
    // Tree Assembly Errors (E3xx)
    // =========================================================================
    /// Missing root node.
    ///
    /// No node declaration is without a `parent`.
    E300,

    /// Ambiguous root node.
    ///
    /// More than one node declaration is without a `parent`.
    E301,

    /// Unknown scene resource.
    ///
    /// A node instances a resource id that no external scene resource declares.
    E302,

    /// Unexpected scene path format.
    ///
    /// A referenced scene path is not of the form `res://<name>.tscn`.
    E303,

    /// Cyclic node path.
    ///
    /// A node's children key refers back to one of its ancestors.
    E304,
}

impl ErrorCode {
    /// Returns the numeric code as a string (e.g., "E101").
    pub fn as_str(&self) -> &'static str {
        match self {
            // Resource table errors
            ErrorCode::E100 => "E100",
            ErrorCode::E101 => "E101",
            // Node record errors
            ErrorCode::E200 => "E200",
            ErrorCode::E201 => "E201",
            // Tree assembly errors
            ErrorCode::E300 => "E300",
            ErrorCode::E301 => "E301",
            ErrorCode::E302 => "E302",
            ErrorCode::E303 => "E303",
            ErrorCode::E304 => "E304",
        }
    }

    /// Returns a short description of what this error code means.
    pub fn description(&self) -> &'static str {
        match self {
            // Resource table errors
            ErrorCode::E100 => "unexpected resource format",
            ErrorCode::E101 => "duplicated scene resource",
            // Node record errors
            ErrorCode::E200 => "unexpected node format",
            ErrorCode::E201 => "unexpected node parameters",
            // Tree assembly errors
            ErrorCode::E300 => "missing root node",
            ErrorCode::E301 => "ambiguous root node",
            ErrorCode::E302 => "unknown scene resource",
            ErrorCode::E303 => "unexpected scene path format",
            ErrorCode::E304 => "cyclic node path",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
