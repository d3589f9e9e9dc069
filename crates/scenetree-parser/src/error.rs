//! Error and diagnostic system for the scene parser.
//!
//! Parsing fails fast: the first structural problem aborts the pipeline with
//! a [`ParseError`]. Each variant is a distinct, named kind carrying the
//! offending fragment of the input (line, resource id, path, or node
//! parameters) together with its source [`Span`](crate::Span).
//!
//! For presentation, a [`ParseError`] is lowered into one or more
//! [`Diagnostic`]s with a stable [`ErrorCode`], labeled spans, and help text.
//!
//! # Example
//!
//! ```
//! # use scenetree_parser::error::{Diagnostic, ErrorCode};
//! # use scenetree_parser::Span;
//!
//! let span = Span::new(100..120);
//! let original_span = Span::new(50..70);
//!
//! let diag = Diagnostic::error("scene resource `1` is declared multiple times")
//!     .with_code(ErrorCode::E101)
//!     .with_label(span, "duplicate declaration")
//!     .with_secondary_label(original_span, "first declared here")
//!     .with_help("give every external scene resource a unique id");
//! ```

mod diagnostic;
mod error_code;
mod label;
mod parse_error;

pub(crate) use parse_error::Result;

pub use diagnostic::Diagnostic;
pub use error_code::ErrorCode;
pub use label::Label;
pub use parse_error::{DuplicatedResource, NodeOrigin, ParseError};
