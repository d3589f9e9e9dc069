//! Line selection over the scene source.
//!
//! Declarations in a scene file are single lines. Selection is a structural
//! filter on the start and end of a line; it does not parse the grammar.

use crate::span::Span;

/// Terminator of every declaration line.
const DECLARATION_END: char = ']';

/// A single source line with its location.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Line<'src> {
    text: &'src str,
    span: Span,
}

impl<'src> Line<'src> {
    pub(crate) fn text(&self) -> &'src str {
        self.text
    }

    pub(crate) fn span(&self) -> Span {
        self.span
    }
}

/// Split the source into lines, tracking byte offsets.
///
/// Lines are separated by `\n`; a trailing `\r` is not part of the line.
pub(crate) fn lines(source: &str) -> impl Iterator<Item = Line<'_>> {
    let mut offset = 0;
    source.split('\n').map(move |raw| {
        let start = offset;
        offset += raw.len() + 1;
        let text = raw.strip_suffix('\r').unwrap_or(raw);
        Line {
            text,
            span: Span::new(start..start + text.len()),
        }
    })
}

/// Select the declaration lines starting with `marker`, in source order.
pub(crate) fn declarations<'src>(source: &'src str, marker: &str) -> Vec<Line<'src>> {
    lines(source)
        .filter(|line| line.text.starts_with(marker) && line.text.ends_with(DECLARATION_END))
        .collect()
}
