//! Parameter tokenizer for declaration lines.
//!
//! A declaration line has the shape `[<tag> <parameters>]`. The parameter
//! segment is scanned permissively for `key=value` pairs:
//!
//! - keys are ASCII word characters (`[A-Za-z0-9_]+`);
//! - a quoted value is `"text"` with at least one character and no `"`;
//! - a wrapped value is `Wrapper("text")`, as used by `instance=ExtResource("1")`.
//!
//! Text that does not form a pair (numbers, arrays, spacing) is skipped.
//! Escape sequences are not interpreted: a value ends at the first `"`.

use winnow::{
    ModalResult, Parser as _,
    combinator::{alt, delimited, preceded},
    stream::Stream,
    token::{literal, rest, take_till, take_while},
};

type Input<'src> = &'src str;
type ValueParser<'src> = fn(&mut Input<'src>) -> ModalResult<ParamValue<'src>>;

/// A parameter value as written in the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ParamValue<'src> {
    /// `"text"`, stored without the quotes.
    Quoted(&'src str),
    /// `Wrapper("inner")`, with its full source text.
    Wrapped { raw: &'src str, inner: &'src str },
}

impl<'src> ParamValue<'src> {
    /// The value with its quotes stripped.
    ///
    /// Wrapped values have no surrounding quotes and keep their source text.
    pub(crate) fn text(&self) -> &'src str {
        match self {
            ParamValue::Quoted(text) => text,
            ParamValue::Wrapped { raw, .. } => raw,
        }
    }

    /// The value with its wrapper stripped.
    ///
    /// Quoted values carry no wrapper and yield their text.
    pub(crate) fn reference(&self) -> &'src str {
        match self {
            ParamValue::Quoted(text) => text,
            ParamValue::Wrapped { inner, .. } => inner,
        }
    }
}

/// A single `key=value` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Param<'src> {
    key: &'src str,
    value: ParamValue<'src>,
}

impl<'src> Param<'src> {
    pub(crate) fn key(&self) -> &'src str {
        self.key
    }

    pub(crate) fn value(&self) -> ParamValue<'src> {
        self.value
    }
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

fn word<'src>(input: &mut Input<'src>) -> ModalResult<&'src str> {
    take_while(1.., is_word_char).parse_next(input)
}

fn quoted_text<'src>(input: &mut Input<'src>) -> ModalResult<&'src str> {
    delimited('"', take_till(1.., '"'), '"').parse_next(input)
}

/// Parse `"text"`
fn quoted_value<'src>(input: &mut Input<'src>) -> ModalResult<ParamValue<'src>> {
    quoted_text.map(ParamValue::Quoted).parse_next(input)
}

/// Parse `Wrapper("text")`
fn wrapped_value<'src>(input: &mut Input<'src>) -> ModalResult<ParamValue<'src>> {
    (word, "(", quoted_text, ")")
        .with_taken()
        .map(|((_, _, inner, _), raw)| ParamValue::Wrapped { raw, inner })
        .parse_next(input)
}

/// Parse either value form, quoted first
fn any_value<'src>(input: &mut Input<'src>) -> ModalResult<ParamValue<'src>> {
    alt((quoted_value, wrapped_value)).parse_next(input)
}

fn param<'src>(input: &mut Input<'src>, value: ValueParser<'src>) -> ModalResult<Param<'src>> {
    (word, '=', value)
        .map(|(key, _, value)| Param { key, value })
        .parse_next(input)
}

/// Scan a parameter segment, skipping one character wherever no pair starts.
fn scan<'src>(mut input: Input<'src>, value: ValueParser<'src>) -> Vec<Param<'src>> {
    let mut params = Vec::new();

    while !input.is_empty() {
        let checkpoint = input.checkpoint();
        match param(&mut input, value) {
            Ok(param) => params.push(param),
            Err(_) => {
                input.reset(&checkpoint);
                input.next_token();
            }
        }
    }

    params
}

/// Extract the parameter segment of `[<tag> <parameters>]`.
///
/// `header` is the opening bracket and tag, e.g. `[node`. Returns `None`
/// when the line does not have exactly that shape.
pub(crate) fn segment<'src>(line: &'src str, header: &str) -> Option<&'src str> {
    let mut input = line;
    let parsed: ModalResult<&'src str> = preceded((literal(header), ' '), rest)
        .verify_map(|params: &'src str| params.strip_suffix(']'))
        .parse_next(&mut input);
    parsed.ok()
}

/// Tokenize a resource parameter segment; only quoted values are recognized.
pub(crate) fn resource_params(segment: &str) -> Vec<Param<'_>> {
    scan(segment, quoted_value)
}

/// Tokenize a node parameter segment; quoted and wrapped values are recognized.
pub(crate) fn node_params(segment: &str) -> Vec<Param<'_>> {
    scan(segment, any_value)
}
