use std::{
    fs,
    io::{self, Read},
    num::ParseIntError,
    str::FromStr,
};

use anyhow::{Context, Result};
use miette::GraphicalReportHandler;
use nom::{
    character::complete::{digit1, one_of},
    combinator::{map_res, opt, recognize},
    error::{FromExternalError, ParseError},
    sequence::tuple,
    IResult,
};
use nom_locate::LocatedSpan;
use nom_supreme::{
    error::{ErrorTree, GenericErrorTree},
    final_parser::final_parser,
};

// Thanks to FasterThanLime! https://fasterthanli.me/series/advent-of-code-2022/part-11

pub type Span<'a> = LocatedSpan<&'a str>;

/// A line that failed to parse, with enough context to point at the bad token.
#[derive(thiserror::Error, Debug, miette::Diagnostic)]
#[error("bad input `{fragment}`: {kind}")]
pub struct BadInput {
    #[source_code]
    src: String,

    #[label("{kind}")]
    bad_bit: miette::SourceSpan,

    kind: String,

    fragment: String,
}

impl BadInput {
    fn new(src: &str, offset: usize, kind: String) -> Self {
        Self {
            src: src.to_string(),
            bad_bit: miette::SourceSpan::new(offset.into(), 0.into()),
            kind,
            fragment: fragment_at(src, offset).to_string(),
        }
    }

    /// The whitespace-delimited token the parser choked on.
    pub fn fragment(&self) -> &str {
        &self.fragment
    }

    pub fn offset(&self) -> usize {
        self.bad_bit.offset()
    }

    pub fn render(&self) -> String {
        let mut s = String::new();
        match GraphicalReportHandler::new().render_report(&mut s, self) {
            Ok(()) => s,
            Err(_) => self.to_string(),
        }
    }
}

fn fragment_at(src: &str, offset: usize) -> &str {
    let offset = offset.min(src.len());
    let start = src[..offset]
        .char_indices()
        .rev()
        .find(|(_, c)| c.is_whitespace())
        .map_or(0, |(i, c)| i + c.len_utf8());
    let end = src[offset..]
        .find(|c: char| c.is_whitespace())
        .map_or(src.len(), |i| offset + i);

    &src[start..end]
}

fn deepest_base(e: &ErrorTree<Span>) -> Option<(usize, String)> {
    match e {
        GenericErrorTree::Base { location, kind } => {
            Some((location.location_offset(), kind.to_string()))
        }
        GenericErrorTree::Stack { base, .. } => deepest_base(base),
        GenericErrorTree::Alt(alts) => alts
            .iter()
            .filter_map(deepest_base)
            .max_by_key(|(offset, _)| *offset),
    }
}

pub fn parse_number<'a, E>(i: Span<'a>) -> IResult<Span<'a>, i64, E>
where
    E: ParseError<Span<'a>> + FromExternalError<Span<'a>, ParseIntError>,
{
    map_res(recognize(tuple((opt(one_of("+-")), digit1))), |i: Span<'a>| {
        FromStr::from_str(i.fragment())
    })(i)
}

pub fn parse_nice<'a, T, F>(l: &'a str, parse_fun: F) -> Result<T, BadInput>
where
    F: FnMut(Span<'a>) -> IResult<Span<'a>, T, ErrorTree<Span<'a>>>,
{
    let line_span = Span::new(l);
    let line: Result<_, ErrorTree<Span>> = final_parser(parse_fun)(line_span);
    line.map_err(|e| {
        let (offset, kind) =
            deepest_base(&e).unwrap_or_else(|| (0, "unparseable input".to_string()));
        BadInput::new(l, offset, kind)
    })
}

/// Positional argument lookup over an explicit argument list (index 0 is the program name).
pub fn get_arg<S: AsRef<str>>(args: &[S], i: usize) -> Option<&str> {
    args.get(i).map(AsRef::as_ref)
}

pub fn read_input_as_string() -> Result<String> {
    let mut s = String::new();
    io::stdin()
        .lock()
        .read_to_string(&mut s)
        .context("Unable to read standard input")?;
    Ok(s)
}

/// Reads the whole file at `path`, or standard input when there is none.
pub fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            fs::read_to_string(path).with_context(|| format!("Unable to read file {path}"))
        }
        None => read_input_as_string(),
    }
}
