use nom::branch::alt;
use nom::bytes::complete::take_while1;
use nom::character::complete::{char, digit1, multispace0};
use nom::combinator::{all_consuming, cut, opt, peek, recognize, value};
use nom::multi::many0;
use nom::sequence::{delimited, pair, preceded, terminated};

use super::{Node, TagPath};
use crate::error::Result;
use crate::snbt::parse::{compound, finish, quoted, Fail, PResult};
use crate::Compound;

pub(crate) fn parse(input: &str) -> Result<TagPath> {
    finish(input, all_consuming(delimited(multispace0, path, multispace0))(input))
}

fn path(input: &str) -> PResult<'_, TagPath> {
    let (input, filter) = opt(pattern)(input)?;
    let (input, first) = match filter {
        // A root filter can stand alone, or be followed by a step with or
        // without a dot.
        Some(_) => opt(preceded(opt(char('.')), node))(input)?,
        None => node(input).map(|(i, n)| (i, Some(n)))?,
    };

    let (input, rest) = match first {
        Some(_) => many0(alt((preceded(char('.'), cut(node)), index)))(input)?,
        None => (input, Vec::new()),
    };

    Ok((
        input,
        TagPath {
            filter,
            nodes: first.into_iter().chain(rest).collect(),
        },
    ))
}

fn pattern(input: &str) -> PResult<'_, Compound> {
    compound(input, 0)
}

fn node(input: &str) -> PResult<'_, Node> {
    alt((index, key))(input)
}

fn key(input: &str) -> PResult<'_, Node> {
    let (input, name) = alt((quoted, |i| bare(i).map(|(i, s)| (i, s.to_owned()))))(input)?;
    let (input, filter) = opt(pattern)(input)?;
    Ok((input, Node::Key { name, filter }))
}

/// Anything up to whitespace, a quote, a bracket, a brace or a dot.
fn bare(input: &str) -> PResult<'_, &str> {
    take_while1(|c: char| !c.is_whitespace() && !matches!(c, '"' | '\'' | '[' | ']' | '{' | '}' | '.'))(
        input,
    )
}

/// `[]`, `[{pattern}]` or `[index]`.
fn index(input: &str) -> PResult<'_, Node> {
    let (start, _) = char('[')(input)?;
    cut(terminated(
        alt((
            value(Node::All(None), peek(char(']'))),
            |i| pattern(i).map(|(i, p)| (i, Node::All(Some(p)))),
            |i| number(i, start),
        )),
        char(']'),
    ))(start)
}

fn number<'a>(input: &'a str, start: &'a str) -> PResult<'a, Node> {
    let (rest, digits) = recognize(pair(opt(char('-')), digit1))(input)?;
    match digits.parse() {
        Ok(i) => Ok((rest, Node::Index(i))),
        Err(_) => Err(Fail::invalid(start, format!("index {} out of range", digits))),
    }
}
