use nom::branch::alt;
use nom::bytes::complete::is_a;
use nom::character::complete::{alphanumeric1, char, digit0, digit1, multispace0, one_of};
use nom::combinator::{all_consuming, cut, opt, recognize};
use nom::error::{ErrorKind, ParseError};
use nom::multi::{many1, separated_list0};
use nom::sequence::{delimited, pair, preceded, tuple};
use nom::IResult;

use crate::error::{Error, Result};
use crate::io::DEFAULT_MAX_DEPTH;
use crate::{ByteArray, Compound, IntArray, List, LongArray, Value};

/// Parse failure pointing at the remaining input.
#[derive(Debug)]
pub(crate) struct Fail<'a> {
    at: &'a str,
    reason: Reason,
}

#[derive(Debug)]
enum Reason {
    Nom(ErrorKind),
    Expected(char),
    Invalid(String),
    TooDeep,
}

impl<'a> Fail<'a> {
    pub(crate) fn invalid(at: &'a str, msg: impl Into<String>) -> nom::Err<Self> {
        nom::Err::Failure(Fail {
            at,
            reason: Reason::Invalid(msg.into()),
        })
    }
}

impl<'a> ParseError<&'a str> for Fail<'a> {
    fn from_error_kind(at: &'a str, kind: ErrorKind) -> Self {
        Fail {
            at,
            reason: Reason::Nom(kind),
        }
    }

    fn append(_: &'a str, _: ErrorKind, other: Self) -> Self {
        other
    }

    fn from_char(at: &'a str, c: char) -> Self {
        Fail {
            at,
            reason: Reason::Expected(c),
        }
    }
}

pub(crate) type PResult<'a, T> = IResult<&'a str, T, Fail<'a>>;

pub(crate) fn parse(input: &str) -> Result<Value> {
    finish(input, all_consuming(|i| value(i, 0))(input))
}

/// Turn the outcome of parsing all of `input` into a crate error, with byte
/// offsets into `input`.
pub(crate) fn finish<'a, T>(input: &'a str, parsed: PResult<'a, T>) -> Result<T> {
    match parsed {
        Ok((_, v)) => Ok(v),
        Err(nom::Err::Incomplete(_)) => Err(Error::syntax("unexpected end of input")),
        Err(nom::Err::Error(fail)) | Err(nom::Err::Failure(fail)) => {
            let pos = input.len() - fail.at.len();
            Err(match fail.reason {
                Reason::TooDeep => Error::nesting_too_deep(DEFAULT_MAX_DEPTH),
                Reason::Expected(c) => Error::syntax(format!("expected '{}' at {}", c, pos)),
                Reason::Invalid(msg) => Error::syntax(format!("{} at {}", msg, pos)),
                Reason::Nom(ErrorKind::Eof) if pos == input.len() => {
                    Error::syntax(format!("unexpected end of input at {}", pos))
                }
                Reason::Nom(ErrorKind::Eof) => Error::syntax(format!("trailing input at {}", pos)),
                Reason::Nom(_) => Error::syntax(format!("expected a value at {}", pos)),
            })
        }
    }
}

fn value(input: &str, depth: usize) -> PResult<'_, Value> {
    delimited(
        multispace0,
        alt((
            |i| compound(i, depth).map(|(i, c)| (i, Value::Compound(c))),
            array,
            |i| list(i, depth).map(|(i, l)| (i, Value::List(l))),
            |i| quoted(i).map(|(i, s)| (i, Value::String(s))),
            |i| bare(i).map(|(i, s)| (i, classify(s))),
        )),
        multispace0,
    )(input)
}

fn enter(at: &str, depth: usize) -> std::result::Result<usize, nom::Err<Fail<'_>>> {
    if depth >= DEFAULT_MAX_DEPTH {
        return Err(nom::Err::Failure(Fail {
            at,
            reason: Reason::TooDeep,
        }));
    }
    Ok(depth + 1)
}

pub(crate) fn compound(input: &str, depth: usize) -> PResult<'_, Compound> {
    let (input, _) = char('{')(input)?;
    let depth = enter(input, depth)?;

    let (input, entries) = separated_list0(char(','), |i| entry(i, depth))(input)?;
    let (input, _) = preceded(multispace0, cut(char('}')))(input)?;

    let mut compound = Compound::with_capacity(entries.len());
    for (k, v) in entries {
        compound.put(k, v);
    }
    Ok((input, compound))
}

fn entry(input: &str, depth: usize) -> PResult<'_, (String, Value)> {
    let (input, key) = preceded(
        multispace0,
        alt((quoted, |i| bare(i).map(|(i, s)| (i, s.to_owned())))),
    )(input)?;
    let (input, _) = preceded(multispace0, cut(char(':')))(input)?;
    let (input, value) = cut(|i| value(i, depth))(input)?;
    Ok((input, (key, value)))
}

fn list(input: &str, depth: usize) -> PResult<'_, List> {
    let (start, _) = char('[')(input)?;
    let depth = enter(start, depth)?;

    let (input, values) = separated_list0(char(','), |i| value(i, depth))(start)?;
    let (input, _) = preceded(multispace0, cut(char(']')))(input)?;

    let list = List::from_values(values).map_err(|e| Fail::invalid(start, e.to_string()))?;
    Ok((input, list))
}

/// `[B;1b,2b]`, `[I;1,2]` or `[L;1L,2L]`.
fn array(input: &str) -> PResult<'_, Value> {
    let (start, kind) = delimited(
        char('['),
        one_of("BIL"),
        preceded(multispace0, char(';')),
    )(input)?;

    let (input, tokens) = cut(separated_list0(
        char(','),
        delimited(multispace0, bare, multispace0),
    ))(start)?;
    let (input, _) = preceded(multispace0, cut(char(']')))(input)?;

    let mut numbers = Vec::with_capacity(tokens.len());
    for token in tokens {
        match classify(token) {
            v @ (Value::Byte(_) | Value::Short(_) | Value::Int(_) | Value::Long(_)) => {
                numbers.extend(v.as_i64())
            }
            _ => return Err(Fail::invalid(start, format!("{:?} is not a whole number", token))),
        }
    }

    let out_of_range = || Fail::invalid(start, format!("number out of range for [{};] array", kind));
    let value = match kind {
        'B' => Value::ByteArray(
            numbers
                .into_iter()
                .map(i8::try_from)
                .collect::<std::result::Result<ByteArray, _>>()
                .map_err(|_| out_of_range())?,
        ),
        'I' => Value::IntArray(
            numbers
                .into_iter()
                .map(i32::try_from)
                .collect::<std::result::Result<IntArray, _>>()
                .map_err(|_| out_of_range())?,
        ),
        _ => Value::LongArray(LongArray::new(numbers)),
    };
    Ok((input, value))
}

/// A quoted string, with either quote style. A backslash escapes the
/// following character.
pub(crate) fn quoted(input: &str) -> PResult<'_, String> {
    let mut chars = input.char_indices();
    let quote = match chars.next() {
        Some((_, q @ ('"' | '\''))) => q,
        _ => return Err(nom::Err::Error(Fail::from_error_kind(input, ErrorKind::Char))),
    };

    let mut out = String::new();
    let mut escaped = false;
    for (i, c) in chars {
        if escaped {
            out.push(c);
            escaped = false;
        } else if c == '\\' {
            escaped = true;
        } else if c == quote {
            return Ok((&input[i + c.len_utf8()..], out));
        } else {
            out.push(c);
        }
    }
    Err(Fail::invalid(input, "unterminated string"))
}

fn bare(input: &str) -> PResult<'_, &str> {
    recognize(many1(alt((alphanumeric1, is_a("_-.+")))))(input)
}

fn integer(input: &str) -> PResult<'_, &str> {
    recognize(pair(opt(one_of("+-")), digit1))(input)
}

fn decimal(input: &str) -> PResult<'_, &str> {
    recognize(tuple((
        opt(one_of("+-")),
        alt((
            recognize(pair(char('.'), digit1)),
            recognize(pair(digit1, opt(pair(char('.'), digit0)))),
        )),
        opt(tuple((one_of("eE"), opt(one_of("+-")), digit1))),
    )))(input)
}

fn whole(input: &str, parser: fn(&str) -> PResult<'_, &str>) -> bool {
    all_consuming(parser)(input).is_ok()
}

/// Number spellings a float can be written as beyond plain decimals.
fn is_special_float(s: &str) -> bool {
    matches!(s, "NaN" | "inf" | "+inf" | "-inf")
}

/// Work out the type of an unquoted token. Anything that is not a number in
/// range for its suffix is a string.
fn classify(token: &str) -> Value {
    match token {
        "true" => return Value::Byte(1),
        "false" => return Value::Byte(0),
        _ => {}
    }

    let mut chars = token.chars();
    let suffix = chars.next_back().map(|c| c.to_ascii_lowercase());
    let body = chars.as_str();

    let number = match suffix {
        Some('b') if whole(body, integer) => body.parse().ok().map(Value::Byte),
        Some('s') if whole(body, integer) => body.parse().ok().map(Value::Short),
        Some('l') if whole(body, integer) => body.parse().ok().map(Value::Long),
        Some('f') if whole(body, decimal) || is_special_float(body) => {
            body.parse().ok().map(Value::Float)
        }
        Some('d') if whole(body, decimal) || is_special_float(body) => {
            body.parse().ok().map(Value::Double)
        }
        _ if whole(token, integer) => token.parse().ok().map(Value::Int),
        _ if whole(token, decimal) => token.parse().ok().map(Value::Double),
        _ => None,
    };

    number.unwrap_or_else(|| Value::String(token.to_owned()))
}
