//! Stringified NBT, the text form used by commands and data packs.
//!
//! ```
//! use nbtree::{snbt, Compound};
//!
//! # fn main() -> nbtree::error::Result<()> {
//! let mut c = Compound::new();
//! c.put_int("x", 5);
//! c.put_string("name", "Steve");
//!
//! let text = snbt::to_string(&c.clone().into());
//! assert_eq!(text, r#"{x:5,name:"Steve"}"#);
//! assert_eq!(snbt::compound_from_str(&text)?, c);
//! # Ok(())
//! # }
//! ```
//!
//! Numbers carry the usual suffixes (`b`, `s`, `L`, `f`, `d`), an unsuffixed
//! whole number is an int and an unsuffixed decimal a double. `true` and
//! `false` parse as bytes. Floats are written with the shortest text that
//! reads back to the same bits.

pub(crate) mod parse;
mod write;

use std::fmt;

use crate::error::{Error, Result};
use crate::{Compound, List, Value};
pub(crate) use write::is_bare_char;
use write::SnbtWriter;

/// Options for writing SNBT.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SnbtOpts {
    pub(crate) pretty: bool,
    pub(crate) collapse_arrays: bool,
}

impl SnbtOpts {
    /// Compact output on one line.
    pub fn new() -> Self {
        Self::default()
    }

    /// Put entries and elements on their own indented lines.
    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Keep array contents on one line, even when pretty printing.
    pub fn collapse_arrays(mut self, collapse: bool) -> Self {
        self.collapse_arrays = collapse;
        self
    }
}

pub(crate) fn write_value<W: fmt::Write>(out: &mut W, value: &Value, opts: &SnbtOpts) -> fmt::Result {
    SnbtWriter::new(out, opts).value(value)
}

/// Compact SNBT for a value.
pub fn to_string(value: &Value) -> String {
    to_string_with(value, &SnbtOpts::new())
}

/// Indented SNBT with arrays kept on one line.
pub fn to_string_pretty(value: &Value) -> String {
    to_string_with(value, &SnbtOpts::new().pretty(true).collapse_arrays(true))
}

pub fn to_string_with(value: &Value, opts: &SnbtOpts) -> String {
    let mut out = String::new();
    // Writing to a String cannot fail.
    let _ = write_value(&mut out, value, opts);
    out
}

/// Parse a single SNBT value. Surrounding whitespace is allowed, anything
/// else after the value is an error.
pub fn from_str(input: &str) -> Result<Value> {
    parse::parse(input)
}

/// Parse SNBT that must be a compound.
pub fn compound_from_str(input: &str) -> Result<Compound> {
    match from_str(input)? {
        Value::Compound(c) => Ok(c),
        other => Err(Error::syntax(format!("expected a compound, found {}", other.tag()))),
    }
}

impl fmt::Display for Compound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        SnbtWriter::new(f, &SnbtOpts::default()).compound(self)
    }
}

impl fmt::Display for List {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        SnbtWriter::new(f, &SnbtOpts::default()).list(self)
    }
}
