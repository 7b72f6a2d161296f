use std::fmt::{self, Write};

use super::SnbtOpts;
use crate::{Compound, List, Value};

const INDENT: usize = 2;

pub(crate) struct SnbtWriter<'a, W: Write> {
    out: &'a mut W,
    opts: &'a SnbtOpts,
    indent: usize,
}

/// Characters allowed in an unquoted key or string.
pub(crate) fn is_bare_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.' | '+')
}

impl<'a, W: Write> SnbtWriter<'a, W> {
    pub(crate) fn new(out: &'a mut W, opts: &'a SnbtOpts) -> Self {
        Self {
            out,
            opts,
            indent: 0,
        }
    }

    pub(crate) fn value(&mut self, value: &Value) -> fmt::Result {
        let mut itoa = itoa::Buffer::new();
        let mut ryu = ryu::Buffer::new();

        match value {
            Value::Byte(v) => {
                self.out.write_str(itoa.format(*v))?;
                self.out.write_char('b')
            }
            Value::Short(v) => {
                self.out.write_str(itoa.format(*v))?;
                self.out.write_char('s')
            }
            Value::Int(v) => self.out.write_str(itoa.format(*v)),
            Value::Long(v) => {
                self.out.write_str(itoa.format(*v))?;
                self.out.write_char('L')
            }
            Value::Float(v) => {
                self.out.write_str(ryu.format(*v))?;
                self.out.write_char('f')
            }
            Value::Double(v) => {
                self.out.write_str(ryu.format(*v))?;
                self.out.write_char('d')
            }
            Value::String(v) => self.quoted(v),
            Value::ByteArray(v) => self.array('B', v.iter().map(|b| (*b as i64, "b"))),
            Value::IntArray(v) => self.array('I', v.iter().map(|i| (*i as i64, ""))),
            Value::LongArray(v) => self.array('L', v.iter().map(|l| (*l, "L"))),
            Value::List(v) => self.list(v),
            Value::Compound(v) => self.compound(v),
        }
    }

    pub(crate) fn list(&mut self, list: &List) -> fmt::Result {
        if list.is_empty() {
            return self.out.write_str("[]");
        }

        self.out.write_char('[')?;
        self.indent += INDENT;
        for (i, v) in list.iter().enumerate() {
            if i > 0 {
                self.out.write_char(',')?;
            }
            self.newline()?;
            self.value(v)?;
        }
        self.indent -= INDENT;
        self.newline()?;
        self.out.write_char(']')
    }

    pub(crate) fn compound(&mut self, compound: &Compound) -> fmt::Result {
        if compound.is_empty() {
            return self.out.write_str("{}");
        }

        self.out.write_char('{')?;
        self.indent += INDENT;
        for (i, (k, v)) in compound.iter().enumerate() {
            if i > 0 {
                self.out.write_char(',')?;
            }
            self.newline()?;

            if !k.is_empty() && k.chars().all(is_bare_char) {
                self.out.write_str(k)?;
            } else {
                self.quoted(k)?;
            }

            self.out.write_char(':')?;
            if self.opts.pretty {
                self.out.write_char(' ')?;
            }
            self.value(v)?;
        }
        self.indent -= INDENT;
        self.newline()?;
        self.out.write_char('}')
    }

    fn array<I>(&mut self, prefix: char, values: I) -> fmt::Result
    where
        I: ExactSizeIterator<Item = (i64, &'static str)>,
    {
        let empty = values.len() == 0;
        let mut itoa = itoa::Buffer::new();

        self.out.write_char('[')?;
        self.out.write_char(prefix)?;
        self.out.write_char(';')?;

        self.indent += INDENT;
        for (i, (v, suffix)) in values.enumerate() {
            if i > 0 {
                self.out.write_char(',')?;
            }
            if self.opts.pretty && self.opts.collapse_arrays {
                self.out.write_char(' ')?;
            } else {
                self.newline()?;
            }
            self.out.write_str(itoa.format(v))?;
            self.out.write_str(suffix)?;
        }
        self.indent -= INDENT;

        if !empty && !self.opts.collapse_arrays {
            self.newline()?;
        }
        self.out.write_char(']')
    }

    fn quoted(&mut self, s: &str) -> fmt::Result {
        self.out.write_char('"')?;
        for c in s.chars() {
            if c == '"' || c == '\\' {
                self.out.write_char('\\')?;
            }
            self.out.write_char(c)?;
        }
        self.out.write_char('"')
    }

    fn newline(&mut self) -> fmt::Result {
        if !self.opts.pretty {
            return Ok(());
        }
        self.out.write_char('\n')?;
        for _ in 0..self.indent {
            self.out.write_char(' ')?;
        }
        Ok(())
    }
}
