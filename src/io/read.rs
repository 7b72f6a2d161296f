use std::borrow::Cow;
use std::convert::TryFrom;
use std::io::Read;

use byteorder::{BigEndian, ReadBytesExt};
use log::{debug, trace};

use super::ReadOpts;
use crate::error::{Error, Result};
use crate::{ByteArray, Compound, IntArray, List, LongArray, Tag, Value};

// Lengths come from the data and cannot be trusted, so at most this many
// elements are reserved up front. Longer arrays grow as they are read.
const PREALLOC_LIMIT: usize = 4096;

/// Reads tags from any reader. Does not do decompression.
///
/// Nesting is tracked with an explicit depth counter: every compound and
/// every non-empty list enters a level, and going past
/// [`ReadOpts::max_depth`] fails rather than recursing further.
pub struct Reader<R: Read> {
    reader: R,
    opts: ReadOpts,
    depth: usize,
    consumed: u64,
}

impl<R: Read> Reader<R> {
    pub fn new(reader: R, opts: ReadOpts) -> Self {
        Self {
            reader,
            opts,
            depth: 0,
            consumed: 0,
        }
    }

    /// Number of bytes read so far.
    pub fn bytes_read(&self) -> u64 {
        self.consumed
    }

    /// Consumes this reader, returning the underlying value.
    pub fn into_inner(self) -> R {
        self.reader
    }

    /// Read a root tag: type, name and payload.
    pub fn read_named(&mut self) -> Result<(String, Value)> {
        let tag = self.read_tag()?;
        self.read_named_payload(tag)
    }

    /// Read a root that must be a compound.
    pub fn read_compound_root(&mut self) -> Result<(String, Compound)> {
        let tag = self.read_tag()?;
        if tag != Tag::Compound {
            return Err(Error::corrupt(format!(
                "invalid nbt: expected {} root, found {}",
                Tag::Compound,
                tag
            )));
        }

        match self.read_named_payload(tag)? {
            (name, Value::Compound(c)) => Ok((name, c)),
            (_, other) => Err(Error::corrupt(format!(
                "invalid nbt: expected {} root, found {}",
                Tag::Compound,
                other.tag()
            ))),
        }
    }

    fn read_named_payload(&mut self, tag: Tag) -> Result<(String, Value)> {
        if tag == Tag::End {
            return Err(Error::corrupt("invalid nbt: root tag is TAG_End"));
        }

        let name = self.read_string()?;
        debug!("reading root {} {:?}", tag, name);

        let value = self.read_payload(tag)?;
        Ok((name, value))
    }

    /// Read the payload of a value of the given tag.
    pub fn read_payload(&mut self, tag: Tag) -> Result<Value> {
        Ok(match tag {
            Tag::End => return Err(Error::corrupt("unexpected TAG_End")),
            Tag::Byte => Value::Byte(self.read_i8()?),
            Tag::Short => Value::Short(self.read_i16()?),
            Tag::Int => Value::Int(self.read_i32()?),
            Tag::Long => Value::Long(self.read_i64()?),
            Tag::Float => Value::Float(self.read_f32()?),
            Tag::Double => Value::Double(self.read_f64()?),
            Tag::String => Value::String(self.read_string()?),
            Tag::ByteArray => {
                let len = self.read_len()?;
                let bytes = self.read_bytes(len)?;
                Value::ByteArray(bytes.into_iter().map(|b| b as i8).collect::<ByteArray>())
            }
            Tag::IntArray => {
                let len = self.read_len()?;
                let mut data = Vec::with_capacity(len.min(PREALLOC_LIMIT));
                for _ in 0..len {
                    data.push(self.read_i32()?);
                }
                Value::IntArray(IntArray::new(data))
            }
            Tag::LongArray => {
                let len = self.read_len()?;
                let mut data = Vec::with_capacity(len.min(PREALLOC_LIMIT));
                for _ in 0..len {
                    data.push(self.read_i64()?);
                }
                Value::LongArray(LongArray::new(data))
            }
            Tag::List => Value::List(self.read_list()?),
            Tag::Compound => Value::Compound(self.read_compound()?),
        })
    }

    fn read_list(&mut self) -> Result<List> {
        let element = self.read_tag()?;
        let len = self.read_i32()?;

        if len < 0 {
            return Err(Error::corrupt(format!("invalid nbt: negative list length {}", len)));
        }
        if element == Tag::End && len > 0 {
            return Err(Error::corrupt(format!(
                "invalid nbt: list of {} with {} elements",
                Tag::End,
                len
            )));
        }
        if len == 0 {
            return Ok(List::new());
        }

        self.enter()?;
        trace!("list of {} {}", len, element);

        let items = self.read_items(element, len as usize);
        self.leave();
        Ok(List::from_vec_unchecked(items?))
    }

    fn read_items(&mut self, element: Tag, len: usize) -> Result<Vec<Value>> {
        let mut items = Vec::with_capacity(len.min(PREALLOC_LIMIT));
        for _ in 0..len {
            items.push(self.read_payload(element)?);
        }
        Ok(items)
    }

    fn read_compound(&mut self) -> Result<Compound> {
        self.enter()?;
        trace!("compound at depth {}", self.depth);

        let compound = self.read_entries();
        self.leave();
        compound
    }

    fn read_entries(&mut self) -> Result<Compound> {
        let mut compound = Compound::new();
        loop {
            let tag = self.read_tag()?;
            if tag == Tag::End {
                break;
            }

            let name = self.read_string()?;
            let value = self.read_payload(tag)?;
            if compound.put(name.as_str(), value).is_some() {
                debug!("duplicate compound entry {:?}, keeping the last", name);
            }
        }
        Ok(compound)
    }

    /// Go one level deeper. Every successful call is paired with a
    /// [`Reader::leave`], whether or not the nested read succeeds.
    fn enter(&mut self) -> Result<()> {
        if self.depth >= self.opts.max_depth {
            return Err(Error::nesting_too_deep(self.opts.max_depth));
        }
        self.depth += 1;
        Ok(())
    }

    fn leave(&mut self) {
        self.depth -= 1;
    }

    fn account(&mut self, n: u64) -> Result<()> {
        self.consumed = self.consumed.saturating_add(n);
        match self.opts.max_bytes {
            Some(max) if self.consumed > max => Err(Error::size_limit(self.consumed, max)),
            _ => Ok(()),
        }
    }

    fn read_tag(&mut self) -> Result<Tag> {
        let id = self.read_u8()?;
        Tag::try_from(id)
    }

    fn read_string(&mut self) -> Result<String> {
        let len = self.read_u16()? as usize;
        let buf = self.read_bytes(len)?;

        cesu8::from_java_cesu8(&buf)
            .map(Cow::into_owned)
            .map_err(|_| {
                Error::corrupt(format!(
                    "invalid nbt string: nonunicode: {}",
                    String::from_utf8_lossy(&buf)
                ))
            })
    }

    fn read_len(&mut self) -> Result<usize> {
        let len = self.read_i32()?;
        usize::try_from(len).map_err(|_| Error::corrupt(format!("invalid nbt: negative length {}", len)))
    }

    fn read_bytes(&mut self, len: usize) -> Result<Vec<u8>> {
        self.account(len as u64)?;

        let mut buf = Vec::with_capacity(len.min(PREALLOC_LIMIT));
        (&mut self.reader).take(len as u64).read_to_end(&mut buf)?;
        if buf.len() != len {
            return Err(Error::unexpected_eof());
        }
        Ok(buf)
    }

    fn read_u8(&mut self) -> Result<u8> {
        self.account(1)?;
        Ok(self.reader.read_u8()?)
    }

    fn read_i8(&mut self) -> Result<i8> {
        self.account(1)?;
        Ok(self.reader.read_i8()?)
    }

    fn read_u16(&mut self) -> Result<u16> {
        self.account(2)?;
        Ok(self.reader.read_u16::<BigEndian>()?)
    }

    fn read_i16(&mut self) -> Result<i16> {
        self.account(2)?;
        Ok(self.reader.read_i16::<BigEndian>()?)
    }

    fn read_i32(&mut self) -> Result<i32> {
        self.account(4)?;
        Ok(self.reader.read_i32::<BigEndian>()?)
    }

    fn read_i64(&mut self) -> Result<i64> {
        self.account(8)?;
        Ok(self.reader.read_i64::<BigEndian>()?)
    }

    fn read_f32(&mut self) -> Result<f32> {
        self.account(4)?;
        Ok(self.reader.read_f32::<BigEndian>()?)
    }

    fn read_f64(&mut self) -> Result<f64> {
        self.account(8)?;
        Ok(self.reader.read_f64::<BigEndian>()?)
    }
}
