use std::convert::TryFrom;
use std::io::Write;

use byteorder::{BigEndian, WriteBytesExt};

use crate::error::{Error, Result};
use crate::{Compound, List, Tag, Value};

/// Extension trait writing NBT to anything implementing `Write`.
pub(crate) trait WriteNbt: Write {
    fn write_tag(&mut self, tag: Tag) -> Result<()> {
        self.write_u8(tag as u8)?;
        Ok(())
    }

    /// Strings are modified UTF-8 prefixed with their encoded length.
    fn write_size_prefixed_str(&mut self, s: &str) -> Result<()> {
        let encoded = cesu8::to_java_cesu8(s);
        let len = u16::try_from(encoded.len()).map_err(|_| Error::too_long("string", encoded.len()))?;
        self.write_u16::<BigEndian>(len)?;
        self.write_all(&encoded)?;
        Ok(())
    }

    fn write_len(&mut self, len: usize) -> Result<()> {
        let len = i32::try_from(len).map_err(|_| Error::too_long("array or list", len))?;
        self.write_i32::<BigEndian>(len)?;
        Ok(())
    }

    /// Write a complete named tag: type, name, payload.
    fn write_named(&mut self, name: &str, value: &Value) -> Result<()> {
        self.write_tag(value.tag())?;
        self.write_size_prefixed_str(name)?;
        self.write_payload(value)
    }

    fn write_payload(&mut self, value: &Value) -> Result<()> {
        match value {
            Value::Byte(v) => self.write_i8(*v)?,
            Value::Short(v) => self.write_i16::<BigEndian>(*v)?,
            Value::Int(v) => self.write_i32::<BigEndian>(*v)?,
            Value::Long(v) => self.write_i64::<BigEndian>(*v)?,
            Value::Float(v) => self.write_f32::<BigEndian>(*v)?,
            Value::Double(v) => self.write_f64::<BigEndian>(*v)?,
            Value::String(v) => self.write_size_prefixed_str(v)?,
            Value::ByteArray(v) => {
                self.write_len(v.len())?;
                let bytes: Vec<u8> = v.iter().map(|b| *b as u8).collect();
                self.write_all(&bytes)?;
            }
            Value::IntArray(v) => {
                self.write_len(v.len())?;
                for i in v.iter() {
                    self.write_i32::<BigEndian>(*i)?;
                }
            }
            Value::LongArray(v) => {
                self.write_len(v.len())?;
                for l in v.iter() {
                    self.write_i64::<BigEndian>(*l)?;
                }
            }
            Value::List(v) => self.write_list(v)?,
            Value::Compound(v) => self.write_compound(v)?,
        }
        Ok(())
    }

    fn write_list(&mut self, list: &List) -> Result<()> {
        self.write_tag(list.element_type())?;
        self.write_len(list.len())?;
        for v in list {
            self.write_payload(v)?;
        }
        Ok(())
    }

    fn write_compound(&mut self, compound: &Compound) -> Result<()> {
        for (name, v) in compound {
            self.write_named(name, v)?;
        }
        self.write_tag(Tag::End)
    }
}

impl<T> WriteNbt for T where T: Write {}
