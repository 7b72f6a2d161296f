//! Reading and writing the binary NBT format.
//!
//! NBT is written depth first. Every named tag is a type byte, a name, then
//! the payload. Compound entries are named tags ending with a lone `TAG_End`
//! byte, list elements are bare payloads after a header of element type and
//! count. All numbers are big endian and strings are length prefixed modified
//! UTF-8.
//!
//! The functions here take plain readers and writers. Compression is left to
//! the caller, with [`Compression`] offering the framings the game uses:
//!
//! ```
//! use nbtree::io::{self, Compression, ReadOpts};
//! use nbtree::Compound;
//!
//! # fn main() -> nbtree::error::Result<()> {
//! let mut root = Compound::new();
//! root.put_string("name", "Steve");
//!
//! let mut buf = vec![];
//! io::write_compressed(&mut buf, "", &root, Compression::Gzip)?;
//!
//! let (name, read) = io::read_compressed(buf.as_slice(), Compression::Gzip, ReadOpts::new())?;
//! assert_eq!(name, "");
//! assert_eq!(read, root);
//! # Ok(())
//! # }
//! ```

mod compression;
mod opts;
mod read;
mod write;

pub use compression::*;
pub use opts::*;
pub use read::Reader;

use std::io::{BufRead, BufReader, Read, Write};

use log::debug;

use crate::error::Result;
use crate::{Compound, Value};
use write::WriteNbt;

/// Read a named root tag of any type.
pub fn read<R: Read>(reader: R, opts: ReadOpts) -> Result<(String, Value)> {
    Reader::new(reader, opts).read_named()
}

/// Read a named root compound, the usual shape of NBT files. Any other root
/// fails with [`ErrorKind::CorruptData`][`crate::error::ErrorKind::CorruptData`].
pub fn read_compound<R: Read>(reader: R, opts: ReadOpts) -> Result<(String, Compound)> {
    Reader::new(reader, opts).read_compound_root()
}

/// Read a root compound from uncompressed bytes with default options. The
/// name of the root, which is usually empty, is discarded.
pub fn from_bytes(bytes: &[u8]) -> Result<Compound> {
    read_compound(bytes, ReadOpts::new()).map(|(_, c)| c)
}

/// Read a root compound through the given compression.
pub fn read_compressed<R: Read>(
    reader: R,
    compression: Compression,
    opts: ReadOpts,
) -> Result<(String, Compound)> {
    read_compound(compression.decoder(reader), opts)
}

/// Read a root compound, detecting GZip or Zlib framing from the first bytes.
pub fn read_detect<R: Read>(reader: R, opts: ReadOpts) -> Result<(String, Compound)> {
    let mut reader = BufReader::new(reader);
    let compression = Compression::detect(reader.fill_buf()?);
    debug!("detected {:?} compression", compression);

    read_compressed(reader, compression, opts)
}

/// Write a named root tag.
pub fn write<W: Write>(mut writer: W, name: &str, value: &Value) -> Result<()> {
    debug!("writing root {} {:?}", value.tag(), name);
    writer.write_named(name, value)
}

/// Write a named root compound.
pub fn write_compound<W: Write>(mut writer: W, name: &str, compound: &Compound) -> Result<()> {
    debug!("writing root compound {:?}", name);
    writer.write_tag(crate::Tag::Compound)?;
    writer.write_size_prefixed_str(name)?;
    writer.write_compound(compound)
}

/// Write a root compound with an empty name to bytes.
pub fn to_bytes(compound: &Compound) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    write_compound(&mut buf, "", compound)?;
    Ok(buf)
}

/// Write a named root compound through the given compression, finishing the
/// compressed stream.
pub fn write_compressed<W: Write>(
    writer: W,
    name: &str,
    compound: &Compound,
    compression: Compression,
) -> Result<()> {
    let mut encoder = compression.encoder(writer);
    write_compound(&mut encoder, name, compound)?;
    encoder.finish()?;
    Ok(())
}
