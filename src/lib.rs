//! nbtree is a library for building, mutating and serializing NBT data from
//! *Minecraft: Java Edition*. NBT is the tree-shaped tagged binary format used
//! by the game for world saves, player data and some network payloads.
//!
//! * The tag tree itself is [`Value`], with the containers [`List`] and
//!   [`Compound`] and the unboxed arrays [`ByteArray`], [`IntArray`] and
//!   [`LongArray`].
//! * Reading and writing the binary format lives in [`io`].
//! * The stringified form (SNBT) lives in [`snbt`].
//! * Querying and editing by path, as in `Inventory[0].tag`, lives in [`path`].
//! * Free functions to construct tags are in [`factory`].
//!
//! ```toml
//! [dependencies]
//! nbtree = "0.1"
//! ```
//!
//! # Typed access
//!
//! Data read from a save file is rarely under the control of the code reading
//! it. The typed getters on [`Compound`] and [`List`] never fail: a missing
//! key, an index out of range or a value of the wrong type all produce the
//! default for that type. Numbers default to zero, strings, arrays and nested
//! lists default to `None`.
//!
//! ```
//! use nbtree::{Compound, List};
//!
//! let mut root = Compound::new();
//! root.put_string("name", "Steve");
//! root.put_float("health", 20.0);
//!
//! assert_eq!(root.get_string("name"), Some("Steve"));
//! assert_eq!(root.get_int("health"), 0); // it is a float, not an int.
//! assert_eq!(root.get_int_or("missing", 7), 7);
//! ```
//!
//! # Quick example
//!
//! This example reads a GZip compressed `level.dat` and changes the world
//! spawn, writing it back compressed.
//!
//! ```no_run
//! use nbtree::io::{self, Compression};
//! use std::fs::File;
//!
//! fn main() -> nbtree::error::Result<()> {
//!     let file = File::open("level.dat")?;
//!     let (name, mut root) = io::read_compressed(file, Compression::Gzip, io::ReadOpts::new())?;
//!
//!     if let Some(data) = root.get_compound_mut("Data") {
//!         data.put_int("SpawnX", 250);
//!         data.put_int("SpawnZ", -400);
//!     }
//!
//!     let out = File::create("level.dat")?;
//!     io::write_compressed(out, &name, &root, Compression::Gzip)?;
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod factory;
pub mod io;
pub mod path;
pub mod snbt;

mod access;
mod value;

pub use value::*;

#[cfg(test)]
mod test;

use std::convert::TryFrom;
use std::fmt;

use error::Error;

/// An NBT tag type. This does not carry the value or the name of the data, it
/// only identifies which kind of data follows on the wire.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
#[cfg_attr(feature = "arbitrary1", derive(arbitrary::Arbitrary))]
#[repr(u8)]
pub enum Tag {
    /// Represents the end of a Compound object.
    End = 0,
    /// Equivalent to i8.
    Byte = 1,
    /// Equivalent to i16.
    Short = 2,
    /// Equivalent to i32.
    Int = 3,
    /// Equivalent to i64
    Long = 4,
    /// Equivalent to f32.
    Float = 5,
    /// Equivalent to f64.
    Double = 6,
    /// Represents as array of Byte (i8).
    ByteArray = 7,
    /// Represents a Unicode string.
    String = 8,
    /// Represents a list of other values, all of the same tag.
    List = 9,
    /// Represents a struct-like structure.
    Compound = 10,
    /// Represents as array of Int (i32).
    IntArray = 11,
    /// Represents as array of Long (i64).
    LongArray = 12,
}

impl Tag {
    /// Every tag, ordered by wire id.
    pub const ALL: [Tag; 13] = [
        Tag::End,
        Tag::Byte,
        Tag::Short,
        Tag::Int,
        Tag::Long,
        Tag::Float,
        Tag::Double,
        Tag::ByteArray,
        Tag::String,
        Tag::List,
        Tag::Compound,
        Tag::IntArray,
        Tag::LongArray,
    ];

    /// The wire id of this tag.
    pub fn id(self) -> u8 {
        u8::from(self)
    }

    /// The conventional display name, eg `TAG_Compound`.
    pub fn name(self) -> &'static str {
        match self {
            Tag::End => "TAG_End",
            Tag::Byte => "TAG_Byte",
            Tag::Short => "TAG_Short",
            Tag::Int => "TAG_Int",
            Tag::Long => "TAG_Long",
            Tag::Float => "TAG_Float",
            Tag::Double => "TAG_Double",
            Tag::ByteArray => "TAG_Byte_Array",
            Tag::String => "TAG_String",
            Tag::List => "TAG_List",
            Tag::Compound => "TAG_Compound",
            Tag::IntArray => "TAG_Int_Array",
            Tag::LongArray => "TAG_Long_Array",
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// Crates exist to generate this code for us, but would add to our compile
// times. The tags will very rarely change so writing it out is not a burden.
impl TryFrom<u8> for Tag {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Error> {
        use Tag::*;
        Ok(match value {
            0 => End,
            1 => Byte,
            2 => Short,
            3 => Int,
            4 => Long,
            5 => Float,
            6 => Double,
            7 => ByteArray,
            8 => String,
            9 => List,
            10 => Compound,
            11 => IntArray,
            12 => LongArray,
            13..=u8::MAX => return Err(Error::unknown_type(value)),
        })
    }
}

impl From<Tag> for u8 {
    fn from(tag: Tag) -> Self {
        match tag {
            Tag::End => 0,
            Tag::Byte => 1,
            Tag::Short => 2,
            Tag::Int => 3,
            Tag::Long => 4,
            Tag::Float => 5,
            Tag::Double => 6,
            Tag::ByteArray => 7,
            Tag::String => 8,
            Tag::List => 9,
            Tag::Compound => 10,
            Tag::IntArray => 11,
            Tag::LongArray => 12,
        }
    }
}
