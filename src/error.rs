//! Contains the Error and Result type used throughout the crate.
use crate::Tag;

/// An error from manipulating, reading or writing NBT. Use [`Error::kind`] to
/// find out what went wrong programmatically; the `Display` output carries
/// the details.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    msg: String,
    kind: ErrorKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// A tag was inserted into a list committed to a different tag.
    TypeMismatch,

    /// An index was outside the bounds of a list or array.
    IndexOutOfRange,

    /// A type id outside of 0 to 12 was found.
    UnknownType(u8),

    /// Structurally invalid NBT, such as a list of `End` with elements or a
    /// negative length.
    CorruptData,

    /// Lists and compounds were nested deeper than the configured limit.
    NestingTooDeep,

    /// The input ended part way through a value.
    UnexpectedEof,

    /// Reading would consume more bytes than the configured limit.
    SizeLimit,

    /// A string or array is too long to be represented on the wire.
    TooLong,

    /// Stringified NBT could not be parsed.
    Syntax,

    /// The underlying reader or writer failed.
    Io,
}

/// Convenience type for Result.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Get the kind of error.
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    pub fn is_eof(&self) -> bool {
        matches!(self.kind, ErrorKind::UnexpectedEof)
    }

    pub(crate) fn new(kind: ErrorKind, msg: impl Into<String>) -> Self {
        Self {
            msg: msg.into(),
            kind,
        }
    }

    pub(crate) fn type_mismatch(expected: Tag, found: Tag) -> Self {
        Self::new(
            ErrorKind::TypeMismatch,
            format!("list holds {}, cannot add {}", expected, found),
        )
    }

    pub(crate) fn index_out_of_range(index: usize, len: usize) -> Self {
        Self::new(
            ErrorKind::IndexOutOfRange,
            format!("index {} out of range for length {}", index, len),
        )
    }

    pub(crate) fn unknown_type(id: u8) -> Self {
        Self::new(
            ErrorKind::UnknownType(id),
            format!("invalid nbt tag value: {}", id),
        )
    }

    pub(crate) fn corrupt(msg: impl Into<String>) -> Self {
        Self::new(ErrorKind::CorruptData, msg)
    }

    pub(crate) fn nesting_too_deep(max: usize) -> Self {
        Self::new(
            ErrorKind::NestingTooDeep,
            format!("max tag depth ({}) surpassed", max),
        )
    }

    pub(crate) fn unexpected_eof() -> Self {
        Self::new(ErrorKind::UnexpectedEof, "eof: unexpectedly ran out of input")
    }

    pub(crate) fn size_limit(read: u64, max: u64) -> Self {
        Self::new(
            ErrorKind::SizeLimit,
            format!(
                "nbt too large: tried to read {} bytes where only {} are permitted",
                read, max
            ),
        )
    }

    pub(crate) fn too_long(what: &str, len: usize) -> Self {
        Self::new(ErrorKind::TooLong, format!("{} too long: {}", what, len))
    }

    pub(crate) fn syntax(msg: impl Into<String>) -> Self {
        Self::new(ErrorKind::Syntax, msg)
    }
}

impl std::error::Error for Error {}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.msg)
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        match e.kind() {
            std::io::ErrorKind::UnexpectedEof => Self::unexpected_eof(),
            _ => Self::new(ErrorKind::Io, format!("io error: {}", e)),
        }
    }
}
