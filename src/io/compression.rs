use std::io::{self, Read, Write};

use flate2::read::{DeflateDecoder, GzDecoder, ZlibDecoder};
use flate2::write::{DeflateEncoder, GzEncoder, ZlibEncoder};

/// Framing wrapped around an NBT stream. `level.dat` and player files are
/// GZip, region file chunks are usually Zlib.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Compression {
    None,
    Gzip,
    Zlib,
    /// Raw deflate with no header. Cannot be detected.
    Deflate,
}

impl Compression {
    /// Guess the compression from the first bytes of a stream.
    ///
    /// ```
    /// # use nbtree::io::Compression;
    /// assert_eq!(Compression::detect(&[0x1f, 0x8b, 8]), Compression::Gzip);
    /// assert_eq!(Compression::detect(&[0x78, 0x9c]), Compression::Zlib);
    /// assert_eq!(Compression::detect(&[10, 0, 0]), Compression::None);
    /// ```
    pub fn detect(header: &[u8]) -> Compression {
        match header {
            [0x1f, 0x8b, ..] => Compression::Gzip,
            // zlib: deflate method, and the header checksums to a multiple of 31.
            [cmf, flg, ..] if cmf & 0x0f == 8 && (u16::from(*cmf) << 8 | u16::from(*flg)) % 31 == 0 => {
                Compression::Zlib
            }
            _ => Compression::None,
        }
    }

    pub fn decoder<R: Read>(self, reader: R) -> Decoder<R> {
        match self {
            Compression::None => Decoder::None(reader),
            Compression::Gzip => Decoder::Gzip(GzDecoder::new(reader)),
            Compression::Zlib => Decoder::Zlib(ZlibDecoder::new(reader)),
            Compression::Deflate => Decoder::Deflate(DeflateDecoder::new(reader)),
        }
    }

    pub fn encoder<W: Write>(self, writer: W) -> Encoder<W> {
        let level = flate2::Compression::default();
        match self {
            Compression::None => Encoder::None(writer),
            Compression::Gzip => Encoder::Gzip(GzEncoder::new(writer, level)),
            Compression::Zlib => Encoder::Zlib(ZlibEncoder::new(writer, level)),
            Compression::Deflate => Encoder::Deflate(DeflateEncoder::new(writer, level)),
        }
    }
}

/// Reader undoing a [`Compression`].
pub enum Decoder<R: Read> {
    None(R),
    Gzip(GzDecoder<R>),
    Zlib(ZlibDecoder<R>),
    Deflate(DeflateDecoder<R>),
}

impl<R: Read> Read for Decoder<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self {
            Decoder::None(r) => r.read(buf),
            Decoder::Gzip(r) => r.read(buf),
            Decoder::Zlib(r) => r.read(buf),
            Decoder::Deflate(r) => r.read(buf),
        }
    }
}

/// Writer applying a [`Compression`]. Call [`Encoder::finish`] when done, or
/// the trailer of the compressed stream may never be written.
pub enum Encoder<W: Write> {
    None(W),
    Gzip(GzEncoder<W>),
    Zlib(ZlibEncoder<W>),
    Deflate(DeflateEncoder<W>),
}

impl<W: Write> Encoder<W> {
    /// Flush everything and return the inner writer.
    pub fn finish(self) -> io::Result<W> {
        match self {
            Encoder::None(mut w) => {
                w.flush()?;
                Ok(w)
            }
            Encoder::Gzip(w) => w.finish(),
            Encoder::Zlib(w) => w.finish(),
            Encoder::Deflate(w) => w.finish(),
        }
    }
}

impl<W: Write> Write for Encoder<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Encoder::None(w) => w.write(buf),
            Encoder::Gzip(w) => w.write(buf),
            Encoder::Zlib(w) => w.write(buf),
            Encoder::Deflate(w) => w.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Encoder::None(w) => w.flush(),
            Encoder::Gzip(w) => w.flush(),
            Encoder::Zlib(w) => w.flush(),
            Encoder::Deflate(w) => w.flush(),
        }
    }
}
