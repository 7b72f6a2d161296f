use crate::error::Result;
use crate::io::{self, Compression, ReadOpts};
use crate::Compound;

fn sample() -> Compound {
    let mut c = Compound::new();
    c.put_string("LevelName", "world");
    c.put_long("RandomSeed", 1234);
    c.put_int_array("data", vec![7; 100]);
    c
}

const ALL: [Compression; 4] = [
    Compression::None,
    Compression::Gzip,
    Compression::Zlib,
    Compression::Deflate,
];

#[test]
fn round_trip_each() -> Result<()> {
    for compression in ALL {
        let mut buf = Vec::new();
        io::write_compressed(&mut buf, "root", &sample(), compression)?;

        let (name, c) = io::read_compressed(buf.as_slice(), compression, ReadOpts::new())?;
        assert_eq!(name, "root");
        assert_eq!(c, sample(), "{:?}", compression);
    }
    Ok(())
}

#[test]
fn detect_from_output() -> Result<()> {
    for (compression, expected) in [
        (Compression::None, Compression::None),
        (Compression::Gzip, Compression::Gzip),
        (Compression::Zlib, Compression::Zlib),
    ] {
        let mut buf = Vec::new();
        io::write_compressed(&mut buf, "", &sample(), compression)?;
        assert_eq!(Compression::detect(&buf), expected);

        let (_, c) = io::read_detect(buf.as_slice(), ReadOpts::new())?;
        assert_eq!(c, sample());
    }
    Ok(())
}

#[test]
fn detect_short_input() {
    assert_eq!(Compression::detect(&[]), Compression::None);
    assert_eq!(Compression::detect(&[0x1f]), Compression::None);
    // Deflate method nibble but a bad header checksum.
    assert_eq!(Compression::detect(&[0x78, 0x00]), Compression::None);
}

#[test]
fn wrong_compression_fails() {
    let mut buf = Vec::new();
    io::write_compressed(&mut buf, "", &sample(), Compression::Gzip).unwrap();
    assert!(io::read_compressed(buf.as_slice(), Compression::Zlib, ReadOpts::new()).is_err());
}
