use std::convert::TryFrom;

use crate::error::ErrorKind;
use crate::Tag;

pub mod builder;

mod compression;
mod path;
mod ser;
mod snbt;

macro_rules! check_tags {
    {$($tag:ident = $val:literal),* $(,)?} => {
        $(
            assert_eq!(u8::from(Tag::$tag), $val);
            assert_eq!(Tag::try_from($val).unwrap(), Tag::$tag);
        )*
    };
}

#[test]
fn exhaustive_tag_check() {
    check_tags! {
        End = 0,
        Byte = 1,
        Short = 2,
        Int = 3,
        Long = 4,
        Float = 5,
        Double = 6,
        ByteArray = 7,
        String = 8,
        List = 9,
        Compound = 10,
        IntArray = 11,
        LongArray = 12,
    }

    for value in 13..=u8::MAX {
        let err = Tag::try_from(value).unwrap_err();
        assert_eq!(err.kind(), &ErrorKind::UnknownType(value));
    }
}

#[test]
fn tag_table_is_ordered_by_id() {
    for (i, tag) in Tag::ALL.iter().enumerate() {
        assert_eq!(tag.id() as usize, i);
    }
}

#[test]
fn tag_names() {
    assert_eq!(Tag::ByteArray.to_string(), "TAG_Byte_Array");
    assert_eq!(Tag::Compound.name(), "TAG_Compound");
    assert_eq!(Tag::End.name(), "TAG_End");
}
