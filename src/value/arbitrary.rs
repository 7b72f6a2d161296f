use arbitrary::{Arbitrary, Result, Unstructured};

use crate::{Compound, List, Tag, Value};

fn list_of<'a, T, F>(u: &mut Unstructured<'a>, f: F) -> Result<List>
where
    F: FnMut(T) -> Value,
    T: Arbitrary<'a>,
{
    let values = u
        .arbitrary_iter::<T>()?
        .collect::<Result<Vec<_>>>()?
        .into_iter()
        .map(f)
        .collect();

    Ok(List::from_vec_unchecked(values))
}

impl<'a> Arbitrary<'a> for List {
    fn arbitrary(u: &mut Unstructured<'a>) -> Result<Self> {
        use Value::*;

        // Lists need to all be the same type.
        Ok(match u.arbitrary::<Tag>()? {
            Tag::End => List::new(),
            Tag::Byte => list_of(u, Byte)?,
            Tag::Short => list_of(u, Short)?,
            Tag::Int => list_of(u, Int)?,
            Tag::Long => list_of(u, Long)?,
            Tag::Float => list_of(u, Float)?,
            Tag::Double => list_of(u, Double)?,
            Tag::ByteArray => list_of(u, ByteArray)?,
            Tag::String => list_of(u, String)?,
            Tag::List => list_of(u, Value::List)?,
            Tag::Compound => list_of(u, Value::Compound)?,
            Tag::IntArray => list_of(u, IntArray)?,
            Tag::LongArray => list_of(u, LongArray)?,
        })
    }
}

impl<'a> Arbitrary<'a> for Compound {
    fn arbitrary(u: &mut Unstructured<'a>) -> Result<Self> {
        u.arbitrary_iter::<(std::string::String, Value)>()?
            .collect::<Result<Compound>>()
    }
}

impl<'a> Arbitrary<'a> for Value {
    fn arbitrary(u: &mut Unstructured<'a>) -> Result<Self> {
        use Value::*;

        Ok(match u.arbitrary::<Tag>()? {
            Tag::End => return Err(arbitrary::Error::IncorrectFormat),
            Tag::Byte => Byte(u.arbitrary()?),
            Tag::Short => Short(u.arbitrary()?),
            Tag::Int => Int(u.arbitrary()?),
            Tag::Long => Long(u.arbitrary()?),
            Tag::Float => Float(u.arbitrary()?),
            Tag::Double => Double(u.arbitrary()?),
            Tag::ByteArray => ByteArray(u.arbitrary()?),
            Tag::String => String(u.arbitrary()?),
            Tag::List => Value::List(u.arbitrary()?),
            Tag::Compound => Value::Compound(u.arbitrary()?),
            Tag::IntArray => IntArray(u.arbitrary()?),
            Tag::LongArray => LongArray(u.arbitrary()?),
        })
    }
}
