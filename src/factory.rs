//! Free functions wrapping raw data into tags.
//!
//! These are what the typed `put_*`/`add_*` methods on [`Compound`] and
//! [`List`] use, and are handy when building trees by hand:
//!
//! ```
//! use nbtree::factory::*;
//!
//! let mut item = compound();
//! item.put("id", string("minecraft:stone"));
//! item.put("Count", byte(64));
//!
//! let mut inventory = list();
//! inventory.add(item.into()).unwrap();
//! assert_eq!(inventory.len(), 1);
//! ```

use crate::error::Result;
use crate::{ByteArray, Compound, IntArray, List, LongArray, Value};

pub fn byte(v: i8) -> Value {
    Value::Byte(v)
}

/// Booleans are stored as a byte of 1 or 0.
pub fn boolean(v: bool) -> Value {
    Value::Byte(v as i8)
}

pub fn short(v: i16) -> Value {
    Value::Short(v)
}

pub fn int(v: i32) -> Value {
    Value::Int(v)
}

pub fn long(v: i64) -> Value {
    Value::Long(v)
}

pub fn float(v: f32) -> Value {
    Value::Float(v)
}

pub fn double(v: f64) -> Value {
    Value::Double(v)
}

pub fn string(v: impl Into<String>) -> Value {
    Value::String(v.into())
}

pub fn byte_array(v: impl Into<Vec<i8>>) -> Value {
    Value::ByteArray(ByteArray::new(v.into()))
}

pub fn int_array(v: impl Into<Vec<i32>>) -> Value {
    Value::IntArray(IntArray::new(v.into()))
}

pub fn long_array(v: impl Into<Vec<i64>>) -> Value {
    Value::LongArray(LongArray::new(v.into()))
}

pub fn compound() -> Compound {
    Compound::new()
}

pub fn list() -> List {
    List::new()
}

/// A list of the given values, which must all have the same tag.
pub fn list_of<I, V>(values: I) -> Result<List>
where
    I: IntoIterator<Item = V>,
    V: Into<Value>,
{
    List::from_values(values.into_iter().map(Into::into).collect())
}

fn homogeneous<I, T>(values: I, wrap: fn(T) -> Value) -> List
where
    I: IntoIterator<Item = T>,
{
    List::from_vec_unchecked(values.into_iter().map(wrap).collect())
}

pub fn byte_list(values: impl IntoIterator<Item = i8>) -> List {
    homogeneous(values, Value::Byte)
}

pub fn short_list(values: impl IntoIterator<Item = i16>) -> List {
    homogeneous(values, Value::Short)
}

pub fn int_list(values: impl IntoIterator<Item = i32>) -> List {
    homogeneous(values, Value::Int)
}

pub fn long_list(values: impl IntoIterator<Item = i64>) -> List {
    homogeneous(values, Value::Long)
}

/// List of floats, such as an entity's `Rotation`.
pub fn float_list(values: impl IntoIterator<Item = f32>) -> List {
    homogeneous(values, Value::Float)
}

/// List of doubles, such as an entity's `Pos` or `Motion`.
pub fn double_list(values: impl IntoIterator<Item = f64>) -> List {
    homogeneous(values, Value::Double)
}

pub fn string_list<S: Into<String>>(values: impl IntoIterator<Item = S>) -> List {
    homogeneous(values, |s: S| Value::String(s.into()))
}

/// Store a UUID the way the game does since 1.16: an IntArray of four ints,
/// most significant first.
pub fn uuid(v: u128) -> Value {
    Value::IntArray(IntArray::new(vec![
        (v >> 96) as i32,
        (v >> 64) as i32,
        (v >> 32) as i32,
        v as i32,
    ]))
}

/// Inverse of [`uuid`]. `None` unless the array has exactly four ints.
pub fn load_uuid(array: &IntArray) -> Option<u128> {
    match **array {
        [a, b, c, d] => Some(
            (a as u32 as u128) << 96
                | (b as u32 as u128) << 64
                | (c as u32 as u128) << 32
                | d as u32 as u128,
        ),
        _ => None,
    }
}
