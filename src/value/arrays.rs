use std::ops::Deref;

use crate::error::{Error, Result};
use crate::Tag;

// The three NBT array types only differ in their element type, so they are
// stamped out here. Elements are stored unboxed.
macro_rules! nbt_array {
    ($(#[$meta:meta])* $name:ident, $elem:ty, $tag:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
        #[cfg_attr(feature = "arbitrary1", derive(arbitrary::Arbitrary))]
        pub struct $name {
            data: Vec<$elem>,
        }

        impl $name {
            pub const TAG: Tag = $tag;

            pub fn new(data: Vec<$elem>) -> Self {
                Self { data }
            }

            /// Array of `len` zeroes.
            pub fn zeroed(len: usize) -> Self {
                Self {
                    data: vec![0; len],
                }
            }

            /// Get the element at `index`.
            pub fn get(&self, index: usize) -> Result<$elem> {
                self.data
                    .get(index)
                    .copied()
                    .ok_or_else(|| Error::index_out_of_range(index, self.data.len()))
            }

            /// Replace the element at `index`, returning the old element.
            pub fn set(&mut self, index: usize, value: $elem) -> Result<$elem> {
                let len = self.data.len();
                let slot = self
                    .data
                    .get_mut(index)
                    .ok_or_else(|| Error::index_out_of_range(index, len))?;

                Ok(std::mem::replace(slot, value))
            }

            pub fn push(&mut self, value: $elem) {
                self.data.push(value);
            }

            /// Insert at `index`, which may equal the length to append.
            pub fn insert(&mut self, index: usize, value: $elem) -> Result<()> {
                if index > self.data.len() {
                    return Err(Error::index_out_of_range(index, self.data.len()));
                }
                self.data.insert(index, value);
                Ok(())
            }

            pub fn remove(&mut self, index: usize) -> Result<$elem> {
                if index >= self.data.len() {
                    return Err(Error::index_out_of_range(index, self.data.len()));
                }
                Ok(self.data.remove(index))
            }

            /// Mutable view of the elements. The length cannot be changed
            /// through this.
            pub fn as_mut_slice(&mut self) -> &mut [$elem] {
                &mut self.data
            }

            /// An independent copy of the elements.
            pub fn to_vec(&self) -> Vec<$elem> {
                self.data.clone()
            }

            pub fn into_inner(self) -> Vec<$elem> {
                self.data
            }
        }

        impl Deref for $name {
            type Target = [$elem];

            fn deref(&self) -> &Self::Target {
                &self.data
            }
        }

        impl From<Vec<$elem>> for $name {
            fn from(data: Vec<$elem>) -> Self {
                Self::new(data)
            }
        }

        impl From<&[$elem]> for $name {
            fn from(data: &[$elem]) -> Self {
                Self::new(data.to_vec())
            }
        }

        impl FromIterator<$elem> for $name {
            fn from_iter<I: IntoIterator<Item = $elem>>(iter: I) -> Self {
                Self::new(iter.into_iter().collect())
            }
        }

        impl<'a> IntoIterator for &'a $name {
            type Item = &'a $elem;
            type IntoIter = std::slice::Iter<'a, $elem>;

            fn into_iter(self) -> Self::IntoIter {
                self.data.iter()
            }
        }
    };
}

nbt_array!(
    /// NBT byte array, `TAG_Byte_Array`.
    ByteArray,
    i8,
    Tag::ByteArray
);

nbt_array!(
    /// NBT int array, `TAG_Int_Array`. Also used to store UUIDs.
    IntArray,
    i32,
    Tag::IntArray
);

nbt_array!(
    /// NBT long array, `TAG_Long_Array`. Chunk data such as block states and
    /// heightmaps are packed into these.
    LongArray,
    i64,
    Tag::LongArray
);
