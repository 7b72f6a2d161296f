use std::convert::TryInto;

use crate::Tag;

/// Builder for raw NBT bytes. It does *not* guarantee the result is valid
/// NBT, which is the point: tests use it to hand-craft broken input.
pub struct Builder {
    payload: Vec<u8>,
}

impl Builder {
    pub fn new() -> Self {
        Builder {
            payload: Vec::new(),
        }
    }

    pub fn tag(mut self, t: Tag) -> Self {
        self.payload.push(t as u8);
        self
    }

    pub fn name(mut self, name: &str) -> Self {
        let name = cesu8::to_java_cesu8(name);
        let len: u16 = name.len().try_into().expect("test name too long");
        self.payload.extend_from_slice(&len.to_be_bytes());
        self.payload.extend_from_slice(&name);
        self
    }

    pub fn start_compound(self, name: &str) -> Self {
        self.tag(Tag::Compound).name(name)
    }

    pub fn end_compound(self) -> Self {
        self.tag(Tag::End)
    }

    pub fn start_list(self, name: &str, element: Tag, size: i32) -> Self {
        self.tag(Tag::List).name(name).tag(element).int_payload(size)
    }

    /// A list header inside another list, which has no name.
    pub fn start_anon_list(self, element: Tag, size: i32) -> Self {
        self.tag(element).int_payload(size)
    }

    pub fn byte(self, name: &str, b: i8) -> Self {
        self.tag(Tag::Byte).name(name).byte_payload(b)
    }

    pub fn int(self, name: &str, i: i32) -> Self {
        self.tag(Tag::Int).name(name).int_payload(i)
    }

    pub fn string(self, name: &str, s: &str) -> Self {
        self.tag(Tag::String).name(name).name(s)
    }

    pub fn float(self, name: &str, f: f32) -> Self {
        self.tag(Tag::Float).name(name).raw_bytes(&f.to_be_bytes())
    }

    pub fn byte_array(self, name: &str, bs: &[i8]) -> Self {
        let bytes: Vec<u8> = bs.iter().map(|b| *b as u8).collect();
        self.tag(Tag::ByteArray)
            .name(name)
            .int_payload(bs.len().try_into().unwrap())
            .raw_bytes(&bytes)
    }

    pub fn byte_payload(mut self, b: i8) -> Self {
        self.payload.push(b as u8);
        self
    }

    pub fn int_payload(mut self, i: i32) -> Self {
        self.payload.extend_from_slice(&i.to_be_bytes());
        self
    }

    pub fn raw_str_len(mut self, len: u16) -> Self {
        self.payload.extend_from_slice(&len.to_be_bytes());
        self
    }

    /// Add bytes as they are, for corner cases not worth a method.
    pub fn raw_bytes(mut self, bs: &[u8]) -> Self {
        self.payload.extend_from_slice(bs);
        self
    }

    pub fn build(self) -> Vec<u8> {
        self.payload
    }
}
