use crate::error::{Error, Result};
use crate::{Tag, Value};

/// An NBT list. Every element has the same tag, which the list reports as its
/// element type.
///
/// The element type follows from the contents: an empty list has the element
/// type [`Tag::End`] and accepts any value, and adding one commits the list to
/// that value's tag. Once the list holds something, adding or setting a value
/// of another tag fails with
/// [`ErrorKind::TypeMismatch`][`crate::error::ErrorKind::TypeMismatch`].
///
/// ```
/// # use nbtree::{List, Value, Tag};
/// # use nbtree::error::ErrorKind;
/// let mut list = List::new();
/// list.add(Value::Int(1)).unwrap();
/// assert_eq!(list.element_type(), Tag::Int);
///
/// let err = list.add(Value::from("oops")).unwrap_err();
/// assert_eq!(err.kind(), &ErrorKind::TypeMismatch);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct List {
    items: Vec<Value>,
}

impl List {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Create a list from values, all of which must have the same tag.
    pub fn from_values(values: Vec<Value>) -> Result<Self> {
        if let Some(first) = values.first() {
            let element = first.tag();
            if let Some(bad) = values.iter().find(|v| v.tag() != element) {
                return Err(Error::type_mismatch(element, bad.tag()));
            }
        }
        Ok(Self { items: values })
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The tag of the elements, or [`Tag::End`] when empty.
    pub fn element_type(&self) -> Tag {
        self.items.first().map_or(Tag::End, Value::tag)
    }

    /// True if the list is non-empty and holds `tag` values.
    pub fn is_of(&self, tag: Tag) -> bool {
        !self.is_empty() && self.element_type() == tag
    }

    fn check(&self, value: &Value) -> Result<()> {
        let element = self.element_type();
        let tag = value.tag();
        if !self.items.is_empty() && element != tag {
            return Err(Error::type_mismatch(element, tag));
        }
        Ok(())
    }

    /// Append a value.
    pub fn add(&mut self, value: Value) -> Result<()> {
        self.check(&value)?;
        self.items.push(value);
        Ok(())
    }

    /// Insert a value at `index`, shifting later elements. `index` may equal
    /// the length to append.
    pub fn insert(&mut self, index: usize, value: Value) -> Result<()> {
        self.check(&value)?;
        if index > self.items.len() {
            return Err(Error::index_out_of_range(index, self.items.len()));
        }
        self.items.insert(index, value);
        Ok(())
    }

    /// Replace the value at `index`, returning the old one.
    pub fn set(&mut self, index: usize, value: Value) -> Result<Value> {
        self.check(&value)?;
        let len = self.items.len();
        let slot = self
            .items
            .get_mut(index)
            .ok_or_else(|| Error::index_out_of_range(index, len))?;

        Ok(std::mem::replace(slot, value))
    }

    /// Remove the value at `index`. Removing the last element leaves an
    /// empty list that accepts any tag again.
    pub fn remove(&mut self, index: usize) -> Result<Value> {
        if index >= self.items.len() {
            return Err(Error::index_out_of_range(index, self.items.len()));
        }
        Ok(self.items.remove(index))
    }

    pub fn get(&self, index: usize) -> Result<&Value> {
        self.items
            .get(index)
            .ok_or_else(|| Error::index_out_of_range(index, self.items.len()))
    }

    /// Mutable access to an element. The element is handed out as a `Value`
    /// but its tag cannot be changed through this: use [`List::set`] for that.
    pub fn get_mut(&mut self, index: usize) -> Option<ValueMut<'_>> {
        self.items.get_mut(index).map(ValueMut)
    }

    /// Index of the first element equal to `value`.
    pub fn position(&self, value: &Value) -> Option<usize> {
        self.items.iter().position(|v| v == value)
    }

    /// Keep only the elements matching `keep`. Returns the number removed.
    pub fn retain<F>(&mut self, mut keep: F) -> usize
    where
        F: FnMut(&Value) -> bool,
    {
        let before = self.items.len();
        self.items.retain(|v| keep(v));
        before - self.items.len()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Append every element of `other`. Nothing is added if any element has
    /// the wrong tag.
    pub fn merge(&mut self, other: List) -> Result<()> {
        if other.is_empty() {
            return Ok(());
        }
        let (ours, theirs) = (self.element_type(), other.element_type());
        if !self.is_empty() && ours != theirs {
            return Err(Error::type_mismatch(ours, theirs));
        }

        self.items.extend(other.items);
        Ok(())
    }

    /// Append values from an iterator. Nothing is added unless they all share
    /// one tag that this list accepts.
    pub fn try_extend<I>(&mut self, values: I) -> Result<()>
    where
        I: IntoIterator<Item = Value>,
    {
        let other = List::from_values(values.into_iter().collect())?;
        self.merge(other)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.items.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = ValueMut<'_>> {
        self.items.iter_mut().map(ValueMut)
    }

    pub fn as_slice(&self) -> &[Value] {
        &self.items
    }

    /// Crate code using this must not change the tag of any element.
    pub(crate) fn as_mut_slice(&mut self) -> &mut [Value] {
        &mut self.items
    }

    pub fn into_vec(self) -> Vec<Value> {
        self.items
    }

    /// Used where every value is already known to have the same tag.
    pub(crate) fn from_vec_unchecked(items: Vec<Value>) -> Self {
        Self { items }
    }
}

/// A mutable handle to a list element that can modify the value in place but
/// not replace it with a value of another tag.
#[derive(Debug)]
pub struct ValueMut<'a>(&'a mut Value);

impl<'a> ValueMut<'a> {
    pub fn get(&self) -> &Value {
        &*self.0
    }

    /// Mutable compound, if this element is one.
    pub fn as_compound_mut(self) -> Option<&'a mut crate::Compound> {
        match self.0 {
            Value::Compound(c) => Some(c),
            _ => None,
        }
    }

    /// Mutable list, if this element is one.
    pub fn as_list_mut(self) -> Option<&'a mut List> {
        match self.0 {
            Value::List(l) => Some(l),
            _ => None,
        }
    }

    /// Replace the element with a value of the same tag.
    pub fn replace(&mut self, value: Value) -> Result<Value> {
        if value.tag() != self.0.tag() {
            return Err(Error::type_mismatch(self.0.tag(), value.tag()));
        }
        Ok(std::mem::replace(self.0, value))
    }
}

impl<'a> IntoIterator for &'a List {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl IntoIterator for List {
    type Item = Value;
    type IntoIter = std::vec::IntoIter<Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl TryFrom<Vec<Value>> for List {
    type Error = Error;

    fn try_from(values: Vec<Value>) -> Result<Self> {
        Self::from_values(values)
    }
}
