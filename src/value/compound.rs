use indexmap::IndexMap;

use crate::{Tag, Value};

/// An NBT compound: named values with unique names. Iteration follows
/// insertion order, so a compound that is read and written again produces
/// the same bytes.
#[derive(Debug, Clone, Default)]
pub struct Compound {
    entries: IndexMap<String, Value>,
}

impl Compound {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: IndexMap::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Insert a value. Replacing an existing name keeps the position of the
    /// original entry. Returns the replaced value.
    pub fn put(&mut self, name: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.entries.insert(name.into(), value.into())
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.entries.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Value> {
        self.entries.get_mut(name)
    }

    /// Get the value only if it has the given tag.
    pub fn get_typed(&self, name: &str, tag: Tag) -> Option<&Value> {
        self.get(name).filter(|v| v.tag() == tag)
    }

    /// Remove a value, keeping the order of the remaining entries.
    pub fn remove(&mut self, name: &str) -> Option<Value> {
        self.entries.shift_remove(name)
    }

    pub fn contains_key(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// True if `name` is present and holds a `tag` value.
    pub fn contains(&self, name: &str, tag: Tag) -> bool {
        self.get_typed(name, tag).is_some()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Copy every entry of `source` into this compound. Compounds present in
    /// both are merged recursively, anything else in `source` replaces what is
    /// here.
    pub fn merge(&mut self, source: &Compound) -> &mut Self {
        for (name, value) in source.iter() {
            let merged = match (self.entries.get_mut(name), value) {
                (Some(Value::Compound(ours)), Value::Compound(theirs)) => {
                    ours.merge(theirs);
                    true
                }
                _ => false,
            };

            if !merged {
                self.entries.insert(name.clone(), value.clone());
            }
        }
        self
    }

    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Value> {
        self.entries.iter()
    }

    pub fn iter_mut(&mut self) -> indexmap::map::IterMut<'_, String, Value> {
        self.entries.iter_mut()
    }

    pub fn keys(&self) -> indexmap::map::Keys<'_, String, Value> {
        self.entries.keys()
    }

    pub fn values(&self) -> indexmap::map::Values<'_, String, Value> {
        self.entries.values()
    }
}

// IndexMap equality ignores order, but two compounds with different entry
// order encode differently.
impl PartialEq for Compound {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .zip(other.iter())
                .all(|((k1, v1), (k2, v2))| k1 == k2 && v1 == v2)
    }
}

impl<'a> IntoIterator for &'a Compound {
    type Item = (&'a String, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl IntoIterator for Compound {
    type Item = (String, Value);
    type IntoIter = indexmap::map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Compound {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut compound = Compound::new();
        for (k, v) in iter {
            compound.put(k, v);
        }
        compound
    }
}

impl<K: Into<String>, V: Into<Value>> Extend<(K, V)> for Compound {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.put(k, v);
        }
    }
}
