//! Paths into a tag tree, in the format commands use.
//!
//! A path is a chain of steps from a root compound:
//!
//! * `name` or `"quoted name"` selects an entry of a compound. A compound
//!   after the name, as in `Item{id:"minecraft:stone"}`, only selects the
//!   entry when it matches.
//! * `[2]` selects an element of a list or array. Negative indices count from
//!   the end.
//! * `[]` selects every element, `[{Slot:0b}]` every element that matches.
//! * A compound at the very start, as in `{OnGround:1b}Pos[0]`, filters the
//!   root itself.
//!
//! Names are joined with `.`, indices follow directly: `Inventory[0].tag.display`.
//!
//! ```
//! use nbtree::path::TagPath;
//! use nbtree::{snbt, Value};
//!
//! # fn main() -> nbtree::error::Result<()> {
//! let mut root = snbt::compound_from_str(r#"{Inventory:[{id:"stone"},{id:"dirt"}]}"#)?;
//!
//! let path = TagPath::parse("Inventory[].id")?;
//! let ids: Vec<_> = path.get(&root).into_iter().map(|v| v.into_owned()).collect();
//! assert_eq!(ids, vec![Value::from("stone"), Value::from("dirt")]);
//!
//! assert_eq!(path.set(&mut root, &Value::from("air")), 2);
//! assert_eq!(TagPath::parse("Inventory[1]")?.remove(&mut root), 1);
//! # Ok(())
//! # }
//! ```
//!
//! A compound pattern matches a value when every entry of the pattern is
//! present in the value and matches in turn. A list pattern matches when each
//! of its elements matches some element of the value, in any order. Anything
//! else must be equal. See [`matches`].

mod parse;

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::{snbt, Compound, List, Value};

/// One step of a [`TagPath`].
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// An entry of a compound, if it matches `filter`.
    Key {
        name: String,
        filter: Option<Compound>,
    },
    /// An element of a list or array. Negative indices count from the end.
    Index(i32),
    /// Every element of a list or array matching the filter.
    All(Option<Compound>),
}

/// A parsed or built path. See the [module documentation](self).
///
/// `get` only reads. `set` creates missing compounds and lists on the way,
/// `remove` does not. Both return how many values they changed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TagPath {
    filter: Option<Compound>,
    nodes: Vec<Node>,
}

/// What to do at the end of a path.
enum Op<'v> {
    Set(&'v Value),
    Remove,
}

impl TagPath {
    /// A path with no steps. Add them with the builder methods.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn parse(input: &str) -> Result<Self> {
        parse::parse(input)
    }

    /// Only follow the path from roots matching `filter`.
    pub fn filter(mut self, filter: Compound) -> Self {
        self.filter = Some(filter);
        self
    }

    pub fn key(self, name: impl Into<String>) -> Self {
        self.node(Node::Key {
            name: name.into(),
            filter: None,
        })
    }

    pub fn key_matching(self, name: impl Into<String>, filter: Compound) -> Self {
        self.node(Node::Key {
            name: name.into(),
            filter: Some(filter),
        })
    }

    pub fn index(self, index: i32) -> Self {
        self.node(Node::Index(index))
    }

    pub fn all(self) -> Self {
        self.node(Node::All(None))
    }

    pub fn all_matching(self, filter: Compound) -> Self {
        self.node(Node::All(Some(filter)))
    }

    pub fn node(mut self, node: Node) -> Self {
        self.nodes.push(node);
        self
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn root_filter(&self) -> Option<&Compound> {
        self.filter.as_ref()
    }

    fn accepts(&self, root: &Compound) -> bool {
        self.filter
            .as_ref()
            .map_or(true, |f| compound_matches(f, root))
    }

    /// Every value the path leads to. Elements of byte, int and long arrays
    /// are not stored as values, so they come back owned.
    pub fn get<'a>(&self, root: &'a Compound) -> Vec<Cow<'a, Value>> {
        if !self.accepts(root) {
            return Vec::new();
        }

        let (first, rest) = match self.nodes.split_first() {
            Some(split) => split,
            None => return vec![Cow::Owned(Value::Compound(root.clone()))],
        };

        let mut found: Vec<Cow<'a, Value>> = match first {
            Node::Key { name, filter } => key_get(root, name, filter.as_ref())
                .map(Cow::Borrowed)
                .into_iter()
                .collect(),
            _ => Vec::new(),
        };

        for node in rest {
            found = found
                .iter()
                .flat_map(|v| match v {
                    Cow::Borrowed(v) => node.get(*v),
                    Cow::Owned(_) => Vec::new(),
                })
                .collect();

            if found.is_empty() {
                break;
            }
        }
        found
    }

    /// Put `value` everywhere the path leads, creating missing parents.
    /// Returns the number of values changed: an existing equal value does not
    /// count, and neither does a list that holds another tag.
    pub fn set(&self, root: &mut Compound, value: &Value) -> usize {
        self.modify(root, &Op::Set(value))
    }

    /// Remove everything the path leads to, returning how many values went.
    pub fn remove(&self, root: &mut Compound) -> usize {
        self.modify(root, &Op::Remove)
    }

    fn modify(&self, root: &mut Compound, op: &Op<'_>) -> usize {
        if !self.accepts(root) {
            return 0;
        }

        match self.nodes.as_slice() {
            [Node::Key { name, filter }] => key_apply(root, name, filter.as_ref(), op),
            [Node::Key { name, filter }, rest @ ..] => {
                let create = op.parent_for(&rest[0]);
                match key_child_mut(root, name, filter.as_ref(), create) {
                    Some(child) => walk(rest, child, op),
                    None => 0,
                }
            }
            // The root is a compound, so only a key can follow it.
            _ => 0,
        }
    }
}

impl Op<'_> {
    /// The empty container to create in front of `next` while setting.
    fn parent_for(&self, next: &Node) -> Option<Value> {
        match (self, next) {
            (Op::Remove, _) => None,
            (Op::Set(_), Node::Key { .. }) => Some(Value::Compound(Compound::new())),
            (Op::Set(_), _) => Some(Value::List(List::new())),
        }
    }
}

fn walk(nodes: &[Node], parent: &mut Value, op: &Op<'_>) -> usize {
    match nodes {
        [] => 0,
        [last] => last.apply(parent, op),
        [node, rest @ ..] => {
            let create = op.parent_for(&rest[0]);
            node.children_mut(parent, create)
                .into_iter()
                .map(|child| walk(rest, child, op))
                .sum()
        }
    }
}

/// True if `subject` matches `pattern`. Compounds match when every entry of
/// the pattern matches the same entry of the subject, lists when every
/// element of the pattern matches some element of the subject. An empty list
/// pattern only matches an empty list. Anything else must be equal.
pub fn matches(pattern: &Value, subject: &Value) -> bool {
    match (pattern, subject) {
        (Value::Compound(p), Value::Compound(s)) => compound_matches(p, s),
        (Value::List(p), Value::List(s)) if p.is_empty() => s.is_empty(),
        (Value::List(p), Value::List(s)) => p.iter().all(|pv| s.iter().any(|sv| matches(pv, sv))),
        _ => pattern == subject,
    }
}

fn compound_matches(pattern: &Compound, subject: &Compound) -> bool {
    pattern
        .iter()
        .all(|(k, pv)| subject.get(k).map_or(false, |sv| matches(pv, sv)))
}

fn passes(filter: Option<&Compound>, value: &Value) -> bool {
    match filter {
        None => true,
        Some(f) => value.as_compound().map_or(false, |c| compound_matches(f, c)),
    }
}

/// Position of `index` in a sequence of `len`, counting negatives from the end.
fn resolve(index: i32, len: usize) -> Option<usize> {
    let i = if index < 0 {
        len.checked_sub(index.unsigned_abs() as usize)?
    } else {
        index as usize
    };
    (i < len).then(|| i)
}

fn key_get<'a>(c: &'a Compound, name: &str, filter: Option<&Compound>) -> Option<&'a Value> {
    c.get(name).filter(|v| passes(filter, v))
}

fn key_child_mut<'a>(
    c: &'a mut Compound,
    name: &str,
    filter: Option<&Compound>,
    create: Option<Value>,
) -> Option<&'a mut Value> {
    if !c.contains_key(name) {
        c.put(name, create?);
        return c.get_mut(name);
    }
    c.get_mut(name).filter(|v| passes(filter, v))
}

fn key_apply(c: &mut Compound, name: &str, filter: Option<&Compound>, op: &Op<'_>) -> usize {
    let found = c.get(name);
    match op {
        Op::Remove => match found {
            Some(v) if passes(filter, v) => usize::from(c.remove(name).is_some()),
            _ => 0,
        },
        Op::Set(value) => {
            let blocked = match found {
                Some(v) => *v == **value || !passes(filter, v),
                None => filter.is_some(),
            };
            if blocked {
                return 0;
            }
            c.put(name, (*value).clone());
            1
        }
    }
}

macro_rules! array_index {
    ($array:expr, $index:expr, $op:expr, $variant:ident) => {
        match $op {
            Op::Remove => usize::from($array.remove($index).is_ok()),
            Op::Set(Value::$variant(v)) => match $array.get($index) {
                Ok(old) if old != *v => usize::from($array.set($index, *v).is_ok()),
                _ => 0,
            },
            Op::Set(_) => 0,
        }
    };
}

macro_rules! array_all {
    ($array:expr, $filter:expr, $op:expr, $variant:ident) => {
        match ($filter, $op) {
            // Array elements are numbers, which a compound never matches.
            (Some(_), _) => 0,
            (None, Op::Remove) => std::mem::take($array).len(),
            (None, Op::Set(Value::$variant(v))) => {
                let mut changed = 0;
                for slot in $array.as_mut_slice() {
                    if *slot != *v {
                        *slot = *v;
                        changed += 1;
                    }
                }
                changed
            }
            (None, Op::Set(_)) => 0,
        }
    };
}

impl Node {
    fn get<'a>(&self, parent: &'a Value) -> Vec<Cow<'a, Value>> {
        match (self, parent) {
            (Node::Key { name, filter }, Value::Compound(c)) => key_get(c, name, filter.as_ref())
                .map(Cow::Borrowed)
                .into_iter()
                .collect(),
            (Node::Index(i), Value::List(l)) => resolve(*i, l.len())
                .and_then(|i| l.as_slice().get(i))
                .map(Cow::Borrowed)
                .into_iter()
                .collect(),
            (Node::Index(i), Value::ByteArray(a)) => element(a, *i, Value::Byte),
            (Node::Index(i), Value::IntArray(a)) => element(a, *i, Value::Int),
            (Node::Index(i), Value::LongArray(a)) => element(a, *i, Value::Long),
            (Node::All(filter), Value::List(l)) => l
                .iter()
                .filter(|v| passes(filter.as_ref(), v))
                .map(Cow::Borrowed)
                .collect(),
            (Node::All(None), Value::ByteArray(a)) => elements(a, Value::Byte),
            (Node::All(None), Value::IntArray(a)) => elements(a, Value::Int),
            (Node::All(None), Value::LongArray(a)) => elements(a, Value::Long),
            _ => Vec::new(),
        }
    }

    /// The containers this step leads to, for following steps to work on.
    /// A missing compound entry, or the first element of an empty list, is
    /// filled with `create` when given.
    fn children_mut<'a>(&self, parent: &'a mut Value, create: Option<Value>) -> Vec<&'a mut Value> {
        match (self, parent) {
            (Node::Key { name, filter }, Value::Compound(c)) => {
                key_child_mut(c, name, filter.as_ref(), create)
                    .into_iter()
                    .collect()
            }
            (Node::Index(i), Value::List(l)) => match resolve(*i, l.len()) {
                Some(index) => l.as_mut_slice().get_mut(index).into_iter().collect(),
                None => Vec::new(),
            },
            (Node::All(filter), Value::List(l)) => {
                if l.is_empty() {
                    let added = create.map_or(false, |first| l.add(first).is_ok());
                    if !added {
                        return Vec::new();
                    }
                    return l.as_mut_slice().iter_mut().collect();
                }
                l.as_mut_slice()
                    .iter_mut()
                    .filter(|v| passes(filter.as_ref(), v))
                    .collect()
            }
            _ => Vec::new(),
        }
    }

    /// Apply the final step of a path to `parent`.
    fn apply(&self, parent: &mut Value, op: &Op<'_>) -> usize {
        match (self, parent) {
            (Node::Key { name, filter }, Value::Compound(c)) => key_apply(c, name, filter.as_ref(), op),

            (Node::Index(i), Value::List(l)) => {
                let index = match resolve(*i, l.len()) {
                    Some(index) => index,
                    None => return 0,
                };
                match op {
                    Op::Remove => usize::from(l.remove(index).is_ok()),
                    Op::Set(value) => {
                        if matches!(l.get(index), Ok(old) if old == *value) {
                            return 0;
                        }
                        usize::from(l.set(index, (*value).clone()).is_ok())
                    }
                }
            }
            (Node::Index(i), Value::ByteArray(a)) => match resolve(*i, a.len()) {
                Some(index) => array_index!(a, index, op, Byte),
                None => 0,
            },
            (Node::Index(i), Value::IntArray(a)) => match resolve(*i, a.len()) {
                Some(index) => array_index!(a, index, op, Int),
                None => 0,
            },
            (Node::Index(i), Value::LongArray(a)) => match resolve(*i, a.len()) {
                Some(index) => array_index!(a, index, op, Long),
                None => 0,
            },

            (Node::All(filter), Value::List(l)) => match op {
                Op::Remove => l.retain(|v| !passes(filter.as_ref(), v)),
                Op::Set(value) => {
                    let mut changed = 0;
                    for index in 0..l.len() {
                        let hit = l
                            .get(index)
                            .map_or(false, |old| old != *value && passes(filter.as_ref(), old));
                        if hit && l.set(index, (*value).clone()).is_ok() {
                            changed += 1;
                        }
                    }
                    changed
                }
            },
            (Node::All(filter), Value::ByteArray(a)) => array_all!(a, filter, op, Byte),
            (Node::All(filter), Value::IntArray(a)) => array_all!(a, filter, op, Int),
            (Node::All(filter), Value::LongArray(a)) => array_all!(a, filter, op, Long),

            _ => 0,
        }
    }
}

fn element<'a, T: Copy>(array: &[T], index: i32, wrap: fn(T) -> Value) -> Vec<Cow<'a, Value>> {
    resolve(index, array.len())
        .map(|i| Cow::Owned(wrap(array[i])))
        .into_iter()
        .collect()
}

fn elements<'a, T: Copy>(array: &[T], wrap: fn(T) -> Value) -> Vec<Cow<'a, Value>> {
    array.iter().map(|v| Cow::Owned(wrap(*v))).collect()
}

/// Writes the path in the form [`TagPath::parse`] reads.
impl fmt::Display for TagPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(filter) = &self.filter {
            write!(f, "{}", filter)?;
        }

        for (i, node) in self.nodes.iter().enumerate() {
            match node {
                Node::Key { name, filter } => {
                    if i > 0 {
                        f.write_str(".")?;
                    }
                    if !name.is_empty() && name.chars().all(snbt::is_bare_char) {
                        f.write_str(name)?;
                    } else {
                        f.write_str(&snbt::to_string(&Value::String(name.clone())))?;
                    }
                    if let Some(filter) = filter {
                        write!(f, "{}", filter)?;
                    }
                }
                Node::Index(index) => write!(f, "[{}]", index)?,
                Node::All(None) => f.write_str("[]")?,
                Node::All(Some(filter)) => write!(f, "[{}]", filter)?,
            }
        }
        Ok(())
    }
}

impl FromStr for TagPath {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
