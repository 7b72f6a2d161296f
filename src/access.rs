// Typed accessors for Compound and List.
//
// Every getter here is total: a missing name, an index out of range or a value
// of another tag yields the default for the type instead of an error. Numbers
// default to zero, anything that borrows or allocates defaults to `None`.
// Setters wrap the raw value with the matching `factory` function and then
// defer to the untyped container API, so list setters keep the list's tag
// checks.

use crate::error::Result;
use crate::{factory, Compound, List, Tag, Value};

macro_rules! copy_access {
    ($ty:ty, $variant:ident, $make:path,
     $get:ident, $get_or:ident, $put:ident, $add:ident, $insert:ident, $set:ident) => {
        impl Compound {
            #[doc = concat!("The `", stringify!($ty), "` under `name`, or zero.")]
            pub fn $get(&self, name: &str) -> $ty {
                self.$get_or(name, <$ty>::default())
            }

            #[doc = concat!("The `", stringify!($ty), "` under `name`, or `default`.")]
            pub fn $get_or(&self, name: &str, default: $ty) -> $ty {
                match self.get(name) {
                    Some(Value::$variant(v)) => *v,
                    _ => default,
                }
            }

            pub fn $put(&mut self, name: impl Into<String>, value: $ty) -> Option<Value> {
                self.put(name, $make(value))
            }
        }

        impl List {
            #[doc = concat!("The `", stringify!($ty), "` at `index`, or zero.")]
            pub fn $get(&self, index: usize) -> $ty {
                self.$get_or(index, <$ty>::default())
            }

            #[doc = concat!("The `", stringify!($ty), "` at `index`, or `default`.")]
            pub fn $get_or(&self, index: usize, default: $ty) -> $ty {
                match self.as_slice().get(index) {
                    Some(Value::$variant(v)) => *v,
                    _ => default,
                }
            }

            pub fn $add(&mut self, value: $ty) -> Result<()> {
                self.add($make(value))
            }

            pub fn $insert(&mut self, index: usize, value: $ty) -> Result<()> {
                self.insert(index, $make(value))
            }

            pub fn $set(&mut self, index: usize, value: $ty) -> Result<Value> {
                self.set(index, $make(value))
            }
        }
    };
}

copy_access!(i8, Byte, factory::byte,
    get_byte, get_byte_or, put_byte, add_byte, insert_byte, set_byte);
copy_access!(i16, Short, factory::short,
    get_short, get_short_or, put_short, add_short, insert_short, set_short);
copy_access!(i32, Int, factory::int,
    get_int, get_int_or, put_int, add_int, insert_int, set_int);
copy_access!(i64, Long, factory::long,
    get_long, get_long_or, put_long, add_long, insert_long, set_long);
copy_access!(f32, Float, factory::float,
    get_float, get_float_or, put_float, add_float, insert_float, set_float);
copy_access!(f64, Double, factory::double,
    get_double, get_double_or, put_double, add_double, insert_double, set_double);

// Arrays are handed out as borrowed slices. `to_vec` gives an independent
// copy when one is needed.
macro_rules! array_access {
    ($elem:ty, $variant:ident, $make:path,
     $get:ident, $get_or:ident, $put:ident, $add:ident, $insert:ident, $set:ident) => {
        impl Compound {
            pub fn $get(&self, name: &str) -> Option<&[$elem]> {
                match self.get(name) {
                    Some(Value::$variant(v)) => Some(&v[..]),
                    _ => None,
                }
            }

            pub fn $get_or<'a>(&'a self, name: &str, default: &'a [$elem]) -> &'a [$elem] {
                self.$get(name).unwrap_or(default)
            }

            pub fn $put(&mut self, name: impl Into<String>, value: impl Into<Vec<$elem>>) -> Option<Value> {
                self.put(name, $make(value))
            }
        }

        impl List {
            pub fn $get(&self, index: usize) -> Option<&[$elem]> {
                match self.as_slice().get(index) {
                    Some(Value::$variant(v)) => Some(&v[..]),
                    _ => None,
                }
            }

            pub fn $get_or<'a>(&'a self, index: usize, default: &'a [$elem]) -> &'a [$elem] {
                self.$get(index).unwrap_or(default)
            }

            pub fn $add(&mut self, value: impl Into<Vec<$elem>>) -> Result<()> {
                self.add($make(value))
            }

            pub fn $insert(&mut self, index: usize, value: impl Into<Vec<$elem>>) -> Result<()> {
                self.insert(index, $make(value))
            }

            pub fn $set(&mut self, index: usize, value: impl Into<Vec<$elem>>) -> Result<Value> {
                self.set(index, $make(value))
            }
        }
    };
}

array_access!(i8, ByteArray, factory::byte_array,
    get_byte_array, get_byte_array_or, put_byte_array,
    add_byte_array, insert_byte_array, set_byte_array);
array_access!(i32, IntArray, factory::int_array,
    get_int_array, get_int_array_or, put_int_array,
    add_int_array, insert_int_array, set_int_array);
array_access!(i64, LongArray, factory::long_array,
    get_long_array, get_long_array_or, put_long_array,
    add_long_array, insert_long_array, set_long_array);

/// Collect a list of `tag` values. An empty list counts as a list of any tag.
fn unbox<'a, T>(value: Option<&'a Value>, tag: Tag, f: fn(&'a Value) -> Option<T>) -> Option<Vec<T>> {
    match value {
        Some(Value::List(list)) if list.is_empty() || list.element_type() == tag => {
            list.iter().map(f).collect()
        }
        _ => None,
    }
}

// Lists of numbers stored as an element of a list or compound, eg. an entity's
// `Pos` is a list of three doubles.
macro_rules! boxed_access {
    ($ty:ty, $tag:expr, $variant:ident, $make:path,
     $get:ident, $get_or:ident, $put:ident, $add:ident, $insert:ident, $set:ident) => {
        impl Compound {
            pub fn $get(&self, name: &str) -> Option<Vec<$ty>> {
                unbox(self.get(name), $tag, |v| match v {
                    Value::$variant(x) => Some(*x),
                    _ => None,
                })
            }

            pub fn $get_or(&self, name: &str, default: Vec<$ty>) -> Vec<$ty> {
                self.$get(name).unwrap_or(default)
            }

            pub fn $put(&mut self, name: impl Into<String>, values: impl IntoIterator<Item = $ty>) -> Option<Value> {
                self.put(name, $make(values))
            }
        }

        impl List {
            pub fn $get(&self, index: usize) -> Option<Vec<$ty>> {
                unbox(self.as_slice().get(index), $tag, |v| match v {
                    Value::$variant(x) => Some(*x),
                    _ => None,
                })
            }

            pub fn $get_or(&self, index: usize, default: Vec<$ty>) -> Vec<$ty> {
                self.$get(index).unwrap_or(default)
            }

            pub fn $add(&mut self, values: impl IntoIterator<Item = $ty>) -> Result<()> {
                self.add($make(values).into())
            }

            pub fn $insert(&mut self, index: usize, values: impl IntoIterator<Item = $ty>) -> Result<()> {
                self.insert(index, $make(values).into())
            }

            pub fn $set(&mut self, index: usize, values: impl IntoIterator<Item = $ty>) -> Result<Value> {
                self.set(index, $make(values).into())
            }
        }
    };
}

boxed_access!(f32, Tag::Float, Float, factory::float_list,
    get_float_list, get_float_list_or, put_float_list,
    add_float_list, insert_float_list, set_float_list);
boxed_access!(f64, Tag::Double, Double, factory::double_list,
    get_double_list, get_double_list_or, put_double_list,
    add_double_list, insert_double_list, set_double_list);

impl Compound {
    /// The string under `name`, if there is one.
    pub fn get_string(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(Value::as_str)
    }

    pub fn get_string_or<'a>(&'a self, name: &str, default: &'a str) -> &'a str {
        self.get_string(name).unwrap_or(default)
    }

    pub fn put_string(&mut self, name: impl Into<String>, value: impl Into<String>) -> Option<Value> {
        self.put(name, factory::string(value))
    }

    pub fn get_string_list(&self, name: &str) -> Option<Vec<&str>> {
        unbox(self.get(name), Tag::String, Value::as_str)
    }

    pub fn put_string_list<S: Into<String>>(
        &mut self,
        name: impl Into<String>,
        values: impl IntoIterator<Item = S>,
    ) -> Option<Value> {
        self.put(name, factory::string_list(values))
    }

    /// Booleans are bytes, anything but zero is true.
    pub fn get_bool(&self, name: &str) -> bool {
        self.get_bool_or(name, false)
    }

    pub fn get_bool_or(&self, name: &str, default: bool) -> bool {
        self.get_byte_or(name, default as i8) != 0
    }

    pub fn put_bool(&mut self, name: impl Into<String>, value: bool) -> Option<Value> {
        self.put(name, factory::boolean(value))
    }

    /// A UUID stored as four ints. `None` if missing or not exactly four ints.
    pub fn get_uuid(&self, name: &str) -> Option<u128> {
        match self.get(name) {
            Some(Value::IntArray(a)) => factory::load_uuid(a),
            _ => None,
        }
    }

    pub fn put_uuid(&mut self, name: impl Into<String>, value: u128) -> Option<Value> {
        self.put(name, factory::uuid(value))
    }

    pub fn get_compound(&self, name: &str) -> Option<&Compound> {
        self.get(name).and_then(Value::as_compound)
    }

    pub fn get_compound_mut(&mut self, name: &str) -> Option<&mut Compound> {
        self.get_mut(name).and_then(Value::as_compound_mut)
    }

    pub fn get_list(&self, name: &str) -> Option<&List> {
        self.get(name).and_then(Value::as_list)
    }

    pub fn get_list_mut(&mut self, name: &str) -> Option<&mut List> {
        self.get_mut(name).and_then(Value::as_list_mut)
    }

    /// The list under `name` if it holds `element` values. Empty lists match
    /// any element type.
    pub fn get_list_of(&self, name: &str, element: Tag) -> Option<&List> {
        self.get_list(name)
            .filter(|l| l.is_empty() || l.element_type() == element)
    }
}

impl List {
    pub fn get_string(&self, index: usize) -> Option<&str> {
        self.as_slice().get(index).and_then(Value::as_str)
    }

    pub fn get_string_or<'a>(&'a self, index: usize, default: &'a str) -> &'a str {
        self.get_string(index).unwrap_or(default)
    }

    pub fn add_string(&mut self, value: impl Into<String>) -> Result<()> {
        self.add(factory::string(value))
    }

    pub fn insert_string(&mut self, index: usize, value: impl Into<String>) -> Result<()> {
        self.insert(index, factory::string(value))
    }

    pub fn set_string(&mut self, index: usize, value: impl Into<String>) -> Result<Value> {
        self.set(index, factory::string(value))
    }

    pub fn get_string_list(&self, index: usize) -> Option<Vec<&str>> {
        unbox(self.as_slice().get(index), Tag::String, Value::as_str)
    }

    pub fn add_string_list<S: Into<String>>(&mut self, values: impl IntoIterator<Item = S>) -> Result<()> {
        self.add(factory::string_list(values).into())
    }

    pub fn insert_string_list<S: Into<String>>(
        &mut self,
        index: usize,
        values: impl IntoIterator<Item = S>,
    ) -> Result<()> {
        self.insert(index, factory::string_list(values).into())
    }

    pub fn set_string_list<S: Into<String>>(
        &mut self,
        index: usize,
        values: impl IntoIterator<Item = S>,
    ) -> Result<Value> {
        self.set(index, factory::string_list(values).into())
    }

    pub fn get_compound(&self, index: usize) -> Option<&Compound> {
        self.as_slice().get(index).and_then(Value::as_compound)
    }

    pub fn add_compound(&mut self, value: Compound) -> Result<()> {
        self.add(Value::Compound(value))
    }

    pub fn get_list(&self, index: usize) -> Option<&List> {
        self.as_slice().get(index).and_then(Value::as_list)
    }

    pub fn add_list(&mut self, value: List) -> Result<()> {
        self.add(Value::List(value))
    }
}
