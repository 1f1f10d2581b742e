use std::borrow::Cow;
use std::collections::{btree_map, BTreeMap};
use std::fmt;

/// A value attached to an error under a field name.
///
/// Values are built with `From` for the primitive types and strings. Anything
/// else that can be formatted is stored by its textual representation, see
/// [`Value::display()`] and [`Value::debug()`].
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A boolean.
    Bool(bool),
    /// A signed integer.
    Int(i64),
    /// An unsigned integer.
    Uint(u64),
    /// A floating point number.
    Float(f64),
    /// A string.
    Str(String),
}

impl Value {
    /// Create a `Value` from the `Display` representation of `value`.
    pub fn display(value: impl fmt::Display) -> Self {
        Self::Str(value.to_string())
    }

    /// Create a `Value` from the `Debug` representation of `value`.
    pub fn debug(value: impl fmt::Debug) -> Self {
        Self::Str(format!("{:?}", value))
    }

    /// Returns the string if the value is a [`Value::Str`].
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(v) => fmt::Display::fmt(v, f),
            Self::Int(v) => fmt::Display::fmt(v, f),
            Self::Uint(v) => fmt::Display::fmt(v, f),
            Self::Float(v) => fmt::Display::fmt(v, f),
            Self::Str(v) => f.write_str(v),
        }
    }
}

macro_rules! impl_value_from {
    ($variant:ident($inner:ty): $($ty:ty),+) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Self::$variant(<$inner>::from(value))
                }
            }
        )+
    };
}

impl_value_from!(Bool(bool): bool);
impl_value_from!(Int(i64): i8, i16, i32, i64);
impl_value_from!(Uint(u64): u8, u16, u32, u64);
impl_value_from!(Float(f64): f32, f64);
impl_value_from!(Str(String): String, &str, Cow<'_, str>, char);

impl From<isize> for Value {
    fn from(value: isize) -> Self {
        i64::try_from(value).map_or_else(|_| Self::display(value), Self::Int)
    }
}

impl From<usize> for Value {
    fn from(value: usize) -> Self {
        u64::try_from(value).map_or_else(|_| Self::display(value), Self::Uint)
    }
}

///////////////////////////////////////////////////////////////////////////////
// Fields

/// Structured fields attached to an error, keyed by a unique name.
///
/// Iteration is in key order.
///
/// # Example
///
/// ```
/// use errwrap::{Fields, Value};
///
/// let fields = Fields::from([("user", Value::from("alice")), ("attempt", Value::from(3))]);
///
/// assert_eq!(fields.get("attempt"), Some(&Value::Int(3)));
/// assert_eq!(fields.keys().collect::<Vec<_>>(), ["attempt", "user"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Fields(BTreeMap<String, Value>);

impl Fields {
    /// Create an empty set of fields.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a field, returning the value it replaced if any.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(key.into(), value.into())
    }

    /// Returns the value of a field.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Returns `true` if the field is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Returns the number of fields.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if there are no fields.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the field names.
    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.0.keys().map(String::as_str)
    }

    /// Iterate over the fields.
    pub fn iter(&self) -> Iter<'_> {
        Iter(self.0.iter())
    }

    /// Merge `other` into `self`, overwriting fields already present.
    pub fn merge(&mut self, other: &Fields) {
        for (key, value) in other {
            let _ = self.0.insert(key.to_owned(), value.clone());
        }
    }
}

impl<K, V> FromIterator<(K, V)> for Fields
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
    {
        let mut fields = Self::new();
        fields.extend(iter);
        fields
    }
}

impl<K, V> Extend<(K, V)> for Fields
where
    K: Into<String>,
    V: Into<Value>,
{
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = (K, V)>,
    {
        for (key, value) in iter {
            let _ = self.insert(key, value);
        }
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for Fields
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from(fields: [(K, V); N]) -> Self {
        fields.into_iter().collect()
    }
}

impl<'a> IntoIterator for &'a Fields {
    type Item = (&'a str, &'a Value);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for Fields {
    type Item = (String, Value);
    type IntoIter = btree_map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Iterator over the fields of [`Fields`], in key order.
#[derive(Clone)]
pub struct Iter<'a>(btree_map::Iter<'a, String, Value>);

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a Value);

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|(key, value)| (key.as_str(), value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl ExactSizeIterator for Iter<'_> {}
