//! Input and output value shapes.
//!
//! [`RawValue`] is what arrives from an untrusted source; [`Value`] is what the
//! normalizer hands back. Both use the same closed set of variants so every
//! dispatch over them is an exhaustive `match`.

use std::fmt;

use serde::ser::{Serialize, Serializer};

/// Key of an entry in a keyed collection.
///
/// Collections can be list-like (positional [`Key::Index`] keys) or associative
/// ([`Key::Name`] keys), or a mix of both.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Key {
    /// Positional key
    Index(i64),
    /// Named key
    Name(String),
}

impl Key {
    /// Returns `true` if this key is addressed by `needle`.
    ///
    /// Index keys match their decimal rendering, so `"0"` finds `Key::Index(0)`.
    pub fn matches(&self, needle: &str) -> bool {
        match self {
            Key::Name(name) => name == needle,
            Key::Index(index) => index.to_string() == needle,
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Index(index) => write!(f, "{}", index),
            Key::Name(name) => f.write_str(name),
        }
    }
}

impl From<&str> for Key {
    fn from(name: &str) -> Self {
        Key::Name(name.to_string())
    }
}

impl From<String> for Key {
    fn from(name: String) -> Self {
        Key::Name(name)
    }
}

impl From<i64> for Key {
    fn from(index: i64) -> Self {
        Key::Index(index)
    }
}

/// A loosely-typed value as received from an external source.
#[derive(Debug, Clone, PartialEq)]
pub enum RawValue {
    /// Absent or explicit null
    Null,
    /// Native boolean
    Bool(bool),
    /// Native integer
    Int(i64),
    /// Native floating-point number
    Float(f64),
    /// Text, possibly spelling a number
    String(String),
    /// Ordered keyed collection
    Map(Vec<(Key, RawValue)>),
}

impl RawValue {
    /// Builds a keyed collection, preserving the iteration order of `entries`.
    ///
    /// ```
    /// use effective_type::{Key, RawValue};
    ///
    /// let form = RawValue::map([("name", RawValue::from("alice")), ("age", RawValue::from("42"))]);
    /// assert_eq!(form.get("age"), Some(&RawValue::from("42")));
    /// ```
    pub fn map<K, I>(entries: I) -> Self
    where
        K: Into<Key>,
        I: IntoIterator<Item = (K, RawValue)>,
    {
        RawValue::Map(entries.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    /// Builds a list-like collection keyed `0..n`.
    pub fn list<I>(items: I) -> Self
    where
        I: IntoIterator<Item = RawValue>,
    {
        RawValue::Map(
            items
                .into_iter()
                .enumerate()
                .map(|(index, item)| (Key::Index(index_key(index)), item))
                .collect(),
        )
    }

    /// Looks up `needle` in a keyed collection.
    ///
    /// Returns `None` for scalars and for missing keys. When a key occurs more
    /// than once the first occurrence wins.
    pub fn get(&self, needle: &str) -> Option<&RawValue> {
        match self {
            RawValue::Map(entries) => lookup(entries, needle),
            _ => None,
        }
    }

    /// Short name of the variant, used in log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            RawValue::Null => "null",
            RawValue::Bool(_) => "bool",
            RawValue::Int(_) => "int",
            RawValue::Float(_) => "float",
            RawValue::String(_) => "string",
            RawValue::Map(_) => "map",
        }
    }
}

impl From<bool> for RawValue {
    fn from(flag: bool) -> Self {
        RawValue::Bool(flag)
    }
}

impl From<i64> for RawValue {
    fn from(number: i64) -> Self {
        RawValue::Int(number)
    }
}

impl From<i32> for RawValue {
    fn from(number: i32) -> Self {
        RawValue::Int(i64::from(number))
    }
}

impl From<f64> for RawValue {
    fn from(number: f64) -> Self {
        RawValue::Float(number)
    }
}

impl From<&str> for RawValue {
    fn from(text: &str) -> Self {
        RawValue::String(text.to_string())
    }
}

impl From<String> for RawValue {
    fn from(text: String) -> Self {
        RawValue::String(text)
    }
}

impl<T: Into<RawValue>> From<Option<T>> for RawValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(RawValue::Null, Into::into)
    }
}

/// Converts decoded JSON into raw input.
///
/// Arrays become collections keyed `0..n`, objects keep their member order.
/// Integers that do not fit `i64` are carried as floats.
impl From<serde_json::Value> for RawValue {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => RawValue::Null,
            serde_json::Value::Bool(flag) => RawValue::Bool(flag),
            serde_json::Value::Number(number) => match number.as_i64() {
                Some(int) => RawValue::Int(int),
                None => number.as_f64().map_or(RawValue::Null, RawValue::Float),
            },
            serde_json::Value::String(text) => RawValue::String(text),
            serde_json::Value::Array(items) => RawValue::list(items.into_iter().map(RawValue::from)),
            serde_json::Value::Object(members) => {
                RawValue::map(members.into_iter().map(|(k, v)| (k, RawValue::from(v))))
            }
        }
    }
}

/// A value re-typed to its effective primitive type and sanitized.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Null input, missing key, or a truncated subtree
    Null,
    /// Boolean
    Bool(bool),
    /// Integer
    Int(i64),
    /// Floating-point number
    Float(f64),
    /// Sanitized string
    String(String),
    /// Collection with the same keys, in the same order, as the input
    Map(Vec<(Key, Value)>),
}

impl Value {
    /// Returns `true` for [`Value::Null`].
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns the boolean, if this is a [`Value::Bool`].
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(flag) => Some(*flag),
            _ => None,
        }
    }

    /// Returns the integer, if this is a [`Value::Int`].
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int(number) => Some(*number),
            _ => None,
        }
    }

    /// Returns the float, if this is a [`Value::Float`].
    ///
    /// Integers are not widened; the distinction is the point of normalization.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Float(number) => Some(*number),
            _ => None,
        }
    }

    /// Returns the text, if this is a [`Value::String`].
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(text) => Some(text),
            _ => None,
        }
    }

    /// Returns the entries, if this is a [`Value::Map`].
    pub fn entries(&self) -> Option<&[(Key, Value)]> {
        match self {
            Value::Map(entries) => Some(entries),
            _ => None,
        }
    }

    /// Looks up `needle` in a collection value.
    pub fn get(&self, needle: &str) -> Option<&Value> {
        match self {
            Value::Map(entries) => lookup(entries, needle),
            _ => None,
        }
    }

    /// Short name of the variant, used in log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::String(_) => "string",
            Value::Map(_) => "map",
        }
    }
}

/// Collections keyed exactly `0..n` serialize as JSON arrays, anything else
/// as an object with stringified keys. Non-finite floats become `null`.
impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(flag) => serializer.serialize_bool(*flag),
            Value::Int(number) => serializer.serialize_i64(*number),
            Value::Float(number) => serializer.serialize_f64(*number),
            Value::String(text) => serializer.serialize_str(text),
            Value::Map(entries) if is_list(entries) => {
                serializer.collect_seq(entries.iter().map(|(_, v)| v))
            }
            Value::Map(entries) => {
                serializer.collect_map(entries.iter().map(|(k, v)| (k.to_string(), v)))
            }
        }
    }
}

fn lookup<'a, V>(entries: &'a [(Key, V)], needle: &str) -> Option<&'a V> {
    entries
        .iter()
        .find(|(key, _)| key.matches(needle))
        .map(|(_, value)| value)
}

fn is_list<V>(entries: &[(Key, V)]) -> bool {
    entries
        .iter()
        .enumerate()
        .all(|(position, (key, _))| *key == Key::Index(index_key(position)))
}

fn index_key(position: usize) -> i64 {
    i64::try_from(position).unwrap_or(i64::MAX)
}
