//! Dynamic value model.
//!
//! Matchers never inspect arbitrary Rust types. Callers convert whatever they
//! observed into a [`Value`], and containers are classified through
//! [`Value::shape`] before any matcher looks inside them.

use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::hash::BuildHasher;

use crate::coerce;

const ERROR_RECORD: &str = "error";

/// An observed value.
///
/// # Example
///
/// ```
/// use matchforge_core::{Shape, Value};
///
/// let v = Value::from(vec!["a", "b"]);
/// assert_eq!(v.type_name(), "sequence");
/// assert_eq!(v.len(), Some(2));
/// assert!(matches!(v.shape(), Shape::Linear(items) if items.len() == 2));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
    Str(String),
    Bytes(Vec<u8>),
    /// A linear collection.
    Seq(Vec<Value>),
    /// An associative collection, as ordered key/value entries.
    Map(Vec<(Value, Value)>),
    /// A plain record. Never treated as a container.
    Record {
        name: String,
        fields: Vec<(String, Value)>,
    },
}

/// Container classification of a [`Value`].
#[derive(Debug, Clone, Copy)]
pub enum Shape<'a> {
    /// Array-like: elements in order.
    Linear(&'a [Value]),
    /// Map-like: key/value entries in a stable order.
    Associative(&'a [(Value, Value)]),
    /// Anything else.
    Scalar,
}

impl Value {
    /// Creates a byte string value.
    pub fn bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Value::Bytes(bytes.into())
    }

    /// Creates a sequence from any iterator of convertible items.
    pub fn seq<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Value>,
    {
        Value::Seq(items.into_iter().map(Into::into).collect())
    }

    /// Creates a map, keeping entries in the order given.
    pub fn map<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<Value>,
        V: Into<Value>,
    {
        Value::Map(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Creates a named record.
    ///
    /// ```
    /// use matchforge_core::Value;
    ///
    /// let point = Value::record("Point", [("x", 1), ("y", 2)]);
    /// assert_eq!(point.type_name(), "Point");
    /// assert_eq!(point.to_string(), "Point { x: 1, y: 2 }");
    /// ```
    pub fn record<I, N, V>(name: impl Into<String>, fields: I) -> Self
    where
        I: IntoIterator<Item = (N, V)>,
        N: Into<String>,
        V: Into<Value>,
    {
        Value::Record {
            name: name.into(),
            fields: fields
                .into_iter()
                .map(|(n, v)| (n.into(), v.into()))
                .collect(),
        }
    }

    /// Captures an error as a record of type `error` holding its `Display`
    /// text under `message`.
    ///
    /// ```
    /// use matchforge_core::Value;
    ///
    /// let err = "x".parse::<i32>().unwrap_err();
    /// let v = Value::error(&err);
    /// assert_eq!(v.type_name(), "error");
    /// assert_eq!(v.error_message(), Some("invalid digit found in string"));
    /// ```
    pub fn error<E: std::error::Error + ?Sized>(err: &E) -> Self {
        Value::record(ERROR_RECORD, [("message", err.to_string())])
    }

    /// The message of a value built by [`Value::error`].
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Value::Record { name, fields } if name == ERROR_RECORD => {
                fields.iter().find_map(|(field, value)| match value {
                    Value::Str(message) if field == "message" => Some(message.as_str()),
                    _ => None,
                })
            }
            _ => None,
        }
    }

    /// Short type name used in diagnostics.
    pub fn type_name(&self) -> &str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::UInt(_) => "uint",
            Value::Float(_) => "float",
            Value::Str(_) => "string",
            Value::Bytes(_) => "bytes",
            Value::Seq(_) => "sequence",
            Value::Map(_) => "map",
            Value::Record { name, .. } => name,
        }
    }

    /// Classifies this value as a container, if it is one.
    pub fn shape(&self) -> Shape<'_> {
        match self {
            Value::Seq(items) => Shape::Linear(items),
            Value::Map(entries) => Shape::Associative(entries),
            _ => Shape::Scalar,
        }
    }

    /// Length of strings (in bytes), byte strings, sequences and maps.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> Option<usize> {
        match self {
            Value::Str(s) => Some(s.len()),
            Value::Bytes(b) => Some(b.len()),
            Value::Seq(items) => Some(items.len()),
            Value::Map(entries) => Some(entries.len()),
            _ => None,
        }
    }

    /// Text content of strings and UTF-8 byte strings.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            Value::Bytes(b) => std::str::from_utf8(b).ok(),
            _ => None,
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, Value::Int(_) | Value::UInt(_) | Value::Float(_))
    }

    /// Looks up a map entry by structurally equal key.
    pub fn get(&self, key: &Value) -> Option<&Value> {
        match self {
            Value::Map(entries) => entries
                .iter()
                .find(|(k, _)| k.structurally_eq(key))
                .map(|(_, v)| v),
            _ => None,
        }
    }

    /// Deep structural equality.
    ///
    /// Numbers compare by numeric value across integer and float variants.
    /// Maps compare as key sets, independent of entry order.
    ///
    /// ```
    /// use matchforge_core::Value;
    ///
    /// assert!(Value::from(3u8).structurally_eq(&Value::from(3i64)));
    /// assert!(Value::map([("a", 1), ("b", 2)]).structurally_eq(&Value::map([("b", 2), ("a", 1)])));
    /// assert!(!Value::from("3").structurally_eq(&Value::from(3)));
    /// ```
    pub fn structurally_eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Bytes(a), Value::Bytes(b)) => a == b,
            (Value::Seq(a), Value::Seq(b)) => {
                a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.structurally_eq(y))
            }
            (Value::Map(a), Value::Map(b)) => {
                a.len() == b.len() && entries_within(a, other) && entries_within(b, self)
            }
            (
                Value::Record { name: n1, fields: f1 },
                Value::Record { name: n2, fields: f2 },
            ) => {
                n1 == n2
                    && f1.len() == f2.len()
                    && f1
                        .iter()
                        .zip(f2)
                        .all(|((a, x), (b, y))| a == b && x.structurally_eq(y))
            }
            (a, b) if a.is_numeric() && b.is_numeric() => {
                coerce::compare(a, b) == Some(Ordering::Equal)
            }
            _ => false,
        }
    }

    /// A total order over values, used to give maps built from hashed
    /// collections a stable entry order.
    pub fn total_cmp(&self, other: &Value) -> Ordering {
        fn rank(v: &Value) -> u8 {
            match v {
                Value::Null => 0,
                Value::Bool(_) => 1,
                Value::Int(_) | Value::UInt(_) | Value::Float(_) => 2,
                Value::Str(_) => 3,
                Value::Bytes(_) => 4,
                Value::Seq(_) => 5,
                Value::Map(_) => 6,
                Value::Record { .. } => 7,
            }
        }

        match (self, other) {
            (Value::Bool(a), Value::Bool(b)) => a.cmp(b),
            (Value::Str(a), Value::Str(b)) => a.cmp(b),
            (Value::Bytes(a), Value::Bytes(b)) => a.cmp(b),
            (Value::Seq(a), Value::Seq(b)) => cmp_slices(a, b, Value::total_cmp),
            (Value::Map(a), Value::Map(b)) => cmp_slices(a, b, |(k1, v1), (k2, v2)| {
                k1.total_cmp(k2).then_with(|| v1.total_cmp(v2))
            }),
            (
                Value::Record { name: n1, fields: f1 },
                Value::Record { name: n2, fields: f2 },
            ) => n1.cmp(n2).then_with(|| {
                cmp_slices(f1, f2, |(a, x), (b, y)| a.cmp(b).then_with(|| x.total_cmp(y)))
            }),
            (a, b) if a.is_numeric() && b.is_numeric() => numeric_total_cmp(a, b),
            (a, b) => rank(a).cmp(&rank(b)),
        }
    }
}

/// Every entry of `entries` has a structurally equal key in `map` whose
/// value is structurally equal.
fn entries_within(entries: &[(Value, Value)], map: &Value) -> bool {
    entries
        .iter()
        .all(|(k, v)| map.get(k).is_some_and(|w| v.structurally_eq(w)))
}

/// Integers compare exactly, anything involving a float through
/// `f64::total_cmp`. Equal magnitudes fall back to variant order so that
/// distinct values never compare `Equal`.
fn numeric_total_cmp(a: &Value, b: &Value) -> Ordering {
    fn exact(v: &Value) -> Option<i128> {
        match v {
            Value::Int(i) => Some(i128::from(*i)),
            Value::UInt(u) => Some(i128::from(*u)),
            _ => None,
        }
    }
    fn widened(v: &Value) -> f64 {
        match v {
            Value::Int(i) => *i as f64,
            Value::UInt(u) => *u as f64,
            Value::Float(f) => *f,
            _ => f64::NAN,
        }
    }
    fn variant(v: &Value) -> u8 {
        match v {
            Value::Int(_) => 0,
            Value::UInt(_) => 1,
            _ => 2,
        }
    }

    let by_value = match (exact(a), exact(b)) {
        (Some(x), Some(y)) => x.cmp(&y),
        _ => widened(a).total_cmp(&widened(b)),
    };
    by_value.then_with(|| variant(a).cmp(&variant(b)))
}

fn cmp_slices<T>(a: &[T], b: &[T], mut cmp: impl FnMut(&T, &T) -> Ordering) -> Ordering {
    for (x, y) in a.iter().zip(b) {
        match cmp(x, y) {
            Ordering::Equal => continue,
            other => return other,
        }
    }
    a.len().cmp(&b.len())
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(i) => write!(f, "{i}"),
            Value::UInt(u) => write!(f, "{u}"),
            Value::Float(x) => write!(f, "{x:?}"),
            Value::Str(s) => write!(f, "{s:?}"),
            Value::Bytes(b) => write!(f, "b{:?}", String::from_utf8_lossy(b)),
            Value::Seq(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
            Value::Map(entries) => {
                write!(f, "{{")?;
                for (i, (k, v)) in entries.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{k}: {v}")?;
                }
                write!(f, "}}")
            }
            Value::Record { name, fields } => {
                write!(f, "{name}")?;
                if fields.is_empty() {
                    return Ok(());
                }
                write!(f, " {{ ")?;
                for (i, (field, v)) in fields.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{field}: {v}")?;
                }
                write!(f, " }}")
            }
        }
    }
}

macro_rules! impl_from_int {
    ($variant:ident as $target:ty: $($t:ty),+) => {
        $(
            impl From<$t> for Value {
                fn from(v: $t) -> Self {
                    Value::$variant(v as $target)
                }
            }
        )+
    };
}

impl_from_int!(Int as i64: i8, i16, i32, i64, isize);
impl_from_int!(UInt as u64: u8, u16, u32, u64, usize);

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Value::Float(f64::from(v))
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<char> for Value {
    fn from(v: char) -> Self {
        Value::Str(v.to_string())
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Str(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Str(v)
    }
}

impl From<&Value> for Value {
    fn from(v: &Value) -> Self {
        v.clone()
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Null, Into::into)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(v: Vec<T>) -> Self {
        Value::seq(v)
    }
}

impl<T: Into<Value>, const N: usize> From<[T; N]> for Value {
    fn from(v: [T; N]) -> Self {
        Value::seq(v)
    }
}

impl<T: Clone + Into<Value>> From<&[T]> for Value {
    fn from(v: &[T]) -> Self {
        Value::seq(v.iter().cloned())
    }
}

impl<K: Into<Value>, V: Into<Value>> From<BTreeMap<K, V>> for Value {
    fn from(v: BTreeMap<K, V>) -> Self {
        Value::map(v)
    }
}

impl<K: Into<Value>, V: Into<Value>, S: BuildHasher> From<HashMap<K, V, S>> for Value {
    fn from(v: HashMap<K, V, S>) -> Self {
        let mut entries: Vec<(Value, Value)> =
            v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        entries.sort_by(|(a, _), (b, _)| a.total_cmp(b));
        Value::Map(entries)
    }
}

#[cfg(feature = "json")]
impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Self {
        use serde_json::Value as Json;

        match v {
            Json::Null => Value::Null,
            Json::Bool(b) => Value::Bool(b),
            Json::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::Int(i)
                } else if let Some(u) = n.as_u64() {
                    Value::UInt(u)
                } else {
                    Value::Float(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            Json::String(s) => Value::Str(s),
            Json::Array(items) => Value::seq(items),
            Json::Object(fields) => Value::map(fields),
        }
    }
}

#[cfg(test)]
mod tests;
