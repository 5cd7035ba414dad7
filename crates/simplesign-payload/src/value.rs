use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};
use std::collections::BTreeMap;

use crate::errors::PayloadError;
use crate::options::MAX_METADATA_DEPTH;
use crate::path::Path;

/// Free-form metadata carried in the `optional` section.
pub type Metadata = BTreeMap<String, Value>;

/// JSON number as carried in metadata.
///
/// Integers that fit in `i64` decode to [`Number::Int`]; every other number
/// decodes to [`Number::Float`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    /// Signed integer.
    Int(i64),
    /// IEEE-754 double; must be finite to be encodable.
    Float(f64),
}

/// Metadata value: a closed sum over the JSON data model.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// `null`.
    Null,
    /// `true` / `false`.
    Bool(bool),
    /// Any JSON number.
    Number(Number),
    /// UTF-8 string.
    String(String),
    /// Ordered list.
    Array(Vec<Value>),
    /// String-keyed map; keys are unique by construction.
    Object(BTreeMap<String, Value>),
}

impl Value {
    /// Returns the string content when this is a [`Value::String`].
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the number as `f64` when this is a [`Value::Number`].
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(Number::Int(i)) => Some(*i as f64),
            Value::Number(Number::Float(f)) => Some(*f),
            _ => None,
        }
    }

    /// Returns the integer when this is a [`Value::Number`] holding [`Number::Int`].
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Number(Number::Int(i)) => Some(*i),
            _ => None,
        }
    }

    /// Rejects values that would not decode back: non-finite floats and
    /// nesting beyond [`MAX_METADATA_DEPTH`].
    pub(crate) fn check_encodable(&self, path: &Path) -> Result<(), PayloadError> {
        self.check_encodable_at(path, 0)
    }

    fn check_encodable_at(&self, path: &Path, depth: usize) -> Result<(), PayloadError> {
        match self {
            Value::Number(Number::Float(f)) if !f.is_finite() => Err(PayloadError::Encoding(
                format!("non-finite number at {}", path),
            )),
            Value::Array(items) => {
                let depth = enter_container(depth, path).map_err(PayloadError::Encoding)?;
                for (idx, item) in items.iter().enumerate() {
                    item.check_encodable_at(&path.push_index(idx), depth)?;
                }
                Ok(())
            }
            Value::Object(map) => {
                let depth = enter_container(depth, path).map_err(PayloadError::Encoding)?;
                for (key, child) in map {
                    child.check_encodable_at(&path.push_field(key), depth)?;
                }
                Ok(())
            }
            _ => Ok(()),
        }
    }
}

/// Depth of a container found at `depth`, or a message naming `path` when it
/// would exceed [`MAX_METADATA_DEPTH`].
pub(crate) fn enter_container(depth: usize, path: &Path) -> Result<usize, String> {
    let depth = depth + 1;
    if depth > MAX_METADATA_DEPTH {
        return Err(format!(
            "metadata nested deeper than {} levels at {}",
            MAX_METADATA_DEPTH, path
        ));
    }
    Ok(depth)
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Number(Number::Int(i)) => serializer.serialize_i64(*i),
            Value::Number(Number::Float(f)) => serializer.serialize_f64(*f),
            Value::String(s) => serializer.serialize_str(s),
            Value::Array(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Value::Object(map) => {
                let mut out = serializer.serialize_map(Some(map.len()))?;
                for (key, child) in map {
                    out.serialize_entry(key, child)?;
                }
                out.end()
            }
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Number(Number::Int(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Number(Number::Float(value))
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::Array(items.into_iter().map(Into::into).collect())
    }
}

impl From<BTreeMap<String, Value>> for Value {
    fn from(map: BTreeMap<String, Value>) -> Self {
        Value::Object(map)
    }
}
