//! Dynamic label values
//!
//! Graph labels may be any type. `LabelValue` is the ready-made choice for
//! callers that want JSON-like labels without declaring their own type; it is
//! the default type parameter of [`LabeledGraph`](super::LabeledGraph).

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Label value supporting multiple data types
///
/// Supports:
/// - String
/// - Integer (i64)
/// - Float (f64)
/// - Boolean
/// - Array (Vec<LabelValue>)
/// - Map (HashMap<String, LabelValue>)
/// - Null
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LabelValue {
    Null,
    Boolean(bool),
    Integer(i64),
    Float(f64),
    String(String),
    Array(Vec<LabelValue>),
    Map(HashMap<String, LabelValue>),
}

impl LabelValue {
    pub fn is_null(&self) -> bool {
        matches!(self, LabelValue::Null)
    }

    pub fn as_string(&self) -> Option<&str> {
        match self {
            LabelValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            LabelValue::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Get a float, widening integers
    pub fn as_float(&self) -> Option<f64> {
        match self {
            LabelValue::Float(f) => Some(*f),
            LabelValue::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }

    pub fn as_boolean(&self) -> Option<bool> {
        match self {
            LabelValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&Vec<LabelValue>> {
        match self {
            LabelValue::Array(arr) => Some(arr),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&HashMap<String, LabelValue>> {
        match self {
            LabelValue::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Look up a key when this value is a map
    pub fn get(&self, key: &str) -> Option<&LabelValue> {
        self.as_map().and_then(|map| map.get(key))
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            LabelValue::Null => "Null",
            LabelValue::Boolean(_) => "Boolean",
            LabelValue::Integer(_) => "Integer",
            LabelValue::Float(_) => "Float",
            LabelValue::String(_) => "String",
            LabelValue::Array(_) => "Array",
            LabelValue::Map(_) => "Map",
        }
    }
}

impl fmt::Display for LabelValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LabelValue::Null => write!(f, "null"),
            LabelValue::Boolean(b) => write!(f, "{}", b),
            LabelValue::Integer(i) => write!(f, "{}", i),
            LabelValue::Float(fl) => write!(f, "{}", fl),
            LabelValue::String(s) => write!(f, "\"{}\"", s),
            LabelValue::Array(arr) => {
                write!(f, "[")?;
                for (i, val) in arr.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", val)?;
                }
                write!(f, "]")
            }
            LabelValue::Map(map) => {
                // HashMap order is unstable; print sorted keys
                let mut keys: Vec<&String> = map.keys().collect();
                keys.sort();
                write!(f, "{{")?;
                for (i, key) in keys.into_iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}: {}", key, map[key])?;
                }
                write!(f, "}}")
            }
        }
    }
}

impl From<String> for LabelValue {
    fn from(s: String) -> Self {
        LabelValue::String(s)
    }
}

impl From<&str> for LabelValue {
    fn from(s: &str) -> Self {
        LabelValue::String(s.to_string())
    }
}

impl From<i64> for LabelValue {
    fn from(i: i64) -> Self {
        LabelValue::Integer(i)
    }
}

impl From<i32> for LabelValue {
    fn from(i: i32) -> Self {
        LabelValue::Integer(i as i64)
    }
}

impl From<f64> for LabelValue {
    fn from(f: f64) -> Self {
        LabelValue::Float(f)
    }
}

impl From<bool> for LabelValue {
    fn from(b: bool) -> Self {
        LabelValue::Boolean(b)
    }
}

impl From<Vec<LabelValue>> for LabelValue {
    fn from(arr: Vec<LabelValue>) -> Self {
        LabelValue::Array(arr)
    }
}

impl From<HashMap<String, LabelValue>> for LabelValue {
    fn from(map: HashMap<String, LabelValue>) -> Self {
        LabelValue::Map(map)
    }
}

impl From<serde_json::Value> for LabelValue {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value;

        match value {
            Value::Null => LabelValue::Null,
            Value::Bool(b) => LabelValue::Boolean(b),
            Value::Number(n) => match n.as_i64() {
                Some(i) => LabelValue::Integer(i),
                None => LabelValue::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            Value::String(s) => LabelValue::String(s),
            Value::Array(arr) => LabelValue::Array(arr.into_iter().map(Into::into).collect()),
            Value::Object(obj) => {
                LabelValue::Map(obj.into_iter().map(|(k, v)| (k, v.into())).collect())
            }
        }
    }
}
