//! Scalar cell values for labeled tables.

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::hash::{Hash, Hasher};

/// A scalar value held by a table cell or used as a row label.
///
/// Values of different variants are always distinct: `Int(1)` and
/// `Float(1.0)` are two different values. Float NaN belongs to the missing
/// class, so `Value::from(f64::NAN)` normalizes to `Missing` and a directly
/// constructed `Float(NAN)` still reports `is_missing`. All missing-class
/// values compare equal to each other, which makes `Value` usable as a map
/// key and as a row label even when the label itself is missing.
#[derive(Debug, Clone)]
pub enum Value {
    /// Signed integer.
    Int(i64),
    /// Double-precision float.
    Float(f64),
    /// UTF-8 string.
    Str(String),
    /// Boolean. Profiled as categorical, never numeric.
    Bool(bool),
    /// Missing value marker.
    Missing,
}

/// Normalize float bits so `-0.0` compares and hashes like `0.0`.
fn float_bits(v: f64) -> u64 {
    if v == 0.0 {
        0.0f64.to_bits()
    } else {
        v.to_bits()
    }
}

impl Value {
    /// Check if this value belongs to the missing class.
    pub fn is_missing(&self) -> bool {
        match self {
            Value::Missing => true,
            Value::Float(v) => v.is_nan(),
            _ => false,
        }
    }

    /// Numeric view: integers and finite floats convert, everything else
    /// (booleans included) does not.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(v) => Some(*v as f64),
            Value::Float(v) if !v.is_nan() => Some(*v),
            _ => None,
        }
    }

    /// Try to get as integer.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// Try to get as string slice.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get as boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(v) => Some(*v),
            _ => None,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) if !a.is_nan() && !b.is_nan() => {
                float_bits(*a) == float_bits(*b)
            }
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            _ => self.is_missing() && other.is_missing(),
        }
    }
}

impl Eq for Value {}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Value::Float(v) if v.is_nan() => state.write_u8(4),
            Value::Missing => state.write_u8(4),
            Value::Int(v) => {
                state.write_u8(0);
                v.hash(state);
            }
            Value::Float(v) => {
                state.write_u8(1);
                float_bits(*v).hash(state);
            }
            Value::Str(v) => {
                state.write_u8(2);
                v.hash(state);
            }
            Value::Bool(v) => {
                state.write_u8(3);
                v.hash(state);
            }
        }
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(v as i64)
    }
}

impl From<usize> for Value {
    fn from(v: usize) -> Self {
        Value::Int(v as i64)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        if v.is_nan() {
            Value::Missing
        } else {
            Value::Float(v)
        }
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

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map(Into::into).unwrap_or(Value::Missing)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(v) => write!(f, "{}", v),
            // {:?} keeps the decimal point, so "1.0" stays a float in TSV.
            Value::Float(v) if v.is_nan() => write!(f, "NA"),
            Value::Float(v) => write!(f, "{:?}", v),
            Value::Str(v) => write!(f, "{}", v),
            Value::Bool(v) => write!(f, "{}", v),
            Value::Missing => write!(f, "NA"),
        }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Value::Int(v) => serializer.serialize_i64(*v),
            Value::Float(v) if v.is_nan() => serializer.serialize_unit(),
            Value::Float(v) => serializer.serialize_f64(*v),
            Value::Str(v) => serializer.serialize_str(v),
            Value::Bool(v) => serializer.serialize_bool(*v),
            Value::Missing => serializer.serialize_unit(),
        }
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct ValueVisitor;

        impl<'de> Visitor<'de> for ValueVisitor {
            type Value = Value;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a scalar table value or null")
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> std::result::Result<Value, E> {
                Ok(Value::Int(v))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> std::result::Result<Value, E> {
                Ok(i64::try_from(v)
                    .map(Value::Int)
                    .unwrap_or(Value::Float(v as f64)))
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> std::result::Result<Value, E> {
                Ok(Value::from(v))
            }

            fn visit_bool<E: de::Error>(self, v: bool) -> std::result::Result<Value, E> {
                Ok(Value::Bool(v))
            }

            fn visit_str<E: de::Error>(self, v: &str) -> std::result::Result<Value, E> {
                Ok(Value::Str(v.to_string()))
            }

            fn visit_string<E: de::Error>(self, v: String) -> std::result::Result<Value, E> {
                Ok(Value::Str(v))
            }

            fn visit_unit<E: de::Error>(self) -> std::result::Result<Value, E> {
                Ok(Value::Missing)
            }

            fn visit_none<E: de::Error>(self) -> std::result::Result<Value, E> {
                Ok(Value::Missing)
            }

            fn visit_some<D2: Deserializer<'de>>(
                self,
                deserializer: D2,
            ) -> std::result::Result<Value, D2::Error> {
                Deserialize::deserialize(deserializer)
            }
        }

        deserializer.deserialize_any(ValueVisitor)
    }
}

/// Infer the pandas-style dtype name for a column of values.
///
/// - `"int64"`: all integers, no missing entries
/// - `"bool"`: all booleans, no missing entries
/// - `"float64"`: integers and floats only, with at least one float or one
///   missing entry and at least one non-missing entry
/// - `"object"`: everything else (strings, mixed variants, booleans with
///   missing entries, all-missing or empty columns)
pub fn infer_dtype(values: &[Value]) -> &'static str {
    let mut any_missing = false;
    let mut n_valid = 0usize;
    let mut n_int = 0usize;
    let mut n_float = 0usize;
    let mut n_bool = 0usize;

    for v in values {
        if v.is_missing() {
            any_missing = true;
            continue;
        }
        n_valid += 1;
        match v {
            Value::Int(_) => n_int += 1,
            Value::Float(_) => n_float += 1,
            Value::Bool(_) => n_bool += 1,
            _ => {}
        }
    }

    if n_valid == 0 {
        return "object";
    }
    if n_bool == n_valid {
        return if any_missing { "object" } else { "bool" };
    }
    if n_int + n_float == n_valid {
        if n_float == 0 && !any_missing {
            return "int64";
        }
        return "float64";
    }
    "object"
}
