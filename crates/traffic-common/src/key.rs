//! Labels for matrix axes, groups, and categorical columns.

use std::fmt;

use polars::prelude::{AnyValue, Column, NamedFrom, Series};
use serde::{Deserialize, Serialize};

use crate::values::{any_to_string, format_numeric};

/// An entity identifier or categorical label read from a table cell.
///
/// Integral cells (including floats with no fractional part) become
/// [`Key::Int`] so that `1001400` sorts numerically; everything else becomes
/// [`Key::Text`]. Integers order before text.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Key {
    Int(i64),
    Text(String),
}

impl Key {
    /// Build a key from a cell value, returning `None` for nulls.
    pub fn from_any(value: AnyValue<'_>) -> Option<Self> {
        let key = match value {
            AnyValue::Null => return None,
            AnyValue::Int8(v) => Self::Int(i64::from(v)),
            AnyValue::Int16(v) => Self::Int(i64::from(v)),
            AnyValue::Int32(v) => Self::Int(i64::from(v)),
            AnyValue::Int64(v) => Self::Int(v),
            AnyValue::UInt8(v) => Self::Int(i64::from(v)),
            AnyValue::UInt16(v) => Self::Int(i64::from(v)),
            AnyValue::UInt32(v) => Self::Int(i64::from(v)),
            AnyValue::UInt64(v) => match i64::try_from(v) {
                Ok(v) => Self::Int(v),
                Err(_) => Self::Text(v.to_string()),
            },
            AnyValue::Float32(v) => Self::from_float(f64::from(v)),
            AnyValue::Float64(v) => Self::from_float(v),
            other => Self::Text(any_to_string(other)),
        };
        Some(key)
    }

    fn from_float(v: f64) -> Self {
        if v.is_finite() && v.fract() == 0.0 && v.abs() < 9.0e15 {
            Self::Int(v as i64)
        } else {
            Self::Text(format_numeric(v))
        }
    }

    /// Returns the integer identifier, if this key is integral.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(v) => Some(*v),
            Self::Text(_) => None,
        }
    }

    /// Build a column from keys.
    ///
    /// All-integer keys produce an `Int64` column; any text key turns the
    /// whole column into `String`.
    pub fn column(name: &str, keys: &[Key]) -> Column {
        let ints: Option<Vec<i64>> = keys.iter().map(Key::as_int).collect();
        match ints {
            Some(ints) => Series::new(name.into(), ints).into(),
            None => {
                let text: Vec<String> = keys.iter().map(ToString::to_string).collect();
                Series::new(name.into(), text).into()
            }
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{v}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for Key {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for Key {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<&str> for Key {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Key {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}
