// Copyright 2025 the TableSorter Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cell values and rows.

extern crate alloc;

use alloc::borrow::ToOwned;
use alloc::string::String;
use core::cmp::Ordering;
use core::fmt;

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

/// A single cell value.
///
/// Serializes as a bare JSON `null`, number or string.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Missing value.
    #[default]
    Null,
    /// Numeric value.
    Number(f64),
    /// Text value.
    Text(String),
}

static NULL: Value = Value::Null;

impl Value {
    /// Returns `true` for [`Value::Null`] and for non-finite numbers.
    pub fn is_null(&self) -> bool {
        match self {
            Self::Null => true,
            Self::Number(v) => !v.is_finite(),
            Self::Text(_) => false,
        }
    }

    /// Returns the numeric value if this is a finite number.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(v) if v.is_finite() => Some(*v),
            _ => None,
        }
    }

    /// Returns the text if this is a text value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Total order used by single-column sorts.
    ///
    /// Nulls (including non-finite numbers) sort below numbers, and numbers sort below text.
    /// Text compares by code point.
    pub fn total_cmp(&self, other: &Self) -> Ordering {
        fn rank(v: &Value) -> u8 {
            if v.is_null() {
                0
            } else if matches!(v, Value::Number(_)) {
                1
            } else {
                2
            }
        }
        match (self.as_f64(), other.as_f64()) {
            (Some(a), Some(b)) => a.total_cmp(&b),
            _ => match (self, other) {
                (Self::Text(a), Self::Text(b)) => a.cmp(b),
                _ => rank(self).cmp(&rank(other)),
            },
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => Ok(()),
            Self::Number(v) => write!(f, "{v}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl<T: Into<Self>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

/// A schema-free row: column name to [`Value`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Row {
    cells: HashMap<String, Value>,
}

impl Row {
    /// Creates an empty row.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter.
    pub fn with(mut self, column: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(column, value);
        self
    }

    /// Sets a cell, replacing any previous value.
    pub fn set(&mut self, column: impl Into<String>, value: impl Into<Value>) {
        self.cells.insert(column.into(), value.into());
    }

    /// Returns the value for `column`, or [`Value::Null`] if the row has no such cell.
    pub fn get(&self, column: &str) -> &Value {
        self.cells.get(column).unwrap_or(&NULL)
    }

    /// Returns the finite numeric value for `column`, if any.
    pub fn f64(&self, column: &str) -> Option<f64> {
        self.get(column).as_f64()
    }

    /// Iterates over the cells present in this row, in unspecified order.
    pub fn cells(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.cells.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Returns the number of cells present in this row.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns `true` if the row has no cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Row {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            cells: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;
    use alloc::vec::Vec;

    use super::*;

    #[test]
    fn missing_cells_read_as_null() {
        let row = Row::new().with("a", 1.0);
        assert_eq!(row.get("a"), &Value::Number(1.0));
        assert_eq!(row.get("b"), &Value::Null);
        assert_eq!(row.f64("b"), None);
    }

    #[test]
    fn non_finite_numbers_are_null() {
        assert!(Value::Number(f64::NAN).is_null());
        assert!(Value::Number(f64::INFINITY).is_null());
        assert_eq!(Value::Number(f64::NAN).as_f64(), None);
        assert!(!Value::Number(-0.5).is_null());
    }

    #[test]
    fn total_cmp_orders_null_number_text() {
        let mut values = vec![
            Value::from("b"),
            Value::from(3),
            Value::Null,
            Value::from(-1.5),
            Value::Number(f64::NAN),
            Value::from("a"),
        ];
        values.sort_by(Value::total_cmp);
        let shown: Vec<_> = values.iter().map(std::string::ToString::to_string).collect();
        assert_eq!(shown, vec!["", "NaN", "-1.5", "3", "a", "b"]);
    }

    #[test]
    fn option_converts_to_null() {
        assert_eq!(Value::from(None::<f64>), Value::Null);
        assert_eq!(Value::from(Some(2)), Value::Number(2.0));
    }

    #[test]
    fn values_serialize_untagged() {
        let row = Row::new().with("n", 1.5).with("s", "x").with("z", Value::Null);
        let json = serde_json::to_value(&row).unwrap();
        assert_eq!(json["n"], serde_json::json!(1.5));
        assert_eq!(json["s"], serde_json::json!("x"));
        assert!(json["z"].is_null());
        let back: Row = serde_json::from_value(json).unwrap();
        assert_eq!(back, row);
    }
}
