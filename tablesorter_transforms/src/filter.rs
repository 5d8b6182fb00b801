// Copyright 2025 the TableSorter Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Column filters.

extern crate alloc;

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use serde::{Deserialize, Serialize};
use tablesorter_core::{ColumnDescriptor, Row};

use crate::error::TransformError;

/// The condition applied by a [`FilterSpec`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FilterValue {
    /// Keep rows whose value, rendered as text, contains this needle.
    ///
    /// Nulls render as the empty string, so they only match an empty needle.
    Text(String),
    /// Keep rows whose numeric value lies in `[min, max]` (inclusive).
    ///
    /// Nulls and text never match.
    Range {
        /// Lower bound.
        min: f64,
        /// Upper bound.
        max: f64,
    },
}

/// A filter on one column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterSpec {
    /// Filtered column.
    pub column: String,
    /// Condition to apply.
    pub value: FilterValue,
}

impl FilterSpec {
    /// Creates a substring filter.
    pub fn text(column: impl Into<String>, needle: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            value: FilterValue::Text(needle.into()),
        }
    }

    /// Creates an inclusive numeric range filter.
    pub fn range(column: impl Into<String>, min: f64, max: f64) -> Self {
        Self {
            column: column.into(),
            value: FilterValue::Range { min, max },
        }
    }

    /// Checks this filter against the current column set.
    pub fn validate(&self, columns: &[ColumnDescriptor]) -> Result<(), TransformError> {
        let col = columns
            .iter()
            .find(|c| c.column == self.column)
            .ok_or_else(|| TransformError::UnknownColumn(self.column.clone()))?;
        if let FilterValue::Range { min, max } = self.value {
            if !col.is_numeric() {
                return Err(TransformError::NonNumericColumn(self.column.clone()));
            }
            if !min.is_finite() || !max.is_finite() || min > max {
                return Err(TransformError::InvalidFilter {
                    column: self.column.clone(),
                    min,
                    max,
                });
            }
        }
        Ok(())
    }

    /// Returns `true` if `row` passes this filter.
    pub fn matches(&self, row: &Row, case_sensitive: bool) -> bool {
        let value = row.get(&self.column);
        match &self.value {
            FilterValue::Text(needle) => {
                if needle.is_empty() {
                    return true;
                }
                if value.is_null() {
                    return false;
                }
                let hay = value.to_string();
                if case_sensitive {
                    hay.contains(needle.as_str())
                } else {
                    hay.to_lowercase().contains(&needle.to_lowercase())
                }
            }
            FilterValue::Range { min, max } => {
                value.as_f64().is_some_and(|v| v >= *min && v <= *max)
            }
        }
    }
}

/// Returns the rows that pass every filter, in input order.
pub fn filter_rows<'a>(
    rows: &'a [Row],
    filters: &[FilterSpec],
    case_sensitive: bool,
) -> Vec<&'a Row> {
    rows.iter()
        .filter(|row| filters.iter().all(|f| f.matches(row, case_sensitive)))
        .collect()
}
