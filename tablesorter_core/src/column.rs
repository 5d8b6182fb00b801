// Copyright 2025 the TableSorter Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Column descriptors and numeric domains.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use serde::{Deserialize, Serialize};

use crate::value::{Row, Value};

/// The type of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    /// Numeric column; participates in range filters, stacks and histograms.
    Number,
    /// Text column.
    String,
}

/// Observed `[min, max]` range of a numeric column.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(into = "[f64; 2]", from = "[f64; 2]")]
pub struct Domain {
    /// Smallest finite value.
    pub min: f64,
    /// Largest finite value.
    pub max: f64,
}

impl Domain {
    /// Creates a domain from explicit bounds.
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Computes the domain of `column` over `rows`.
    ///
    /// Nulls and non-finite values are skipped. Returns `None` when no finite value exists.
    pub fn of<'a>(column: &str, rows: impl IntoIterator<Item = &'a Row>) -> Option<Self> {
        Self::from_values(rows.into_iter().filter_map(|r| r.f64(column)))
    }

    /// Computes the domain of a sequence of values, skipping non-finite ones.
    pub fn from_values(values: impl IntoIterator<Item = f64>) -> Option<Self> {
        let mut out: Option<Self> = None;
        for v in values.into_iter().filter(|v| v.is_finite()) {
            out = Some(match out {
                None => Self::new(v, v),
                Some(d) => Self::new(d.min.min(v), d.max.max(v)),
            });
        }
        out
    }

    /// Returns `true` when `min == max`.
    pub fn is_degenerate(&self) -> bool {
        self.min == self.max
    }

    /// Returns `max - min`.
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Returns `true` if `v` lies in `[min, max]`.
    pub fn contains(&self, v: f64) -> bool {
        v >= self.min && v <= self.max
    }
}

impl From<Domain> for [f64; 2] {
    fn from(d: Domain) -> Self {
        [d.min, d.max]
    }
}

impl From<[f64; 2]> for Domain {
    fn from([min, max]: [f64; 2]) -> Self {
        Self::new(min, max)
    }
}

/// Describes one column of a dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnDescriptor {
    /// Column name, as used as the key in each [`Row`].
    pub column: String,
    /// Column type.
    #[serde(rename = "type")]
    pub ty: ColumnType,
    /// Observed range; only present for numeric columns with at least one finite value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<Domain>,
}

impl ColumnDescriptor {
    /// Creates a numeric column without a domain.
    pub fn number(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            ty: ColumnType::Number,
            domain: None,
        }
    }

    /// Creates a text column.
    pub fn string(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            ty: ColumnType::String,
            domain: None,
        }
    }

    /// Returns `true` for numeric columns.
    pub fn is_numeric(&self) -> bool {
        self.ty == ColumnType::Number
    }

    /// Recomputes `domain` from `rows`. Text columns never carry a domain.
    pub fn refresh_domain(&mut self, rows: &[Row]) {
        self.domain = if self.is_numeric() {
            Domain::of(&self.column, rows)
        } else {
            None
        };
    }

    /// Infers descriptors from the cells present in `rows`.
    ///
    /// Columns are returned in first-seen order (cells within a row are visited in sorted name
    /// order so the result is deterministic). A column is numeric unless it holds any text.
    /// Domains are filled in.
    pub fn infer(rows: &[Row]) -> Vec<Self> {
        let mut out: Vec<Self> = Vec::new();
        for row in rows {
            let mut cells: Vec<_> = row.cells().collect();
            cells.sort_unstable_by(|a, b| a.0.cmp(b.0));
            for (name, value) in cells {
                let idx = match out.iter().position(|c| c.column == name) {
                    Some(idx) => idx,
                    None => {
                        out.push(Self::number(name));
                        out.len() - 1
                    }
                };
                if matches!(value, Value::Text(_)) {
                    out[idx].ty = ColumnType::String;
                }
            }
        }
        for col in &mut out {
            col.refresh_domain(rows);
        }
        out
    }
}
