// Copyright 2025 the TableSorter Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sort specifications and the sort entry point.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use serde::{Deserialize, Serialize};
use tablesorter_core::{ColumnDescriptor, Row};

use crate::error::TransformError;
use crate::stack::{StackDescriptor, StackRanker};

/// How to order a row set.
///
/// Serializes untagged as `{"column": .., "asc": ..}` or `{"stack": {..}, "asc": ..}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SortSpec {
    /// Order by one column's raw value.
    Column {
        /// Sort column.
        column: String,
        /// Ascending when `true`.
        asc: bool,
    },
    /// Order by a stack's composite score.
    Stack {
        /// Stack to rank by.
        stack: StackDescriptor,
        /// Ascending when `true`.
        asc: bool,
    },
}

impl SortSpec {
    /// Creates a single-column sort.
    pub fn column(column: impl Into<String>, asc: bool) -> Self {
        Self::Column {
            column: column.into(),
            asc,
        }
    }

    /// Creates a stacked sort.
    pub fn stack(stack: StackDescriptor, asc: bool) -> Self {
        Self::Stack { stack, asc }
    }

    /// Returns `true` for ascending sorts.
    pub fn asc(&self) -> bool {
        match self {
            Self::Column { asc, .. } | Self::Stack { asc, .. } => *asc,
        }
    }
}

/// Returns positions into `rows` in the order described by `spec`.
///
/// Single-column sorts use [`Value::total_cmp`](tablesorter_core::Value::total_cmp), so nulls
/// come first when ascending and last when descending. The sort is stable in both directions.
pub fn sort_rows(
    rows: &[&Row],
    spec: &SortSpec,
    columns: &[ColumnDescriptor],
) -> Result<Vec<usize>, TransformError> {
    match spec {
        SortSpec::Column { column, asc } => {
            if !columns.iter().any(|c| c.column == *column) {
                return Err(TransformError::UnknownColumn(column.clone()));
            }
            let mut idx: Vec<usize> = (0..rows.len()).collect();
            idx.sort_by(|&a, &b| {
                let ord = rows[a].get(column).total_cmp(rows[b].get(column));
                if *asc { ord } else { ord.reverse() }
            });
            Ok(idx)
        }
        SortSpec::Stack { stack, asc } => Ok(StackRanker::new(stack, columns)?.order(rows, *asc)),
    }
}
