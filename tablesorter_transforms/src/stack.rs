// Copyright 2025 the TableSorter Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Weighted multi-column ("stacked") ranking.
//!
//! A stack combines several numeric columns into one sort key. Each member column is scaled
//! into `[0, 1]` over its domain, and the scaled values are summed with the member weights:
//!
//! ```text
//! score(row) = sum_i norm(row[col_i]) * weight_i
//! norm(v)    = 0                              if v is null
//!            = 0                              if min_i == max_i
//!            = (v - min_i) / (max_i - min_i)  otherwise
//! ```
//!
//! Domains are taken over the rows being ranked, not over the whole dataset, so the same stack
//! can rank differently under different filters.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tablesorter_core::{ColumnDescriptor, Domain, Row};

use crate::error::TransformError;

/// One member of a stack.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StackColumn {
    /// Member column name.
    pub column: String,
    /// Non-negative weight.
    pub weight: f64,
}

impl StackColumn {
    /// Creates a stack member.
    pub fn new(column: impl Into<String>, weight: f64) -> Self {
        Self {
            column: column.into(),
            weight,
        }
    }
}

/// A named group of weighted numeric columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StackDescriptor {
    /// Display name of the stack.
    pub name: String,
    /// Member columns, in display order.
    pub columns: Vec<StackColumn>,
}

impl StackDescriptor {
    /// Creates a stack from its members.
    pub fn new(name: impl Into<String>, columns: impl IntoIterator<Item = StackColumn>) -> Self {
        Self {
            name: name.into(),
            columns: columns.into_iter().collect(),
        }
    }
}

/// Computes composite scores for a validated [`StackDescriptor`].
#[derive(Debug, Clone, Copy)]
pub struct StackRanker<'a> {
    stack: &'a StackDescriptor,
}

impl<'a> StackRanker<'a> {
    /// Validates `stack` against the current column set.
    ///
    /// The stack must have at least one member, and every member must name an existing numeric
    /// column with a finite, non-negative weight.
    pub fn new(
        stack: &'a StackDescriptor,
        columns: &[ColumnDescriptor],
    ) -> Result<Self, TransformError> {
        if stack.columns.is_empty() {
            return Err(TransformError::EmptyStack(stack.name.clone()));
        }
        for member in &stack.columns {
            let col = columns
                .iter()
                .find(|c| c.column == member.column)
                .ok_or_else(|| TransformError::UnknownColumn(member.column.clone()))?;
            if !col.is_numeric() {
                return Err(TransformError::NonNumericColumn(member.column.clone()));
            }
            if !member.weight.is_finite() || member.weight < 0.0 {
                return Err(TransformError::InvalidWeight {
                    stack: stack.name.clone(),
                    column: member.column.clone(),
                    weight: member.weight,
                });
            }
        }
        Ok(Self { stack })
    }

    /// Returns the stack being ranked.
    pub fn stack(&self) -> &'a StackDescriptor {
        self.stack
    }

    /// Scales `v` into `[0, 1]` over `domain`.
    ///
    /// Missing values and degenerate (or absent) domains scale to `0`.
    pub fn normalize(v: Option<f64>, domain: Option<Domain>) -> f64 {
        match (v, domain) {
            (Some(v), Some(d)) if !d.is_degenerate() => {
                let span = d.span();
                if span.is_finite() {
                    (v - d.min) / span
                } else {
                    // `max - min` overflows; halving is exact for finite normals.
                    (v * 0.5 - d.min * 0.5) / (d.max * 0.5 - d.min * 0.5)
                }
            }
            _ => 0.0,
        }
    }

    /// Returns one composite score per row, aligned with `rows`.
    pub fn scores(&self, rows: &[&Row]) -> Vec<f64> {
        let members: SmallVec<[(&str, f64, Option<Domain>); 4]> = self
            .stack
            .columns
            .iter()
            .map(|m| {
                let domain = Domain::of(&m.column, rows.iter().copied());
                (m.column.as_str(), m.weight, domain)
            })
            .collect();

        rows.iter()
            .map(|row| {
                members
                    .iter()
                    .map(|&(col, weight, domain)| Self::normalize(row.f64(col), domain) * weight)
                    .sum()
            })
            .collect()
    }

    /// Returns positions into `rows` ordered by composite score.
    ///
    /// Ties keep their input order in both directions.
    pub fn order(&self, rows: &[&Row], asc: bool) -> Vec<usize> {
        let scores = self.scores(rows);
        let mut idx: Vec<usize> = (0..rows.len()).collect();
        idx.sort_by(|&a, &b| {
            let ord = scores[a].total_cmp(&scores[b]);
            if asc { ord } else { ord.reverse() }
        });
        idx
    }
}
