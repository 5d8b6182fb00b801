// Copyright 2025 the TableSorter Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Transform errors.

extern crate alloc;

use alloc::string::String;

/// Errors returned when a filter, sort or stack references data it cannot use.
///
/// These are caller contract violations; operators never fall back to unsorted output.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TransformError {
    /// The named column is not part of the current column set.
    #[error("unknown column `{0}`")]
    UnknownColumn(String),
    /// A stack was given with no member columns.
    #[error("stack `{0}` has no columns")]
    EmptyStack(String),
    /// A numeric operation (stack, range filter, histogram) named a text column.
    #[error("column `{0}` is not numeric")]
    NonNumericColumn(String),
    /// A stack member weight is negative or not finite.
    #[error("stack `{stack}` has invalid weight {weight} for column `{column}`")]
    InvalidWeight {
        /// Stack name.
        stack: String,
        /// Member column.
        column: String,
        /// Offending weight.
        weight: f64,
    },
    /// A range filter has non-finite bounds or `min > max`.
    #[error("invalid range [{min}, {max}] for column `{column}`")]
    InvalidFilter {
        /// Filtered column.
        column: String,
        /// Lower bound.
        min: f64,
        /// Upper bound.
        max: f64,
    },
}
