// Copyright 2025 the TableSorter Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Row-set operators for the TableSorter data core.
//!
//! This crate provides:
//! - column filters ([`FilterSpec`]) and a filtering pass over a row set,
//! - a null-aware single-column sort,
//! - the weighted stack ranker ([`StackRanker`]) used for multi-column sorts, and
//! - histogram binning over a numeric column ([`Bin`]).
//!
//! Every operator works on a borrowed view of rows (`&[&Row]`) and returns positions into that
//! view, so callers never have to clone rows until they page out results. Sorts are stable:
//! rows with equal keys keep their input order.

#![no_std]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod error;
mod filter;
#[cfg(not(feature = "std"))]
mod float;
mod histogram;
mod sort;
mod stack;

pub use error::TransformError;
pub use filter::{FilterSpec, FilterValue, filter_rows};
pub use histogram::{Bin, MAX_BINS, histogram, sturges_bin_count};
pub use sort::{SortSpec, sort_rows};
pub use stack::{StackColumn, StackDescriptor, StackRanker};
