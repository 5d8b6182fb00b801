// Copyright 2025 the TableSorter Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `tablesorter_core`: the row and column model behind the TableSorter data provider.
//!
//! This crate provides:
//! - dynamically typed cell values ([`Value`]) and schema-free rows ([`Row`])
//! - column descriptors with observed numeric ranges ([`ColumnDescriptor`], [`Domain`])
//! - an owned, versioned row set ([`Dataset`])
//!
//! It intentionally does NOT filter, sort or rank; see `tablesorter_transforms` for that.
//!
//! A row is a mapping from column name to [`Value`]. A column that is absent from a row reads as
//! [`Value::Null`], so "undefined" and "null" are the same thing here. Non-finite numbers are
//! also treated as missing by every numeric accessor.

#![no_std]

extern crate alloc;

mod column;
mod dataset;
mod value;

pub use column::{ColumnDescriptor, ColumnType, Domain};
pub use dataset::{Dataset, Version};
pub use value::{Row, Value};
