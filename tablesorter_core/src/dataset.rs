// Copyright 2025 the TableSorter Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Owned row set with column metadata.

extern crate alloc;

use alloc::vec::Vec;

use crate::column::ColumnDescriptor;
use crate::value::Row;

/// Monotonic version counter.
pub type Version = u64;

/// An owned row set plus its column descriptors.
///
/// Numeric domains on the descriptors always reflect the current rows: every mutation goes
/// through [`Dataset::replace`], which recomputes them and bumps the version.
#[derive(Debug, Clone)]
pub struct Dataset {
    columns: Vec<ColumnDescriptor>,
    rows: Vec<Row>,
    version: Version,
}

impl Dataset {
    /// Creates a dataset from explicit descriptors. Any domains passed in are recomputed.
    pub fn new(columns: Vec<ColumnDescriptor>, rows: Vec<Row>) -> Self {
        let mut out = Self {
            columns,
            rows,
            version: 1,
        };
        out.refresh_domains();
        out
    }

    /// Creates a dataset whose descriptors are inferred from `rows`.
    pub fn from_rows(rows: Vec<Row>) -> Self {
        let columns = ColumnDescriptor::infer(&rows);
        Self {
            columns,
            rows,
            version: 1,
        }
    }

    /// Creates a dataset with no columns and no rows.
    pub fn empty() -> Self {
        Self::new(Vec::new(), Vec::new())
    }

    /// Replaces columns and rows, recomputes domains and bumps the version.
    pub fn replace(&mut self, columns: Vec<ColumnDescriptor>, rows: Vec<Row>) {
        self.columns = columns;
        self.rows = rows;
        self.refresh_domains();
        self.bump();
    }

    /// Increment the version counter.
    pub fn bump(&mut self) {
        self.version = self.version.wrapping_add(1);
    }

    /// Returns the version counter.
    pub fn version(&self) -> Version {
        self.version
    }

    /// Returns the column descriptors.
    pub fn columns(&self) -> &[ColumnDescriptor] {
        &self.columns
    }

    /// Returns the descriptor for `name`, if present.
    pub fn column(&self, name: &str) -> Option<&ColumnDescriptor> {
        self.columns.iter().find(|c| c.column == name)
    }

    /// Returns the rows.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Returns the number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    fn refresh_domains(&mut self) {
        for col in &mut self.columns {
            col.refresh_domain(&self.rows);
        }
    }
}

impl Default for Dataset {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::*;
    use crate::column::Domain;

    #[test]
    fn new_recomputes_stale_domains() {
        let mut col = ColumnDescriptor::number("x");
        col.domain = Some(Domain::new(-100.0, 100.0));
        let ds = Dataset::new(
            vec![col, ColumnDescriptor::string("s")],
            vec![Row::new().with("x", 1.0), Row::new().with("x", 4.0)],
        );
        assert_eq!(ds.column("x").unwrap().domain, Some(Domain::new(1.0, 4.0)));
        assert_eq!(ds.column("s").unwrap().domain, None);
        assert_eq!(ds.version(), 1);
    }

    #[test]
    fn replace_bumps_version_and_domains() {
        let mut ds = Dataset::from_rows(vec![Row::new().with("x", 1.0)]);
        ds.replace(
            ds.columns().to_vec(),
            vec![Row::new().with("x", 5.0), Row::new().with("x", 7.0)],
        );
        assert_eq!(ds.version(), 2);
        assert_eq!(ds.row_count(), 2);
        assert_eq!(ds.column("x").unwrap().domain, Some(Domain::new(5.0, 7.0)));
    }

    #[test]
    fn empty_dataset() {
        let ds = Dataset::default();
        assert_eq!(ds.row_count(), 0);
        assert!(ds.columns().is_empty());
        assert!(ds.column("x").is_none());
    }
}
