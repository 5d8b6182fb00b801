// Copyright 2025 the TableSorter Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Data provider for the TableSorter widget.
//!
//! The rendering layer talks to a [`DataProvider`] through four calls:
//! - [`DataProvider::can_query`]: is there anything left to page in under this filter?
//! - [`DataProvider::filter`]: install a column filter, re-enabling paging.
//! - [`DataProvider::query`]: filter, sort (by a column or a weighted stack) and page.
//! - [`DataProvider::generate_histogram`]: bucket a numeric column for column headers.
//!
//! [`LocalDataProvider`] answers these over an owned [`Dataset`]. Paging state is an explicit
//! per-filter state machine ([`QueryPhase`]); view state can be saved and restored as a JSON
//! [`Layout`]; observers register with [`LocalDataProvider::subscribe`].
//!
//! ```
//! use tablesorter_provider::{Dataset, DataProvider, LocalDataProvider, QueryOptions, Row, SortSpec};
//!
//! let rows = vec![
//!     Row::new().with("id", 1).with("score", 4.0),
//!     Row::new().with("id", 2).with("score", 9.0),
//! ];
//! let mut provider = LocalDataProvider::new(Dataset::from_rows(rows));
//! let page = provider
//!     .query(&QueryOptions::default().with_sort(SortSpec::column("score", false)))
//!     .unwrap();
//! assert_eq!(page.total, 2);
//! assert_eq!(page.results[0].f64("id"), Some(2.0));
//! ```

mod error;
mod events;
mod layout;
mod provider;
mod settings;
mod state;

pub use error::ProviderError;
pub use events::{ListenerId, ProviderEvent};
pub use layout::Layout;
pub use provider::{CanQueryOptions, DataProvider, LocalDataProvider, QueryOptions, QueryResult};
pub use settings::ProviderSettings;
pub use state::{QueryFilterState, QueryPhase};

pub use tablesorter_core::{ColumnDescriptor, ColumnType, Dataset, Domain, Row, Value};
pub use tablesorter_transforms::{
    Bin, FilterSpec, FilterValue, SortSpec, StackColumn, StackDescriptor, TransformError,
};
