// Copyright 2025 the TableSorter Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The data provider contract and its in-memory implementation.

use tablesorter_core::{ColumnDescriptor, Dataset, Row};
use tablesorter_transforms::{
    Bin, FilterSpec, SortSpec, StackRanker, TransformError, filter_rows, histogram, sort_rows,
};
use tracing::{debug, trace, warn};

use crate::error::ProviderError;
use crate::events::{ListenerId, Listeners, ProviderEvent};
use crate::layout::Layout;
use crate::settings::ProviderSettings;
use crate::state::{QueryFilterState, QueryPhase};

/// Options for [`DataProvider::can_query`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CanQueryOptions {
    /// The filter list the caller is about to query with, if it knows it.
    pub query: Option<Vec<FilterSpec>>,
}

/// Options for [`DataProvider::query`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryOptions {
    /// First row of the page. Defaults to `0`.
    pub offset: Option<usize>,
    /// Page size. Defaults to "everything from `offset`".
    pub count: Option<usize>,
    /// Sort list. Only the first entry is applied; an empty list keeps input order.
    pub sort: Vec<SortSpec>,
}

impl QueryOptions {
    /// Requests `count` rows starting at `offset`.
    pub fn page(offset: usize, count: usize) -> Self {
        Self {
            offset: Some(offset),
            count: Some(count),
            sort: Vec::new(),
        }
    }

    /// Appends a sort entry.
    pub fn with_sort(mut self, sort: SortSpec) -> Self {
        self.sort.push(sort);
        self
    }
}

/// One page of query results.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryResult {
    /// Number of rows passing the active filter, across all pages.
    pub total: usize,
    /// The requested page, in sort order.
    pub results: Vec<Row>,
}

/// The data-access contract used by the rendering layer.
pub trait DataProvider {
    /// Returns `true` if a query under `options.query` may still yield rows not yet returned.
    ///
    /// This is a pure read: calling it repeatedly without an intervening
    /// [`query`](Self::query) or [`filter`](Self::filter) gives the same answer.
    fn can_query(&self, options: &CanQueryOptions) -> bool;

    /// Filters, sorts and pages the dataset.
    fn query(&mut self, options: &QueryOptions) -> Result<QueryResult, ProviderError>;

    /// Installs a column filter and re-enables paging.
    fn filter(&mut self, spec: FilterSpec) -> Result<(), ProviderError>;

    /// Buckets a numeric column over the currently filtered rows.
    fn generate_histogram(&self, column: &str) -> Result<Vec<Bin>, ProviderError>;
}

/// A [`DataProvider`] over an owned, in-memory [`Dataset`].
#[derive(Debug)]
pub struct LocalDataProvider {
    dataset: Dataset,
    settings: ProviderSettings,
    state: QueryFilterState,
    sort: Option<SortSpec>,
    listeners: Listeners,
}

impl LocalDataProvider {
    /// Creates a provider with default settings.
    pub fn new(dataset: Dataset) -> Self {
        Self::with_settings(dataset, ProviderSettings::default())
    }

    /// Creates a provider with explicit settings.
    pub fn with_settings(dataset: Dataset, settings: ProviderSettings) -> Self {
        Self {
            dataset,
            settings,
            state: QueryFilterState::new(),
            sort: None,
            listeners: Listeners::default(),
        }
    }

    /// Returns the column descriptors, with domains over the full dataset.
    pub fn columns(&self) -> &[ColumnDescriptor] {
        self.dataset.columns()
    }

    /// Returns the dataset.
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Returns the settings.
    pub fn settings(&self) -> &ProviderSettings {
        &self.settings
    }

    /// Returns the active filters.
    pub fn filters(&self) -> &[FilterSpec] {
        self.state.filters()
    }

    /// Returns the paging phase under the active filter.
    pub fn phase(&self) -> QueryPhase {
        self.state.phase()
    }

    /// Returns the first sort entry of the last successful query.
    pub fn sort(&self) -> Option<&SortSpec> {
        self.sort.as_ref()
    }

    /// Removes the filter on `column`, if any.
    pub fn clear_filter(&mut self, column: &str) -> bool {
        let removed = self.state.remove(column);
        if removed {
            debug!(column, "filter cleared");
            self.filter_changed();
        }
        removed
    }

    /// Removes every filter.
    pub fn clear_filters(&mut self) {
        self.state.replace(Vec::new());
        debug!("filters cleared");
        self.filter_changed();
    }

    /// Replaces the dataset.
    ///
    /// Filters that no longer fit the new column set are dropped; the rest stay active. Paging
    /// restarts either way.
    pub fn set_data(&mut self, dataset: Dataset) {
        let kept: Vec<FilterSpec> = self
            .state
            .filters()
            .iter()
            .filter(|f| match f.validate(dataset.columns()) {
                Ok(()) => true,
                Err(err) => {
                    warn!(column = %f.column, %err, "dropping filter after data change");
                    false
                }
            })
            .cloned()
            .collect();
        let dropped = kept.len() != self.state.filters().len();
        self.dataset = dataset;
        self.state.replace(kept);
        debug!(
            rows = self.dataset.row_count(),
            version = self.dataset.version(),
            "dataset replaced"
        );
        self.listeners.emit(&ProviderEvent::DataChanged {
            rows: self.dataset.row_count(),
            columns: self.dataset.columns().len(),
        });
        if dropped {
            self.filter_changed();
        }
    }

    /// Snapshots the current view as a [`Layout`].
    pub fn layout(&self) -> Layout {
        Layout {
            columns: self.dataset.columns().to_vec(),
            sort: self.sort.clone(),
            filters: self.state.filters().to_vec(),
        }
    }

    /// Restores the filters and sort of a saved [`Layout`].
    ///
    /// Everything is validated before anything is applied, so on error the provider is
    /// unchanged.
    pub fn apply_layout(&mut self, layout: &Layout) -> Result<(), ProviderError> {
        let columns = self.dataset.columns();
        for f in &layout.filters {
            f.validate(columns)?;
        }
        match &layout.sort {
            Some(SortSpec::Column { column, .. }) => {
                if self.dataset.column(column).is_none() {
                    return Err(TransformError::UnknownColumn(column.clone()).into());
                }
            }
            Some(SortSpec::Stack { stack, .. }) => {
                StackRanker::new(stack, columns)?;
            }
            None => {}
        }
        let mut filters: Vec<FilterSpec> = Vec::with_capacity(layout.filters.len());
        for f in &layout.filters {
            match filters.iter_mut().find(|g| g.column == f.column) {
                Some(existing) => *existing = f.clone(),
                None => filters.push(f.clone()),
            }
        }
        self.state.replace(filters);
        self.sort = layout.sort.clone();
        debug!(filters = self.state.filters().len(), "layout applied");
        self.filter_changed();
        Ok(())
    }

    /// Registers a listener for [`ProviderEvent`]s.
    pub fn subscribe(&mut self, listener: impl FnMut(&ProviderEvent) + 'static) -> ListenerId {
        self.listeners.subscribe(Box::new(listener))
    }

    /// Removes a listener. Returns `false` if it was not registered.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.listeners.unsubscribe(id)
    }

    fn filter_changed(&mut self) {
        self.listeners.emit(&ProviderEvent::FilterChanged {
            filters: self.state.filters().to_vec(),
        });
    }
}

impl DataProvider for LocalDataProvider {
    fn can_query(&self, options: &CanQueryOptions) -> bool {
        if let Some(query) = &options.query
            && query.as_slice() != self.state.filters()
        {
            return true;
        }
        self.state.can_query()
    }

    fn query(&mut self, options: &QueryOptions) -> Result<QueryResult, ProviderError> {
        let version = self.state.version();
        let rows = filter_rows(
            self.dataset.rows(),
            self.state.filters(),
            self.settings.case_sensitive_filters,
        );
        let total = rows.len();

        let sort = options.sort.first();
        let order = match sort {
            Some(spec) => {
                trace!(?spec, rows = total, "sorting");
                sort_rows(&rows, spec, self.dataset.columns())?
            }
            None => (0..total).collect(),
        };

        let offset = options.offset.unwrap_or(0);
        let results: Vec<Row> = order
            .iter()
            .skip(offset)
            .take(options.count.unwrap_or(usize::MAX))
            .map(|&i| rows[i].clone())
            .collect();
        let returned = results.len();
        let exhausted = offset.saturating_add(returned) >= total;

        if !self.state.record_query(version, exhausted) {
            warn!(version, "filter changed during query; paging state not updated");
        }
        self.sort = sort.cloned();
        debug!(offset, returned, total, exhausted, "query served");
        self.listeners.emit(&ProviderEvent::Queried {
            total,
            returned,
            exhausted,
        });
        Ok(QueryResult { total, results })
    }

    fn filter(&mut self, spec: FilterSpec) -> Result<(), ProviderError> {
        spec.validate(self.dataset.columns())?;
        debug!(column = %spec.column, value = ?spec.value, "filter installed");
        self.state.upsert(spec);
        self.filter_changed();
        Ok(())
    }

    fn generate_histogram(&self, column: &str) -> Result<Vec<Bin>, ProviderError> {
        let col = self
            .dataset
            .column(column)
            .ok_or_else(|| TransformError::UnknownColumn(column.to_owned()))?;
        if !col.is_numeric() {
            return Err(TransformError::NonNumericColumn(column.to_owned()).into());
        }
        let rows = filter_rows(
            self.dataset.rows(),
            self.state.filters(),
            self.settings.case_sensitive_filters,
        );
        let bins = histogram(
            rows.iter().filter_map(|r| r.f64(column)),
            self.settings.histogram_bins,
        );
        trace!(column, bins = bins.len(), "histogram generated");
        Ok(bins)
    }
}
