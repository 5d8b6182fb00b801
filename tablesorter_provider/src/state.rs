// Copyright 2025 the TableSorter Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-filter paging state.

use tablesorter_core::Version;
use tablesorter_transforms::FilterSpec;

/// Where paging stands under the active filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum QueryPhase {
    /// No query has run since the filter was installed.
    #[default]
    Fresh,
    /// At least one query ran and rows remain past the last page.
    Queried,
    /// A query returned the last remaining row. Sticky until the filter changes.
    Exhausted,
}

/// The active filter list plus its paging phase.
///
/// Every change to the filter list bumps `version` and resets the phase to
/// [`QueryPhase::Fresh`]. Query completions are recorded against the version they started
/// under; a completion for an older version is ignored.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryFilterState {
    filters: Vec<FilterSpec>,
    version: Version,
    phase: QueryPhase,
}

impl QueryFilterState {
    /// Creates a fresh state with no filters.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
            version: 1,
            phase: QueryPhase::Fresh,
        }
    }

    /// Returns the active filters, at most one per column.
    pub fn filters(&self) -> &[FilterSpec] {
        &self.filters
    }

    /// Returns the filter version.
    pub fn version(&self) -> Version {
        self.version
    }

    /// Returns the paging phase.
    pub fn phase(&self) -> QueryPhase {
        self.phase
    }

    /// Returns `false` only once the active filter has been exhausted.
    pub fn can_query(&self) -> bool {
        self.phase != QueryPhase::Exhausted
    }

    /// Replaces the whole filter list.
    pub fn replace(&mut self, filters: Vec<FilterSpec>) {
        self.filters = filters;
        self.reset();
    }

    /// Installs `spec`, replacing any filter on the same column.
    pub fn upsert(&mut self, spec: FilterSpec) {
        match self.filters.iter_mut().find(|f| f.column == spec.column) {
            Some(existing) => *existing = spec,
            None => self.filters.push(spec),
        }
        self.reset();
    }

    /// Removes the filter on `column`. Returns `false` (and leaves the phase alone) if there
    /// was none.
    pub fn remove(&mut self, column: &str) -> bool {
        let before = self.filters.len();
        self.filters.retain(|f| f.column != column);
        if self.filters.len() == before {
            return false;
        }
        self.reset();
        true
    }

    /// Records a finished query that started under `version`.
    ///
    /// Returns `false` if the filter changed in the meantime and the result was discarded.
    pub fn record_query(&mut self, version: Version, exhausted: bool) -> bool {
        if version != self.version {
            return false;
        }
        if exhausted {
            self.phase = QueryPhase::Exhausted;
        } else if self.phase == QueryPhase::Fresh {
            self.phase = QueryPhase::Queried;
        }
        true
    }

    fn reset(&mut self) {
        self.version = self.version.wrapping_add(1);
        self.phase = QueryPhase::Fresh;
    }
}

impl Default for QueryFilterState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phases_advance_and_exhaustion_sticks() {
        let mut s = QueryFilterState::new();
        assert_eq!(s.phase(), QueryPhase::Fresh);
        assert!(s.record_query(s.version(), false));
        assert_eq!(s.phase(), QueryPhase::Queried);
        assert!(s.record_query(s.version(), true));
        assert!(!s.can_query());
        assert!(s.record_query(s.version(), false));
        assert_eq!(s.phase(), QueryPhase::Exhausted);
    }

    #[test]
    fn upsert_replaces_same_column_and_resets() {
        let mut s = QueryFilterState::new();
        s.upsert(FilterSpec::text("a", "x"));
        s.record_query(s.version(), true);
        s.upsert(FilterSpec::text("a", "y"));
        assert_eq!(s.filters(), &[FilterSpec::text("a", "y")]);
        assert_eq!(s.phase(), QueryPhase::Fresh);
        s.upsert(FilterSpec::range("b", 0.0, 1.0));
        assert_eq!(s.filters().len(), 2);
    }

    #[test]
    fn stale_completions_are_ignored() {
        let mut s = QueryFilterState::new();
        let started = s.version();
        s.upsert(FilterSpec::text("a", "x"));
        assert!(!s.record_query(started, true));
        assert!(s.can_query());
    }

    #[test]
    fn removing_a_missing_filter_is_a_no_op() {
        let mut s = QueryFilterState::new();
        s.record_query(s.version(), true);
        assert!(!s.remove("nope"));
        assert_eq!(s.phase(), QueryPhase::Exhausted);
        s.replace(vec![FilterSpec::text("a", "x")]);
        assert!(s.remove("a"));
        assert!(s.filters().is_empty());
        assert!(s.can_query());
    }
}
