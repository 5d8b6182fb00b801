// Copyright 2025 the TableSorter Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Change notifications.

use core::fmt;

use tablesorter_transforms::FilterSpec;

/// A state change reported to subscribers.
#[derive(Debug, Clone, PartialEq)]
pub enum ProviderEvent {
    /// The dataset was replaced.
    DataChanged {
        /// New row count.
        rows: usize,
        /// New column count.
        columns: usize,
    },
    /// The active filter list changed.
    FilterChanged {
        /// Filters now in effect.
        filters: Vec<FilterSpec>,
    },
    /// A query completed.
    Queried {
        /// Filtered row count.
        total: usize,
        /// Rows in the returned page.
        returned: usize,
        /// Whether the filter is now exhausted.
        exhausted: bool,
    },
}

/// Handle returned by [`LocalDataProvider::subscribe`](crate::LocalDataProvider::subscribe).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Listener = Box<dyn FnMut(&ProviderEvent)>;

#[derive(Default)]
pub(crate) struct Listeners {
    next: u64,
    entries: Vec<(ListenerId, Listener)>,
}

impl fmt::Debug for Listeners {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listeners")
            .field("next", &self.next)
            .field("count", &self.entries.len())
            .finish_non_exhaustive()
    }
}

impl Listeners {
    pub(crate) fn subscribe(&mut self, listener: Listener) -> ListenerId {
        self.next += 1;
        let id = ListenerId(self.next);
        self.entries.push((id, listener));
        id
    }

    pub(crate) fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(i, _)| *i != id);
        self.entries.len() != before
    }

    pub(crate) fn emit(&mut self, event: &ProviderEvent) {
        for (_, listener) in &mut self.entries {
            listener(event);
        }
    }
}
