// Copyright 2025 the TableSorter Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property-based tests for query ordering and paging.
//!
//! These verify properties that must hold for any dataset:
//! - single-column sorts are monotonic, with nulls at the low end
//! - stacked sorts are deterministic
//! - concatenated pages equal one unpaged query
//! - paging exhausts exactly when the last row has been returned

use proptest::prelude::*;
use tablesorter_provider::{
    CanQueryOptions, ColumnDescriptor, DataProvider, Dataset, LocalDataProvider, QueryOptions,
    Row, SortSpec, StackColumn, StackDescriptor,
};

// =============================================================================
// HELPER STRATEGIES
// =============================================================================

fn cell_strategy() -> impl Strategy<Value = Option<i32>> {
    prop::option::weighted(0.8, -50..50_i32)
}

fn rows_strategy() -> impl Strategy<Value = Vec<Row>> {
    prop::collection::vec((cell_strategy(), cell_strategy()), 0..40).prop_map(|cells| {
        cells
            .into_iter()
            .enumerate()
            .map(|(i, (a, b))| {
                Row::new()
                    .with("id", f64::from(u32::try_from(i).unwrap()))
                    .with("a", a)
                    .with("b", b)
            })
            .collect()
    })
}

fn provider(rows: Vec<Row>) -> LocalDataProvider {
    LocalDataProvider::new(Dataset::new(
        vec![
            ColumnDescriptor::number("id"),
            ColumnDescriptor::number("a"),
            ColumnDescriptor::number("b"),
        ],
        rows,
    ))
}

fn stack_strategy() -> impl Strategy<Value = StackDescriptor> {
    (0.0..2.0_f64, 0.0..2.0_f64).prop_map(|(wa, wb)| {
        StackDescriptor::new("s", [StackColumn::new("a", wa), StackColumn::new("b", wb)])
    })
}

// =============================================================================
// PROPERTIES
// =============================================================================

proptest! {
    #[test]
    fn single_column_sort_is_monotonic(rows in rows_strategy(), asc in any::<bool>()) {
        let mut p = provider(rows);
        let page = p.query(&QueryOptions::default().with_sort(SortSpec::column("a", asc))).unwrap();
        for pair in page.results.windows(2) {
            let ord = pair[0].get("a").total_cmp(pair[1].get("a"));
            if asc {
                prop_assert!(ord.is_le());
            } else {
                prop_assert!(ord.is_ge());
            }
        }
        if asc {
            let first_defined = page.results.iter().position(|r| !r.get("a").is_null());
            if let Some(i) = first_defined {
                prop_assert!(page.results[i..].iter().all(|r| !r.get("a").is_null()));
            }
        }
    }

    #[test]
    fn single_column_sort_is_stable(rows in rows_strategy(), asc in any::<bool>()) {
        let mut p = provider(rows);
        let page = p.query(&QueryOptions::default().with_sort(SortSpec::column("a", asc))).unwrap();
        for pair in page.results.windows(2) {
            if pair[0].get("a").total_cmp(pair[1].get("a")).is_eq() {
                prop_assert!(pair[0].f64("id") < pair[1].f64("id"));
            }
        }
    }

    #[test]
    fn stacked_sort_is_deterministic(rows in rows_strategy(), stack in stack_strategy(), asc in any::<bool>()) {
        let mut p = provider(rows.clone());
        let sort = QueryOptions::default().with_sort(SortSpec::stack(stack, asc));
        let first = p.query(&sort).unwrap();
        let second = p.query(&sort).unwrap();
        let fresh = provider(rows).query(&sort).unwrap();
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(&first, &fresh);
    }

    #[test]
    fn pages_concatenate_to_the_full_result(rows in rows_strategy(), page_size in 1..10_usize) {
        let sort = SortSpec::column("b", false);
        let full = provider(rows.clone())
            .query(&QueryOptions::default().with_sort(sort.clone()))
            .unwrap();

        let mut p = provider(rows);
        let mut paged: Vec<Row> = Vec::new();
        let mut offset = 0;
        loop {
            let page = p
                .query(&QueryOptions::page(offset, page_size).with_sort(sort.clone()))
                .unwrap();
            prop_assert_eq!(page.total, full.total);
            offset += page.results.len();
            paged.extend(page.results);
            let more = p.can_query(&CanQueryOptions::default());
            prop_assert_eq!(more, offset < full.total);
            if !more {
                break;
            }
        }
        prop_assert_eq!(paged, full.results);
    }

    #[test]
    fn stack_scores_treat_nulls_as_the_minimum(rows in rows_strategy()) {
        let mut p = provider(rows);
        let stack = StackDescriptor::new("s", [StackColumn::new("a", 1.0)]);
        let page = p.query(&QueryOptions::default().with_sort(SortSpec::stack(stack, true))).unwrap();
        // Nulls score like the column minimum, so every null precedes every larger value.
        let min = page.results.iter().filter_map(|r| r.f64("a")).fold(f64::INFINITY, f64::min);
        let last_null = page.results.iter().rposition(|r| r.get("a").is_null());
        let first_above_min = page.results.iter().position(|r| r.f64("a").is_some_and(|v| v > min));
        if let (Some(n), Some(m)) = (last_null, first_above_min) {
            prop_assert!(n < m);
        }
    }
}
