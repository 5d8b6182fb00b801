// Copyright 2025 the TableSorter Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Example binary for `tablesorter_provider`.
//!
//! Pages through a small dataset under a weighted stack sort, narrows it with a filter, and
//! prints the resulting histogram and saved layout. Set `RUST_LOG=debug` to see provider logs.

use tablesorter_provider::{
    CanQueryOptions, DataProvider, Dataset, FilterSpec, Layout, LocalDataProvider, ProviderError,
    ProviderEvent, ProviderSettings, QueryOptions, Row, SortSpec, StackColumn, StackDescriptor,
    Value,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), ProviderError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .compact()
        .init();

    let rows = vec![
        account("ada", 12, 3, Some(140)),
        account("grace", 45, 0, Some(610)),
        account("linus", 10, 7, None),
        account("margaret", 30, 12, Some(90)),
        account("barbara", 2, 1, Some(15)),
        account("ken", 18, 5, Some(300)),
    ];
    let settings = ProviderSettings::default().with_histogram_bins(4);
    let mut provider = LocalDataProvider::with_settings(Dataset::from_rows(rows), settings);
    let listener = provider.subscribe(|event| {
        if let ProviderEvent::Queried {
            total,
            returned,
            exhausted,
        } = event
        {
            info!(total, returned, exhausted, "page delivered");
        }
    });

    let stack = StackDescriptor::new(
        "engagement",
        [
            StackColumn::new("num_hashtags", 0.25),
            StackColumn::new("num_mentions", 0.25),
            StackColumn::new("num_tweets", 0.5),
        ],
    );
    let sort = SortSpec::stack(stack, false);

    println!("pages (stack desc):");
    let mut offset = 0;
    while provider.can_query(&CanQueryOptions::default()) {
        let page = provider.query(&QueryOptions::page(offset, 4).with_sort(sort.clone()))?;
        print_rows(&page.results);
        offset += page.results.len();
    }

    provider.filter(FilterSpec::range("num_hashtags", 10.0, 50.0))?;
    let page = provider.query(&QueryOptions::default().with_sort(sort))?;
    println!("filtered (num_hashtags in [10, 50]): {} of {}", page.results.len(), page.total);
    print_rows(&page.results);

    println!("histogram(num_tweets):");
    for bin in provider.generate_histogram("num_tweets")? {
        println!("  x={:>8.2} y={:.2}", bin.x, bin.y);
    }

    provider.unsubscribe(listener);
    let layout = provider.layout().to_json()?;
    println!("layout: {layout}");
    let restored = Layout::from_json(&layout)?;
    println!("restored filters: {}", restored.filters.len());
    Ok(())
}

fn account(name: &str, hashtags: i32, mentions: i32, tweets: Option<i32>) -> Row {
    Row::new()
        .with("name", name)
        .with("num_hashtags", hashtags)
        .with("num_mentions", mentions)
        .with("num_tweets", tweets)
}

fn print_rows(rows: &[Row]) {
    for row in rows {
        let cell = |c: &str| match row.get(c) {
            Value::Null => "-".to_owned(),
            v => v.to_string(),
        };
        println!(
            "  {:<10} hashtags={:>3} mentions={:>3} tweets={:>4}",
            cell("name"),
            cell("num_hashtags"),
            cell("num_mentions"),
            cell("num_tweets")
        );
    }
}
