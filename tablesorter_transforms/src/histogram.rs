// Copyright 2025 the TableSorter Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Histogram binning for numeric columns.

extern crate alloc;

use alloc::vec;
use alloc::vec::Vec;

use serde::{Deserialize, Serialize};
use tablesorter_core::Domain;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

/// One histogram bucket.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bin {
    /// Lower edge of the bucket, in data units.
    pub x: f64,
    /// Bucket height relative to the tallest bucket, in `[0, 1]`.
    pub y: f64,
}

/// Upper bound on the number of buckets [`histogram`] allocates.
pub const MAX_BINS: usize = 4096;

/// Returns the Sturges bin count `ceil(log2(n) + 1)`, or `0` for no values.
pub fn sturges_bin_count(n: usize) -> usize {
    if n == 0 {
        return 0;
    }
    let bins = ((n as f64).log2() + 1.0).ceil();
    #[allow(
        clippy::cast_possible_truncation,
        reason = "log2 of a usize plus one always fits in usize"
    )]
    {
        bins as usize
    }
}

/// Bins `values` into equal-width buckets spanning their domain.
///
/// Non-finite values are skipped. `bins` defaults to [`sturges_bin_count`] and is clamped to
/// `1..=MAX_BINS`. The maximum value lands in the last bucket. A degenerate domain yields a single bucket at `min`; no values
/// yield no buckets.
pub fn histogram(values: impl IntoIterator<Item = f64>, bins: Option<usize>) -> Vec<Bin> {
    let values: Vec<f64> = values.into_iter().filter(|v| v.is_finite()).collect();
    let Some(domain) = Domain::from_values(values.iter().copied()) else {
        return Vec::new();
    };
    if domain.is_degenerate() {
        return vec![Bin {
            x: domain.min,
            y: 1.0,
        }];
    }

    let n = bins
        .unwrap_or_else(|| sturges_bin_count(values.len()))
        .clamp(1, MAX_BINS);
    // Divide before subtracting so a domain wider than `f64::MAX` stays finite.
    let width = domain.max / n as f64 - domain.min / n as f64;
    let mut counts = vec![0_usize; n];
    for v in values {
        let t = (v / width - domain.min / width).floor();
        #[allow(
            clippy::cast_possible_truncation,
            reason = "t is finite and non-negative, and clamped to the last bucket"
        )]
        let idx = (t as usize).min(n - 1);
        counts[idx] += 1;
    }

    let tallest = counts.iter().copied().max().unwrap_or(0).max(1) as f64;
    counts
        .into_iter()
        .enumerate()
        .map(|(i, c)| Bin {
            x: domain.min + width * i as f64,
            y: c as f64 / tallest,
        })
        .collect()
}
