// Copyright 2025 the TableSorter Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use tablesorter_transforms::TransformError;

/// Errors returned by a [`DataProvider`](crate::DataProvider).
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    /// A filter, sort or histogram request does not fit the current column set.
    #[error(transparent)]
    Transform(#[from] TransformError),
    /// A layout or settings blob could not be encoded or decoded.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}
