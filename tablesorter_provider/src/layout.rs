// Copyright 2025 the TableSorter Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Persisted view configuration.

use serde::{Deserialize, Serialize};
use tablesorter_core::ColumnDescriptor;
use tablesorter_transforms::{FilterSpec, SortSpec};

use crate::error::ProviderError;

/// The view state a host saves alongside a report and hands back on reload.
///
/// `columns` records the column set (with domains) the layout was taken against; it is carried
/// for the rendering layer and is not applied back to the data.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    /// Column descriptors at the time the layout was taken.
    #[serde(default)]
    pub columns: Vec<ColumnDescriptor>,
    /// Active sort, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort: Option<SortSpec>,
    /// Active filters.
    #[serde(default)]
    pub filters: Vec<FilterSpec>,
}

impl Layout {
    /// Encodes this layout as JSON.
    pub fn to_json(&self) -> Result<String, ProviderError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Decodes a layout from JSON.
    pub fn from_json(json: &str) -> Result<Self, ProviderError> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use tablesorter_transforms::{StackColumn, StackDescriptor};

    use super::*;

    #[test]
    fn decodes_a_saved_blob() {
        let json = r#"{
            "columns": [
                {"column": "id", "type": "number", "domain": [1, 4]},
                {"column": "name", "type": "string"}
            ],
            "sort": {"stack": {"name": "mix", "columns": [{"column": "id", "weight": 1}]}, "asc": false},
            "filters": [{"column": "name", "value": "al"}]
        }"#;
        let layout = Layout::from_json(json).unwrap();
        assert_eq!(layout.columns.len(), 2);
        assert_eq!(
            layout.sort,
            Some(SortSpec::stack(
                StackDescriptor::new("mix", [StackColumn::new("id", 1.0)]),
                false
            ))
        );
        assert_eq!(layout.filters, vec![FilterSpec::text("name", "al")]);
        assert_eq!(Layout::from_json(&layout.to_json().unwrap()).unwrap(), layout);
    }

    #[test]
    fn empty_object_is_an_empty_layout() {
        assert_eq!(Layout::from_json("{}").unwrap(), Layout::default());
        assert!(Layout::from_json("[").is_err());
    }
}
