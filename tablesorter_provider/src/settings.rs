// Copyright 2025 the TableSorter Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Provider configuration.

use serde::{Deserialize, Serialize};

use crate::error::ProviderError;

/// Tunables for a [`LocalDataProvider`](crate::LocalDataProvider).
///
/// Every field has a default, so a partial (or empty) JSON object is a valid configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderSettings {
    /// Fixed histogram bucket count. `None` uses Sturges' rule on the filtered row count.
    pub histogram_bins: Option<usize>,
    /// Match text filters case-sensitively.
    pub case_sensitive_filters: bool,
}

impl ProviderSettings {
    /// Parses settings from JSON.
    pub fn from_json(json: &str) -> Result<Self, ProviderError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Sets a fixed histogram bucket count.
    pub fn with_histogram_bins(mut self, bins: usize) -> Self {
        self.histogram_bins = Some(bins);
        self
    }

    /// Enables or disables case-sensitive text filters.
    pub fn with_case_sensitive_filters(mut self, enabled: bool) -> Self {
        self.case_sensitive_filters = enabled;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_take_defaults() {
        assert_eq!(
            ProviderSettings::from_json("{}").unwrap(),
            ProviderSettings::default()
        );
        let s = ProviderSettings::from_json(r#"{"histogram_bins":12}"#).unwrap();
        assert_eq!(s.histogram_bins, Some(12));
        assert!(!s.case_sensitive_filters);
    }

    #[test]
    fn malformed_settings_are_an_error() {
        let err = ProviderSettings::from_json(r#"{"histogram_bins":"many"}"#).unwrap_err();
        assert!(matches!(err, ProviderError::Json(_)));
        assert!(err.to_string().starts_with("invalid JSON: "));
    }
}
