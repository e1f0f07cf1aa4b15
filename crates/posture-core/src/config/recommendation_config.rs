use serde::{Deserialize, Serialize};

use super::defaults;

/// Recommendation list configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RecommendationConfig {
    /// Number of vendors shown per flagged cell.
    pub preview_limit: usize,
    /// Appended to a rendered preview when vendors were cut off.
    pub overflow_marker: String,
    /// Rendered instead of a preview when the catalog has no vendors for a cell.
    pub empty_placeholder: String,
    /// External vendor directory linked from findings and the healthy outcome.
    /// `None` or an empty string disables the link.
    pub lookup_url: Option<String>,
}

impl RecommendationConfig {
    /// The configured lookup link, if any.
    pub fn lookup_url(&self) -> Option<&str> {
        self.lookup_url.as_deref().filter(|url| !url.is_empty())
    }
}

impl Default for RecommendationConfig {
    fn default() -> Self {
        Self {
            preview_limit: defaults::DEFAULT_PREVIEW_LIMIT,
            overflow_marker: defaults::DEFAULT_OVERFLOW_MARKER.to_string(),
            empty_placeholder: defaults::DEFAULT_EMPTY_PLACEHOLDER.to_string(),
            lookup_url: Some(defaults::DEFAULT_LOOKUP_URL.to_string()),
        }
    }
}
