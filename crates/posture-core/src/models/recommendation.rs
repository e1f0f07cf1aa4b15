use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::{Category, CellStatus, Function};
use crate::config::RecommendationConfig;

/// Remediation entry for a flagged cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Recommendation {
    pub category: Category,
    pub function: Function,
    pub status: CellStatus,
    /// First `preview_limit` vendors from the catalog, in catalog order.
    pub vendor_preview: Vec<String>,
    /// True when the catalog held more vendors than the preview shows.
    pub truncated: bool,
    pub label: String,
    pub diagnosis: String,
    /// Where to search for further vendors.
    pub lookup_url: Option<String>,
}

impl Recommendation {
    /// Render the vendor preview as a single line.
    pub fn vendor_summary(&self, config: &RecommendationConfig) -> String {
        if self.vendor_preview.is_empty() {
            return config.empty_placeholder.clone();
        }
        let mut line = self.vendor_preview.join(", ");
        if self.truncated {
            line.push_str(&config.overflow_marker);
        }
        line
    }
}
