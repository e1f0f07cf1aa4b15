//! RecommendationDeriver — vendor previews for flagged cells.

use serde::{Deserialize, Serialize};
use tracing::info;
use ts_rs::TS;

use posture_core::config::RecommendationConfig;
use posture_core::models::{CellAssessment, CellStatus, Recommendation};
use posture_core::traits::{IAssetStore, IVendorCatalog};

use crate::heat_map::HeatMap;

/// Dashboard outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "outcome", content = "recommendations", rename_all = "snake_case")]
pub enum RecommendationReport {
    /// The store holds no assets at all.
    NoData,
    /// Assets exist and no cell is flagged. The deriver's `lookup_url`
    /// still applies for browsing vendors.
    Healthy,
    /// Flagged cells in grid order.
    Findings(Vec<Recommendation>),
}

impl RecommendationReport {
    pub fn recommendations(&self) -> &[Recommendation] {
        match self {
            Self::Findings(recs) => recs,
            Self::NoData | Self::Healthy => &[],
        }
    }
}

/// Builds recommendations from a heat map and an optional vendor catalog.
///
/// Stateless apart from its config; an absent catalog means "no vendors found".
#[derive(Debug, Clone, Default)]
pub struct RecommendationDeriver {
    config: RecommendationConfig,
}

impl RecommendationDeriver {
    pub fn new(config: RecommendationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RecommendationConfig {
        &self.config
    }

    /// External vendor directory link for every outcome, if configured.
    pub fn lookup_url(&self) -> Option<&str> {
        self.config.lookup_url()
    }

    /// Recommendation for one cell, or `None` if the cell is not flagged.
    pub fn recommend(
        &self,
        cell: &CellAssessment,
        catalog: Option<&dyn IVendorCatalog>,
    ) -> Option<Recommendation> {
        let (label, diagnosis) = status_text(cell.status)?;
        let vendors = catalog.map(|c| c.vendors(cell.address)).unwrap_or(&[]);
        let limit = self.config.preview_limit;

        Some(Recommendation {
            category: cell.address.category,
            function: cell.address.function,
            status: cell.status,
            vendor_preview: vendors.iter().take(limit).cloned().collect(),
            truncated: vendors.len() > limit,
            label: label.to_string(),
            diagnosis: diagnosis.to_string(),
            lookup_url: self.config.lookup_url().map(str::to_string),
        })
    }

    /// Recommendations for every flagged cell, in grid order.
    pub fn derive(
        &self,
        heat_map: &HeatMap,
        catalog: Option<&dyn IVendorCatalog>,
    ) -> Vec<Recommendation> {
        heat_map
            .flagged()
            .filter_map(|cell| self.recommend(cell, catalog))
            .collect()
    }

    /// Summarise the dashboard: no data, healthy, or the findings list.
    pub fn report<S>(
        &self,
        store: &S,
        heat_map: &HeatMap,
        catalog: Option<&dyn IVendorCatalog>,
    ) -> RecommendationReport
    where
        S: IAssetStore + ?Sized,
    {
        if store.is_empty() {
            return RecommendationReport::NoData;
        }
        let recs = self.derive(heat_map, catalog);
        info!(flagged = recs.len(), "recommendations derived");
        if recs.is_empty() {
            RecommendationReport::Healthy
        } else {
            RecommendationReport::Findings(recs)
        }
    }
}

/// Label and diagnosis for a flagged status.
pub fn status_text(status: CellStatus) -> Option<(&'static str, &'static str)> {
    match status {
        CellStatus::CrownRisk => Some((
            "Crown risk (Critical)",
            "A crown jewel asset is exposed to high risk and needs immediate action.",
        )),
        CellStatus::Tier1 => Some((
            "Critical gap (Tier 1)",
            "Baseline defence capability is insufficient.",
        )),
        CellStatus::Tier2 => Some((
            "Needs strengthening (Tier 2)",
            "Defences are only partially standardised.",
        )),
        _ => None,
    }
}
