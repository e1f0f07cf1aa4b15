//! RiskEngine — per-cell aggregation over an asset store.

use tracing::debug;

use posture_core::constants::{
    CROWN_SAFE_TIER, TIER_2_THRESHOLD, TIER_3_THRESHOLD, TIER_4_THRESHOLD,
};
use posture_core::models::{CellAddress, CellAssessment, CellStatus, Category, Function};
use posture_core::traits::IAssetStore;
use posture_observability::{classify_span, heat_map_span};

use crate::heat_map::HeatMap;

/// Stateless engine classifying grid cells. Pure: reads the store, never writes it.
pub struct RiskEngine;

impl RiskEngine {
    /// Classify one cell.
    pub fn classify<S>(store: &S, category: Category, function: Function) -> CellStatus
    where
        S: IAssetStore + ?Sized,
    {
        Self::assess(store, category, function).status
    }

    /// Classify one cell and keep the figures behind the status.
    pub fn assess<S>(store: &S, category: Category, function: Function) -> CellAssessment
    where
        S: IAssetStore + ?Sized,
    {
        let _span = classify_span!(category, function).entered();
        let address = CellAddress::new(category, function);

        let assets = store.assets_in_category(category);
        if assets.is_empty() {
            return unassessed(address, CellStatus::NoAsset);
        }

        let mut scores: Vec<u8> = Vec::with_capacity(assets.len());
        let mut details = Vec::new();
        let mut crown_risk = false;

        for asset in assets {
            let tier = store.get_score(&asset.name, function);
            // Zero means not applicable and takes no part, not even in the crown check.
            if !tier.is_scored() {
                continue;
            }
            scores.push(tier.value());
            details.push(format!("{}: {}", asset.name, tier));
            if asset.is_crown_jewel && tier.value() < CROWN_SAFE_TIER {
                crown_risk = true;
            }
        }

        if scores.is_empty() {
            return unassessed(address, CellStatus::NotAssessed);
        }

        let sum: u32 = scores.iter().map(|&s| u32::from(s)).sum();
        let average = f64::from(sum) / scores.len() as f64;
        let status = if crown_risk {
            CellStatus::CrownRisk
        } else {
            tier_for_average(average)
        };

        debug!(
            cell = %address,
            scored = scores.len(),
            average,
            crown_risk,
            ?status,
            "cell classified"
        );

        CellAssessment {
            address,
            status,
            severity: status.severity(),
            average: Some(average),
            details,
        }
    }

    /// Assess all 25 cells in grid order.
    pub fn heat_map<S>(store: &S) -> HeatMap
    where
        S: IAssetStore + ?Sized,
    {
        let _span = heat_map_span!(store.asset_count()).entered();
        let cells = CellAddress::grid()
            .map(|cell| Self::assess(store, cell.category, cell.function))
            .collect();
        HeatMap::from_cells(cells)
    }
}

/// Map a mean score to a tier on half-open intervals; boundaries round up.
pub fn tier_for_average(average: f64) -> CellStatus {
    if average < TIER_2_THRESHOLD {
        CellStatus::Tier1
    } else if average < TIER_3_THRESHOLD {
        CellStatus::Tier2
    } else if average < TIER_4_THRESHOLD {
        CellStatus::Tier3
    } else {
        CellStatus::Tier4
    }
}

fn unassessed(address: CellAddress, status: CellStatus) -> CellAssessment {
    CellAssessment {
        address,
        status,
        severity: status.severity(),
        average: None,
        details: Vec::new(),
    }
}
