//! HeatMap — the 25 assessed cells of the grid, row-major.

use serde::{Deserialize, Deserializer, Serialize};
use ts_rs::TS;

use posture_core::constants::{FUNCTION_COUNT, GRID_CELL_COUNT};
use posture_core::errors::ModelError;
use posture_core::models::{CellAddress, CellAssessment, CellStatus, Category, Function};

/// Assessed grid, categories outer and functions inner.
///
/// Always holds exactly 25 cells in grid order; deserialization rejects
/// anything else.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
pub struct HeatMap {
    cells: Vec<CellAssessment>,
}

/// Number of cells per status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct StatusCounts {
    pub no_asset: usize,
    pub not_assessed: usize,
    pub crown_risk: usize,
    pub tier1: usize,
    pub tier2: usize,
    pub tier3: usize,
    pub tier4: usize,
}

impl StatusCounts {
    pub fn get(&self, status: CellStatus) -> usize {
        match status {
            CellStatus::NoAsset => self.no_asset,
            CellStatus::NotAssessed => self.not_assessed,
            CellStatus::CrownRisk => self.crown_risk,
            CellStatus::Tier1 => self.tier1,
            CellStatus::Tier2 => self.tier2,
            CellStatus::Tier3 => self.tier3,
            CellStatus::Tier4 => self.tier4,
        }
    }

    /// Cells that will appear on the recommendation list.
    pub fn flagged(&self) -> usize {
        self.crown_risk + self.tier1 + self.tier2
    }

    fn bump(&mut self, status: CellStatus) {
        let slot = match status {
            CellStatus::NoAsset => &mut self.no_asset,
            CellStatus::NotAssessed => &mut self.not_assessed,
            CellStatus::CrownRisk => &mut self.crown_risk,
            CellStatus::Tier1 => &mut self.tier1,
            CellStatus::Tier2 => &mut self.tier2,
            CellStatus::Tier3 => &mut self.tier3,
            CellStatus::Tier4 => &mut self.tier4,
        };
        *slot += 1;
    }
}

impl HeatMap {
    pub(crate) fn from_cells(cells: Vec<CellAssessment>) -> Self {
        debug_assert_eq!(cells.len(), GRID_CELL_COUNT);
        Self { cells }
    }

    /// Rebuild a heat map from externally supplied cells, checking the grid shape.
    pub fn try_from_cells(cells: Vec<CellAssessment>) -> Result<Self, ModelError> {
        if cells.len() != GRID_CELL_COUNT {
            return Err(ModelError::MalformedHeatMap {
                reason: format!("expected {GRID_CELL_COUNT} cells, got {}", cells.len()),
            });
        }
        if let Some((pos, cell)) = cells
            .iter()
            .zip(CellAddress::grid())
            .enumerate()
            .find(|(_, (cell, expected))| cell.address != *expected)
            .map(|(pos, (cell, _))| (pos, cell))
        {
            return Err(ModelError::MalformedHeatMap {
                reason: format!("cell {pos} is {} out of grid order", cell.address),
            });
        }
        Ok(Self { cells })
    }

    /// The assessment for one cell.
    pub fn cell(&self, category: Category, function: Function) -> &CellAssessment {
        &self.cells[category.index() * FUNCTION_COUNT + function.index()]
    }

    /// Status for one cell.
    pub fn status(&self, category: Category, function: Function) -> CellStatus {
        self.cell(category, function).status
    }

    /// All cells in grid order.
    pub fn iter(&self) -> impl Iterator<Item = &CellAssessment> {
        self.cells.iter()
    }

    /// One row per category, each holding its five cells in function order.
    pub fn rows(&self) -> impl Iterator<Item = (Category, &[CellAssessment])> {
        Category::ALL
            .into_iter()
            .zip(self.cells.chunks(FUNCTION_COUNT))
    }

    /// Cells needing attention, in grid order.
    pub fn flagged(&self) -> impl Iterator<Item = &CellAssessment> {
        self.cells.iter().filter(|c| c.status.needs_attention())
    }

    pub fn counts(&self) -> StatusCounts {
        let mut counts = StatusCounts::default();
        for cell in &self.cells {
            counts.bump(cell.status);
        }
        counts
    }
}

impl<'de> Deserialize<'de> for HeatMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct Raw {
            cells: Vec<CellAssessment>,
        }

        let raw = Raw::deserialize(deserializer)?;
        HeatMap::try_from_cells(raw.cells).map_err(serde::de::Error::custom)
    }
}
