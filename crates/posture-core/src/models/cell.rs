use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use super::{Category, Function};

/// One (category, function) cell of the 5x5 grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CellAddress {
    pub category: Category,
    pub function: Function,
}

impl CellAddress {
    pub fn new(category: Category, function: Function) -> Self {
        Self { category, function }
    }

    /// All 25 cells in grid order: categories outer, functions inner.
    pub fn grid() -> impl Iterator<Item = CellAddress> {
        Category::ALL.into_iter().flat_map(|category| {
            Function::ALL
                .into_iter()
                .map(move |function| CellAddress { category, function })
        })
    }
}

impl fmt::Display for CellAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.category, self.function)
    }
}

/// Classification of a grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum CellStatus {
    /// No asset in this category.
    NoAsset,
    /// Assets exist but none has a non-zero score for this function.
    NotAssessed,
    /// A crown jewel is scored below Tier 3. Outranks every tier outcome.
    CrownRisk,
    Tier1,
    Tier2,
    Tier3,
    Tier4,
}

impl CellStatus {
    /// Every status, worst assessed outcome first after the unassessed ones.
    pub const ALL: [CellStatus; 7] = [
        Self::NoAsset,
        Self::NotAssessed,
        Self::CrownRisk,
        Self::Tier1,
        Self::Tier2,
        Self::Tier3,
        Self::Tier4,
    ];

    /// Numeric severity used for rendering. Crown risk renders as the worst tier.
    pub fn severity(self) -> u8 {
        match self {
            Self::NoAsset | Self::NotAssessed => 0,
            Self::CrownRisk | Self::Tier1 => 1,
            Self::Tier2 => 2,
            Self::Tier3 => 3,
            Self::Tier4 => 4,
        }
    }

    /// Cells with these statuses go on the recommendation list.
    pub fn needs_attention(self) -> bool {
        matches!(self, Self::CrownRisk | Self::Tier1 | Self::Tier2)
    }

    /// True once at least one asset in the cell has been scored.
    pub fn is_assessed(self) -> bool {
        !matches!(self, Self::NoAsset | Self::NotAssessed)
    }
}

impl fmt::Display for CellStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::NoAsset => "no asset",
            Self::NotAssessed => "not assessed",
            Self::CrownRisk => "crown risk",
            Self::Tier1 => "Tier 1",
            Self::Tier2 => "Tier 2",
            Self::Tier3 => "Tier 3",
            Self::Tier4 => "Tier 4",
        };
        f.write_str(s)
    }
}

/// Full result for one cell: the status plus the numbers behind it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CellAssessment {
    pub address: CellAddress,
    pub status: CellStatus,
    /// Same as `status.severity()`.
    pub severity: u8,
    /// Unweighted mean of the non-zero scores, if any.
    pub average: Option<f64>,
    /// One `"<asset>: Tier <n>"` line per scored asset, in store order.
    pub details: Vec<String>,
}
