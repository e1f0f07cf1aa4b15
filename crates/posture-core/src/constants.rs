/// Posture engine version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Number of asset categories (grid rows).
pub const CATEGORY_COUNT: usize = 5;

/// Number of defence functions (grid columns).
pub const FUNCTION_COUNT: usize = 5;

/// Total number of cells in the assessment grid.
pub const GRID_CELL_COUNT: usize = CATEGORY_COUNT * FUNCTION_COUNT;

/// Highest maturity tier an asset can be scored at.
pub const MAX_TIER: u8 = 4;

/// A crown jewel scored strictly below this tier puts its cell at crown risk.
pub const CROWN_SAFE_TIER: u8 = 3;

/// Average score at which a cell moves from Tier 1 to Tier 2.
pub const TIER_2_THRESHOLD: f64 = 1.5;

/// Average score at which a cell moves from Tier 2 to Tier 3.
pub const TIER_3_THRESHOLD: f64 = 2.5;

/// Average score at which a cell moves from Tier 3 to Tier 4.
pub const TIER_4_THRESHOLD: f64 = 3.5;
