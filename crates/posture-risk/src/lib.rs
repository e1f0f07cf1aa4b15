//! # posture-risk
//!
//! Turns an asset inventory into a 5x5 risk heat map.
//!
//! Per cell: no assets → `NoAsset`; nothing scored → `NotAssessed`; any crown
//! jewel scored below Tier 3 → `CrownRisk`; otherwise the unweighted mean of
//! the non-zero scores maps to Tier 1..4 on half-open thresholds 1.5/2.5/3.5.
//! Flagged cells (crown risk, Tier 1, Tier 2) become vendor recommendations.

pub mod catalog;
pub mod engine;
pub mod heat_map;
pub mod recommendation;

pub use catalog::VendorCatalog;
pub use engine::RiskEngine;
pub use heat_map::{HeatMap, StatusCounts};
pub use recommendation::{RecommendationDeriver, RecommendationReport};
