//! # posture-core
//!
//! Foundation crate for the Posture self-assessment engine.
//! Defines the 5x5 grid vocabulary (asset categories and defence functions),
//! asset and score types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::PostureConfig;
pub use errors::{PostureError, PostureResult};
pub use models::{
    Asset, CellAddress, CellAssessment, CellStatus, Category, Function, Recommendation, ScoreKey,
    Tier,
};
pub use traits::{IAssetStore, IVendorCatalog};
