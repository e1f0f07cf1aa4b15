use serde::{Deserialize, Serialize};

use super::{Function, Tier};

/// Composite key of the sparse score map. Equality and hashing cover both components.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScoreKey {
    pub asset_name: String,
    pub function: Function,
}

impl ScoreKey {
    pub fn new(asset_name: impl Into<String>, function: Function) -> Self {
        Self {
            asset_name: asset_name.into(),
            function,
        }
    }
}

/// One recorded score, as exported from a store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentScore {
    pub asset_name: String,
    pub function: Function,
    pub tier: Tier,
}
