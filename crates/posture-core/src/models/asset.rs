use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::Category;

/// An inventoried asset. Immutable once inserted; scores live in the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Asset {
    /// Unique, case-sensitive name.
    pub name: String,
    pub category: Category,
    /// Crown jewels are critical: any weak score forces their cell to crown risk.
    pub is_crown_jewel: bool,
}

impl Asset {
    pub fn new(name: impl Into<String>, category: Category, is_crown_jewel: bool) -> Self {
        Self {
            name: name.into(),
            category,
            is_crown_jewel,
        }
    }
}
