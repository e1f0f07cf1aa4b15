use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::constants::MAX_TIER;
use crate::errors::StoreError;

/// Maturity tier for one asset/function pair, validated to `0..=4`.
///
/// `0` means not applicable or not yet scored and is excluded from
/// aggregation. `1..=4` are increasing maturity, 4 being automated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, TS)]
#[ts(export)]
pub struct Tier(u8);

impl Tier {
    /// Not applicable / never scored.
    pub const UNSCORED: Tier = Tier(0);

    /// Validate a raw score.
    pub fn new(value: u8) -> Result<Self, StoreError> {
        if value > MAX_TIER {
            return Err(StoreError::InvalidTier { value });
        }
        Ok(Self(value))
    }

    /// Get the raw value.
    pub fn value(self) -> u8 {
        self.0
    }

    /// True for tiers 1..=4; these are the only scores that take part in aggregation.
    pub fn is_scored(self) -> bool {
        self.0 > 0
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tier {}", self.0)
    }
}

impl TryFrom<u8> for Tier {
    type Error = StoreError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Tier> for u8 {
    fn from(t: Tier) -> Self {
        t.0
    }
}

impl<'de> Deserialize<'de> for Tier {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = u8::deserialize(deserializer)?;
        Tier::new(raw).map_err(serde::de::Error::custom)
    }
}
