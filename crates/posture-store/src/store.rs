//! AssetStore — ordered asset inventory with a composite-keyed score map.

use std::collections::HashMap;

use tracing::{debug, warn};

use posture_core::errors::StoreError;
use posture_core::models::{Asset, AssessmentScore, Category, Function, ScoreKey, Tier};
use posture_core::traits::IAssetStore;

use crate::batch::BatchInsert;

/// In-memory inventory for a single assessment session.
///
/// Assets keep insertion order. Scores are sparse: an absent key reads as
/// `Tier::UNSCORED`. One instance per session; never shared process-wide.
#[derive(Debug, Clone, Default)]
pub struct AssetStore {
    assets: Vec<Asset>,
    /// Asset name → position in `assets`.
    index: HashMap<String, usize>,
    scores: HashMap<ScoreKey, Tier>,
}

impl AssetStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a new asset. Rejects empty and duplicate names.
    pub fn add_asset(
        &mut self,
        name: impl Into<String>,
        category: Category,
        is_crown_jewel: bool,
    ) -> Result<&Asset, StoreError> {
        let name = name.into();
        if name.is_empty() {
            warn!("rejected asset with empty name");
            return Err(StoreError::EmptyName);
        }
        if self.index.contains_key(&name) {
            warn!(asset = %name, "rejected duplicate asset");
            return Err(StoreError::DuplicateName { name });
        }

        debug!(asset = %name, %category, crown = is_crown_jewel, "asset added");
        let pos = self.assets.len();
        self.index.insert(name.clone(), pos);
        self.assets.push(Asset::new(name, category, is_crown_jewel));
        Ok(&self.assets[pos])
    }

    /// Insert each asset independently; rejected ones are reported, not fatal.
    pub fn add_assets<I>(&mut self, assets: I) -> BatchInsert
    where
        I: IntoIterator<Item = Asset>,
    {
        let mut result = BatchInsert::default();
        for asset in assets {
            match self.add_asset(asset.name.clone(), asset.category, asset.is_crown_jewel) {
                Ok(_) => result.inserted.push(asset.name),
                Err(e) => result.skipped.push((asset.name, e)),
            }
        }
        result
    }

    /// Look up an asset by exact name.
    pub fn get_asset(&self, name: &str) -> Option<&Asset> {
        self.index.get(name).map(|&pos| &self.assets[pos])
    }

    /// Record a tier for an asset/function pair. Last write wins.
    ///
    /// The tier is validated before the asset lookup, so an out-of-range
    /// tier is reported as `InvalidTier` even for unknown assets.
    pub fn set_score(
        &mut self,
        asset_name: &str,
        function: Function,
        tier: u8,
    ) -> Result<(), StoreError> {
        let tier = Tier::new(tier).inspect_err(|_| {
            warn!(asset = %asset_name, %function, tier, "rejected invalid tier");
        })?;
        if !self.index.contains_key(asset_name) {
            warn!(asset = %asset_name, %function, "rejected score for unknown asset");
            return Err(StoreError::UnknownAsset {
                name: asset_name.to_string(),
            });
        }

        debug!(asset = %asset_name, %function, tier = tier.value(), "score set");
        self.scores.insert(ScoreKey::new(asset_name, function), tier);
        Ok(())
    }

    /// Delete an asset together with every score recorded for it.
    pub fn remove_asset(&mut self, name: &str) -> Result<Asset, StoreError> {
        let pos = self
            .index
            .remove(name)
            .ok_or_else(|| StoreError::UnknownAsset {
                name: name.to_string(),
            })?;

        let removed = self.assets.remove(pos);
        for asset in &self.assets[pos..] {
            if let Some(p) = self.index.get_mut(&asset.name) {
                *p -= 1;
            }
        }
        self.scores.retain(|key, _| key.asset_name != name);

        debug!(asset = %name, "asset removed");
        Ok(removed)
    }

    /// Every recorded score, ordered by asset insertion order then function.
    pub fn scores(&self) -> Vec<AssessmentScore> {
        let mut out = Vec::with_capacity(self.scores.len());
        for asset in &self.assets {
            for function in Function::ALL {
                let key = ScoreKey::new(asset.name.as_str(), function);
                if let Some(&tier) = self.scores.get(&key) {
                    out.push(AssessmentScore {
                        asset_name: asset.name.clone(),
                        function,
                        tier,
                    });
                }
            }
        }
        out
    }

    /// Number of recorded score entries, including explicit zeros.
    pub fn score_count(&self) -> usize {
        self.scores.len()
    }
}

impl IAssetStore for AssetStore {
    fn list_assets(&self) -> &[Asset] {
        &self.assets
    }

    fn get_score(&self, asset_name: &str, function: Function) -> Tier {
        self.scores
            .get(&ScoreKey::new(asset_name, function))
            .copied()
            .unwrap_or(Tier::UNSCORED)
    }

    fn contains(&self, asset_name: &str) -> bool {
        self.index.contains_key(asset_name)
    }
}
