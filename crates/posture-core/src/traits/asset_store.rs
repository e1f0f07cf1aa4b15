use crate::models::{Asset, Category, Function, Tier};

/// Read-side view of an asset inventory and its sparse score map.
///
/// The risk engine only ever reads through this trait, so classification
/// can never mutate a store.
pub trait IAssetStore {
    /// All assets in insertion order.
    fn list_assets(&self) -> &[Asset];

    /// Score for an asset/function pair. Absent keys read as `Tier::UNSCORED`.
    fn get_score(&self, asset_name: &str, function: Function) -> Tier;

    /// Assets of one category, preserving insertion order.
    fn assets_in_category(&self, category: Category) -> Vec<&Asset> {
        self.list_assets()
            .iter()
            .filter(|a| a.category == category)
            .collect()
    }

    fn contains(&self, asset_name: &str) -> bool {
        self.list_assets().iter().any(|a| a.name == asset_name)
    }

    fn asset_count(&self) -> usize {
        self.list_assets().len()
    }

    fn is_empty(&self) -> bool {
        self.list_assets().is_empty()
    }
}
