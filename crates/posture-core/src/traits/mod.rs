pub mod asset_store;
pub mod vendor_catalog;

pub use asset_store::IAssetStore;
pub use vendor_catalog::IVendorCatalog;
