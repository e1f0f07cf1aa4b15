//! # posture-store
//!
//! In-memory asset inventory plus the sparse `(asset, function) → tier` score map.
//! Pure data: no classification happens here. Every mutation validates first
//! and leaves the store untouched on failure.

pub mod batch;
pub mod store;

pub use batch::BatchInsert;
pub use store::AssetStore;
