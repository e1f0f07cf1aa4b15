//! Asset store validation errors. None are fatal; the store is unchanged on failure.

use super::error_code::{self, PostureErrorCode};

/// Rejected AssetStore mutations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("asset name must not be empty")]
    EmptyName,

    #[error("asset already exists: {name}")]
    DuplicateName { name: String },

    #[error("invalid tier {value}: must be between 0 and 4")]
    InvalidTier { value: u8 },

    #[error("unknown asset: {name}")]
    UnknownAsset { name: String },
}

impl PostureErrorCode for StoreError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidTier { .. } => error_code::INVALID_TIER,
            _ => error_code::STORE_ERROR,
        }
    }
}
