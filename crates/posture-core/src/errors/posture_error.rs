use super::error_code::{self, PostureErrorCode};
use super::{CatalogError, ConfigError, IntakeError, ModelError, SessionError, StoreError};

/// Top-level error type for the Posture engine.
#[derive(Debug, thiserror::Error)]
pub enum PostureError {
    #[error("store error: {0}")]
    StoreError(#[from] StoreError),

    #[error("config error: {0}")]
    ConfigError(#[from] ConfigError),

    #[error("intake error: {0}")]
    IntakeError(#[from] IntakeError),

    #[error("session error: {0}")]
    SessionError(#[from] SessionError),

    #[error("catalog error: {0}")]
    CatalogError(#[from] CatalogError),

    #[error("model error: {0}")]
    ModelError(#[from] ModelError),

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl PostureErrorCode for PostureError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::StoreError(e) => e.error_code(),
            Self::ConfigError(e) => e.error_code(),
            Self::IntakeError(e) => e.error_code(),
            Self::SessionError(e) => e.error_code(),
            Self::CatalogError(e) => e.error_code(),
            Self::ModelError(e) => e.error_code(),
            Self::SerializationError(_) => error_code::SERIALIZATION_ERROR,
        }
    }
}

/// Convenience alias used throughout the workspace.
pub type PostureResult<T> = Result<T, PostureError>;
