use super::error_code::{self, PostureErrorCode};

/// Errors parsing grid vocabulary and grid payloads.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ModelError {
    #[error("unknown asset category: {value}")]
    UnknownCategory { value: String },

    #[error("unknown defence function: {value}")]
    UnknownFunction { value: String },

    #[error("malformed heat map: {reason}")]
    MalformedHeatMap { reason: String },
}

impl PostureErrorCode for ModelError {
    fn error_code(&self) -> &'static str {
        error_code::MODEL_ERROR
    }
}
