use super::error_code::{self, PostureErrorCode};

/// Vendor catalog loading errors. A missing entry is never an error.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("vendor catalog parse error: {message}")]
    ParseError { message: String },
}

impl PostureErrorCode for CatalogError {
    fn error_code(&self) -> &'static str {
        error_code::CATALOG_ERROR
    }
}
