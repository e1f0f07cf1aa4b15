//! PostureErrorCode trait for the UI boundary.

/// Every error enum implements this to provide a stable, structured
/// error code string that the surrounding UI can branch on.
pub trait PostureErrorCode {
    /// Returns the error code string (e.g., "STORE_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the tagged error string: `[ERROR_CODE] message`.
    fn tagged(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

// Error code constants for the UI boundary.
pub const STORE_ERROR: &str = "STORE_ERROR";
pub const INVALID_TIER: &str = "INVALID_TIER";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const INTAKE_ERROR: &str = "INTAKE_ERROR";
pub const SESSION_ERROR: &str = "SESSION_ERROR";
pub const CATALOG_ERROR: &str = "CATALOG_ERROR";
pub const MODEL_ERROR: &str = "MODEL_ERROR";
pub const SERIALIZATION_ERROR: &str = "SERIALIZATION_ERROR";
