//! Error handling for Posture.
//! One error enum per subsystem, `thiserror` only.

pub mod catalog_error;
pub mod config_error;
pub mod error_code;
pub mod intake_error;
pub mod model_error;
pub mod posture_error;
pub mod session_error;
pub mod store_error;

pub use catalog_error::CatalogError;
pub use config_error::ConfigError;
pub use error_code::PostureErrorCode;
pub use intake_error::IntakeError;
pub use model_error::ModelError;
pub use posture_error::{PostureError, PostureResult};
pub use session_error::SessionError;
pub use store_error::StoreError;
