use super::error_code::{self, PostureErrorCode};

/// Bulk text import errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IntakeError {
    #[error("no asset lines found in input")]
    EmptyInput,
}

impl PostureErrorCode for IntakeError {
    fn error_code(&self) -> &'static str {
        error_code::INTAKE_ERROR
    }
}
