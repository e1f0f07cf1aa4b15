use super::error_code::{self, PostureErrorCode};

/// Session registry errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("session not found: {session_id}")]
    NotFound { session_id: String },

    #[error("session capacity reached: {max} active sessions")]
    CapacityReached { max: usize },
}

impl PostureErrorCode for SessionError {
    fn error_code(&self) -> &'static str {
        error_code::SESSION_ERROR
    }
}
