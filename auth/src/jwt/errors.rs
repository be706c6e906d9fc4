use thiserror::Error;

use super::claims::Purpose;

/// Error type for token operations.
#[derive(Debug, Clone, Error)]
pub enum TokenError {
    #[error("Failed to encode token: {0}")]
    EncodingFailed(String),

    #[error("Token is invalid: {0}")]
    InvalidToken(String),

    #[error("Token is expired")]
    Expired,

    #[error("Wrong token purpose: expected {expected}, got {actual}")]
    WrongPurpose { expected: Purpose, actual: Purpose },
}
