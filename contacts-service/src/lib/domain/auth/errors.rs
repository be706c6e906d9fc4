use auth::TokenError;
use thiserror::Error;

use crate::domain::user::errors::UserError;

/// Authentication flow errors.
///
/// Token, credential, and confirmation failures all collapse to a single
/// unauthorized outcome at the API boundary; the variants stay
/// distinguishable here for tests and logging.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Could not validate credentials")]
    InvalidToken(#[from] TokenError),

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Email not confirmed")]
    EmailNotConfirmed,

    #[error("Invalid refresh token")]
    RefreshTokenMismatch,

    #[error("Verification error")]
    VerificationFailed,

    #[error(transparent)]
    User(#[from] UserError),

    #[error("Password hashing failed: {0}")]
    Password(String),
}
