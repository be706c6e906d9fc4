use std::fmt;

use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Purpose tag carried inside every token.
///
/// Distinguishes access, refresh, email-verification, and password-reset
/// tokens so a token issued for one flow cannot be replayed in another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Purpose {
    Access,
    Refresh,
    EmailVerification,
    PasswordReset,
}

impl Purpose {
    /// Default time-to-live for tokens of this purpose.
    ///
    /// # Returns
    /// 15 minutes for access tokens, 7 days for refresh tokens, 1 day for
    /// email-verification and password-reset tokens
    pub fn default_ttl(&self) -> Duration {
        match self {
            Purpose::Access => Duration::minutes(15),
            Purpose::Refresh => Duration::days(7),
            Purpose::EmailVerification => Duration::days(1),
            Purpose::PasswordReset => Duration::days(1),
        }
    }
}

impl fmt::Display for Purpose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Purpose::Access => "access",
            Purpose::Refresh => "refresh",
            Purpose::EmailVerification => "email_verification",
            Purpose::PasswordReset => "password_reset",
        };
        name.fmt(f)
    }
}

/// JWT claims structure.
///
/// Carries the subject identity, issue/expiry timestamps, and the purpose
/// tag. All fields are mandatory; a token without them does not validate.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject (user identity, the account email)
    pub sub: String,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,

    /// Purpose tag
    pub purpose: Purpose,
}

impl Claims {
    /// Create claims for a subject with issued-at = now and expiry = now + ttl.
    ///
    /// # Arguments
    /// * `subject` - Identity the token is issued for
    /// * `purpose` - Purpose tag baked into the token
    /// * `ttl` - Token lifetime; `None` uses the purpose default
    pub fn new(subject: impl ToString, purpose: Purpose, ttl: Option<Duration>) -> Self {
        let now = Utc::now();
        let expiry = now + ttl.unwrap_or_else(|| purpose.default_ttl());

        Self {
            sub: subject.to_string(),
            iat: now.timestamp(),
            exp: expiry.timestamp(),
            purpose,
        }
    }
}
