use chrono::Duration;
use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;

use super::claims::Claims;
use super::claims::Purpose;
use super::errors::TokenError;

/// Codec for signed, expiring, purpose-tagged tokens.
///
/// The issuing and verifying sides must share the same secret; tokens are
/// otherwise stateless. Uses HS256 (HMAC with SHA-256).
pub struct TokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
}

impl TokenCodec {
    /// Create a new codec with a shared secret.
    ///
    /// # Arguments
    /// * `secret` - Signing secret (should be at least 32 bytes for HS256,
    ///   stored in configuration, never in code)
    pub fn new(secret: &[u8]) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
        }
    }

    /// Issue a signed token for a subject.
    ///
    /// # Arguments
    /// * `subject` - Identity encoded as the `sub` claim
    /// * `purpose` - Purpose tag baked into the token
    /// * `ttl` - Token lifetime; `None` uses the purpose default
    ///
    /// # Errors
    /// * `EncodingFailed` - Token signing failed
    pub fn issue(
        &self,
        subject: &str,
        purpose: Purpose,
        ttl: Option<Duration>,
    ) -> Result<String, TokenError> {
        let header = Header::new(self.algorithm);
        let claims = Claims::new(subject, purpose, ttl);

        encode(&header, &claims, &self.encoding_key)
            .map_err(|e| TokenError::EncodingFailed(e.to_string()))
    }

    /// Verify a token and return its subject.
    ///
    /// # Arguments
    /// * `token` - Compact token string to verify
    /// * `expected_purpose` - Purpose the caller requires
    ///
    /// # Errors
    /// * `InvalidToken` - Signature or format is bad
    /// * `Expired` - Token is past its expiry
    /// * `WrongPurpose` - Purpose tag does not match `expected_purpose`
    pub fn decode(&self, token: &str, expected_purpose: Purpose) -> Result<String, TokenError> {
        self.claims(token, expected_purpose).map(|claims| claims.sub)
    }

    /// Verify a token and return the full claim set.
    ///
    /// Same validation as [`decode`](Self::decode); exposed for callers
    /// that need the timestamps as well as the subject.
    pub fn claims(&self, token: &str, expected_purpose: Purpose) -> Result<Claims, TokenError> {
        let validation = Validation::new(self.algorithm);

        let token_data =
            decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
                match e.kind() {
                    ErrorKind::ExpiredSignature => TokenError::Expired,
                    _ => TokenError::InvalidToken(e.to_string()),
                }
            })?;

        let claims = token_data.claims;
        if claims.purpose != expected_purpose {
            return Err(TokenError::WrongPurpose {
                expected: expected_purpose,
                actual: claims.purpose,
            });
        }

        Ok(claims)
    }
}
