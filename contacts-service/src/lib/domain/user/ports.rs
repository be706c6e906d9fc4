use async_trait::async_trait;

use crate::domain::user::errors::CacheError;
use crate::domain::user::errors::ImageHostError;
use crate::domain::user::errors::MailError;
use crate::domain::user::errors::UserError;
use crate::domain::user::models::NewUser;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;

/// Persistence operations for the user aggregate.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Retrieve a user by email address (case-insensitive).
    ///
    /// # Returns
    /// Optional user entity (None if not found)
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserError>;

    /// Persist a new user account with confirmed = false.
    ///
    /// A default avatar URL is derived from the email on a best-effort
    /// basis; creation proceeds without one if derivation is not possible.
    ///
    /// # Errors
    /// * `EmailAlreadyExists` - Email is already registered
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, new_user: NewUser) -> Result<User, UserError>;

    /// Overwrite the stored refresh token; `None` clears it.
    ///
    /// Clearing is used to force re-authentication when a presented
    /// refresh token does not match the stored one.
    ///
    /// # Errors
    /// * `NotFound` - User does not exist
    /// * `DatabaseError` - Database operation failed
    async fn set_refresh_token(&self, id: UserId, token: Option<&str>) -> Result<(), UserError>;

    /// Replace the avatar URL for the user with this email.
    ///
    /// # Returns
    /// Updated user entity
    ///
    /// # Errors
    /// * `NotFound` - User does not exist
    /// * `DatabaseError` - Database operation failed
    async fn set_avatar(&self, email: &str, url: &str) -> Result<User, UserError>;

    /// Flip the confirmed flag to true.
    ///
    /// Callers check the flag first; the flow treats a second confirmation
    /// as a visible no-op rather than a redundant write.
    ///
    /// # Errors
    /// * `NotFound` - User does not exist
    /// * `DatabaseError` - Database operation failed
    async fn confirm(&self, email: &str) -> Result<(), UserError>;

    /// Replace the stored password hash.
    ///
    /// # Returns
    /// Updated user entity
    ///
    /// # Errors
    /// * `NotFound` - User does not exist
    /// * `DatabaseError` - Database operation failed
    async fn set_password(&self, id: UserId, password_hash: &str) -> Result<User, UserError>;
}

/// Key-value store of serialized user snapshots with per-key expiry.
///
/// Backed by an external cache service; every operation is fallible I/O
/// and callers must not fail the request path on errors.
#[async_trait]
pub trait UserSnapshotStore: Send + Sync + 'static {
    /// Fetch the cached snapshot for an email, if present and unexpired.
    async fn get(&self, email: &str) -> Result<Option<User>, CacheError>;

    /// Store a snapshot under the user's email with the configured TTL.
    async fn set(&self, user: &User) -> Result<(), CacheError>;

    /// Evict the snapshot for an email.
    async fn delete(&self, email: &str) -> Result<(), CacheError>;
}

/// Outbound delivery of templated account emails.
///
/// The core only produces the embedded token; delivery is asynchronous and
/// failures are logged by callers, never surfaced to the request.
#[async_trait]
pub trait MailDispatcher: Send + Sync + 'static {
    /// Send the email-verification message with a confirmation link.
    async fn send_verification(
        &self,
        recipient: &str,
        username: &str,
        base_url: &str,
        token: &str,
    ) -> Result<(), MailError>;

    /// Send the password-reset message with a reset link.
    async fn send_password_reset(
        &self,
        recipient: &str,
        username: &str,
        base_url: &str,
        token: &str,
    ) -> Result<(), MailError>;
}

/// External image hosting for avatar uploads.
#[async_trait]
pub trait ImageHost: Send + Sync + 'static {
    /// Upload image bytes under a user-scoped identifier.
    ///
    /// # Returns
    /// Publicly resolvable URL of the stored image
    async fn upload(&self, data: Vec<u8>, public_id: &str) -> Result<String, ImageHostError>;
}
