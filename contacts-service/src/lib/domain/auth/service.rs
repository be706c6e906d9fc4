use std::sync::Arc;

use auth::PasswordHasher;
use auth::Purpose;
use auth::TokenCodec;

use crate::domain::auth::errors::AuthError;
use crate::domain::user::cache::IdentityCache;
use crate::domain::user::errors::UserError;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::NewUser;
use crate::domain::user::models::User;
use crate::domain::user::models::Username;
use crate::domain::user::ports::UserRepository;
use crate::domain::user::ports::UserSnapshotStore;

/// Access/refresh token pair issued on login and refresh.
#[derive(Debug, Clone)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

/// Command to register a new account with validated fields.
#[derive(Debug)]
pub struct RegisterCommand {
    pub username: Username,
    pub email: EmailAddress,
    pub password: String,
}

/// Outcome of an email confirmation attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmailConfirmation {
    Confirmed,
    AlreadyConfirmed,
}

/// Authentication orchestrator.
///
/// Composes the token codec, the credential verifier, the identity cache,
/// and the user repository into the request-facing authentication flows.
/// Per-request resolution walks token -> subject -> cached user; every
/// failed transition collapses to an unauthorized outcome at the boundary.
pub struct AuthService<UR, S>
where
    UR: UserRepository,
    S: UserSnapshotStore,
{
    users: Arc<UR>,
    cache: IdentityCache<S>,
    codec: TokenCodec,
    password_hasher: PasswordHasher,
}

impl<UR, S> AuthService<UR, S>
where
    UR: UserRepository,
    S: UserSnapshotStore,
{
    /// Create a new authentication service with injected dependencies.
    ///
    /// # Arguments
    /// * `users` - User persistence implementation
    /// * `cache` - Identity cache fronting the user store
    /// * `codec` - Token codec sharing the process-wide signing secret
    pub fn new(users: Arc<UR>, cache: IdentityCache<S>, codec: TokenCodec) -> Self {
        Self {
            users,
            cache,
            codec,
            password_hasher: PasswordHasher::new(),
        }
    }

    /// Register a new account.
    ///
    /// The account starts unconfirmed; the returned token is handed to the
    /// mail dispatcher so the user can confirm their address.
    ///
    /// # Returns
    /// The created user and an email-verification token
    ///
    /// # Errors
    /// * `User(EmailAlreadyExists)` - Email is already registered
    /// * `Password` - Password hashing failed
    pub async fn register(&self, command: RegisterCommand) -> Result<(User, String), AuthError> {
        let password_hash = self
            .password_hasher
            .hash(&command.password)
            .map_err(|e| AuthError::Password(e.to_string()))?;

        let user = self
            .users
            .create(NewUser::new(command.username, command.email, password_hash))
            .await?;

        tracing::info!(user_id = %user.id, email = %user.email, "User registered");

        let token = self
            .codec
            .issue(user.email.as_str(), Purpose::EmailVerification, None)?;

        Ok((user, token))
    }

    /// Verify credentials and issue a token pair.
    ///
    /// Unknown email and wrong password are indistinguishable to the
    /// caller. The refresh token is mirrored onto the user row so it can
    /// be revoked, and any cached snapshot is evicted.
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown email or password mismatch
    /// * `EmailNotConfirmed` - Account has not confirmed its email
    pub async fn login(&self, email: &str, password: &str) -> Result<TokenPair, AuthError> {
        let user = self
            .users
            .find_by_email(email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        if !user.confirmed {
            return Err(AuthError::EmailNotConfirmed);
        }

        if !self.password_hasher.verify(password, &user.password_hash) {
            return Err(AuthError::InvalidCredentials);
        }

        let pair = self.issue_pair(user.email.as_str())?;
        self.users
            .set_refresh_token(user.id, Some(&pair.refresh_token))
            .await?;
        self.cache.invalidate(user.email.as_str()).await;

        tracing::info!(user_id = %user.id, "User logged in");

        Ok(pair)
    }

    /// Rotate a token pair from a presented refresh token.
    ///
    /// The presented token must match the stored one byte-for-byte. On a
    /// mismatch the stored token is cleared before rejecting, so the old
    /// token can never be replayed: the next refresh attempt fails too and
    /// the user must log in again.
    ///
    /// # Errors
    /// * `InvalidToken` - Presented token is malformed, expired, or not a
    ///   refresh token
    /// * `RefreshTokenMismatch` - Stored and presented tokens differ
    pub async fn refresh(&self, presented: &str) -> Result<TokenPair, AuthError> {
        let email = self.codec.decode(presented, Purpose::Refresh)?;

        let user = self
            .users
            .find_by_email(&email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        match user.refresh_token.as_deref() {
            Some(stored) if stored == presented => {}
            _ => {
                tracing::warn!(user_id = %user.id, "Refresh token mismatch, revoking stored token");
                self.users.set_refresh_token(user.id, None).await?;
                self.cache.invalidate(user.email.as_str()).await;
                return Err(AuthError::RefreshTokenMismatch);
            }
        }

        let pair = self.issue_pair(user.email.as_str())?;
        self.users
            .set_refresh_token(user.id, Some(&pair.refresh_token))
            .await?;
        self.cache.invalidate(user.email.as_str()).await;

        Ok(pair)
    }

    /// Resolve a bearer access token to a live user entity.
    ///
    /// The identity cache fronts the user store; a cache miss falls
    /// through to the repository and repopulates the cache.
    ///
    /// # Errors
    /// * `InvalidToken` - Malformed, expired, or wrong-purpose token
    /// * `InvalidCredentials` - Subject no longer exists
    pub async fn resolve(&self, token: &str) -> Result<User, AuthError> {
        let email = self.codec.decode(token, Purpose::Access)?;

        self.cache
            .get_or_load(&email, self.users.as_ref())
            .await
            .map_err(|e| match e {
                UserError::NotFound(_) => AuthError::InvalidCredentials,
                other => AuthError::User(other),
            })
    }

    /// Confirm the email address carried by a verification token.
    ///
    /// Confirming twice is a visible no-op: the second call reports
    /// `AlreadyConfirmed` without touching the store.
    ///
    /// # Errors
    /// * `InvalidToken` - Malformed, expired, or wrong-purpose token
    /// * `VerificationFailed` - Subject does not exist
    pub async fn confirm_email(&self, token: &str) -> Result<EmailConfirmation, AuthError> {
        let email = self.codec.decode(token, Purpose::EmailVerification)?;

        let user = self
            .users
            .find_by_email(&email)
            .await?
            .ok_or(AuthError::VerificationFailed)?;

        if user.confirmed {
            return Ok(EmailConfirmation::AlreadyConfirmed);
        }

        self.users.confirm(user.email.as_str()).await?;
        self.cache.invalidate(user.email.as_str()).await;

        tracing::info!(user_id = %user.id, "Email confirmed");

        Ok(EmailConfirmation::Confirmed)
    }

    /// Produce a fresh verification token for an existing account.
    ///
    /// # Returns
    /// The user and `Some(token)`, or `None` if the account is already
    /// confirmed and no email should be sent
    ///
    /// # Errors
    /// * `User(NotFound)` - Unknown email
    pub async fn request_verification(
        &self,
        email: &str,
    ) -> Result<(User, Option<String>), AuthError> {
        let user = self
            .users
            .find_by_email(email)
            .await?
            .ok_or_else(|| UserError::NotFound(email.to_string()))?;

        if user.confirmed {
            return Ok((user, None));
        }

        let token = self
            .codec
            .issue(user.email.as_str(), Purpose::EmailVerification, None)?;

        Ok((user, Some(token)))
    }

    /// Produce a password-reset token for an existing account.
    ///
    /// # Errors
    /// * `User(NotFound)` - Unknown email
    pub async fn request_password_reset(&self, email: &str) -> Result<(User, String), AuthError> {
        let user = self
            .users
            .find_by_email(email)
            .await?
            .ok_or_else(|| UserError::NotFound(email.to_string()))?;

        let token = self
            .codec
            .issue(user.email.as_str(), Purpose::PasswordReset, None)?;

        Ok((user, token))
    }

    /// Replace the password for the account carried by a reset token.
    ///
    /// # Errors
    /// * `InvalidToken` - Malformed, expired, or wrong-purpose token
    /// * `VerificationFailed` - Subject does not exist
    /// * `Password` - Password hashing failed
    pub async fn reset_password(&self, token: &str, new_password: &str) -> Result<User, AuthError> {
        let email = self.codec.decode(token, Purpose::PasswordReset)?;

        let user = self
            .users
            .find_by_email(&email)
            .await?
            .ok_or(AuthError::VerificationFailed)?;

        let password_hash = self
            .password_hasher
            .hash(new_password)
            .map_err(|e| AuthError::Password(e.to_string()))?;

        let updated = self.users.set_password(user.id, &password_hash).await?;
        self.cache.invalidate(user.email.as_str()).await;

        tracing::info!(user_id = %user.id, "Password reset");

        Ok(updated)
    }

    /// Store a new avatar URL for a user and evict the cached snapshot.
    ///
    /// # Errors
    /// * `User(NotFound)` - Unknown email
    pub async fn update_avatar(&self, email: &str, url: &str) -> Result<User, AuthError> {
        let updated = self.users.set_avatar(email, url).await?;
        self.cache.invalidate(email).await;

        Ok(updated)
    }

    fn issue_pair(&self, email: &str) -> Result<TokenPair, AuthError> {
        let access_token = self.codec.issue(email, Purpose::Access, None)?;
        let refresh_token = self.codec.issue(email, Purpose::Refresh, None)?;

        Ok(TokenPair {
            access_token,
            refresh_token,
        })
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use auth::TokenError;
    use chrono::Utc;
    use mockall::mock;

    use super::*;
    use crate::domain::user::errors::CacheError;
    use crate::domain::user::models::UserId;

    mock! {
        pub TestUserRepository {}

        #[async_trait]
        impl UserRepository for TestUserRepository {
            async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserError>;
            async fn create(&self, new_user: NewUser) -> Result<User, UserError>;
            async fn set_refresh_token<'a, 'b>(&'a self, id: UserId, token: Option<&'b str>) -> Result<(), UserError>;
            async fn set_avatar(&self, email: &str, url: &str) -> Result<User, UserError>;
            async fn confirm(&self, email: &str) -> Result<(), UserError>;
            async fn set_password(&self, id: UserId, password_hash: &str) -> Result<User, UserError>;
        }
    }

    mock! {
        pub TestSnapshotStore {}

        #[async_trait]
        impl UserSnapshotStore for TestSnapshotStore {
            async fn get(&self, email: &str) -> Result<Option<User>, CacheError>;
            async fn set(&self, user: &User) -> Result<(), CacheError>;
            async fn delete(&self, email: &str) -> Result<(), CacheError>;
        }
    }

    const SECRET: &[u8] = b"test_secret_key_at_least_32_bytes!";

    fn hashed(password: &str) -> String {
        PasswordHasher::new().hash(password).unwrap()
    }

    fn test_user(email: &str, password_hash: &str, confirmed: bool) -> User {
        User {
            id: UserId(1),
            username: Username::new("alice".to_string()).unwrap(),
            email: EmailAddress::new(email.to_string()).unwrap(),
            password_hash: password_hash.to_string(),
            avatar: None,
            refresh_token: None,
            confirmed,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn quiet_store() -> MockTestSnapshotStore {
        let mut store = MockTestSnapshotStore::new();
        store.expect_get().returning(|_| Ok(None));
        store.expect_set().returning(|_| Ok(()));
        store.expect_delete().returning(|_| Ok(()));
        store
    }

    fn service(
        repository: MockTestUserRepository,
        store: MockTestSnapshotStore,
    ) -> AuthService<MockTestUserRepository, MockTestSnapshotStore> {
        AuthService::new(
            Arc::new(repository),
            IdentityCache::new(Arc::new(store)),
            TokenCodec::new(SECRET),
        )
    }

    #[tokio::test]
    async fn test_register_hashes_password_and_issues_verification_token() {
        let mut repository = MockTestUserRepository::new();

        repository
            .expect_create()
            .withf(|new_user| {
                new_user.password_hash.starts_with("$argon2")
                    && new_user.email.as_str() == "alice@example.com"
            })
            .times(1)
            .returning(|new_user| {
                Ok(User {
                    id: UserId(1),
                    username: new_user.username,
                    email: new_user.email,
                    password_hash: new_user.password_hash,
                    avatar: Some("https://www.gravatar.com/avatar/abc".to_string()),
                    refresh_token: None,
                    confirmed: false,
                    created_at: Utc::now(),
                    updated_at: Utc::now(),
                })
            });

        let service = service(repository, quiet_store());
        let command = RegisterCommand {
            username: Username::new("alice".to_string()).unwrap(),
            email: EmailAddress::new("alice@example.com".to_string()).unwrap(),
            password: "password123".to_string(),
        };

        let (user, token) = service.register(command).await.unwrap();

        assert!(!user.confirmed);
        // The emailed token is only good for verification
        let codec = TokenCodec::new(SECRET);
        assert_eq!(
            codec.decode(&token, Purpose::EmailVerification).unwrap(),
            "alice@example.com"
        );
        assert!(codec.decode(&token, Purpose::Access).is_err());
    }

    #[tokio::test]
    async fn test_register_duplicate_email_propagates_conflict() {
        let mut repository = MockTestUserRepository::new();

        repository.expect_create().times(1).returning(|new_user| {
            Err(UserError::EmailAlreadyExists(
                new_user.email.as_str().to_string(),
            ))
        });

        let service = service(repository, quiet_store());
        let command = RegisterCommand {
            username: Username::new("alice".to_string()).unwrap(),
            email: EmailAddress::new("alice@example.com".to_string()).unwrap(),
            password: "password123".to_string(),
        };

        let result = service.register(command).await;
        assert!(matches!(
            result,
            Err(AuthError::User(UserError::EmailAlreadyExists(_)))
        ));
    }

    #[tokio::test]
    async fn test_login_success_persists_refresh_token_and_invalidates_cache() {
        let mut repository = MockTestUserRepository::new();
        let mut store = MockTestSnapshotStore::new();
        let password_hash = hashed("password123");

        repository
            .expect_find_by_email()
            .times(1)
            .returning(move |email| Ok(Some(test_user(email, &password_hash, true))));
        repository
            .expect_set_refresh_token()
            .withf(|id, token| *id == UserId(1) && token.is_some())
            .times(1)
            .returning(|_, _| Ok(()));
        store
            .expect_delete()
            .withf(|email| email == "alice@example.com")
            .times(1)
            .returning(|_| Ok(()));

        let service = service(repository, store);
        let pair = service
            .login("alice@example.com", "password123")
            .await
            .unwrap();

        let codec = TokenCodec::new(SECRET);
        assert_eq!(
            codec.decode(&pair.access_token, Purpose::Access).unwrap(),
            "alice@example.com"
        );
        assert_eq!(
            codec.decode(&pair.refresh_token, Purpose::Refresh).unwrap(),
            "alice@example.com"
        );
    }

    #[tokio::test]
    async fn test_login_unknown_email_is_invalid_credentials() {
        let mut repository = MockTestUserRepository::new();

        repository
            .expect_find_by_email()
            .times(1)
            .returning(|_| Ok(None));
        repository.expect_set_refresh_token().times(0);

        let service = service(repository, quiet_store());
        let result = service.login("ghost@example.com", "password123").await;

        assert!(matches!(result, Err(AuthError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_login_unconfirmed_account_is_rejected() {
        let mut repository = MockTestUserRepository::new();
        let password_hash = hashed("password123");

        repository
            .expect_find_by_email()
            .times(1)
            .returning(move |email| Ok(Some(test_user(email, &password_hash, false))));

        let service = service(repository, quiet_store());
        let result = service.login("alice@example.com", "password123").await;

        assert!(matches!(result, Err(AuthError::EmailNotConfirmed)));
    }

    #[tokio::test]
    async fn test_login_wrong_password_is_invalid_credentials() {
        let mut repository = MockTestUserRepository::new();
        let password_hash = hashed("password123");

        repository
            .expect_find_by_email()
            .times(1)
            .returning(move |email| Ok(Some(test_user(email, &password_hash, true))));
        repository.expect_set_refresh_token().times(0);

        let service = service(repository, quiet_store());
        let result = service.login("alice@example.com", "wrong_password").await;

        assert!(matches!(result, Err(AuthError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_refresh_rotates_pair_when_token_matches() {
        let codec = TokenCodec::new(SECRET);
        let presented = codec
            .issue("alice@example.com", Purpose::Refresh, None)
            .unwrap();

        let mut repository = MockTestUserRepository::new();
        let stored = presented.clone();
        repository
            .expect_find_by_email()
            .times(1)
            .returning(move |email| {
                let mut user = test_user(email, "$argon2id$test_hash", true);
                user.refresh_token = Some(stored.clone());
                Ok(Some(user))
            });
        repository
            .expect_set_refresh_token()
            .withf(|_, token| token.is_some())
            .times(1)
            .returning(|_, _| Ok(()));

        let service = service(repository, quiet_store());
        let pair = service.refresh(&presented).await.unwrap();

        assert_eq!(
            codec.decode(&pair.access_token, Purpose::Access).unwrap(),
            "alice@example.com"
        );
    }

    #[tokio::test]
    async fn test_refresh_mismatch_revokes_stored_token() {
        let codec = TokenCodec::new(SECRET);
        let presented = codec
            .issue("alice@example.com", Purpose::Refresh, None)
            .unwrap();

        let mut repository = MockTestUserRepository::new();
        repository
            .expect_find_by_email()
            .times(1)
            .returning(|email| {
                let mut user = test_user(email, "$argon2id$test_hash", true);
                user.refresh_token = Some("a_different_stored_token".to_string());
                Ok(Some(user))
            });
        // Revoke-on-mismatch: the stored token is cleared, not rotated
        repository
            .expect_set_refresh_token()
            .withf(|id, token| *id == UserId(1) && token.is_none())
            .times(1)
            .returning(|_, _| Ok(()));

        let service = service(repository, quiet_store());
        let result = service.refresh(&presented).await;

        assert!(matches!(result, Err(AuthError::RefreshTokenMismatch)));
    }

    #[tokio::test]
    async fn test_refresh_after_revocation_keeps_failing() {
        let codec = TokenCodec::new(SECRET);
        let presented = codec
            .issue("alice@example.com", Purpose::Refresh, None)
            .unwrap();

        // Stored token was already cleared by a previous mismatch; the old
        // refresh token can never succeed again.
        let mut repository = MockTestUserRepository::new();
        repository
            .expect_find_by_email()
            .times(1)
            .returning(|email| Ok(Some(test_user(email, "$argon2id$test_hash", true))));
        repository
            .expect_set_refresh_token()
            .withf(|_, token| token.is_none())
            .times(1)
            .returning(|_, _| Ok(()));

        let service = service(repository, quiet_store());
        let result = service.refresh(&presented).await;

        assert!(matches!(result, Err(AuthError::RefreshTokenMismatch)));
    }

    #[tokio::test]
    async fn test_refresh_rejects_access_token() {
        let codec = TokenCodec::new(SECRET);
        let access = codec
            .issue("alice@example.com", Purpose::Access, None)
            .unwrap();

        let mut repository = MockTestUserRepository::new();
        repository.expect_find_by_email().times(0);

        let service = service(repository, quiet_store());
        let result = service.refresh(&access).await;

        assert!(matches!(
            result,
            Err(AuthError::InvalidToken(TokenError::WrongPurpose { .. }))
        ));
    }

    #[tokio::test]
    async fn test_resolve_returns_cached_user() {
        let codec = TokenCodec::new(SECRET);
        let token = codec
            .issue("alice@example.com", Purpose::Access, None)
            .unwrap();

        let mut repository = MockTestUserRepository::new();
        repository.expect_find_by_email().times(0);

        let mut store = MockTestSnapshotStore::new();
        store
            .expect_get()
            .times(1)
            .returning(|email| Ok(Some(test_user(email, "$argon2id$test_hash", true))));

        let service = service(repository, store);
        let user = service.resolve(&token).await.unwrap();

        assert_eq!(user.email.as_str(), "alice@example.com");
    }

    #[tokio::test]
    async fn test_resolve_unknown_subject_is_invalid_credentials() {
        let codec = TokenCodec::new(SECRET);
        let token = codec
            .issue("ghost@example.com", Purpose::Access, None)
            .unwrap();

        let mut repository = MockTestUserRepository::new();
        repository
            .expect_find_by_email()
            .times(1)
            .returning(|_| Ok(None));

        let service = service(repository, quiet_store());
        let result = service.resolve(&token).await;

        assert!(matches!(result, Err(AuthError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_resolve_rejects_refresh_token() {
        let codec = TokenCodec::new(SECRET);
        let token = codec
            .issue("alice@example.com", Purpose::Refresh, None)
            .unwrap();

        let service = service(MockTestUserRepository::new(), quiet_store());
        let result = service.resolve(&token).await;

        assert!(matches!(
            result,
            Err(AuthError::InvalidToken(TokenError::WrongPurpose { .. }))
        ));
    }

    #[tokio::test]
    async fn test_confirm_email_flips_flag_once() {
        let codec = TokenCodec::new(SECRET);
        let token = codec
            .issue("alice@example.com", Purpose::EmailVerification, None)
            .unwrap();

        let mut repository = MockTestUserRepository::new();
        repository
            .expect_find_by_email()
            .times(1)
            .returning(|email| Ok(Some(test_user(email, "$argon2id$test_hash", false))));
        repository
            .expect_confirm()
            .withf(|email| email == "alice@example.com")
            .times(1)
            .returning(|_| Ok(()));

        let service = service(repository, quiet_store());
        let outcome = service.confirm_email(&token).await.unwrap();

        assert_eq!(outcome, EmailConfirmation::Confirmed);
    }

    #[tokio::test]
    async fn test_confirm_email_second_call_is_noop() {
        let codec = TokenCodec::new(SECRET);
        let token = codec
            .issue("alice@example.com", Purpose::EmailVerification, None)
            .unwrap();

        let mut repository = MockTestUserRepository::new();
        repository
            .expect_find_by_email()
            .times(1)
            .returning(|email| Ok(Some(test_user(email, "$argon2id$test_hash", true))));
        // Already confirmed: no write happens
        repository.expect_confirm().times(0);

        let service = service(repository, quiet_store());
        let outcome = service.confirm_email(&token).await.unwrap();

        assert_eq!(outcome, EmailConfirmation::AlreadyConfirmed);
    }

    #[tokio::test]
    async fn test_request_verification_skips_confirmed_accounts() {
        let mut repository = MockTestUserRepository::new();
        repository
            .expect_find_by_email()
            .times(1)
            .returning(|email| Ok(Some(test_user(email, "$argon2id$test_hash", true))));

        let service = service(repository, quiet_store());
        let (_, token) = service
            .request_verification("alice@example.com")
            .await
            .unwrap();

        assert!(token.is_none());
    }

    #[tokio::test]
    async fn test_reset_password_stores_new_hash() {
        let codec = TokenCodec::new(SECRET);
        let token = codec
            .issue("alice@example.com", Purpose::PasswordReset, None)
            .unwrap();

        let mut repository = MockTestUserRepository::new();
        repository
            .expect_find_by_email()
            .times(1)
            .returning(|email| Ok(Some(test_user(email, "$argon2id$old_hash", true))));
        repository
            .expect_set_password()
            .withf(|id, hash| *id == UserId(1) && hash.starts_with("$argon2"))
            .times(1)
            .returning(|id, hash| {
                let mut user = test_user("alice@example.com", hash, true);
                user.id = id;
                Ok(user)
            });

        let service = service(repository, quiet_store());
        let user = service.reset_password(&token, "new_password").await.unwrap();

        assert!(user.password_hash.starts_with("$argon2"));
    }

    #[tokio::test]
    async fn test_reset_password_rejects_verification_token() {
        let codec = TokenCodec::new(SECRET);
        let token = codec
            .issue("alice@example.com", Purpose::EmailVerification, None)
            .unwrap();

        let service = service(MockTestUserRepository::new(), quiet_store());
        let result = service.reset_password(&token, "new_password").await;

        assert!(matches!(
            result,
            Err(AuthError::InvalidToken(TokenError::WrongPurpose { .. }))
        ));
    }
}
