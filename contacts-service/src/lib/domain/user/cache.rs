use std::sync::Arc;

use crate::domain::user::errors::UserError;
use crate::domain::user::models::User;
use crate::domain::user::ports::UserRepository;
use crate::domain::user::ports::UserSnapshotStore;

/// Write-through identity cache in front of the authoritative user store.
///
/// Snapshots expire on a fixed TTL owned by the snapshot store. The cache
/// is never authoritative: a snapshot may be stale for at most the TTL,
/// and any snapshot-store failure degrades to the authoritative load.
pub struct IdentityCache<S>
where
    S: UserSnapshotStore,
{
    store: Arc<S>,
}

impl<S> IdentityCache<S>
where
    S: UserSnapshotStore,
{
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Resolve an email to a user, preferring the cached snapshot.
    ///
    /// On a miss the authoritative repository is consulted and the result
    /// repopulates the cache. A repository "not found" propagates as
    /// `NotFound` and is never cached, so a later lookup for the same
    /// email hits the repository again.
    ///
    /// # Errors
    /// * `NotFound` - No user with this email in the authoritative store
    /// * `DatabaseError` - Authoritative load failed
    pub async fn get_or_load<R>(&self, email: &str, users: &R) -> Result<User, UserError>
    where
        R: UserRepository,
    {
        match self.store.get(email).await {
            Ok(Some(user)) => {
                tracing::debug!(email = %email, "Identity resolved from cache");
                return Ok(user);
            }
            Ok(None) => {}
            Err(e) => {
                tracing::warn!(email = %email, error = %e, "Snapshot store read failed, falling back to user store");
            }
        }

        let user = users
            .find_by_email(email)
            .await?
            .ok_or_else(|| UserError::NotFound(email.to_string()))?;

        if let Err(e) = self.store.set(&user).await {
            tracing::warn!(email = %email, error = %e, "Failed to populate snapshot store");
        }

        Ok(user)
    }

    /// Evict the snapshot for an email.
    ///
    /// Best-effort: eviction failures are logged and swallowed, bounded by
    /// the snapshot TTL.
    pub async fn invalidate(&self, email: &str) {
        if let Err(e) = self.store.delete(email).await {
            tracing::warn!(email = %email, error = %e, "Failed to evict snapshot");
        }
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use chrono::Utc;
    use mockall::mock;

    use super::*;
    use crate::domain::user::errors::CacheError;
    use crate::domain::user::models::EmailAddress;
    use crate::domain::user::models::NewUser;
    use crate::domain::user::models::UserId;
    use crate::domain::user::models::Username;

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

    fn test_user(email: &str) -> User {
        User {
            id: UserId(1),
            username: Username::new("alice".to_string()).unwrap(),
            email: EmailAddress::new(email.to_string()).unwrap(),
            password_hash: "$argon2id$test_hash".to_string(),
            avatar: None,
            refresh_token: None,
            confirmed: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_cache_hit_skips_repository() {
        let mut store = MockTestSnapshotStore::new();
        let mut repository = MockTestUserRepository::new();

        store
            .expect_get()
            .withf(|email| email == "alice@example.com")
            .times(1)
            .returning(|email| Ok(Some(test_user(email))));
        repository.expect_find_by_email().times(0);

        let cache = IdentityCache::new(Arc::new(store));
        let user = cache
            .get_or_load("alice@example.com", &repository)
            .await
            .unwrap();

        assert_eq!(user.email.as_str(), "alice@example.com");
    }

    #[tokio::test]
    async fn test_cache_miss_loads_and_populates() {
        let mut store = MockTestSnapshotStore::new();
        let mut repository = MockTestUserRepository::new();

        store.expect_get().times(1).returning(|_| Ok(None));
        repository
            .expect_find_by_email()
            .withf(|email| email == "alice@example.com")
            .times(1)
            .returning(|email| Ok(Some(test_user(email))));
        store
            .expect_set()
            .withf(|user| user.email.as_str() == "alice@example.com")
            .times(1)
            .returning(|_| Ok(()));

        let cache = IdentityCache::new(Arc::new(store));
        let user = cache
            .get_or_load("alice@example.com", &repository)
            .await
            .unwrap();

        assert_eq!(user.id, UserId(1));
    }

    #[tokio::test]
    async fn test_not_found_is_never_cached() {
        let mut store = MockTestSnapshotStore::new();
        let mut repository = MockTestUserRepository::new();

        // Two resolution attempts both miss the cache and hit the loader;
        // the miss is not memoized.
        store.expect_get().times(2).returning(|_| Ok(None));
        store.expect_set().times(0);
        repository
            .expect_find_by_email()
            .times(2)
            .returning(|_| Ok(None));

        let cache = IdentityCache::new(Arc::new(store));

        for _ in 0..2 {
            let result = cache.get_or_load("ghost@example.com", &repository).await;
            assert!(matches!(result, Err(UserError::NotFound(_))));
        }
    }

    #[tokio::test]
    async fn test_store_read_failure_degrades_to_loader() {
        let mut store = MockTestSnapshotStore::new();
        let mut repository = MockTestUserRepository::new();

        store
            .expect_get()
            .times(1)
            .returning(|_| Err(CacheError::Unavailable("connection refused".to_string())));
        repository
            .expect_find_by_email()
            .times(1)
            .returning(|email| Ok(Some(test_user(email))));
        store.expect_set().times(1).returning(|_| Ok(()));

        let cache = IdentityCache::new(Arc::new(store));
        let user = cache
            .get_or_load("alice@example.com", &repository)
            .await
            .unwrap();

        assert_eq!(user.email.as_str(), "alice@example.com");
    }

    #[tokio::test]
    async fn test_store_write_failure_still_returns_user() {
        let mut store = MockTestSnapshotStore::new();
        let mut repository = MockTestUserRepository::new();

        store.expect_get().times(1).returning(|_| Ok(None));
        repository
            .expect_find_by_email()
            .times(1)
            .returning(|email| Ok(Some(test_user(email))));
        store
            .expect_set()
            .times(1)
            .returning(|_| Err(CacheError::Unavailable("connection refused".to_string())));

        let cache = IdentityCache::new(Arc::new(store));
        let result = cache.get_or_load("alice@example.com", &repository).await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_invalidate_swallows_store_errors() {
        let mut store = MockTestSnapshotStore::new();

        store
            .expect_delete()
            .withf(|email| email == "alice@example.com")
            .times(1)
            .returning(|_| Err(CacheError::Unavailable("connection refused".to_string())));

        let cache = IdentityCache::new(Arc::new(store));
        cache.invalidate("alice@example.com").await;
    }
}
