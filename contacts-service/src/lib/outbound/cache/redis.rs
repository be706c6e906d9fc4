use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use redis::aio::ConnectionManager;
use redis::AsyncCommands;
use serde::Deserialize;
use serde::Serialize;

use crate::domain::user::errors::CacheError;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::models::Username;
use crate::domain::user::ports::UserSnapshotStore;

/// Serialized form of a cached user snapshot.
///
/// Plain fields only; value objects are re-validated when the snapshot is
/// rehydrated, so a corrupted cache entry surfaces as a cache error and
/// the caller degrades to the authoritative store.
#[derive(Debug, Serialize, Deserialize)]
struct CachedUser {
    id: i64,
    username: String,
    email: String,
    password_hash: String,
    avatar: Option<String>,
    refresh_token: Option<String>,
    confirmed: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl CachedUser {
    fn from_user(user: &User) -> Self {
        Self {
            id: user.id.as_i64(),
            username: user.username.as_str().to_string(),
            email: user.email.as_str().to_string(),
            password_hash: user.password_hash.clone(),
            avatar: user.avatar.clone(),
            refresh_token: user.refresh_token.clone(),
            confirmed: user.confirmed,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }

    fn into_user(self) -> Result<User, CacheError> {
        Ok(User {
            id: UserId(self.id),
            username: Username::new(self.username)
                .map_err(|e| CacheError::Serialization(e.to_string()))?,
            email: EmailAddress::new(self.email)
                .map_err(|e| CacheError::Serialization(e.to_string()))?,
            password_hash: self.password_hash,
            avatar: self.avatar,
            refresh_token: self.refresh_token,
            confirmed: self.confirmed,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

/// Redis-backed snapshot store for the identity cache.
///
/// Keys are `user:{email}` with a fixed per-key TTL; Redis handles expiry.
#[derive(Clone)]
pub struct RedisSnapshotStore {
    connection: ConnectionManager,
    ttl_seconds: u64,
}

impl RedisSnapshotStore {
    /// Connect to Redis and build a snapshot store.
    ///
    /// # Arguments
    /// * `url` - Redis connection URL (e.g. "redis://localhost:6379")
    /// * `ttl_seconds` - Snapshot time-to-live
    pub async fn connect(url: &str, ttl_seconds: u64) -> Result<Self, anyhow::Error> {
        let client = redis::Client::open(url)?;
        let connection = ConnectionManager::new(client).await?;

        tracing::info!(url = %url, ttl_seconds, "Redis snapshot store connected");

        Ok(Self {
            connection,
            ttl_seconds,
        })
    }

    fn key(email: &str) -> String {
        format!("user:{}", email.to_lowercase())
    }
}

#[async_trait]
impl UserSnapshotStore for RedisSnapshotStore {
    async fn get(&self, email: &str) -> Result<Option<User>, CacheError> {
        let mut connection = self.connection.clone();

        let value: Option<String> = connection
            .get(Self::key(email))
            .await
            .map_err(|e| CacheError::Unavailable(e.to_string()))?;

        match value {
            Some(json) => {
                let cached: CachedUser = serde_json::from_str(&json)
                    .map_err(|e| CacheError::Serialization(e.to_string()))?;
                cached.into_user().map(Some)
            }
            None => Ok(None),
        }
    }

    async fn set(&self, user: &User) -> Result<(), CacheError> {
        let mut connection = self.connection.clone();

        let json = serde_json::to_string(&CachedUser::from_user(user))
            .map_err(|e| CacheError::Serialization(e.to_string()))?;

        let _: () = connection
            .set_ex(Self::key(user.email.as_str()), json, self.ttl_seconds)
            .await
            .map_err(|e| CacheError::Unavailable(e.to_string()))?;

        Ok(())
    }

    async fn delete(&self, email: &str) -> Result<(), CacheError> {
        let mut connection = self.connection.clone();

        let _: u64 = connection
            .del(Self::key(email))
            .await
            .map_err(|e| CacheError::Unavailable(e.to_string()))?;

        Ok(())
    }
}
