use async_trait::async_trait;
use deadpool_redis::Pool;
use deadpool_redis::redis::AsyncCommands;
use std::sync::Arc;

use crate::modules::auth::ports::outgoing::{TokenBlacklist, TokenBlacklistError};

fn revoked_key(token: &str) -> String {
    format!("revoked_token:{}", token)
}

/// Redis-backed revocation list. Entries are written without a TTL: the list
/// is append-only and never swept.
#[derive(Clone)]
pub struct RedisTokenBlacklist {
    pool: Arc<Pool>,
}

impl RedisTokenBlacklist {
    pub fn new(pool: Arc<Pool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TokenBlacklist for RedisTokenBlacklist {
    async fn insert(&self, token: &str) -> Result<(), TokenBlacklistError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|e| TokenBlacklistError::StoreError(e.to_string()))?;

        conn.set::<_, _, ()>(revoked_key(token), 1)
            .await
            .map_err(|e| TokenBlacklistError::StoreError(e.to_string()))?;

        Ok(())
    }

    async fn contains(&self, token: &str) -> Result<bool, TokenBlacklistError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|e| TokenBlacklistError::StoreError(e.to_string()))?;

        conn.exists(revoked_key(token))
            .await
            .map_err(|e| TokenBlacklistError::StoreError(e.to_string()))
    }
}
