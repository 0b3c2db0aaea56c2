use async_trait::async_trait;

#[derive(Debug, Clone, thiserror::Error)]
pub enum TokenBlacklistError {
    #[error("Blacklist store error: {0}")]
    StoreError(String),
}

/// Append-only set of revoked bearer tokens. Tokens are stored verbatim and
/// never removed; the set is consulted on every authenticated request.
#[async_trait]
pub trait TokenBlacklist: Send + Sync {
    async fn insert(&self, token: &str) -> Result<(), TokenBlacklistError>;
    async fn contains(&self, token: &str) -> Result<bool, TokenBlacklistError>;
}
