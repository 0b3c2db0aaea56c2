use async_trait::async_trait;
use serde::Serialize;
use tracing::info;

use crate::modules::auth::ports::outgoing::{TokenBlacklist, TokenBlacklistError};

// ====================== Logout Response =============================

#[derive(Debug, Clone, Serialize)]
pub struct LogoutResponse {
    pub message: String,
}

// ====================== Logout Error =============================

#[derive(Debug, Clone, thiserror::Error)]
pub enum LogoutError {
    #[error("Token revocation failed: {0}")]
    RevocationFailed(#[from] TokenBlacklistError),
}

// ====================== Logout Use Case =============================

#[async_trait]
pub trait ILogoutUseCase: Send + Sync {
    /// `token` is the raw bearer token the request authenticated with. It is
    /// stored verbatim; revoking an already-revoked token is a no-op.
    async fn execute(&self, token: &str) -> Result<LogoutResponse, LogoutError>;
}

#[derive(Clone)]
pub struct LogoutUseCase<B>
where
    B: TokenBlacklist,
{
    blacklist: B,
}

impl<B> LogoutUseCase<B>
where
    B: TokenBlacklist,
{
    pub fn new(blacklist: B) -> Self {
        Self { blacklist }
    }
}

#[async_trait]
impl<B> ILogoutUseCase for LogoutUseCase<B>
where
    B: TokenBlacklist,
{
    async fn execute(&self, token: &str) -> Result<LogoutResponse, LogoutError> {
        self.blacklist.insert(token).await?;
        info!("Bearer token revoked");

        Ok(LogoutResponse {
            message: "Logged out successfully".to_string(),
        })
    }
}
