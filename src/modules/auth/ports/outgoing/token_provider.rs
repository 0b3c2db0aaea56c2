use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Claims embedded in every bearer token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    pub sub: Uuid,
    pub exp: i64,
    pub iat: i64,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum TokenError {
    #[error("Token encoding failed: {0}")]
    EncodingError(String),

    #[error("Token has expired")]
    TokenExpired,

    #[error("Invalid token signature")]
    InvalidSignature,

    #[error("Malformed token")]
    MalformedToken,
}

pub trait TokenProvider: Send + Sync {
    /// Issue a signed token whose subject is `user_id`.
    fn generate_token(&self, user_id: Uuid) -> Result<String, TokenError>;

    /// Verify signature and expiry, returning the embedded claims.
    fn verify_token(&self, token: &str) -> Result<TokenClaims, TokenError>;
}
