use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::ports::outgoing::{TokenBlacklist, TokenBlacklistError, TokenProvider};

const TEST_SECRET: &str = "test_secret_key_at_least_32_chars_long!";

fn test_jwt_service() -> JwtTokenService {
    JwtTokenService::new(JwtConfig {
        secret: TEST_SECRET.to_string(),
        expiry_seconds: 86400,
    })
}

/// Blacklist that never contains anything. Handler tests that exercise
/// revocation build their own fake instead.
#[derive(Default, Clone)]
pub struct EmptyBlacklist;

#[async_trait]
impl TokenBlacklist for EmptyBlacklist {
    async fn insert(&self, _token: &str) -> Result<(), TokenBlacklistError> {
        Ok(())
    }

    async fn contains(&self, _token: &str) -> Result<bool, TokenBlacklistError> {
        Ok(false)
    }
}

/// App data pair the auth extractor expects, wired to the shared test
/// signing key.
pub fn auth_app_data() -> (Arc<dyn TokenProvider>, Arc<dyn TokenBlacklist>) {
    (Arc::new(test_jwt_service()), Arc::new(EmptyBlacklist))
}

/// A valid token for a throwaway subject.
pub fn bearer_token() -> String {
    bearer_token_for(Uuid::new_v4())
}

/// A valid token whose subject is `user_id`, verifiable by the provider
/// from [`auth_app_data`].
pub fn bearer_token_for(user_id: Uuid) -> String {
    test_jwt_service()
        .generate_token(user_id)
        .expect("test token generation failed")
}
