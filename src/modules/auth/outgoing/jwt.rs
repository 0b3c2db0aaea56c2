use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use std::env;
use std::fmt;
use uuid::Uuid;

use crate::modules::auth::ports::outgoing::{TokenClaims, TokenError, TokenProvider};

#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret: String,
    /// Token lifetime in seconds. Defaults to 24 hours.
    pub expiry_seconds: i64,
}

impl JwtConfig {
    /// Load from environment. Fatal when `JWT_SECRET` is unset or too short;
    /// the process must not serve traffic with a weak signing key.
    pub fn from_env() -> Self {
        let secret = env::var("JWT_SECRET").expect("JWT_SECRET must be set");
        if secret.len() < 32 {
            panic!("JWT_SECRET must be at least 32 characters long for HS256");
        }

        let expiry_seconds = env::var("JWT_EXPIRY")
            .unwrap_or_else(|_| "86400".to_string())
            .parse::<i64>()
            .unwrap_or_else(|_| panic!("Invalid JWT_EXPIRY value"));
        if expiry_seconds <= 0 {
            panic!("JWT_EXPIRY must be positive");
        }

        Self {
            secret,
            expiry_seconds,
        }
    }
}

#[derive(Clone)]
pub struct JwtTokenService {
    config: JwtConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl fmt::Debug for JwtTokenService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtTokenService")
            .field("expiry_seconds", &self.config.expiry_seconds)
            .finish()
    }
}

impl JwtTokenService {
    pub fn new(config: JwtConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());

        Self {
            config,
            encoding_key,
            decoding_key,
        }
    }
}

impl TokenProvider for JwtTokenService {
    fn generate_token(&self, user_id: Uuid) -> Result<String, TokenError> {
        let now = Utc::now();
        let expiration = now + Duration::seconds(self.config.expiry_seconds);

        let claims = TokenClaims {
            sub: user_id,
            exp: expiration.timestamp(),
            iat: now.timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| TokenError::EncodingError(e.to_string()))
    }

    fn verify_token(&self, token: &str) -> Result<TokenClaims, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        // Hard expiry boundary: a token issued at T is rejected past T+expiry.
        validation.leeway = 0;

        let decoded = decode::<TokenClaims>(token, &self.decoding_key, &validation).map_err(
            |e| {
                use jsonwebtoken::errors::ErrorKind;

                match e.kind() {
                    ErrorKind::ExpiredSignature => {
                        tracing::debug!("Token verification failed: expired");
                        TokenError::TokenExpired
                    }
                    ErrorKind::InvalidSignature => {
                        tracing::warn!("Token verification failed: invalid signature");
                        TokenError::InvalidSignature
                    }
                    _ => {
                        tracing::debug!("Token verification failed: malformed token");
                        TokenError::MalformedToken
                    }
                }
            },
        )?;

        Ok(decoded.claims)
    }
}
