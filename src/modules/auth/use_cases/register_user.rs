use std::sync::Arc;

use async_trait::async_trait;
use email_address::EmailAddress;
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

use crate::modules::auth::ports::outgoing::{
    HashError, NewUser, PasswordHasher, UserQuery, UserQueryError, UserRepository,
    UserRepositoryError,
};

// ========================= Register Request =========================

/// Validated registration request; construction guarantees non-empty fields
/// and a syntactically valid, lowercased email.
#[derive(Debug, Clone)]
pub struct RegisterRequest {
    name: String,
    email: String,
    password: String,
}

#[derive(Debug, Clone)]
pub enum RegisterRequestError {
    EmptyName,
    EmptyEmail,
    InvalidEmailFormat,
    EmptyPassword,
}

impl std::fmt::Display for RegisterRequestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RegisterRequestError::EmptyName => write!(f, "Name cannot be empty"),
            RegisterRequestError::EmptyEmail => write!(f, "Email cannot be empty"),
            RegisterRequestError::InvalidEmailFormat => write!(f, "Invalid email format"),
            RegisterRequestError::EmptyPassword => write!(f, "Password cannot be empty"),
        }
    }
}

impl std::error::Error for RegisterRequestError {}

impl RegisterRequest {
    pub fn new(
        name: String,
        email: String,
        password: String,
    ) -> Result<Self, RegisterRequestError> {
        let name = name.trim().to_string();
        if name.is_empty() {
            return Err(RegisterRequestError::EmptyName);
        }

        let email = email.trim().to_lowercase();
        if email.is_empty() {
            return Err(RegisterRequestError::EmptyEmail);
        }
        if !EmailAddress::is_valid(&email) {
            return Err(RegisterRequestError::InvalidEmailFormat);
        }

        let password = password.trim().to_string();
        if password.is_empty() {
            return Err(RegisterRequestError::EmptyPassword);
        }

        Ok(Self {
            name,
            email,
            password,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

impl<'de> Deserialize<'de> for RegisterRequest {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct RegisterRequestHelper {
            name: String,
            email: String,
            password: String,
        }

        let helper = RegisterRequestHelper::deserialize(deserializer)?;
        RegisterRequest::new(helper.name, helper.email, helper.password)
            .map_err(serde::de::Error::custom)
    }
}

// ====================== Register Error =============================

#[derive(Debug, Clone, thiserror::Error)]
pub enum RegisterError {
    #[error("User already exists")]
    UserAlreadyExists,

    #[error("Password hashing failed: {0}")]
    HashingFailed(#[from] HashError),

    #[error("Query error: {0}")]
    QueryError(#[from] UserQueryError),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<UserRepositoryError> for RegisterError {
    fn from(error: UserRepositoryError) -> Self {
        match error {
            UserRepositoryError::UserAlreadyExists => RegisterError::UserAlreadyExists,
            UserRepositoryError::DatabaseError(msg) => RegisterError::RepositoryError(msg),
        }
    }
}

// ====================== Register Response =============================

#[derive(Debug, Clone, Serialize)]
pub struct RegisterResponse {
    pub user_id: Uuid,
}

// ====================== Register Use Case =============================

#[async_trait]
pub trait IRegisterUserUseCase: Send + Sync {
    async fn execute(&self, request: RegisterRequest) -> Result<RegisterResponse, RegisterError>;
}

#[derive(Clone)]
pub struct RegisterUserUseCase<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    query: Q,
    repository: R,
    password_hasher: Arc<dyn PasswordHasher>,
}

impl<Q, R> RegisterUserUseCase<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    pub fn new(query: Q, repository: R, password_hasher: Arc<dyn PasswordHasher>) -> Self {
        Self {
            query,
            repository,
            password_hasher,
        }
    }
}

#[async_trait]
impl<Q, R> IRegisterUserUseCase for RegisterUserUseCase<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    async fn execute(&self, request: RegisterRequest) -> Result<RegisterResponse, RegisterError> {
        if self.query.find_by_email(request.email()).await?.is_some() {
            return Err(RegisterError::UserAlreadyExists);
        }

        let password_hash = self.password_hasher.hash_password(request.password())?;

        // A concurrent registration can still slip past the lookup; the
        // repository maps the unique violation back to UserAlreadyExists.
        let user = self
            .repository
            .create_user(NewUser {
                name: request.name().to_string(),
                email: request.email().to_string(),
                password_hash,
            })
            .await?;

        Ok(RegisterResponse { user_id: user.id })
    }
}
