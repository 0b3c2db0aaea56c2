use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::profile::domain::entities::Profile;
use crate::modules::profile::ports::outgoing::{ProfileRepository, ProfileRepositoryError};

#[derive(Debug, Clone, thiserror::Error)]
pub enum FetchProfileError {
    #[error("Profile not found")]
    ProfileNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<ProfileRepositoryError> for FetchProfileError {
    fn from(error: ProfileRepositoryError) -> Self {
        match error {
            ProfileRepositoryError::ProfileNotFound => FetchProfileError::ProfileNotFound,
            ProfileRepositoryError::DatabaseError(msg) => FetchProfileError::RepositoryError(msg),
        }
    }
}

#[async_trait]
pub trait IFetchProfileUseCase: Send + Sync {
    async fn execute(&self, user_id: Uuid) -> Result<Profile, FetchProfileError>;
}

#[derive(Clone)]
pub struct FetchProfileUseCase<R>
where
    R: ProfileRepository,
{
    repository: R,
}

impl<R> FetchProfileUseCase<R>
where
    R: ProfileRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> IFetchProfileUseCase for FetchProfileUseCase<R>
where
    R: ProfileRepository,
{
    async fn execute(&self, user_id: Uuid) -> Result<Profile, FetchProfileError> {
        self.repository
            .find_by_owner(user_id)
            .await?
            .ok_or(FetchProfileError::ProfileNotFound)
    }
}
