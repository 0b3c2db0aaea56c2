use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::profile::domain::entities::Profile;
use crate::modules::profile::ports::outgoing::{
    ProfileChanges, ProfileRepository, ProfileRepositoryError,
};

/// Partial update payload. Fields left out of the request body stay untouched.
#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct UpdateProfileRequest {
    pub education: Option<String>,
    pub location: Option<String>,
    pub phone: Option<String>,
    pub skills: Option<Vec<String>>,
    pub interests: Option<Vec<String>>,
}

impl UpdateProfileRequest {
    fn into_changes(self) -> ProfileChanges {
        ProfileChanges {
            education: self.education,
            location: self.location,
            phone: self.phone,
            skills: self.skills,
            interests: self.interests,
        }
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateProfileError {
    #[error("Profile not found")]
    ProfileNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<ProfileRepositoryError> for UpdateProfileError {
    fn from(error: ProfileRepositoryError) -> Self {
        match error {
            ProfileRepositoryError::ProfileNotFound => UpdateProfileError::ProfileNotFound,
            ProfileRepositoryError::DatabaseError(msg) => UpdateProfileError::RepositoryError(msg),
        }
    }
}

#[async_trait]
pub trait IUpdateProfileUseCase: Send + Sync {
    async fn execute(
        &self,
        user_id: Uuid,
        request: UpdateProfileRequest,
    ) -> Result<Profile, UpdateProfileError>;
}

#[derive(Clone)]
pub struct UpdateProfileUseCase<R>
where
    R: ProfileRepository,
{
    repository: R,
}

impl<R> UpdateProfileUseCase<R>
where
    R: ProfileRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> IUpdateProfileUseCase for UpdateProfileUseCase<R>
where
    R: ProfileRepository,
{
    async fn execute(
        &self,
        user_id: Uuid,
        request: UpdateProfileRequest,
    ) -> Result<Profile, UpdateProfileError> {
        let profile = self
            .repository
            .apply_changes(user_id, request.into_changes())
            .await?;
        Ok(profile)
    }
}
