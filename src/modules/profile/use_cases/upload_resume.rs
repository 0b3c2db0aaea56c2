use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::profile::domain::entities::Profile;
use crate::modules::profile::ports::outgoing::{
    ProfileRepository, ProfileRepositoryError, ResumeStorage, ResumeStorageError,
};
use crate::modules::profile::use_cases::ResumeUpload;
use std::sync::Arc;

#[derive(Debug, Clone, thiserror::Error)]
pub enum UploadResumeError {
    #[error("Profile not found")]
    ProfileNotFound,

    #[error("Storage error: {0}")]
    StorageFailed(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<ResumeStorageError> for UploadResumeError {
    fn from(error: ResumeStorageError) -> Self {
        match error {
            ResumeStorageError::Io(msg) => UploadResumeError::StorageFailed(msg),
        }
    }
}

impl From<ProfileRepositoryError> for UploadResumeError {
    fn from(error: ProfileRepositoryError) -> Self {
        match error {
            ProfileRepositoryError::ProfileNotFound => UploadResumeError::ProfileNotFound,
            ProfileRepositoryError::DatabaseError(msg) => UploadResumeError::RepositoryError(msg),
        }
    }
}

#[async_trait]
pub trait IUploadResumeUseCase: Send + Sync {
    async fn execute(
        &self,
        user_id: Uuid,
        upload: ResumeUpload,
    ) -> Result<Profile, UploadResumeError>;
}

pub struct UploadResumeUseCase<R>
where
    R: ProfileRepository,
{
    repository: R,
    storage: Arc<dyn ResumeStorage>,
}

impl<R> UploadResumeUseCase<R>
where
    R: ProfileRepository,
{
    pub fn new(repository: R, storage: Arc<dyn ResumeStorage>) -> Self {
        Self {
            repository,
            storage,
        }
    }
}

#[async_trait]
impl<R> IUploadResumeUseCase for UploadResumeUseCase<R>
where
    R: ProfileRepository,
{
    async fn execute(
        &self,
        user_id: Uuid,
        upload: ResumeUpload,
    ) -> Result<Profile, UploadResumeError> {
        // Write the file before touching the profile row so a storage failure
        // leaves the resume list unchanged.
        let stored_path = self
            .storage
            .store(user_id, &upload.filename, &upload.temp_path)
            .await?;
        let profile = self.repository.append_resume(user_id, stored_path).await?;
        Ok(profile)
    }
}
