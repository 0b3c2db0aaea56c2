use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::profile::domain::entities::Profile;
use crate::modules::profile::ports::outgoing::{
    ProfileData, ProfileRepository, ProfileRepositoryError, ResumeStorage, ResumeStorageError,
};

use super::ResumeUpload;

#[derive(Debug, Clone)]
pub struct CreateProfileRequest {
    pub user_id: Uuid,
    pub education: String,
    pub location: String,
    pub phone: String,
    pub skills: Vec<String>,
    pub interests: Vec<String>,
    pub upload: Option<ResumeUpload>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateProfileError {
    #[error("Resume storage failed: {0}")]
    StorageFailed(#[from] ResumeStorageError),

    #[error("Repository error: {0}")]
    RepositoryError(#[from] ProfileRepositoryError),
}

#[async_trait]
pub trait ICreateProfileUseCase: Send + Sync {
    async fn execute(&self, request: CreateProfileRequest) -> Result<Profile, CreateProfileError>;
}

#[derive(Clone)]
pub struct CreateProfileUseCase<R>
where
    R: ProfileRepository,
{
    repository: R,
    storage: Arc<dyn ResumeStorage>,
}

impl<R> CreateProfileUseCase<R>
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
impl<R> ICreateProfileUseCase for CreateProfileUseCase<R>
where
    R: ProfileRepository,
{
    async fn execute(&self, request: CreateProfileRequest) -> Result<Profile, CreateProfileError> {
        let mut resumes = Vec::new();
        if let Some(upload) = &request.upload {
            let stored = self
                .storage
                .store(request.user_id, &upload.filename, &upload.temp_path)
                .await?;
            resumes.push(stored);
        }

        let profile = self
            .repository
            .upsert(ProfileData {
                user_id: request.user_id,
                education: request.education,
                location: request.location,
                phone: request.phone,
                skills: request.skills,
                interests: request.interests,
                resumes,
            })
            .await?;

        Ok(profile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::profile::ports::outgoing::ProfileChanges;
    use std::path::{Path, PathBuf};
    use tokio::sync::Mutex;

    #[derive(Default)]
    struct MockProfileRepository {
        upserted: Mutex<Option<ProfileData>>,
    }

    #[async_trait]
    impl ProfileRepository for MockProfileRepository {
        async fn upsert(&self, data: ProfileData) -> Result<Profile, ProfileRepositoryError> {
            let profile = Profile {
                id: Uuid::new_v4(),
                user_id: data.user_id,
                education: data.education.clone(),
                location: data.location.clone(),
                phone: data.phone.clone(),
                skills: data.skills.clone(),
                interests: data.interests.clone(),
                resumes: data.resumes.clone(),
                created_at: chrono::Utc::now(),
                updated_at: chrono::Utc::now(),
            };
            *self.upserted.lock().await = Some(data);
            Ok(profile)
        }

        async fn find_by_owner(
            &self,
            _user_id: Uuid,
        ) -> Result<Option<Profile>, ProfileRepositoryError> {
            Ok(None)
        }

        async fn apply_changes(
            &self,
            _user_id: Uuid,
            _changes: ProfileChanges,
        ) -> Result<Profile, ProfileRepositoryError> {
            Err(ProfileRepositoryError::ProfileNotFound)
        }

        async fn append_resume(
            &self,
            _user_id: Uuid,
            _path: String,
        ) -> Result<Profile, ProfileRepositoryError> {
            Err(ProfileRepositoryError::ProfileNotFound)
        }

        async fn remove_resume(
            &self,
            _user_id: Uuid,
            _path: &str,
        ) -> Result<Profile, ProfileRepositoryError> {
            Err(ProfileRepositoryError::ProfileNotFound)
        }
    }

    struct FakeStorage {
        should_fail: bool,
    }

    #[async_trait]
    impl ResumeStorage for FakeStorage {
        async fn store(
            &self,
            owner_id: Uuid,
            filename: &str,
            _source: &Path,
        ) -> Result<String, ResumeStorageError> {
            if self.should_fail {
                return Err(ResumeStorageError::Io("disk full".to_string()));
            }
            Ok(self.stored_path(owner_id, filename))
        }

        async fn remove(&self, _owner_id: Uuid, _filename: &str) -> Result<(), ResumeStorageError> {
            Ok(())
        }

        fn stored_path(&self, owner_id: Uuid, filename: &str) -> String {
            format!("uploads/{}_{}", owner_id, filename)
        }
    }

    fn request(user_id: Uuid, upload: Option<ResumeUpload>) -> CreateProfileRequest {
        CreateProfileRequest {
            user_id,
            education: "Undergraduate".to_string(),
            location: "Delhi".to_string(),
            phone: "+911234567890".to_string(),
            skills: vec!["HTML".to_string(), "CSS".to_string()],
            interests: vec!["IT".to_string()],
            upload,
        }
    }

    #[tokio::test]
    async fn create_without_file_leaves_resume_list_empty() {
        let use_case = CreateProfileUseCase::new(
            MockProfileRepository::default(),
            Arc::new(FakeStorage { should_fail: false }),
        );

        let profile = use_case.execute(request(Uuid::new_v4(), None)).await.unwrap();
        assert!(profile.resumes.is_empty());
    }

    #[tokio::test]
    async fn create_with_file_records_stored_path() {
        let user_id = Uuid::new_v4();
        let use_case = CreateProfileUseCase::new(
            MockProfileRepository::default(),
            Arc::new(FakeStorage { should_fail: false }),
        );

        let upload = ResumeUpload {
            filename: "cv.pdf".to_string(),
            temp_path: PathBuf::from("/tmp/spooled"),
        };

        let profile = use_case
            .execute(request(user_id, Some(upload)))
            .await
            .unwrap();
        assert_eq!(profile.resumes, vec![format!("uploads/{}_cv.pdf", user_id)]);
    }

    #[tokio::test]
    async fn storage_failure_aborts_before_persisting() {
        let repo = MockProfileRepository::default();
        let use_case =
            CreateProfileUseCase::new(repo, Arc::new(FakeStorage { should_fail: true }));

        let upload = ResumeUpload {
            filename: "cv.pdf".to_string(),
            temp_path: PathBuf::from("/tmp/spooled"),
        };

        let result = use_case.execute(request(Uuid::new_v4(), Some(upload))).await;
        assert!(matches!(result, Err(CreateProfileError::StorageFailed(_))));
    }
}
