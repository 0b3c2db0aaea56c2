use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::profile::domain::entities::Profile;
use crate::modules::profile::ports::outgoing::{
    ProfileRepository, ProfileRepositoryError, ResumeStorage, ResumeStorageError,
};
use std::sync::Arc;

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteResumeError {
    #[error("Profile not found")]
    ProfileNotFound,

    #[error("Storage error: {0}")]
    StorageFailed(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<ResumeStorageError> for DeleteResumeError {
    fn from(error: ResumeStorageError) -> Self {
        match error {
            ResumeStorageError::Io(msg) => DeleteResumeError::StorageFailed(msg),
        }
    }
}

impl From<ProfileRepositoryError> for DeleteResumeError {
    fn from(error: ProfileRepositoryError) -> Self {
        match error {
            ProfileRepositoryError::ProfileNotFound => DeleteResumeError::ProfileNotFound,
            ProfileRepositoryError::DatabaseError(msg) => DeleteResumeError::RepositoryError(msg),
        }
    }
}

#[async_trait]
pub trait IDeleteResumeUseCase: Send + Sync {
    async fn execute(&self, user_id: Uuid, filename: &str) -> Result<Profile, DeleteResumeError>;
}

pub struct DeleteResumeUseCase<R>
where
    R: ProfileRepository,
{
    repository: R,
    storage: Arc<dyn ResumeStorage>,
}

impl<R> DeleteResumeUseCase<R>
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
impl<R> IDeleteResumeUseCase for DeleteResumeUseCase<R>
where
    R: ProfileRepository,
{
    async fn execute(&self, user_id: Uuid, filename: &str) -> Result<Profile, DeleteResumeError> {
        // Delete the file first. If that fails the resume list keeps the
        // entry, so the caller can retry later.
        self.storage.remove(user_id, filename).await?;
        let stored_path = self.storage.stored_path(user_id, filename);
        let profile = self.repository.remove_resume(user_id, &stored_path).await?;
        Ok(profile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::profile::ports::outgoing::{ProfileChanges, ProfileData};
    use std::path::Path;
    use std::sync::Mutex;

    struct MockProfileRepository {
        existing: Option<Profile>,
        removed: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl ProfileRepository for MockProfileRepository {
        async fn upsert(&self, _data: ProfileData) -> Result<Profile, ProfileRepositoryError> {
            Err(ProfileRepositoryError::DatabaseError("unused".to_string()))
        }

        async fn find_by_owner(
            &self,
            _user_id: Uuid,
        ) -> Result<Option<Profile>, ProfileRepositoryError> {
            Ok(self.existing.clone())
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
            path: &str,
        ) -> Result<Profile, ProfileRepositoryError> {
            let Some(mut profile) = self.existing.clone() else {
                return Err(ProfileRepositoryError::ProfileNotFound);
            };
            profile.resumes.retain(|p| p != path);
            self.removed.lock().unwrap().push(path.to_string());
            Ok(profile)
        }
    }

    struct FakeStorage {
        fail: bool,
        removed: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl ResumeStorage for FakeStorage {
        async fn store(
            &self,
            owner_id: Uuid,
            filename: &str,
            _source: &Path,
        ) -> Result<String, ResumeStorageError> {
            Ok(self.stored_path(owner_id, filename))
        }

        async fn remove(&self, _owner_id: Uuid, filename: &str) -> Result<(), ResumeStorageError> {
            if self.fail {
                return Err(ResumeStorageError::Io("permission denied".to_string()));
            }
            self.removed.lock().unwrap().push(filename.to_string());
            Ok(())
        }

        fn stored_path(&self, owner_id: Uuid, filename: &str) -> String {
            format!("uploads/{}_{}", owner_id, filename)
        }
    }

    fn profile_with_resume(user_id: Uuid, path: &str) -> Profile {
        Profile {
            id: Uuid::new_v4(),
            user_id,
            education: "Graduate".to_string(),
            location: "Delhi".to_string(),
            phone: "+911234567890".to_string(),
            skills: vec![],
            interests: vec![],
            resumes: vec![path.to_string()],
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        }
    }

    #[tokio::test]
    async fn removes_file_then_list_entry() {
        let user_id = Uuid::new_v4();
        let stored = format!("uploads/{}_cv.pdf", user_id);
        let use_case = DeleteResumeUseCase::new(
            MockProfileRepository {
                existing: Some(profile_with_resume(user_id, &stored)),
                removed: Mutex::new(vec![]),
            },
            Arc::new(FakeStorage {
                fail: false,
                removed: Mutex::new(vec![]),
            }),
        );

        let profile = use_case.execute(user_id, "cv.pdf").await.unwrap();
        assert!(profile.resumes.is_empty());
    }

    #[tokio::test]
    async fn storage_failure_keeps_list_entry() {
        let user_id = Uuid::new_v4();
        let stored = format!("uploads/{}_cv.pdf", user_id);
        let use_case = DeleteResumeUseCase::new(
            MockProfileRepository {
                existing: Some(profile_with_resume(user_id, &stored)),
                removed: Mutex::new(vec![]),
            },
            Arc::new(FakeStorage {
                fail: true,
                removed: Mutex::new(vec![]),
            }),
        );

        let result = use_case.execute(user_id, "cv.pdf").await;
        assert!(matches!(result, Err(DeleteResumeError::StorageFailed(_))));
    }
}
