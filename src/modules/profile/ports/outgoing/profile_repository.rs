use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::profile::domain::entities::Profile;

/// Full field set for a profile submission.
#[derive(Debug, Clone)]
pub struct ProfileData {
    pub user_id: Uuid,
    pub education: String,
    pub location: String,
    pub phone: String,
    pub skills: Vec<String>,
    pub interests: Vec<String>,
    pub resumes: Vec<String>,
}

/// Partial update: only `Some` fields are overwritten.
#[derive(Debug, Clone, Default)]
pub struct ProfileChanges {
    pub education: Option<String>,
    pub location: Option<String>,
    pub phone: Option<String>,
    pub skills: Option<Vec<String>>,
    pub interests: Option<Vec<String>>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ProfileRepositoryError {
    #[error("Profile not found")]
    ProfileNotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Insert the profile, or overwrite an existing one for the same owner
    /// wholesale. Résumé paths in `data.resumes` are appended to an existing
    /// profile's list rather than replacing it.
    async fn upsert(&self, data: ProfileData) -> Result<Profile, ProfileRepositoryError>;

    async fn find_by_owner(&self, user_id: Uuid)
        -> Result<Option<Profile>, ProfileRepositoryError>;

    async fn apply_changes(
        &self,
        user_id: Uuid,
        changes: ProfileChanges,
    ) -> Result<Profile, ProfileRepositoryError>;

    async fn append_resume(
        &self,
        user_id: Uuid,
        path: String,
    ) -> Result<Profile, ProfileRepositoryError>;

    async fn remove_resume(
        &self,
        user_id: Uuid,
        path: &str,
    ) -> Result<Profile, ProfileRepositoryError>;
}
