use async_trait::async_trait;
use std::path::Path;
use uuid::Uuid;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ResumeStorageError {
    #[error("File storage error: {0}")]
    Io(String),
}

/// Stores uploaded résumé files under owner-derived names.
#[async_trait]
pub trait ResumeStorage: Send + Sync {
    /// Persist the spooled upload at `source` and return the stored path.
    async fn store(
        &self,
        owner_id: Uuid,
        filename: &str,
        source: &Path,
    ) -> Result<String, ResumeStorageError>;

    /// Delete the stored file. Fails when the file does not exist.
    async fn remove(&self, owner_id: Uuid, filename: &str) -> Result<(), ResumeStorageError>;

    /// The stored path a given upload would get, without touching the disk.
    fn stored_path(&self, owner_id: Uuid, filename: &str) -> String;
}
