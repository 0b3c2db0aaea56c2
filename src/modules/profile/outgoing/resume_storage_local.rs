use async_trait::async_trait;
use std::path::{Path, PathBuf};
use uuid::Uuid;

use crate::modules::profile::ports::outgoing::{ResumeStorage, ResumeStorageError};

/// Stores uploaded resumes on the local filesystem under a single
/// directory, one file per upload named `{owner_id}_{filename}`.
#[derive(Clone, Debug)]
pub struct LocalResumeStorage {
    root: PathBuf,
}

impl LocalResumeStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    // Strips any directory components a client may have smuggled into
    // the uploaded filename.
    fn sanitize(filename: &str) -> String {
        Path::new(filename)
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "resume".to_string())
    }

    fn target(&self, owner_id: Uuid, filename: &str) -> PathBuf {
        self.root
            .join(format!("{}_{}", owner_id, Self::sanitize(filename)))
    }
}

#[async_trait]
impl ResumeStorage for LocalResumeStorage {
    async fn store(
        &self,
        owner_id: Uuid,
        filename: &str,
        source: &Path,
    ) -> Result<String, ResumeStorageError> {
        tokio::fs::create_dir_all(&self.root)
            .await
            .map_err(|e| ResumeStorageError::Io(e.to_string()))?;

        let target = self.target(owner_id, filename);
        tokio::fs::copy(source, &target)
            .await
            .map_err(|e| ResumeStorageError::Io(e.to_string()))?;

        Ok(target.to_string_lossy().into_owned())
    }

    async fn remove(&self, owner_id: Uuid, filename: &str) -> Result<(), ResumeStorageError> {
        let target = self.target(owner_id, filename);
        tokio::fs::remove_file(&target)
            .await
            .map_err(|e| ResumeStorageError::Io(e.to_string()))
    }

    fn stored_path(&self, owner_id: Uuid, filename: &str) -> String {
        self.target(owner_id, filename).to_string_lossy().into_owned()
    }
}
