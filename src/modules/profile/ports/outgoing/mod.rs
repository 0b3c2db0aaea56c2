pub mod profile_repository;
pub mod resume_storage;

pub use profile_repository::{
    ProfileChanges, ProfileData, ProfileRepository, ProfileRepositoryError,
};
pub use resume_storage::{ResumeStorage, ResumeStorageError};
