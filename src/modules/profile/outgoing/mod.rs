pub mod entity;
pub mod profile_repository_postgres;
pub mod resume_storage_local;
