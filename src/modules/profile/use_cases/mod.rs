pub mod create_profile;
pub mod delete_resume;
pub mod fetch_profile;
pub mod update_profile;
pub mod upload_resume;

/// A spooled multipart upload handed from the web layer to a use case.
#[derive(Debug, Clone)]
pub struct ResumeUpload {
    pub filename: String,
    pub temp_path: std::path::PathBuf,
}
