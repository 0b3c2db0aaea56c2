use actix_multipart::form::{tempfile::TempFile, MultipartForm};
use actix_web::{post, web, Responder};
use tracing::error;

use crate::modules::auth::web::extractors::AuthenticatedUser;
use crate::modules::profile::use_cases::upload_resume::UploadResumeError;
use crate::modules::profile::use_cases::ResumeUpload;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, MultipartForm)]
pub struct UploadResumeForm {
    pub resume: Option<TempFile>,
}

#[post("/resumes")]
pub async fn upload_resume_handler(
    user: AuthenticatedUser,
    MultipartForm(form): MultipartForm<UploadResumeForm>,
    data: web::Data<AppState>,
) -> impl Responder {
    let Some(file) = &form.resume else {
        return ApiResponse::bad_request("VALIDATION_ERROR", "A resume file is required");
    };

    let upload = ResumeUpload {
        filename: file
            .file_name
            .clone()
            .unwrap_or_else(|| "resume.pdf".to_string()),
        temp_path: file.file.path().to_path_buf(),
    };

    match data.upload_resume.execute(user.user_id, upload).await {
        Ok(profile) => {
            // append_resume pushes the new path last
            let path = profile.resumes.last().cloned().unwrap_or_default();
            ApiResponse::success(serde_json::json!({ "path": path }))
        }
        Err(UploadResumeError::ProfileNotFound) => {
            ApiResponse::not_found("PROFILE_NOT_FOUND", "No profile exists for this user")
        }
        Err(UploadResumeError::StorageFailed(e)) => {
            error!(error = %e, "Resume storage failed");
            ApiResponse::storage_error()
        }
        Err(e) => {
            error!(error = %e, "Resume upload failed");
            ApiResponse::internal_error()
        }
    }
}
