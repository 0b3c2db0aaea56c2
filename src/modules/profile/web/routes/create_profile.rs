use actix_multipart::form::{tempfile::TempFile, text::Text, MultipartForm};
use actix_web::{post, web, Responder};
use tracing::error;

use crate::modules::auth::web::extractors::AuthenticatedUser;
use crate::modules::profile::use_cases::create_profile::{
    CreateProfileError, CreateProfileRequest,
};
use crate::modules::profile::use_cases::ResumeUpload;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Multipart payload. `skills` and `interests` are repeated text fields,
/// `resume` is an optional file part.
#[derive(Debug, MultipartForm)]
pub struct CreateProfileForm {
    pub education: Text<String>,
    pub location: Text<String>,
    pub phone: Text<String>,
    pub skills: Vec<Text<String>>,
    pub interests: Vec<Text<String>>,
    pub resume: Option<TempFile>,
}

#[post("/profile")]
pub async fn create_profile_handler(
    user: AuthenticatedUser,
    MultipartForm(form): MultipartForm<CreateProfileForm>,
    data: web::Data<AppState>,
) -> impl Responder {
    // The temp file lives in `form` until the handler returns, so the
    // use case can copy it into permanent storage.
    let upload = form.resume.as_ref().map(|file| ResumeUpload {
        filename: file
            .file_name
            .clone()
            .unwrap_or_else(|| "resume.pdf".to_string()),
        temp_path: file.file.path().to_path_buf(),
    });

    let request = CreateProfileRequest {
        user_id: user.user_id,
        education: form.education.into_inner(),
        location: form.location.into_inner(),
        phone: form.phone.into_inner(),
        skills: form.skills.iter().map(|s| s.0.clone()).collect(),
        interests: form.interests.iter().map(|s| s.0.clone()).collect(),
        upload,
    };

    match data.create_profile.execute(request).await {
        Ok(profile) => ApiResponse::success(profile),
        Err(CreateProfileError::StorageFailed(e)) => {
            error!(error = %e, "Resume storage failed during profile creation");
            ApiResponse::storage_error()
        }
        Err(e) => {
            error!(error = %e, "Profile creation failed");
            ApiResponse::internal_error()
        }
    }
}
