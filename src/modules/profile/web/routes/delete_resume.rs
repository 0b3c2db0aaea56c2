use actix_web::{delete, web, Responder};
use tracing::error;

use crate::modules::auth::web::extractors::AuthenticatedUser;
use crate::modules::profile::use_cases::delete_resume::DeleteResumeError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[delete("/resumes/{filename}")]
pub async fn delete_resume_handler(
    user: AuthenticatedUser,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let filename = path.into_inner();

    match data.delete_resume.execute(user.user_id, &filename).await {
        Ok(profile) => ApiResponse::success(profile),
        Err(DeleteResumeError::ProfileNotFound) => {
            ApiResponse::not_found("PROFILE_NOT_FOUND", "No profile exists for this user")
        }
        Err(DeleteResumeError::StorageFailed(e)) => {
            error!(error = %e, filename, "Resume deletion failed on disk");
            ApiResponse::storage_error()
        }
        Err(e) => {
            error!(error = %e, "Resume deletion failed");
            ApiResponse::internal_error()
        }
    }
}
