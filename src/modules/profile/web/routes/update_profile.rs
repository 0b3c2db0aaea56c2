use actix_web::{put, web, Responder};
use tracing::error;

use crate::modules::auth::web::extractors::AuthenticatedUser;
use crate::modules::profile::use_cases::update_profile::{
    UpdateProfileError, UpdateProfileRequest,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[put("/profile")]
pub async fn update_profile_handler(
    user: AuthenticatedUser,
    req: web::Json<UpdateProfileRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .update_profile
        .execute(user.user_id, req.into_inner())
        .await
    {
        Ok(profile) => ApiResponse::success(profile),
        Err(UpdateProfileError::ProfileNotFound) => {
            ApiResponse::not_found("PROFILE_NOT_FOUND", "No profile exists for this user")
        }
        Err(e) => {
            error!(error = %e, "Profile update failed");
            ApiResponse::internal_error()
        }
    }
}
