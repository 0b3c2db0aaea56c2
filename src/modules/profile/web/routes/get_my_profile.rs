use actix_web::{get, web, Responder};
use tracing::error;

use crate::modules::auth::web::extractors::AuthenticatedUser;
use crate::modules::profile::use_cases::fetch_profile::FetchProfileError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/me")]
pub async fn get_my_profile_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.fetch_profile.execute(user.user_id).await {
        Ok(profile) => ApiResponse::success(profile),
        Err(FetchProfileError::ProfileNotFound) => {
            ApiResponse::not_found("PROFILE_NOT_FOUND", "No profile exists for this user")
        }
        Err(e) => {
            error!(error = %e, "Profile lookup failed");
            ApiResponse::internal_error()
        }
    }
}
