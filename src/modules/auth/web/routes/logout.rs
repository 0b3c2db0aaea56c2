use actix_web::{post, web, Responder};
use tracing::error;

use crate::modules::auth::web::extractors::AuthenticatedUser;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[post("/logout")]
pub async fn logout_handler(user: AuthenticatedUser, data: web::Data<AppState>) -> impl Responder {
    match data.logout_user.execute(&user.token).await {
        Ok(response) => ApiResponse::success(response),
        Err(e) => {
            error!(error = %e, "Logout failed");
            ApiResponse::internal_error()
        }
    }
}
