use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::{error, info, warn};

use crate::modules::auth::use_cases::register_user::{RegisterError, RegisterRequest};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Deserialize)]
pub struct RegisterRequestDto {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[post("/register")]
pub async fn register_handler(
    req: web::Json<RegisterRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    let request = match RegisterRequest::new(dto.name, dto.email, dto.password) {
        Ok(req) => req,
        Err(e) => {
            return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string());
        }
    };

    match data.register_user.execute(request).await {
        Ok(response) => {
            info!(user_id = %response.user_id, "User registered");
            ApiResponse::success(response)
        }

        Err(RegisterError::UserAlreadyExists) => {
            warn!("Registration rejected: email already taken");
            ApiResponse::conflict("USER_EXISTS", "User already exists")
        }

        Err(e) => {
            error!(error = %e, "Registration failed");
            ApiResponse::internal_error()
        }
    }
}
