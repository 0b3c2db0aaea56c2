use actix_web::{post, web, Responder};

use crate::modules::recommendation::domain::entities::Candidate;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Public endpoint, no bearer token required.
#[post("/candidate")]
pub async fn recommend_handler(
    candidate: web::Json<Candidate>,
    data: web::Data<AppState>,
) -> impl Responder {
    let scored = data.recommend_jobs.execute(candidate.into_inner()).await;
    ApiResponse::success(scored)
}
