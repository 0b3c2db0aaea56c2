use actix_web::{dev::Payload, web, Error as ActixError, FromRequest, HttpRequest, HttpResponse};
use futures::future::LocalBoxFuture;
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::auth::ports::outgoing::{TokenBlacklist, TokenProvider};
use crate::shared::api::ApiResponse;

/// The authenticated caller, extracted from the `Authorization: Bearer`
/// header on every protected route.
///
/// Checks run in a fixed order: missing header, then signature/expiry,
/// then the revocation list.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
    /// The raw bearer token; logout needs it verbatim.
    pub token: String,
}

fn auth_failure(response: HttpResponse) -> ActixError {
    actix_web::error::InternalError::from_response("", response).into()
}

fn extract_token_from_header(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get("Authorization")?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|s| s.to_string())
}

impl FromRequest for AuthenticatedUser {
    type Error = ActixError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let token_provider = req
            .app_data::<web::Data<Arc<dyn TokenProvider>>>()
            .cloned();
        let blacklist = req
            .app_data::<web::Data<Arc<dyn TokenBlacklist>>>()
            .cloned();
        let token = extract_token_from_header(req);

        Box::pin(async move {
            let (token_provider, blacklist) = match (token_provider, blacklist) {
                (Some(p), Some(b)) => (p, b),
                _ => return Err(auth_failure(ApiResponse::internal_error())),
            };

            let token = token.ok_or_else(|| {
                auth_failure(ApiResponse::unauthorized(
                    "MISSING_TOKEN",
                    "Missing or invalid authorization header",
                ))
            })?;

            let claims = token_provider.verify_token(&token).map_err(|_| {
                auth_failure(ApiResponse::unauthorized(
                    "INVALID_TOKEN",
                    "Invalid or expired token",
                ))
            })?;

            let revoked = blacklist.contains(&token).await.map_err(|e| {
                tracing::error!(error = %e, "Revocation list lookup failed");
                auth_failure(ApiResponse::internal_error())
            })?;
            if revoked {
                return Err(auth_failure(ApiResponse::unauthorized(
                    "TOKEN_REVOKED",
                    "Token has been revoked",
                )));
            }

            Ok(AuthenticatedUser {
                user_id: claims.sub,
                token,
            })
        })
    }
}
