use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::profile::application::ports::incoming::use_cases::GetProfileError;
use crate::modules::profile::application::ports::outgoing::profile_query::ProfileView;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Get the profile
///
/// 404 until the admin saves the profile for the first time.
#[utoipa::path(
    get,
    path = "/api/profile",
    tag = "profile",
    responses(
        (status = 200, description = "Current profile", body = inline(SuccessResponse<ProfileView>)),
        (status = 404, description = "No profile yet", body = ErrorResponse),
    )
)]
#[get("/api/profile")]
pub async fn get_profile_handler(data: web::Data<AppState>) -> impl Responder {
    match data.profile.get.execute().await {
        Ok(profile) => ApiResponse::success(profile),
        Err(GetProfileError::NotFound) => {
            ApiResponse::not_found("PROFILE_NOT_FOUND", "Profile not found")
        }
        Err(GetProfileError::RepositoryError(msg)) => {
            error!("Failed to load profile: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
