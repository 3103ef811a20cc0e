use actix_web::{put, web, Responder};
use tracing::{error, info};

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::modules::profile::application::domain::ProfilePayload;
use crate::modules::profile::application::ports::incoming::use_cases::UpsertProfileError;
use crate::modules::profile::application::ports::outgoing::profile_query::ProfileView;
use crate::shared::api::{ApiResponse, PayloadJson};
use crate::AppState;

/// Create or update the profile
///
/// The first call must carry `name`, `title`, `bio` and `email`. Later calls
/// may send any subset of fields.
#[utoipa::path(
    put,
    path = "/api/admin/profile",
    tag = "profile",
    request_body = ProfilePayload,
    responses(
        (status = 200, description = "Saved profile", body = inline(SuccessResponse<ProfileView>)),
        (status = 400, description = "Missing or blank field", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
    ),
    security(("BearerAuth" = []))
)]
#[put("/api/admin/profile")]
pub async fn upsert_profile_handler(
    admin: AdminUser,
    payload: PayloadJson<ProfilePayload>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.profile.upsert.execute(payload.into_inner()).await {
        Ok(profile) => {
            info!(admin = %admin.username, "Profile saved");
            ApiResponse::success(profile)
        }
        Err(UpsertProfileError::Validation(err)) => ApiResponse::validation_error(&err),
        Err(UpsertProfileError::RepositoryError(msg)) => {
            error!("Failed to save profile: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
