use actix_web::{put, web, Responder};
use tracing::{error, info};
use uuid::Uuid;

use super::EXPERIENCE_NOT_FOUND;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::modules::experience::application::domain::ExperiencePayload;
use crate::modules::experience::application::ports::incoming::use_cases::UpdateExperienceError;
use crate::modules::experience::application::ports::outgoing::experience_query::ExperienceView;
use crate::shared::api::{ApiResponse, PayloadJson};
use crate::AppState;

/// Partially update an experience entry
#[utoipa::path(
    put,
    path = "/api/admin/experiences/{experience_id}",
    tag = "experiences",
    params(("experience_id" = Uuid, Path, description = "Experience id")),
    request_body = ExperiencePayload,
    responses(
        (status = 200, description = "Updated entry", body = inline(SuccessResponse<ExperienceView>)),
        (status = 400, description = "Invalid field", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "No such entry", body = ErrorResponse),
    ),
    security(("BearerAuth" = []))
)]
#[put("/api/admin/experiences/{experience_id}")]
pub async fn update_experience_handler(
    admin: AdminUser,
    path: web::Path<Uuid>,
    payload: PayloadJson<ExperiencePayload>,
    data: web::Data<AppState>,
) -> impl Responder {
    let experience_id = path.into_inner();

    match data
        .experience
        .update
        .execute(experience_id, payload.into_inner())
        .await
    {
        Ok(experience) => {
            info!(%experience_id, admin = %admin.username, "Experience updated");
            ApiResponse::success(experience)
        }
        Err(UpdateExperienceError::Validation(err)) => ApiResponse::validation_error(&err),
        Err(UpdateExperienceError::NotFound) => {
            ApiResponse::not_found(EXPERIENCE_NOT_FOUND.0, EXPERIENCE_NOT_FOUND.1)
        }
        Err(UpdateExperienceError::RepositoryError(msg)) => {
            error!("Failed to update experience {}: {}", experience_id, msg);
            ApiResponse::internal_error()
        }
    }
}
