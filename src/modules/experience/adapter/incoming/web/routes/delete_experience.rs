use actix_web::{delete, web, Responder};
use tracing::{error, info};
use uuid::Uuid;

use super::EXPERIENCE_NOT_FOUND;
use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::modules::experience::application::ports::incoming::use_cases::DeleteExperienceError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    delete,
    path = "/api/admin/experiences/{experience_id}",
    tag = "experiences",
    params(("experience_id" = Uuid, Path, description = "Experience id")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "No such entry", body = ErrorResponse),
    ),
    security(("BearerAuth" = []))
)]
#[delete("/api/admin/experiences/{experience_id}")]
pub async fn delete_experience_handler(
    admin: AdminUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let experience_id = path.into_inner();

    match data.experience.delete.execute(experience_id).await {
        Ok(()) => {
            info!(%experience_id, admin = %admin.username, "Experience deleted");
            ApiResponse::no_content()
        }
        Err(DeleteExperienceError::ExperienceNotFound) => {
            ApiResponse::not_found(EXPERIENCE_NOT_FOUND.0, EXPERIENCE_NOT_FOUND.1)
        }
        Err(DeleteExperienceError::RepositoryError(msg)) => {
            error!("Failed to delete experience {}: {}", experience_id, msg);
            ApiResponse::internal_error()
        }
    }
}
