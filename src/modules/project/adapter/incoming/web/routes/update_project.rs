use actix_web::{put, web, Responder};
use tracing::{error, info};
use uuid::Uuid;

use super::PROJECT_NOT_FOUND;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::modules::project::application::domain::ProjectPayload;
use crate::modules::project::application::ports::incoming::use_cases::UpdateProjectError;
use crate::modules::project::application::ports::outgoing::project_query::ProjectView;
use crate::shared::api::{ApiResponse, PayloadJson};
use crate::AppState;

/// Partially update a project
///
/// Omitted fields are left untouched. `null` clears optional fields.
#[utoipa::path(
    put,
    path = "/api/admin/projects/{project_id}",
    tag = "projects",
    params(("project_id" = Uuid, Path, description = "Project id")),
    request_body = ProjectPayload,
    responses(
        (status = 200, description = "Updated project", body = inline(SuccessResponse<ProjectView>)),
        (status = 400, description = "Invalid field", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "No such project", body = ErrorResponse),
    ),
    security(("BearerAuth" = []))
)]
#[put("/api/admin/projects/{project_id}")]
pub async fn update_project_handler(
    admin: AdminUser,
    path: web::Path<Uuid>,
    payload: PayloadJson<ProjectPayload>,
    data: web::Data<AppState>,
) -> impl Responder {
    let project_id = path.into_inner();

    match data
        .project
        .update
        .execute(project_id, payload.into_inner())
        .await
    {
        Ok(project) => {
            info!(%project_id, admin = %admin.username, "Project updated");
            ApiResponse::success(project)
        }

        Err(UpdateProjectError::Validation(err)) => ApiResponse::validation_error(&err),

        Err(UpdateProjectError::NotFound) => {
            ApiResponse::not_found(PROJECT_NOT_FOUND.0, PROJECT_NOT_FOUND.1)
        }

        Err(UpdateProjectError::RepositoryError(msg)) => {
            error!("Failed to update project {}: {}", project_id, msg);
            ApiResponse::internal_error()
        }
    }
}
