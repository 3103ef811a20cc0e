use actix_web::{delete, web, Responder};
use tracing::{error, info};
use uuid::Uuid;

use super::PROJECT_NOT_FOUND;
use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::modules::project::application::ports::incoming::use_cases::DeleteProjectError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Delete a project
#[utoipa::path(
    delete,
    path = "/api/admin/projects/{project_id}",
    tag = "projects",
    params(("project_id" = Uuid, Path, description = "Project id")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "No such project", body = ErrorResponse),
    ),
    security(("BearerAuth" = []))
)]
#[delete("/api/admin/projects/{project_id}")]
pub async fn delete_project_handler(
    admin: AdminUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let project_id = path.into_inner();

    match data.project.delete.execute(project_id).await {
        Ok(()) => {
            info!(%project_id, admin = %admin.username, "Project deleted");
            ApiResponse::no_content()
        }

        Err(DeleteProjectError::ProjectNotFound) => {
            ApiResponse::not_found(PROJECT_NOT_FOUND.0, PROJECT_NOT_FOUND.1)
        }

        Err(DeleteProjectError::RepositoryError(msg)) => {
            error!("Failed to delete project {}: {}", project_id, msg);
            ApiResponse::internal_error()
        }
    }
}
