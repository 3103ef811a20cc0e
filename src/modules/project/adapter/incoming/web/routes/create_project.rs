use actix_web::{post, web, Responder};
use tracing::{error, info};

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::modules::project::application::domain::ProjectPayload;
use crate::modules::project::application::ports::incoming::use_cases::CreateProjectError;
use crate::modules::project::application::ports::outgoing::project_query::ProjectView;
use crate::shared::api::{ApiResponse, PayloadJson};
use crate::AppState;

/// Create a project
///
/// `tech_stack` and `tags` accept either a JSON array or a comma-separated string.
#[utoipa::path(
    post,
    path = "/api/admin/projects",
    tag = "projects",
    request_body = ProjectPayload,
    responses(
        (status = 201, description = "Project created", body = inline(SuccessResponse<ProjectView>)),
        (
            status = 400,
            description = "Missing or invalid field",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "VALIDATION_ERROR",
                    "message": "title is required",
                    "field": "title"
                }
            })
        ),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
    ),
    security(("BearerAuth" = []))
)]
#[post("/api/admin/projects")]
pub async fn create_project_handler(
    admin: AdminUser,
    payload: PayloadJson<ProjectPayload>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.project.create.execute(payload.into_inner()).await {
        Ok(project) => {
            info!(project_id = %project.id, admin = %admin.username, "Project created");
            ApiResponse::created(project)
        }

        Err(CreateProjectError::Validation(err)) => ApiResponse::validation_error(&err),

        Err(CreateProjectError::RepositoryError(msg)) => {
            error!("Failed to create project: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
