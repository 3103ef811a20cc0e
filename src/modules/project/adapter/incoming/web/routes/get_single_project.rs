use actix_web::{get, web, Responder};
use tracing::error;
use uuid::Uuid;

use super::PROJECT_NOT_FOUND;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::modules::project::application::ports::incoming::use_cases::GetSingleProjectError;
use crate::modules::project::application::ports::outgoing::project_query::ProjectView;
use crate::shared::api::ApiResponse;
use crate::shared::domain::StatusFilter;
use crate::AppState;

/// Get one project
///
/// Drafts are only visible with an admin token.
#[utoipa::path(
    get,
    path = "/api/projects/{project_id}",
    tag = "projects",
    params(("project_id" = Uuid, Path, description = "Project id")),
    responses(
        (status = 200, description = "Project", body = inline(SuccessResponse<ProjectView>)),
        (status = 404, description = "Missing or hidden", body = ErrorResponse),
    ),
    security((), ("BearerAuth" = []))
)]
#[get("/api/projects/{project_id}")]
pub async fn get_single_project_handler(
    admin: Option<AdminUser>,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let project_id = path.into_inner();
    let visibility = match admin {
        Some(_) => StatusFilter::All,
        None => StatusFilter::default(),
    };

    match data.project.get_single.execute(project_id, visibility).await {
        Ok(project) => ApiResponse::success(project),

        Err(GetSingleProjectError::NotFound) => {
            ApiResponse::not_found(PROJECT_NOT_FOUND.0, PROJECT_NOT_FOUND.1)
        }

        Err(GetSingleProjectError::RepositoryError(e)) => {
            error!("Repository error fetching project {}: {}", project_id, e);
            ApiResponse::internal_error()
        }
    }
}
