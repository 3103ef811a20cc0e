use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::auth::{
    resolve_status_filter_or_response, AdminUser,
};
use crate::modules::project::application::ports::incoming::use_cases::GetProjectsError;
use crate::modules::project::application::ports::outgoing::project_query::ProjectView;
use crate::shared::api::{ApiResponse, StatusQuery};
use crate::AppState;

/// List projects
///
/// Public callers only ever see published projects. Oldest first.
#[utoipa::path(
    get,
    path = "/api/projects",
    tag = "projects",
    params(StatusQuery),
    responses(
        (status = 200, description = "Projects, newest first", body = inline(SuccessResponse<Vec<ProjectView>>)),
        (status = 400, description = "Unknown status value", body = ErrorResponse),
        (status = 401, description = "draft/all requested without admin token", body = ErrorResponse),
    ),
    security((), ("BearerAuth" = []))
)]
#[get("/api/projects")]
pub async fn get_projects_handler(
    admin: Option<AdminUser>,
    query: web::Query<StatusQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let filter = match resolve_status_filter_or_response(query.status.as_deref(), admin.as_ref()) {
        Ok(f) => f,
        Err(resp) => return resp,
    };

    match data.project.get_list.execute(filter).await {
        Ok(items) => ApiResponse::success(items),

        Err(GetProjectsError::QueryFailed(msg)) => {
            error!("Failed to list projects: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
