use actix_web::{get, web, Responder};
use tracing::error;
use uuid::Uuid;

use super::EXPERIENCE_NOT_FOUND;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::modules::experience::application::ports::incoming::use_cases::GetSingleExperienceError;
use crate::modules::experience::application::ports::outgoing::experience_query::ExperienceView;
use crate::shared::api::ApiResponse;
use crate::shared::domain::StatusFilter;
use crate::AppState;

#[utoipa::path(
    get,
    path = "/api/experiences/{experience_id}",
    tag = "experiences",
    params(("experience_id" = Uuid, Path, description = "Experience id")),
    responses(
        (status = 200, description = "Experience entry", body = inline(SuccessResponse<ExperienceView>)),
        (status = 404, description = "Missing or hidden", body = ErrorResponse),
    ),
    security((), ("BearerAuth" = []))
)]
#[get("/api/experiences/{experience_id}")]
pub async fn get_single_experience_handler(
    admin: Option<AdminUser>,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let experience_id = path.into_inner();
    let visibility = if admin.is_some() {
        StatusFilter::All
    } else {
        StatusFilter::default()
    };

    match data
        .experience
        .get_single
        .execute(experience_id, visibility)
        .await
    {
        Ok(experience) => ApiResponse::success(experience),
        Err(GetSingleExperienceError::NotFound) => {
            ApiResponse::not_found(EXPERIENCE_NOT_FOUND.0, EXPERIENCE_NOT_FOUND.1)
        }
        Err(GetSingleExperienceError::RepositoryError(msg)) => {
            error!("Repository error fetching experience {}: {}", experience_id, msg);
            ApiResponse::internal_error()
        }
    }
}
