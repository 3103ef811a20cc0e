use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::auth::{
    resolve_status_filter_or_response, AdminUser,
};
use crate::modules::experience::application::ports::incoming::use_cases::GetExperiencesError;
use crate::modules::experience::application::ports::outgoing::experience_query::ExperienceView;
use crate::shared::api::{ApiResponse, StatusQuery};
use crate::AppState;

/// List experience entries
#[utoipa::path(
    get,
    path = "/api/experiences",
    tag = "experiences",
    params(StatusQuery),
    responses(
        (status = 200, description = "Entries, latest start date first", body = inline(SuccessResponse<Vec<ExperienceView>>)),
        (status = 400, description = "Unknown status value", body = ErrorResponse),
        (status = 401, description = "draft/all requested without admin token", body = ErrorResponse),
    ),
    security((), ("BearerAuth" = []))
)]
#[get("/api/experiences")]
pub async fn get_experiences_handler(
    admin: Option<AdminUser>,
    query: web::Query<StatusQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let filter = match resolve_status_filter_or_response(query.status.as_deref(), admin.as_ref()) {
        Ok(f) => f,
        Err(resp) => return resp,
    };

    match data.experience.get_list.execute(filter).await {
        Ok(items) => ApiResponse::success(items),
        Err(GetExperiencesError::QueryFailed(msg)) => {
            error!("Failed to list experiences: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use serde_json::Value;

    use crate::modules::experience::application::ports::incoming::use_cases::GetExperiencesUseCase;
    use crate::shared::domain::{PublicationStatus, StatusFilter};
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{admin_bearer, token_provider_data};
    use crate::tests::support::experience_test_fixtures::sample_experience;

    struct FilteringGetExperiences;

    #[async_trait]
    impl GetExperiencesUseCase for FilteringGetExperiences {
        async fn execute(
            &self,
            filter: StatusFilter,
        ) -> Result<Vec<ExperienceView>, GetExperiencesError> {
            Ok(vec![
                sample_experience(PublicationStatus::Draft),
                sample_experience(PublicationStatus::Published),
            ]
            .into_iter()
            .filter(|e| filter.matches(e.status))
            .collect())
        }
    }

    macro_rules! app {
        () => {
            test::init_service(
                App::new()
                    .app_data(
                        TestAppStateBuilder::default()
                            .with_get_experiences(FilteringGetExperiences)
                            .build(),
                    )
                    .app_data(token_provider_data())
                    .service(get_experiences_handler),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn test_public_sees_published_only() {
        let app = app!();

        let req = test::TestRequest::get().uri("/api/experiences").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        let items = body["data"].as_array().unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0]["status"], "published");
        assert_eq!(items[0]["type"], "job");
    }

    #[actix_web::test]
    async fn test_draft_filter_needs_admin() {
        let app = app!();

        let req = test::TestRequest::get()
            .uri("/api/experiences?status=draft")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

        let req = test::TestRequest::get()
            .uri("/api/experiences?status=draft")
            .insert_header(admin_bearer())
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"][0]["status"], "draft");
    }
}
