use actix_web::{post, web, Responder};
use tracing::{error, info};

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::modules::experience::application::domain::ExperiencePayload;
use crate::modules::experience::application::ports::incoming::use_cases::CreateExperienceError;
use crate::modules::experience::application::ports::outgoing::experience_query::ExperienceView;
use crate::shared::api::{ApiResponse, PayloadJson};
use crate::AppState;

/// Create an experience entry
///
/// `responsibilities` and `skills` accept a JSON array or a comma-separated string.
#[utoipa::path(
    post,
    path = "/api/admin/experiences",
    tag = "experiences",
    request_body = ExperiencePayload,
    responses(
        (status = 201, description = "Entry created", body = inline(SuccessResponse<ExperienceView>)),
        (
            status = 400,
            description = "Missing or invalid field",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "VALIDATION_ERROR",
                    "message": "type must be one of job, internship, freelance, got 'contract'",
                    "field": "type"
                }
            })
        ),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
    ),
    security(("BearerAuth" = []))
)]
#[post("/api/admin/experiences")]
pub async fn create_experience_handler(
    admin: AdminUser,
    payload: PayloadJson<ExperiencePayload>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.experience.create.execute(payload.into_inner()).await {
        Ok(experience) => {
            info!(experience_id = %experience.id, admin = %admin.username, "Experience created");
            ApiResponse::created(experience)
        }
        Err(CreateExperienceError::Validation(err)) => ApiResponse::validation_error(&err),
        Err(CreateExperienceError::RepositoryError(msg)) => {
            error!("Failed to create experience: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use serde_json::{json, Value};

    use crate::modules::experience::application::ports::incoming::use_cases::CreateExperienceUseCase;
    use crate::shared::api::custom_json_config;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{admin_bearer, token_provider_data};
    use crate::tests::support::experience_test_fixtures::sample_experience;

    struct ValidatingCreate;

    #[async_trait]
    impl CreateExperienceUseCase for ValidatingCreate {
        async fn execute(
            &self,
            payload: ExperiencePayload,
        ) -> Result<ExperienceView, CreateExperienceError> {
            let data = payload
                .into_create_data()
                .map_err(CreateExperienceError::Validation)?;
            let mut view = sample_experience(data.status);
            view.kind = data.kind;
            view.current = data.current;
            view.end_date = data.end_date;
            Ok(view)
        }
    }

    macro_rules! app {
        () => {
            test::init_service(
                App::new()
                    .app_data(
                        TestAppStateBuilder::default()
                            .with_create_experience(ValidatingCreate)
                            .build(),
                    )
                    .app_data(token_provider_data())
                    .app_data(custom_json_config())
                    .service(create_experience_handler),
            )
            .await
        };
    }

    fn body() -> Value {
        json!({
            "title": "Contractor",
            "company": "Self",
            "type": "freelance",
            "description": "Client work",
            "start_date": "2020",
            "end_date": "2022",
            "current": true
        })
    }

    #[actix_web::test]
    async fn test_create_current_freelance() {
        let app = app!();

        let req = test::TestRequest::post()
            .uri("/api/admin/experiences")
            .insert_header(admin_bearer())
            .set_json(body())
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::CREATED);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["type"], "freelance");
        assert_eq!(body["data"]["current"], true);
        assert!(body["data"]["end_date"].is_null());
    }

    #[actix_web::test]
    async fn test_create_invalid_type() {
        let app = app!();
        let mut payload = body();
        payload["type"] = json!("contract");

        let req = test::TestRequest::post()
            .uri("/api/admin/experiences")
            .insert_header(admin_bearer())
            .set_json(payload)
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["field"], "type");
    }

    #[actix_web::test]
    async fn test_create_without_token() {
        let app = app!();

        let req = test::TestRequest::post()
            .uri("/api/admin/experiences")
            .set_json(body())
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }
}
