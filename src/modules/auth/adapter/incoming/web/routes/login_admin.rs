use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::use_cases::login_admin::{LoginError, LoginRequest};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};

use utoipa::ToSchema;

/// Login request from the admin client
#[derive(Deserialize, ToSchema)]
pub struct LoginRequestDto {
    #[schema(example = "admin")]
    #[serde(default)]
    pub username: String,

    #[schema(example = "admin123")]
    #[serde(default)]
    pub password: String,
}

#[derive(Serialize, ToSchema)]
pub struct LoginResponse {
    /// JWT access token
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    access_token: String,

    /// Always "bearer"
    #[schema(example = "bearer")]
    token_type: String,

    /// Seconds until the token expires
    #[schema(example = 86400)]
    expires_in: i64,
}

/// Admin login
///
/// Exchanges the admin username and password for a bearer token.
#[utoipa::path(
    post,
    path = "/api/admin/login",
    tag = "auth",
    request_body = LoginRequestDto,
    responses(
        (
            status = 200,
            description = "Login successful",
            body = inline(SuccessResponse<LoginResponse>),
            example = json!({
                "success": true,
                "data": {
                    "access_token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...",
                    "token_type": "bearer",
                    "expires_in": 86400
                }
            })
        ),
        (
            status = 400,
            description = "Blank username or password",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "VALIDATION_ERROR",
                    "message": "password is required",
                    "field": "password"
                }
            })
        ),
        (
            status = 401,
            description = "Invalid credentials",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "INVALID_CREDENTIALS",
                    "message": "Invalid username or password"
                }
            })
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/admin/login")]
pub async fn login_admin_handler(
    req: web::Json<LoginRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    info!(username = %dto.username, "Admin login attempt");

    let request = match LoginRequest::new(dto.username, dto.password) {
        Ok(req) => req,
        Err(e) => return ApiResponse::validation_error(&e),
    };

    match data.login_admin_use_case.execute(request).await {
        Ok(response) => {
            info!("Admin logged in successfully");
            ApiResponse::success(LoginResponse {
                access_token: response.access_token,
                token_type: response.token_type,
                expires_in: response.expires_in,
            })
        }

        Err(LoginError::InvalidCredentials) => {
            warn!("Admin login failed: Invalid credentials");
            ApiResponse::unauthorized("INVALID_CREDENTIALS", "Invalid username or password")
        }

        Err(LoginError::PasswordVerificationFailed(ref e)) => {
            error!(error = %e, "Password verification failed");
            ApiResponse::internal_error()
        }

        Err(LoginError::TokenGenerationFailed(ref e)) => {
            error!(error = %e, "Token generation failed");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::use_cases::login_admin::{
        LoginAdminResponse, LoginAdminUseCase,
    };
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use serde_json::{json, Value};

    #[derive(Clone)]
    struct MockLoginAdmin {
        result: Result<LoginAdminResponse, LoginError>,
    }

    #[async_trait]
    impl LoginAdminUseCase for MockLoginAdmin {
        async fn execute(&self, _request: LoginRequest) -> Result<LoginAdminResponse, LoginError> {
            self.result.clone()
        }
    }

    fn mock_success() -> MockLoginAdmin {
        MockLoginAdmin {
            result: Ok(LoginAdminResponse {
                access_token: "FAKE_TEST_ACCESS_TOKEN_DO_NOT_USE".to_string(),
                token_type: "bearer".to_string(),
                expires_in: 86_400,
            }),
        }
    }

    fn mock_error(err: LoginError) -> MockLoginAdmin {
        MockLoginAdmin { result: Err(err) }
    }

    async fn post_login(uc: MockLoginAdmin, body: Value) -> (StatusCode, Value) {
        let app_state = TestAppStateBuilder::default().with_login_admin(uc).build();
        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(crate::shared::api::custom_json_config())
                .service(login_admin_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/admin/login")
            .set_json(&body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        let status = resp.status();
        let body: Value = test::read_body_json(resp).await;
        (status, body)
    }

    #[actix_web::test]
    async fn test_login_admin_success() {
        let (status, body) = post_login(
            mock_success(),
            json!({ "username": "admin", "password": "admin123" }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["token_type"], "bearer");
        assert_eq!(body["data"]["expires_in"], 86400);
        assert_eq!(
            body["data"]["access_token"],
            "FAKE_TEST_ACCESS_TOKEN_DO_NOT_USE"
        );
    }

    #[actix_web::test]
    async fn test_login_admin_invalid_credentials() {
        let (status, body) = post_login(
            mock_error(LoginError::InvalidCredentials),
            json!({ "username": "admin", "password": "wrong" }),
        )
        .await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["success"], false);
        assert_eq!(body["error"]["code"], "INVALID_CREDENTIALS");
    }

    #[actix_web::test]
    async fn test_login_admin_blank_password_is_validation_error() {
        let (status, body) = post_login(
            mock_success(),
            json!({ "username": "admin", "password": "  " }),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert_eq!(body["error"]["field"], "password");
    }

    #[actix_web::test]
    async fn test_login_admin_missing_username_is_validation_error() {
        let (status, body) = post_login(mock_success(), json!({ "password": "admin123" })).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["field"], "username");
    }

    #[actix_web::test]
    async fn test_login_admin_token_failure_is_internal_error() {
        let (status, body) = post_login(
            mock_error(LoginError::TokenGenerationFailed("bad key".to_string())),
            json!({ "username": "admin", "password": "admin123" }),
        )
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"]["code"], "INTERNAL_ERROR");
    }
}
