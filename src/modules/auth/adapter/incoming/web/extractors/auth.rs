use actix_web::{dev::Payload, Error as ActixError, FromRequest, HttpRequest, HttpResponse};
use std::{
    future::{ready, Ready},
    sync::Arc,
};

use crate::auth::application::ports::outgoing::token_provider::TokenProvider;
use crate::auth::application::use_cases::authenticate_admin::{
    authenticate_admin, AuthenticateError,
};
use crate::shared::api::ApiResponse;
use crate::shared::domain::{StatusFilter, ValidationError};

/// The admin, proven by a valid bearer token.
///
/// Use `Option<AdminUser>` on routes that only widen what they show to admins:
/// a missing or bad token then yields `None` instead of a 401.
#[derive(Debug, Clone)]
pub struct AdminUser {
    pub username: String,
}

fn create_api_error(response: HttpResponse) -> ActixError {
    actix_web::error::InternalError::from_response("", response).into()
}

impl FromRequest for AdminUser {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let jwt_service =
            match req.app_data::<actix_web::web::Data<Arc<dyn TokenProvider + Send + Sync>>>() {
                Some(service) => service,
                None => {
                    tracing::error!("TokenProvider is not registered as app data");
                    return ready(Err(create_api_error(ApiResponse::internal_error())));
                }
            };

        let provider: &(dyn TokenProvider + Send + Sync) = &**jwt_service.get_ref();
        let token = extract_token_from_header(req);

        match authenticate_admin(provider, token.as_deref()) {
            Ok(identity) => ready(Ok(AdminUser {
                username: identity.username,
            })),
            Err(AuthenticateError::MissingToken) => {
                ready(Err(create_api_error(ApiResponse::unauthorized(
                    "MISSING_AUTH_HEADER",
                    "Missing or invalid authorization header",
                ))))
            }
            Err(AuthenticateError::InvalidToken(e)) => {
                tracing::warn!(error = %e, "Rejected bearer token");
                ready(Err(create_api_error(ApiResponse::unauthorized(
                    "INVALID_TOKEN",
                    "Invalid or expired token",
                ))))
            }
        }
    }
}

fn extract_token_from_header(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get("Authorization")?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|s| s.to_string())
}

/// Turns the raw `status` query value into a filter, enforcing that only admins
/// may see drafts. Missing means published.
pub fn resolve_status_filter_or_response(
    status: Option<&str>,
    admin: Option<&AdminUser>,
) -> Result<StatusFilter, HttpResponse> {
    let filter = match status.map(str::trim).filter(|s| !s.is_empty()) {
        None => StatusFilter::default(),
        Some(raw) => raw.parse::<StatusFilter>().map_err(|_| {
            ApiResponse::validation_error(&ValidationError::invalid(
                "status",
                format!("unknown status '{}', expected published, draft or all", raw),
            ))
        })?,
    };

    if filter.requires_admin() && admin.is_none() {
        tracing::warn!(status = filter.as_query_value(), "Non-published listing without admin token");
        return Err(ApiResponse::unauthorized(
            "MISSING_AUTH_HEADER",
            "Admin token required for this status filter",
        ));
    }

    Ok(filter)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
    use actix_web::{get, http::StatusCode, test, web, App, Responder};

    fn jwt_service(expiry: i64) -> JwtTokenService {
        JwtTokenService::new(JwtConfig {
            secret_key: "test_secret_key_for_testing_purposes_only".to_string(),
            issuer: "portfolio-api".to_string(),
            access_token_expiry: expiry,
        })
    }

    #[get("/guarded")]
    async fn guarded(admin: AdminUser) -> impl Responder {
        ApiResponse::success(admin.username)
    }

    #[get("/optional")]
    async fn optional(admin: Option<AdminUser>) -> impl Responder {
        ApiResponse::success(admin.is_some())
    }

    macro_rules! app {
        ($expiry:expr) => {{
            let provider: Arc<dyn TokenProvider + Send + Sync> = Arc::new(jwt_service($expiry));
            test::init_service(
                App::new()
                    .app_data(web::Data::new(provider))
                    .service(guarded)
                    .service(optional),
            )
            .await
        }};
    }

    #[actix_web::test]
    async fn test_valid_token_passes() {
        let app = app!(3600);
        let token = jwt_service(3600).generate_access_token("admin").unwrap();

        let req = test::TestRequest::get()
            .uri("/guarded")
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["data"], "admin");
    }

    #[actix_web::test]
    async fn test_missing_header_is_401() {
        let app = app!(3600);

        let req = test::TestRequest::get().uri("/guarded").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "MISSING_AUTH_HEADER");
    }

    #[actix_web::test]
    async fn test_expired_token_is_401() {
        let app = app!(3600);
        let token = jwt_service(-120).generate_access_token("admin").unwrap();

        let req = test::TestRequest::get()
            .uri("/guarded")
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "INVALID_TOKEN");
    }

    #[actix_web::test]
    async fn test_optional_admin_degrades_to_none() {
        let app = app!(3600);

        let req = test::TestRequest::get()
            .uri("/optional")
            .insert_header(("Authorization", "Bearer garbage"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["data"], false);
    }
}
