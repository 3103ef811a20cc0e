use std::sync::Arc;

use actix_web::web;

use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::application::ports::outgoing::token_provider::TokenProvider;

pub const TEST_JWT_SECRET: &str = "test_secret_key_for_testing_purposes_only";

pub fn create_test_jwt_service() -> JwtTokenService {
    JwtTokenService::new(JwtConfig {
        issuer: "portfolio-api".to_string(),
        secret_key: TEST_JWT_SECRET.to_string(),
        access_token_expiry: 3600,
    })
}

/// The provider as handlers find it in app data.
pub fn token_provider_data() -> web::Data<Arc<dyn TokenProvider + Send + Sync>> {
    let provider: Arc<dyn TokenProvider + Send + Sync> = Arc::new(create_test_jwt_service());
    web::Data::new(provider)
}

pub fn admin_token() -> String {
    create_test_jwt_service()
        .generate_access_token("admin")
        .expect("test token")
}

pub fn bearer(token: &str) -> (&'static str, String) {
    ("Authorization", format!("Bearer {}", token))
}

pub fn admin_bearer() -> (&'static str, String) {
    bearer(&admin_token())
}
