use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;

use crate::auth::application::domain::entities::AdminCredentials;
use crate::auth::application::ports::outgoing::{PasswordHasher, TokenProvider};
use crate::shared::domain::ValidationError;

// ========================= Login Request =========================
/// Validated login request. Both fields are non-blank.
#[derive(Clone)]
pub struct LoginRequest {
    username: String,
    password: String,
}

impl LoginRequest {
    pub fn new(username: String, password: String) -> Result<Self, ValidationError> {
        let username = username.trim().to_string();
        if username.is_empty() {
            return Err(ValidationError::required("username"));
        }

        // Passwords are compared as typed, only a fully blank one is rejected
        if password.trim().is_empty() {
            return Err(ValidationError::required("password"));
        }

        Ok(Self { username, password })
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

impl std::fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginRequest")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

// ====================== Login Error =============================
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginError {
    InvalidCredentials,
    PasswordVerificationFailed(String),
    TokenGenerationFailed(String),
}

impl std::fmt::Display for LoginError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoginError::InvalidCredentials => write!(f, "Invalid username or password"),
            LoginError::PasswordVerificationFailed(msg) => {
                write!(f, "Password verification failed: {}", msg)
            }
            LoginError::TokenGenerationFailed(msg) => {
                write!(f, "Token generation failed: {}", msg)
            }
        }
    }
}

impl std::error::Error for LoginError {}

// ============================ Login Response =================================
pub const BEARER_TOKEN_TYPE: &str = "bearer";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginAdminResponse {
    pub access_token: String,
    pub token_type: String,
    /// Seconds until the token expires.
    pub expires_in: i64,
}

// ============================ Login Admin Use Case =============================
#[async_trait]
pub trait LoginAdminUseCase: Send + Sync {
    async fn execute(&self, request: LoginRequest) -> Result<LoginAdminResponse, LoginError>;
}

#[derive(Clone)]
pub struct LoginAdminService {
    credentials: AdminCredentials,
    password_hasher: Arc<dyn PasswordHasher>,
    token_provider: Arc<dyn TokenProvider>,
}

impl LoginAdminService {
    pub fn new(
        credentials: AdminCredentials,
        password_hasher: Arc<dyn PasswordHasher>,
        token_provider: Arc<dyn TokenProvider>,
    ) -> Self {
        Self {
            credentials,
            password_hasher,
            token_provider,
        }
    }
}

#[async_trait]
impl LoginAdminUseCase for LoginAdminService {
    async fn execute(&self, request: LoginRequest) -> Result<LoginAdminResponse, LoginError> {
        let username_matches = request.username() == self.credentials.username();

        // Always pay for the hash check so a wrong username costs the same as a wrong password
        let password_matches = self
            .password_hasher
            .verify_password(request.password(), self.credentials.password_hash())
            .await
            .map_err(|e| LoginError::PasswordVerificationFailed(e.to_string()))?;

        if !(username_matches && password_matches) {
            return Err(LoginError::InvalidCredentials);
        }

        let access_token = self
            .token_provider
            .generate_access_token(self.credentials.username())
            .map_err(|e| LoginError::TokenGenerationFailed(e.to_string()))?;

        Ok(LoginAdminResponse {
            access_token,
            token_type: BEARER_TOKEN_TYPE.to_string(),
            expires_in: self.token_provider.access_token_expiry(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::ports::outgoing::{HashError, TokenClaims, TokenError};
    use mockall::{mock, predicate::eq};

    mock! {
        pub PasswordHasherMock {}
        #[async_trait]
        impl PasswordHasher for PasswordHasherMock {
            async fn hash_password(&self, password: &str) -> Result<String, HashError>;
            async fn verify_password(&self, password: &str, hash: &str) -> Result<bool, HashError>;
        }
    }

    mock! {
        pub TokenProviderMock {}
        impl TokenProvider for TokenProviderMock {
            fn generate_access_token(&self, subject: &str) -> Result<String, TokenError>;
            fn verify_token(&self, token: &str) -> Result<TokenClaims, TokenError>;
            fn access_token_expiry(&self) -> i64;
        }
    }

    fn credentials() -> AdminCredentials {
        AdminCredentials::new("admin", "$argon2id$stored-hash")
    }

    fn hasher_returning(result: Result<bool, HashError>) -> MockPasswordHasherMock {
        let mut hasher = MockPasswordHasherMock::new();
        hasher
            .expect_verify_password()
            .times(1)
            .returning(move |_, _| result.clone());
        hasher
    }

    fn issuing_token_provider() -> MockTokenProviderMock {
        let mut provider = MockTokenProviderMock::new();
        provider
            .expect_generate_access_token()
            .with(eq("admin"))
            .returning(|_| Ok("signed.jwt.token".to_string()));
        provider.expect_access_token_expiry().returning(|| 86_400);
        provider
    }

    fn service(
        hasher: MockPasswordHasherMock,
        provider: MockTokenProviderMock,
    ) -> LoginAdminService {
        LoginAdminService::new(credentials(), Arc::new(hasher), Arc::new(provider))
    }

    // ==================== LoginRequest Tests ====================
    #[test]
    fn test_login_request_trims_username() {
        let request = LoginRequest::new("  admin ".to_string(), "admin123".to_string()).unwrap();
        assert_eq!(request.username(), "admin");
        assert_eq!(request.password(), "admin123");
    }

    #[test]
    fn test_login_request_blank_username() {
        let err = LoginRequest::new("   ".to_string(), "admin123".to_string()).unwrap_err();
        assert_eq!(err.field, "username");
    }

    #[test]
    fn test_login_request_blank_password() {
        let err = LoginRequest::new("admin".to_string(), "".to_string()).unwrap_err();
        assert_eq!(err.field, "password");
    }

    #[test]
    fn test_login_request_debug_hides_password() {
        let request = LoginRequest::new("admin".to_string(), "admin123".to_string()).unwrap();
        assert!(!format!("{:?}", request).contains("admin123"));
    }

    // ==================== LoginAdminService Tests ====================
    #[tokio::test]
    async fn test_login_success() {
        let mut hasher = MockPasswordHasherMock::new();
        hasher
            .expect_verify_password()
            .with(eq("admin123"), eq("$argon2id$stored-hash"))
            .times(1)
            .returning(|_, _| Ok(true));

        let use_case = service(hasher, issuing_token_provider());
        let request = LoginRequest::new("admin".to_string(), "admin123".to_string()).unwrap();

        let response = use_case.execute(request).await.unwrap();

        assert_eq!(response.access_token, "signed.jwt.token");
        assert_eq!(response.token_type, "bearer");
        assert_eq!(response.expires_in, 86_400);
    }

    #[tokio::test]
    async fn test_login_wrong_password() {
        let mut provider = MockTokenProviderMock::new();
        provider.expect_generate_access_token().never();

        let use_case = service(hasher_returning(Ok(false)), provider);
        let request = LoginRequest::new("admin".to_string(), "wrong".to_string()).unwrap();

        let result = use_case.execute(request).await;
        assert_eq!(result, Err(LoginError::InvalidCredentials));
    }

    #[tokio::test]
    async fn test_login_wrong_username_still_verifies_hash() {
        // times(1) on verify_password asserts the hash is checked even here
        let mut provider = MockTokenProviderMock::new();
        provider.expect_generate_access_token().never();

        let use_case = service(hasher_returning(Ok(true)), provider);
        let request = LoginRequest::new("root".to_string(), "admin123".to_string()).unwrap();

        let result = use_case.execute(request).await;
        assert_eq!(result, Err(LoginError::InvalidCredentials));
    }

    #[tokio::test]
    async fn test_login_hasher_failure() {
        let use_case = service(
            hasher_returning(Err(HashError::VerifyFailed)),
            MockTokenProviderMock::new(),
        );
        let request = LoginRequest::new("admin".to_string(), "admin123".to_string()).unwrap();

        let result = use_case.execute(request).await;
        assert!(matches!(
            result,
            Err(LoginError::PasswordVerificationFailed(_))
        ));
    }

    #[tokio::test]
    async fn test_login_token_generation_failure() {
        let mut provider = MockTokenProviderMock::new();
        provider
            .expect_generate_access_token()
            .returning(|_| Err(TokenError::EncodingError("bad key".to_string())));

        let use_case = service(hasher_returning(Ok(true)), provider);
        let request = LoginRequest::new("admin".to_string(), "admin123".to_string()).unwrap();

        let result = use_case.execute(request).await;
        assert!(matches!(result, Err(LoginError::TokenGenerationFailed(_))));
    }

    #[test]
    fn test_login_error_display() {
        assert_eq!(
            LoginError::InvalidCredentials.to_string(),
            "Invalid username or password"
        );
        assert_eq!(
            LoginError::TokenGenerationFailed("x".to_string()).to_string(),
            "Token generation failed: x"
        );
    }
}
