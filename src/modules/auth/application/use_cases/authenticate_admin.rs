use crate::auth::application::domain::entities::AdminIdentity;
use crate::auth::application::ports::outgoing::{TokenError, TokenProvider};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthenticateError {
    MissingToken,
    InvalidToken(TokenError),
}

impl std::fmt::Display for AuthenticateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AuthenticateError::MissingToken => write!(f, "Missing bearer token"),
            AuthenticateError::InvalidToken(e) => write!(f, "Invalid token: {}", e),
        }
    }
}

impl std::error::Error for AuthenticateError {}

/// Resolves a bearer token to the admin identity it was issued for.
pub fn authenticate_admin(
    provider: &dyn TokenProvider,
    token: Option<&str>,
) -> Result<AdminIdentity, AuthenticateError> {
    let token = match token.map(str::trim) {
        Some(t) if !t.is_empty() => t,
        _ => return Err(AuthenticateError::MissingToken),
    };

    provider
        .verify_token(token)
        .map(|claims| AdminIdentity::new(claims.sub))
        .map_err(AuthenticateError::InvalidToken)
}
