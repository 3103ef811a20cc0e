use async_trait::async_trait;
use std::fmt;

use crate::modules::profile::application::domain::ProfilePayload;
use crate::modules::profile::application::ports::outgoing::profile_query::ProfileView;
use crate::shared::domain::ValidationError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpsertProfileError {
    Validation(ValidationError),
    RepositoryError(String),
}

impl fmt::Display for UpsertProfileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UpsertProfileError::Validation(err) => write!(f, "validation error: {}", err),
            UpsertProfileError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

#[async_trait]
pub trait UpsertProfileUseCase: Send + Sync {
    async fn execute(&self, payload: ProfilePayload) -> Result<ProfileView, UpsertProfileError>;
}
