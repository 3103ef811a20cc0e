use async_trait::async_trait;
use std::fmt;
use uuid::Uuid;

use crate::modules::experience::application::domain::ExperiencePayload;
use crate::modules::experience::application::ports::outgoing::experience_query::ExperienceView;
use crate::shared::domain::ValidationError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateExperienceError {
    Validation(ValidationError),
    NotFound,
    RepositoryError(String),
}

impl fmt::Display for UpdateExperienceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UpdateExperienceError::Validation(err) => write!(f, "validation error: {}", err),
            UpdateExperienceError::NotFound => write!(f, "experience not found"),
            UpdateExperienceError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

#[async_trait]
pub trait UpdateExperienceUseCase: Send + Sync {
    async fn execute(
        &self,
        experience_id: Uuid,
        payload: ExperiencePayload,
    ) -> Result<ExperienceView, UpdateExperienceError>;
}
