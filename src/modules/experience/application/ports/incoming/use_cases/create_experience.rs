use async_trait::async_trait;
use std::fmt;

use crate::modules::experience::application::domain::ExperiencePayload;
use crate::modules::experience::application::ports::outgoing::experience_query::ExperienceView;
use crate::shared::domain::ValidationError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreateExperienceError {
    Validation(ValidationError),
    RepositoryError(String),
}

impl fmt::Display for CreateExperienceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CreateExperienceError::Validation(err) => write!(f, "validation error: {}", err),
            CreateExperienceError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

#[async_trait]
pub trait CreateExperienceUseCase: Send + Sync {
    async fn execute(
        &self,
        payload: ExperiencePayload,
    ) -> Result<ExperienceView, CreateExperienceError>;
}
