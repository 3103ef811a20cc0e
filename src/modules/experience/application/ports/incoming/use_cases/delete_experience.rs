use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::experience::application::ports::outgoing::experience_repository::ExperienceRepositoryError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DeleteExperienceError {
    #[error("Experience not found")]
    ExperienceNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<ExperienceRepositoryError> for DeleteExperienceError {
    fn from(err: ExperienceRepositoryError) -> Self {
        match err {
            ExperienceRepositoryError::NotFound => DeleteExperienceError::ExperienceNotFound,
            ExperienceRepositoryError::DatabaseError(msg)
            | ExperienceRepositoryError::SerializationError(msg) => {
                DeleteExperienceError::RepositoryError(msg)
            }
        }
    }
}

#[async_trait]
pub trait DeleteExperienceUseCase: Send + Sync {
    async fn execute(&self, experience_id: Uuid) -> Result<(), DeleteExperienceError>;
}
