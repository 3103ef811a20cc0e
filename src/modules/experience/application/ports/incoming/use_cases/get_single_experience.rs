use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::experience::application::ports::outgoing::experience_query::ExperienceView;
use crate::shared::domain::StatusFilter;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GetSingleExperienceError {
    #[error("Experience not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait GetSingleExperienceUseCase: Send + Sync {
    /// An entry outside `visibility` is reported as `NotFound`.
    async fn execute(
        &self,
        experience_id: Uuid,
        visibility: StatusFilter,
    ) -> Result<ExperienceView, GetSingleExperienceError>;
}
