use async_trait::async_trait;

use crate::modules::experience::application::ports::outgoing::experience_query::{
    ExperienceQueryError, ExperienceView,
};
use crate::shared::domain::StatusFilter;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GetExperiencesError {
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

impl From<ExperienceQueryError> for GetExperiencesError {
    fn from(err: ExperienceQueryError) -> Self {
        GetExperiencesError::QueryFailed(err.to_string())
    }
}

#[async_trait]
pub trait GetExperiencesUseCase: Send + Sync {
    async fn execute(
        &self,
        filter: StatusFilter,
    ) -> Result<Vec<ExperienceView>, GetExperiencesError>;
}
