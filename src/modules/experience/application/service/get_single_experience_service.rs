use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::experience::application::ports::incoming::use_cases::{
    GetSingleExperienceError, GetSingleExperienceUseCase,
};
use crate::modules::experience::application::ports::outgoing::experience_query::{
    ExperienceQuery, ExperienceQueryError, ExperienceView,
};
use crate::shared::domain::StatusFilter;

pub struct GetSingleExperienceService<Q>
where
    Q: ExperienceQuery,
{
    query: Q,
}

impl<Q> GetSingleExperienceService<Q>
where
    Q: ExperienceQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetSingleExperienceUseCase for GetSingleExperienceService<Q>
where
    Q: ExperienceQuery + Send + Sync,
{
    async fn execute(
        &self,
        experience_id: Uuid,
        visibility: StatusFilter,
    ) -> Result<ExperienceView, GetSingleExperienceError> {
        let experience = self
            .query
            .get_by_id(experience_id)
            .await
            .map_err(|e| match e {
                ExperienceQueryError::NotFound => GetSingleExperienceError::NotFound,
                ExperienceQueryError::DatabaseError(msg)
                | ExperienceQueryError::SerializationError(msg) => {
                    GetSingleExperienceError::RepositoryError(msg)
                }
            })?;

        if !visibility.matches(experience.status) {
            return Err(GetSingleExperienceError::NotFound);
        }

        Ok(experience)
    }
}
