use async_trait::async_trait;

use crate::modules::experience::application::domain::ExperiencePayload;
use crate::modules::experience::application::ports::incoming::use_cases::{
    CreateExperienceError, CreateExperienceUseCase,
};
use crate::modules::experience::application::ports::outgoing::experience_query::ExperienceView;
use crate::modules::experience::application::ports::outgoing::experience_repository::{
    ExperienceRepository, ExperienceRepositoryError,
};

pub struct CreateExperienceService<R>
where
    R: ExperienceRepository,
{
    repository: R,
}

impl<R> CreateExperienceService<R>
where
    R: ExperienceRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> CreateExperienceUseCase for CreateExperienceService<R>
where
    R: ExperienceRepository + Send + Sync,
{
    async fn execute(
        &self,
        payload: ExperiencePayload,
    ) -> Result<ExperienceView, CreateExperienceError> {
        let data = payload
            .into_create_data()
            .map_err(CreateExperienceError::Validation)?;

        self.repository
            .create_experience(data)
            .await
            .map_err(|e| match e {
                ExperienceRepositoryError::DatabaseError(msg)
                | ExperienceRepositoryError::SerializationError(msg) => {
                    CreateExperienceError::RepositoryError(msg)
                }
                ExperienceRepositoryError::NotFound => CreateExperienceError::RepositoryError(
                    "unexpected not found while creating experience".to_string(),
                ),
            })
    }
}
