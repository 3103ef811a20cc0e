use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::experience::application::domain::ExperiencePayload;
use crate::modules::experience::application::ports::incoming::use_cases::{
    UpdateExperienceError, UpdateExperienceUseCase,
};
use crate::modules::experience::application::ports::outgoing::experience_query::ExperienceView;
use crate::modules::experience::application::ports::outgoing::experience_repository::{
    ExperienceRepository, ExperienceRepositoryError,
};

pub struct UpdateExperienceService<R>
where
    R: ExperienceRepository,
{
    repository: R,
}

impl<R> UpdateExperienceService<R>
where
    R: ExperienceRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> UpdateExperienceUseCase for UpdateExperienceService<R>
where
    R: ExperienceRepository + Send + Sync,
{
    async fn execute(
        &self,
        experience_id: Uuid,
        payload: ExperiencePayload,
    ) -> Result<ExperienceView, UpdateExperienceError> {
        let data = payload
            .into_patch_data()
            .map_err(UpdateExperienceError::Validation)?;

        self.repository
            .patch_experience(experience_id, data)
            .await
            .map_err(|e| match e {
                ExperienceRepositoryError::NotFound => UpdateExperienceError::NotFound,
                ExperienceRepositoryError::DatabaseError(msg)
                | ExperienceRepositoryError::SerializationError(msg) => {
                    UpdateExperienceError::RepositoryError(msg)
                }
            })
    }
}
