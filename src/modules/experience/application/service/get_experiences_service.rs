use async_trait::async_trait;

use crate::modules::experience::application::ports::incoming::use_cases::{
    GetExperiencesError, GetExperiencesUseCase,
};
use crate::modules::experience::application::ports::outgoing::experience_query::{
    ExperienceQuery, ExperienceView,
};
use crate::shared::domain::StatusFilter;

pub struct GetExperiencesService<Q>
where
    Q: ExperienceQuery,
{
    query: Q,
}

impl<Q> GetExperiencesService<Q>
where
    Q: ExperienceQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetExperiencesUseCase for GetExperiencesService<Q>
where
    Q: ExperienceQuery + Send + Sync,
{
    async fn execute(
        &self,
        filter: StatusFilter,
    ) -> Result<Vec<ExperienceView>, GetExperiencesError> {
        self.query.list(filter).await.map_err(GetExperiencesError::from)
    }
}
