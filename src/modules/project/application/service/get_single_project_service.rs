use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::project::application::ports::incoming::use_cases::{
    GetSingleProjectError, GetSingleProjectUseCase,
};
use crate::modules::project::application::ports::outgoing::project_query::{
    ProjectQuery, ProjectQueryError, ProjectView,
};
use crate::shared::domain::StatusFilter;

pub struct GetSingleProjectService<Q>
where
    Q: ProjectQuery,
{
    query: Q,
}

impl<Q> GetSingleProjectService<Q>
where
    Q: ProjectQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetSingleProjectUseCase for GetSingleProjectService<Q>
where
    Q: ProjectQuery + Send + Sync,
{
    async fn execute(
        &self,
        project_id: Uuid,
        visibility: StatusFilter,
    ) -> Result<ProjectView, GetSingleProjectError> {
        let project = self
            .query
            .get_by_id(project_id)
            .await
            .map_err(|e| match e {
                ProjectQueryError::NotFound => GetSingleProjectError::NotFound,
                ProjectQueryError::DatabaseError(msg)
                | ProjectQueryError::SerializationError(msg) => {
                    GetSingleProjectError::RepositoryError(msg)
                }
            })?;

        // Hidden drafts look exactly like missing ones
        if !visibility.matches(project.status) {
            return Err(GetSingleProjectError::NotFound);
        }

        Ok(project)
    }
}
