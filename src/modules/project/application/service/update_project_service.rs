use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::project::application::domain::ProjectPayload;
use crate::modules::project::application::ports::incoming::use_cases::{
    UpdateProjectError, UpdateProjectUseCase,
};
use crate::modules::project::application::ports::outgoing::project_query::ProjectView;
use crate::modules::project::application::ports::outgoing::project_repository::{
    ProjectRepository, ProjectRepositoryError,
};

pub struct UpdateProjectService<R>
where
    R: ProjectRepository,
{
    repository: R,
}

impl<R> UpdateProjectService<R>
where
    R: ProjectRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> UpdateProjectUseCase for UpdateProjectService<R>
where
    R: ProjectRepository + Send + Sync,
{
    async fn execute(
        &self,
        project_id: Uuid,
        payload: ProjectPayload,
    ) -> Result<ProjectView, UpdateProjectError> {
        let data = payload
            .into_patch_data()
            .map_err(UpdateProjectError::Validation)?;

        self.repository
            .patch_project(project_id, data)
            .await
            .map_err(|e| match e {
                ProjectRepositoryError::NotFound => UpdateProjectError::NotFound,
                ProjectRepositoryError::DatabaseError(msg)
                | ProjectRepositoryError::SerializationError(msg) => {
                    UpdateProjectError::RepositoryError(msg)
                }
            })
    }
}
