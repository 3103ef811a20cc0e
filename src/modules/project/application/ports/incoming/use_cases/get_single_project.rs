use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::project::application::ports::outgoing::project_query::ProjectView;
use crate::shared::domain::StatusFilter;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GetSingleProjectError {
    #[error("Project not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait GetSingleProjectUseCase: Send + Sync {
    /// A project outside `visibility` is reported as `NotFound`.
    async fn execute(
        &self,
        project_id: Uuid,
        visibility: StatusFilter,
    ) -> Result<ProjectView, GetSingleProjectError>;
}
