use async_trait::async_trait;

use crate::modules::project::application::ports::outgoing::project_query::{
    ProjectQueryError, ProjectView,
};
use crate::shared::domain::StatusFilter;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GetProjectsError {
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

impl From<ProjectQueryError> for GetProjectsError {
    fn from(err: ProjectQueryError) -> Self {
        match err {
            ProjectQueryError::DatabaseError(msg) => GetProjectsError::QueryFailed(msg),
            ProjectQueryError::NotFound => GetProjectsError::QueryFailed("Not found".to_string()),
            ProjectQueryError::SerializationError(msg) => GetProjectsError::QueryFailed(msg),
        }
    }
}

#[async_trait]
pub trait GetProjectsUseCase: Send + Sync {
    async fn execute(&self, filter: StatusFilter) -> Result<Vec<ProjectView>, GetProjectsError>;
}
