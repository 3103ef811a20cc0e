use async_trait::async_trait;
use std::fmt;
use uuid::Uuid;

use crate::modules::project::application::domain::ProjectPayload;
use crate::modules::project::application::ports::outgoing::project_query::ProjectView;
use crate::shared::domain::ValidationError;

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateProjectError {
    Validation(ValidationError),
    NotFound,
    RepositoryError(String),
}

impl fmt::Display for UpdateProjectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UpdateProjectError::Validation(err) => write!(f, "validation error: {}", err),
            UpdateProjectError::NotFound => write!(f, "project not found"),
            UpdateProjectError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Use case trait
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait UpdateProjectUseCase: Send + Sync {
    async fn execute(
        &self,
        project_id: Uuid,
        payload: ProjectPayload,
    ) -> Result<ProjectView, UpdateProjectError>;
}
