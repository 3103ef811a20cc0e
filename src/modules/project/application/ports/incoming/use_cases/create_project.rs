use async_trait::async_trait;
use std::fmt;

use crate::modules::project::application::domain::ProjectPayload;
use crate::modules::project::application::ports::outgoing::project_query::ProjectView;
use crate::shared::domain::ValidationError;

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreateProjectError {
    Validation(ValidationError),
    RepositoryError(String),
}

impl fmt::Display for CreateProjectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CreateProjectError::Validation(err) => write!(f, "validation error: {}", err),
            CreateProjectError::RepositoryError(msg) => {
                write!(f, "repository error: {}", msg)
            }
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Use case trait
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait CreateProjectUseCase: Send + Sync {
    async fn execute(&self, payload: ProjectPayload) -> Result<ProjectView, CreateProjectError>;
}
