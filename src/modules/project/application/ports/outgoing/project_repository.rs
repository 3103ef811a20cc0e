// src/modules/project/application/ports/outgoing/project_repository.rs

use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::project::application::ports::outgoing::project_query::ProjectView;
use crate::shared::domain::{PatchField, PublicationStatus};

//
// ──────────────────────────────────────────────────────────
// DTOs
// ──────────────────────────────────────────────────────────
//

/// Validated, normalized data for a new project.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateProjectData {
    pub title: String,
    pub description: String,
    pub long_description: Option<String>,

    /// Stored as JSONB in DB (array of strings)
    pub tech_stack: Vec<String>,

    /// Stored as JSONB in DB (array of strings)
    pub tags: Vec<String>,

    pub github_url: Option<String>,
    pub live_url: Option<String>,
    pub image_url: Option<String>,
    pub featured: bool,
    pub status: PublicationStatus,
}

/// Patch semantics:
/// - title/description/featured/status: Unset => keep, Value => replace
/// - tech_stack/tags: Value(vec) => replace whole array (no merge)
/// - long_description and urls: Unset => keep, Null => clear, Value => set
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PatchProjectData {
    pub title: PatchField<String>,
    pub description: PatchField<String>,
    pub long_description: PatchField<String>,
    pub tech_stack: PatchField<Vec<String>>,
    pub tags: PatchField<Vec<String>>,
    pub github_url: PatchField<String>,
    pub live_url: PatchField<String>,
    pub image_url: PatchField<String>,
    pub featured: PatchField<bool>,
    pub status: PatchField<PublicationStatus>,
}

impl PatchProjectData {
    pub fn is_empty(&self) -> bool {
        self.title.is_unset()
            && self.description.is_unset()
            && self.long_description.is_unset()
            && self.tech_stack.is_unset()
            && self.tags.is_unset()
            && self.github_url.is_unset()
            && self.live_url.is_unset()
            && self.image_url.is_unset()
            && self.featured.is_unset()
            && self.status.is_unset()
    }
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProjectRepositoryError {
    #[error("Project not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

//
// ──────────────────────────────────────────────────────────
// Port (Command-side)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait ProjectRepository: Send + Sync {
    /// Assigns a fresh id and timestamps.
    async fn create_project(
        &self,
        data: CreateProjectData,
    ) -> Result<ProjectView, ProjectRepositoryError>;

    /// Patch without pre-read by the use case. Unknown id is `NotFound`.
    async fn patch_project(
        &self,
        project_id: Uuid,
        data: PatchProjectData,
    ) -> Result<ProjectView, ProjectRepositoryError>;

    /// Hard delete. Unknown id, including an already deleted one, is `NotFound`.
    async fn delete_project(&self, project_id: Uuid) -> Result<(), ProjectRepositoryError>;
}
