use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::experience::application::domain::ExperienceKind;
use crate::modules::experience::application::ports::outgoing::experience_query::ExperienceView;
use crate::shared::domain::{PatchField, PublicationStatus};

/// Validated, normalized data for a new experience entry.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateExperienceData {
    pub title: String,
    pub company: String,
    pub kind: ExperienceKind,
    pub description: String,
    pub responsibilities: Vec<String>,
    pub skills: Vec<String>,
    pub start_date: String,
    pub end_date: Option<String>,
    pub current: bool,
    pub logo_url: Option<String>,
    pub status: PublicationStatus,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PatchExperienceData {
    pub title: PatchField<String>,
    pub company: PatchField<String>,
    pub kind: PatchField<ExperienceKind>,
    pub description: PatchField<String>,
    pub responsibilities: PatchField<Vec<String>>,
    pub skills: PatchField<Vec<String>>,
    pub start_date: PatchField<String>,
    pub end_date: PatchField<String>,
    pub current: PatchField<bool>,
    pub logo_url: PatchField<String>,
    pub status: PatchField<PublicationStatus>,
}

impl PatchExperienceData {
    pub fn is_empty(&self) -> bool {
        self.title.is_unset()
            && self.company.is_unset()
            && self.kind.is_unset()
            && self.description.is_unset()
            && self.responsibilities.is_unset()
            && self.skills.is_unset()
            && self.start_date.is_unset()
            && self.end_date.is_unset()
            && self.current.is_unset()
            && self.logo_url.is_unset()
            && self.status.is_unset()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExperienceRepositoryError {
    #[error("Experience not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

#[async_trait]
pub trait ExperienceRepository: Send + Sync {
    async fn create_experience(
        &self,
        data: CreateExperienceData,
    ) -> Result<ExperienceView, ExperienceRepositoryError>;

    async fn patch_experience(
        &self,
        experience_id: Uuid,
        data: PatchExperienceData,
    ) -> Result<ExperienceView, ExperienceRepositoryError>;

    async fn delete_experience(&self, experience_id: Uuid)
        -> Result<(), ExperienceRepositoryError>;
}
