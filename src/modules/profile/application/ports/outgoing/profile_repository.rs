use async_trait::async_trait;

use crate::modules::profile::application::ports::outgoing::profile_query::ProfileView;
use crate::shared::domain::PatchField;

#[derive(Debug, Clone, PartialEq)]
pub struct CreateProfileData {
    pub name: String,
    pub title: String,
    pub bio: String,
    pub email: String,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub avatar_url: Option<String>,
    pub resume_url: Option<String>,
    pub github: Option<String>,
    pub linkedin: Option<String>,
    pub twitter: Option<String>,
    pub website: Option<String>,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PatchProfileData {
    pub name: PatchField<String>,
    pub title: PatchField<String>,
    pub bio: PatchField<String>,
    pub email: PatchField<String>,
    pub phone: PatchField<String>,
    pub location: PatchField<String>,
    pub avatar_url: PatchField<String>,
    pub resume_url: PatchField<String>,
    pub github: PatchField<String>,
    pub linkedin: PatchField<String>,
    pub twitter: PatchField<String>,
    pub website: PatchField<String>,
    pub skills: PatchField<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProfileRepositoryError {
    #[error("Profile not found")]
    NotFound,

    #[error("Profile already exists")]
    AlreadyExists,

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Inserts the singleton row. Fails with `AlreadyExists` if it is there.
    async fn create_profile(
        &self,
        data: CreateProfileData,
    ) -> Result<ProfileView, ProfileRepositoryError>;

    /// Merges onto the singleton row. `NotFound` before the first create.
    async fn patch_profile(
        &self,
        data: PatchProfileData,
    ) -> Result<ProfileView, ProfileRepositoryError>;
}
