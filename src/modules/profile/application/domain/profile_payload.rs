use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::modules::profile::application::ports::outgoing::profile_repository::{
    CreateProfileData, PatchProfileData,
};
use crate::shared::domain::{
    optional_text, patch_optional_text, patch_required_text, required_text, ListInput,
    PatchField, ValidationError,
};

/// Body of `PUT /api/admin/profile`. The same shape creates the profile on
/// first write and patches it afterwards.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProfilePayload {
    #[serde(default, skip_serializing_if = "PatchField::is_unset")]
    #[schema(value_type = Option<String>, example = "Jane Doe")]
    pub name: PatchField<String>,

    #[serde(default, skip_serializing_if = "PatchField::is_unset")]
    #[schema(value_type = Option<String>, example = "Software Engineer")]
    pub title: PatchField<String>,

    #[serde(default, skip_serializing_if = "PatchField::is_unset")]
    #[schema(value_type = Option<String>)]
    pub bio: PatchField<String>,

    #[serde(default, skip_serializing_if = "PatchField::is_unset")]
    #[schema(value_type = Option<String>, example = "jane@example.com")]
    pub email: PatchField<String>,

    #[serde(default, skip_serializing_if = "PatchField::is_unset")]
    #[schema(value_type = Option<String>)]
    pub phone: PatchField<String>,

    #[serde(default, skip_serializing_if = "PatchField::is_unset")]
    #[schema(value_type = Option<String>)]
    pub location: PatchField<String>,

    #[serde(default, skip_serializing_if = "PatchField::is_unset")]
    #[schema(value_type = Option<String>)]
    pub avatar_url: PatchField<String>,

    #[serde(default, skip_serializing_if = "PatchField::is_unset")]
    #[schema(value_type = Option<String>)]
    pub resume_url: PatchField<String>,

    #[serde(default, skip_serializing_if = "PatchField::is_unset")]
    #[schema(value_type = Option<String>)]
    pub github: PatchField<String>,

    #[serde(default, skip_serializing_if = "PatchField::is_unset")]
    #[schema(value_type = Option<String>)]
    pub linkedin: PatchField<String>,

    #[serde(default, skip_serializing_if = "PatchField::is_unset")]
    #[schema(value_type = Option<String>)]
    pub twitter: PatchField<String>,

    #[serde(default, skip_serializing_if = "PatchField::is_unset")]
    #[schema(value_type = Option<String>)]
    pub website: PatchField<String>,

    #[serde(default, skip_serializing_if = "PatchField::is_unset")]
    #[schema(value_type = Option<Vec<String>>, example = json!(["Rust", "TypeScript"]))]
    pub skills: PatchField<ListInput>,
}

impl ProfilePayload {
    /// First write: `name`, `title`, `bio` and `email` are required.
    pub fn into_create_data(self) -> Result<CreateProfileData, ValidationError> {
        Ok(CreateProfileData {
            name: required_text("name", self.name)?,
            title: required_text("title", self.title)?,
            bio: required_text("bio", self.bio)?,
            email: required_text("email", self.email)?,
            phone: optional_text(self.phone),
            location: optional_text(self.location),
            avatar_url: optional_text(self.avatar_url),
            resume_url: optional_text(self.resume_url),
            github: optional_text(self.github),
            linkedin: optional_text(self.linkedin),
            twitter: optional_text(self.twitter),
            website: optional_text(self.website),
            skills: self
                .skills
                .into_option()
                .map(ListInput::normalize)
                .unwrap_or_default(),
        })
    }

    pub fn into_patch_data(self) -> Result<PatchProfileData, ValidationError> {
        Ok(PatchProfileData {
            name: patch_required_text("name", self.name)?,
            title: patch_required_text("title", self.title)?,
            bio: patch_required_text("bio", self.bio)?,
            email: patch_required_text("email", self.email)?,
            phone: patch_optional_text(self.phone),
            location: patch_optional_text(self.location),
            avatar_url: patch_optional_text(self.avatar_url),
            resume_url: patch_optional_text(self.resume_url),
            github: patch_optional_text(self.github),
            linkedin: patch_optional_text(self.linkedin),
            twitter: patch_optional_text(self.twitter),
            website: patch_optional_text(self.website),
            skills: match self.skills {
                PatchField::Unset => PatchField::Unset,
                PatchField::Null => PatchField::Value(Vec::new()),
                PatchField::Value(list) => PatchField::Value(list.normalize()),
            },
        })
    }
}
