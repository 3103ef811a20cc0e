use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::modules::project::application::ports::outgoing::project_repository::{
    CreateProjectData, PatchProjectData,
};
use crate::shared::domain::{
    optional_text, parse_choice, patch_optional_text, patch_required_text, required_text,
    ListInput, PatchField, PublicationStatus, ValidationError,
};

const STATUS_CHOICES: &str = "draft, published";

/// Project body as sent by the admin forms, used for both create and update.
///
/// Every field is a `PatchField` so the same shape can tell "omitted" from
/// "explicitly null". List fields take a comma-separated string or an array.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProjectPayload {
    #[serde(default, skip_serializing_if = "PatchField::is_unset")]
    #[schema(value_type = Option<String>, example = "Portfolio API")]
    pub title: PatchField<String>,

    #[serde(default, skip_serializing_if = "PatchField::is_unset")]
    #[schema(value_type = Option<String>, example = "Backend for my portfolio site")]
    pub description: PatchField<String>,

    #[serde(default, skip_serializing_if = "PatchField::is_unset")]
    #[schema(value_type = Option<String>)]
    pub long_description: PatchField<String>,

    #[serde(default, skip_serializing_if = "PatchField::is_unset")]
    #[schema(value_type = Option<Vec<String>>, example = json!(["Rust", "PostgreSQL"]))]
    pub tech_stack: PatchField<ListInput>,

    #[serde(default, skip_serializing_if = "PatchField::is_unset")]
    #[schema(value_type = Option<Vec<String>>, example = json!(["backend"]))]
    pub tags: PatchField<ListInput>,

    #[serde(default, skip_serializing_if = "PatchField::is_unset")]
    #[schema(value_type = Option<String>)]
    pub github_url: PatchField<String>,

    #[serde(default, skip_serializing_if = "PatchField::is_unset")]
    #[schema(value_type = Option<String>)]
    pub live_url: PatchField<String>,

    #[serde(default, skip_serializing_if = "PatchField::is_unset")]
    #[schema(value_type = Option<String>)]
    pub image_url: PatchField<String>,

    #[serde(default, skip_serializing_if = "PatchField::is_unset")]
    #[schema(value_type = Option<bool>)]
    pub featured: PatchField<bool>,

    #[serde(default, skip_serializing_if = "PatchField::is_unset")]
    #[schema(value_type = Option<PublicationStatus>)]
    pub status: PatchField<String>,
}

impl ProjectPayload {
    /// Validates a create body. `title` and `description` are required,
    /// a missing status means draft.
    pub fn into_create_data(self) -> Result<CreateProjectData, ValidationError> {
        let title = required_text("title", self.title)?;
        let description = required_text("description", self.description)?;
        let status = parse_choice::<PublicationStatus>("status", self.status, STATUS_CHOICES)?
            .into_option()
            .unwrap_or_default();

        Ok(CreateProjectData {
            title,
            description,
            long_description: optional_text(self.long_description),
            tech_stack: normalize_list(self.tech_stack),
            tags: normalize_list(self.tags),
            github_url: optional_text(self.github_url),
            live_url: optional_text(self.live_url),
            image_url: optional_text(self.image_url),
            featured: self.featured.into_option().unwrap_or(false),
            status,
        })
    }

    /// Validates an update body. Required fields may be omitted but not cleared.
    pub fn into_patch_data(self) -> Result<PatchProjectData, ValidationError> {
        let status = match parse_choice::<PublicationStatus>("status", self.status, STATUS_CHOICES)? {
            PatchField::Null => return Err(ValidationError::required("status")),
            other => other,
        };

        Ok(PatchProjectData {
            title: patch_required_text("title", self.title)?,
            description: patch_required_text("description", self.description)?,
            long_description: patch_optional_text(self.long_description),
            tech_stack: patch_list(self.tech_stack),
            tags: patch_list(self.tags),
            github_url: patch_optional_text(self.github_url),
            live_url: patch_optional_text(self.live_url),
            image_url: patch_optional_text(self.image_url),
            featured: match self.featured {
                PatchField::Null => PatchField::Value(false),
                other => other,
            },
            status,
        })
    }
}

fn normalize_list(value: PatchField<ListInput>) -> Vec<String> {
    value.into_option().map(ListInput::normalize).unwrap_or_default()
}

// Lists are never null in storage, clearing one stores an empty list
fn patch_list(value: PatchField<ListInput>) -> PatchField<Vec<String>> {
    match value {
        PatchField::Unset => PatchField::Unset,
        PatchField::Null => PatchField::Value(Vec::new()),
        PatchField::Value(list) => PatchField::Value(list.normalize()),
    }
}
