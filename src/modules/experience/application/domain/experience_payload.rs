use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::modules::experience::application::domain::ExperienceKind;
use crate::modules::experience::application::ports::outgoing::experience_repository::{
    CreateExperienceData, PatchExperienceData,
};
use crate::shared::domain::{
    optional_text, parse_choice, patch_optional_text, patch_required_text, required_text,
    ListInput, PatchField, PublicationStatus, ValidationError,
};

const STATUS_CHOICES: &str = "draft, published";

/// Experience body as sent by the admin forms, used for both create and update.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ExperiencePayload {
    #[serde(default, skip_serializing_if = "PatchField::is_unset")]
    #[schema(value_type = Option<String>, example = "Backend Engineer")]
    pub title: PatchField<String>,

    #[serde(default, skip_serializing_if = "PatchField::is_unset")]
    #[schema(value_type = Option<String>, example = "Acme")]
    pub company: PatchField<String>,

    /// job, internship or freelance
    #[serde(rename = "type", default, skip_serializing_if = "PatchField::is_unset")]
    #[schema(value_type = Option<ExperienceKind>)]
    pub kind: PatchField<String>,

    #[serde(default, skip_serializing_if = "PatchField::is_unset")]
    #[schema(value_type = Option<String>)]
    pub description: PatchField<String>,

    #[serde(default, skip_serializing_if = "PatchField::is_unset")]
    #[schema(value_type = Option<Vec<String>>)]
    pub responsibilities: PatchField<ListInput>,

    #[serde(default, skip_serializing_if = "PatchField::is_unset")]
    #[schema(value_type = Option<Vec<String>>, example = json!(["Rust", "Kafka"]))]
    pub skills: PatchField<ListInput>,

    #[serde(default, skip_serializing_if = "PatchField::is_unset")]
    #[schema(value_type = Option<String>, example = "Jan 2023")]
    pub start_date: PatchField<String>,

    #[serde(default, skip_serializing_if = "PatchField::is_unset")]
    #[schema(value_type = Option<String>)]
    pub end_date: PatchField<String>,

    #[serde(default, skip_serializing_if = "PatchField::is_unset")]
    #[schema(value_type = Option<bool>)]
    pub current: PatchField<bool>,

    #[serde(default, skip_serializing_if = "PatchField::is_unset")]
    #[schema(value_type = Option<String>)]
    pub logo_url: PatchField<String>,

    #[serde(default, skip_serializing_if = "PatchField::is_unset")]
    #[schema(value_type = Option<PublicationStatus>)]
    pub status: PatchField<String>,
}

impl ExperiencePayload {
    /// Required: title, company, type, description, start_date (checked in that order).
    pub fn into_create_data(self) -> Result<CreateExperienceData, ValidationError> {
        let title = required_text("title", self.title)?;
        let company = required_text("company", self.company)?;
        let kind = parse_choice::<ExperienceKind>("type", self.kind, ExperienceKind::CHOICES)?
            .into_option()
            .ok_or_else(|| ValidationError::required("type"))?;
        let description = required_text("description", self.description)?;
        let start_date = required_text("start_date", self.start_date)?;
        let status = parse_choice::<PublicationStatus>("status", self.status, STATUS_CHOICES)?
            .into_option()
            .unwrap_or_default();

        let current = self.current.into_option().unwrap_or(false);
        let end_date = if current {
            None
        } else {
            optional_text(self.end_date)
        };

        Ok(CreateExperienceData {
            title,
            company,
            kind,
            description,
            responsibilities: normalize_list(self.responsibilities),
            skills: normalize_list(self.skills),
            start_date,
            end_date,
            current,
            logo_url: optional_text(self.logo_url),
            status,
        })
    }

    /// Required fields may be omitted but not cleared. Switching to
    /// `current: true` also clears the stored end date.
    pub fn into_patch_data(self) -> Result<PatchExperienceData, ValidationError> {
        let kind = match parse_choice::<ExperienceKind>("type", self.kind, ExperienceKind::CHOICES)? {
            PatchField::Null => return Err(ValidationError::required("type")),
            other => other,
        };
        let status = match parse_choice::<PublicationStatus>("status", self.status, STATUS_CHOICES)? {
            PatchField::Null => return Err(ValidationError::required("status")),
            other => other,
        };

        let current = match self.current {
            PatchField::Null => PatchField::Value(false),
            other => other,
        };
        let end_date = match current {
            PatchField::Value(true) => PatchField::Null,
            _ => patch_optional_text(self.end_date),
        };

        Ok(PatchExperienceData {
            title: patch_required_text("title", self.title)?,
            company: patch_required_text("company", self.company)?,
            kind,
            description: patch_required_text("description", self.description)?,
            responsibilities: patch_list(self.responsibilities),
            skills: patch_list(self.skills),
            start_date: patch_required_text("start_date", self.start_date)?,
            end_date,
            current,
            logo_url: patch_optional_text(self.logo_url),
            status,
        })
    }
}

fn normalize_list(value: PatchField<ListInput>) -> Vec<String> {
    value.into_option().map(ListInput::normalize).unwrap_or_default()
}

fn patch_list(value: PatchField<ListInput>) -> PatchField<Vec<String>> {
    match value {
        PatchField::Unset => PatchField::Unset,
        PatchField::Null => PatchField::Value(Vec::new()),
        PatchField::Value(list) => PatchField::Value(list.normalize()),
    }
}
