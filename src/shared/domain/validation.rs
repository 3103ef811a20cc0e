use std::str::FromStr;

use crate::shared::domain::PatchField;

/// A user-correctable problem with one request field.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{field}: {message}")]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl ValidationError {
    pub fn required(field: &'static str) -> Self {
        Self {
            field,
            message: format!("{field} is required"),
        }
    }

    pub fn invalid(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Required text on create: absent, null or blank all fail.
pub fn required_text(
    field: &'static str,
    value: PatchField<String>,
) -> Result<String, ValidationError> {
    match value.into_option() {
        Some(v) if !v.trim().is_empty() => Ok(v.trim().to_string()),
        _ => Err(ValidationError::required(field)),
    }
}

/// Required text on update: may be omitted, but never cleared.
pub fn patch_required_text(
    field: &'static str,
    value: PatchField<String>,
) -> Result<PatchField<String>, ValidationError> {
    match value {
        PatchField::Unset => Ok(PatchField::Unset),
        PatchField::Null => Err(ValidationError::required(field)),
        PatchField::Value(v) if v.trim().is_empty() => Err(ValidationError::required(field)),
        PatchField::Value(v) => Ok(PatchField::Value(v.trim().to_string())),
    }
}

/// Optional text on create. Forms submit "" for untouched inputs, which is stored as absent.
pub fn optional_text(value: PatchField<String>) -> Option<String> {
    value
        .into_option()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Optional text on update: "" clears the value just like null.
pub fn patch_optional_text(value: PatchField<String>) -> PatchField<String> {
    match value {
        PatchField::Value(v) if v.trim().is_empty() => PatchField::Null,
        PatchField::Value(v) => PatchField::Value(v.trim().to_string()),
        other => other,
    }
}

/// Parses an enumerated text field (`status`, `type`). Blank counts as null.
pub fn parse_choice<T: FromStr>(
    field: &'static str,
    value: PatchField<String>,
    expected: &str,
) -> Result<PatchField<T>, ValidationError> {
    match value {
        PatchField::Unset => Ok(PatchField::Unset),
        PatchField::Null => Ok(PatchField::Null),
        PatchField::Value(v) if v.trim().is_empty() => Ok(PatchField::Null),
        PatchField::Value(v) => v.parse::<T>().map(PatchField::Value).map_err(|_| {
            ValidationError::invalid(
                field,
                format!("{field} must be one of {expected}, got '{}'", v.trim()),
            )
        }),
    }
}
