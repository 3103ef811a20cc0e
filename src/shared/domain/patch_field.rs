// src/shared/domain/patch_field.rs

use serde::{Deserialize, Deserializer, Serialize};

//
// ──────────────────────────────────────────────────────────
// PatchField (explicit merge semantics for updates)
// ──────────────────────────────────────────────────────────
// Meaning:
// - Unset: field not provided => keep stored value
// - Null: explicitly null => clear the column (only for nullable fields)
// - Value(v): replace with v
//
// Serde behavior:
// - omitted field => Unset (because of #[serde(default)])
// - null => Null
// - value => Value(value)
//
// Containers must pair `#[serde(default)]` with
// `#[serde(skip_serializing_if = "PatchField::is_unset")]`, Unset has no wire form.
//

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum PatchField<T> {
    #[serde(skip)]
    Unset,
    Null,
    Value(T),
}

impl<T> Default for PatchField<T> {
    fn default() -> Self {
        PatchField::Unset
    }
}

// Deserialized through `Option<T>` so a mistyped value reports T's own
// error ("invalid type: integer, expected a string").
impl<'de, T: Deserialize<'de>> Deserialize<'de> for PatchField<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Option::<T>::deserialize(deserializer)? {
            Some(v) => PatchField::Value(v),
            None => PatchField::Null,
        })
    }
}

impl<T> PatchField<T> {
    pub fn is_unset(&self) -> bool {
        matches!(self, PatchField::Unset)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, PatchField::Null)
    }

    pub fn as_value(&self) -> Option<&T> {
        if let PatchField::Value(v) = self {
            Some(v)
        } else {
            None
        }
    }

    /// Collapses the patch into an initial value: Unset and Null both mean "absent".
    pub fn into_option(self) -> Option<T> {
        match self {
            PatchField::Value(v) => Some(v),
            PatchField::Unset | PatchField::Null => None,
        }
    }

    /// Applies the patch on top of a current nullable value.
    pub fn apply_to(self, current: Option<T>) -> Option<T> {
        match self {
            PatchField::Unset => current,
            PatchField::Null => None,
            PatchField::Value(v) => Some(v),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Default, Serialize, Deserialize)]
    struct Doc {
        #[serde(default, skip_serializing_if = "PatchField::is_unset")]
        url: PatchField<String>,
    }

    #[test]
    fn omitted_field_deserializes_as_unset() {
        let doc: Doc = serde_json::from_value(json!({})).unwrap();
        assert!(doc.url.is_unset());
    }

    #[test]
    fn explicit_null_deserializes_as_null() {
        let doc: Doc = serde_json::from_value(json!({ "url": null })).unwrap();
        assert!(doc.url.is_null());
    }

    #[test]
    fn value_deserializes_as_value() {
        let doc: Doc = serde_json::from_value(json!({ "url": "https://a.dev" })).unwrap();
        assert_eq!(doc.url.as_value().map(String::as_str), Some("https://a.dev"));
    }

    #[test]
    fn mistyped_value_keeps_inner_error() {
        let err = serde_json::from_value::<Doc>(json!({ "url": 5 })).unwrap_err();
        assert!(err.to_string().contains("expected a string"), "{}", err);
    }

    #[test]
    fn unset_is_skipped_on_serialize() {
        let value = serde_json::to_value(Doc::default()).unwrap();
        assert_eq!(value, json!({}));

        let value = serde_json::to_value(Doc {
            url: PatchField::Null,
        })
        .unwrap();
        assert_eq!(value, json!({ "url": null }));
    }

    #[test]
    fn apply_to_keeps_clears_or_replaces() {
        let current = Some("old".to_string());

        assert_eq!(PatchField::Unset.apply_to(current.clone()), current);
        assert_eq!(PatchField::<String>::Null.apply_to(current.clone()), None);
        assert_eq!(
            PatchField::Value("new".to_string()).apply_to(current),
            Some("new".to_string())
        );
    }
}
