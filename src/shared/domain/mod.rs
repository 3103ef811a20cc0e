mod list_input;
mod patch_field;
mod publication_status;
mod validation;

pub use list_input::{split_csv, ListInput};
pub use patch_field::PatchField;
pub use publication_status::{PublicationStatus, StatusFilter, UnknownVariant};
pub use validation::{
    optional_text, parse_choice, patch_optional_text, patch_required_text, required_text,
    ValidationError,
};
