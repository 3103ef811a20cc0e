mod create_experience;
mod delete_experience;
mod get_experiences;
mod get_single_experience;
mod update_experience;

pub use create_experience::{__path_create_experience_handler, create_experience_handler};
pub use delete_experience::{__path_delete_experience_handler, delete_experience_handler};
pub use get_experiences::{__path_get_experiences_handler, get_experiences_handler};
pub use get_single_experience::{
    __path_get_single_experience_handler,
    get_single_experience_handler,
};
pub use update_experience::{__path_update_experience_handler, update_experience_handler};

pub(crate) const EXPERIENCE_NOT_FOUND: (&str, &str) =
    ("EXPERIENCE_NOT_FOUND", "Experience not found");
