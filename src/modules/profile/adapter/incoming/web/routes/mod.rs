mod get_profile;
mod upsert_profile;

pub use get_profile::{__path_get_profile_handler, get_profile_handler};
pub use upsert_profile::{__path_upsert_profile_handler, upsert_profile_handler};
