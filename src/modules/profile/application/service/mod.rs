mod get_profile_service;
mod upsert_profile_service;

pub use get_profile_service::GetProfileService;
pub use upsert_profile_service::UpsertProfileService;
