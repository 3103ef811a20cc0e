mod get_profile;
mod upsert_profile;

pub use get_profile::{GetProfileError, GetProfileUseCase};
pub use upsert_profile::{UpsertProfileError, UpsertProfileUseCase};
