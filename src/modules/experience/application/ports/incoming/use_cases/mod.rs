mod create_experience;
mod delete_experience;
mod get_experiences;
mod get_single_experience;
mod update_experience;

pub use create_experience::{CreateExperienceError, CreateExperienceUseCase};
pub use delete_experience::{DeleteExperienceError, DeleteExperienceUseCase};
pub use get_experiences::{GetExperiencesError, GetExperiencesUseCase};
pub use get_single_experience::{GetSingleExperienceError, GetSingleExperienceUseCase};
pub use update_experience::{UpdateExperienceError, UpdateExperienceUseCase};
