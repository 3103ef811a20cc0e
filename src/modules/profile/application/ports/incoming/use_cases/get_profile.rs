use async_trait::async_trait;

use crate::modules::profile::application::ports::outgoing::profile_query::{
    ProfileQueryError, ProfileView,
};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GetProfileError {
    #[error("Profile not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<ProfileQueryError> for GetProfileError {
    fn from(err: ProfileQueryError) -> Self {
        match err {
            ProfileQueryError::NotFound => GetProfileError::NotFound,
            ProfileQueryError::DatabaseError(msg) | ProfileQueryError::SerializationError(msg) => {
                GetProfileError::RepositoryError(msg)
            }
        }
    }
}

#[async_trait]
pub trait GetProfileUseCase: Send + Sync {
    async fn execute(&self) -> Result<ProfileView, GetProfileError>;
}
