use async_trait::async_trait;
use tracing::info;

use crate::modules::profile::application::domain::ProfilePayload;
use crate::modules::profile::application::ports::incoming::use_cases::{
    UpsertProfileError, UpsertProfileUseCase,
};
use crate::modules::profile::application::ports::outgoing::profile_query::{
    ProfileQuery, ProfileQueryError, ProfileView,
};
use crate::modules::profile::application::ports::outgoing::profile_repository::{
    ProfileRepository, ProfileRepositoryError,
};

/// Creates the singleton profile on first write, merges into it afterwards.
pub struct UpsertProfileService<Q, R>
where
    Q: ProfileQuery,
    R: ProfileRepository,
{
    query: Q,
    repository: R,
}

impl<Q, R> UpsertProfileService<Q, R>
where
    Q: ProfileQuery,
    R: ProfileRepository,
{
    pub fn new(query: Q, repository: R) -> Self {
        Self { query, repository }
    }

    async fn patch(&self, payload: ProfilePayload) -> Result<ProfileView, UpsertProfileError> {
        let data = payload
            .into_patch_data()
            .map_err(UpsertProfileError::Validation)?;

        self.repository
            .patch_profile(data)
            .await
            .map_err(map_repository_err)
    }
}

#[async_trait]
impl<Q, R> UpsertProfileUseCase for UpsertProfileService<Q, R>
where
    Q: ProfileQuery + Send + Sync,
    R: ProfileRepository + Send + Sync,
{
    async fn execute(&self, payload: ProfilePayload) -> Result<ProfileView, UpsertProfileError> {
        match self.query.get_current().await {
            Ok(_) => self.patch(payload).await,

            Err(ProfileQueryError::NotFound) => {
                let data = payload
                    .clone()
                    .into_create_data()
                    .map_err(UpsertProfileError::Validation)?;

                match self.repository.create_profile(data).await {
                    Ok(profile) => {
                        info!("Profile created");
                        Ok(profile)
                    }
                    // Lost a race with a concurrent first write
                    Err(ProfileRepositoryError::AlreadyExists) => self.patch(payload).await,
                    Err(e) => Err(map_repository_err(e)),
                }
            }

            Err(ProfileQueryError::DatabaseError(msg))
            | Err(ProfileQueryError::SerializationError(msg)) => {
                Err(UpsertProfileError::RepositoryError(msg))
            }
        }
    }
}

fn map_repository_err(err: ProfileRepositoryError) -> UpsertProfileError {
    UpsertProfileError::RepositoryError(err.to_string())
}
