use async_trait::async_trait;

use crate::modules::profile::application::ports::incoming::use_cases::{
    GetProfileError, GetProfileUseCase,
};
use crate::modules::profile::application::ports::outgoing::profile_query::{
    ProfileQuery, ProfileView,
};

pub struct GetProfileService<Q>
where
    Q: ProfileQuery,
{
    query: Q,
}

impl<Q> GetProfileService<Q>
where
    Q: ProfileQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetProfileUseCase for GetProfileService<Q>
where
    Q: ProfileQuery + Send + Sync,
{
    async fn execute(&self) -> Result<ProfileView, GetProfileError> {
        self.query.get_current().await.map_err(GetProfileError::from)
    }
}
