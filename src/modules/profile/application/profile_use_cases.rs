use std::sync::Arc;

use crate::modules::profile::application::ports::incoming::use_cases::{
    GetProfileUseCase, UpsertProfileUseCase,
};
use crate::modules::profile::application::ports::outgoing::{
    profile_query::ProfileQuery, profile_repository::ProfileRepository,
};
use crate::modules::profile::application::service::{GetProfileService, UpsertProfileService};

#[derive(Clone)]
pub struct ProfileUseCases {
    pub get: Arc<dyn GetProfileUseCase + Send + Sync>,
    pub upsert: Arc<dyn UpsertProfileUseCase + Send + Sync>,
}

impl ProfileUseCases {
    pub fn wire<Q, R>(query: Q, repository: R) -> Self
    where
        Q: ProfileQuery + Clone + 'static,
        R: ProfileRepository + 'static,
    {
        Self {
            get: Arc::new(GetProfileService::new(query.clone())),
            upsert: Arc::new(UpsertProfileService::new(query, repository)),
        }
    }
}
