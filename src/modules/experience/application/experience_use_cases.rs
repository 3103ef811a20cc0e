use std::sync::Arc;

use crate::modules::experience::application::ports::incoming::use_cases::{
    CreateExperienceUseCase, DeleteExperienceUseCase, GetExperiencesUseCase,
    GetSingleExperienceUseCase, UpdateExperienceUseCase,
};
use crate::modules::experience::application::ports::outgoing::{
    experience_query::ExperienceQuery, experience_repository::ExperienceRepository,
};
use crate::modules::experience::application::service::{
    CreateExperienceService, DeleteExperienceService, GetExperiencesService,
    GetSingleExperienceService, UpdateExperienceService,
};

#[derive(Clone)]
pub struct ExperienceUseCases {
    pub create: Arc<dyn CreateExperienceUseCase + Send + Sync>,
    pub get_list: Arc<dyn GetExperiencesUseCase + Send + Sync>,
    pub get_single: Arc<dyn GetSingleExperienceUseCase + Send + Sync>,
    pub update: Arc<dyn UpdateExperienceUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteExperienceUseCase + Send + Sync>,
}

impl ExperienceUseCases {
    pub fn wire<Q, R>(query: Q, repository: R) -> Self
    where
        Q: ExperienceQuery + Clone + 'static,
        R: ExperienceRepository + Clone + 'static,
    {
        Self {
            create: Arc::new(CreateExperienceService::new(repository.clone())),
            get_list: Arc::new(GetExperiencesService::new(query.clone())),
            get_single: Arc::new(GetSingleExperienceService::new(query)),
            update: Arc::new(UpdateExperienceService::new(repository.clone())),
            delete: Arc::new(DeleteExperienceService::new(repository)),
        }
    }
}
