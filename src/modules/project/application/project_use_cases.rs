use std::sync::Arc;

use crate::modules::project::application::ports::incoming::use_cases::{
    CreateProjectUseCase, DeleteProjectUseCase, GetProjectsUseCase, GetSingleProjectUseCase,
    UpdateProjectUseCase,
};
use crate::modules::project::application::ports::outgoing::{
    project_query::ProjectQuery, project_repository::ProjectRepository,
};
use crate::modules::project::application::service::{
    CreateProjectService, DeleteProjectService, GetProjectsService, GetSingleProjectService,
    UpdateProjectService,
};

#[derive(Clone)]
pub struct ProjectUseCases {
    pub create: Arc<dyn CreateProjectUseCase + Send + Sync>,
    pub get_list: Arc<dyn GetProjectsUseCase + Send + Sync>,
    pub get_single: Arc<dyn GetSingleProjectUseCase + Send + Sync>,
    pub update: Arc<dyn UpdateProjectUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteProjectUseCase + Send + Sync>,
}

impl ProjectUseCases {
    /// Builds every project service over one read side and one write side.
    pub fn wire<Q, R>(query: Q, repository: R) -> Self
    where
        Q: ProjectQuery + Clone + 'static,
        R: ProjectRepository + Clone + 'static,
    {
        Self {
            create: Arc::new(CreateProjectService::new(repository.clone())),
            get_list: Arc::new(GetProjectsService::new(query.clone())),
            get_single: Arc::new(GetSingleProjectService::new(query)),
            update: Arc::new(UpdateProjectService::new(repository.clone())),
            delete: Arc::new(DeleteProjectService::new(repository)),
        }
    }
}
