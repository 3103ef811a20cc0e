use crate::auth::application::use_cases::login_admin::LoginAdminUseCase;
use crate::experience::application::experience_use_cases::ExperienceUseCases;
use crate::experience::application::ports::incoming::use_cases::{
    CreateExperienceUseCase, DeleteExperienceUseCase, GetExperiencesUseCase,
    GetSingleExperienceUseCase, UpdateExperienceUseCase,
};
use crate::profile::application::ports::incoming::use_cases::{
    GetProfileUseCase, UpsertProfileUseCase,
};
use crate::profile::application::profile_use_cases::ProfileUseCases;
use crate::project::application::ports::incoming::use_cases::{
    CreateProjectUseCase, DeleteProjectUseCase, GetProjectsUseCase, GetSingleProjectUseCase,
    UpdateProjectUseCase,
};
use crate::project::application::project_use_cases::ProjectUseCases;
use crate::tests::support::stubs::*;
use crate::AppState;
use actix_web::web;
use std::sync::Arc;

/// App state for handler tests. Everything not overridden is a stub.
pub struct TestAppStateBuilder {
    project: ProjectUseCases,
    experience: ExperienceUseCases,
    profile: ProfileUseCases,
    login_admin: Arc<dyn LoginAdminUseCase + Send + Sync>,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            project: ProjectUseCases {
                create: Arc::new(StubCreateProjectUseCase),
                get_list: Arc::new(StubGetProjectsUseCase),
                get_single: Arc::new(StubGetSingleProjectUseCase),
                update: Arc::new(StubUpdateProjectUseCase),
                delete: Arc::new(StubDeleteProjectUseCase),
            },
            experience: ExperienceUseCases {
                create: Arc::new(StubCreateExperienceUseCase),
                get_list: Arc::new(StubGetExperiencesUseCase),
                get_single: Arc::new(StubGetSingleExperienceUseCase),
                update: Arc::new(StubUpdateExperienceUseCase),
                delete: Arc::new(StubDeleteExperienceUseCase),
            },
            profile: ProfileUseCases {
                get: Arc::new(StubGetProfileUseCase),
                upsert: Arc::new(StubUpsertProfileUseCase),
            },
            login_admin: Arc::new(StubLoginAdminUseCase),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_login_admin(mut self, uc: impl LoginAdminUseCase + Send + Sync + 'static) -> Self {
        self.login_admin = Arc::new(uc);
        self
    }

    // Projects
    pub fn with_get_projects(
        mut self,
        uc: impl GetProjectsUseCase + Send + Sync + 'static,
    ) -> Self {
        self.project.get_list = Arc::new(uc);
        self
    }

    pub fn with_get_single_project(
        mut self,
        uc: impl GetSingleProjectUseCase + Send + Sync + 'static,
    ) -> Self {
        self.project.get_single = Arc::new(uc);
        self
    }

    pub fn with_create_project(
        mut self,
        uc: impl CreateProjectUseCase + Send + Sync + 'static,
    ) -> Self {
        self.project.create = Arc::new(uc);
        self
    }

    pub fn with_update_project(
        mut self,
        uc: impl UpdateProjectUseCase + Send + Sync + 'static,
    ) -> Self {
        self.project.update = Arc::new(uc);
        self
    }

    pub fn with_delete_project(
        mut self,
        uc: impl DeleteProjectUseCase + Send + Sync + 'static,
    ) -> Self {
        self.project.delete = Arc::new(uc);
        self
    }

    // Experiences
    pub fn with_get_experiences(
        mut self,
        uc: impl GetExperiencesUseCase + Send + Sync + 'static,
    ) -> Self {
        self.experience.get_list = Arc::new(uc);
        self
    }

    pub fn with_get_single_experience(
        mut self,
        uc: impl GetSingleExperienceUseCase + Send + Sync + 'static,
    ) -> Self {
        self.experience.get_single = Arc::new(uc);
        self
    }

    pub fn with_create_experience(
        mut self,
        uc: impl CreateExperienceUseCase + Send + Sync + 'static,
    ) -> Self {
        self.experience.create = Arc::new(uc);
        self
    }

    pub fn with_update_experience(
        mut self,
        uc: impl UpdateExperienceUseCase + Send + Sync + 'static,
    ) -> Self {
        self.experience.update = Arc::new(uc);
        self
    }

    pub fn with_delete_experience(
        mut self,
        uc: impl DeleteExperienceUseCase + Send + Sync + 'static,
    ) -> Self {
        self.experience.delete = Arc::new(uc);
        self
    }

    // Profile
    pub fn with_get_profile(mut self, uc: impl GetProfileUseCase + Send + Sync + 'static) -> Self {
        self.profile.get = Arc::new(uc);
        self
    }

    pub fn with_upsert_profile(
        mut self,
        uc: impl UpsertProfileUseCase + Send + Sync + 'static,
    ) -> Self {
        self.profile.upsert = Arc::new(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            project: self.project,
            experience: self.experience,
            profile: self.profile,
            login_admin_use_case: self.login_admin,
        })
    }
}
