use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::use_cases::login_admin::{
    LoginAdminResponse, LoginAdminUseCase, LoginError, LoginRequest,
};
use crate::experience::application::domain::ExperiencePayload;
use crate::experience::application::ports::incoming::use_cases::{
    CreateExperienceError, CreateExperienceUseCase, DeleteExperienceError,
    DeleteExperienceUseCase, GetExperiencesError, GetExperiencesUseCase,
    GetSingleExperienceError, GetSingleExperienceUseCase, UpdateExperienceError,
    UpdateExperienceUseCase,
};
use crate::experience::application::ports::outgoing::experience_query::ExperienceView;
use crate::profile::application::domain::ProfilePayload;
use crate::profile::application::ports::incoming::use_cases::{
    GetProfileError, GetProfileUseCase, UpsertProfileError, UpsertProfileUseCase,
};
use crate::profile::application::ports::outgoing::profile_query::ProfileView;
use crate::project::application::domain::ProjectPayload;
use crate::project::application::ports::incoming::use_cases::{
    CreateProjectError, CreateProjectUseCase, DeleteProjectError, DeleteProjectUseCase,
    GetProjectsError, GetProjectsUseCase, GetSingleProjectError, GetSingleProjectUseCase,
    UpdateProjectError, UpdateProjectUseCase,
};
use crate::project::application::ports::outgoing::project_query::ProjectView;
use crate::shared::domain::StatusFilter;

// ============================ Auth ============================

#[derive(Default, Clone)]
pub struct StubLoginAdminUseCase;

#[async_trait]
impl LoginAdminUseCase for StubLoginAdminUseCase {
    async fn execute(&self, _request: LoginRequest) -> Result<LoginAdminResponse, LoginError> {
        unimplemented!("Not used in this test")
    }
}

// ============================ Projects ============================

#[derive(Default, Clone)]
pub struct StubGetProjectsUseCase;

#[async_trait]
impl GetProjectsUseCase for StubGetProjectsUseCase {
    async fn execute(&self, _filter: StatusFilter) -> Result<Vec<ProjectView>, GetProjectsError> {
        Ok(vec![])
    }
}

#[derive(Default, Clone)]
pub struct StubGetSingleProjectUseCase;

#[async_trait]
impl GetSingleProjectUseCase for StubGetSingleProjectUseCase {
    async fn execute(
        &self,
        _project_id: Uuid,
        _visibility: StatusFilter,
    ) -> Result<ProjectView, GetSingleProjectError> {
        Err(GetSingleProjectError::NotFound)
    }
}

#[derive(Default, Clone)]
pub struct StubCreateProjectUseCase;

#[async_trait]
impl CreateProjectUseCase for StubCreateProjectUseCase {
    async fn execute(&self, _payload: ProjectPayload) -> Result<ProjectView, CreateProjectError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubUpdateProjectUseCase;

#[async_trait]
impl UpdateProjectUseCase for StubUpdateProjectUseCase {
    async fn execute(
        &self,
        _project_id: Uuid,
        _payload: ProjectPayload,
    ) -> Result<ProjectView, UpdateProjectError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubDeleteProjectUseCase;

#[async_trait]
impl DeleteProjectUseCase for StubDeleteProjectUseCase {
    async fn execute(&self, _project_id: Uuid) -> Result<(), DeleteProjectError> {
        unimplemented!("Not used in this test")
    }
}

// ============================ Experiences ============================

#[derive(Default, Clone)]
pub struct StubGetExperiencesUseCase;

#[async_trait]
impl GetExperiencesUseCase for StubGetExperiencesUseCase {
    async fn execute(
        &self,
        _filter: StatusFilter,
    ) -> Result<Vec<ExperienceView>, GetExperiencesError> {
        Ok(vec![])
    }
}

#[derive(Default, Clone)]
pub struct StubGetSingleExperienceUseCase;

#[async_trait]
impl GetSingleExperienceUseCase for StubGetSingleExperienceUseCase {
    async fn execute(
        &self,
        _experience_id: Uuid,
        _visibility: StatusFilter,
    ) -> Result<ExperienceView, GetSingleExperienceError> {
        Err(GetSingleExperienceError::NotFound)
    }
}

#[derive(Default, Clone)]
pub struct StubCreateExperienceUseCase;

#[async_trait]
impl CreateExperienceUseCase for StubCreateExperienceUseCase {
    async fn execute(
        &self,
        _payload: ExperiencePayload,
    ) -> Result<ExperienceView, CreateExperienceError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubUpdateExperienceUseCase;

#[async_trait]
impl UpdateExperienceUseCase for StubUpdateExperienceUseCase {
    async fn execute(
        &self,
        _experience_id: Uuid,
        _payload: ExperiencePayload,
    ) -> Result<ExperienceView, UpdateExperienceError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubDeleteExperienceUseCase;

#[async_trait]
impl DeleteExperienceUseCase for StubDeleteExperienceUseCase {
    async fn execute(&self, _experience_id: Uuid) -> Result<(), DeleteExperienceError> {
        unimplemented!("Not used in this test")
    }
}

// ============================ Profile ============================

#[derive(Default, Clone)]
pub struct StubGetProfileUseCase;

#[async_trait]
impl GetProfileUseCase for StubGetProfileUseCase {
    async fn execute(&self) -> Result<ProfileView, GetProfileError> {
        Err(GetProfileError::NotFound)
    }
}

#[derive(Default, Clone)]
pub struct StubUpsertProfileUseCase;

#[async_trait]
impl UpsertProfileUseCase for StubUpsertProfileUseCase {
    async fn execute(&self, _payload: ProfilePayload) -> Result<ProfileView, UpsertProfileError> {
        unimplemented!("Not used in this test")
    }
}
