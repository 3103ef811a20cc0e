use std::sync::Arc;

use reqwest::Method;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use crate::auth::application::use_cases::login_admin::LoginRequest;
use crate::client::{ApiClient, ClientError, TokenStore};
use crate::experience::application::domain::ExperiencePayload;
use crate::experience::application::ports::outgoing::experience_query::ExperienceView;
use crate::profile::application::domain::ProfilePayload;
use crate::profile::application::ports::outgoing::profile_query::ProfileView;
use crate::project::application::domain::ProjectPayload;
use crate::project::application::ports::outgoing::project_query::ProjectView;
use crate::shared::domain::StatusFilter;

/// Everything the dashboard shows, drafts included.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AdminView {
    pub profile: Option<ProfileView>,
    pub projects: Vec<ProjectView>,
    pub experiences: Vec<ExperienceView>,
}

/// Token plus the last fetched admin view. Passed explicitly to every admin call.
pub struct AdminSession {
    store: Arc<dyn TokenStore>,
    view: Option<AdminView>,
}

impl AdminSession {
    pub fn new(store: Arc<dyn TokenStore>) -> Self {
        Self { store, view: None }
    }

    pub fn token(&self) -> Result<Option<String>, ClientError> {
        self.store.load()
    }

    pub fn is_logged_in(&self) -> bool {
        matches!(self.store.load(), Ok(Some(_)))
    }

    pub fn view(&self) -> Option<&AdminView> {
        self.view.as_ref()
    }

    /// Forgets the token and the cached view.
    pub fn invalidate(&mut self) -> Result<(), ClientError> {
        self.view = None;
        self.store.clear()
    }

    fn require_token(&self) -> Result<String, ClientError> {
        self.store
            .load()?
            .ok_or_else(|| ClientError::Unauthorized("not logged in".to_string()))
    }
}

#[derive(Serialize)]
struct LoginBody<'a> {
    username: &'a str,
    password: &'a str,
}

#[derive(Deserialize)]
struct TokenBody {
    access_token: String,
}

#[derive(Debug, Clone)]
pub struct AdminClient {
    api: ApiClient,
}

impl AdminClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            api: ApiClient::new(base_url),
        }
    }

    pub fn from_api(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn login(
        &self,
        session: &mut AdminSession,
        username: &str,
        password: &str,
    ) -> Result<(), ClientError> {
        let request = LoginRequest::new(username.to_string(), password.to_string())?;
        let body = LoginBody {
            username: request.username(),
            password: request.password(),
        };

        let result: Result<TokenBody, ClientError> = self
            .api
            .send_json(Method::POST, "/api/admin/login", None, &body)
            .await;
        let token = settle(session, result)?;

        session.store.save(&token.access_token)?;
        info!("Admin logged in");

        self.refresh(session).await.map(|_| ())
    }

    pub fn logout(&self, session: &mut AdminSession) -> Result<(), ClientError> {
        session.invalidate()
    }

    /// Fetches profile, all projects and all experiences concurrently.
    pub async fn refresh<'s>(
        &self,
        session: &'s mut AdminSession,
    ) -> Result<&'s AdminView, ClientError> {
        let token = session.require_token()?;
        let all = StatusFilter::All.as_query_value();
        let projects_path = format!("/api/projects?status={}", all);
        let experiences_path = format!("/api/experiences?status={}", all);

        let (profile, projects, experiences) = futures::join!(
            self.api.get::<ProfileView>("/api/profile", Some(&token)),
            self.api.get::<Vec<ProjectView>>(&projects_path, Some(&token)),
            self.api.get::<Vec<ExperienceView>>(&experiences_path, Some(&token)),
        );

        let profile = match settle(session, profile) {
            Ok(p) => Some(p),
            Err(ClientError::NotFound(_)) => None,
            Err(e) => return Err(e),
        };
        let projects = settle(session, projects)?;
        let experiences = settle(session, experiences)?;

        Ok(&*session.view.insert(AdminView {
            profile,
            projects,
            experiences,
        }))
    }

    // ============================ Projects ============================

    pub async fn create_project(
        &self,
        session: &mut AdminSession,
        payload: ProjectPayload,
    ) -> Result<ProjectView, ClientError> {
        payload.clone().into_create_data()?;
        let token = session.require_token()?;

        let result = self
            .api
            .send_json(Method::POST, "/api/admin/projects", Some(&token), &payload)
            .await;
        let created = settle(session, result)?;

        self.after_mutation(session).await?;
        Ok(created)
    }

    pub async fn update_project(
        &self,
        session: &mut AdminSession,
        project_id: Uuid,
        payload: ProjectPayload,
    ) -> Result<ProjectView, ClientError> {
        payload.clone().into_patch_data()?;
        let token = session.require_token()?;

        let path = format!("/api/admin/projects/{}", project_id);
        let result = self
            .api
            .send_json(Method::PUT, &path, Some(&token), &payload)
            .await;
        let updated = settle(session, result)?;

        self.after_mutation(session).await?;
        Ok(updated)
    }

    pub async fn delete_project(
        &self,
        session: &mut AdminSession,
        project_id: Uuid,
    ) -> Result<(), ClientError> {
        let token = session.require_token()?;

        let path = format!("/api/admin/projects/{}", project_id);
        let result = self.api.delete(&path, Some(&token)).await;
        settle(session, result)?;

        self.after_mutation(session).await
    }

    // ============================ Experiences ============================

    pub async fn create_experience(
        &self,
        session: &mut AdminSession,
        payload: ExperiencePayload,
    ) -> Result<ExperienceView, ClientError> {
        payload.clone().into_create_data()?;
        let token = session.require_token()?;

        let result = self
            .api
            .send_json(Method::POST, "/api/admin/experiences", Some(&token), &payload)
            .await;
        let created = settle(session, result)?;

        self.after_mutation(session).await?;
        Ok(created)
    }

    pub async fn update_experience(
        &self,
        session: &mut AdminSession,
        experience_id: Uuid,
        payload: ExperiencePayload,
    ) -> Result<ExperienceView, ClientError> {
        payload.clone().into_patch_data()?;
        let token = session.require_token()?;

        let path = format!("/api/admin/experiences/{}", experience_id);
        let result = self
            .api
            .send_json(Method::PUT, &path, Some(&token), &payload)
            .await;
        let updated = settle(session, result)?;

        self.after_mutation(session).await?;
        Ok(updated)
    }

    pub async fn delete_experience(
        &self,
        session: &mut AdminSession,
        experience_id: Uuid,
    ) -> Result<(), ClientError> {
        let token = session.require_token()?;

        let path = format!("/api/admin/experiences/{}", experience_id);
        let result = self.api.delete(&path, Some(&token)).await;
        settle(session, result)?;

        self.after_mutation(session).await
    }

    // ============================ Profile ============================

    /// The first save must carry every required field, later saves may be partial.
    pub async fn upsert_profile(
        &self,
        session: &mut AdminSession,
        payload: ProfilePayload,
    ) -> Result<ProfileView, ClientError> {
        let exists = session.view().is_some_and(|v| v.profile.is_some());
        if exists {
            payload.clone().into_patch_data()?;
        } else {
            payload.clone().into_create_data()?;
        }
        let token = session.require_token()?;

        let result = self
            .api
            .send_json(Method::PUT, "/api/admin/profile", Some(&token), &payload)
            .await;
        let saved = settle(session, result)?;

        self.after_mutation(session).await?;
        Ok(saved)
    }

    async fn after_mutation(&self, session: &mut AdminSession) -> Result<(), ClientError> {
        self.refresh(session).await.map(|_| ())
    }
}

/// A 401 means the token is no longer good, drop it before handing the error back.
fn settle<T>(
    session: &mut AdminSession,
    result: Result<T, ClientError>,
) -> Result<T, ClientError> {
    if let Err(ClientError::Unauthorized(reason)) = &result {
        warn!(%reason, "Admin request rejected, clearing stored token");
        session.invalidate()?;
    }
    result
}
