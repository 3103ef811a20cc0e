use tracing::warn;
use uuid::Uuid;

use crate::client::{ApiClient, ClientError};
use crate::experience::application::ports::outgoing::experience_query::ExperienceView;
use crate::profile::application::ports::outgoing::profile_query::ProfileView;
use crate::project::application::ports::outgoing::project_query::ProjectView;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomePart {
    Profile,
    Projects,
    Experiences,
}

/// The public landing page. Parts that failed to load are empty and listed in `failed`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HomeView {
    pub profile: Option<ProfileView>,
    pub projects: Vec<ProjectView>,
    pub experiences: Vec<ExperienceView>,
    pub failed: Vec<HomePart>,
}

impl HomeView {
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Unauthenticated reads, published records only.
#[derive(Debug, Clone)]
pub struct PublicClient {
    api: ApiClient,
}

impl PublicClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            api: ApiClient::new(base_url),
        }
    }

    pub fn from_api(api: ApiClient) -> Self {
        Self { api }
    }

    /// Never fails as a whole: each part degrades on its own.
    pub async fn load_home(&self) -> HomeView {
        let (profile, projects, experiences) = futures::join!(
            self.api.get::<ProfileView>("/api/profile", None),
            self.api.get::<Vec<ProjectView>>("/api/projects", None),
            self.api.get::<Vec<ExperienceView>>("/api/experiences", None),
        );

        let mut view = HomeView::default();

        match profile {
            Ok(p) => view.profile = Some(p),
            // Not set up yet is an empty state
            Err(ClientError::NotFound(_)) => {}
            Err(e) => {
                warn!(error = %e, "Failed to load profile");
                view.failed.push(HomePart::Profile);
            }
        }

        match projects {
            Ok(items) => view.projects = items,
            Err(e) => {
                warn!(error = %e, "Failed to load projects");
                view.failed.push(HomePart::Projects);
            }
        }

        match experiences {
            Ok(items) => view.experiences = items,
            Err(e) => {
                warn!(error = %e, "Failed to load experiences");
                view.failed.push(HomePart::Experiences);
            }
        }

        view
    }

    pub async fn project(&self, project_id: Uuid) -> Result<ProjectView, ClientError> {
        self.api
            .get(&format!("/api/projects/{}", project_id), None)
            .await
    }

    pub async fn experience(&self, experience_id: Uuid) -> Result<ExperienceView, ClientError> {
        self.api
            .get(&format!("/api/experiences/{}", experience_id), None)
            .await
    }
}
