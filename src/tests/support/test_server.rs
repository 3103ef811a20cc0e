use std::net::TcpListener;
use std::sync::Arc;

use actix_web::{web, App, HttpServer};

use crate::auth::adapter::outgoing::security::Argon2Hasher;
use crate::auth::application::domain::entities::AdminCredentials;
use crate::auth::application::ports::outgoing::{PasswordHasher, TokenProvider};
use crate::auth::application::use_cases::login_admin::LoginAdminService;
use crate::experience::application::experience_use_cases::ExperienceUseCases;
use crate::profile::application::profile_use_cases::ProfileUseCases;
use crate::project::application::project_use_cases::ProjectUseCases;
use crate::shared::api::custom_json_config;
use crate::tests::support::auth_helper::create_test_jwt_service;
use crate::tests::support::in_memory::{InMemoryExperiences, InMemoryProfile, InMemoryProjects};
use crate::{init_routes, AppState};

pub const TEST_ADMIN_USERNAME: &str = "admin";
pub const TEST_ADMIN_PASSWORD: &str = "admin123";

/// A running API on an ephemeral port, backed by in-memory stores.
pub struct TestServer {
    pub base_url: String,
    pub projects: InMemoryProjects,
    pub experiences: InMemoryExperiences,
    pub profile: InMemoryProfile,
}

pub async fn spawn_test_server() -> TestServer {
    // Cheapest parameters argon2 accepts
    let hasher = Argon2Hasher::with_params(8, 1, 1).expect("argon2 params");
    let password_hash = hasher
        .hash_password(TEST_ADMIN_PASSWORD)
        .await
        .expect("hash admin password");

    let token_provider: Arc<dyn TokenProvider + Send + Sync> = Arc::new(create_test_jwt_service());
    let login_admin = LoginAdminService::new(
        AdminCredentials::new(TEST_ADMIN_USERNAME, password_hash),
        Arc::new(hasher),
        token_provider.clone(),
    );

    let projects = InMemoryProjects::default();
    let experiences = InMemoryExperiences::default();
    let profile = InMemoryProfile::default();

    let state = AppState {
        project: ProjectUseCases::wire(projects.clone(), projects.clone()),
        experience: ExperienceUseCases::wire(experiences.clone(), experiences.clone()),
        profile: ProfileUseCases::wire(profile.clone(), profile.clone()),
        login_admin_use_case: Arc::new(login_admin),
    };

    let listener = TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
    let port = listener.local_addr().expect("local addr").port();

    let server = HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&token_provider)))
            .app_data(custom_json_config())
            .configure(init_routes)
    })
    .workers(1)
    .listen(listener)
    .expect("listen")
    .run();

    let _ = tokio::spawn(server);

    TestServer {
        base_url: format!("http://127.0.0.1:{}", port),
        projects,
        experiences,
        profile,
    }
}
