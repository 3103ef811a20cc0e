use std::sync::Arc;
use std::time::Duration;

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use anyhow::Context;
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use portfolio_api::api::openapi::ApiDoc;
use portfolio_api::auth::adapter::outgoing::jwt::JwtTokenService;
use portfolio_api::auth::adapter::outgoing::security::Argon2Hasher;
use portfolio_api::auth::application::domain::entities::AdminCredentials;
use portfolio_api::auth::application::ports::outgoing::{PasswordHasher, TokenProvider};
use portfolio_api::auth::application::use_cases::login_admin::LoginAdminService;
use portfolio_api::config::AppConfig;
use portfolio_api::experience::adapter::outgoing::{
    ExperienceQueryPostgres, ExperienceRepositoryPostgres,
};
use portfolio_api::experience::application::experience_use_cases::ExperienceUseCases;
use portfolio_api::profile::adapter::outgoing::{ProfileQueryPostgres, ProfileRepositoryPostgres};
use portfolio_api::profile::application::profile_use_cases::ProfileUseCases;
use portfolio_api::project::adapter::outgoing::{ProjectQueryPostgres, ProjectRepositoryPostgres};
use portfolio_api::project::application::project_use_cases::ProjectUseCases;
use portfolio_api::shared::api::custom_json_config;
use portfolio_api::{init_routes, AppState};

#[actix_web::main]
async fn start() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    let config = AppConfig::from_env().context("invalid configuration")?;
    info!(environment = %config.environment, "Configuration loaded");

    if config.admin.password == "admin123" {
        warn!("ADMIN_PASSWORD is the default, set a real one before exposing this server");
    }

    // Database connection
    let mut opt = ConnectOptions::new(config.database.url.clone());
    opt.max_connections(config.database.max_connections)
        .min_connections(config.database.min_connections)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .context("failed to connect to database")?;

    if config.database.run_migrations {
        Migrator::up(&conn, None)
            .await
            .context("failed to run migrations")?;
        info!("Migrations applied");
    }

    let db_arc = Arc::new(conn);

    // Admin credentials: the plain password is dropped once hashed
    let password_hasher = Argon2Hasher::from_env().context("invalid argon2 settings")?;
    let password_hash = password_hasher
        .hash_password(&config.admin.password)
        .await
        .context("failed to hash admin password")?;
    let credentials = AdminCredentials::new(config.admin.username.clone(), password_hash);

    let jwt_service = JwtTokenService::new(config.jwt.clone());
    let token_provider_arc: Arc<dyn TokenProvider + Send + Sync> = Arc::new(jwt_service);

    let login_admin_use_case = LoginAdminService::new(
        credentials,
        Arc::new(password_hasher),
        token_provider_arc.clone(),
    );

    let state = AppState {
        project: ProjectUseCases::wire(
            ProjectQueryPostgres::new(Arc::clone(&db_arc)),
            ProjectRepositoryPostgres::new(Arc::clone(&db_arc)),
        ),
        experience: ExperienceUseCases::wire(
            ExperienceQueryPostgres::new(Arc::clone(&db_arc)),
            ExperienceRepositoryPostgres::new(Arc::clone(&db_arc)),
        ),
        profile: ProfileUseCases::wire(
            ProfileQueryPostgres::new(Arc::clone(&db_arc)),
            ProfileRepositoryPostgres::new(Arc::clone(&db_arc)),
        ),
        login_admin_use_case: Arc::new(login_admin_use_case),
    };

    let server_url = config.server_url();
    let cors_origins = config.cors_origins.clone();
    info!("Server run on: {}", server_url);

    HttpServer::new(move || {
        App::new()
            .wrap(build_cors(&cors_origins))
            .wrap(Logger::default())
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&token_provider_arc)))
            .app_data(web::Data::new(Arc::clone(&db_arc)))
            .app_data(custom_json_config())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", ApiDoc::openapi()),
            )
            .configure(init_routes)
    })
    .bind(&server_url)
    .with_context(|| format!("failed to bind {}", server_url))?
    .run()
    .await
    .context("server error")
}

/// An empty origin list means any origin.
fn build_cors(origins: &[String]) -> Cors {
    let cors = if origins.is_empty() {
        Cors::default().allow_any_origin()
    } else {
        origins
            .iter()
            .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
    };

    cors.allow_any_method().allow_any_header().max_age(3600)
}

fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e:#}");
        std::process::exit(1);
    }
}
