use crate::api::schemas::{ErrorDetail, ErrorResponse};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

use crate::auth::adapter::incoming::web::routes::{LoginRequestDto, LoginResponse};
use crate::experience::application::domain::{ExperienceKind, ExperiencePayload};
use crate::experience::application::ports::outgoing::experience_query::ExperienceView;
use crate::profile::application::domain::ProfilePayload;
use crate::profile::application::ports::outgoing::profile_query::ProfileView;
use crate::project::application::domain::ProjectPayload;
use crate::project::application::ports::outgoing::project_query::ProjectView;
use crate::shared::domain::PublicationStatus;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Portfolio API",
        version = "1.0.0",
        description = "Public portfolio content and the admin API that manages it",
    ),
    paths(
        // Auth
        crate::auth::adapter::incoming::web::routes::login_admin_handler,

        // Profile
        crate::profile::adapter::incoming::web::routes::get_profile_handler,
        crate::profile::adapter::incoming::web::routes::upsert_profile_handler,

        // Projects
        crate::project::adapter::incoming::web::routes::get_projects_handler,
        crate::project::adapter::incoming::web::routes::get_single_project_handler,
        crate::project::adapter::incoming::web::routes::create_project_handler,
        crate::project::adapter::incoming::web::routes::update_project_handler,
        crate::project::adapter::incoming::web::routes::delete_project_handler,

        // Experiences
        crate::experience::adapter::incoming::web::routes::get_experiences_handler,
        crate::experience::adapter::incoming::web::routes::get_single_experience_handler,
        crate::experience::adapter::incoming::web::routes::create_experience_handler,
        crate::experience::adapter::incoming::web::routes::update_experience_handler,
        crate::experience::adapter::incoming::web::routes::delete_experience_handler,
    ),
    components(
        schemas(
            ErrorResponse,
            ErrorDetail,
            PublicationStatus,
            LoginRequestDto,
            LoginResponse,
            ProfilePayload,
            ProfileView,
            ProjectPayload,
            ProjectView,
            ExperienceKind,
            ExperiencePayload,
            ExperienceView,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "Admin login"),
        (name = "profile", description = "The portfolio owner's profile"),
        (name = "projects", description = "Projects gallery"),
        (name = "experiences", description = "Work experience timeline"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "BearerAuth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Token from POST /api/admin/login"))
                        .build(),
                ),
            )
        }
    }
}
