pub mod api;
pub mod client;
pub mod config;
pub mod health;
pub mod modules;
pub mod shared;

pub use modules::{auth, experience, profile, project};

use std::sync::Arc;

use actix_web::web;

use crate::auth::application::use_cases::login_admin::LoginAdminUseCase;
use crate::experience::application::experience_use_cases::ExperienceUseCases;
use crate::profile::application::profile_use_cases::ProfileUseCases;
use crate::project::application::project_use_cases::ProjectUseCases;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub project: ProjectUseCases,
    pub experience: ExperienceUseCases,
    pub profile: ProfileUseCases,
    pub login_admin_use_case: Arc<dyn LoginAdminUseCase + Send + Sync>,
}

/// Every API route. `/ready` additionally needs the database connection in app data.
pub fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    cfg.service(crate::health::banner);
    // Auth
    cfg.service(crate::auth::adapter::incoming::web::routes::login_admin_handler);
    // Profile
    cfg.service(crate::profile::adapter::incoming::web::routes::get_profile_handler);
    cfg.service(crate::profile::adapter::incoming::web::routes::upsert_profile_handler);
    // Projects
    cfg.service(crate::project::adapter::incoming::web::routes::get_projects_handler);
    cfg.service(crate::project::adapter::incoming::web::routes::get_single_project_handler);
    cfg.service(crate::project::adapter::incoming::web::routes::create_project_handler);
    cfg.service(crate::project::adapter::incoming::web::routes::update_project_handler);
    cfg.service(crate::project::adapter::incoming::web::routes::delete_project_handler);
    // Experiences
    cfg.service(crate::experience::adapter::incoming::web::routes::get_experiences_handler);
    cfg.service(crate::experience::adapter::incoming::web::routes::get_single_experience_handler);
    cfg.service(crate::experience::adapter::incoming::web::routes::create_experience_handler);
    cfg.service(crate::experience::adapter::incoming::web::routes::update_experience_handler);
    cfg.service(crate::experience::adapter::incoming::web::routes::delete_experience_handler);
}
