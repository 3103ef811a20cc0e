mod project_query_postgres;
mod project_repository_postgres;
pub mod sea_orm_entity;

pub use project_query_postgres::ProjectQueryPostgres;
pub use project_repository_postgres::ProjectRepositoryPostgres;

use crate::modules::project::adapter::outgoing::sea_orm_entity::projects;
use crate::modules::project::application::ports::outgoing::project_query::ProjectView;

/// Row to view. Errors carry the reason as text so each port can wrap it in its own error type.
pub(crate) fn model_to_view(model: projects::Model) -> Result<ProjectView, String> {
    Ok(ProjectView {
        id: model.id,
        title: model.title,
        description: model.description,
        long_description: model.long_description,
        tech_stack: serde_json::from_value(model.tech_stack).map_err(|e| e.to_string())?,
        tags: serde_json::from_value(model.tags).map_err(|e| e.to_string())?,
        github_url: model.github_url,
        live_url: model.live_url,
        image_url: model.image_url,
        featured: model.featured,
        status: model.status.parse().map_err(|e| format!("status: {}", e))?,
        created_at: model.created_at.into(),
        updated_at: model.updated_at.into(),
    })
}
