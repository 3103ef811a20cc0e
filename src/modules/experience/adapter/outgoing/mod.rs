mod experience_query_postgres;
mod experience_repository_postgres;
pub mod sea_orm_entity;

pub use experience_query_postgres::ExperienceQueryPostgres;
pub use experience_repository_postgres::ExperienceRepositoryPostgres;

use crate::modules::experience::adapter::outgoing::sea_orm_entity::experiences;
use crate::modules::experience::application::ports::outgoing::experience_query::ExperienceView;

pub(crate) fn model_to_view(model: experiences::Model) -> Result<ExperienceView, String> {
    // A current role has no end, whatever the column holds
    let end_date = if model.current { None } else { model.end_date };

    Ok(ExperienceView {
        id: model.id,
        title: model.title,
        company: model.company,
        kind: model.kind.parse().map_err(|e| format!("kind: {}", e))?,
        description: model.description,
        responsibilities: serde_json::from_value(model.responsibilities)
            .map_err(|e| e.to_string())?,
        skills: serde_json::from_value(model.skills).map_err(|e| e.to_string())?,
        start_date: model.start_date,
        end_date,
        current: model.current,
        logo_url: model.logo_url,
        status: model.status.parse().map_err(|e| format!("status: {}", e))?,
        created_at: model.created_at.into(),
        updated_at: model.updated_at.into(),
    })
}
