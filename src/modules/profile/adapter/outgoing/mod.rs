mod profile_query_postgres;
mod profile_repository_postgres;
pub mod sea_orm_entity;

pub use profile_query_postgres::ProfileQueryPostgres;
pub use profile_repository_postgres::ProfileRepositoryPostgres;

use crate::modules::profile::adapter::outgoing::sea_orm_entity::profiles;
use crate::modules::profile::application::ports::outgoing::profile_query::ProfileView;

pub(crate) fn model_to_view(model: profiles::Model) -> Result<ProfileView, String> {
    Ok(ProfileView {
        name: model.name,
        title: model.title,
        bio: model.bio,
        email: model.email,
        phone: model.phone,
        location: model.location,
        avatar_url: model.avatar_url,
        resume_url: model.resume_url,
        github: model.github,
        linkedin: model.linkedin,
        twitter: model.twitter,
        website: model.website,
        skills: serde_json::from_value(model.skills).map_err(|e| e.to_string())?,
        updated_at: model.updated_at.into(),
    })
}
