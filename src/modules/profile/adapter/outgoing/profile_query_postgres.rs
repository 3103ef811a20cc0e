use async_trait::async_trait;
use sea_orm::{DatabaseConnection, EntityTrait};
use std::sync::Arc;

use crate::modules::profile::adapter::outgoing::model_to_view;
use crate::modules::profile::adapter::outgoing::sea_orm_entity::profiles::{Entity, PROFILE_ID};
use crate::modules::profile::application::ports::outgoing::profile_query::{
    ProfileQuery, ProfileQueryError, ProfileView,
};

#[derive(Clone)]
pub struct ProfileQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProfileQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProfileQuery for ProfileQueryPostgres {
    async fn get_current(&self) -> Result<ProfileView, ProfileQueryError> {
        let row = Entity::find_by_id(PROFILE_ID)
            .one(&*self.db)
            .await
            .map_err(|e| ProfileQueryError::DatabaseError(e.to_string()))?
            .ok_or(ProfileQueryError::NotFound)?;

        model_to_view(row).map_err(ProfileQueryError::SerializationError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::profile::adapter::outgoing::sea_orm_entity::profiles::Model;
    use chrono::Utc;
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase};

    fn row() -> Model {
        Model {
            id: PROFILE_ID,
            name: "Jane Doe".to_string(),
            title: "Engineer".to_string(),
            bio: "Builds things".to_string(),
            email: "jane@example.com".to_string(),
            phone: None,
            location: Some("Berlin".to_string()),
            avatar_url: None,
            resume_url: None,
            github: Some("https://github.com/jane".to_string()),
            linkedin: None,
            twitter: None,
            website: None,
            skills: serde_json::json!(["Rust", "Go"]),
            updated_at: Utc::now().fixed_offset(),
        }
    }

    #[tokio::test]
    async fn test_get_current_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![row()]])
            .into_connection();

        let profile = ProfileQueryPostgres::new(Arc::new(db))
            .get_current()
            .await
            .unwrap();

        assert_eq!(profile.name, "Jane Doe");
        assert_eq!(profile.skills, vec!["Rust", "Go"]);
    }

    #[tokio::test]
    async fn test_get_current_before_first_write() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<Model>::new()])
            .into_connection();

        let result = ProfileQueryPostgres::new(Arc::new(db)).get_current().await;

        assert_eq!(result, Err(ProfileQueryError::NotFound));
    }

    #[tokio::test]
    async fn test_get_current_db_error() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Custom("down".to_string())])
            .into_connection();

        let result = ProfileQueryPostgres::new(Arc::new(db)).get_current().await;

        assert!(matches!(result, Err(ProfileQueryError::DatabaseError(_))));
    }
}
