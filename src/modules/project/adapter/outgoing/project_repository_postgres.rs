use async_trait::async_trait;
use chrono::Utc;

use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::project::adapter::outgoing::model_to_view;
use crate::modules::project::adapter::outgoing::sea_orm_entity::projects::{
    ActiveModel, Column, Entity,
};
use crate::modules::project::application::ports::outgoing::project_query::ProjectView;
use crate::modules::project::application::ports::outgoing::project_repository::{
    CreateProjectData, PatchProjectData, ProjectRepository, ProjectRepositoryError,
};
use crate::shared::domain::PatchField;

// ============================================================================
// Repository Implementation
// ============================================================================

#[derive(Clone)]
pub struct ProjectRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProjectRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProjectRepository for ProjectRepositoryPostgres {
    async fn create_project(
        &self,
        data: CreateProjectData,
    ) -> Result<ProjectView, ProjectRepositoryError> {
        let now = Utc::now().fixed_offset();

        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            title: Set(data.title),
            description: Set(data.description),
            long_description: Set(data.long_description),
            tech_stack: Set(to_json(&data.tech_stack)?),
            tags: Set(to_json(&data.tags)?),
            github_url: Set(data.github_url),
            live_url: Set(data.live_url),
            image_url: Set(data.image_url),
            featured: Set(data.featured),
            status: Set(data.status.as_str().to_string()),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let result = model.insert(&*self.db).await.map_err(map_db_err)?;

        to_view(result)
    }

    async fn patch_project(
        &self,
        project_id: Uuid,
        data: PatchProjectData,
    ) -> Result<ProjectView, ProjectRepositoryError> {
        if data.is_empty() {
            let result = Entity::find_by_id(project_id)
                .one(&*self.db)
                .await
                .map_err(map_db_err)?
                .ok_or(ProjectRepositoryError::NotFound)?;

            return to_view(result);
        }

        let mut model = <ActiveModel as Default>::default();

        if let PatchField::Value(title) = data.title {
            model.title = Set(title);
        }

        if let PatchField::Value(desc) = data.description {
            model.description = Set(desc);
        }

        if let PatchField::Value(tech) = data.tech_stack {
            model.tech_stack = Set(to_json(&tech)?);
        }

        if let PatchField::Value(tags) = data.tags {
            model.tags = Set(to_json(&tags)?);
        }

        if let PatchField::Value(featured) = data.featured {
            model.featured = Set(featured);
        }

        if let PatchField::Value(status) = data.status {
            model.status = Set(status.as_str().to_string());
        }

        set_nullable(&mut model.long_description, data.long_description);
        set_nullable(&mut model.github_url, data.github_url);
        set_nullable(&mut model.live_url, data.live_url);
        set_nullable(&mut model.image_url, data.image_url);

        model.updated_at = Set(Utc::now().fixed_offset());

        let results = Entity::update_many()
            .set(model)
            .filter(Column::Id.eq(project_id))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        let result = results
            .into_iter()
            .next()
            .ok_or(ProjectRepositoryError::NotFound)?;

        to_view(result)
    }

    async fn delete_project(&self, project_id: Uuid) -> Result<(), ProjectRepositoryError> {
        let res = Entity::delete_by_id(project_id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if res.rows_affected == 0 {
            return Err(ProjectRepositoryError::NotFound);
        }

        Ok(())
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn set_nullable(column: &mut sea_orm::ActiveValue<Option<String>>, patch: PatchField<String>) {
    match patch {
        PatchField::Unset => {}
        PatchField::Null => *column = Set(None),
        PatchField::Value(v) => *column = Set(Some(v)),
    }
}

fn to_view(
    model: crate::modules::project::adapter::outgoing::sea_orm_entity::projects::Model,
) -> Result<ProjectView, ProjectRepositoryError> {
    model_to_view(model).map_err(ProjectRepositoryError::SerializationError)
}

fn to_json<T: serde::Serialize>(data: &T) -> Result<serde_json::Value, ProjectRepositoryError> {
    serde_json::to_value(data)
        .map_err(|e| ProjectRepositoryError::SerializationError(e.to_string()))
}

fn map_db_err(e: DbErr) -> ProjectRepositoryError {
    ProjectRepositoryError::DatabaseError(e.to_string())
}

// ============================================================================
// Tests
// ============================================================================
