// src/modules/project/adapter/outgoing/project_query_postgres.rs

use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::project::adapter::outgoing::model_to_view;
use crate::modules::project::adapter::outgoing::sea_orm_entity::projects::{Column, Entity};
use crate::modules::project::application::ports::outgoing::project_query::{
    ProjectQuery, ProjectQueryError, ProjectView,
};
use crate::shared::domain::StatusFilter;

#[derive(Clone)]
pub struct ProjectQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProjectQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProjectQuery for ProjectQueryPostgres {
    async fn get_by_id(&self, project_id: Uuid) -> Result<ProjectView, ProjectQueryError> {
        let project = Entity::find_by_id(project_id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(ProjectQueryError::NotFound)?;

        model_to_view(project).map_err(ProjectQueryError::SerializationError)
    }

    async fn list(&self, filter: StatusFilter) -> Result<Vec<ProjectView>, ProjectQueryError> {
        let mut query = Entity::find();

        if let StatusFilter::Only(status) = filter {
            query = query.filter(Column::Status.eq(status.as_str()));
        }

        let projects = query
            .order_by_desc(Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        projects
            .into_iter()
            .map(|model| model_to_view(model).map_err(ProjectQueryError::SerializationError))
            .collect()
    }
}

fn map_db_err(e: DbErr) -> ProjectQueryError {
    ProjectQueryError::DatabaseError(e.to_string())
}
