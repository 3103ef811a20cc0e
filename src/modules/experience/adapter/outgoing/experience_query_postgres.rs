use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::experience::adapter::outgoing::model_to_view;
use crate::modules::experience::adapter::outgoing::sea_orm_entity::experiences::{Column, Entity};
use crate::modules::experience::application::ports::outgoing::experience_query::{
    ExperienceQuery, ExperienceQueryError, ExperienceView,
};
use crate::shared::domain::StatusFilter;

#[derive(Clone)]
pub struct ExperienceQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ExperienceQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ExperienceQuery for ExperienceQueryPostgres {
    async fn get_by_id(
        &self,
        experience_id: Uuid,
    ) -> Result<ExperienceView, ExperienceQueryError> {
        let row = Entity::find_by_id(experience_id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(ExperienceQueryError::NotFound)?;

        model_to_view(row).map_err(ExperienceQueryError::SerializationError)
    }

    async fn list(
        &self,
        filter: StatusFilter,
    ) -> Result<Vec<ExperienceView>, ExperienceQueryError> {
        let mut query = Entity::find();

        if let StatusFilter::Only(status) = filter {
            query = query.filter(Column::Status.eq(status.as_str()));
        }

        query
            .order_by_desc(Column::StartDate)
            .order_by_desc(Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?
            .into_iter()
            .map(|row| model_to_view(row).map_err(ExperienceQueryError::SerializationError))
            .collect()
    }
}

fn map_db_err(e: DbErr) -> ExperienceQueryError {
    ExperienceQueryError::DatabaseError(e.to_string())
}
