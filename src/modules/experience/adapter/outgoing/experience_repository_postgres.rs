use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::experience::adapter::outgoing::model_to_view;
use crate::modules::experience::adapter::outgoing::sea_orm_entity::experiences::{
    ActiveModel, Column, Entity, Model,
};
use crate::modules::experience::application::ports::outgoing::experience_query::ExperienceView;
use crate::modules::experience::application::ports::outgoing::experience_repository::{
    CreateExperienceData, ExperienceRepository, ExperienceRepositoryError, PatchExperienceData,
};
use crate::shared::domain::PatchField;

#[derive(Clone)]
pub struct ExperienceRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ExperienceRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ExperienceRepository for ExperienceRepositoryPostgres {
    async fn create_experience(
        &self,
        data: CreateExperienceData,
    ) -> Result<ExperienceView, ExperienceRepositoryError> {
        let now = Utc::now().fixed_offset();

        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            title: Set(data.title),
            company: Set(data.company),
            kind: Set(data.kind.as_str().to_string()),
            description: Set(data.description),
            responsibilities: Set(to_json(&data.responsibilities)?),
            skills: Set(to_json(&data.skills)?),
            start_date: Set(data.start_date),
            end_date: Set(data.end_date),
            current: Set(data.current),
            logo_url: Set(data.logo_url),
            status: Set(data.status.as_str().to_string()),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let result = model.insert(&*self.db).await.map_err(map_db_err)?;

        to_view(result)
    }

    async fn patch_experience(
        &self,
        experience_id: Uuid,
        data: PatchExperienceData,
    ) -> Result<ExperienceView, ExperienceRepositoryError> {
        if data.is_empty() {
            let current = Entity::find_by_id(experience_id)
                .one(&*self.db)
                .await
                .map_err(map_db_err)?
                .ok_or(ExperienceRepositoryError::NotFound)?;

            return to_view(current);
        }

        let mut model = <ActiveModel as Default>::default();

        set_required(&mut model.title, data.title);
        set_required(&mut model.company, data.company);
        set_required(&mut model.description, data.description);
        set_required(&mut model.start_date, data.start_date);

        if let PatchField::Value(kind) = data.kind {
            model.kind = Set(kind.as_str().to_string());
        }

        if let PatchField::Value(items) = data.responsibilities {
            model.responsibilities = Set(to_json(&items)?);
        }

        if let PatchField::Value(items) = data.skills {
            model.skills = Set(to_json(&items)?);
        }

        if let PatchField::Value(current) = data.current {
            model.current = Set(current);
        }

        if let PatchField::Value(status) = data.status {
            model.status = Set(status.as_str().to_string());
        }

        set_nullable(&mut model.end_date, data.end_date);
        set_nullable(&mut model.logo_url, data.logo_url);

        model.updated_at = Set(Utc::now().fixed_offset());

        let results = Entity::update_many()
            .set(model)
            .filter(Column::Id.eq(experience_id))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        let updated = results
            .into_iter()
            .next()
            .ok_or(ExperienceRepositoryError::NotFound)?;

        to_view(updated)
    }

    async fn delete_experience(
        &self,
        experience_id: Uuid,
    ) -> Result<(), ExperienceRepositoryError> {
        let res = Entity::delete_by_id(experience_id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if res.rows_affected == 0 {
            return Err(ExperienceRepositoryError::NotFound);
        }

        Ok(())
    }
}

fn set_required(column: &mut ActiveValue<String>, patch: PatchField<String>) {
    if let PatchField::Value(v) = patch {
        *column = Set(v);
    }
}

fn set_nullable(column: &mut ActiveValue<Option<String>>, patch: PatchField<String>) {
    match patch {
        PatchField::Unset => {}
        PatchField::Null => *column = Set(None),
        PatchField::Value(v) => *column = Set(Some(v)),
    }
}

fn to_view(model: Model) -> Result<ExperienceView, ExperienceRepositoryError> {
    model_to_view(model).map_err(ExperienceRepositoryError::SerializationError)
}

fn to_json<T: serde::Serialize>(data: &T) -> Result<serde_json::Value, ExperienceRepositoryError> {
    serde_json::to_value(data)
        .map_err(|e| ExperienceRepositoryError::SerializationError(e.to_string()))
}

fn map_db_err(e: DbErr) -> ExperienceRepositoryError {
    ExperienceRepositoryError::DatabaseError(e.to_string())
}
