use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, Set, SqlErr,
};
use std::sync::Arc;

use crate::modules::profile::adapter::outgoing::model_to_view;
use crate::modules::profile::adapter::outgoing::sea_orm_entity::profiles::{
    ActiveModel, Column, Entity, Model, PROFILE_ID,
};
use crate::modules::profile::application::ports::outgoing::profile_query::ProfileView;
use crate::modules::profile::application::ports::outgoing::profile_repository::{
    CreateProfileData, PatchProfileData, ProfileRepository, ProfileRepositoryError,
};
use crate::shared::domain::PatchField;

#[derive(Clone)]
pub struct ProfileRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProfileRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProfileRepository for ProfileRepositoryPostgres {
    async fn create_profile(
        &self,
        data: CreateProfileData,
    ) -> Result<ProfileView, ProfileRepositoryError> {
        let model = ActiveModel {
            id: Set(PROFILE_ID),
            name: Set(data.name),
            title: Set(data.title),
            bio: Set(data.bio),
            email: Set(data.email),
            phone: Set(data.phone),
            location: Set(data.location),
            avatar_url: Set(data.avatar_url),
            resume_url: Set(data.resume_url),
            github: Set(data.github),
            linkedin: Set(data.linkedin),
            twitter: Set(data.twitter),
            website: Set(data.website),
            skills: Set(to_json(&data.skills)?),
            updated_at: Set(Utc::now().fixed_offset()),
        };

        let row = model.insert(&*self.db).await.map_err(|e| {
            if let Some(SqlErr::UniqueConstraintViolation(_)) = e.sql_err() {
                ProfileRepositoryError::AlreadyExists
            } else {
                map_db_err(e)
            }
        })?;

        to_view(row)
    }

    async fn patch_profile(
        &self,
        data: PatchProfileData,
    ) -> Result<ProfileView, ProfileRepositoryError> {
        let mut model = <ActiveModel as Default>::default();

        set_required(&mut model.name, data.name);
        set_required(&mut model.title, data.title);
        set_required(&mut model.bio, data.bio);
        set_required(&mut model.email, data.email);

        set_nullable(&mut model.phone, data.phone);
        set_nullable(&mut model.location, data.location);
        set_nullable(&mut model.avatar_url, data.avatar_url);
        set_nullable(&mut model.resume_url, data.resume_url);
        set_nullable(&mut model.github, data.github);
        set_nullable(&mut model.linkedin, data.linkedin);
        set_nullable(&mut model.twitter, data.twitter);
        set_nullable(&mut model.website, data.website);

        if let PatchField::Value(skills) = data.skills {
            model.skills = Set(to_json(&skills)?);
        }

        // Always touched, so an empty body still round-trips the current row
        model.updated_at = Set(Utc::now().fixed_offset());

        let row = Entity::update_many()
            .set(model)
            .filter(Column::Id.eq(PROFILE_ID))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?
            .into_iter()
            .next()
            .ok_or(ProfileRepositoryError::NotFound)?;

        to_view(row)
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

fn to_view(model: Model) -> Result<ProfileView, ProfileRepositoryError> {
    model_to_view(model).map_err(ProfileRepositoryError::SerializationError)
}

fn to_json<T: serde::Serialize>(data: &T) -> Result<serde_json::Value, ProfileRepositoryError> {
    serde_json::to_value(data).map_err(|e| ProfileRepositoryError::SerializationError(e.to_string()))
}

fn map_db_err(e: DbErr) -> ProfileRepositoryError {
    ProfileRepositoryError::DatabaseError(e.to_string())
}
