use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::modules::experience::application::domain::ExperienceKind;
use crate::shared::domain::{PublicationStatus, StatusFilter};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ExperienceView {
    pub id: Uuid,
    pub title: String,
    pub company: String,
    #[serde(rename = "type")]
    pub kind: ExperienceKind,
    pub description: String,
    pub responsibilities: Vec<String>,
    pub skills: Vec<String>,
    pub start_date: String,
    /// Always absent while `current` is true.
    pub end_date: Option<String>,
    pub current: bool,
    pub logo_url: Option<String>,
    pub status: PublicationStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExperienceQueryError {
    #[error("Experience not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

#[async_trait]
pub trait ExperienceQuery: Send + Sync {
    async fn get_by_id(&self, experience_id: Uuid)
        -> Result<ExperienceView, ExperienceQueryError>;

    /// Latest `start_date` first, compared as text; newest entry wins a tie.
    async fn list(&self, filter: StatusFilter)
        -> Result<Vec<ExperienceView>, ExperienceQueryError>;
}
