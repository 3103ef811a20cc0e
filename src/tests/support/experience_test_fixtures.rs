use chrono::Utc;
use uuid::Uuid;

use crate::experience::application::domain::ExperienceKind;
use crate::experience::application::ports::outgoing::experience_query::ExperienceView;
use crate::shared::domain::PublicationStatus;

pub fn sample_experience(status: PublicationStatus) -> ExperienceView {
    let now = Utc::now();
    ExperienceView {
        id: Uuid::new_v4(),
        title: "Backend Engineer".to_string(),
        company: "Acme Corp".to_string(),
        kind: ExperienceKind::Job,
        description: "Built and ran the billing platform".to_string(),
        responsibilities: vec![
            "Designed the invoicing service".to_string(),
            "Owned on-call rotation".to_string(),
        ],
        skills: vec!["Rust".to_string(), "PostgreSQL".to_string()],
        start_date: "2022-03".to_string(),
        end_date: Some("2024-06".to_string()),
        current: false,
        logo_url: None,
        status,
        created_at: now,
        updated_at: now,
    }
}
