use chrono::Utc;
use uuid::Uuid;

use crate::modules::project::application::ports::outgoing::project_query::ProjectView;
use crate::shared::domain::PublicationStatus;

pub fn sample_project(status: PublicationStatus) -> ProjectView {
    let now = Utc::now();
    ProjectView {
        id: Uuid::new_v4(),
        title: "Portfolio API".to_string(),
        description: "Backend for the portfolio site".to_string(),
        long_description: None,
        tech_stack: vec!["Rust".to_string(), "PostgreSQL".to_string()],
        tags: vec!["backend".to_string()],
        github_url: Some("https://github.com/example/portfolio".to_string()),
        live_url: None,
        image_url: None,
        featured: false,
        status,
        created_at: now,
        updated_at: now,
    }
}
