use chrono::Utc;

use crate::profile::application::ports::outgoing::profile_query::ProfileView;

pub fn sample_profile() -> ProfileView {
    ProfileView {
        name: "Jane Doe".to_string(),
        title: "Software Engineer".to_string(),
        bio: "I build reliable backends.".to_string(),
        email: "jane@example.com".to_string(),
        phone: None,
        location: Some("Berlin".to_string()),
        avatar_url: None,
        resume_url: None,
        github: Some("https://github.com/janedoe".to_string()),
        linkedin: None,
        twitter: None,
        website: None,
        skills: vec!["Rust".to_string(), "Go".to_string()],
        updated_at: Utc::now(),
    }
}
