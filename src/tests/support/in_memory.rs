//! Process-local stores behind the real outgoing ports, for end-to-end tests without Postgres.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::experience::application::ports::outgoing::experience_query::{
    ExperienceQuery, ExperienceQueryError, ExperienceView,
};
use crate::experience::application::ports::outgoing::experience_repository::{
    CreateExperienceData, ExperienceRepository, ExperienceRepositoryError, PatchExperienceData,
};
use crate::profile::application::ports::outgoing::profile_query::{
    ProfileQuery, ProfileQueryError, ProfileView,
};
use crate::profile::application::ports::outgoing::profile_repository::{
    CreateProfileData, PatchProfileData, ProfileRepository, ProfileRepositoryError,
};
use crate::project::application::ports::outgoing::project_query::{
    ProjectQuery, ProjectQueryError, ProjectView,
};
use crate::project::application::ports::outgoing::project_repository::{
    CreateProjectData, PatchProjectData, ProjectRepository, ProjectRepositoryError,
};
use crate::shared::domain::{PatchField, StatusFilter};

fn keep_or_replace<T>(current: &mut T, patch: PatchField<T>) {
    if let PatchField::Value(v) = patch {
        *current = v;
    }
}

fn keep_or_replace_list(current: &mut Vec<String>, patch: PatchField<Vec<String>>) {
    match patch {
        PatchField::Unset => {}
        PatchField::Null => current.clear(),
        PatchField::Value(v) => *current = v,
    }
}

fn patch_nullable(current: &mut Option<String>, patch: PatchField<String>) {
    *current = patch.apply_to(current.take());
}

// ============================ Projects ============================

/// Rows are kept in insertion order; `list` returns them newest first.
#[derive(Clone, Default)]
pub struct InMemoryProjects {
    rows: Arc<Mutex<Vec<ProjectView>>>,
}

#[async_trait]
impl ProjectRepository for InMemoryProjects {
    async fn create_project(
        &self,
        data: CreateProjectData,
    ) -> Result<ProjectView, ProjectRepositoryError> {
        let now = Utc::now();
        let view = ProjectView {
            id: Uuid::new_v4(),
            title: data.title,
            description: data.description,
            long_description: data.long_description,
            tech_stack: data.tech_stack,
            tags: data.tags,
            github_url: data.github_url,
            live_url: data.live_url,
            image_url: data.image_url,
            featured: data.featured,
            status: data.status,
            created_at: now,
            updated_at: now,
        };

        let mut rows = self
            .rows
            .lock()
            .map_err(|e| ProjectRepositoryError::DatabaseError(e.to_string()))?;
        rows.push(view.clone());
        Ok(view)
    }

    async fn patch_project(
        &self,
        project_id: Uuid,
        data: PatchProjectData,
    ) -> Result<ProjectView, ProjectRepositoryError> {
        let mut rows = self
            .rows
            .lock()
            .map_err(|e| ProjectRepositoryError::DatabaseError(e.to_string()))?;
        let row = rows
            .iter_mut()
            .find(|p| p.id == project_id)
            .ok_or(ProjectRepositoryError::NotFound)?;

        if data.is_empty() {
            return Ok(row.clone());
        }

        keep_or_replace(&mut row.title, data.title);
        keep_or_replace(&mut row.description, data.description);
        patch_nullable(&mut row.long_description, data.long_description);
        keep_or_replace_list(&mut row.tech_stack, data.tech_stack);
        keep_or_replace_list(&mut row.tags, data.tags);
        patch_nullable(&mut row.github_url, data.github_url);
        patch_nullable(&mut row.live_url, data.live_url);
        patch_nullable(&mut row.image_url, data.image_url);
        keep_or_replace(&mut row.featured, data.featured);
        keep_or_replace(&mut row.status, data.status);
        row.updated_at = Utc::now();

        Ok(row.clone())
    }

    async fn delete_project(&self, project_id: Uuid) -> Result<(), ProjectRepositoryError> {
        let mut rows = self
            .rows
            .lock()
            .map_err(|e| ProjectRepositoryError::DatabaseError(e.to_string()))?;
        let before = rows.len();
        rows.retain(|p| p.id != project_id);

        if rows.len() == before {
            return Err(ProjectRepositoryError::NotFound);
        }
        Ok(())
    }
}

#[async_trait]
impl ProjectQuery for InMemoryProjects {
    async fn get_by_id(&self, project_id: Uuid) -> Result<ProjectView, ProjectQueryError> {
        let rows = self
            .rows
            .lock()
            .map_err(|e| ProjectQueryError::DatabaseError(e.to_string()))?;
        rows.iter()
            .find(|p| p.id == project_id)
            .cloned()
            .ok_or(ProjectQueryError::NotFound)
    }

    async fn list(&self, filter: StatusFilter) -> Result<Vec<ProjectView>, ProjectQueryError> {
        let rows = self
            .rows
            .lock()
            .map_err(|e| ProjectQueryError::DatabaseError(e.to_string()))?;
        Ok(rows
            .iter()
            .rev()
            .filter(|p| filter.matches(p.status))
            .cloned()
            .collect())
    }
}

// ============================ Experiences ============================

#[derive(Clone, Default)]
pub struct InMemoryExperiences {
    rows: Arc<Mutex<Vec<ExperienceView>>>,
}

#[async_trait]
impl ExperienceRepository for InMemoryExperiences {
    async fn create_experience(
        &self,
        data: CreateExperienceData,
    ) -> Result<ExperienceView, ExperienceRepositoryError> {
        let now = Utc::now();
        let view = ExperienceView {
            id: Uuid::new_v4(),
            title: data.title,
            company: data.company,
            kind: data.kind,
            description: data.description,
            responsibilities: data.responsibilities,
            skills: data.skills,
            start_date: data.start_date,
            end_date: if data.current { None } else { data.end_date },
            current: data.current,
            logo_url: data.logo_url,
            status: data.status,
            created_at: now,
            updated_at: now,
        };

        let mut rows = self
            .rows
            .lock()
            .map_err(|e| ExperienceRepositoryError::DatabaseError(e.to_string()))?;
        rows.push(view.clone());
        Ok(view)
    }

    async fn patch_experience(
        &self,
        experience_id: Uuid,
        data: PatchExperienceData,
    ) -> Result<ExperienceView, ExperienceRepositoryError> {
        let mut rows = self
            .rows
            .lock()
            .map_err(|e| ExperienceRepositoryError::DatabaseError(e.to_string()))?;
        let row = rows
            .iter_mut()
            .find(|e| e.id == experience_id)
            .ok_or(ExperienceRepositoryError::NotFound)?;

        if data.is_empty() {
            return Ok(row.clone());
        }

        keep_or_replace(&mut row.title, data.title);
        keep_or_replace(&mut row.company, data.company);
        keep_or_replace(&mut row.kind, data.kind);
        keep_or_replace(&mut row.description, data.description);
        keep_or_replace_list(&mut row.responsibilities, data.responsibilities);
        keep_or_replace_list(&mut row.skills, data.skills);
        keep_or_replace(&mut row.start_date, data.start_date);
        patch_nullable(&mut row.end_date, data.end_date);
        keep_or_replace(&mut row.current, data.current);
        patch_nullable(&mut row.logo_url, data.logo_url);
        keep_or_replace(&mut row.status, data.status);
        if row.current {
            row.end_date = None;
        }
        row.updated_at = Utc::now();

        Ok(row.clone())
    }

    async fn delete_experience(
        &self,
        experience_id: Uuid,
    ) -> Result<(), ExperienceRepositoryError> {
        let mut rows = self
            .rows
            .lock()
            .map_err(|e| ExperienceRepositoryError::DatabaseError(e.to_string()))?;
        let before = rows.len();
        rows.retain(|e| e.id != experience_id);

        if rows.len() == before {
            return Err(ExperienceRepositoryError::NotFound);
        }
        Ok(())
    }
}

#[async_trait]
impl ExperienceQuery for InMemoryExperiences {
    async fn get_by_id(&self, experience_id: Uuid) -> Result<ExperienceView, ExperienceQueryError> {
        let rows = self
            .rows
            .lock()
            .map_err(|e| ExperienceQueryError::DatabaseError(e.to_string()))?;
        rows.iter()
            .find(|e| e.id == experience_id)
            .cloned()
            .ok_or(ExperienceQueryError::NotFound)
    }

    async fn list(&self, filter: StatusFilter) -> Result<Vec<ExperienceView>, ExperienceQueryError> {
        let rows = self
            .rows
            .lock()
            .map_err(|e| ExperienceQueryError::DatabaseError(e.to_string()))?;
        let mut listed: Vec<ExperienceView> = rows
            .iter()
            .rev()
            .filter(|e| filter.matches(e.status))
            .cloned()
            .collect();
        listed.sort_by(|a, b| b.start_date.cmp(&a.start_date));
        Ok(listed)
    }
}

// ============================ Profile ============================

#[derive(Clone, Default)]
pub struct InMemoryProfile {
    row: Arc<Mutex<Option<ProfileView>>>,
}

#[async_trait]
impl ProfileRepository for InMemoryProfile {
    async fn create_profile(
        &self,
        data: CreateProfileData,
    ) -> Result<ProfileView, ProfileRepositoryError> {
        let mut row = self
            .row
            .lock()
            .map_err(|e| ProfileRepositoryError::DatabaseError(e.to_string()))?;
        if row.is_some() {
            return Err(ProfileRepositoryError::AlreadyExists);
        }

        let view = ProfileView {
            name: data.name,
            title: data.title,
            bio: data.bio,
            email: data.email,
            phone: data.phone,
            location: data.location,
            avatar_url: data.avatar_url,
            resume_url: data.resume_url,
            github: data.github,
            linkedin: data.linkedin,
            twitter: data.twitter,
            website: data.website,
            skills: data.skills,
            updated_at: Utc::now(),
        };
        *row = Some(view.clone());
        Ok(view)
    }

    async fn patch_profile(
        &self,
        data: PatchProfileData,
    ) -> Result<ProfileView, ProfileRepositoryError> {
        let mut row = self
            .row
            .lock()
            .map_err(|e| ProfileRepositoryError::DatabaseError(e.to_string()))?;
        let current = row.as_mut().ok_or(ProfileRepositoryError::NotFound)?;

        keep_or_replace(&mut current.name, data.name);
        keep_or_replace(&mut current.title, data.title);
        keep_or_replace(&mut current.bio, data.bio);
        keep_or_replace(&mut current.email, data.email);
        patch_nullable(&mut current.phone, data.phone);
        patch_nullable(&mut current.location, data.location);
        patch_nullable(&mut current.avatar_url, data.avatar_url);
        patch_nullable(&mut current.resume_url, data.resume_url);
        patch_nullable(&mut current.github, data.github);
        patch_nullable(&mut current.linkedin, data.linkedin);
        patch_nullable(&mut current.twitter, data.twitter);
        patch_nullable(&mut current.website, data.website);
        keep_or_replace_list(&mut current.skills, data.skills);
        current.updated_at = Utc::now();

        Ok(current.clone())
    }
}

#[async_trait]
impl ProfileQuery for InMemoryProfile {
    async fn get_current(&self) -> Result<ProfileView, ProfileQueryError> {
        let row = self
            .row
            .lock()
            .map_err(|e| ProfileQueryError::DatabaseError(e.to_string()))?;
        row.clone().ok_or(ProfileQueryError::NotFound)
    }
}
