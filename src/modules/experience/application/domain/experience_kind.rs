use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::shared::domain::UnknownVariant;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceKind {
    Job,
    Internship,
    Freelance,
}

impl ExperienceKind {
    pub const CHOICES: &'static str = "job, internship, freelance";

    pub fn as_str(&self) -> &'static str {
        match self {
            ExperienceKind::Job => "job",
            ExperienceKind::Internship => "internship",
            ExperienceKind::Freelance => "freelance",
        }
    }
}

impl fmt::Display for ExperienceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExperienceKind {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "job" => Ok(ExperienceKind::Job),
            "internship" => Ok(ExperienceKind::Internship),
            "freelance" => Ok(ExperienceKind::Freelance),
            other => Err(UnknownVariant(other.to_string())),
        }
    }
}
