mod experience_kind;
mod experience_payload;

pub use experience_kind::ExperienceKind;
pub use experience_payload::ExperiencePayload;
