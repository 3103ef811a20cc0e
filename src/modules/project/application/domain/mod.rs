pub mod project_payload;

pub use project_payload::ProjectPayload;
