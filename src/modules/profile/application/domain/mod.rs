mod profile_payload;

pub use profile_payload::ProfilePayload;
