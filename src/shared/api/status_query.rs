use serde::Deserialize;
use utoipa::IntoParams;

/// `?status=` on collection reads. Kept as raw text so a bad value can be
/// reported as a validation error on `status` instead of a generic 400.
#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct StatusQuery {
    /// published (default), draft or all. draft and all need an admin token.
    pub status: Option<String>,
}
