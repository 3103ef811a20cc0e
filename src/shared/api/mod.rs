pub mod json_config;
pub mod payload_json;
pub mod response;
pub mod status_query;

pub use json_config::custom_json_config;
pub use payload_json::PayloadJson;
pub use response::{ApiError, ApiResponse};
pub use status_query::StatusQuery;
