pub mod app_state_builder;
pub mod auth_helper;
pub mod experience_test_fixtures;
pub mod in_memory;
pub mod profile_test_fixtures;
pub mod project_test_fixtures;
pub mod stubs;
pub mod test_server;
