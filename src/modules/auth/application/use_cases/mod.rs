pub mod authenticate_admin;
pub mod login_admin;
