mod login_admin;

pub use login_admin::{
    __path_login_admin_handler,
    login_admin_handler,
    LoginRequestDto,
    LoginResponse,
};
