pub mod admin_login_log;
pub mod admin_site;
pub mod admin_user;
