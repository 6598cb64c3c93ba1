//! Page views

pub mod auth;
pub mod create_user;
pub mod home;
pub mod users;
