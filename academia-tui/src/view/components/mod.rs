//! Reusable widgets

pub mod form;
pub mod navigation;
pub mod statusbar;
pub mod user_menu;
