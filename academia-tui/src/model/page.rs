//! Screens and dashboard pages

use super::NavItemId;

/// Top-level screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    /// Login / register / forgot password
    #[default]
    Auth,
    Dashboard,
}

/// Dashboard tab
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Home,
    ManageUsers,
    CreateUser,
}

impl Page {
    pub fn from_nav_id(id: NavItemId) -> Self {
        match id {
            NavItemId::Home => Page::Home,
            NavItemId::ManageUsers => Page::ManageUsers,
            NavItemId::CreateUser => Page::CreateUser,
        }
    }

    pub fn nav_id(self) -> NavItemId {
        match self {
            Page::Home => NavItemId::Home,
            Page::ManageUsers => NavItemId::ManageUsers,
            Page::CreateUser => NavItemId::CreateUser,
        }
    }
}
