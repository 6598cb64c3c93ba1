//! Message layer
//!
//! The event layer translates raw input into these messages and the main
//! loop wraps finished API calls as [`AppMessage::Api`]; the update layer
//! consumes both.

mod app;
mod auth;
mod content;
mod form;
mod navigation;
mod shell;

pub use app::AppMessage;
pub use auth::AuthMessage;
pub use content::ContentMessage;
pub use form::FormMessage;
pub use navigation::NavigationMessage;
pub use shell::ShellMessage;
