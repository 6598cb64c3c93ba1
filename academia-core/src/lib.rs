//! Academia Core Library
//!
//! Provides the UI-independent logic of the Academia front-end:
//! - Field validators (username, password, names, email, ...)
//! - Form view-state controller for the login / register / forgot-password screen
//! - Admin user edit and create forms
//! - Role mapping between backend role ids and role names
//! - Services that route form submissions to a [`UserGateway`]
//!
//! The remote REST API is abstracted behind the [`UserGateway`] trait so that
//! the terminal front-end, tests, and any other shell can plug in their own transport.

pub mod error;
pub mod forms;
pub mod services;
pub mod traits;
pub mod types;
pub mod validation;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use error::{CoreError, CoreResult};
pub use services::{AuthOutcome, AuthService, ServiceContext, UserAdminService};
pub use traits::UserGateway;
