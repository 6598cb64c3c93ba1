//! Business logic service layer

mod auth_service;
mod user_admin_service;

pub use auth_service::{AuthOutcome, AuthService};
pub use user_admin_service::UserAdminService;

use std::sync::Arc;

use crate::error::CoreError;
use crate::traits::UserGateway;

/// Service context - holds all dependencies
///
/// The shell creates this context and injects its transport implementation.
pub struct ServiceContext {
    /// Remote `/users` endpoints
    pub gateway: Arc<dyn UserGateway>,
}

impl ServiceContext {
    #[must_use]
    pub fn new(gateway: Arc<dyn UserGateway>) -> Self {
        Self { gateway }
    }
}

/// Expected failures are warnings, everything else is an error
pub(crate) fn log_failure(operation: &str, err: &CoreError) {
    if err.is_expected() {
        log::warn!("{operation} failed: {err}");
    } else {
        log::error!("{operation} failed: {err}");
    }
}
