//! Admin user-management service

use std::sync::Arc;

use crate::error::CoreResult;
use crate::services::{log_failure, ServiceContext};
use crate::types::{
    CreateUserRequest, Notification, SessionContext, UpdateUserRequest, UserRecord,
};

/// Admin user-management service
pub struct UserAdminService {
    ctx: Arc<ServiceContext>,
}

impl UserAdminService {
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self { ctx }
    }

    /// Collection shown by the list step
    pub async fn list_users(&self) -> CoreResult<Vec<UserRecord>> {
        let users = self
            .ctx
            .gateway
            .list_users()
            .await
            .inspect_err(|e| log_failure("List users", e))?;
        log::debug!("Loaded {} users", users.len());
        Ok(users)
    }

    pub async fn create_user(&self, request: &CreateUserRequest) -> CoreResult<()> {
        log::info!("Creating user {}", request.username);
        self.ctx
            .gateway
            .create_user(request)
            .await
            .inspect_err(|e| log_failure("Create user", e))
    }

    /// `PATCH /users/{id}` on behalf of `session`
    pub async fn update_user(
        &self,
        session: &SessionContext,
        request: &UpdateUserRequest,
    ) -> CoreResult<()> {
        if session.user_id.is_none() {
            log::warn!("Updating user {} without a caller id", request.id);
        }
        log::info!("Updating user {}", request.id);
        self.ctx
            .gateway
            .update_user(session, request)
            .await
            .inspect_err(|e| log_failure("Update user", e))
    }

    /// Notification for a finished update; failures never leak details
    pub fn update_notification(result: &CoreResult<()>) -> Notification {
        match result {
            Ok(()) => Notification::user_updated(),
            Err(_) => Notification::update_failed(),
        }
    }

    /// Notification for a finished create; failures carry the API message
    pub fn create_notification(result: &CoreResult<()>) -> Notification {
        match result {
            Ok(()) => Notification::user_created(),
            Err(e) => Notification::error("Error creando usuario", e.user_message()),
        }
    }
}
