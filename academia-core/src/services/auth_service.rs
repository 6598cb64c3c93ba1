//! Authentication screen service

use std::sync::Arc;

use crate::error::CoreResult;
use crate::forms::SubmitAction;
use crate::services::{log_failure, ServiceContext};

/// Result of a fired auth action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthOutcome {
    /// Navigate to the dashboard
    LoggedIn { username: String },
    /// Account created through `POST /users`
    Registered { username: String },
    /// Reset request accepted locally; no endpoint exists yet
    ResetRequested { identifier: String },
}

/// Routes a [`SubmitAction`] to the collaborator that performs it
pub struct AuthService {
    ctx: Arc<ServiceContext>,
}

impl AuthService {
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self { ctx }
    }

    pub async fn submit(&self, action: SubmitAction) -> CoreResult<AuthOutcome> {
        match action {
            SubmitAction::Login { identifier, .. } => {
                log::info!("Login as {identifier}");
                Ok(AuthOutcome::LoggedIn {
                    username: identifier,
                })
            }
            SubmitAction::Register(request) => {
                log::info!("Registering user {}", request.username);
                self.ctx
                    .gateway
                    .create_user(&request)
                    .await
                    .inspect_err(|e| log_failure("Register", e))?;
                Ok(AuthOutcome::Registered {
                    username: request.username,
                })
            }
            SubmitAction::RequestReset { identifier } => {
                log::info!("Password reset requested for {identifier}");
                Ok(AuthOutcome::ResetRequested { identifier })
            }
        }
    }
}
