//! API service
//!
//! Owns the tokio runtime and the core services. The UI thread never
//! blocks on the network: each [`ApiRequest`] is spawned onto the runtime
//! and its outcome comes back as an [`ApiEvent`] that the main loop drains
//! between frames.

use std::sync::Arc;

use academia_client::{ApiClient, ClientConfig};
use academia_core::forms::SubmitAction;
use academia_core::types::{CreateUserRequest, SessionContext, UpdateUserRequest, UserRecord};
use academia_core::{AuthOutcome, AuthService, CoreResult, ServiceContext, UserAdminService};
use anyhow::{Context, Result};
use tokio::runtime::Runtime;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use super::AppConfig;

/// Work queued by the update layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiRequest {
    /// Fire the auth screen's action
    Auth(SubmitAction),
    /// `GET /users`
    ListUsers,
    /// `POST /users`
    CreateUser { epoch: u64, request: CreateUserRequest },
    /// `PATCH /users/{id}` on behalf of `session`
    UpdateUser {
        epoch: u64,
        session: SessionContext,
        request: UpdateUserRequest,
    },
}

impl ApiRequest {
    /// Log label; request bodies may carry passwords
    pub fn name(&self) -> &'static str {
        match self {
            ApiRequest::Auth(SubmitAction::Login { .. }) => "login",
            ApiRequest::Auth(SubmitAction::Register(_)) => "register",
            ApiRequest::Auth(SubmitAction::RequestReset { .. }) => "password reset",
            ApiRequest::ListUsers => "list users",
            ApiRequest::CreateUser { .. } => "create user",
            ApiRequest::UpdateUser { .. } => "update user",
        }
    }
}

/// Completed request
#[derive(Debug, Clone)]
pub enum ApiEvent {
    Auth(CoreResult<AuthOutcome>),
    UsersLoaded(CoreResult<Vec<UserRecord>>),
    /// `epoch` echoes the request's session epoch
    UserCreated { epoch: u64, result: CoreResult<()> },
    /// `id` is the record the update was sent for
    UserUpdated {
        epoch: u64,
        id: i64,
        result: CoreResult<()>,
    },
}

/// Runs requests on a background runtime
pub struct ApiService {
    runtime: Runtime,
    auth: Arc<AuthService>,
    users: Arc<UserAdminService>,
    tx: UnboundedSender<ApiEvent>,
    rx: UnboundedReceiver<ApiEvent>,
}

impl ApiService {
    pub fn new(config: &AppConfig) -> Result<Self> {
        let client = ApiClient::new(ClientConfig {
            base_url: config.api_base_url.clone(),
            timeout: config.request_timeout(),
        })
        .context("Failed to build the API client")?;
        tracing::info!("API base URL: {}", client.base_url());

        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .thread_name("academia-api")
            .enable_all()
            .build()
            .context("Failed to start the tokio runtime")?;

        let ctx = Arc::new(ServiceContext::new(Arc::new(client)));
        let (tx, rx) = mpsc::unbounded_channel();

        Ok(Self {
            runtime,
            auth: Arc::new(AuthService::new(Arc::clone(&ctx))),
            users: Arc::new(UserAdminService::new(ctx)),
            tx,
            rx,
        })
    }

    /// Spawn the request; nothing is cancelled or retried
    pub fn dispatch(&self, request: ApiRequest) {
        let tx = self.tx.clone();
        match request {
            ApiRequest::Auth(action) => {
                let auth = Arc::clone(&self.auth);
                self.runtime.spawn(async move {
                    send(&tx, ApiEvent::Auth(auth.submit(action).await));
                });
            }
            ApiRequest::ListUsers => {
                let users = Arc::clone(&self.users);
                self.runtime.spawn(async move {
                    send(&tx, ApiEvent::UsersLoaded(users.list_users().await));
                });
            }
            ApiRequest::CreateUser { epoch, request } => {
                let users = Arc::clone(&self.users);
                self.runtime.spawn(async move {
                    let result = users.create_user(&request).await;
                    send(&tx, ApiEvent::UserCreated { epoch, result });
                });
            }
            ApiRequest::UpdateUser {
                epoch,
                session,
                request,
            } => {
                let users = Arc::clone(&self.users);
                self.runtime.spawn(async move {
                    let id = request.id;
                    let result = users.update_user(&session, &request).await;
                    send(&tx, ApiEvent::UserUpdated { epoch, id, result });
                });
            }
        }
    }

    /// Next finished request, if any
    pub fn try_recv(&mut self) -> Option<ApiEvent> {
        self.rx.try_recv().ok()
    }
}

fn send(tx: &UnboundedSender<ApiEvent>, event: ApiEvent) {
    if tx.send(event).is_err() {
        tracing::warn!("UI loop is gone, dropping API event");
    }
}
