//! Test helper module
//!
//! Provides a recording mock of the user gateway.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::{CoreError, CoreResult};
use crate::services::ServiceContext;
use crate::traits::UserGateway;
use crate::types::{
    CreateUserRequest, SessionContext, UpdateUserRequest, UserRecord, UserState,
};

// ===== MockUserGateway =====

pub struct MockUserGateway {
    users: RwLock<Vec<UserRecord>>,
    created: RwLock<Vec<CreateUserRequest>>,
    updates: RwLock<Vec<(Option<String>, UpdateUserRequest)>>,
    /// If Some, every call returns this error
    failure: RwLock<Option<CoreError>>,
}

impl MockUserGateway {
    pub fn new() -> Self {
        Self {
            users: RwLock::new(Vec::new()),
            created: RwLock::new(Vec::new()),
            updates: RwLock::new(Vec::new()),
            failure: RwLock::new(None),
        }
    }

    pub async fn fail_with(&self, err: Option<CoreError>) {
        *self.failure.write().await = err;
    }

    pub async fn insert(&self, user: UserRecord) {
        self.users.write().await.push(user);
    }

    pub async fn created(&self) -> Vec<CreateUserRequest> {
        self.created.read().await.clone()
    }

    /// Recorded `(x-user-id, request)` pairs
    pub async fn updates(&self) -> Vec<(Option<String>, UpdateUserRequest)> {
        self.updates.read().await.clone()
    }

    async fn check_failure(&self) -> CoreResult<()> {
        match self.failure.read().await.clone() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl UserGateway for MockUserGateway {
    async fn list_users(&self) -> CoreResult<Vec<UserRecord>> {
        self.check_failure().await?;
        Ok(self.users.read().await.clone())
    }

    async fn create_user(&self, request: &CreateUserRequest) -> CoreResult<()> {
        self.check_failure().await?;
        self.created.write().await.push(request.clone());
        Ok(())
    }

    async fn update_user(
        &self,
        ctx: &SessionContext,
        request: &UpdateUserRequest,
    ) -> CoreResult<()> {
        self.check_failure().await?;
        self.updates
            .write()
            .await
            .push((ctx.user_id.clone(), request.clone()));
        Ok(())
    }
}

// ===== factory functions =====

pub fn create_test_context(gateway: Arc<MockUserGateway>) -> Arc<ServiceContext> {
    Arc::new(ServiceContext::new(gateway))
}

pub fn sample_user(id: i64, username: &str) -> UserRecord {
    UserRecord {
        id,
        username: username.to_string(),
        email: Some(format!("{username}@uni.edu")),
        firstname: None,
        lastname: None,
        state: UserState::Active,
        role_id: 1,
    }
}
