//! Remote user API abstract Trait

use async_trait::async_trait;

use crate::error::CoreResult;
use crate::types::{CreateUserRequest, SessionContext, UpdateUserRequest, UserRecord};

/// User endpoint gateway Trait
///
/// Implementations:
/// - `academia-client`: `ApiClient` (reqwest, REST `/users`)
#[async_trait]
pub trait UserGateway: Send + Sync {
    /// Fetch the user collection (`GET /users`)
    async fn list_users(&self) -> CoreResult<Vec<UserRecord>>;

    /// Create a user (`POST /users`)
    ///
    /// # Arguments
    /// * `request` - New user payload
    async fn create_user(&self, request: &CreateUserRequest) -> CoreResult<()>;

    /// Partial update (`PATCH /users/{id}`)
    ///
    /// # Arguments
    /// * `ctx` - Caller identity, sent as `x-user-id`
    /// * `request` - Partial fields, scoped to `request.id`
    async fn update_user(&self, ctx: &SessionContext, request: &UpdateUserRequest)
        -> CoreResult<()>;
}
