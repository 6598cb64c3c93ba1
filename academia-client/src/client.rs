//! `/users` REST client

use std::time::Duration;

use academia_core::types::{CreateUserRequest, SessionContext, UpdateUserRequest, UserRecord};
use academia_core::{CoreResult, UserGateway};
use async_trait::async_trait;
use reqwest::Client;

use crate::error::{ClientError, Result};
use crate::http_client::HttpUtils;

/// Default API base
pub const DEFAULT_BASE_URL: &str = "http://localhost:4000";
/// Header carrying the acting user's id on updates
pub const USER_ID_HEADER: &str = "x-user-id";

const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

const CREATE_FALLBACK: &str = "Error creando usuario";
const UPDATE_FALLBACK: &str = "Error actualizando usuario";
const LIST_FALLBACK: &str = "Error cargando usuarios";

/// Connection settings
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }
}

/// Client for the remote user API
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS))
            .timeout(config.timeout)
            .build()
            .map_err(|e| ClientError::InvalidConfig {
                detail: e.to_string(),
            })?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// `GET /users`
    pub async fn list_users(&self) -> Result<Vec<UserRecord>> {
        let url = self.url("/users");
        let (status, body) =
            HttpUtils::execute_request(self.client.get(&url), "GET", &url).await?;
        HttpUtils::ensure_success(status, &body, LIST_FALLBACK)?;
        HttpUtils::parse_json(&body)
    }

    /// `POST /users`
    pub async fn create_user(&self, request: &CreateUserRequest) -> Result<()> {
        let url = self.url("/users");
        log::debug!("Create payload: {request:?}");
        let (status, body) =
            HttpUtils::execute_request(self.client.post(&url).json(request), "POST", &url).await?;
        HttpUtils::ensure_success(status, &body, CREATE_FALLBACK)
    }

    /// `PATCH /users/{id}`, with `x-user-id` when the caller is known
    pub async fn update_user(
        &self,
        user_id: Option<&str>,
        request: &UpdateUserRequest,
    ) -> Result<()> {
        let url = self.url(&format!("/users/{}", request.id));
        log::debug!("Update payload: {request:?}");

        let mut builder = self.client.patch(&url).json(request);
        match user_id {
            Some(id) => builder = builder.header(USER_ID_HEADER, id),
            None => log::warn!("No caller id configured; sending update without {USER_ID_HEADER}"),
        }

        let (status, body) = HttpUtils::execute_request(builder, "PATCH", &url).await?;
        HttpUtils::ensure_success(status, &body, UPDATE_FALLBACK)
    }
}

#[async_trait]
impl UserGateway for ApiClient {
    async fn list_users(&self) -> CoreResult<Vec<UserRecord>> {
        Ok(ApiClient::list_users(self).await?)
    }

    async fn create_user(&self, request: &CreateUserRequest) -> CoreResult<()> {
        Ok(ApiClient::create_user(self, request).await?)
    }

    async fn update_user(
        &self,
        ctx: &SessionContext,
        request: &UpdateUserRequest,
    ) -> CoreResult<()> {
        Ok(ApiClient::update_user(self, ctx.user_id.as_deref(), request).await?)
    }
}
