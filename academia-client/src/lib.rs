//! # academia-client
//!
//! Typed `reqwest` client for the Academia `/users` REST API.
//!
//! | Operation | Endpoint |
//! |-----------|----------|
//! | list users | `GET /users` |
//! | create user | `POST /users` |
//! | update user | `PATCH /users/{id}` (header `x-user-id`) |
//!
//! [`ApiClient`] implements [`academia_core::UserGateway`], so it plugs
//! straight into the core services.
//!
//! ## Feature Flags
//!
//! - **`native-tls`** *(default)*: use the platform's native TLS implementation.
//! - **`rustls`**: use rustls.

mod client;
mod error;
mod http_client;
mod utils;

pub use client::{ApiClient, ClientConfig, DEFAULT_BASE_URL, USER_ID_HEADER};
pub use error::{ClientError, Result};
pub use http_client::{HttpUtils, extract_error_message};
