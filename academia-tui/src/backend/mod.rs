//! Backend layer
//!
//! Bridges the synchronous Elm loop and the async core services:
//! configuration loading plus a request/event channel around
//! `academia-core` and the REST client.

mod api_service;
mod config_service;

pub use api_service::{ApiEvent, ApiRequest, ApiService};
pub use config_service::{AppConfig, ConfigService, FileConfigService};
