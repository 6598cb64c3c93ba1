//! Academia TUI
//!
//! ## Architecture
//!
//! Elm Architecture (TEA):
//! - **Model**: application state (`model/`)
//! - **Message**: event messages (`message/`)
//! - **Update**: state transitions (`update/`)
//! - **View**: rendering (`view/`)
//! - **Event**: input translation (`event/`)
//! - **Backend**: config file and REST calls (`backend/`)
//!
//! `update` never performs I/O. It queues an `ApiRequest` on the app; the
//! loop in `app.rs` hands queued requests to the backend, which runs them on
//! its own tokio runtime and reports back as `AppMessage::Api`.
//!
//! ## Startup
//!
//! 1. file logging
//! 2. config file, then `ACADEMIA_API_URL` / `ACADEMIA_USER_ID`
//! 3. language and theme
//! 4. backend (HTTP client + runtime)
//! 5. terminal, then the main loop
//! 6. terminal restored whether or not the loop failed

mod app;
mod backend;
mod event;
pub mod i18n;
mod message;
mod model;
mod update;
mod util;
mod view;

use academia_core::types::SessionContext;
use anyhow::Result;

use backend::{ApiService, ConfigService, FileConfigService};
use i18n::{set_language, Language};
use message::AppMessage;
use util::{init_logging, init_terminal, restore_terminal};
use view::theme::set_theme;

fn main() -> Result<()> {
    let log_path = init_logging()?;
    tracing::info!("Starting Academia TUI, logging to {}", log_path.display());

    // 1. configuration
    let config_service = FileConfigService::new();
    if !config_service.path().exists() {
        let defaults = config_service.load()?;
        if let Err(e) = config_service.save(&defaults) {
            tracing::warn!("Could not write default config: {e:#}");
        }
    }
    let config = config_service.load()?.with_env_overrides();

    set_language(Language::from_code(&config.language).unwrap_or_default());
    set_theme(config.theme);

    // 2. backend
    let mut backend = ApiService::new(&config)?;

    // 3. terminal
    let mut terminal = init_terminal()?;

    // 4. app
    let mut app = model::App::new(SessionContext::new(config.user_id.clone()));
    app.api_base_url = config.api_base_url.clone();
    app.config_path = config_service.path().display().to_string();

    let result = terminal
        .size()
        .map_err(anyhow::Error::from)
        .and_then(|size| {
            update::update(&mut app, AppMessage::Resize(size.width));
            app::run(&mut terminal, &mut app, &mut backend)
        });

    // 5. restore the terminal even on error
    restore_terminal(&mut terminal)?;

    if let Err(e) = &result {
        tracing::error!("Exited with error: {e:#}");
    } else {
        tracing::info!("Bye");
    }
    result
}
