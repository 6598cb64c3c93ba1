//! Root application state

use academia_core::types::{Notification, SessionContext};

use super::{
    AuthState, CreateUserState, FocusPanel, NavigationState, Page, Screen, ShellState, UsersState,
};
use crate::backend::ApiRequest;

pub struct App {
    pub should_quit: bool,

    /// Auth screen or dashboard
    pub screen: Screen,

    /// Dashboard panel receiving keys
    pub focus: FocusPanel,

    pub navigation: NavigationState,

    /// Active dashboard tab
    pub current_page: Page,

    pub shell: ShellState,

    /// Caller identity passed into every submission
    pub session: SessionContext,

    /// Bumped on logout; results tagged with an older value are stale
    pub session_epoch: u64,

    /// Status line notification
    pub notification: Option<Notification>,

    // === per-screen state ===
    pub auth: AuthState,
    pub users: UsersState,
    pub create_user: CreateUserState,

    // === shown on the home page ===
    pub api_base_url: String,
    pub config_path: String,

    /// Requests queued by `update`, drained by the main loop
    requests: Vec<ApiRequest>,
}

impl App {
    pub fn new(session: SessionContext) -> Self {
        Self {
            should_quit: false,
            screen: Screen::Auth,
            focus: FocusPanel::Navigation,
            navigation: NavigationState::new(),
            current_page: Page::Home,
            shell: ShellState::new(),
            session,
            session_epoch: 0,
            notification: None,
            auth: AuthState::new(),
            users: UsersState::new(),
            create_user: CreateUserState::new(),
            api_base_url: String::new(),
            config_path: String::new(),
            requests: Vec::new(),
        }
    }

    pub fn notify(&mut self, notification: Notification) {
        self.notification = Some(notification);
    }

    /// Informational status line message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.notify(Notification::info(message));
    }

    pub fn clear_status(&mut self) {
        self.notification = None;
    }

    pub fn request(&mut self, request: ApiRequest) {
        tracing::debug!("Queued {}", request.name());
        self.requests.push(request);
    }

    pub fn take_requests(&mut self) -> Vec<ApiRequest> {
        std::mem::take(&mut self.requests)
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(SessionContext::default())
    }
}
