//! Caller identity passed explicitly into submissions

/// Session context
///
/// Carries the acting user's id (sent as `x-user-id`) and display name.
/// Built by the shell from configuration and the login screen; never read
/// from ambient global state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionContext {
    pub user_id: Option<String>,
    pub username: Option<String>,
}

impl SessionContext {
    pub fn new(user_id: Option<String>) -> Self {
        Self {
            user_id: user_id.filter(|id| !id.trim().is_empty()),
            username: None,
        }
    }

    #[must_use]
    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    pub fn is_authenticated(&self) -> bool {
        self.username.is_some()
    }

    /// Drop the logged-in user but keep the configured caller id
    pub fn logout(&mut self) {
        self.username = None;
    }
}
