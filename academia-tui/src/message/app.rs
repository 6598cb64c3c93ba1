//! Root message enum

use super::{AuthMessage, ContentMessage, FormMessage, NavigationMessage, ShellMessage};
use crate::backend::ApiEvent;

#[derive(Debug, Clone)]
pub enum AppMessage {
    Quit,

    /// Switch between sidebar and page
    ToggleFocus,

    Navigation(NavigationMessage),

    /// List pages
    Content(ContentMessage),

    /// Whichever form has focus
    Form(FormMessage),

    /// Auth screen view switches
    Auth(AuthMessage),

    /// Sidebar toggle and user menu
    Shell(ShellMessage),

    /// A background request finished
    Api(ApiEvent),

    /// Terminal width changed
    Resize(u16),

    /// Leave the current form or panel
    GoBack,

    /// Reload the current page
    Refresh,

    /// Ignored input
    Noop,
}
