//! Dashboard shell updates: sidebar, resize, user menu, logout

use crate::i18n::t;
use crate::message::ShellMessage;
use crate::model::{App, FocusPanel, NavigationState, Page, Screen, UserMenuAction, UsersState};

pub fn update(app: &mut App, msg: ShellMessage) {
    match msg {
        ShellMessage::ToggleSidebar => {
            app.shell.toggle_sidebar();
            if app.shell.is_mobile() && app.shell.visible_sidebar() {
                app.focus = FocusPanel::Navigation;
            }
            sync_focus(app);
        }
        ShellMessage::OpenUserMenu => app.shell.user_menu.open(),
        ShellMessage::CloseUserMenu => app.shell.user_menu.close(),
        ShellMessage::UserMenuPrevious => app.shell.user_menu.select_previous(),
        ShellMessage::UserMenuNext => app.shell.user_menu.select_next(),
        ShellMessage::UserMenuConfirm => {
            let action = app.shell.user_menu.current_action();
            app.shell.user_menu.close();
            if let Some(action) = action {
                run_action(app, action);
            }
        }
    }
}

pub fn resize(app: &mut App, width: u16) {
    app.shell.set_viewport_width(width);
    sync_focus(app);
}

/// A hidden sidebar cannot hold focus
fn sync_focus(app: &mut App) {
    if !app.shell.visible_sidebar() {
        app.focus = FocusPanel::Content;
    }
}

fn run_action(app: &mut App, action: UserMenuAction) {
    let texts = t();
    match action {
        UserMenuAction::Profile => {
            let username = app
                .session
                .username
                .clone()
                .unwrap_or_else(|| texts.status.guest.to_string());
            app.set_status(format!("{}: {username}", texts.status.profile));
        }
        UserMenuAction::Settings => {
            let message = format!("{}: {}", texts.status.settings, app.config_path);
            app.set_status(message);
        }
        UserMenuAction::Logout => logout(app),
    }
}

/// Back to the auth screen with a cleared session and fresh page state
pub fn logout(app: &mut App) {
    tracing::info!("Logging out");
    app.session.logout();
    app.session_epoch += 1;
    app.screen = Screen::Auth;
    app.auth.reset();
    app.users = UsersState::new();
    app.create_user.reset();
    app.navigation = NavigationState::new();
    app.current_page = Page::Home;
    app.focus = FocusPanel::Navigation;
    app.shell.user_menu.close();
    app.shell.close_mobile_menu();
    app.set_status(t().status.logged_out);
}
