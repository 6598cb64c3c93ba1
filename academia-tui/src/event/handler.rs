//! Event handler

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::event::keymap::DefaultKeymap;
use crate::message::{
    AppMessage, AuthMessage, ContentMessage, FormMessage, NavigationMessage, ShellMessage,
};
use crate::model::{App, Page, Screen};

pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// Translate a raw terminal event into a message
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app),
        Event::Resize(width, _) => AppMessage::Resize(width),
        _ => AppMessage::Noop,
    }
}

fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // Press only; Windows terminals also report Release
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    if DefaultKeymap::FORCE_QUIT.matches(&key) || DefaultKeymap::QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    match app.screen {
        Screen::Auth => handle_auth_keys(key),
        Screen::Dashboard => handle_dashboard_keys(key, app),
    }
}

fn handle_auth_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::GO_REGISTER.matches(&key) {
        return AppMessage::Auth(AuthMessage::GoToRegister);
    }
    if DefaultKeymap::GO_FORGOT.matches(&key) {
        return AppMessage::Auth(AuthMessage::GoToForgot);
    }
    if DefaultKeymap::BACK.matches(&key) {
        return AppMessage::Auth(AuthMessage::BackToLogin);
    }
    handle_form_keys(key)
}

fn handle_dashboard_keys(key: KeyEvent, app: &App) -> AppMessage {
    // the open menu swallows every key
    if app.shell.user_menu.open {
        return handle_user_menu_keys(key);
    }

    if DefaultKeymap::USER_MENU.matches(&key) {
        return AppMessage::Shell(ShellMessage::OpenUserMenu);
    }
    if DefaultKeymap::TOGGLE_SIDEBAR.matches(&key) {
        return AppMessage::Shell(ShellMessage::ToggleSidebar);
    }
    if DefaultKeymap::REFRESH.matches(&key) {
        return AppMessage::Refresh;
    }
    if DefaultKeymap::BACK.matches(&key) {
        return AppMessage::GoBack;
    }

    let in_form = app.focus.is_content() && is_form_page(app);
    if !in_form && DefaultKeymap::TOGGLE_FOCUS.matches(&key) {
        return AppMessage::ToggleFocus;
    }

    if app.focus.is_navigation() {
        handle_navigation_keys(key)
    } else if in_form {
        handle_form_keys(key)
    } else if app.current_page == Page::ManageUsers {
        handle_list_keys(key)
    } else {
        AppMessage::Noop
    }
}

/// Whether the page content is an editable form
fn is_form_page(app: &App) -> bool {
    match app.current_page {
        Page::CreateUser => true,
        Page::ManageUsers => app.users.is_editing(),
        Page::Home => false,
    }
}

fn handle_navigation_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => AppMessage::Navigation(NavigationMessage::SelectPrevious),
        KeyCode::Down | KeyCode::Char('j') => AppMessage::Navigation(NavigationMessage::SelectNext),
        KeyCode::Enter => AppMessage::Navigation(NavigationMessage::Confirm),
        KeyCode::Home => AppMessage::Navigation(NavigationMessage::SelectFirst),
        KeyCode::End => AppMessage::Navigation(NavigationMessage::SelectLast),
        _ => AppMessage::Noop,
    }
}

fn handle_list_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => AppMessage::Content(ContentMessage::SelectPrevious),
        KeyCode::Down | KeyCode::Char('j') => AppMessage::Content(ContentMessage::SelectNext),
        KeyCode::Enter => AppMessage::Content(ContentMessage::Confirm),
        KeyCode::Home => AppMessage::Content(ContentMessage::SelectFirst),
        KeyCode::End => AppMessage::Content(ContentMessage::SelectLast),
        _ => AppMessage::Noop,
    }
}

fn handle_form_keys(key: KeyEvent) -> AppMessage {
    match (key.modifiers, key.code) {
        (_, KeyCode::Tab | KeyCode::Down) => AppMessage::Form(FormMessage::NextField),
        (_, KeyCode::BackTab | KeyCode::Up) => AppMessage::Form(FormMessage::PrevField),
        (_, KeyCode::Left) => AppMessage::Form(FormMessage::CyclePrev),
        (_, KeyCode::Right) => AppMessage::Form(FormMessage::CycleNext),
        (_, KeyCode::Enter) => AppMessage::Form(FormMessage::Submit),
        (_, KeyCode::Backspace) => AppMessage::Form(FormMessage::Backspace),
        (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char(c)) => {
            AppMessage::Form(FormMessage::Input(c))
        }
        _ => AppMessage::Noop,
    }
}

/// Esc closes; any key that does not belong to the menu closes it too
fn handle_user_menu_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => AppMessage::Shell(ShellMessage::UserMenuPrevious),
        KeyCode::Down | KeyCode::Char('j') => AppMessage::Shell(ShellMessage::UserMenuNext),
        KeyCode::Enter => AppMessage::Shell(ShellMessage::UserMenuConfirm),
        _ => AppMessage::Shell(ShellMessage::CloseUserMenu),
    }
}
