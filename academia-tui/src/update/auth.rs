//! Auth screen updates

use academia_core::forms::AuthView;
use academia_core::types::Notification;
use academia_core::{AuthOutcome, CoreResult, UserAdminService};

use crate::backend::ApiRequest;
use crate::i18n::t;
use crate::message::{AuthMessage, FormMessage};
use crate::model::{App, FocusPanel, FormRow, Page, Screen};

/// View switches; the register and forgot links only exist on the login view
pub fn update(app: &mut App, msg: AuthMessage) {
    let form = &mut app.auth.form;
    match msg {
        AuthMessage::GoToRegister if form.view() == AuthView::Login => form.go_to_register(),
        AuthMessage::GoToForgot if form.view() == AuthView::Login => form.go_to_forgot(),
        AuthMessage::BackToLogin if form.view() != AuthView::Login => form.back_to_login(),
        _ => return,
    }
    app.auth.focus = 0;
    app.clear_status();
}

pub fn handle_form(app: &mut App, msg: FormMessage) {
    let state = &mut app.auth;
    match msg {
        FormMessage::NextField => state.focus_next(),
        FormMessage::PrevField => state.focus_prev(),
        FormMessage::Input(c) => {
            if let Some(FormRow::Text(id)) = state.focused_row() {
                state.form.push_char(id, c);
            }
        }
        FormMessage::Backspace => {
            if let Some(FormRow::Text(id)) = state.focused_row() {
                state.form.pop_char(id);
            }
        }
        FormMessage::CyclePrev | FormMessage::CycleNext => {
            if state.focused_row() == Some(FormRow::UserType) {
                state
                    .form
                    .cycle_user_type(matches!(msg, FormMessage::CycleNext));
            }
        }
        FormMessage::Submit => submit(app),
    }
}

/// Nothing fires while the form is invalid or a request is in flight
fn submit(app: &mut App) {
    match app.auth.form.submit() {
        Ok(action) => {
            app.auth.form.begin_submit();
            app.request(ApiRequest::Auth(action));
        }
        Err(e) => tracing::debug!("Auth submit blocked: {e}"),
    }
}

pub fn on_result(app: &mut App, result: CoreResult<AuthOutcome>) {
    match result {
        Ok(AuthOutcome::LoggedIn { username } | AuthOutcome::Registered { username }) => {
            app.auth.form.finish_submit(Ok(()));
            enter_dashboard(app, username);
        }
        Ok(AuthOutcome::ResetRequested { .. }) => {
            app.auth.form.finish_submit(Ok(()));
            app.set_status(t().auth.reset_sent);
        }
        Err(e) => {
            app.auth.form.finish_submit(Err(e.user_message()));
            app.notify(UserAdminService::create_notification(&Err(e)));
        }
    }
}

fn enter_dashboard(app: &mut App, username: String) {
    tracing::info!("Entering dashboard as {username}");
    app.session = std::mem::take(&mut app.session).with_username(username.clone());
    app.screen = Screen::Dashboard;
    app.current_page = Page::Home;
    app.navigation.select_item(Page::Home.nav_id());
    app.focus = if app.shell.visible_sidebar() {
        FocusPanel::Navigation
    } else {
        FocusPanel::Content
    };
    // drop typed credentials
    app.auth.reset();
    app.notify(Notification::success(
        format!("{}, {username}", t().auth.welcome),
        "",
    ));
}
