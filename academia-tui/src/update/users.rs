//! "Manage users" updates: list loading and the edit form

use academia_core::types::{Notification, UserRecord};
use academia_core::{CoreError, CoreResult, UserAdminService};

use crate::backend::ApiRequest;
use crate::message::FormMessage;
use crate::model::{App, FormRow};

/// Queue `GET /users` unless one is already running
pub fn reload(app: &mut App) {
    if app.users.loading {
        return;
    }
    app.users.loading = true;
    app.request(ApiRequest::ListUsers);
}

pub fn handle_form(app: &mut App, msg: FormMessage) {
    let Some(edit) = app.users.edit.as_mut() else {
        return;
    };

    match msg {
        FormMessage::NextField => edit.focus_next(),
        FormMessage::PrevField => edit.focus_prev(),
        FormMessage::Input(c) => {
            if let Some(FormRow::Text(id)) = edit.focused_row() {
                edit.form.push_char(id, c);
            }
        }
        FormMessage::Backspace => {
            if let Some(FormRow::Text(id)) = edit.focused_row() {
                edit.form.pop_char(id);
            }
        }
        FormMessage::CyclePrev | FormMessage::CycleNext => {
            let forward = matches!(msg, FormMessage::CycleNext);
            match edit.focused_row() {
                Some(FormRow::State) => edit.form.cycle_state(forward),
                Some(FormRow::Role) => edit.form.cycle_role(forward),
                _ => {}
            }
        }
        FormMessage::Submit => submit(app),
    }
}

fn submit(app: &mut App) {
    let Some(edit) = app.users.edit.as_mut() else {
        return;
    };
    if edit.form.is_submitting() {
        return;
    }

    match edit.form.build_update() {
        Ok(request) => {
            edit.form.begin_submit();
            let epoch = app.session_epoch;
            let session = app.session.clone();
            app.request(ApiRequest::UpdateUser {
                epoch,
                session,
                request,
            });
        }
        // field errors are already on screen
        Err(CoreError::Validation(message)) => tracing::debug!("Edit blocked: {message}"),
        Err(e) => {
            tracing::error!("Cannot build user update: {e}");
            app.notify(UserAdminService::update_notification(&Err(e)));
        }
    }
}

/// Success closes the form and reloads the list; failure keeps every edit.
/// Only the edit of record `id` is touched; another open form keeps its input.
pub fn on_updated(app: &mut App, id: i64, result: CoreResult<()>) {
    app.notify(UserAdminService::update_notification(&result));
    let same_record = app
        .users
        .edit
        .as_ref()
        .is_some_and(|edit| edit.form.id() == Some(id));
    if same_record {
        if let Some(edit) = app.users.edit.as_mut() {
            edit.form.finish_submit();
        }
        if result.is_ok() {
            app.users.close_edit();
        }
    }
    if result.is_ok() {
        reload(app);
    }
}

pub fn on_loaded(app: &mut App, result: CoreResult<Vec<UserRecord>>) {
    match result {
        Ok(users) => app.users.set_users(users),
        Err(e) => {
            app.users.loading = false;
            app.notify(Notification::error("Error cargando usuarios", e.user_message()));
        }
    }
}
