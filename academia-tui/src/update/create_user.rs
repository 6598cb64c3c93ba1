//! Admin "create user" updates

use academia_core::{CoreResult, UserAdminService};

use crate::backend::ApiRequest;
use crate::message::FormMessage;
use crate::model::{App, FormRow};

pub fn handle_form(app: &mut App, msg: FormMessage) {
    let state = &mut app.create_user;
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
            let forward = matches!(msg, FormMessage::CycleNext);
            match state.focused_row() {
                Some(FormRow::UserType) => state.form.cycle_user_type(forward),
                Some(FormRow::State) => state.form.cycle_state(forward),
                _ => {}
            }
        }
        FormMessage::Submit => submit(app),
    }
}

fn submit(app: &mut App) {
    let form = &mut app.create_user.form;
    if form.submit_disabled() {
        return;
    }
    match form.build_request() {
        Ok(request) => {
            form.begin_submit();
            let epoch = app.session_epoch;
            app.request(ApiRequest::CreateUser { epoch, request });
        }
        Err(e) => tracing::debug!("Create blocked: {e}"),
    }
}

/// Success clears the form; failure keeps it for another try
pub fn on_created(app: &mut App, result: CoreResult<()>) {
    app.notify(UserAdminService::create_notification(&result));
    app.create_user.form.finish_submit(result.is_ok());
    if result.is_ok() {
        app.create_user.focus = 0;
    }
}
