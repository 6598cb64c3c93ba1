//! Update layer
//!
//! `update(app, msg)` is the only place the model changes. Network work is
//! never started here: handlers queue an `ApiRequest` on the app and the
//! main loop hands it to the backend, whose answer comes back later as
//! `AppMessage::Api`.

mod api;
mod auth;
mod content;
mod create_user;
mod form;
mod navigation;
mod shell;
mod users;

use crate::i18n::t;
use crate::message::AppMessage;
use crate::model::{App, FocusPanel, Page, Screen};

pub fn update(app: &mut App, msg: AppMessage) {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
        }

        AppMessage::ToggleFocus => {
            app.focus = if app.shell.visible_sidebar() {
                app.focus.toggle()
            } else {
                FocusPanel::Content
            };
        }

        AppMessage::Navigation(nav_msg) => navigation::update(app, nav_msg),
        AppMessage::Content(content_msg) => content::update(app, content_msg),
        AppMessage::Form(form_msg) => form::update(app, form_msg),
        AppMessage::Auth(auth_msg) => auth::update(app, auth_msg),
        AppMessage::Shell(shell_msg) => shell::update(app, shell_msg),
        AppMessage::Api(event) => api::update(app, event),
        AppMessage::Resize(width) => shell::resize(app, width),

        AppMessage::GoBack => go_back(app),

        AppMessage::Refresh => {
            if app.screen == Screen::Dashboard && app.current_page == Page::ManageUsers {
                app.set_status(t().status.refreshing);
                users::reload(app);
            }
        }

        AppMessage::Noop => {}
    }
}

/// Close the edit form, else hand focus back to the sidebar
fn go_back(app: &mut App) {
    if app.screen != Screen::Dashboard {
        return;
    }
    if app.current_page == Page::ManageUsers && app.users.is_editing() {
        app.users.close_edit();
        app.clear_status();
    } else if app.focus.is_content() && app.shell.visible_sidebar() {
        app.focus = FocusPanel::Navigation;
    } else if app.shell.is_mobile() && app.shell.mobile_menu_open {
        app.shell.close_mobile_menu();
        app.focus = FocusPanel::Content;
    }
}

/// Switch tabs; opening the users page reloads the list
fn open_page(app: &mut App, page: Page) {
    app.current_page = page;
    app.clear_status();
    app.focus = FocusPanel::Content;
    if app.shell.is_mobile() {
        app.shell.close_mobile_menu();
    }
    if page == Page::ManageUsers {
        app.users.close_edit();
        users::reload(app);
    }
}

#[cfg(test)]
mod tests {
    use academia_core::forms::{AuthView, FieldId, SubmitAction};
    use academia_core::types::{NotificationLevel, SessionContext, UserRecord, UserState};
    use academia_core::{AuthOutcome, CoreError, CoreResult};

    use super::*;
    use crate::backend::{ApiEvent, ApiRequest};
    use crate::message::{
        AuthMessage, ContentMessage, FormMessage, NavigationMessage, ShellMessage,
    };
    use crate::model::{NavGroupId, UserMenuAction};

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            update(app, AppMessage::Form(FormMessage::Input(c)));
        }
    }

    fn record() -> UserRecord {
        UserRecord {
            id: 12,
            username: "alonso".to_string(),
            email: Some("alonso@uni.edu".to_string()),
            firstname: Some("Alonso".to_string()),
            lastname: None,
            state: UserState::Active,
            role_id: 2,
        }
    }

    fn signed_in() -> App {
        let mut app = App::new(SessionContext::new(Some("9".to_string())).with_username("admin"));
        app.screen = Screen::Dashboard;
        app
    }

    fn updated(id: i64, result: CoreResult<()>) -> AppMessage {
        AppMessage::Api(ApiEvent::UserUpdated {
            epoch: 0,
            id,
            result,
        })
    }

    fn created(epoch: u64, result: CoreResult<()>) -> AppMessage {
        AppMessage::Api(ApiEvent::UserCreated { epoch, result })
    }

    fn notification_title(app: &App) -> &str {
        app.notification.as_ref().map_or("", |n| n.title.as_str())
    }

    // ===== auth screen =====

    #[test]
    fn login_submits_and_enters_dashboard() {
        let mut app = App::default();
        type_text(&mut app, "alonso");
        update(&mut app, AppMessage::Form(FormMessage::NextField));
        type_text(&mut app, "1234");
        update(&mut app, AppMessage::Form(FormMessage::Submit));

        let requests = app.take_requests();
        assert_eq!(requests.len(), 1);
        assert!(matches!(
            &requests[0],
            ApiRequest::Auth(SubmitAction::Login { identifier, .. }) if identifier == "alonso"
        ));
        assert!(app.auth.form.is_submitting());

        let outcome = AuthOutcome::LoggedIn {
            username: "alonso".to_string(),
        };
        update(&mut app, AppMessage::Api(ApiEvent::Auth(Ok(outcome))));
        assert_eq!(app.screen, Screen::Dashboard);
        assert_eq!(app.session.username.as_deref(), Some("alonso"));
        // credentials are not kept around
        assert_eq!(app.auth.form.value(FieldId::Password), "");
    }

    #[test]
    fn invalid_login_fires_nothing() {
        let mut app = App::default();
        type_text(&mut app, "al");
        update(&mut app, AppMessage::Form(FormMessage::Submit));
        assert!(app.take_requests().is_empty());
        assert!(!app.auth.form.is_submitting());
    }

    #[test]
    fn view_switches_follow_the_links() {
        let mut app = App::default();
        update(&mut app, AppMessage::Auth(AuthMessage::GoToRegister));
        assert_eq!(app.auth.form.view(), AuthView::Register);
        assert_eq!(app.auth.rows().len(), 5);

        // no forgot link on the register view
        update(&mut app, AppMessage::Auth(AuthMessage::GoToForgot));
        assert_eq!(app.auth.form.view(), AuthView::Register);

        update(&mut app, AppMessage::Auth(AuthMessage::BackToLogin));
        update(&mut app, AppMessage::Auth(AuthMessage::GoToForgot));
        assert_eq!(app.auth.form.view(), AuthView::Forgot);
        assert_eq!(app.auth.focus, 0);
    }

    #[test]
    fn register_cycles_user_type_and_posts() {
        let mut app = App::default();
        update(&mut app, AppMessage::Auth(AuthMessage::GoToRegister));
        type_text(&mut app, "Ana López");
        update(&mut app, AppMessage::Form(FormMessage::NextField));
        type_text(&mut app, "alopez");
        update(&mut app, AppMessage::Form(FormMessage::NextField));
        type_text(&mut app, "1234");
        update(&mut app, AppMessage::Form(FormMessage::NextField));
        type_text(&mut app, "1234");
        update(&mut app, AppMessage::Form(FormMessage::NextField));
        assert!(!app.auth.form.is_valid());

        // empty → estudiante → admin
        update(&mut app, AppMessage::Form(FormMessage::CycleNext));
        update(&mut app, AppMessage::Form(FormMessage::CycleNext));
        assert_eq!(app.auth.form.value(FieldId::UserType), "admin");
        update(&mut app, AppMessage::Form(FormMessage::Submit));

        let requests = app.take_requests();
        let Some(ApiRequest::Auth(SubmitAction::Register(request))) = requests.first() else {
            panic!("expected a register request, got {requests:?}");
        };
        assert_eq!(request.role_id, 2);
        assert_eq!(request.firstname.as_deref(), Some("Ana"));
        assert_eq!(request.lastname.as_deref(), Some("López"));
    }

    #[test]
    fn failed_register_keeps_the_form() {
        let mut app = App::default();
        update(&mut app, AppMessage::Auth(AuthMessage::GoToRegister));
        app.auth.form.set(FieldId::Username, "alopez");
        app.auth.form.begin_submit();

        let error = CoreError::Api {
            status: 409,
            message: "El usuario ya existe".to_string(),
        };
        update(&mut app, AppMessage::Api(ApiEvent::Auth(Err(error))));
        assert_eq!(app.screen, Screen::Auth);
        assert_eq!(app.auth.form.submit_error(), Some("El usuario ya existe"));
        assert_eq!(app.auth.form.value(FieldId::Username), "alopez");
        assert_eq!(
            app.notification.as_ref().map(|n| n.level),
            Some(NotificationLevel::Error)
        );
    }

    #[test]
    fn password_reset_only_notifies() {
        let mut app = App::default();
        update(&mut app, AppMessage::Auth(AuthMessage::GoToForgot));
        type_text(&mut app, "alonso");
        update(&mut app, AppMessage::Form(FormMessage::Submit));
        assert!(matches!(
            app.take_requests().as_slice(),
            [ApiRequest::Auth(SubmitAction::RequestReset { .. })]
        ));

        let outcome = AuthOutcome::ResetRequested {
            identifier: "alonso".to_string(),
        };
        update(&mut app, AppMessage::Api(ApiEvent::Auth(Ok(outcome))));
        assert_eq!(app.screen, Screen::Auth);
        assert!(app.auth.form.succeeded());
        assert_eq!(
            app.notification.as_ref().map(|n| n.level),
            Some(NotificationLevel::Info)
        );
    }

    // ===== shell =====

    #[test]
    fn shell_never_shows_both_menus() {
        let mut app = signed_in();
        update(&mut app, AppMessage::Resize(80));
        assert!(!app.shell.visible_sidebar());
        assert_eq!(app.focus, FocusPanel::Content);

        update(&mut app, AppMessage::Shell(ShellMessage::ToggleSidebar));
        assert!(app.shell.mobile_menu_open);
        assert_eq!(app.focus, FocusPanel::Navigation);

        update(&mut app, AppMessage::Resize(120));
        assert!(!app.shell.mobile_menu_open);
        assert!(app.shell.sidebar_open);

        update(&mut app, AppMessage::Shell(ShellMessage::ToggleSidebar));
        assert!(!app.shell.visible_sidebar());
        assert_eq!(app.focus, FocusPanel::Content);
        update(&mut app, AppMessage::ToggleFocus);
        assert_eq!(app.focus, FocusPanel::Content);
    }

    #[test]
    fn sidebar_group_expands_and_opens_pages() {
        let mut app = signed_in();
        update(&mut app, AppMessage::Navigation(NavigationMessage::SelectNext));
        update(&mut app, AppMessage::Navigation(NavigationMessage::Confirm));
        assert!(app.navigation.is_expanded(NavGroupId::AdminUsers));

        update(&mut app, AppMessage::Navigation(NavigationMessage::SelectNext));
        update(&mut app, AppMessage::Navigation(NavigationMessage::Confirm));
        assert_eq!(app.current_page, Page::ManageUsers);
        assert_eq!(app.focus, FocusPanel::Content);
        assert!(app.users.loading);
        assert!(matches!(
            app.take_requests().as_slice(),
            [ApiRequest::ListUsers]
        ));
    }

    #[test]
    fn opening_a_page_on_mobile_closes_the_menu() {
        let mut app = signed_in();
        update(&mut app, AppMessage::Resize(70));
        update(&mut app, AppMessage::Shell(ShellMessage::ToggleSidebar));
        update(&mut app, AppMessage::Navigation(NavigationMessage::Confirm));
        assert_eq!(app.current_page, Page::Home);
        assert!(!app.shell.mobile_menu_open);
    }

    #[test]
    fn user_menu_actions_close_the_menu() {
        let mut app = signed_in();
        update(&mut app, AppMessage::Shell(ShellMessage::OpenUserMenu));
        assert!(app.shell.user_menu.open);
        update(&mut app, AppMessage::Shell(ShellMessage::UserMenuConfirm));
        assert!(!app.shell.user_menu.open);
        assert!(notification_title(&app).contains("admin"));

        update(&mut app, AppMessage::Shell(ShellMessage::OpenUserMenu));
        update(&mut app, AppMessage::Shell(ShellMessage::CloseUserMenu));
        assert!(!app.shell.user_menu.open);
    }

    #[test]
    fn logout_clears_session_and_returns_to_auth() {
        let mut app = signed_in();
        app.users.set_users(vec![record()]);
        update(&mut app, AppMessage::Shell(ShellMessage::OpenUserMenu));
        update(&mut app, AppMessage::Shell(ShellMessage::UserMenuNext));
        update(&mut app, AppMessage::Shell(ShellMessage::UserMenuNext));
        assert_eq!(
            app.shell.user_menu.current_action(),
            Some(UserMenuAction::Logout)
        );
        update(&mut app, AppMessage::Shell(ShellMessage::UserMenuConfirm));

        assert_eq!(app.screen, Screen::Auth);
        assert!(!app.session.is_authenticated());
        assert_eq!(app.session.user_id.as_deref(), Some("9"));
        assert!(app.users.users.is_empty());
        assert_eq!(app.auth.form.view(), AuthView::Login);
    }

    // ===== admin edit =====

    fn editing() -> App {
        let mut app = signed_in();
        app.current_page = Page::ManageUsers;
        app.focus = FocusPanel::Content;
        app.users.set_users(vec![record()]);
        update(&mut app, AppMessage::Content(ContentMessage::Confirm));
        assert!(app.users.is_editing());
        app
    }

    #[test]
    fn edit_submit_sends_scoped_update_with_caller_id() {
        let mut app = editing();
        type_text(&mut app, "x");
        update(&mut app, AppMessage::Form(FormMessage::Submit));

        let requests = app.take_requests();
        let Some(ApiRequest::UpdateUser { session, request, .. }) = requests.first() else {
            panic!("expected an update request, got {requests:?}");
        };
        assert_eq!(session.user_id.as_deref(), Some("9"));
        assert_eq!(request.id, 12);
        assert_eq!(request.username.as_deref(), Some("alonsox"));
        assert_eq!(request.password, None);
        assert_eq!(request.roles, vec!["administrador".to_string()]);
    }

    #[test]
    fn edit_failure_keeps_form_and_edits() {
        let mut app = editing();
        type_text(&mut app, "x");
        update(&mut app, AppMessage::Form(FormMessage::Submit));
        app.take_requests();

        let error = CoreError::Api {
            status: 500,
            message: "db down".to_string(),
        };
        update(&mut app, updated(12, Err(error)));

        let edit = app.users.edit.as_ref().unwrap();
        assert_eq!(edit.form.value(FieldId::Username), "alonsox");
        assert!(!edit.form.is_submitting());
        assert_eq!(notification_title(&app), "Error al actualizar");
        assert!(app.take_requests().is_empty());
    }

    #[test]
    fn edit_success_returns_to_list_and_reloads() {
        let mut app = editing();
        update(&mut app, AppMessage::Form(FormMessage::Submit));
        app.take_requests();

        update(&mut app, updated(12, Ok(())));
        assert!(!app.users.is_editing());
        assert_eq!(notification_title(&app), "Usuario actualizado");
        assert!(matches!(
            app.take_requests().as_slice(),
            [ApiRequest::ListUsers]
        ));

        let mut updated = record();
        updated.username = "alonso2".to_string();
        update(
            &mut app,
            AppMessage::Api(ApiEvent::UsersLoaded(Ok(vec![updated]))),
        );
        assert!(!app.users.loading);
        assert_eq!(app.users.users[0].username, "alonso2");
    }

    fn editing_second_user_after_leaving_first() -> App {
        let mut app = editing();
        update(&mut app, AppMessage::Form(FormMessage::Submit));
        app.take_requests();
        update(&mut app, AppMessage::GoBack);

        let mut other = record();
        other.id = 13;
        other.username = "luis".to_string();
        app.users.set_users(vec![record(), other]);
        update(&mut app, AppMessage::Content(ContentMessage::SelectLast));
        update(&mut app, AppMessage::Content(ContentMessage::Confirm));
        type_text(&mut app, "xyz");
        app
    }

    #[test]
    fn late_update_success_keeps_another_users_edits() {
        let mut app = editing_second_user_after_leaving_first();
        update(&mut app, updated(12, Ok(())));

        let edit = app.users.edit.as_ref().unwrap();
        assert_eq!(edit.form.id(), Some(13));
        assert_eq!(edit.form.value(FieldId::Username), "luisxyz");
        assert!(matches!(
            app.take_requests().as_slice(),
            [ApiRequest::ListUsers]
        ));
    }

    #[test]
    fn late_update_failure_leaves_another_form_alone() {
        let mut app = editing_second_user_after_leaving_first();
        update(&mut app, AppMessage::Form(FormMessage::Submit));
        app.take_requests();

        let error = CoreError::Api {
            status: 500,
            message: "db down".to_string(),
        };
        update(&mut app, updated(12, Err(error)));

        let edit = app.users.edit.as_ref().unwrap();
        assert_eq!(edit.form.id(), Some(13));
        assert_eq!(edit.form.value(FieldId::Username), "luisxyz");
        assert!(edit.form.is_submitting());
        assert!(app.take_requests().is_empty());
    }

    #[test]
    fn edit_cycles_state_and_role() {
        let mut app = editing();
        for _ in 0..5 {
            update(&mut app, AppMessage::Form(FormMessage::NextField));
        }
        update(&mut app, AppMessage::Form(FormMessage::CyclePrev));
        update(&mut app, AppMessage::Form(FormMessage::NextField));
        update(&mut app, AppMessage::Form(FormMessage::CycleNext));

        let form = &app.users.edit.as_ref().unwrap().form;
        assert_eq!(form.state(), UserState::Suspended);
        assert_eq!(form.role_id(), 3);
    }

    #[test]
    fn esc_leaves_the_edit_form() {
        let mut app = editing();
        update(&mut app, AppMessage::GoBack);
        assert!(!app.users.is_editing());
        update(&mut app, AppMessage::GoBack);
        assert_eq!(app.focus, FocusPanel::Navigation);
    }

    #[test]
    fn double_submit_is_ignored() {
        let mut app = editing();
        update(&mut app, AppMessage::Form(FormMessage::Submit));
        update(&mut app, AppMessage::Form(FormMessage::Submit));
        assert_eq!(app.take_requests().len(), 1);
    }

    // ===== admin create =====

    #[test]
    fn create_resets_on_success_and_keeps_on_failure() {
        let mut app = signed_in();
        app.current_page = Page::CreateUser;
        app.focus = FocusPanel::Content;
        for value in ["Ana", "López", "alopez", "ana@uni.edu", "1234", "1234"] {
            type_text(&mut app, value);
            update(&mut app, AppMessage::Form(FormMessage::NextField));
        }
        update(&mut app, AppMessage::Form(FormMessage::CycleNext));
        update(&mut app, AppMessage::Form(FormMessage::Submit));

        let requests = app.take_requests();
        let Some(ApiRequest::CreateUser { request, .. }) = requests.first() else {
            panic!("expected a create request, got {requests:?}");
        };
        assert_eq!(request.role_id, 2);
        assert_eq!(request.email.as_deref(), Some("ana@uni.edu"));

        let error = CoreError::Api {
            status: 400,
            message: "username must be unique".to_string(),
        };
        update(&mut app, created(0, Err(error)));
        assert_eq!(app.create_user.form.value(FieldId::Username), "alopez");
        assert_eq!(
            app.notification.as_ref().and_then(|n| n.description.as_deref()),
            Some("username must be unique")
        );

        update(&mut app, AppMessage::Form(FormMessage::Submit));
        update(&mut app, created(0, Ok(())));
        assert_eq!(app.create_user.form.value(FieldId::Username), "");
        assert_eq!(app.create_user.focus, 0);
        assert_eq!(notification_title(&app), "Usuario creado correctamente");
    }

    #[test]
    fn create_result_from_earlier_session_is_dropped() {
        let mut app = signed_in();
        app.current_page = Page::CreateUser;
        app.focus = FocusPanel::Content;
        update(&mut app, AppMessage::Shell(ShellMessage::OpenUserMenu));
        update(&mut app, AppMessage::Shell(ShellMessage::UserMenuNext));
        update(&mut app, AppMessage::Shell(ShellMessage::UserMenuNext));
        update(&mut app, AppMessage::Shell(ShellMessage::UserMenuConfirm));
        assert_eq!(app.session_epoch, 1);

        app.screen = Screen::Dashboard;
        app.current_page = Page::CreateUser;
        app.focus = FocusPanel::Content;
        type_text(&mut app, "Ana");

        update(&mut app, created(0, Ok(())));
        assert_eq!(app.create_user.form.value(FieldId::FirstName), "Ana");
        assert_ne!(notification_title(&app), "Usuario creado correctamente");

        update(&mut app, created(1, Ok(())));
        assert_eq!(app.create_user.form.value(FieldId::FirstName), "");
    }

    #[test]
    fn results_after_logout_are_dropped() {
        let mut app = App::default();
        update(&mut app, AppMessage::Api(ApiEvent::UsersLoaded(Ok(vec![record()]))));
        assert!(app.users.users.is_empty());
    }
}
