//! Routes form input to the form on screen

use super::{auth, create_user, users};
use crate::message::FormMessage;
use crate::model::{App, Page, Screen};

pub fn update(app: &mut App, msg: FormMessage) {
    match (app.screen, app.current_page) {
        (Screen::Auth, _) => auth::handle_form(app, msg),
        (Screen::Dashboard, Page::ManageUsers) => users::handle_form(app, msg),
        (Screen::Dashboard, Page::CreateUser) => create_user::handle_form(app, msg),
        (Screen::Dashboard, Page::Home) => {}
    }
}
