//! List page updates

use crate::message::ContentMessage;
use crate::model::{App, Page};

pub fn update(app: &mut App, msg: ContentMessage) {
    if app.current_page != Page::ManageUsers || app.users.is_editing() {
        return;
    }

    match msg {
        ContentMessage::SelectPrevious => app.users.select_previous(),
        ContentMessage::SelectNext => app.users.select_next(),
        ContentMessage::SelectFirst => app.users.select_first(),
        ContentMessage::SelectLast => app.users.select_last(),
        ContentMessage::Confirm => {
            if app.users.open_selected() {
                app.clear_status();
            }
        }
    }
}
