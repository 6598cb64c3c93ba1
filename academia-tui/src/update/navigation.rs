//! Sidebar updates

use super::open_page;
use crate::message::NavigationMessage;
use crate::model::{App, NavRow, Page};

pub fn update(app: &mut App, msg: NavigationMessage) {
    match msg {
        NavigationMessage::SelectPrevious => app.navigation.select_previous(),
        NavigationMessage::SelectNext => app.navigation.select_next(),
        NavigationMessage::SelectFirst => app.navigation.select_first(),
        NavigationMessage::SelectLast => app.navigation.select_last(),
        NavigationMessage::Confirm => match app.navigation.current_row() {
            Some(NavRow::Group { id, .. }) => app.navigation.toggle_group(id),
            Some(NavRow::Item { id, .. }) => open_page(app, Page::from_nav_id(id)),
            None => {}
        },
    }
}
