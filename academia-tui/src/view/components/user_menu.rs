//! User drop-down, anchored under the title bar on the right

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState},
    Frame,
};

use crate::i18n::t;
use crate::model::{App, UserMenuAction};
use crate::view::theme::{colors, Styles};

const MENU_WIDTH: u16 = 24;

pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let menu = &app.shell.user_menu;
    if !menu.open {
        return;
    }

    let texts = t();
    let c = colors();

    let actions = UserMenuAction::all();
    let height = (actions.len() as u16 + 2).min(area.height);
    let width = MENU_WIDTH.min(area.width);
    let popup = Rect::new(area.right().saturating_sub(width), area.y, width, height);

    frame.render_widget(Clear, popup);

    let block = Block::default()
        .title(format!(" {} ", texts.user_menu.title))
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(c.accent));

    let items: Vec<ListItem> = actions
        .iter()
        .enumerate()
        .map(|(i, action)| {
            let is_selected = i == menu.selected;
            let prefix = if is_selected { "▶ " } else { "  " };
            let label = match action {
                UserMenuAction::Profile => texts.user_menu.profile,
                UserMenuAction::Settings => texts.user_menu.settings,
                UserMenuAction::Logout => texts.user_menu.logout,
            };
            let style = if is_selected {
                Styles::selected()
            } else if *action == UserMenuAction::Logout {
                Style::default().fg(c.error)
            } else {
                Style::default().fg(c.fg)
            };
            ListItem::new(Line::from(Span::styled(format!("{prefix}{label}"), style)))
        })
        .collect();

    let list = List::new(items).block(block);

    let mut state = ListState::default();
    state.select(Some(menu.selected));

    frame.render_stateful_widget(list, popup, &mut state);
}
