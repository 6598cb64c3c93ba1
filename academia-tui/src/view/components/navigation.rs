//! Sidebar

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

use crate::i18n::t;
use crate::model::{App, NavGroupId, NavItemId, NavRow, Page};
use crate::view::theme::{colors, Styles};

pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors();

    let block = Block::default()
        .title(format!(" {} ", texts.nav.title))
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(Styles::border(app.focus.is_navigation()));

    let items: Vec<ListItem> = app
        .navigation
        .rows()
        .into_iter()
        .enumerate()
        .map(|(i, row)| {
            let is_selected = i == app.navigation.selected;
            let prefix = if is_selected { "▶ " } else { "  " };

            let (content, is_active) = match row {
                NavRow::Item { id, icon, nested } => {
                    let label = match id {
                        NavItemId::Home => texts.nav.home,
                        NavItemId::ManageUsers => texts.nav.manage_user,
                        NavItemId::CreateUser => texts.nav.create_user,
                    };
                    let indent = if nested { "  " } else { "" };
                    (
                        format!("{prefix}{indent}{icon} {label}"),
                        Page::from_nav_id(id) == app.current_page,
                    )
                }
                NavRow::Group { id, icon, expanded } => {
                    let label = match id {
                        NavGroupId::AdminUsers => texts.nav.admin_users,
                    };
                    let arrow = if expanded { "▾" } else { "▸" };
                    (format!("{prefix}{icon} {label} {arrow}"), false)
                }
            };

            let style = if is_selected {
                Styles::selected()
            } else if is_active {
                Style::default().fg(c.accent).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(c.fg)
            };

            ListItem::new(Line::from(Span::styled(content, style)))
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Styles::selected());

    let mut state = ListState::default();
    state.select(Some(app.navigation.selected));

    frame.render_stateful_widget(list, area, &mut state);
}
