//! Main layout

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::i18n::t;
use crate::model::{App, Page, Screen};

use super::components;
use super::pages;
use super::theme::{colors, Styles};

/// Sidebar width of the mobile overlay
const MOBILE_MENU_WIDTH: u16 = 30;

pub fn render(app: &App, frame: &mut Frame) {
    let size = frame.area();

    // title bar + body + status bar
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(size);

    render_title_bar(app, frame, main_layout[0]);

    match app.screen {
        Screen::Auth => pages::auth::render(app, frame, main_layout[1]),
        Screen::Dashboard => render_dashboard(app, frame, main_layout[1]),
    }

    components::statusbar::render(app, frame, main_layout[2]);
}

fn render_title_bar(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let style = Style::default().bg(c.highlight).fg(c.selected_fg);

    let title = Paragraph::new(format!(" {}", t().common.app_name)).style(style);
    frame.render_widget(title, area);

    if let (Screen::Dashboard, Some(username)) = (app.screen, app.session.username.as_deref()) {
        let user = Paragraph::new(Line::from(vec![
            Span::styled(username.to_string(), style.add_modifier(Modifier::BOLD)),
            Span::styled(" ▾ ", style),
        ]))
        .alignment(Alignment::Right);
        frame.render_widget(user, area);
    }
}

/// Sidebar + page, with the overlays on top
fn render_dashboard(app: &App, frame: &mut Frame, area: Rect) {
    if app.shell.is_mobile() {
        render_page_content(app, frame, area);
        if app.shell.mobile_menu_open {
            let overlay = Rect::new(
                area.x,
                area.y,
                MOBILE_MENU_WIDTH.min(area.width),
                area.height,
            );
            frame.render_widget(Clear, overlay);
            components::navigation::render(app, frame, overlay);
        }
    } else if app.shell.sidebar_open {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(22), Constraint::Percentage(78)])
            .split(area);
        components::navigation::render(app, frame, columns[0]);
        render_page_content(app, frame, columns[1]);
    } else {
        render_page_content(app, frame, area);
    }

    components::user_menu::render(app, frame, area);
}

fn render_page_content(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();

    let page_title = match app.current_page {
        Page::Home => texts.nav.home,
        Page::ManageUsers if app.users.is_editing() => texts.users.edit_title,
        Page::ManageUsers => texts.nav.manage_user,
        Page::CreateUser => texts.create_user.title,
    };

    let block = Block::default()
        .title(format!(" {page_title} "))
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(Styles::border(app.focus.is_content()));

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    match app.current_page {
        Page::Home => pages::home::render(app, frame, inner_area),
        Page::ManageUsers => pages::users::render(app, frame, inner_area),
        Page::CreateUser => pages::create_user::render(app, frame, inner_area),
    }
}
