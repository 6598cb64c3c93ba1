//! Bottom status bar: key hints plus the latest notification

use academia_core::forms::AuthView;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::i18n::t;
use crate::model::{App, FocusPanel, FormRow, Page, Screen};
use crate::view::theme::{colors, Styles};

pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let hints = get_hints(app);

    let mut spans = Vec::new();
    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(*key, Styles::hint_key()));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, Styles::hint_desc()));
    }

    if let Some(notification) = &app.notification {
        spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(
            notification.summary(),
            Style::default().fg(colors().notification(notification.level)),
        ));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Styles::statusbar());
    frame.render_widget(paragraph, area);
}

fn get_hints(app: &App) -> Vec<(&'static str, &'static str)> {
    let h = &t().hints;
    let mut hints = Vec::new();

    match app.screen {
        Screen::Auth => {
            hints.push(("Tab", h.next_field));
            if app.auth.focused_row() == Some(FormRow::UserType) {
                hints.push(("←→", h.cycle));
            }
            hints.push(("Enter", h.submit));
            if app.auth.form.view() == AuthView::Login {
                hints.push(("Alt+n", h.register));
                hints.push(("Alt+f", h.forgot));
            } else {
                hints.push(("Esc", h.back));
            }
        }
        Screen::Dashboard if app.shell.user_menu.open => {
            hints.push(("↑↓", h.select));
            hints.push(("Enter", h.open));
            hints.push(("Esc", h.back));
        }
        Screen::Dashboard => {
            match (app.focus, app.current_page) {
                (FocusPanel::Navigation, _) => {
                    hints.push(("↑↓", h.navigate));
                    hints.push(("Enter", h.open));
                    hints.push(("Tab", h.switch_panel));
                }
                (FocusPanel::Content, Page::Home) => {
                    hints.push(("Tab", h.switch_panel));
                }
                (FocusPanel::Content, Page::ManageUsers) if !app.users.is_editing() => {
                    hints.push(("↑↓", h.select));
                    hints.push(("Enter", h.open));
                    hints.push(("Alt+r", h.refresh));
                    hints.push(("Tab", h.switch_panel));
                }
                (FocusPanel::Content, _) => {
                    hints.push(("Tab", h.next_field));
                    hints.push(("←→", h.cycle));
                    hints.push(("Enter", h.submit));
                    hints.push(("Esc", h.back));
                }
            }
            hints.push(("Alt+s", h.sidebar));
            hints.push(("Alt+u", h.menu));
        }
    }

    hints.push(("Alt+q", h.quit));
    hints
}
