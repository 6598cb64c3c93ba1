//! Home page

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::i18n::{current_language, t};
use crate::model::App;
use crate::view::theme::{colors, Styles};

/// Labels are padded to this display width
const LABEL_WIDTH: usize = 26;

pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors();

    // welcome + info blocks
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(1)])
        .split(area);

    let welcome = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("  {}", texts.home.title),
            Style::default().fg(c.accent).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("  {}", texts.home.subtitle),
            Style::default().fg(c.muted),
        )),
    ];
    frame.render_widget(Paragraph::new(welcome), layout[0]);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(layout[1]);

    let username = app
        .session
        .username
        .as_deref()
        .unwrap_or(texts.status.guest);
    let user_id = app.session.user_id.as_deref().unwrap_or(texts.common.none);
    let api = if app.api_base_url.is_empty() {
        texts.common.no_data
    } else {
        app.api_base_url.as_str()
    };
    let language = current_language();
    let language = format!("{} ({})", language.display_name(), language.code());

    let session = Paragraph::new(vec![
        Line::from(""),
        info_row(texts.home.signed_in_as, username),
        info_row(texts.home.caller_id, user_id),
        info_row(texts.home.api, api),
        info_row(texts.home.language, &language),
    ])
    .block(info_block(texts.home.session));
    frame.render_widget(session, columns[0]);

    let shortcuts: Vec<Line> = std::iter::once(Line::from(""))
        .chain(
            [
                ("Alt+s", texts.hints.sidebar),
                ("Alt+u", texts.hints.menu),
                ("Alt+r", texts.hints.refresh),
                ("Alt+q", texts.hints.quit),
            ]
            .into_iter()
            .map(|(key, desc)| {
                Line::from(vec![
                    Span::styled(format!("  {key:<7}"), Styles::hint_key()),
                    Span::styled(desc, Style::default().fg(c.fg)),
                ])
            }),
        )
        .collect();
    let shortcuts = Paragraph::new(shortcuts).block(info_block(texts.home.shortcuts));
    frame.render_widget(shortcuts, columns[1]);
}

fn info_block(title: &str) -> Block<'_> {
    Block::default()
        .title(format!(" {title} "))
        .borders(Borders::ALL)
        .border_style(Styles::border(false))
}

fn info_row<'a>(label: &'a str, value: &'a str) -> Line<'a> {
    let c = colors();
    let padding = LABEL_WIDTH.saturating_sub(label.width());
    Line::from(vec![
        Span::styled(format!("  {label}{:padding$}", ""), Style::default().fg(c.muted)),
        Span::styled(": ", Style::default().fg(c.muted)),
        Span::styled(value, Style::default().fg(c.highlight)),
    ])
}
