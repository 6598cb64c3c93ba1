//! Login / register / forgot-password screen

use academia_core::forms::{AuthView, FieldId};
use academia_core::types::Role;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::i18n::t;
use crate::model::{App, FormRow};
use crate::view::components::form::{
    button_line, centered_rect, error_line, field_label, push_selector, scroll_offset,
    success_line, TextInput,
};
use crate::view::theme::{colors, Styles};

const CARD_WIDTH: u16 = 60;

pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors();
    let state = &app.auth;
    let form = &state.form;

    let (title, subtitle, button) = match form.view() {
        AuthView::Login => (
            texts.auth.login_title,
            texts.auth.login_subtitle,
            texts.auth.login_button,
        ),
        AuthView::Register => (
            texts.auth.register_title,
            texts.auth.register_subtitle,
            texts.auth.register_button,
        ),
        AuthView::Forgot => (
            texts.auth.forgot_title,
            texts.auth.forgot_subtitle,
            texts.auth.forgot_button,
        ),
    };

    let mut lines = vec![
        Line::styled(format!("  {subtitle}"), Style::default().fg(c.muted)),
        Line::from(""),
    ];
    let mut focus_line = 0;

    for (i, row) in state.rows().into_iter().enumerate() {
        let focused = i == state.focus;
        if focused {
            focus_line = lines.len();
        }
        match row {
            FormRow::Text(id) => {
                let label = match (id, form.view()) {
                    (FieldId::Username, AuthView::Login | AuthView::Forgot) => {
                        texts.fields.identifier
                    }
                    _ => field_label(id),
                };
                TextInput {
                    label,
                    value: form.value(id),
                    secret: id.is_secret(),
                    focused,
                    error: form.error(id),
                    placeholder: None,
                }
                .push_lines(&mut lines);
            }
            FormRow::UserType => {
                let value = Role::from_key(form.value(FieldId::UserType))
                    .map_or(texts.auth.choose_user_type, Role::label);
                push_selector(&mut lines, texts.fields.user_type, value, focused);
            }
            FormRow::State | FormRow::Role => {}
        }
        lines.push(Line::from(""));
    }

    if let Some(err) = form.submit_error() {
        lines.push(error_line(err));
    } else if form.succeeded() && form.view() == AuthView::Forgot {
        lines.push(success_line(texts.auth.reset_sent));
    }

    let button = if form.is_submitting() {
        texts.auth.submitting
    } else {
        button
    };
    lines.push(button_line(button, !form.submit_disabled()));
    lines.push(Line::from(""));

    let link_style = Style::default().fg(c.accent).add_modifier(Modifier::UNDERLINED);
    if form.view() == AuthView::Login {
        lines.push(Line::from(vec![
            Span::styled("  Alt+n ", Styles::hint_key()),
            Span::styled(texts.auth.go_register, link_style),
        ]));
        lines.push(Line::from(vec![
            Span::styled("  Alt+f ", Styles::hint_key()),
            Span::styled(texts.auth.go_forgot, link_style),
        ]));
    } else {
        lines.push(Line::from(vec![
            Span::styled("  Esc ", Styles::hint_key()),
            Span::styled(texts.auth.back_to_login, link_style),
        ]));
    }

    let height = u16::try_from(lines.len() + 2).unwrap_or(u16::MAX);
    let card = centered_rect(CARD_WIDTH, height, area);
    frame.render_widget(Clear, card);

    let block = Block::default()
        .title(format!(" {title} "))
        .title_alignment(Alignment::Center)
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(Styles::border(true));
    let inner = block.inner(card);
    frame.render_widget(block, card);

    let paragraph = Paragraph::new(lines).scroll((scroll_offset(focus_line, inner.height), 0));
    frame.render_widget(paragraph, inner);
}
