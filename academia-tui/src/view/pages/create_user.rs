//! Admin "create user" page

use academia_core::forms::FieldId;
use ratatui::{layout::Rect, style::Style, text::Line, widgets::Paragraph, Frame};

use crate::i18n::t;
use crate::model::{App, CreateUserState, FormRow};
use crate::view::components::form::{
    button_line, field_label, key_hints_line, push_selector, scroll_offset, TextInput,
};
use crate::view::theme::colors;

pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let state = &app.create_user;
    let form = &state.form;
    let focused_panel = app.focus.is_content();

    let mut lines = vec![Line::from("")];
    let mut focus_line = 0;

    for (i, row) in CreateUserState::rows().iter().enumerate() {
        let focused = focused_panel && i == state.focus;
        if focused {
            focus_line = lines.len();
        }
        match *row {
            FormRow::Text(id) => TextInput {
                label: field_label(id),
                value: form.value(id),
                secret: id.is_secret(),
                focused,
                error: form.error(id),
                placeholder: None,
            }
            .push_lines(&mut lines),
            FormRow::UserType => push_selector(
                &mut lines,
                field_label(FieldId::UserType),
                form.user_type().label(),
                focused,
            ),
            FormRow::State => push_selector(
                &mut lines,
                texts.fields.state,
                form.state()
                    .map_or(texts.create_user.state_default, |s| s.label()),
                focused,
            ),
            FormRow::Role => {}
        }
        lines.push(Line::from(""));
    }

    let button = if form.is_submitting() {
        texts.create_user.submitting
    } else {
        texts.create_user.submit
    };
    lines.push(button_line(button, !form.submit_disabled()));
    lines.push(Line::from(""));
    lines.push(key_hints_line(&[
        ("Tab", texts.hints.next_field),
        ("←→", texts.hints.cycle),
        ("Enter", texts.hints.submit),
    ]));

    if !focused_panel {
        lines.push(Line::styled(
            format!("  Tab: {}", texts.hints.switch_panel),
            Style::default().fg(colors().muted),
        ));
    }

    let paragraph = Paragraph::new(lines).scroll((scroll_offset(focus_line, area.height), 0));
    frame.render_widget(paragraph, area);
}
