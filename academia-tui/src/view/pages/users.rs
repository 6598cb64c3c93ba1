//! "Manage users": table step and edit step

use academia_core::forms::FieldId;
use academia_core::types::{RoleMap, UserRecord};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Paragraph, Row, Table, TableState},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::i18n::t;
use crate::model::{App, EditState, FormRow};
use crate::view::components::form::{
    button_line, error_line, field_label, key_hints_line, push_selector, scroll_offset,
    TextInput,
};
use crate::view::theme::{colors, Styles};

pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    if let Some(edit) = &app.users.edit {
        render_edit(edit, app.focus.is_content(), frame, area);
    } else if app.users.users.is_empty() {
        render_empty(app, frame, area);
    } else {
        render_table(app, frame, area);
    }
}

fn render_empty(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let message = if app.users.loading {
        texts.common.loading
    } else {
        texts.users.empty
    };
    let content = vec![
        Line::from(""),
        Line::styled(format!("  {message}"), Style::default().fg(Color::Gray)),
        Line::from(""),
        Line::styled(
            format!("  Alt+r: {}", texts.hints.refresh),
            Style::default().fg(Color::DarkGray),
        ),
    ];
    frame.render_widget(Paragraph::new(content), area);
}

/// One row of display cells, in column order
fn cells(user: &UserRecord) -> [String; 7] {
    let none = t().common.none;
    [
        user.id.to_string(),
        user.username.clone(),
        user.email.as_deref().unwrap_or(none).to_string(),
        user.firstname.as_deref().unwrap_or(none).to_string(),
        user.lastname.as_deref().unwrap_or(none).to_string(),
        user.state.label().to_string(),
        RoleMap::label_for(user.role_id),
    ]
}

/// Column widths sized to the widest cell
fn column_widths(header: &[&str; 7], rows: &[[String; 7]]) -> Vec<Constraint> {
    (0..header.len())
        .map(|col| {
            let widest = rows
                .iter()
                .map(|row| row[col].width())
                .chain(std::iter::once(header[col].width()))
                .max()
                .unwrap_or_default();
            Constraint::Length(u16::try_from(widest).unwrap_or(u16::MAX))
        })
        .collect()
}

fn render_table(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors();

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(area);

    let header = [
        texts.users.col_id,
        texts.users.col_username,
        texts.users.col_email,
        texts.users.col_firstname,
        texts.users.col_lastname,
        texts.users.col_state,
        texts.users.col_role,
    ];
    let rows: Vec<[String; 7]> = app.users.users.iter().map(cells).collect();
    let widths = column_widths(&header, &rows);

    let table = Table::new(rows.into_iter().map(Row::new), widths)
        .header(
            Row::new(header)
                .style(Style::default().fg(c.muted).add_modifier(Modifier::BOLD))
                .bottom_margin(1),
        )
        .column_spacing(2)
        .style(Style::default().fg(c.fg))
        .row_highlight_style(Styles::selected())
        .highlight_symbol("▶ ");

    let mut state = TableState::default().with_selected(Some(app.users.selected));
    frame.render_stateful_widget(table, layout[0], &mut state);

    if app.users.loading {
        frame.render_widget(
            Paragraph::new(format!("  {}", texts.common.loading))
                .style(Style::default().fg(c.muted)),
            layout[1],
        );
    }
}

fn render_edit(edit: &EditState, focused_panel: bool, frame: &mut Frame, area: Rect) {
    let texts = t();
    let form = &edit.form;

    let mut lines = vec![Line::from("")];
    let mut focus_line = 0;

    for (i, row) in EditState::rows().iter().enumerate() {
        let focused = focused_panel && i == edit.focus;
        if focused {
            focus_line = lines.len();
        }
        match *row {
            FormRow::Text(id) => {
                let (label, placeholder) = if id == FieldId::Password {
                    (texts.fields.new_password, Some(texts.users.password_hint))
                } else {
                    (field_label(id), None)
                };
                TextInput {
                    label,
                    value: form.value(id),
                    secret: id.is_secret(),
                    focused,
                    error: form.error(id),
                    placeholder,
                }
                .push_lines(&mut lines);
            }
            FormRow::State => {
                push_selector(&mut lines, texts.fields.state, form.state().label(), focused);
            }
            FormRow::Role => {
                let role = RoleMap::label_for(form.role_id());
                push_selector(&mut lines, texts.fields.role, &role, focused);
            }
            FormRow::UserType => {}
        }
        lines.push(Line::from(""));
    }

    if let Some(err) = form.form_error() {
        lines.push(error_line(err));
    }

    let button = if form.is_submitting() {
        texts.users.saving
    } else {
        texts.users.save
    };
    lines.push(button_line(button, form.is_valid() && !form.is_submitting()));
    lines.push(Line::from(""));
    lines.push(key_hints_line(&[
        ("Tab", texts.hints.next_field),
        ("Enter", texts.hints.submit),
        ("Esc", texts.hints.back),
    ]));

    let paragraph = Paragraph::new(lines).scroll((scroll_offset(focus_line, area.height), 0));
    frame.render_widget(paragraph, area);
}
