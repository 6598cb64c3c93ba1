//! Form lines shared by the auth screen and the admin pages
//!
//! Forms are rendered as a list of [`Line`]s: a muted label, the value
//! (cyan with a `▎` cursor when focused), and an optional `⚠` error.

use academia_core::forms::FieldId;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

use crate::i18n::t;
use crate::view::theme::{colors, Styles};

/// Masked values never show more than this many dots
const MAX_MASK: usize = 20;

pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

/// Default label of a text input
pub fn field_label(id: FieldId) -> &'static str {
    let fields = &t().fields;
    match id {
        FieldId::FullName => fields.full_name,
        FieldId::FirstName => fields.first_name,
        FieldId::LastName => fields.last_name,
        FieldId::Username => fields.username,
        FieldId::Email => fields.email,
        FieldId::Password => fields.password,
        FieldId::ConfirmPassword => fields.confirm_password,
        FieldId::UserType => fields.user_type,
    }
}

pub struct TextInput<'a> {
    pub label: &'a str,
    pub value: &'a str,
    pub secret: bool,
    pub focused: bool,
    pub error: Option<&'a str>,
    /// Shown dimmed while the value is empty and unfocused
    pub placeholder: Option<&'a str>,
}

impl TextInput<'_> {
    pub fn push_lines(&self, lines: &mut Vec<Line<'static>>) {
        let c = colors();
        lines.push(Line::from(Span::styled(
            self.label.to_string(),
            Style::default().fg(c.muted),
        )));

        let shown = if self.secret {
            "•".repeat(self.value.chars().count().min(MAX_MASK))
        } else {
            self.value.to_string()
        };

        let (display, style) = if self.focused {
            (format!("  {shown}▎"), Style::default().fg(c.accent))
        } else if self.value.is_empty() {
            (
                format!("  {}", self.placeholder.unwrap_or_default()),
                Style::default().fg(Color::DarkGray),
            )
        } else {
            (format!("  {shown}"), Style::default().fg(c.fg))
        };
        lines.push(Line::styled(display, style));

        if let Some(err) = self.error {
            lines.push(error_line(err));
        }
    }
}

/// `◀ value ▶` selector changed with ←→
pub fn push_selector(lines: &mut Vec<Line<'static>>, label: &str, value: &str, focused: bool) {
    let c = colors();
    lines.push(Line::from(vec![
        Span::styled(label.to_string(), Style::default().fg(c.muted)),
        if focused {
            Span::styled(
                format!(" {}", t().common.cycle_hint),
                Style::default().fg(Color::DarkGray),
            )
        } else {
            Span::raw("")
        },
    ]));

    let style = if focused {
        Style::default().fg(c.accent).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(c.fg)
    };
    let display = format!(
        "  {} {} {}",
        if focused { "◀" } else { " " },
        value,
        if focused { "▶" } else { " " }
    );
    lines.push(Line::styled(display, style));
}

pub fn error_line(message: &str) -> Line<'static> {
    Line::styled(format!("  ⚠ {message}"), Style::default().fg(colors().error))
}

pub fn success_line(message: &str) -> Line<'static> {
    Line::styled(format!("  ✓ {message}"), Style::default().fg(colors().success))
}

/// Submit button; dimmed while the form cannot be sent
pub fn button_line(label: &str, enabled: bool) -> Line<'static> {
    let style = if enabled {
        Styles::selected()
    } else {
        Style::default().fg(Color::DarkGray)
    };
    Line::from(vec![Span::raw("  "), Span::styled(format!("[ {label} ]"), style)])
}

/// `Key desc | Key desc` footer inside a form
pub fn key_hints_line(hints: &[(&str, &str)]) -> Line<'static> {
    let mut spans = vec![Span::raw("  ")];
    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" | ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(key.to_string(), Style::default().fg(Color::Yellow)));
        spans.push(Span::styled(
            format!(" {desc}"),
            Style::default().fg(Color::DarkGray),
        ));
    }
    Line::from(spans)
}

/// Scroll so the focused line stays visible
pub fn scroll_offset(focus_line: usize, height: u16) -> u16 {
    // keep room for the error line under the value
    let visible = usize::from(height).saturating_sub(3);
    u16::try_from(focus_line.saturating_sub(visible)).unwrap_or(u16::MAX)
}
