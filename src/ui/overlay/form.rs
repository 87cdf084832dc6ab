use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line as RatatuiLine, Span},
    widgets::{Block, Borders, Clear, Paragraph, Tabs},
};
use unicode_width::UnicodeWidthStr;

use crate::app::{FieldKind, FormMode, FormState, FormTab};

use super::super::layout::centered_rect;
use super::super::theme;

/// Field rows of the active tab plus where the text cursor belongs, as
/// (row, column) within those rows.
pub struct FormView {
    pub lines: Vec<RatatuiLine<'static>>,
    pub cursor: Option<(usize, usize)>,
}

pub fn build_form_lines(state: &FormState, width: usize) -> FormView {
    let form = &state.form;
    let focused = form.focused_field();
    let value_width = width.saturating_sub(theme::FORM_LABEL_WIDTH + 2).max(1);

    let mut lines = Vec::new();
    let mut cursor = None;

    for (field, buffer) in form.fields_in(form.active_tab()) {
        let is_focused = field == focused;
        let marker = if field.is_required() {
            theme::GLYPH_REQUIRED
        } else {
            " "
        };
        let label = format!("{}{marker}", field.label());
        let label_pad = theme::FORM_LABEL_WIDTH.saturating_sub(label.width());
        let label_style = if is_focused {
            Style::default()
                .fg(theme::FORM_BORDER)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme::TEXT_LABEL)
        };

        let value = match field.kind() {
            FieldKind::Choice(_) => {
                let shown = if buffer.is_blank() {
                    "—"
                } else {
                    buffer.content()
                };
                if is_focused {
                    format!("‹ {shown} ›")
                } else {
                    format!("  {shown}")
                }
            }
            _ => {
                let (shown, col) = buffer.visible_window(value_width);
                if is_focused {
                    cursor = Some((lines.len(), theme::FORM_LABEL_WIDTH + 2 + col));
                }
                shown
            }
        };

        let value_style = if is_focused {
            Style::default().add_modifier(Modifier::UNDERLINED)
        } else {
            Style::default()
        };

        lines.push(RatatuiLine::from(vec![
            Span::styled(label, label_style),
            Span::raw(" ".repeat(label_pad + 2)),
            Span::styled(value, value_style),
        ]));
    }

    lines.push(RatatuiLine::from(""));
    if form.mode() == FormMode::Create {
        lines.push(RatatuiLine::from(vec![
            Span::styled("Completeness: ", Style::default().fg(theme::TEXT_LABEL)),
            Span::raw(format!("{}%", form.completeness_score())),
        ]));
    }
    lines.push(RatatuiLine::from(Span::styled(
        format!("{} required", theme::GLYPH_REQUIRED),
        Style::default().fg(theme::TEXT_MUTED),
    )));
    if let Some(error) = &state.error {
        lines.push(RatatuiLine::from(Span::styled(
            error.clone(),
            Style::default().fg(theme::STATUS_ERROR),
        )));
    }

    FormView { lines, cursor }
}

pub fn render_form_overlay(f: &mut Frame<'_>, state: &FormState, area: Rect) {
    let popup_area = centered_rect(80, 80, area);
    f.render_widget(Clear, popup_area);

    let title = match state.form.mode() {
        FormMode::Create => theme::TITLE_NEW_PROJECT.to_string(),
        FormMode::Edit(id) => format!("{}{id} ", theme::TITLE_EDIT_PROJECT),
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::FORM_BORDER));
    let inner = block.inner(popup_area);
    f.render_widget(block, popup_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(1),
        ])
        .split(inner);

    let tabs = Tabs::new(FormTab::ALL.iter().map(|t| t.title()))
        .select(state.form.active_tab().index())
        .style(Style::default().fg(theme::TEXT_LABEL))
        .highlight_style(
            Style::default()
                .fg(theme::TAB_ACTIVE)
                .add_modifier(Modifier::BOLD),
        );
    f.render_widget(tabs, chunks[0]);

    let body = chunks[2];
    let view = build_form_lines(state, body.width as usize);
    if let Some((row, col)) = view.cursor {
        if row < body.height as usize && col < body.width as usize {
            f.set_cursor_position((body.x + col as u16, body.y + row as u16));
        }
    }
    f.render_widget(Paragraph::new(view.lines), body);
}
