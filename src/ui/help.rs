use std::sync::LazyLock;

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line as RatatuiLine, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::dispatch::format_key_for_display;
use crate::registry::{KeyAction, KeyContext, key_actions_for_context};

use super::layout::centered_rect;
use super::theme;

const KEY_WIDTH: usize = 16;
const GUTTER_WIDTH: usize = 2;

static HELP_LINES: LazyLock<Vec<RatatuiLine<'static>>> = LazyLock::new(build_help_lines);

pub fn build_help_lines() -> Vec<RatatuiLine<'static>> {
    let header_style = Style::default().fg(Color::Cyan);
    let key_style = Style::default().fg(Color::Yellow);
    let desc_style = Style::default().fg(Color::White);
    let header_indent = " ".repeat(KEY_WIDTH + GUTTER_WIDTH);

    let mut lines = Vec::new();
    for context in KeyContext::ALL {
        lines.push(section_header(context.title(), &header_indent, header_style));
        for action in key_actions_for_context(*context) {
            lines.push(help_line_from_action(action, key_style, desc_style));
        }
        lines.push(RatatuiLine::from(""));
    }

    lines.push(section_header("[Text Editing]", &header_indent, header_style));
    for (keys, description) in [
        ("←/→", "Move cursor"),
        ("Ctrl+a/Ctrl+e", "Start / end of line"),
        ("Ctrl+w", "Delete word"),
        ("Ctrl+u/Ctrl+k", "Delete to start / end"),
        ("←/→ on choices", "Cycle options"),
    ] {
        lines.push(help_line(keys, description, key_style, desc_style));
    }

    lines
}

fn section_header(title: &str, indent: &str, style: Style) -> RatatuiLine<'static> {
    RatatuiLine::from(Span::styled(format!("{indent}{title}"), style))
}

fn help_line_from_action(
    action: &KeyAction,
    key_style: Style,
    desc_style: Style,
) -> RatatuiLine<'static> {
    let key_display = action
        .keys
        .iter()
        .map(|k| format_key_for_display(k))
        .collect::<Vec<_>>()
        .join("/");
    help_line(&key_display, action.description, key_style, desc_style)
}

fn help_line(
    key_display: &str,
    description: &str,
    key_style: Style,
    desc_style: Style,
) -> RatatuiLine<'static> {
    RatatuiLine::from(vec![
        Span::styled(format!("{key_display:>width$}", width = KEY_WIDTH), key_style),
        Span::raw(" ".repeat(GUTTER_WIDTH)),
        Span::styled(description.to_string(), desc_style),
    ])
}

pub fn render_help_overlay(f: &mut Frame<'_>, scroll: usize, area: Rect) {
    let popup_area = centered_rect(70, 80, area);
    f.render_widget(Clear, popup_area);

    let block = Block::default()
        .title(theme::TITLE_HELP)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::HELP_BORDER));
    let inner = block.inner(popup_area);
    f.render_widget(block, popup_area);

    let max_scroll = HELP_LINES.len().saturating_sub(inner.height as usize);
    let visible: Vec<_> = HELP_LINES
        .iter()
        .skip(scroll.min(max_scroll))
        .cloned()
        .collect();
    f.render_widget(Paragraph::new(visible), inner);
}
