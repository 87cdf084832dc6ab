use ratatui::{
    style::{Color, Style, Stylize},
    text::{Line as RatatuiLine, Span},
};

use crate::app::App;
use crate::dispatch::format_key_for_display;
use crate::handlers::key_context;
use crate::registry::{KeyAction, KeyContext, key_actions_for_context};

use super::theme;

// Dashboard has too many bindings for one row; the rest live in help.
const FOOTER_DASHBOARD_ACTIONS: usize = 7;

pub fn render_footer(app: &App) -> RatatuiLine<'static> {
    let context = key_context(app);
    let (label, color) = match context {
        KeyContext::Dashboard => (" DASHBOARD ", Color::Cyan),
        KeyContext::Search => (" SEARCH ", theme::FILTER_PRIMARY),
        KeyContext::Form => (" FORM ", theme::FORM_BORDER),
        KeyContext::Details => (" DETAILS ", theme::DETAIL_BORDER),
        KeyContext::Compose => (" COMMENT ", theme::DETAIL_BORDER),
        KeyContext::Help => (" HELP ", theme::HELP_BORDER),
    };

    let mut spans = vec![Span::styled(
        label,
        Style::default().fg(theme::TEXT_ON_ACCENT).bg(color),
    )];

    if let Some(message) = &app.status_message {
        spans.push(Span::styled(
            format!("  {message}"),
            Style::default().fg(theme::STATUS_TEXT),
        ));
        return RatatuiLine::from(spans);
    }

    let actions: Vec<&KeyAction> = match context {
        // j/k/g/G are left out; they are the first four dashboard bindings
        KeyContext::Dashboard => key_actions_for_context(context)
            .skip(4)
            .take(FOOTER_DASHBOARD_ACTIONS)
            .collect(),
        _ => key_actions_for_context(context).collect(),
    };
    for action in actions {
        spans.extend(footer_action_spans(action));
    }
    RatatuiLine::from(spans)
}

fn footer_action_spans(action: &KeyAction) -> [Span<'static>; 2] {
    let key_display = action
        .keys
        .first()
        .map(|k| format_key_for_display(k))
        .unwrap_or_default();
    [
        Span::styled(format!("  {key_display}"), Style::default().fg(Color::Gray)),
        Span::styled(format!(" {} ", action.description), Style::default().dim()),
    ]
}
