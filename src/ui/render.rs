use ratatui::{
    Frame,
    style::Style,
    widgets::{Block, Borders, Paragraph},
};

use crate::app::{App, InputMode, Overlay};

use super::dashboard::{
    build_dashboard_lines, build_filter_line, build_header_line, build_stats_line,
};
use super::footer::render_footer;
use super::help::render_help_overlay;
use super::layout::RenderContext;
use super::overlay::{render_details_overlay, render_form_overlay};
use super::theme;

pub fn render_app(f: &mut Frame<'_>, app: &mut App) {
    let context = RenderContext::new(f.area());
    let list_inner = context.list_inner();
    let visible_cards = (list_inner.height as usize / theme::CARD_HEIGHT).max(1);
    app.ensure_selected_visible(visible_cards);
    let app = &*app;

    f.render_widget(
        Paragraph::new(build_header_line(app, context.header_area.width as usize)),
        context.header_area,
    );

    let stats_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::BORDER_MUTED));
    let stats_inner = stats_block.inner(context.stats_area);
    f.render_widget(stats_block, context.stats_area);
    f.render_widget(
        Paragraph::new(build_stats_line(&app.repository.stats())),
        stats_inner,
    );

    let filter_line = build_filter_line(app);
    let search_prefix: usize = filter_line
        .spans
        .iter()
        .take(filter_line.spans.len().saturating_sub(1))
        .map(|s| s.width())
        .sum();
    f.render_widget(Paragraph::new(filter_line), context.filter_area);

    let count = app.visible_projects().len();
    let list_block = Block::default()
        .title(format!(" Projects ({count}) "))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::BORDER_DEFAULT));
    f.render_widget(list_block, context.list_area);
    let lines: Vec<_> = build_dashboard_lines(app, list_inner.width as usize)
        .into_iter()
        .skip(app.scroll_offset * theme::CARD_HEIGHT)
        .collect();
    f.render_widget(Paragraph::new(lines), list_inner);

    f.render_widget(Paragraph::new(render_footer(app)), context.footer_area);

    match app.modals.current() {
        Some(Overlay::ProjectForm(state)) => render_form_overlay(f, state, context.size),
        Some(Overlay::Details(state)) => {
            render_details_overlay(f, app.repository.get(state.id), state, context.size);
        }
        Some(Overlay::Help { scroll }) => render_help_overlay(f, *scroll, context.size),
        None => {
            if app.input_mode == InputMode::Search {
                let col = search_prefix + app.search_buffer.cursor_display_pos();
                let area = context.filter_area;
                if col < area.width as usize {
                    f.set_cursor_position((area.x + col as u16, area.y));
                }
            }
        }
    }
}
