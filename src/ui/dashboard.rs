use ratatui::{
    style::{Modifier, Style, Stylize},
    text::{Line as RatatuiLine, Span},
};
use unicode_width::UnicodeWidthStr;

use crate::app::{App, InputMode};
use crate::storage::{DashboardStats, Project, Status};

use super::shared::{format_money, truncate_text};
use super::theme;

pub fn build_header_line(app: &App, width: usize) -> RatatuiLine<'static> {
    let user = match app.config.department {
        Some(dept) => format!("{} ({dept}) ", app.config.current_user),
        None => format!("{} ", app.config.current_user),
    };
    let padding = width.saturating_sub(theme::APP_TITLE.width() + user.width());
    RatatuiLine::from(vec![
        Span::styled(
            theme::APP_TITLE,
            Style::default()
                .fg(theme::HEADER_PRIMARY)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" ".repeat(padding)),
        Span::styled(user, Style::default().fg(theme::TEXT_LABEL)),
    ])
}

/// Totals over every project, regardless of the active filters.
pub fn build_stats_line(stats: &DashboardStats) -> RatatuiLine<'static> {
    let label = Style::default().fg(theme::TEXT_LABEL);
    let separator = Span::styled(theme::GLYPH_SEPARATOR, Style::default().fg(theme::TEXT_MUTED));
    RatatuiLine::from(vec![
        Span::styled("Total ", label),
        Span::raw(stats.total.to_string()).bold(),
        separator.clone(),
        Span::styled("Feasible ", label),
        Span::styled(
            stats.count(Status::Feasible).to_string(),
            Style::default().fg(theme::status_color(Status::Feasible)),
        )
        .bold(),
        separator.clone(),
        Span::styled("Under Review ", label),
        Span::styled(
            stats.count(Status::UnderReview).to_string(),
            Style::default().fg(theme::status_color(Status::UnderReview)),
        )
        .bold(),
        separator,
        Span::styled("Avg Score ", label),
        Span::raw(format!("{:.1}", stats.average_score)).bold(),
    ])
}

pub fn build_filter_line(app: &App) -> RatatuiLine<'static> {
    let label = Style::default().fg(theme::TEXT_LABEL);
    let value = Style::default().fg(theme::FILTER_PRIMARY);
    let search_style = if app.input_mode == InputMode::Search {
        value.add_modifier(Modifier::UNDERLINED)
    } else {
        value
    };
    let search = if app.input_mode == InputMode::Search {
        app.search_buffer.content().to_string()
    } else {
        app.query.search.clone()
    };

    RatatuiLine::from(vec![
        Span::styled(" Status: ", label),
        Span::styled(app.query.status.to_string(), value),
        Span::styled("  Priority: ", label),
        Span::styled(app.query.priority.to_string(), value),
        Span::styled("  Search: ", label),
        Span::styled(search, search_style),
    ])
}

/// Card rows for every project under the current query, in order.
pub fn build_dashboard_lines(app: &App, width: usize) -> Vec<RatatuiLine<'static>> {
    let projects = app.visible_projects();
    if projects.is_empty() {
        return vec![RatatuiLine::from(Span::styled(
            theme::MSG_NO_PROJECTS,
            Style::default().fg(theme::TEXT_MUTED).italic(),
        ))];
    }

    projects
        .iter()
        .enumerate()
        .flat_map(|(i, project)| build_card(project, i == app.selected, width))
        .collect()
}

fn build_card(project: &Project, selected: bool, width: usize) -> Vec<RatatuiLine<'static>> {
    let label = Style::default().fg(theme::TEXT_LABEL);
    let cursor = if selected { theme::GLYPH_CURSOR } else { " " };
    let name_style = if selected {
        Style::default()
            .fg(theme::HEADER_PRIMARY)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };
    let priority = format!(" [{}]", project.priority);
    let body_width = width.saturating_sub(theme::CARD_INDENT.len());
    let name_width = width.saturating_sub(2 + priority.width());

    let customer = truncate_text(
        &format!(
            "Customer: {} · Contact: {}",
            project.customer_name, project.customer_contact
        ),
        body_width,
    );
    let commercial = truncate_text(
        &format!(
            "Price: {}  Margin: {:.1}%  Volume: {}",
            format_money(project.target_price),
            project.target_margin,
            project.expected_volume
        ),
        body_width,
    );
    let audit = truncate_text(
        &format!(
            "Delivery: {}  By: {}  Updated: {}",
            project.delivery_date,
            project.created_by,
            project.last_updated.format("%Y-%m-%d")
        ),
        body_width,
    );

    vec![
        RatatuiLine::from(vec![
            Span::styled(format!("{cursor} "), Style::default().fg(theme::HEADER_PRIMARY)),
            Span::styled(truncate_text(&project.name, name_width), name_style),
            Span::styled(
                priority,
                Style::default().fg(theme::priority_color(project.priority)),
            ),
        ]),
        RatatuiLine::from(vec![
            Span::raw(theme::CARD_INDENT),
            Span::styled(customer, label),
        ]),
        RatatuiLine::from(vec![
            Span::raw(theme::CARD_INDENT),
            Span::styled(
                project.status.display_name(),
                Style::default().fg(theme::status_color(project.status)),
            ),
            Span::styled(format!("  Score: {}%  ", project.feasibility_score), label),
            Span::styled(commercial, label),
        ]),
        RatatuiLine::from(vec![
            Span::raw(theme::CARD_INDENT),
            Span::styled(audit, Style::default().fg(theme::TEXT_MUTED)),
        ]),
        RatatuiLine::from(""),
    ]
}
