use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style, Stylize},
    text::{Line as RatatuiLine, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::app::DetailState;
use crate::storage::{ManufacturingSpec, Project};

use super::super::layout::centered_rect;
use super::super::shared::{format_money, wrap_text};
use super::super::theme;

fn heading(text: &str) -> RatatuiLine<'static> {
    RatatuiLine::from(Span::styled(
        text.to_string(),
        Style::default()
            .fg(theme::DETAIL_BORDER)
            .add_modifier(Modifier::BOLD),
    ))
}

fn field(label: &str, value: impl Into<String>) -> RatatuiLine<'static> {
    RatatuiLine::from(vec![
        Span::styled(format!("{label}: "), Style::default().fg(theme::TEXT_LABEL)),
        Span::raw(value.into()),
    ])
}

fn bullets(lines: &mut Vec<RatatuiLine<'static>>, items: &[String], width: usize) {
    if items.is_empty() {
        lines.push(RatatuiLine::from(Span::styled(
            "  none",
            Style::default().fg(theme::TEXT_MUTED),
        )));
        return;
    }
    for item in items {
        for (i, row) in wrap_text(item, width.saturating_sub(4)).into_iter().enumerate() {
            let prefix = if i == 0 { "  • " } else { "    " };
            lines.push(RatatuiLine::from(format!("{prefix}{row}")));
        }
    }
}

fn manufacturing_lines(lines: &mut Vec<RatatuiLine<'static>>, m: &ManufacturingSpec) {
    if *m == ManufacturingSpec::default() {
        return;
    }
    lines.push(RatatuiLine::from(""));
    lines.push(heading("Manufacturing"));
    if m.press_tonnage > 0.0 || !m.press_type.is_empty() {
        lines.push(field(
            "Press",
            format!("{}t {}", m.press_tonnage, m.press_type).trim().to_string(),
        ));
    }
    if !m.steel_grade.is_empty() || m.thickness_mm > 0.0 {
        lines.push(field(
            "Steel",
            format!("{} {}mm", m.steel_grade, m.thickness_mm).trim().to_string(),
        ));
    }
    if !m.tool_type.is_empty() || m.tool_stations > 0 {
        let mut tool = format!("{} ({} stations", m.tool_type, m.tool_stations);
        if m.cavities > 0 {
            tool.push_str(&format!(", {} cavities", m.cavities));
        }
        tool.push(')');
        lines.push(field("Tool", tool.trim().to_string()));
    }
    if m.cpk_target > 0.0 || m.ppap_level > 0 {
        lines.push(field(
            "Quality plan",
            format!("Cpk {} · PPAP level {}", m.cpk_target, m.ppap_level),
        ));
    }
    if !m.toolmaker.is_empty() {
        lines.push(field(
            "Toolmaker",
            format!(
                "{} · {} · {} weeks",
                m.toolmaker,
                format_money(m.quote_amount),
                m.lead_time_weeks
            ),
        ));
    }
    if !m.drawing_path.is_empty() {
        lines.push(field("Drawing", m.drawing_path.clone()));
    }
}

/// Body of the detail overlay, built fresh from the stored project.
pub fn build_detail_lines(project: &Project, width: usize) -> Vec<RatatuiLine<'static>> {
    let mut lines = vec![
        RatatuiLine::from(vec![
            Span::raw(project.name.clone()).bold(),
            Span::styled(
                format!("  {}", project.status),
                Style::default().fg(theme::status_color(project.status)),
            ),
            Span::styled(
                format!("  [{}]", project.priority),
                Style::default().fg(theme::priority_color(project.priority)),
            ),
        ]),
        field("Feasibility score", format!("{}%", project.feasibility_score)),
        RatatuiLine::from(""),
    ];

    for row in wrap_text(&project.description, width) {
        lines.push(RatatuiLine::from(row));
    }

    lines.push(RatatuiLine::from(""));
    lines.push(heading("Customer"));
    lines.push(field("Company", project.customer_name.clone()));
    lines.push(field("Contact", project.customer_contact.clone()));
    lines.push(field("Email", project.customer_email.clone()));
    if !project.customer_phone.is_empty() {
        lines.push(field("Phone", project.customer_phone.clone()));
    }

    lines.push(RatatuiLine::from(""));
    lines.push(heading("Commercial"));
    lines.push(field("Volume", project.expected_volume.clone()));
    lines.push(field("Target price", format_money(project.target_price)));
    lines.push(field("Target margin", format!("{:.1}%", project.target_margin)));
    lines.push(field("Delivery", project.delivery_date.clone()));

    lines.push(RatatuiLine::from(""));
    lines.push(heading("Requirements"));
    for (label, text) in [
        ("Technical", &project.technical_requirements),
        ("Quality", &project.quality_requirements),
        ("Regulatory", &project.regulatory_requirements),
    ] {
        if !text.is_empty() {
            lines.push(field(label, text.clone()));
        }
    }

    let departments: Vec<&str> = project
        .assigned_departments
        .iter()
        .map(|d| d.display_name())
        .collect();
    lines.push(field(
        "Departments",
        if departments.is_empty() {
            "none".to_string()
        } else {
            departments.join(", ")
        },
    ));

    lines.push(RatatuiLine::from(""));
    lines.push(heading("Risks"));
    bullets(&mut lines, &project.risk_factors, width);
    lines.push(heading("Opportunities"));
    bullets(&mut lines, &project.opportunities, width);

    manufacturing_lines(&mut lines, &project.manufacturing);

    lines.push(RatatuiLine::from(""));
    lines.push(heading(&format!("Comments ({})", project.comments.len())));
    for comment in &project.comments {
        let author = match &comment.author {
            Some(a) => match a.department {
                Some(dept) => format!("{} ({dept})", a.name),
                None => a.name.clone(),
            },
            None => "Unknown".to_string(),
        };
        lines.push(RatatuiLine::from(vec![
            Span::styled(author, Style::default().fg(theme::HEADER_PRIMARY)),
            Span::styled(
                format!(" · {}", comment.date.format("%Y-%m-%d")),
                Style::default().fg(theme::TEXT_MUTED),
            ),
        ]));
        for row in wrap_text(&comment.text, width.saturating_sub(2)) {
            lines.push(RatatuiLine::from(format!("  {row}")));
        }
    }

    lines.push(RatatuiLine::from(""));
    lines.push(field(
        "Created",
        format!(
            "{} by {} · updated {}",
            project.created_date.format("%Y-%m-%d"),
            project.created_by,
            project.last_updated.format("%Y-%m-%d")
        ),
    ));

    lines
}

pub fn render_details_overlay(
    f: &mut Frame<'_>,
    project: Option<&Project>,
    state: &DetailState,
    area: Rect,
) {
    let popup_area = centered_rect(80, 85, area);
    f.render_widget(Clear, popup_area);

    let block = Block::default()
        .title(format!(" Project {} ", state.id))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::DETAIL_BORDER));
    let inner = block.inner(popup_area);
    f.render_widget(block, popup_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(inner);

    let Some(project) = project else {
        f.render_widget(
            Paragraph::new(Span::styled(
                "Project not found",
                Style::default().fg(theme::STATUS_ERROR),
            )),
            chunks[0],
        );
        return;
    };

    let lines = build_detail_lines(project, chunks[0].width as usize);
    let max_scroll = lines.len().saturating_sub(chunks[0].height as usize);
    let scroll = state.scroll.min(max_scroll);
    let visible: Vec<_> = lines.into_iter().skip(scroll).collect();
    f.render_widget(Paragraph::new(visible), chunks[0]);

    let compose = chunks[1];
    if state.composing {
        let prefix = "Comment: ";
        let width = (compose.width as usize).saturating_sub(prefix.len());
        let (shown, col) = state.comment.visible_window(width);
        f.render_widget(
            Paragraph::new(RatatuiLine::from(vec![
                Span::styled(prefix, Style::default().fg(theme::DETAIL_BORDER)),
                Span::raw(shown),
            ])),
            compose,
        );
        f.set_cursor_position((compose.x + (prefix.len() + col) as u16, compose.y));
    } else {
        f.render_widget(
            Paragraph::new(Span::styled(
                "c comment · e edit · Esc close",
                Style::default().fg(theme::TEXT_MUTED),
            )),
            compose,
        );
    }
}
