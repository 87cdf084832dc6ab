use ratatui::style::Color;

use crate::storage::{Priority, Status};

// Chrome
pub const HEADER_PRIMARY: Color = Color::Cyan;
pub const BORDER_DEFAULT: Color = Color::White;
pub const BORDER_MUTED: Color = Color::Gray;

// Overlays
pub const FORM_BORDER: Color = Color::Green;
pub const DETAIL_BORDER: Color = Color::Blue;
pub const HELP_BORDER: Color = Color::Cyan;
pub const TAB_ACTIVE: Color = Color::Green;

// Search / filters
pub const FILTER_PRIMARY: Color = Color::LightMagenta;

// Text colors
pub const TEXT_MUTED: Color = Color::DarkGray;
pub const TEXT_LABEL: Color = Color::Gray;
pub const TEXT_ON_ACCENT: Color = Color::Black;

// Status indicator
pub const STATUS_TEXT: Color = Color::Gray;
pub const STATUS_ERROR: Color = Color::Red;

#[must_use]
pub fn status_color(status: Status) -> Color {
    match status {
        Status::New => Color::White,
        Status::UnderReview => Color::Yellow,
        Status::Feasible => Color::Green,
        Status::NotFeasible => Color::Red,
        Status::Approved => Color::LightGreen,
        Status::Rejected => Color::LightRed,
    }
}

#[must_use]
pub fn priority_color(priority: Priority) -> Color {
    match priority {
        Priority::Low => Color::Gray,
        Priority::Medium => Color::Blue,
        Priority::High => Color::Yellow,
        Priority::Critical => Color::Red,
    }
}

// Glyphs
pub const GLYPH_CURSOR: &str = "→";
pub const GLYPH_SEPARATOR: &str = " │ ";
pub const GLYPH_REQUIRED: &str = "*";

// Rows per project card, blank spacer included
pub const CARD_HEIGHT: usize = 5;
pub const CARD_INDENT: &str = "   ";

// Form
pub const FORM_LABEL_WIDTH: usize = 22;

pub const APP_TITLE: &str = " Feasibility Tracker ";
pub const TITLE_NEW_PROJECT: &str = " New Project ";
pub const TITLE_EDIT_PROJECT: &str = " Edit Project ";
pub const TITLE_HELP: &str = " Keys ";
pub const MSG_NO_PROJECTS: &str = "No projects match the current filters";
