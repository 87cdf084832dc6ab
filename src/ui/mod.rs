mod dashboard;
mod footer;
mod help;
mod layout;
mod overlay;
mod render;
mod shared;
pub(crate) mod theme;

pub use dashboard::{
    build_dashboard_lines, build_filter_line, build_header_line, build_stats_line,
};
pub use footer::render_footer;
pub use help::build_help_lines;
pub use layout::{RenderContext, centered_rect};
pub use overlay::{FormView, build_detail_lines, build_form_lines};
pub use render::render_app;
pub use shared::{format_money, truncate_text, wrap_text};
