mod details;
mod form;

pub use details::{build_detail_lines, render_details_overlay};
pub use form::{FormView, build_form_lines, render_form_overlay};
