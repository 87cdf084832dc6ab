mod detail_ops;
mod filter_ops;
pub mod form;
mod form_ops;
mod navigation;

pub use form::{Choices, FieldKind, FormError, FormField, FormMode, FormTab, ProjectForm};

use tracing::{debug, trace};

use crate::config::Config;
use crate::cursor::CursorBuffer;
use crate::modal::{ModalController, OverlayContent, OverlayError};
use crate::storage::{
    Clock, Project, ProjectId, ProjectQuery, ProjectRepository, SystemClock,
};

/// What keyboard handler to use while no overlay is open
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Search,
}

/// New-project or edit-project overlay
#[derive(Clone, Debug)]
pub struct FormState {
    pub form: ProjectForm,
    /// Validation message shown under the fields
    pub error: Option<String>,
}

impl FormState {
    #[must_use]
    pub fn new(form: ProjectForm) -> Self {
        Self { form, error: None }
    }
}

/// Project detail overlay. Holds only the id; the project itself is read
/// from the repository each time it is drawn.
#[derive(Clone, Debug)]
pub struct DetailState {
    pub id: ProjectId,
    pub comment: CursorBuffer,
    pub composing: bool,
    pub scroll: usize,
}

impl DetailState {
    #[must_use]
    pub fn new(id: ProjectId) -> Self {
        Self {
            id,
            comment: CursorBuffer::empty(),
            composing: false,
            scroll: 0,
        }
    }
}

#[derive(Clone, Debug)]
pub enum Overlay {
    ProjectForm(FormState),
    Details(DetailState),
    Help { scroll: usize },
}

impl OverlayContent for Overlay {
    fn teardown(&mut self) -> Result<(), OverlayError> {
        match self {
            Overlay::ProjectForm(state) => {
                trace!(mode = ?state.form.mode(), "form overlay torn down");
            }
            Overlay::Details(state) => {
                if !state.comment.is_blank() {
                    debug!(project = %state.id, "unsent comment discarded");
                }
            }
            Overlay::Help { .. } => {}
        }
        Ok(())
    }
}

pub struct App {
    pub repository: ProjectRepository,
    pub modals: ModalController<Overlay>,
    pub query: ProjectQuery,
    pub input_mode: InputMode,
    pub search_buffer: CursorBuffer,
    pub selected: usize,
    pub scroll_offset: usize,
    pub status_message: Option<String>,
    pub config: Config,
    pub should_quit: bool,
    pub needs_redraw: bool,
}

impl App {
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self::with_clock(config, SystemClock)
    }

    /// Builds the repository described by `config` on top of `clock`.
    #[must_use]
    pub fn with_clock(config: Config, clock: impl Clock + 'static) -> Self {
        let repository = if config.sample_data {
            ProjectRepository::with_sample_data(clock)
        } else {
            ProjectRepository::with_clock(config.first_project_id, clock)
        };
        Self::with_repository(config, repository)
    }

    #[must_use]
    pub fn with_repository(config: Config, mut repository: ProjectRepository) -> Self {
        repository.set_author(config.author());
        Self {
            repository,
            modals: ModalController::new(),
            query: ProjectQuery::all(),
            input_mode: InputMode::Normal,
            search_buffer: CursorBuffer::empty(),
            selected: 0,
            scroll_offset: 0,
            status_message: None,
            config,
            should_quit: false,
            needs_redraw: true,
        }
    }

    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some(msg.into());
    }

    /// Drains repository changes and overlay signals. Either kind means the
    /// screen is stale.
    pub fn sync(&mut self) {
        let changes = self.repository.drain_changes();
        let signals = self.modals.drain_signals();
        if changes.is_empty() && signals.is_empty() {
            return;
        }
        trace!(?changes, ?signals, "sync");
        self.needs_redraw = true;
        self.clamp_selection();
    }

    /// Dashboard cards under the current query, in insertion order.
    #[must_use]
    pub fn visible_projects(&self) -> Vec<&Project> {
        self.repository.query(&self.query)
    }

    #[must_use]
    pub fn selected_project(&self) -> Option<&Project> {
        self.visible_projects().get(self.selected).copied()
    }

    #[must_use]
    pub fn form_state(&self) -> Option<&FormState> {
        match self.modals.current() {
            Some(Overlay::ProjectForm(state)) => Some(state),
            _ => None,
        }
    }

    pub fn form_state_mut(&mut self) -> Option<&mut FormState> {
        match self.modals.current_mut() {
            Some(Overlay::ProjectForm(state)) => Some(state),
            _ => None,
        }
    }

    #[must_use]
    pub fn detail_state(&self) -> Option<&DetailState> {
        match self.modals.current() {
            Some(Overlay::Details(state)) => Some(state),
            _ => None,
        }
    }

    pub fn detail_state_mut(&mut self) -> Option<&mut DetailState> {
        match self.modals.current_mut() {
            Some(Overlay::Details(state)) => Some(state),
            _ => None,
        }
    }

    #[must_use]
    pub fn help_visible(&self) -> bool {
        matches!(self.modals.current(), Some(Overlay::Help { .. }))
    }

    pub fn toggle_help(&mut self) {
        if self.help_visible() {
            self.modals.close();
        } else {
            self.modals.open(Overlay::Help { scroll: 0 });
        }
    }

    pub fn scroll_help(&mut self, down: bool) {
        if let Some(Overlay::Help { scroll }) = self.modals.current_mut() {
            *scroll = if down {
                scroll.saturating_add(1)
            } else {
                scroll.saturating_sub(1)
            };
        }
    }

    /// Escape: drop every overlay whatever state the controller is in.
    pub fn force_close_overlays(&mut self) {
        self.modals.force_close_all();
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::modal::ModalState;
    use crate::storage::FixedClock;

    fn app() -> App {
        let clock = FixedClock::new(NaiveDate::from_ymd_opt(2026, 1, 15).unwrap());
        App::with_clock(Config::default(), clock)
    }

    #[test]
    fn test_sample_data_loaded_by_default() {
        let app = app();
        assert_eq!(app.visible_projects().len(), 2);
        assert_eq!(
            app.selected_project().map(|p| p.name.as_str()),
            Some("Honda Automotive Components")
        );
    }

    #[test]
    fn test_empty_start_honours_first_id() {
        let config = Config {
            sample_data: false,
            first_project_id: 40,
            ..Config::default()
        };
        let app = App::with_clock(
            config,
            FixedClock::new(NaiveDate::from_ymd_opt(2026, 1, 15).unwrap()),
        );
        assert!(app.repository.is_empty());
        assert!(app.selected_project().is_none());
    }

    #[test]
    fn test_sync_flags_redraw_only_on_change() {
        let mut app = app();
        app.needs_redraw = false;
        app.sync();
        assert!(!app.needs_redraw);

        app.toggle_help();
        app.sync();
        assert!(app.needs_redraw);
    }

    #[test]
    fn test_toggle_help_opens_and_closes() {
        let mut app = app();
        app.toggle_help();
        assert!(app.help_visible());
        app.toggle_help();
        assert_eq!(app.modals.state(), ModalState::Closed);
    }

    #[test]
    fn test_overlay_accessors_match_kind() {
        let mut app = app();
        app.modals.open(Overlay::Details(DetailState::new(ProjectId(1))));
        assert!(app.detail_state().is_some());
        assert!(app.form_state().is_none());
        assert!(!app.help_visible());
    }
}
