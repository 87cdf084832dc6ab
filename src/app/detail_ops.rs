use crate::storage::{ProjectId, UpdateOutcome};

use super::{App, DetailState, Overlay};

impl App {
    pub fn open_details(&mut self, id: ProjectId) {
        self.modals.open(Overlay::Details(DetailState::new(id)));
    }

    pub fn open_selected_details(&mut self) {
        if let Some(id) = self.selected_project().map(|p| p.id) {
            self.open_details(id);
        }
    }

    pub fn start_comment(&mut self) {
        if let Some(state) = self.detail_state_mut() {
            state.composing = true;
        }
    }

    /// Leaves the compose line; the draft is kept.
    pub fn stop_comment(&mut self) {
        if let Some(state) = self.detail_state_mut() {
            state.composing = false;
        }
    }

    /// Posts the compose line as a comment. Blank drafts are ignored.
    pub fn submit_comment(&mut self) {
        let Some(Overlay::Details(state)) = self.modals.current_mut() else {
            return;
        };
        let text = state.comment.trimmed().to_string();
        if text.is_empty() {
            return;
        }
        let id = state.id;
        match self.repository.add_comment(id, text) {
            UpdateOutcome::Applied => {
                state.comment.clear();
                state.composing = false;
                self.set_status("Comment added");
            }
            UpdateOutcome::NotFound => {
                self.set_status(format!("Project {id} no longer exists"));
            }
        }
    }

    pub fn scroll_details(&mut self, down: bool) {
        if let Some(state) = self.detail_state_mut() {
            state.scroll = if down {
                state.scroll.saturating_add(1)
            } else {
                state.scroll.saturating_sub(1)
            };
        }
    }

    /// Swaps the detail overlay for the edit form of the same project.
    pub fn edit_from_details(&mut self) {
        if let Some(id) = self.detail_state().map(|s| s.id) {
            self.open_edit_form(id);
        }
    }
}
