use tracing::{debug, info};

use crate::storage::{ProjectId, UpdateOutcome};

use super::{App, FormMode, FormState, Overlay, ProjectForm};

impl App {
    pub fn open_new_project_form(&mut self) {
        self.modals
            .open(Overlay::ProjectForm(FormState::new(ProjectForm::new_project())));
    }

    /// Opens the edit form for `id`, replacing whatever overlay is open.
    pub fn open_edit_form(&mut self, id: ProjectId) {
        let Some(project) = self.repository.get(id) else {
            self.set_status(format!("Project {id} not found"));
            return;
        };
        let form = ProjectForm::edit(project);
        self.modals.open(Overlay::ProjectForm(FormState::new(form)));
    }

    pub fn edit_selected_project(&mut self) {
        if let Some(id) = self.selected_project().map(|p| p.id) {
            self.open_edit_form(id);
        }
    }

    /// Validates the open form and writes it to the repository. On a
    /// validation error the form stays open with the message and nothing is
    /// stored.
    pub fn submit_form(&mut self) {
        let Some(Overlay::ProjectForm(state)) = self.modals.current_mut() else {
            return;
        };

        let result = match state.form.mode() {
            FormMode::Create => state
                .form
                .to_new_project(&self.config.current_user)
                .map(|project| {
                    let name = project.name.clone();
                    let id = self.repository.add(project);
                    info!(%id, %name, "project created");
                    format!("Created project {id}: {name}")
                }),
            FormMode::Edit(id) => match self.repository.get(id) {
                None => Ok(format!("Project {id} no longer exists")),
                Some(original) => state.form.to_patch(original).map(|patch| {
                    if patch.is_empty() {
                        return "No changes".to_string();
                    }
                    match self.repository.update(id, patch) {
                        UpdateOutcome::Applied => format!("Updated project {id}"),
                        UpdateOutcome::NotFound => format!("Project {id} no longer exists"),
                    }
                }),
            },
        };

        match result {
            Ok(message) => {
                self.modals.close();
                self.set_status(message);
            }
            Err(e) => {
                debug!(error = %e, "form rejected");
                state.error = Some(e.to_string());
            }
        }
    }

    pub fn clear_form(&mut self) {
        if let Some(state) = self.form_state_mut() {
            state.form.clear();
            state.error = None;
        }
    }
}
