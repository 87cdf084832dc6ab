use tracing::debug;

use crate::storage::{Filter, Priority, Status};

use super::{App, InputMode};

impl App {
    pub fn cycle_status_filter(&mut self, forward: bool) {
        self.query.status = self.query.status.cycle(Status::ALL, forward);
        debug!(status = %self.query.status, "status filter changed");
        self.reset_selection();
    }

    pub fn cycle_priority_filter(&mut self, forward: bool) {
        self.query.priority = self.query.priority.cycle(Priority::ALL, forward);
        debug!(priority = %self.query.priority, "priority filter changed");
        self.reset_selection();
    }

    pub fn enter_search(&mut self) {
        self.search_buffer.set_content(&self.query.search);
        self.input_mode = InputMode::Search;
    }

    /// Re-runs the query from the search buffer. Called after every edit so
    /// the card list follows the input.
    pub fn update_search(&mut self) {
        let term = self.search_buffer.trimmed().to_string();
        if term != self.query.search {
            self.query.search = term;
            self.reset_selection();
        }
    }

    /// Leaves the search input, keeping the term.
    pub fn confirm_search(&mut self) {
        self.update_search();
        self.input_mode = InputMode::Normal;
    }

    pub fn cancel_search(&mut self) {
        self.search_buffer.clear();
        self.update_search();
        self.input_mode = InputMode::Normal;
    }

    pub fn clear_filters(&mut self) {
        self.query.status = Filter::All;
        self.query.priority = Filter::All;
        self.query.search.clear();
        self.search_buffer.clear();
        self.reset_selection();
        self.set_status("Filters cleared");
    }
}
