use super::App;

impl App {
    pub fn move_down(&mut self) {
        let count = self.visible_projects().len();
        if self.selected + 1 < count {
            self.selected += 1;
        }
    }

    pub fn move_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn jump_to_first(&mut self) {
        self.selected = 0;
        self.scroll_offset = 0;
    }

    pub fn jump_to_last(&mut self) {
        self.selected = self.visible_projects().len().saturating_sub(1);
    }

    /// Pulls the selection back inside the filtered list after it shrank.
    pub fn clamp_selection(&mut self) {
        let count = self.visible_projects().len();
        if self.selected >= count {
            self.selected = count.saturating_sub(1);
        }
        if self.scroll_offset > self.selected {
            self.scroll_offset = self.selected;
        }
    }

    /// Adjusts scroll so the selected card is one of the `visible` shown.
    pub fn ensure_selected_visible(&mut self, visible: usize) {
        if visible == 0 {
            return;
        }
        if self.selected < self.scroll_offset {
            self.scroll_offset = self.selected;
        } else if self.selected >= self.scroll_offset + visible {
            self.scroll_offset = self.selected + 1 - visible;
        }
    }

    pub(super) fn reset_selection(&mut self) {
        self.selected = 0;
        self.scroll_offset = 0;
    }
}
