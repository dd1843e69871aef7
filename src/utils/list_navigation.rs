//! List navigation helpers for `ListState`.

use ratatui::widgets::ListState;

/// Extension trait for `ListState` with bounded and wrapping moves.
pub trait ListStateExt {
    /// Move up one item, wrapping to the last.
    fn select_previous_wrap(&mut self, total_items: usize);

    /// Move down one item, wrapping to the first.
    fn select_next_wrap(&mut self, total_items: usize);

    /// Keep the selection inside `0..total_items`, clearing it for an empty list.
    fn clamp_to(&mut self, total_items: usize);
}

impl ListStateExt for ListState {
    fn select_previous_wrap(&mut self, total_items: usize) {
        if total_items == 0 {
            return;
        }
        let current = self.selected().unwrap_or(0);
        let new_index = if current == 0 {
            total_items - 1
        } else {
            current - 1
        };
        self.select(Some(new_index));
    }

    fn select_next_wrap(&mut self, total_items: usize) {
        if total_items == 0 {
            return;
        }
        let new_index = match self.selected() {
            Some(current) if current + 1 < total_items => current + 1,
            Some(_) => 0,
            None => 0,
        };
        self.select(Some(new_index));
    }

    fn clamp_to(&mut self, total_items: usize) {
        if total_items == 0 {
            self.select(None);
            return;
        }
        let index = self.selected().unwrap_or(0).min(total_items - 1);
        self.select(Some(index));
    }
}
