//! Single-cell selection state for a calendar card.

use crate::models::day_grid::DayGrid;

/// What a toggle did to the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionChange {
    /// The cell became the selected one
    Selected(usize),
    /// The cell was selected and has been cleared
    Cleared(usize),
    /// Disabled or unknown cell, nothing changed
    Ignored,
}

/// At most one selected cell, by grid index.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    selected: Option<usize>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.selected == Some(index)
    }

    pub fn clear(&mut self) {
        self.selected = None;
    }

    /// Select `index`, or clear it if it is already selected.
    ///
    /// Disabled and out-of-range cells leave the selection untouched.
    pub fn toggle(&mut self, grid: &DayGrid, index: usize) -> SelectionChange {
        if !grid.is_selectable(index) {
            return SelectionChange::Ignored;
        }

        if self.selected == Some(index) {
            self.selected = None;
            SelectionChange::Cleared(index)
        } else {
            self.selected = Some(index);
            SelectionChange::Selected(index)
        }
    }
}
