//! Fixed day grid shown by every calendar card.
//!
//! The grid is five Monday-first weeks of seven cells. Cells belonging to
//! the neighbouring months are marked disabled and one cell may carry the
//! "today" marker. No date arithmetic happens here: the grid is data.

use thiserror::Error;

/// Number of columns in the grid
pub const DAYS_PER_WEEK: usize = 7;

/// Number of rows in the grid
pub const WEEKS: usize = 5;

/// Total number of cells in a grid
pub const CELL_COUNT: usize = DAYS_PER_WEEK * WEEKS;

/// Column headers, Monday first
pub const WEEKDAY_LABELS: [&str; DAYS_PER_WEEK] = ["Mo", "Tu", "We", "Th", "Fr", "Sa", "Su"];

/// One entry in the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayCell {
    /// Day of month printed in the cell
    pub number: u32,
    /// Day belongs to an adjacent month and cannot be selected
    pub disabled: bool,
    /// Cell represents the current date
    pub today: bool,
}

impl DayCell {
    pub const fn new(number: u32) -> Self {
        Self {
            number,
            disabled: false,
            today: false,
        }
    }

    pub const fn disabled(number: u32) -> Self {
        Self {
            number,
            disabled: true,
            today: false,
        }
    }

    pub const fn today(number: u32) -> Self {
        Self {
            number,
            disabled: false,
            today: true,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    #[error("day grid needs exactly {expected} cells, got {actual}")]
    WrongCellCount { expected: usize, actual: usize },
    #[error("day grid marks {0} cells as today, at most one is allowed")]
    MultipleToday(usize),
}

/// Immutable 5x7 grid of day cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayGrid {
    cells: Vec<DayCell>,
}

impl DayGrid {
    /// The April 2021 page: March 29-31 and May 1-2 are greyed out,
    /// the 7th is today.
    ///
    /// The source mockup prints `0` in place of the 16th (index 18); this
    /// grid shows 16.
    pub fn april_2021() -> Self {
        let mut cells = Vec::with_capacity(CELL_COUNT);
        cells.extend([29, 30, 31].map(DayCell::disabled));
        cells.extend((1..=30).map(|day| {
            if day == 7 {
                DayCell::today(day)
            } else {
                DayCell::new(day)
            }
        }));
        cells.extend([1, 2].map(DayCell::disabled));

        Self { cells }
    }

    /// Build a grid from arbitrary cells, checking its shape.
    pub fn from_cells(cells: Vec<DayCell>) -> Result<Self, GridError> {
        if cells.len() != CELL_COUNT {
            return Err(GridError::WrongCellCount {
                expected: CELL_COUNT,
                actual: cells.len(),
            });
        }

        let today_count = cells.iter().filter(|cell| cell.today).count();
        if today_count > 1 {
            return Err(GridError::MultipleToday(today_count));
        }

        Ok(Self { cells })
    }

    pub fn cell(&self, index: usize) -> Option<&DayCell> {
        self.cells.get(index)
    }

    pub fn cells(&self) -> &[DayCell] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Rows of seven cells, top to bottom
    pub fn weeks(&self) -> impl Iterator<Item = &[DayCell]> {
        self.cells.chunks(DAYS_PER_WEEK)
    }

    pub fn today_index(&self) -> Option<usize> {
        self.cells.iter().position(|cell| cell.today)
    }

    /// Whether the cell exists and belongs to the displayed month
    pub fn is_selectable(&self, index: usize) -> bool {
        self.cell(index).is_some_and(|cell| !cell.disabled)
    }
}

impl Default for DayGrid {
    fn default() -> Self {
        Self::april_2021()
    }
}
