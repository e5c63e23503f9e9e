// Test fixtures - reusable test data
// Provides consistent grids and settings across all test files

#![allow(dead_code)]

use regular_calendar::models::card::{CardConfig, CardInput, InputSource, ThemeMode};
use regular_calendar::models::day_grid::{DayGrid, CELL_COUNT};
use regular_calendar::models::settings::{Settings, WindowSettings};

/// Indices of the greyed-out cells on the April 2021 page
pub const DISABLED_INDICES: [usize; 5] = [0, 1, 2, 33, 34];

/// Index of April 7th, the "today" cell
pub const TODAY_INDEX: usize = 9;

pub fn april_grid() -> DayGrid {
    DayGrid::april_2021()
}

/// Every index that can be selected on the April page
pub fn selectable_indices() -> Vec<usize> {
    (0..CELL_COUNT)
        .filter(|idx| !DISABLED_INDICES.contains(idx))
        .collect()
}

pub fn click(index: usize) -> CardInput {
    CardInput::Activate {
        index,
        source: InputSource::Pointer,
    }
}

/// Settings with a single accented dark card in a small window
pub fn custom_settings() -> Settings {
    Settings {
        window: WindowSettings {
            width: 400.0,
            height: 420.0,
        },
        cards: vec![CardConfig {
            theme: ThemeMode::Dark,
            month_label: "May".to_string(),
            year_label: "2022".to_string(),
            accent: Some("#22C55E".to_string()),
        }],
    }
}
