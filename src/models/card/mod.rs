//! Calendar card configuration and interaction state.
//!
//! `CardState` is the GUI-free half of a calendar card: the UI layer turns
//! pointer and keyboard events into [`CardInput`]s and renders whatever the
//! state says afterwards.

use serde::{Deserialize, Serialize};

use crate::models::day_grid::DayGrid;
use crate::models::selection::{Selection, SelectionChange};

/// Color scheme of a single card.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    /// Accessible name of a card using this theme
    pub fn label(&self) -> &'static str {
        match self {
            ThemeMode::Light => "Light Mode Calendar",
            ThemeMode::Dark => "Dark Mode Calendar",
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, ThemeMode::Dark)
    }
}

/// Display options for one card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardConfig {
    pub theme: ThemeMode,
    /// Text shown in the month picker
    pub month_label: String,
    /// Text shown in the year picker
    pub year_label: String,
    /// Optional hex color (e.g. "#3B82F6") replacing the theme accent
    pub accent: Option<String>,
}

impl Default for CardConfig {
    fn default() -> Self {
        Self {
            theme: ThemeMode::Light,
            month_label: "April".to_string(),
            year_label: "2021".to_string(),
            accent: None,
        }
    }
}

impl CardConfig {
    pub fn with_theme(theme: ThemeMode) -> Self {
        Self {
            theme,
            ..Self::default()
        }
    }

    /// Accessible name of the day grid, e.g. "April 2021 Weeks"
    pub fn grid_label(&self) -> String {
        format!("{} {} Weeks", self.month_label, self.year_label)
    }

    pub fn validate(&self) -> Result<(), CardValidationError> {
        if self.month_label.trim().is_empty() {
            return Err(CardValidationError::EmptyMonthLabel);
        }
        if self.year_label.trim().is_empty() {
            return Err(CardValidationError::EmptyYearLabel);
        }
        if let Some(ref accent) = self.accent {
            if !is_valid_hex_color(accent) {
                return Err(CardValidationError::InvalidAccent(accent.clone()));
            }
        }
        Ok(())
    }
}

/// Validation errors for CardConfig.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardValidationError {
    EmptyMonthLabel,
    EmptyYearLabel,
    InvalidAccent(String),
}

impl std::fmt::Display for CardValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyMonthLabel => write!(f, "Month label cannot be empty"),
            Self::EmptyYearLabel => write!(f, "Year label cannot be empty"),
            Self::InvalidAccent(value) => {
                write!(f, "Invalid accent color '{}' (use hex like #3B82F6)", value)
            }
        }
    }
}

impl std::error::Error for CardValidationError {}

fn is_valid_hex_color(color: &str) -> bool {
    let Some(hex) = color.trim().strip_prefix('#') else {
        return false;
    };
    hex.len() == 6 && hex.chars().all(|c| c.is_ascii_hexdigit())
}

/// Which way a header arrow points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavDirection {
    Prev,
    Next,
}

impl NavDirection {
    pub fn label(&self) -> &'static str {
        match self {
            NavDirection::Prev => "Previous month",
            NavDirection::Next => "Next month",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerKind {
    Month,
    Year,
}

/// Keys that activate a focused day cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivationKey {
    Enter,
    Space,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputSource {
    Pointer,
    Keyboard(ActivationKey),
}

/// User interaction with a card, already resolved to a target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardInput {
    /// Click or key press on the day cell at `index`
    Activate { index: usize, source: InputSource },
    /// Header arrow pressed
    Navigate(NavDirection),
    /// Month or year picker pressed
    OpenPicker(PickerKind),
}

/// Result of feeding an input to a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardOutcome {
    Selection(SelectionChange),
    /// Play the nudge animation on the given arrow
    Nudge(NavDirection),
    None,
}

/// Grid plus selection for one mounted card.
#[derive(Debug, Clone, Default)]
pub struct CardState {
    grid: DayGrid,
    selection: Selection,
}

impl CardState {
    pub fn new(grid: DayGrid) -> Self {
        Self {
            grid,
            selection: Selection::new(),
        }
    }

    pub fn grid(&self) -> &DayGrid {
        &self.grid
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn handle(&mut self, input: CardInput) -> CardOutcome {
        match input {
            CardInput::Activate { index, .. } => {
                CardOutcome::Selection(self.selection.toggle(&self.grid, index))
            }
            // Month navigation is a placeholder: the grid never changes.
            CardInput::Navigate(direction) => CardOutcome::Nudge(direction),
            CardInput::OpenPicker(_) => CardOutcome::None,
        }
    }
}
