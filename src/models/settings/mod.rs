// Settings module
// Window geometry and the list of cards, loaded from config.toml

use serde::{Deserialize, Serialize};

use crate::models::card::{CardConfig, ThemeMode};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowSettings {
    pub width: f32,
    pub height: f32,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            width: 760.0,
            height: 440.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub window: WindowSettings,
    pub cards: Vec<CardConfig>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window: WindowSettings::default(),
            cards: vec![
                CardConfig::with_theme(ThemeMode::Light),
                CardConfig::with_theme(ThemeMode::Dark),
            ],
        }
    }
}

impl Settings {
    pub fn validate(&self) -> Result<(), String> {
        let WindowSettings { width, height } = self.window;
        if !(width.is_finite() && width > 0.0) {
            return Err(format!("Window width must be positive, got {}", width));
        }
        if !(height.is_finite() && height > 0.0) {
            return Err(format!("Window height must be positive, got {}", height));
        }

        if self.cards.is_empty() {
            return Err("At least one calendar card must be configured".to_string());
        }

        for (idx, card) in self.cards.iter().enumerate() {
            card.validate()
                .map_err(|e| format!("Card {}: {}", idx + 1, e))?;
        }

        Ok(())
    }
}
