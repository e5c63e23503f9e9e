//! Theme module for the calendar cards
//!
//! Defines the CalendarTheme structure for the light and dark cards and
//! provides conversion helpers between egui::Color32 and hex strings.

use egui::Color32;

use crate::models::card::ThemeMode;

/// All colors used to draw one calendar card
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarTheme {
    /// Whether this is a dark theme (affects base egui::Visuals)
    pub is_dark: bool,

    /// Background of the page behind the cards
    pub app_background: Color32,

    /// Card surface
    pub card_background: Color32,

    /// Card outline
    pub card_border: Color32,

    /// Month and year picker text
    pub header_text: Color32,

    /// Prev/next button surface
    pub nav_background: Color32,

    /// Prev/next chevron color
    pub nav_icon: Color32,

    /// Weekday column headers
    pub weekday_text: Color32,

    /// Day numbers of the displayed month
    pub day_text: Color32,

    /// Day numbers of adjacent months
    pub disabled_text: Color32,

    /// Ring drawn around the current date
    pub today_ring: Color32,

    /// Fill of the selected day
    pub selected_background: Color32,

    /// Text on the selected day
    pub selected_text: Color32,

    /// Overlay drawn on hovered or focused cells
    pub hover_overlay: Color32,
}

impl CalendarTheme {
    /// Create the Light card theme
    pub fn light() -> Self {
        Self {
            is_dark: false,
            app_background: Color32::from_rgb(245, 245, 245),
            card_background: Color32::from_rgb(255, 255, 255),
            card_border: Color32::from_rgb(224, 224, 224),
            header_text: Color32::from_rgb(33, 33, 33),
            nav_background: Color32::from_rgb(245, 245, 245),
            nav_icon: Color32::from_rgb(97, 97, 97),
            weekday_text: Color32::from_rgb(117, 117, 117),
            day_text: Color32::from_rgb(33, 33, 33),
            disabled_text: Color32::from_rgb(189, 189, 189),
            today_ring: Color32::from_rgb(25, 118, 210),
            selected_background: Color32::from_rgb(25, 118, 210),
            selected_text: Color32::from_rgb(255, 255, 255),
            hover_overlay: Color32::from_rgba_unmultiplied(0, 0, 0, 14),
        }
    }

    /// Create the Dark card theme
    pub fn dark() -> Self {
        Self {
            is_dark: true,
            app_background: Color32::from_rgb(245, 245, 245),
            card_background: Color32::from_rgb(48, 48, 48),
            card_border: Color32::from_rgb(66, 66, 66),
            header_text: Color32::from_rgb(250, 250, 250),
            nav_background: Color32::from_rgb(66, 66, 66),
            nav_icon: Color32::from_rgb(224, 224, 224),
            weekday_text: Color32::from_rgb(158, 158, 158),
            day_text: Color32::from_rgb(250, 250, 250),
            disabled_text: Color32::from_rgb(97, 97, 97),
            today_ring: Color32::from_rgb(144, 202, 249),
            selected_background: Color32::from_rgb(144, 202, 249),
            selected_text: Color32::from_rgb(33, 33, 33),
            hover_overlay: Color32::from_rgba_unmultiplied(255, 255, 255, 20),
        }
    }

    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => Self::light(),
            ThemeMode::Dark => Self::dark(),
        }
    }

    /// Replace the accent (today ring and selection fill)
    pub fn with_accent(mut self, accent: Color32) -> Self {
        self.today_ring = accent;
        self.selected_background = accent;
        self
    }

    /// Apply the page-level visuals to an egui context
    pub fn apply_to_context(&self, ctx: &egui::Context) {
        let mut visuals = if self.is_dark {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        };

        visuals.window_fill = self.app_background;
        visuals.panel_fill = self.app_background;
        visuals.selection.stroke.color = self.today_ring;

        ctx.set_visuals(visuals);
    }

    /// Convert Color32 to hex string for display
    pub fn color_to_hex(color: Color32) -> String {
        format!("#{:02X}{:02X}{:02X}", color.r(), color.g(), color.b())
    }

    /// Parse hex string to Color32
    pub fn hex_to_color(hex: &str) -> Result<Color32, String> {
        let hex = hex.trim().trim_start_matches('#');

        if hex.len() != 6 || !hex.is_ascii() {
            return Err("Hex color must be 6 characters".to_string());
        }

        let r = u8::from_str_radix(&hex[0..2], 16).map_err(|_| "Invalid hex color")?;
        let g = u8::from_str_radix(&hex[2..4], 16).map_err(|_| "Invalid hex color")?;
        let b = u8::from_str_radix(&hex[4..6], 16).map_err(|_| "Invalid hex color")?;

        Ok(Color32::from_rgb(r, g, b))
    }
}
