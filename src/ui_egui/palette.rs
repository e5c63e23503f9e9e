use crate::ui_egui::theme::CalendarTheme;
use egui::Color32;

fn with_alpha(color: Color32, alpha: u8) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), alpha)
}

fn blend(a: Color32, b: Color32, t: f32) -> Color32 {
    let t = t.clamp(0.0, 1.0);
    let lerp = |c1: u8, c2: u8| -> u8 { ((c1 as f32 * (1.0 - t)) + (c2 as f32 * t)).round() as u8 };
    Color32::from_rgb(lerp(a.r(), b.r()), lerp(a.g(), b.g()), lerp(a.b(), b.b()))
}

/// Display flags of one day cell for the current frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct CellFlags {
    pub disabled: bool,
    pub today: bool,
    pub selected: bool,
    pub hovered: bool,
    pub focused: bool,
}

/// Resolved colors for drawing one day cell
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct CellColors {
    pub fill: Option<Color32>,
    pub ring: Option<Color32>,
    pub text: Color32,
    pub overlay: Option<Color32>,
}

#[derive(Clone, Copy)]
pub(crate) struct CellPalette {
    pub text: Color32,
    pub disabled_text: Color32,
    pub today_ring: Color32,
    pub selected_bg: Color32,
    pub selected_text: Color32,
    pub hover_overlay: Color32,
    pub focus_ring: Color32,
}

impl CellPalette {
    pub fn from_theme(theme: &CalendarTheme) -> Self {
        Self {
            text: theme.day_text,
            disabled_text: theme.disabled_text,
            today_ring: theme.today_ring,
            selected_bg: theme.selected_background,
            selected_text: theme.selected_text,
            hover_overlay: theme.hover_overlay,
            focus_ring: with_alpha(theme.today_ring, if theme.is_dark { 160 } else { 120 }),
        }
    }

    /// Selection wins the fill; today keeps its ring while selected.
    /// Disabled cells never get hover or focus feedback.
    pub fn resolve(&self, flags: CellFlags) -> CellColors {
        if flags.disabled {
            return CellColors {
                fill: None,
                ring: None,
                text: self.disabled_text,
                overlay: None,
            };
        }

        let fill = flags.selected.then_some(self.selected_bg);
        let ring = if flags.today {
            Some(self.today_ring)
        } else if flags.focused {
            Some(self.focus_ring)
        } else {
            None
        };
        let text = if flags.selected {
            self.selected_text
        } else {
            self.text
        };
        let overlay = (flags.hovered && !flags.selected).then_some(self.hover_overlay);

        CellColors {
            fill,
            ring,
            text,
            overlay,
        }
    }
}

#[derive(Clone, Copy)]
pub(crate) struct HeaderPalette {
    pub card_bg: Color32,
    pub card_border: Color32,
    pub title_text: Color32,
    pub caret: Color32,
    pub weekday_text: Color32,
    pub nav_bg: Color32,
    pub nav_hover_bg: Color32,
    pub nav_icon: Color32,
}

impl HeaderPalette {
    pub fn from_theme(theme: &CalendarTheme) -> Self {
        Self {
            card_bg: theme.card_background,
            card_border: theme.card_border,
            title_text: theme.header_text,
            caret: blend(theme.header_text, theme.card_background, 0.35),
            weekday_text: theme.weekday_text,
            nav_bg: theme.nav_background,
            nav_hover_bg: blend(theme.nav_background, theme.today_ring, 0.15),
            nav_icon: theme.nav_icon,
        }
    }
}
