//! One themed calendar panel: header with arrows and pickers, weekday
//! strip, and the 5x7 day grid.

use egui::{Align2, CursorIcon, FontId, Pos2, Rect, Rounding, Sense, Shape, Stroke, Vec2};

use super::nudge::ButtonNudge;
use super::palette::{CellFlags, CellPalette, HeaderPalette};
use super::theme::CalendarTheme;
use crate::models::card::{
    ActivationKey, CardConfig, CardInput, CardOutcome, CardState, InputSource, NavDirection,
    PickerKind,
};
use crate::models::day_grid::{DayGrid, DAYS_PER_WEEK, WEEKDAY_LABELS, WEEKS};
use crate::models::selection::SelectionChange;

/// Side of one day cell
const CELL_SIZE: f32 = 40.0;
/// Padding between the card edge and its content
const CARD_PADDING: f32 = 16.0;
const CARD_ROUNDING: f32 = 12.0;
/// Side of the prev/next buttons
const NAV_SIZE: f32 = 36.0;
const HEADER_GAP: f32 = 12.0;
const WEEKDAY_HEIGHT: f32 = 28.0;
const PICKER_GAP: f32 = 16.0;
const CARET_SIZE: f32 = 8.0;

const GRID_WIDTH: f32 = CELL_SIZE * DAYS_PER_WEEK as f32;
/// Distance from the top of the content to the first week row
const GRID_TOP: f32 = NAV_SIZE + HEADER_GAP + WEEKDAY_HEIGHT;
const CONTENT_HEIGHT: f32 = GRID_TOP + CELL_SIZE * WEEKS as f32;
/// Room left for the pickers between the two arrows
const PICKER_AREA_WIDTH: f32 = GRID_WIDTH - 2.0 * NAV_SIZE;

/// Map a pressed key to the day-cell activation it stands for.
pub fn activation_key_for(key: egui::Key) -> Option<ActivationKey> {
    match key {
        egui::Key::Enter => Some(ActivationKey::Enter),
        egui::Key::Space => Some(ActivationKey::Space),
        _ => None,
    }
}

fn pressed_activation_key(input: &egui::InputState) -> Option<ActivationKey> {
    [egui::Key::Enter, egui::Key::Space]
        .into_iter()
        .find(|key| input.key_pressed(*key))
        .and_then(activation_key_for)
}

/// Square occupied by cell `index` in a grid whose top-left corner is `origin`.
fn cell_rect_at(origin: Pos2, index: usize) -> Rect {
    let row = index / DAYS_PER_WEEK;
    let col = index % DAYS_PER_WEEK;
    Rect::from_min_size(
        origin + Vec2::new(CELL_SIZE * col as f32, CELL_SIZE * row as f32),
        Vec2::splat(CELL_SIZE),
    )
}

/// Place the pickers side by side, centered in `header` between the arrows.
///
/// When the labels are too wide the pickers shrink proportionally so they
/// never reach into the arrow buttons.
fn layout_pickers(header: Rect, widths: &[f32]) -> Vec<Rect> {
    let gaps = PICKER_GAP * widths.len().saturating_sub(1) as f32;
    let natural = widths.iter().sum::<f32>();
    let scale = if natural + gaps > PICKER_AREA_WIDTH && natural > 0.0 {
        ((PICKER_AREA_WIDTH - gaps).max(0.0) / natural).min(1.0)
    } else {
        1.0
    };

    let total = natural * scale + gaps;
    let mut x = header.center().x - total / 2.0;
    widths
        .iter()
        .map(|width| {
            let rect = Rect::from_min_size(
                Pos2::new(x, header.top()),
                Vec2::new(width * scale, header.height()),
            );
            x += width * scale + PICKER_GAP;
            rect
        })
        .collect()
}

pub struct CalendarCard {
    config: CardConfig,
    theme: CalendarTheme,
    state: CardState,
    nudge: Option<ButtonNudge>,
}

impl CalendarCard {
    /// Mount a card with a fresh selection.
    pub fn new(config: CardConfig) -> Self {
        Self::with_grid(config, DayGrid::april_2021())
    }

    pub fn with_grid(config: CardConfig, grid: DayGrid) -> Self {
        let mut theme = CalendarTheme::for_mode(config.theme);
        if let Some(ref accent) = config.accent {
            match CalendarTheme::hex_to_color(accent) {
                Ok(color) => theme = theme.with_accent(color),
                Err(e) => log::warn!("Ignoring accent '{}' for {}: {}", accent, config.theme.label(), e),
            }
        }

        log::debug!("Mounting {} ({})", config.theme.label(), config.grid_label());

        Self {
            config,
            theme,
            state: CardState::new(grid),
            nudge: None,
        }
    }

    /// Outer size of a card including padding
    pub fn outer_size() -> Vec2 {
        Vec2::new(GRID_WIDTH, CONTENT_HEIGHT) + Vec2::splat(CARD_PADDING * 2.0)
    }

    /// Screen rect of day cell `index` for a card drawn at `card_rect`
    /// (the rect of the response returned by [`show`](Self::show)).
    pub fn day_cell_rect(card_rect: Rect, index: usize) -> Option<Rect> {
        (index < DAYS_PER_WEEK * WEEKS).then(|| {
            let origin = card_rect.min + Vec2::new(CARD_PADDING, CARD_PADDING + GRID_TOP);
            cell_rect_at(origin, index)
        })
    }

    pub fn config(&self) -> &CardConfig {
        &self.config
    }

    pub fn theme(&self) -> &CalendarTheme {
        &self.theme
    }

    pub fn state(&self) -> &CardState {
        &self.state
    }

    pub fn selected(&self) -> Option<usize> {
        self.state.selection().selected()
    }

    pub fn nudge(&self) -> Option<ButtonNudge> {
        self.nudge
    }

    /// Feed one interaction to the card. `now` is the frame time in seconds.
    pub fn handle_input(&mut self, input: CardInput, now: f64) -> CardOutcome {
        let outcome = self.state.handle(input);

        match outcome {
            CardOutcome::Selection(SelectionChange::Selected(index)) => {
                log::debug!("{}: selected cell {}", self.config.theme.label(), index);
            }
            CardOutcome::Selection(SelectionChange::Cleared(index)) => {
                log::debug!("{}: cleared cell {}", self.config.theme.label(), index);
            }
            CardOutcome::Selection(SelectionChange::Ignored) => {
                log::debug!("{}: ignored {:?}", self.config.theme.label(), input);
            }
            CardOutcome::Nudge(direction) => {
                match direction {
                    NavDirection::Prev => log::info!("Prev month clicked"),
                    NavDirection::Next => log::info!("Next month clicked"),
                }
                self.nudge = Some(ButtonNudge::new(direction, now));
            }
            CardOutcome::None => {
                if let CardInput::OpenPicker(kind) = input {
                    log::debug!("{:?} picker has no options to show", kind);
                }
            }
        }

        outcome
    }

    pub fn show(&mut self, ui: &mut egui::Ui) -> egui::Response {
        let now = ui.input(|i| i.time);
        if self.nudge.is_some_and(|nudge| nudge.is_finished(now)) {
            self.nudge = None;
        }

        let header = HeaderPalette::from_theme(&self.theme);
        let cells = CellPalette::from_theme(&self.theme);
        let mut inputs = Vec::new();

        let response = egui::Frame::none()
            .fill(header.card_bg)
            .stroke(Stroke::new(1.0, header.card_border))
            .rounding(Rounding::same(CARD_ROUNDING))
            .inner_margin(egui::Margin::same(CARD_PADDING))
            .show(ui, |ui| {
                // Stack top to bottom even when the parent lays out in a row
                ui.vertical(|ui| {
                    ui.spacing_mut().item_spacing = Vec2::ZERO;
                    self.show_header(ui, &header, now, &mut inputs);
                    ui.add_space(HEADER_GAP);
                    Self::show_weekday_row(ui, &header);
                    self.show_weeks(ui, &cells, &mut inputs);
                });
            })
            .response;

        for input in inputs {
            self.handle_input(input, now);
        }

        if self.nudge.is_some() {
            ui.ctx().request_repaint();
        }

        response
    }

    fn show_header(
        &self,
        ui: &mut egui::Ui,
        palette: &HeaderPalette,
        now: f64,
        inputs: &mut Vec<CardInput>,
    ) {
        let (rect, _) = ui.allocate_exact_size(Vec2::new(GRID_WIDTH, NAV_SIZE), Sense::hover());

        let prev_rect = Rect::from_min_size(rect.left_top(), Vec2::splat(NAV_SIZE));
        let next_rect = Rect::from_min_size(
            Pos2::new(rect.right() - NAV_SIZE, rect.top()),
            Vec2::splat(NAV_SIZE),
        );

        for (direction, button_rect) in [
            (NavDirection::Prev, prev_rect),
            (NavDirection::Next, next_rect),
        ] {
            let response = ui
                .interact(button_rect, ui.id().with(("nav", direction as u8)), Sense::click())
                .on_hover_text(direction.label());
            let offset = self
                .nudge
                .filter(|nudge| nudge.direction == direction)
                .map_or(0.0, |nudge| nudge.offset_at(now));

            paint_nav_button(ui, button_rect, &response, direction, offset, palette);

            if response.clicked() {
                inputs.push(CardInput::Navigate(direction));
            }
        }

        // Month and year pickers, centered between the arrows
        let font = FontId::proportional(16.0);
        let pickers = [
            (PickerKind::Month, self.config.month_label.as_str(), "Select month"),
            (PickerKind::Year, self.config.year_label.as_str(), "Select year"),
        ];
        let widths: Vec<f32> = pickers
            .iter()
            .map(|(_, text, _)| {
                let text_width = ui.fonts(|f| {
                    f.layout_no_wrap(text.to_string(), font.clone(), palette.title_text)
                        .size()
                        .x
                });
                text_width + CARET_SIZE + 14.0
            })
            .collect();
        let rects = layout_pickers(rect, &widths);

        for ((kind, text, hint), picker_rect) in pickers.into_iter().zip(rects) {
            let response = ui
                .interact(picker_rect, ui.id().with(("picker", kind as u8)), Sense::click())
                .on_hover_text(hint);
            let painter = ui.painter_at(picker_rect);

            if response.hovered() || response.has_focus() {
                painter.rect_filled(picker_rect.shrink(2.0), Rounding::same(6.0), palette.nav_hover_bg);
                ui.ctx().set_cursor_icon(CursorIcon::PointingHand);
            }

            let mut text_clip = picker_rect;
            text_clip.max.x -= CARET_SIZE + 8.0;
            let text_pos = Pos2::new(picker_rect.left() + 4.0, picker_rect.center().y);
            painter.with_clip_rect(text_clip.intersect(painter.clip_rect())).text(
                text_pos,
                Align2::LEFT_CENTER,
                text,
                font.clone(),
                palette.title_text,
            );

            let caret_center = Pos2::new(
                picker_rect.right() - 4.0 - CARET_SIZE / 2.0,
                picker_rect.center().y,
            );
            paint_caret(&painter, caret_center, palette);

            if response.clicked() {
                inputs.push(CardInput::OpenPicker(kind));
            }
        }
    }

    fn show_weekday_row(ui: &mut egui::Ui, palette: &HeaderPalette) {
        let (rect, _) =
            ui.allocate_exact_size(Vec2::new(GRID_WIDTH, WEEKDAY_HEIGHT), Sense::hover());
        let painter = ui.painter();

        for (col, label) in WEEKDAY_LABELS.iter().enumerate() {
            let center = Pos2::new(
                rect.left() + CELL_SIZE * (col as f32 + 0.5),
                rect.center().y,
            );
            painter.text(
                center,
                Align2::CENTER_CENTER,
                label,
                FontId::proportional(12.0),
                palette.weekday_text,
            );
        }
    }

    fn show_weeks(&self, ui: &mut egui::Ui, palette: &CellPalette, inputs: &mut Vec<CardInput>) {
        let grid = self.state.grid();
        let rows = grid.len().div_ceil(DAYS_PER_WEEK);
        let (rect, _) = ui.allocate_exact_size(
            Vec2::new(GRID_WIDTH, CELL_SIZE * rows as f32),
            Sense::hover(),
        );
        let grid_id = ui.id().with(self.config.grid_label());

        for (index, cell) in grid.cells().iter().enumerate() {
            let cell_rect = cell_rect_at(rect.min, index);

            // Disabled cells cannot take focus or clicks
            let sense = if cell.disabled {
                Sense::hover()
            } else {
                Sense::click()
            };
            let response = ui.interact(cell_rect, grid_id.with(index), sense);

            let flags = CellFlags {
                disabled: cell.disabled,
                today: cell.today,
                selected: self.state.selection().is_selected(index),
                hovered: response.hovered(),
                focused: response.has_focus(),
            };
            paint_day_cell(ui.painter(), cell_rect, cell.number, palette, flags);

            if cell.disabled {
                continue;
            }
            if response.hovered() {
                ui.ctx().set_cursor_icon(CursorIcon::PointingHand);
            }

            let key = if response.has_focus() {
                ui.input(pressed_activation_key)
            } else {
                None
            };
            if response.clicked() || key.is_some() {
                let source = key.map_or(InputSource::Pointer, InputSource::Keyboard);
                inputs.push(CardInput::Activate { index, source });
            }
        }
    }
}

fn paint_nav_button(
    ui: &egui::Ui,
    rect: Rect,
    response: &egui::Response,
    direction: NavDirection,
    offset: f32,
    palette: &HeaderPalette,
) {
    let rect = rect.translate(Vec2::new(offset, 0.0));
    let painter = ui.painter();
    let fill = if response.hovered() {
        ui.ctx().set_cursor_icon(CursorIcon::PointingHand);
        palette.nav_hover_bg
    } else {
        palette.nav_bg
    };
    painter.rect_filled(rect, Rounding::same(NAV_SIZE / 2.0), fill);
    if response.has_focus() {
        painter.rect_stroke(
            rect,
            Rounding::same(NAV_SIZE / 2.0),
            Stroke::new(1.5, palette.nav_icon),
        );
    }

    let c = rect.center();
    let dx = match direction {
        NavDirection::Prev => 3.0,
        NavDirection::Next => -3.0,
    };
    let tip = Pos2::new(c.x - dx, c.y);
    let stroke = Stroke::new(2.0, palette.nav_icon);
    painter.line_segment([Pos2::new(c.x + dx, c.y - 6.0), tip], stroke);
    painter.line_segment([tip, Pos2::new(c.x + dx, c.y + 6.0)], stroke);
}

fn paint_caret(painter: &egui::Painter, center: Pos2, palette: &HeaderPalette) {
    let half = CARET_SIZE / 2.0;
    let points = vec![
        Pos2::new(center.x - half, center.y - half / 2.0),
        Pos2::new(center.x + half, center.y - half / 2.0),
        Pos2::new(center.x, center.y + half / 2.0),
    ];
    painter.add(Shape::convex_polygon(points, palette.caret, Stroke::NONE));
}

fn paint_day_cell(
    painter: &egui::Painter,
    rect: Rect,
    number: u32,
    palette: &CellPalette,
    flags: CellFlags,
) {
    let colors = palette.resolve(flags);
    let center = rect.center();
    let radius = CELL_SIZE / 2.0 - 3.0;

    if let Some(fill) = colors.fill {
        painter.circle_filled(center, radius, fill);
    }
    if let Some(overlay) = colors.overlay {
        painter.circle_filled(center, radius, overlay);
    }
    if let Some(ring) = colors.ring {
        painter.circle_stroke(center, radius, Stroke::new(1.5, ring));
    }

    painter.text(
        center,
        Align2::CENTER_CENTER,
        number.to_string(),
        FontId::proportional(14.0),
        colors.text,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::card::ThemeMode;
    use crate::models::day_grid::CELL_COUNT;
    use test_case::test_case;

    fn click(index: usize) -> CardInput {
        CardInput::Activate {
            index,
            source: InputSource::Pointer,
        }
    }

    #[test_case(egui::Key::Enter, Some(ActivationKey::Enter))]
    #[test_case(egui::Key::Space, Some(ActivationKey::Space))]
    #[test_case(egui::Key::Tab, None)]
    #[test_case(egui::Key::A, None)]
    fn test_activation_keys(key: egui::Key, expected: Option<ActivationKey>) {
        assert_eq!(activation_key_for(key), expected);
    }

    #[test]
    fn test_new_card_has_no_selection() {
        let card = CalendarCard::new(CardConfig::with_theme(ThemeMode::Dark));
        assert_eq!(card.selected(), None);
        assert!(card.theme().is_dark);
        assert_eq!(card.state().grid().len(), CELL_COUNT);
    }

    #[test]
    fn test_click_toggles_selection() {
        let mut card = CalendarCard::new(CardConfig::default());
        card.handle_input(click(4), 0.0);
        assert_eq!(card.selected(), Some(4));
        card.handle_input(click(4), 0.1);
        assert_eq!(card.selected(), None);
    }

    #[test]
    fn test_disabled_click_ignored() {
        let mut card = CalendarCard::new(CardConfig::default());
        let outcome = card.handle_input(click(1), 0.0);
        assert_eq!(outcome, CardOutcome::Selection(SelectionChange::Ignored));
        assert_eq!(card.selected(), None);
    }

    #[test]
    fn test_navigation_starts_nudge() {
        let mut card = CalendarCard::new(CardConfig::default());
        card.handle_input(click(20), 0.0);
        card.handle_input(CardInput::Navigate(NavDirection::Next), 3.0);

        let nudge = card.nudge().unwrap();
        assert_eq!(nudge.direction, NavDirection::Next);
        assert_eq!(nudge.started_at, 3.0);
        assert_eq!(card.selected(), Some(20));
    }

    #[test]
    fn test_bad_accent_keeps_theme() {
        let config = CardConfig {
            accent: Some("not-a-color".to_string()),
            ..CardConfig::default()
        };
        let card = CalendarCard::new(config);
        assert_eq!(card.theme(), &CalendarTheme::light());
    }

    #[test]
    fn test_accent_applied() {
        let config = CardConfig {
            accent: Some("#DC2626".to_string()),
            ..CardConfig::default()
        };
        let card = CalendarCard::new(config);
        assert_eq!(card.theme().today_ring, egui::Color32::from_rgb(220, 38, 38));
    }

    #[test]
    fn test_pickers_keep_natural_width_when_they_fit() {
        let header = Rect::from_min_size(Pos2::ZERO, Vec2::new(GRID_WIDTH, NAV_SIZE));
        let rects = layout_pickers(header, &[60.0, 50.0]);

        assert_eq!(rects[0].width(), 60.0);
        assert_eq!(rects[1].width(), 50.0);
        assert_eq!(rects[1].left() - rects[0].right(), PICKER_GAP);
        let mid = (rects[0].left() + rects[1].right()) / 2.0;
        assert!((mid - header.center().x).abs() < 1e-3);
    }

    #[test]
    fn test_long_pickers_stay_between_arrows() {
        let header = Rect::from_min_size(Pos2::new(100.0, 50.0), Vec2::new(GRID_WIDTH, NAV_SIZE));
        let rects = layout_pickers(header, &[400.0, 90.0]);

        assert!(rects[0].left() >= header.left() + NAV_SIZE - 1e-3);
        assert!(rects[1].right() <= header.right() - NAV_SIZE + 1e-3);
        assert!(rects[0].right() < rects[1].left());
    }

    #[test]
    fn test_day_cell_rect() {
        let card = Rect::from_min_size(Pos2::new(10.0, 20.0), CalendarCard::outer_size());
        let first = CalendarCard::day_cell_rect(card, 0).unwrap();
        assert_eq!(first.min, Pos2::new(10.0 + CARD_PADDING, 20.0 + CARD_PADDING + GRID_TOP));

        let last = CalendarCard::day_cell_rect(card, 34).unwrap();
        assert_eq!(last.max, card.max - Vec2::splat(CARD_PADDING));
        assert_eq!(CalendarCard::day_cell_rect(card, 35), None);
    }

    #[test]
    fn test_outer_size() {
        let size = CalendarCard::outer_size();
        assert_eq!(size.x, 7.0 * CELL_SIZE + 2.0 * CARD_PADDING);
        assert_eq!(size.y, CONTENT_HEIGHT + 2.0 * CARD_PADDING);
    }
}
