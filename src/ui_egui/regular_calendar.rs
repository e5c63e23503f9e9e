//! Screen layout: the configured calendar cards side by side on a
//! centered canvas.

use egui::Vec2;

use super::calendar_card::CalendarCard;
use crate::models::settings::Settings;

/// Horizontal space between two cards
const CARD_GAP: f32 = 24.0;

pub struct RegularCalendar {
    cards: Vec<CalendarCard>,
}

impl RegularCalendar {
    pub fn from_settings(settings: &Settings) -> Self {
        let cards = settings
            .cards
            .iter()
            .cloned()
            .map(CalendarCard::new)
            .collect();
        Self { cards }
    }

    pub fn cards(&self) -> &[CalendarCard] {
        &self.cards
    }

    pub fn cards_mut(&mut self) -> &mut [CalendarCard] {
        &mut self.cards
    }

    /// Size of the row of cards
    pub fn content_size(&self) -> Vec2 {
        let card = CalendarCard::outer_size();
        let count = self.cards.len() as f32;
        let gaps = (count - 1.0).max(0.0) * CARD_GAP;
        Vec2::new(card.x * count + gaps, card.y)
    }

    /// Draw the cards and return their responses, left to right.
    pub fn show(&mut self, ui: &mut egui::Ui) -> Vec<egui::Response> {
        let content = self.content_size();
        let mut responses = Vec::with_capacity(self.cards.len());

        egui::ScrollArea::both()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                let available = ui.available_size();
                let margin = ((available - content) / 2.0).max(Vec2::ZERO);

                ui.add_space(margin.y);
                ui.horizontal(|ui| {
                    ui.add_space(margin.x);
                    ui.spacing_mut().item_spacing.x = CARD_GAP;
                    for (idx, card) in self.cards.iter_mut().enumerate() {
                        let response = ui
                            .push_id(("calendar_card", idx), |ui| card.show(ui))
                            .inner;
                        responses.push(response);
                    }
                });
            });

        responses
    }
}
