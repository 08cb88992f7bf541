use egui::{Color32, RichText, ScrollArea};

use super::components::GameRowCard;
use crate::games::{GameId, GameListView};

#[derive(Default)]
pub struct ListView {
    search_query: String,
}

pub enum ListAction {
    Delete(GameId),
}

impl ListView {
    pub fn ui(&mut self, ui: &mut egui::Ui, view: &GameListView) -> Option<ListAction> {
        let mut action = None;

        ui.horizontal(|ui| {
            ui.heading(RichText::new("My games").size(20.0).strong());
            ui.add_space(20.0);
            ui.add(
                egui::TextEdit::singleline(&mut self.search_query)
                    .hint_text("Search by name or id...")
                    .desired_width(250.0),
            );
        });

        ui.add_space(10.0);

        let rows = view.matching(&self.search_query);

        ScrollArea::vertical().show(ui, |ui| {
            if rows.is_empty() {
                ui.vertical_centered(|ui| {
                    ui.add_space(80.0);
                    ui.label(
                        RichText::new("No games found")
                            .size(18.0)
                            .color(Color32::GRAY),
                    );
                    if view.count == 0 {
                        ui.label(
                            RichText::new("Add a game above or import a JSON file")
                                .color(Color32::GRAY),
                        );
                    }
                });
                return;
            }

            for row in rows {
                if GameRowCard::show(ui, row) {
                    action = Some(ListAction::Delete(row.game_id.clone()));
                }
                ui.add_space(6.0);
            }
        });

        action
    }
}
