use egui::{RichText, Vec2};

use crate::games::GameRow;
use crate::gui::styles;

pub struct GameRowCard;

impl GameRowCard {
    /// Returns true when the row's delete button was clicked
    pub fn show(ui: &mut egui::Ui, row: &GameRow) -> bool {
        let mut delete = false;

        egui::Frame::none()
            .fill(styles::ROW_BG)
            .stroke(egui::Stroke::new(1.0, styles::ROW_BORDER))
            .rounding(egui::Rounding::same(6.0))
            .inner_margin(egui::Margin::same(10.0))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.horizontal(|ui| {
                    ui.vertical(|ui| {
                        ui.label(
                            RichText::new(&row.name)
                                .size(16.0)
                                .strong()
                                .color(egui::Color32::WHITE),
                        );
                        ui.label(
                            RichText::new(format!("ID: {}  ·  added {}", row.id, row.added))
                                .size(12.0)
                                .color(styles::TEXT_SECONDARY),
                        );
                        if let Some(details) = &row.details {
                            ui.label(
                                RichText::new(details)
                                    .size(12.0)
                                    .color(styles::TEXT_SECONDARY),
                            );
                        }
                    });

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let delete_button =
                            egui::Button::new(RichText::new("Delete").size(13.0))
                                .fill(styles::DANGER)
                                .min_size(Vec2::new(80.0, 30.0));

                        if ui.add(delete_button).clicked() {
                            delete = true;
                        }
                    });
                });
            });

        delete
    }
}
