use egui::RichText;

use crate::gui::styles;

pub struct Header;

impl Header {
    /// Returns true when the lookup code button was clicked
    pub fn show(ui: &mut egui::Ui, count: usize) -> bool {
        let mut show_code = false;

        ui.horizontal(|ui| {
            ui.heading(
                RichText::new("Roblox Game List")
                    .size(22.0)
                    .strong()
                    .color(egui::Color32::WHITE),
            );
            ui.label(
                RichText::new(format!("{} game(s)", count))
                    .size(14.0)
                    .color(styles::TEXT_SECONDARY),
            );

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui
                    .button(RichText::new("Lookup code").size(14.0))
                    .clicked()
                {
                    show_code = true;
                }
            });
        });

        show_code
    }
}
