use egui::RichText;

use crate::gui::styles;

#[derive(Default)]
pub struct AddForm {
    id: String,
    name: String,
}

impl AddForm {
    /// Returns the entered id and name when the add button is clicked
    pub fn show(&mut self, ui: &mut egui::Ui) -> Option<(String, String)> {
        let mut submitted = None;

        ui.horizontal(|ui| {
            ui.label(RichText::new("Game ID").size(14.0));
            ui.add(
                egui::TextEdit::singleline(&mut self.id)
                    .hint_text("920587237")
                    .desired_width(140.0),
            );

            ui.add_space(10.0);

            ui.label(RichText::new("Name").size(14.0));
            let name_edit = ui.add(
                egui::TextEdit::singleline(&mut self.name)
                    .hint_text("Adopt Me!")
                    .desired_width(260.0),
            );
            let entered = name_edit.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

            ui.add_space(10.0);

            let add_button = egui::Button::new(
                RichText::new("Add game")
                    .size(14.0)
                    .strong()
                    .color(egui::Color32::WHITE),
            )
            .fill(styles::ACCENT);

            if ui.add(add_button).clicked() || entered {
                submitted = Some((self.id.clone(), self.name.clone()));
            }
        });

        submitted
    }

    pub fn clear(&mut self) {
        self.id.clear();
        self.name.clear();
    }
}
