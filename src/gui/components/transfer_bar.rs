use egui::RichText;

pub enum TransferAction {
    Export,
    Import,
}

pub struct TransferBar;

impl TransferBar {
    pub fn show(ui: &mut egui::Ui, path: &mut String) -> Option<TransferAction> {
        let mut action = None;

        ui.horizontal(|ui| {
            ui.label(RichText::new("File").size(14.0));
            ui.add(
                egui::TextEdit::singleline(path)
                    .hint_text("roblox_games.json (blank = export directory)")
                    .desired_width(320.0),
            );

            if ui.button(RichText::new("Export JSON").size(14.0)).clicked() {
                action = Some(TransferAction::Export);
            }
            if ui.button(RichText::new("Import JSON").size(14.0)).clicked() {
                action = Some(TransferAction::Import);
            }
        });

        action
    }
}
