use eframe::egui;
use std::path::PathBuf;
use std::time::Duration;

use crate::games::{GameId, GameManager};
use crate::storage::FileStorage;

use super::components::{AddForm, Header, StatusBar, StatusMessage, TransferAction, TransferBar};
use super::list_view::{ListAction, ListView};
use super::styles;

pub struct GameListApp {
    manager: GameManager<FileStorage>,
    export_dir: PathBuf,
    add_form: AddForm,
    list_view: ListView,
    transfer_path: String,
    lookup_code: Option<String>,
    status: Option<StatusMessage>,
}

impl GameListApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        manager: GameManager<FileStorage>,
        export_dir: PathBuf,
    ) -> Self {
        styles::setup_custom_style(&cc.egui_ctx);

        Self {
            manager,
            export_dir,
            add_form: AddForm::default(),
            list_view: ListView::default(),
            transfer_path: String::new(),
            lookup_code: None,
            status: None,
        }
    }

    fn handle_add(&mut self, id: String, name: String) {
        let result = self.manager.add(&id, &name).map(|game| game.name.clone());

        match result {
            Ok(name) => {
                self.status = Some(StatusMessage::success(format!("Game \"{}\" added", name)));
                self.add_form.clear();
            }
            Err(e) => self.status = Some(StatusMessage::error(e.to_string())),
        }
    }

    fn handle_delete(&mut self, id: GameId) {
        self.status = Some(match self.manager.delete(&id) {
            Ok(Some(removed)) => StatusMessage::success(format!("Game \"{}\" deleted", removed.name)),
            Ok(None) => StatusMessage::error(format!("No game with id {}", id)),
            Err(e) => StatusMessage::error(format!("Failed to delete game: {}", e)),
        });
    }

    fn handle_export(&mut self) {
        let path = match self.transfer_path.trim() {
            "" => self.export_dir.clone(),
            path => PathBuf::from(path),
        };

        self.status = Some(match self.manager.export_to_file(&path) {
            Ok(written) => StatusMessage::success(format!("Exported to {}", written.display())),
            Err(e) => StatusMessage::error(format!("Export failed: {}", e)),
        });
    }

    fn handle_import(&mut self) {
        let path = self.transfer_path.trim();
        if path.is_empty() {
            self.status = Some(StatusMessage::error("Enter the path of a JSON file to import"));
            return;
        }

        let result = self.manager.import_from_file(&PathBuf::from(path));
        self.status = Some(match result {
            Ok(summary) => StatusMessage::success(format!(
                "Imported {} game(s), skipped {} duplicate(s)",
                summary.added, summary.skipped
            )),
            Err(e) => StatusMessage::error(format!("Import failed: {}", e)),
        });
    }
}

impl eframe::App for GameListApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.status.as_ref().is_some_and(|s| s.is_expired()) {
            self.status = None;
        }

        let view = self.manager.view();

        let mut show_code = false;
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            show_code = Header::show(ui, view.count);
        });
        if show_code {
            self.lookup_code = Some(self.manager.generate_lookup_code());
        }

        let mut transfer = None;
        let mut clear_status = false;
        egui::TopBottomPanel::bottom("bottom_panel").show(ctx, |ui| {
            ui.add_space(4.0);
            transfer = TransferBar::show(ui, &mut self.transfer_path);
            if let Some(status) = &self.status {
                ui.separator();
                StatusBar::show(ui, status, &mut clear_status);
            }
            ui.add_space(4.0);
        });
        if clear_status {
            self.status = None;
        }
        match transfer {
            Some(TransferAction::Export) => self.handle_export(),
            Some(TransferAction::Import) => self.handle_import(),
            None => {}
        }

        let mut submitted = None;
        let mut list_action = None;
        egui::CentralPanel::default().show(ctx, |ui| {
            submitted = self.add_form.show(ui);
            ui.separator();
            ui.add_space(10.0);
            list_action = self.list_view.ui(ui, &view);
        });
        if let Some((id, name)) = submitted {
            self.handle_add(id, name);
        }
        if let Some(ListAction::Delete(id)) = list_action {
            self.handle_delete(id);
        }

        if let Some(code) = &self.lookup_code {
            let mut open = true;
            let mut copied = false;
            egui::Window::new("Lookup code")
                .open(&mut open)
                .default_width(520.0)
                .show(ctx, |ui| {
                    egui::ScrollArea::vertical().max_height(420.0).show(ui, |ui| {
                        ui.add(
                            egui::TextEdit::multiline(&mut code.as_str())
                                .code_editor()
                                .desired_width(f32::INFINITY),
                        );
                    });
                    if ui.button("Copy").clicked() {
                        ui.ctx().copy_text(code.clone());
                        copied = true;
                    }
                });
            if copied {
                self.status = Some(StatusMessage::success("Lookup code copied to clipboard"));
            }
            if !open {
                self.lookup_code = None;
            }
        }

        ctx.request_repaint_after(Duration::from_millis(250));
    }
}
