use egui::RichText;
use std::time::{Duration, Instant};

use crate::gui::styles;

const STATUS_TTL: Duration = Duration::from_secs(4);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    Error,
}

/// Transient banner text
#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub kind: StatusKind,
    shown_at: Instant,
}

impl StatusMessage {
    pub fn success(text: impl Into<String>) -> Self {
        Self::new(text.into(), StatusKind::Success)
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::new(text.into(), StatusKind::Error)
    }

    fn new(text: String, kind: StatusKind) -> Self {
        Self {
            text,
            kind,
            shown_at: Instant::now(),
        }
    }

    pub fn is_expired(&self) -> bool {
        self.shown_at.elapsed() >= STATUS_TTL
    }
}

pub struct StatusBar;

impl StatusBar {
    pub fn show(ui: &mut egui::Ui, message: &StatusMessage, on_clear: &mut bool) {
        ui.horizontal(|ui| {
            let color = match message.kind {
                StatusKind::Success => styles::SUCCESS_GREEN,
                StatusKind::Error => styles::ERROR_RED,
            };
            ui.label(RichText::new(&message.text).size(13.0).color(color));
            if ui.button(RichText::new("Clear").size(12.0)).clicked() {
                *on_clear = true;
            }
        });
    }
}
