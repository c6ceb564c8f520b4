//! Modal notices and annotation description popups.

use eframe::egui;
use voxscope_core::annotation::default_annotations;

use super::theme::accent;
use crate::app::VoxscopeApp;
use crate::state::Severity;

impl VoxscopeApp {
    /// Render the pending notice, if any. One notice at a time; OK clears
    /// it.
    pub(crate) fn render_notice(&mut self, ctx: &egui::Context) {
        let Some(notice) = self.ui_state.notice.clone() else {
            return;
        };

        let tint = match notice.severity {
            Severity::Info => accent::BLUE,
            Severity::Warning => accent::AMBER,
            Severity::Error => accent::RED,
        };
        let mut dismissed = false;
        egui::Window::new(egui::RichText::new(&notice.title).color(tint).strong())
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .show(ctx, |ui| {
                ui.label(&notice.text);
                ui.add_space(8.0);
                ui.vertical_centered(|ui| {
                    if ui.button("OK").clicked() {
                        dismissed = true;
                    }
                });
            });
        if dismissed {
            self.ui_state.notice = None;
        }
    }

    /// Render the description popup for the selected annotation.
    pub(crate) fn render_description_popup(&mut self, ctx: &egui::Context) {
        let Some(index) = self.ui_state.description_target else {
            return;
        };
        let Some(annotation) = default_annotations().get(index) else {
            self.ui_state.description_target = None;
            return;
        };

        let mut open = true;
        let mut dismissed = false;
        egui::Window::new(annotation.name)
            .id(egui::Id::new("annotation_description"))
            .open(&mut open)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .show(ctx, |ui| {
                ui.label(annotation.description);
                ui.add_space(8.0);
                ui.vertical_centered(|ui| {
                    if ui.button("OK").clicked() {
                        dismissed = true;
                    }
                });
            });
        if dismissed || !open {
            self.ui_state.description_target = None;
        }
    }
}
