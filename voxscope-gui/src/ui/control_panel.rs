//! Control panel (left sidebar) rendering.

use eframe::egui;
use rfd::FileDialog;
use voxscope_core::annotation::{default_annotations, marker_color};
use voxscope_core::transfer::ColorPreset;

use super::theme::{accent, form_label, section_header};
use crate::app::VoxscopeApp;
use crate::state::Mode;

impl VoxscopeApp {
    /// Render the left sidebar: dataset controls, mode selector, and the
    /// controls granted by the current mode's visibility table.
    pub(crate) fn render_control_panel(&mut self, ctx: &egui::Context) {
        egui::SidePanel::left("controls")
            .exact_width(250.0)
            .show(ctx, |ui| {
                ui.add_space(8.0);
                ui.label(
                    egui::RichText::new("VOXSCOPE")
                        .size(14.0)
                        .strong()
                        .color(accent::BLUE),
                );
                ui.separator();

                self.render_dataset_controls(ui);
                ui.separator();
                self.render_mode_selector(ui);

                let controls = self.mode.controls();
                if controls.slice || controls.color {
                    ui.separator();
                    self.render_view_controls(ui, controls.slice, controls.color);
                }
                if controls.roi {
                    ui.separator();
                    self.render_roi_controls(ui);
                }
                if controls.histogram && ui.button("Show histogram").clicked() {
                    self.request_histogram();
                }
                if controls.labels && ui.button("Toggle labels").clicked() {
                    self.toggle_labels();
                }
                if controls.legend {
                    ui.separator();
                    self.render_legend(ui);
                }
            });
    }

    fn render_dataset_controls(&mut self, ui: &mut egui::Ui) {
        ui.label(section_header("Dataset"));
        ui.add_space(4.0);

        if ui.button("Load data").clicked() {
            if let Some(path) = FileDialog::new()
                .add_filter("VTK image data", &["vti"])
                .pick_file()
            {
                self.open_volume(&path);
            }
        }
        if ui
            .add_enabled(self.session.is_loaded(), egui::Button::new("Unload data"))
            .clicked()
        {
            self.close_volume();
        }
    }

    fn render_mode_selector(&mut self, ui: &mut egui::Ui) {
        ui.label(form_label("Mode"));
        ui.add_space(4.0);

        let mut selected = self.mode;
        egui::ComboBox::from_id_salt("mode_select")
            .selected_text(selected.to_string())
            .width(ui.available_width() - 8.0)
            .show_ui(ui, |ui| {
                for mode in Mode::ALL {
                    ui.selectable_value(&mut selected, mode, mode.to_string());
                }
            });
        self.set_mode(selected);
    }

    fn render_view_controls(&mut self, ui: &mut egui::Ui, slice: bool, color: bool) {
        if slice {
            ui.label(form_label("Slice"));
            let [z0, z1] = self
                .session
                .volume()
                .map_or([0, 0], |volume| volume.z_extent());
            let mut index = self.slice_index;
            ui.add_enabled_ui(self.session.is_loaded(), |ui| {
                if ui
                    .add(egui::Slider::new(&mut index, z0..=z1).text("Z"))
                    .changed()
                {
                    self.set_slice_index(index);
                }
            });
            ui.add_space(8.0);
        }

        if color {
            ui.label(form_label("Color scheme"));
            ui.add_space(4.0);
            let mut preset = self.preset;
            egui::ComboBox::from_id_salt("preset_select")
                .selected_text(preset.to_string())
                .width(ui.available_width() - 8.0)
                .show_ui(ui, |ui| {
                    for candidate in ColorPreset::ALL {
                        ui.selectable_value(&mut preset, candidate, candidate.to_string());
                    }
                });
            self.set_color_preset(preset);
        }
    }

    fn render_roi_controls(&mut self, ui: &mut egui::Ui) {
        ui.label(section_header("Region of interest"));
        ui.add_space(4.0);

        let label = if self.roi_select.armed {
            "Disable ROI"
        } else {
            "Mark ROI"
        };
        if ui.button(label).clicked() {
            self.toggle_roi();
        }

        if self.roi_select.armed {
            let [z0, z1] = self
                .session
                .volume()
                .map_or([0, 0], |volume| volume.z_extent());
            ui.label(form_label("Z span"));
            ui.add(egui::Slider::new(&mut self.roi_z_range[0], z0..=z1).text("from"));
            ui.add(egui::Slider::new(&mut self.roi_z_range[1], z0..=z1).text("to"));
            ui.label(
                egui::RichText::new("Drag a rectangle on the slice to select.")
                    .small()
                    .weak(),
            );
        }
    }

    /// Open the histogram window for the whole volume, guarding the
    /// precondition that a volume is loaded.
    fn request_histogram(&mut self) {
        if self.session.is_loaded() {
            self.ui_state.show_histogram = true;
        } else {
            self.ui_state.notify(
                crate::state::Severity::Info,
                "No volume loaded",
                "Load a volume before viewing its histogram.",
            );
        }
    }

    fn render_legend(&mut self, ui: &mut egui::Ui) {
        let toggle = if self.ui_state.legend_visible {
            "Hide legend"
        } else {
            "Show legend"
        };
        if ui.button(toggle).clicked() {
            self.ui_state.legend_visible = !self.ui_state.legend_visible;
        }
        if !self.ui_state.legend_visible {
            return;
        }

        for (index, annotation) in default_annotations().iter().enumerate() {
            ui.horizontal(|ui| {
                let [r, g, b] = marker_color(index);
                let (rect, _) =
                    ui.allocate_exact_size(egui::vec2(10.0, 10.0), egui::Sense::hover());
                ui.painter()
                    .rect_filled(rect, 2.0, egui::Color32::from_rgb(r, g, b));
                if ui.link(annotation.name).clicked() {
                    self.ui_state.description_target = Some(index);
                }
            });
        }
    }
}
