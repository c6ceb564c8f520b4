//! Central slice viewport rendering.
//!
//! A plot with a fixed 1:1 aspect draws the current slice texture in
//! volume index coordinates, so ROI drags and annotation positions read
//! directly as voxel indices. The panel background is the mode color and
//! shows through transparent voxels.

use eframe::egui;
use egui_plot::{Plot, PlotImage, PlotPoint, Points, Text};
use voxscope_core::annotation::{default_annotations, marker_color};

use crate::app::VoxscopeApp;

/// Click hit radius around an annotation marker, in plot units.
const MARKER_HIT_RADIUS: f64 = 5.0;

impl VoxscopeApp {
    /// Render the central viewport: slice image, ROI overlays, and
    /// annotation markers.
    pub(crate) fn render_slice_view(&mut self, ctx: &egui::Context) {
        self.ensure_texture(ctx);

        let frame = egui::Frame::none()
            .fill(self.mode.background())
            .inner_margin(egui::Margin::same(4.0));
        egui::CentralPanel::default().frame(frame).show(ctx, |ui| {
            if !self.session.is_loaded() {
                ui.centered_and_justified(|ui| {
                    ui.label(
                        egui::RichText::new("No volume loaded")
                            .size(14.0)
                            .color(egui::Color32::from_gray(40)),
                    );
                });
                return;
            }

            // Everything the plot closure needs, resolved up front so the
            // closure only touches disjoint fields of self.
            let texture = self.texture.clone();
            let placement = self
                .session
                .volume()
                .map(|volume| image_placement(volume.extent()));
            let committed_rect = self.session.roi().map(|roi| {
                let [x, y, _] = roi.axes();
                (
                    [f64::from(x[0]), f64::from(y[0])],
                    [f64::from(x[1]) + 1.0, f64::from(y[1]) + 1.0],
                )
            });
            let armed = self.roi_select.armed;
            let labels = self.ui_state.labels_visible && self.mode.controls().labels;
            let slice_z = self.slice_index;

            let mut finished = None;
            let mut clicked = None;

            Plot::new("slice_view")
                .data_aspect(1.0)
                .allow_drag(!armed)
                .allow_boxed_zoom(!armed)
                .show_axes([false, false])
                .show_grid(false)
                .show(ui, |plot_ui| {
                    if let (Some(texture), Some((center, size))) = (&texture, placement) {
                        plot_ui.image(PlotImage::new(texture, center, size));
                    }
                    if let Some((min, max)) = committed_rect {
                        crate::viewer::draw_rect(plot_ui, min, max, egui::Color32::YELLOW);
                    }
                    self.roi_select.draw_draft(plot_ui);

                    if labels {
                        draw_annotations(plot_ui, slice_z);
                    }

                    let response = plot_ui.response().clone();
                    if armed {
                        if response.drag_started() {
                            if let Some(pointer) = plot_ui.pointer_coordinate() {
                                self.roi_select.begin(pointer);
                            }
                        } else if response.dragged() {
                            if let Some(pointer) = plot_ui.pointer_coordinate() {
                                self.roi_select.update(pointer);
                            }
                        }
                        if response.drag_stopped() {
                            finished = self.roi_select.take_finished();
                        }
                    } else if labels && response.clicked() {
                        if let Some(pointer) = plot_ui.pointer_coordinate() {
                            clicked = annotation_at(pointer);
                        }
                    }
                });

            if let Some(draft) = finished {
                self.commit_roi(draft);
            }
            if clicked.is_some() {
                self.ui_state.description_target = clicked;
            }
        });
    }
}

/// Center and size of the slice image in plot coordinates, spanning the
/// volume's XY extent.
fn image_placement(extent: [[i32; 2]; 3]) -> (PlotPoint, egui::Vec2) {
    let [x, y, _] = extent;
    let width = f64::from(x[1] - x[0]) + 1.0;
    let height = f64::from(y[1] - y[0]) + 1.0;
    let center = PlotPoint::new(
        f64::from(x[0]) + width / 2.0,
        f64::from(y[0]) + height / 2.0,
    );
    #[allow(clippy::cast_possible_truncation)]
    let size = egui::vec2(width as f32, height as f32);
    (center, size)
}

/// Draw a marker and name for every annotation. Markers on the current
/// slice plane render solid; the rest are dimmed.
fn draw_annotations(plot_ui: &mut egui_plot::PlotUi, slice_z: i32) {
    for (index, annotation) in default_annotations().iter().enumerate() {
        let [r, g, b] = marker_color(index);
        let on_plane = (annotation.position[2] - f64::from(slice_z)).abs() < 0.5;
        let alpha = if on_plane { 255 } else { 96 };
        let color = egui::Color32::from_rgba_unmultiplied(r, g, b, alpha);

        let [x, y, _] = annotation.position;
        plot_ui.points(
            Points::new(vec![[x, y]])
                .radius(4.0)
                .color(color)
                .highlight(on_plane),
        );
        plot_ui.text(
            Text::new(
                PlotPoint::new(x, y + 6.0),
                egui::RichText::new(annotation.name).color(color).strong(),
            )
            .name(annotation.name),
        );
    }
}

/// Annotation index whose marker lies within the hit radius of `pointer`.
fn annotation_at(pointer: PlotPoint) -> Option<usize> {
    default_annotations().iter().position(|annotation| {
        let dx = annotation.position[0] - pointer.x;
        let dy = annotation.position[1] - pointer.y;
        (dx * dx + dy * dy).sqrt() <= MARKER_HIT_RADIUS
    })
}
