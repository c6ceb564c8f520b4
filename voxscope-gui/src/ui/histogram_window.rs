//! Intensity histogram window.
//!
//! Bars over 256 fixed-width bins spanning the volume's value range. The
//! whole-volume series always shows; when an ROI is committed its samples
//! are binned over the same range and overlaid, so the two series share an
//! intensity axis.

use eframe::egui;
use egui_plot::{Bar, BarChart, Plot};
use voxscope_core::histogram::{bin_256, DISPLAY_BINS};

use super::theme::accent;
use crate::app::VoxscopeApp;
use crate::util::{u64_to_f64, usize_to_f64};

impl VoxscopeApp {
    pub(crate) fn render_histogram_window(&mut self, ctx: &egui::Context) {
        if !self.ui_state.show_histogram {
            return;
        }

        let mut open = true;
        egui::Window::new("Histogram")
            .open(&mut open)
            .default_size([460.0, 320.0])
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label("Background:");
                    ui.radio_value(&mut self.ui_state.histogram_dark, false, "Light");
                    ui.radio_value(&mut self.ui_state.histogram_dark, true, "Dark");
                });
                ui.separator();

                let Some(volume) = self.session.volume() else {
                    ui.label("No data");
                    return;
                };
                let (lo, hi) = volume.value_range();
                let histogram = self.session.histogram();
                let whole = bar_chart(histogram.whole_samples(), lo, hi, accent::BLUE, "Volume");
                let roi = histogram
                    .roi_samples()
                    .map(|samples| bar_chart(samples, lo, hi, accent::RED, "ROI"));

                // egui_plot paints the plot background with
                // extreme_bg_color, so the toggle only swaps that.
                ui.visuals_mut().extreme_bg_color = if self.ui_state.histogram_dark {
                    egui::Color32::from_gray(0x16)
                } else {
                    egui::Color32::from_gray(0xf5)
                };

                Plot::new("histogram")
                    .allow_drag(false)
                    .allow_scroll(false)
                    .show(ui, |plot_ui| {
                        plot_ui.bar_chart(whole);
                        if let Some(roi) = roi {
                            plot_ui.bar_chart(roi);
                        }
                    });
            });
        self.ui_state.show_histogram = open;
    }
}

/// Bin `samples` into a bar series indexed by bin number.
fn bar_chart(samples: &[f32], lo: f32, hi: f32, color: egui::Color32, name: &str) -> BarChart {
    let counts = bin_256(samples, lo, hi);
    debug_assert_eq!(counts.len(), DISPLAY_BINS);

    let bars = counts
        .iter()
        .enumerate()
        .map(|(bin, &count)| Bar::new(usize_to_f64(bin), u64_to_f64(count)).width(1.0))
        .collect();
    BarChart::new(bars)
        .color(color.gamma_multiply(0.7))
        .name(name)
}
