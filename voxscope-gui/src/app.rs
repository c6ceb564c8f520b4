//! Main application state and logic.
//!
//! `VoxscopeApp` owns the session, the selected mode and view options, and
//! dispatches every user action to the session's transition functions. All
//! work happens synchronously on the UI thread; a "redraw" is invalidating
//! the cached slice texture so the next frame regenerates it.

use std::path::Path;

use eframe::egui;
use voxscope_core::loader;
use voxscope_core::roi::RoiBounds;
use voxscope_core::transfer::ColorPreset;
use voxscope_core::{Error, Session};

use crate::state::{Mode, Severity, UiState};
use crate::viewer::{slice_image, RoiDraft, RoiSelect};

/// Main application state.
pub struct VoxscopeApp {
    /// Volume lifecycle and derived data, the single owner of loaded state.
    pub(crate) session: Session,

    /// Selected user role.
    pub(crate) mode: Mode,
    /// Selected color preset.
    pub(crate) preset: ColorPreset,
    /// Current slice index along Z, in extent coordinates.
    pub(crate) slice_index: i32,
    /// Inclusive Z span for the next ROI commit.
    pub(crate) roi_z_range: [i32; 2],

    /// ROI selection tool state.
    pub(crate) roi_select: RoiSelect,
    /// Dialog and toggle state.
    pub(crate) ui_state: UiState,

    /// Cached slice texture; `None` forces regeneration next frame.
    pub(crate) texture: Option<egui::TextureHandle>,
}

impl Default for VoxscopeApp {
    fn default() -> Self {
        Self {
            session: Session::default(),
            mode: Mode::default(),
            preset: ColorPreset::default(),
            slice_index: 0,
            roi_z_range: [0, 0],
            roi_select: RoiSelect::default(),
            ui_state: UiState::default(),
            texture: None,
        }
    }
}

impl VoxscopeApp {
    /// Load a volume file and install it, replacing any loaded one.
    ///
    /// On failure the prior state is untouched and an error dialog is
    /// queued.
    pub fn open_volume(&mut self, path: &Path) {
        match loader::load_vti(path) {
            Ok(volume) => {
                self.roi_select.disarm();
                self.session.load(volume);
                self.reset_view();
                log::info!("volume installed from {}", path.display());
            }
            Err(err) => {
                log::warn!("load failed for {}: {err}", path.display());
                self.ui_state
                    .notify(Severity::Error, "Load failed", err.to_string());
            }
        }
    }

    /// Unload the volume and return the scene to its never-loaded state.
    /// Always succeeds, even when nothing is loaded.
    pub fn close_volume(&mut self) {
        self.roi_select.disarm();
        self.session.unload();
        self.slice_index = 0;
        self.roi_z_range = [0, 0];
        self.ui_state.show_histogram = false;
        self.texture = None;
    }

    /// Reset slice and ROI ranges to the freshly loaded volume's extent.
    fn reset_view(&mut self) {
        if let Some(volume) = self.session.volume() {
            self.roi_z_range = volume.z_extent();
        }
        self.slice_index = self.session.default_slice_index().unwrap_or(0);
        self.texture = None;
    }

    /// Move the slice plane. No-op when no volume is loaded.
    pub fn set_slice_index(&mut self, index: i32) {
        let Some(volume) = self.session.volume() else {
            return;
        };
        let [z0, z1] = volume.z_extent();
        let clamped = index.clamp(z0, z1);
        if clamped != self.slice_index {
            self.slice_index = clamped;
            self.texture = None;
        }
    }

    /// Re-apply the transfer function for a preset. The preset choice is
    /// remembered even without a volume; the redraw is skipped then.
    pub fn set_color_preset(&mut self, preset: ColorPreset) {
        if self.preset != preset {
            self.preset = preset;
            if self.session.is_loaded() {
                self.texture = None;
            }
        }
    }

    /// Toggle the ROI selection tool.
    ///
    /// Arming without a volume is rejected with an informational dialog;
    /// disarming destroys the active ROI box and its samples.
    pub fn toggle_roi(&mut self) {
        if self.roi_select.armed {
            self.roi_select.disarm();
            self.session.clear_roi();
            return;
        }
        if !self.session.is_loaded() {
            self.ui_state.notify(
                Severity::Info,
                "No volume loaded",
                "Load a volume before selecting a region of interest.",
            );
            return;
        }
        self.roi_select.arm();
    }

    /// Commit a finished ROI drag: extract the sub-volume, store its
    /// samples, and open the histogram. Soft-fails on empty selections.
    pub fn commit_roi(&mut self, draft: RoiDraft) {
        let (min, max) = draft.corners();
        let Some(bounds) = RoiBounds::from_drag(min, max, self.roi_z_range) else {
            self.warn_empty_selection();
            return;
        };
        match self.session.set_roi(bounds) {
            Ok(count) => {
                log::debug!("roi committed with {count} samples");
                self.ui_state.show_histogram = true;
            }
            Err(Error::EmptySelection) => self.warn_empty_selection(),
            Err(err) => {
                self.ui_state
                    .notify(Severity::Info, "No volume loaded", err.to_string());
            }
        }
    }

    fn warn_empty_selection(&mut self) {
        self.ui_state.notify(
            Severity::Warning,
            "Empty selection",
            "Select a region that encloses voxel data.",
        );
    }

    /// Flip visibility of every annotation label and marker at once.
    pub fn toggle_labels(&mut self) {
        self.ui_state.labels_visible = !self.ui_state.labels_visible;
    }

    /// Switch the user role. Controls not granted by the new mode lose any
    /// live interaction state.
    pub fn set_mode(&mut self, mode: Mode) {
        if self.mode == mode {
            return;
        }
        self.mode = mode;
        let controls = mode.controls();
        if !controls.roi && self.roi_select.armed {
            self.roi_select.disarm();
            self.session.clear_roi();
        }
        if !controls.histogram {
            self.ui_state.show_histogram = false;
        }
        if !controls.legend {
            self.ui_state.legend_visible = false;
        }
    }

    /// Regenerate the slice texture if a redraw was requested.
    pub(crate) fn ensure_texture(&mut self, ctx: &egui::Context) {
        if self.texture.is_some() {
            return;
        }
        let Some(volume) = self.session.volume() else {
            return;
        };
        if let Some(image) = slice_image(volume, self.slice_index, self.preset) {
            self.texture = Some(ctx.load_texture("slice", image, egui::TextureOptions::NEAREST));
        }
    }
}

impl eframe::App for VoxscopeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.render_control_panel(ctx);
        self.render_slice_view(ctx);
        self.render_histogram_window(ctx);
        self.render_description_popup(ctx);
        self.render_notice(ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui_plot::PlotPoint;
    use ndarray::Array3;
    use voxscope_core::volume::VoxelVolume;

    fn app_with_cube(n: usize) -> VoxscopeApp {
        #[allow(clippy::cast_precision_loss)]
        let scalars = Array3::from_shape_fn((n, n, n), |(z, y, x)| (z * n * n + y * n + x) as f32);
        #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
        let hi = n as i32 - 1;
        let volume = VoxelVolume::new(scalars, [[0, hi], [0, hi], [0, hi]]).unwrap();

        let mut app = VoxscopeApp::default();
        app.session.load(volume);
        app.reset_view();
        app
    }

    #[test]
    fn close_volume_restores_never_loaded_state() {
        let mut app = app_with_cube(8);
        app.close_volume();
        assert!(!app.session.is_loaded());
        assert_eq!(app.slice_index, 0);
        assert!(app.texture.is_none());
        assert!(!app.ui_state.show_histogram);

        // Closing again stays a no-op.
        app.close_volume();
        assert!(!app.session.is_loaded());
    }

    #[test]
    fn slice_index_is_noop_without_volume() {
        let mut app = VoxscopeApp::default();
        app.set_slice_index(42);
        assert_eq!(app.slice_index, 0);
    }

    #[test]
    fn slice_index_clamps_to_extent() {
        let mut app = app_with_cube(8);
        app.set_slice_index(100);
        assert_eq!(app.slice_index, 7);
        app.set_slice_index(-5);
        assert_eq!(app.slice_index, 0);
    }

    #[test]
    fn roi_arm_requires_volume() {
        let mut app = VoxscopeApp::default();
        app.toggle_roi();
        assert!(!app.roi_select.armed);
        let notice = app.ui_state.notice.take().unwrap();
        assert_eq!(notice.severity, Severity::Info);
    }

    #[test]
    fn roi_commit_opens_histogram() {
        let mut app = app_with_cube(64);
        app.toggle_roi();
        app.roi_z_range = [40, 60];
        app.commit_roi(RoiDraft {
            start: PlotPoint::new(40.0, 40.0),
            current: PlotPoint::new(60.0, 60.0),
        });
        assert!(app.ui_state.show_histogram);
        assert_eq!(app.session.histogram().roi_samples().unwrap().len(), 9261);
    }

    #[test]
    fn degenerate_drag_warns_and_keeps_previous_roi() {
        let mut app = app_with_cube(8);
        app.toggle_roi();
        app.roi_z_range = [0, 1];
        app.commit_roi(RoiDraft {
            start: PlotPoint::new(0.0, 0.0),
            current: PlotPoint::new(1.0, 1.0),
        });
        assert!(app.session.roi().is_some());
        app.ui_state.show_histogram = false;

        // Zero-area drag: warning, prior ROI untouched, histogram closed.
        app.commit_roi(RoiDraft {
            start: PlotPoint::new(3.0, 3.0),
            current: PlotPoint::new(3.0, 5.0),
        });
        let notice = app.ui_state.notice.take().unwrap();
        assert_eq!(notice.severity, Severity::Warning);
        assert!(app.session.roi().is_some());
        assert!(!app.ui_state.show_histogram);
    }

    #[test]
    fn leaving_doctor_mode_disarms_roi() {
        let mut app = app_with_cube(8);
        app.set_mode(Mode::Doctor);
        app.toggle_roi();
        assert!(app.roi_select.armed);

        app.set_mode(Mode::Student);
        assert!(!app.roi_select.armed);
        assert!(app.session.roi().is_none());
        assert!(!app.ui_state.show_histogram);
    }

    #[test]
    fn preset_change_without_volume_skips_redraw() {
        let mut app = VoxscopeApp::default();
        app.set_color_preset(ColorPreset::HotCold);
        assert_eq!(app.preset, ColorPreset::HotCold);
        assert!(app.texture.is_none());
    }
}
