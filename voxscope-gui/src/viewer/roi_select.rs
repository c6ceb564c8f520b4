//! Interactive ROI box selection on the slice plot.
//!
//! Two-state machine: disarmed (no interaction) and armed (rectangle
//! drafting live). The XY rectangle is dragged on the plot; the Z span
//! comes from the control panel sliders. Drag end is the
//! "interaction ended" event that commits the selection.

use egui_plot::{PlotPoint, PlotPoints, PlotUi, Polygon};

use eframe::egui::{Color32, Stroke};

/// In-progress rectangle draft in plot (volume index) coordinates.
#[derive(Debug, Clone, Copy)]
pub struct RoiDraft {
    pub start: PlotPoint,
    pub current: PlotPoint,
}

impl RoiDraft {
    /// Corner-ordered bounds as `([min_x, min_y], [max_x, max_y])`.
    #[must_use]
    pub fn corners(&self) -> ([f64; 2], [f64; 2]) {
        let min = [
            self.start.x.min(self.current.x),
            self.start.y.min(self.current.y),
        ];
        let max = [
            self.start.x.max(self.current.x),
            self.start.y.max(self.current.y),
        ];
        (min, max)
    }
}

/// ROI interaction state.
#[derive(Debug, Default)]
pub struct RoiSelect {
    /// Whether the selection tool is live.
    pub armed: bool,
    draft: Option<RoiDraft>,
}

impl RoiSelect {
    /// Arm the selection tool.
    pub fn arm(&mut self) {
        self.armed = true;
    }

    /// Disarm and discard any draft.
    pub fn disarm(&mut self) {
        self.armed = false;
        self.draft = None;
    }

    /// Begin a rectangle draft at the pointer position.
    pub fn begin(&mut self, start: PlotPoint) {
        if self.armed {
            self.draft = Some(RoiDraft {
                start,
                current: start,
            });
        }
    }

    /// Update the draft while dragging.
    pub fn update(&mut self, current: PlotPoint) {
        if let Some(draft) = &mut self.draft {
            draft.current = current;
        }
    }

    /// Take the finished draft on drag end, leaving the tool armed for the
    /// next selection.
    pub fn take_finished(&mut self) -> Option<RoiDraft> {
        self.draft.take()
    }

    /// Render the draft rectangle while dragging.
    pub fn draw_draft(&self, plot_ui: &mut PlotUi) {
        if let Some(draft) = &self.draft {
            let (min, max) = draft.corners();
            draw_rect(plot_ui, min, max, Color32::YELLOW);
        }
    }
}

/// Draw an axis-aligned rectangle outline with a translucent fill.
pub fn draw_rect(plot_ui: &mut PlotUi, min: [f64; 2], max: [f64; 2], color: Color32) {
    let points = vec![
        [min[0], min[1]],
        [max[0], min[1]],
        [max[0], max[1]],
        [min[0], max[1]],
    ];
    let fill = Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), 32);
    plot_ui.polygon(
        Polygon::new(PlotPoints::new(points))
            .stroke(Stroke::new(1.5, color))
            .fill_color(fill),
    );
}
