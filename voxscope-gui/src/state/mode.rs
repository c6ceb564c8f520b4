//! User-role modes and their declarative control-visibility table.
//!
//! Mode application is a function of the mode alone: the panel renders
//! from [`Mode::controls`] every frame, so switching away and back always
//! reproduces the same visible set.

use std::fmt;

use eframe::egui::Color32;

/// Selected user role. Mutually exclusive; switching is a full visibility
/// reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// No role chosen yet; only load/unload and the mode selector show.
    #[default]
    None,
    Student,
    Doctor,
}

/// Which mode-specific controls are visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ControlSet {
    pub slice: bool,
    pub color: bool,
    pub roi: bool,
    pub histogram: bool,
    pub labels: bool,
    pub legend: bool,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::None => write!(f, "Select mode"),
            Mode::Student => write!(f, "Student"),
            Mode::Doctor => write!(f, "Doctor"),
        }
    }
}

impl Mode {
    /// Every mode, in UI order.
    pub const ALL: [Mode; 3] = [Mode::None, Mode::Student, Mode::Doctor];

    /// The visible-controls set for this mode.
    #[must_use]
    pub fn controls(self) -> ControlSet {
        match self {
            Mode::None => ControlSet::default(),
            Mode::Student => ControlSet {
                slice: true,
                color: true,
                roi: false,
                histogram: false,
                labels: true,
                legend: true,
            },
            Mode::Doctor => ControlSet {
                slice: true,
                color: true,
                roi: true,
                histogram: true,
                labels: true,
                legend: false,
            },
        }
    }

    /// Fixed scene background per mode. Purely cosmetic.
    #[must_use]
    pub fn background(self) -> Color32 {
        match self {
            Mode::None => Color32::from_rgb(128, 128, 128),
            Mode::Student => Color32::from_rgb(128, 179, 255),
            Mode::Doctor => Color32::from_rgb(255, 204, 179),
        }
    }
}
