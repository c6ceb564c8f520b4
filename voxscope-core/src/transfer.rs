//! Color and opacity transfer functions.
//!
//! A transfer function maps scalar intensity to color (or opacity) during
//! slice rendering. Presets are pure: selecting the same preset twice yields
//! an equal function with no accumulated state.

use std::fmt;

/// Named color presets offered in the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorPreset {
    /// Black to cyan over the byte range.
    #[default]
    Standard,
    /// Black to white over the byte range.
    Grayscale,
    /// Black into a warm highlight, stretched over a wider domain.
    HotCold,
}

impl fmt::Display for ColorPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorPreset::Standard => write!(f, "Standard"),
            ColorPreset::Grayscale => write!(f, "Grayscale"),
            ColorPreset::HotCold => write!(f, "Hot/Cold"),
        }
    }
}

impl ColorPreset {
    /// Every preset, in UI order.
    pub const ALL: [ColorPreset; 3] = [
        ColorPreset::Standard,
        ColorPreset::Grayscale,
        ColorPreset::HotCold,
    ];

    /// Resolve a preset by display name, falling back to Standard for
    /// unknown names.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "Grayscale" => ColorPreset::Grayscale,
            "Hot/Cold" => ColorPreset::HotCold,
            _ => ColorPreset::Standard,
        }
    }
}

/// An ordered sequence of (intensity, rgb) control points, immutable once
/// constructed. Colors are linear RGB in `[0, 1]`.
#[derive(Debug, Clone, PartialEq)]
pub struct TransferFunction {
    points: Vec<(f32, [f32; 3])>,
}

impl TransferFunction {
    fn new(points: Vec<(f32, [f32; 3])>) -> Self {
        debug_assert!(points.windows(2).all(|w| w[0].0 <= w[1].0));
        Self { points }
    }

    /// The control points, ordered by intensity.
    #[must_use]
    pub fn control_points(&self) -> &[(f32, [f32; 3])] {
        &self.points
    }

    /// Color at the given intensity, linearly interpolated between control
    /// points and clamped outside the ends.
    #[must_use]
    pub fn color_at(&self, value: f32) -> [f32; 3] {
        let Some(first) = self.points.first() else {
            return [0.0; 3];
        };
        if value <= first.0 {
            return first.1;
        }
        for pair in self.points.windows(2) {
            let (v0, c0) = pair[0];
            let (v1, c1) = pair[1];
            if value <= v1 {
                let t = if v1 > v0 { (value - v0) / (v1 - v0) } else { 1.0 };
                return [
                    lerp(c0[0], c1[0], t),
                    lerp(c0[1], c1[1], t),
                    lerp(c0[2], c1[2], t),
                ];
            }
        }
        self.points.last().map_or([0.0; 3], |last| last.1)
    }
}

/// A piecewise-linear opacity curve over intensity.
#[derive(Debug, Clone, PartialEq)]
pub struct OpacityFunction {
    points: Vec<(f32, f32)>,
}

impl OpacityFunction {
    /// Opacity at the given intensity, clamped outside the ends.
    #[must_use]
    pub fn opacity_at(&self, value: f32) -> f32 {
        let Some(first) = self.points.first() else {
            return 1.0;
        };
        if value <= first.0 {
            return first.1;
        }
        for pair in self.points.windows(2) {
            let (v0, a0) = pair[0];
            let (v1, a1) = pair[1];
            if value <= v1 {
                let t = if v1 > v0 { (value - v0) / (v1 - v0) } else { 1.0 };
                return lerp(a0, a1, t);
            }
        }
        self.points.last().map_or(1.0, |last| last.1)
    }
}

/// Color transfer function for a preset.
#[must_use]
pub fn color_transfer_function(preset: ColorPreset) -> TransferFunction {
    match preset {
        ColorPreset::Standard => TransferFunction::new(vec![
            (0.0, [0.0, 0.0, 0.0]),
            (255.0, [0.0, 1.0, 1.0]),
        ]),
        ColorPreset::Grayscale => TransferFunction::new(vec![
            (0.0, [0.0, 0.0, 0.0]),
            (255.0, [1.0, 1.0, 1.0]),
        ]),
        ColorPreset::HotCold => TransferFunction::new(vec![
            (0.0, [0.0, 0.0, 0.0]),
            (500.0, [1.0, 0.5, 0.3]),
        ]),
    }
}

/// Fixed opacity curve: lowest intensity fully transparent, highest fully
/// opaque.
#[must_use]
pub fn opacity_function() -> OpacityFunction {
    OpacityFunction {
        points: vec![(0.0, 0.0), (255.0, 1.0)],
    }
}

fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t.clamp(0.0, 1.0)
}
