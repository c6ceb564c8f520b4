//! Region-of-interest bounds in volume index space.

use crate::volume::axis_span;

/// An axis-aligned box of voxel indices, inclusive on every axis.
///
/// A box is transient state: it exists only while the user has an active
/// selection, and at most one is active at a time (owned by the session).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoiBounds {
    /// Inclusive index bounds per axis, ordered `[x, y, z]`.
    bounds: [[i32; 2]; 3],
}

impl RoiBounds {
    /// Build bounds from per-axis index pairs, normalizing the ordering of
    /// each pair.
    #[must_use]
    pub fn new(x: [i32; 2], y: [i32; 2], z: [i32; 2]) -> Self {
        Self {
            bounds: [normalize(x), normalize(y), normalize(z)],
        }
    }

    /// Build bounds from a dragged XY rectangle in world (index) coordinates
    /// plus an inclusive Z index range.
    ///
    /// Returns `None` when the rectangle has zero area on either axis, which
    /// the caller reports as an empty selection.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn from_drag(min: [f64; 2], max: [f64; 2], z: [i32; 2]) -> Option<Self> {
        if !(max[0] > min[0] && max[1] > min[1]) {
            return None;
        }
        let x = [min[0].floor() as i32, max[0].floor() as i32];
        let y = [min[1].floor() as i32, max[1].floor() as i32];
        Some(Self::new(x, y, z))
    }

    /// Per-axis inclusive bounds, ordered `[x, y, z]`.
    #[must_use]
    pub fn axes(&self) -> [[i32; 2]; 3] {
        self.bounds
    }

    /// Number of voxels enclosed by the box.
    #[must_use]
    pub fn voxel_count(&self) -> usize {
        self.bounds
            .iter()
            .map(|&b| axis_span(b).unwrap_or(0))
            .product()
    }

    /// Intersect with a volume extent, returning `None` when the
    /// intersection encloses no voxels.
    #[must_use]
    pub fn clamped_to(&self, extent: [[i32; 2]; 3]) -> Option<Self> {
        let mut clamped = [[0i32; 2]; 3];
        for axis in 0..3 {
            let lo = self.bounds[axis][0].max(extent[axis][0]);
            let hi = self.bounds[axis][1].min(extent[axis][1]);
            if lo > hi {
                return None;
            }
            clamped[axis] = [lo, hi];
        }
        Some(Self { bounds: clamped })
    }

    /// Translate into zero-based array coordinates relative to `extent`.
    ///
    /// Returns `None` unless the box lies fully inside the extent.
    #[must_use]
    #[allow(clippy::cast_sign_loss)]
    pub(crate) fn to_local(&self, extent: [[i32; 2]; 3]) -> Option<[[usize; 2]; 3]> {
        let mut local = [[0usize; 2]; 3];
        for axis in 0..3 {
            let [lo, hi] = self.bounds[axis];
            let [e0, e1] = extent[axis];
            if lo < e0 || hi > e1 {
                return None;
            }
            local[axis] = [(lo - e0) as usize, (hi - e0) as usize];
        }
        Some(local)
    }
}

fn normalize(pair: [i32; 2]) -> [i32; 2] {
    if pair[0] <= pair[1] {
        pair
    } else {
        [pair[1], pair[0]]
    }
}
