//! Voxel grid storage.
//!
//! A [`VoxelVolume`] is a read-only 3D scalar field with per-axis inclusive
//! index extents. VTI extents may start at nonzero indices, so all public
//! lookups take indices in extent space and translate internally.

use ndarray::{s, Array3, ArrayView2, ArrayView3, Axis};

use crate::error::{Error, Result};
use crate::roi::RoiBounds;

/// A 3D scalar grid with spatial extent, immutable after construction.
///
/// Scalars are stored in `[z, y, x]` order (x varies fastest), matching the
/// point ordering of VTK ImageData files.
#[derive(Debug, Clone)]
pub struct VoxelVolume {
    scalars: Array3<f32>,
    /// Inclusive index bounds per axis, ordered `[x, y, z]`.
    extent: [[i32; 2]; 3],
}

impl VoxelVolume {
    /// Create a volume from a scalar array and its extent bounds.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Format`] if the array shape does not match the
    /// point counts implied by the extent.
    pub fn new(scalars: Array3<f32>, extent: [[i32; 2]; 3]) -> Result<Self> {
        let (nz, ny, nx) = scalars.dim();
        let expected = [nx, ny, nz];
        for (axis, bounds) in extent.iter().enumerate() {
            let span = axis_span(*bounds).ok_or_else(|| {
                Error::Format(format!(
                    "inverted extent on axis {axis}: {} > {}",
                    bounds[0], bounds[1]
                ))
            })?;
            if span != expected[axis] {
                return Err(Error::Format(format!(
                    "extent implies {span} points on axis {axis}, scalar array has {}",
                    expected[axis]
                )));
            }
        }
        Ok(Self { scalars, extent })
    }

    /// Grid dimensions as `[nx, ny, nz]` point counts.
    #[must_use]
    pub fn dims(&self) -> [usize; 3] {
        let (nz, ny, nx) = self.scalars.dim();
        [nx, ny, nz]
    }

    /// Inclusive index bounds per axis, ordered `[x, y, z]`.
    #[must_use]
    pub fn extent(&self) -> [[i32; 2]; 3] {
        self.extent
    }

    /// Inclusive Z index bounds, the range of the slice control.
    #[must_use]
    pub fn z_extent(&self) -> [i32; 2] {
        self.extent[2]
    }

    /// Total number of voxels.
    #[must_use]
    pub fn voxel_count(&self) -> usize {
        self.scalars.len()
    }

    /// The full scalar field.
    #[must_use]
    pub fn scalars(&self) -> &Array3<f32> {
        &self.scalars
    }

    /// Minimum and maximum scalar value, used to normalize display output.
    ///
    /// Returns `(0.0, 0.0)` for an empty volume.
    #[must_use]
    pub fn value_range(&self) -> (f32, f32) {
        let mut it = self.scalars.iter().copied();
        let Some(first) = it.next() else {
            return (0.0, 0.0);
        };
        it.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v)))
    }

    /// The XY cross-section at the given Z index, or `None` outside the
    /// Z extent.
    #[must_use]
    pub fn slice_z(&self, index: i32) -> Option<ArrayView2<'_, f32>> {
        let [z0, z1] = self.extent[2];
        if index < z0 || index > z1 {
            return None;
        }
        #[allow(clippy::cast_sign_loss)]
        let k = (index - z0) as usize;
        Some(self.scalars.index_axis(Axis(0), k))
    }

    /// The sub-volume covered by `bounds`, or `None` if the bounds are not
    /// fully inside the extent. Callers clamp first via
    /// [`RoiBounds::clamped_to`].
    #[must_use]
    pub fn subvolume(&self, bounds: &RoiBounds) -> Option<ArrayView3<'_, f32>> {
        let local = bounds.to_local(self.extent)?;
        let [x, y, z] = local;
        Some(
            self.scalars
                .slice(s![z[0]..=z[1], y[0]..=y[1], x[0]..=x[1]]),
        )
    }
}

/// Number of points covered by an inclusive `[lo, hi]` bound, or `None` if
/// the bound is inverted.
#[allow(clippy::cast_sign_loss)]
pub(crate) fn axis_span(bounds: [i32; 2]) -> Option<usize> {
    if bounds[0] > bounds[1] {
        return None;
    }
    Some((bounds[1] - bounds[0] + 1) as usize)
}
