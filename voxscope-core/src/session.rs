//! Session lifecycle: the single owner of the loaded volume and its
//! derived state.
//!
//! The session replaces ad hoc window globals with explicit transitions:
//! Empty -> Loaded -> (optionally) ROI-active. No histogram or ROI
//! operation can run while the session is empty, and loading always
//! releases the previous volume first so no stale scalar buffer survives
//! a reload.

use std::sync::Arc;

use crate::error::{Error, Result};
use crate::histogram::HistogramData;
use crate::roi::RoiBounds;
use crate::volume::VoxelVolume;

/// Default slice index selected right after a load, clamped into the
/// volume's Z extent.
const INITIAL_SLICE: i32 = 50;

/// Application-level state for one loaded dataset.
#[derive(Debug, Default)]
pub struct Session {
    volume: Option<Arc<VoxelVolume>>,
    histogram: HistogramData,
    roi: Option<RoiBounds>,
}

impl Session {
    /// Install a freshly loaded volume, releasing any previous one (and any
    /// ROI referencing it) first, then scan the whole-volume samples.
    /// Callers reach the installed volume through [`Session::volume`].
    pub fn load(&mut self, volume: VoxelVolume) {
        self.unload();
        let volume = Arc::new(volume);
        self.histogram.recompute_whole(&volume);
        self.volume = Some(volume);
    }

    /// Release the volume and everything derived from it. No-op when the
    /// session is already empty.
    pub fn unload(&mut self) {
        self.volume = None;
        self.roi = None;
        self.histogram.clear();
    }

    /// Whether a volume is currently loaded.
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.volume.is_some()
    }

    /// The loaded volume, shared by reference.
    #[must_use]
    pub fn volume(&self) -> Option<&Arc<VoxelVolume>> {
        self.volume.as_ref()
    }

    /// Commit an ROI selection: clamp to the volume extent, extract the
    /// sub-volume, store its flattened samples, and return the sample count.
    ///
    /// On failure the previously stored ROI (and its samples) is left
    /// untouched.
    ///
    /// # Errors
    ///
    /// * [`Error::NoVolume`] when the session is empty.
    /// * [`Error::EmptySelection`] when the clamped box encloses no voxels.
    pub fn set_roi(&mut self, bounds: RoiBounds) -> Result<usize> {
        let volume = self.volume.as_ref().ok_or(Error::NoVolume)?;
        let clamped = bounds
            .clamped_to(volume.extent())
            .ok_or(Error::EmptySelection)?;
        let samples: Vec<f32> = volume
            .subvolume(&clamped)
            .ok_or(Error::EmptySelection)?
            .iter()
            .copied()
            .collect();
        if samples.is_empty() {
            return Err(Error::EmptySelection);
        }
        let count = samples.len();
        self.histogram.set_roi_samples(samples);
        self.roi = Some(clamped);
        Ok(count)
    }

    /// Destroy the active ROI and its sample series.
    pub fn clear_roi(&mut self) {
        self.roi = None;
        self.histogram.clear_roi();
    }

    /// The active ROI bounds, if any.
    #[must_use]
    pub fn roi(&self) -> Option<&RoiBounds> {
        self.roi.as_ref()
    }

    /// Stored histogram samples.
    #[must_use]
    pub fn histogram(&self) -> &HistogramData {
        &self.histogram
    }

    /// Initial slice index for a fresh load, or `None` when empty.
    #[must_use]
    pub fn default_slice_index(&self) -> Option<i32> {
        let volume = self.volume.as_ref()?;
        let [z0, z1] = volume.z_extent();
        Some(INITIAL_SLICE.clamp(z0, z1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array3;

    fn cube(n: usize) -> VoxelVolume {
        #[allow(clippy::cast_precision_loss)]
        let scalars = Array3::from_shape_fn((n, n, n), |(z, y, x)| (z * n * n + y * n + x) as f32);
        #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
        let hi = n as i32 - 1;
        VoxelVolume::new(scalars, [[0, hi], [0, hi], [0, hi]]).unwrap()
    }

    #[test]
    fn load_then_unload_leaves_no_trace() {
        let mut session = Session::default();
        session.load(cube(4));
        assert!(session.is_loaded());
        assert_eq!(session.histogram().whole_samples().len(), 64);

        session.unload();
        assert!(!session.is_loaded());
        assert!(session.roi().is_none());
        assert!(session.histogram().whole_samples().is_empty());
        assert!(session.histogram().roi_samples().is_none());

        // Unloading an empty session is a no-op.
        session.unload();
        assert!(!session.is_loaded());
    }

    #[test]
    fn loaded_volume_is_reached_through_the_accessor() {
        let mut session = Session::default();
        session.load(cube(4));
        let volume = session.volume().unwrap();
        assert_eq!(volume.dims(), [4, 4, 4]);
        assert_eq!(volume.z_extent(), [0, 3]);
    }

    #[test]
    fn reload_replaces_volume_and_derived_state() {
        let mut session = Session::default();
        session.load(cube(4));
        session
            .set_roi(RoiBounds::new([0, 1], [0, 1], [0, 1]))
            .unwrap();

        session.load(cube(2));
        assert_eq!(session.histogram().whole_samples().len(), 8);
        assert!(session.roi().is_none());
        assert!(session.histogram().roi_samples().is_none());
    }

    #[test]
    fn roi_requires_a_loaded_volume() {
        let mut session = Session::default();
        let err = session
            .set_roi(RoiBounds::new([0, 1], [0, 1], [0, 1]))
            .unwrap_err();
        assert!(matches!(err, Error::NoVolume));
    }

    #[test]
    fn roi_sample_count_matches_bounds() {
        let mut session = Session::default();
        session.load(cube(64));
        let count = session
            .set_roi(RoiBounds::new([40, 60], [40, 60], [40, 60]))
            .unwrap();
        assert_eq!(count, 9261);
        assert_eq!(session.histogram().roi_samples().unwrap().len(), 9261);
    }

    #[test]
    fn empty_selection_keeps_previous_roi() {
        let mut session = Session::default();
        session.load(cube(8));
        session
            .set_roi(RoiBounds::new([0, 1], [0, 1], [0, 1]))
            .unwrap();

        let err = session
            .set_roi(RoiBounds::new([100, 120], [0, 1], [0, 1]))
            .unwrap_err();
        assert!(matches!(err, Error::EmptySelection));
        assert_eq!(session.roi().unwrap().axes(), [[0, 1], [0, 1], [0, 1]]);
        assert_eq!(session.histogram().roi_samples().unwrap().len(), 8);
    }

    #[test]
    fn overhanging_roi_is_clamped() {
        let mut session = Session::default();
        session.load(cube(8));
        let count = session
            .set_roi(RoiBounds::new([6, 20], [0, 0], [0, 0]))
            .unwrap();
        assert_eq!(count, 2);
    }

    #[test]
    fn default_slice_index_clamps_into_extent() {
        let mut session = Session::default();
        assert!(session.default_slice_index().is_none());

        session.load(cube(8));
        assert_eq!(session.default_slice_index(), Some(7));

        session.load(cube(64));
        assert_eq!(session.default_slice_index(), Some(50));
    }

    #[test]
    fn clear_roi_drops_bounds_and_samples() {
        let mut session = Session::default();
        session.load(cube(4));
        session
            .set_roi(RoiBounds::new([0, 1], [0, 1], [0, 1]))
            .unwrap();
        session.clear_roi();
        assert!(session.roi().is_none());
        assert!(session.histogram().roi_samples().is_none());
        // Whole-volume samples survive.
        assert_eq!(session.histogram().whole_samples().len(), 64);
    }
}
