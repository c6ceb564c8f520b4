//! Intensity histogram sampling and display-time binning.
//!
//! Sample vectors are stored flat; binning into 256 fixed-width buckets
//! happens at display time, so reopening the histogram dialog never
//! recomputes the volume scan.

use crate::volume::VoxelVolume;

/// Number of display buckets for the histogram chart.
pub const DISPLAY_BINS: usize = 256;

/// Flat intensity samples for the loaded volume and, optionally, an ROI.
///
/// The ROI series is bound to the volume generation that produced it:
/// recomputing the whole-volume samples clears it.
#[derive(Debug, Default)]
pub struct HistogramData {
    whole: Vec<f32>,
    roi: Option<Vec<f32>>,
}

impl HistogramData {
    /// Rescan the whole volume, dropping any stored ROI samples.
    pub fn recompute_whole(&mut self, volume: &VoxelVolume) {
        self.whole = volume.scalars().iter().copied().collect();
        self.roi = None;
    }

    /// Store a freshly extracted ROI sample series.
    pub fn set_roi_samples(&mut self, samples: Vec<f32>) {
        self.roi = Some(samples);
    }

    /// Drop the ROI series only.
    pub fn clear_roi(&mut self) {
        self.roi = None;
    }

    /// Drop everything (volume unloaded).
    pub fn clear(&mut self) {
        self.whole.clear();
        self.roi = None;
    }

    /// Whole-volume samples; empty when no volume is loaded.
    #[must_use]
    pub fn whole_samples(&self) -> &[f32] {
        &self.whole
    }

    /// ROI samples, if an ROI selection is stored.
    #[must_use]
    pub fn roi_samples(&self) -> Option<&[f32]> {
        self.roi.as_deref()
    }
}

/// Bin samples into [`DISPLAY_BINS`] fixed-width buckets over `[lo, hi]`.
///
/// Values outside the range clamp into the end buckets. A collapsed range
/// puts every sample in the first bucket.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn bin_256(samples: &[f32], lo: f32, hi: f32) -> Vec<u64> {
    let mut bins = vec![0u64; DISPLAY_BINS];
    #[allow(clippy::cast_precision_loss)]
    let scale = if hi > lo {
        DISPLAY_BINS as f32 / (hi - lo)
    } else {
        0.0
    };
    for &v in samples {
        let idx = (((v - lo) * scale) as usize).min(DISPLAY_BINS - 1);
        let idx = if v < lo { 0 } else { idx };
        bins[idx] += 1;
    }
    bins
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array3;

    fn volume_of(values: &[f32], nx: usize, ny: usize, nz: usize) -> VoxelVolume {
        let scalars = Array3::from_shape_vec((nz, ny, nx), values.to_vec()).unwrap();
        #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
        let extent = [
            [0, nx as i32 - 1],
            [0, ny as i32 - 1],
            [0, nz as i32 - 1],
        ];
        VoxelVolume::new(scalars, extent).unwrap()
    }

    #[test]
    fn recompute_whole_clears_roi() {
        let volume = volume_of(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0], 2, 2, 2);
        let mut hist = HistogramData::default();
        hist.set_roi_samples(vec![1.0]);
        hist.recompute_whole(&volume);
        assert_eq!(hist.whole_samples().len(), 8);
        assert!(hist.roi_samples().is_none());
    }

    #[test]
    fn binning_uses_fixed_width_buckets() {
        let samples = [0.0, 0.5, 127.5, 255.0];
        let bins = bin_256(&samples, 0.0, 255.0);
        assert_eq!(bins.len(), DISPLAY_BINS);
        assert_eq!(bins[0], 2);
        assert_eq!(bins[128], 1);
        assert_eq!(bins[255], 1);
        assert_eq!(bins.iter().sum::<u64>(), 4);
    }

    #[test]
    fn out_of_range_samples_clamp_into_end_buckets() {
        let bins = bin_256(&[-50.0, 400.0], 0.0, 255.0);
        assert_eq!(bins[0], 1);
        assert_eq!(bins[255], 1);
    }

    #[test]
    fn collapsed_range_collects_in_first_bucket() {
        let bins = bin_256(&[3.0, 3.0, 3.0], 3.0, 3.0);
        assert_eq!(bins[0], 3);
    }
}
