//! Slice texture generation.
//!
//! Maps the current Z cross-section through the color and opacity transfer
//! functions into an RGBA image for the central plot. Low intensities fade
//! to transparent, letting the mode background show through.

use egui::ColorImage;
use voxscope_core::transfer::{self, ColorPreset};
use voxscope_core::volume::VoxelVolume;

use crate::util::f32_to_u8;

/// Intensity domain the transfer functions are defined over.
const DISPLAY_RANGE: f32 = 255.0;

/// Render the slice at `slice_index` with the given preset, or `None` when
/// the index lies outside the volume's Z extent.
#[must_use]
pub fn slice_image(
    volume: &VoxelVolume,
    slice_index: i32,
    preset: ColorPreset,
) -> Option<ColorImage> {
    let slice = volume.slice_z(slice_index)?;
    let (lo, hi) = volume.value_range();
    let scale = if hi > lo {
        DISPLAY_RANGE / (hi - lo)
    } else {
        0.0
    };

    let color = transfer::color_transfer_function(preset);
    let opacity = transfer::opacity_function();

    let (ny, nx) = slice.dim();
    let mut pixels = vec![0u8; nx * ny * 4];
    for ((y, x), &value) in slice.indexed_iter() {
        let display = (value - lo) * scale;
        let rgb = color.color_at(display);
        let alpha = opacity.opacity_at(display);
        let offset = (y * nx + x) * 4;
        pixels[offset] = f32_to_u8(rgb[0] * 255.0);
        pixels[offset + 1] = f32_to_u8(rgb[1] * 255.0);
        pixels[offset + 2] = f32_to_u8(rgb[2] * 255.0);
        pixels[offset + 3] = f32_to_u8(alpha * 255.0);
    }

    Some(ColorImage::from_rgba_unmultiplied([nx, ny], &pixels))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array3;

    fn gradient_volume() -> VoxelVolume {
        // 2x2x2 cube spanning 0..=7.
        #[allow(clippy::cast_precision_loss)]
        let scalars = Array3::from_shape_fn((2, 2, 2), |(z, y, x)| (z * 4 + y * 2 + x) as f32);
        VoxelVolume::new(scalars, [[0, 1], [0, 1], [0, 1]]).unwrap()
    }

    #[test]
    fn out_of_extent_slice_yields_none() {
        let volume = gradient_volume();
        assert!(slice_image(&volume, 5, ColorPreset::Standard).is_none());
    }

    #[test]
    fn grayscale_slice_spans_transparent_black_to_opaque_white() {
        let volume = gradient_volume();
        let image = slice_image(&volume, 1, ColorPreset::Grayscale).unwrap();
        assert_eq!(image.size, [2, 2]);

        // Slice z=1 holds values 4..=7; value 7 is the volume maximum and
        // maps to opaque white.
        let max_pixel = image.pixels[3];
        assert_eq!(max_pixel.r(), 255);
        assert_eq!(max_pixel.g(), 255);
        assert_eq!(max_pixel.b(), 255);
        assert_eq!(max_pixel.a(), 255);

        // Value 4 sits at 4/7 of the display range.
        let mid_pixel = image.pixels[0];
        assert_eq!(mid_pixel.a(), f32_to_u8(4.0 / 7.0 * 255.0));
    }

    #[test]
    fn flat_volume_renders_fully_transparent() {
        let scalars = Array3::from_elem((2, 2, 2), 9.0);
        let volume = VoxelVolume::new(scalars, [[0, 1], [0, 1], [0, 1]]).unwrap();
        let image = slice_image(&volume, 0, ColorPreset::Standard).unwrap();
        assert!(image.pixels.iter().all(|p| p.a() == 0));
    }
}
