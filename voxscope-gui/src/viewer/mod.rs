//! Visualization modules for the slice scene.

mod roi_select;
mod scene;

pub use roi_select::{draw_rect, RoiDraft, RoiSelect};
pub use scene::slice_image;
