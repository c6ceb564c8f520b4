//! UI rendering modules.
//!
//! - `control_panel`: left sidebar with load/unload, mode and view controls
//! - `slice_view`: central panel with the slice plot and ROI interaction
//! - `histogram_window`: intensity histogram window
//! - `dialogs`: modal notices and annotation description popups
//! - `theme`: application styling

mod control_panel;
mod dialogs;
mod histogram_window;
mod slice_view;
pub mod theme;
