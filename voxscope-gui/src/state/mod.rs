//! Application state modules.

mod mode;
mod ui;

pub use mode::{ControlSet, Mode};
pub use ui::{Notice, Severity, UiState};
