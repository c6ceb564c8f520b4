//! voxscope-core: data layer for the voxscope volume viewer.
//!
//! This crate provides the loading, analysis and lifecycle logic the GUI
//! builds on: parsing `.vti` voxel grids, color/opacity transfer functions,
//! region-of-interest extraction, histogram sampling, and the session state
//! machine that ties a loaded volume to its derived data.

pub mod annotation;
pub mod error;
pub mod histogram;
pub mod loader;
pub mod roi;
pub mod session;
pub mod transfer;
pub mod volume;

pub use annotation::{default_annotations, Annotation};
pub use error::{Error, Result};
pub use histogram::HistogramData;
pub use roi::RoiBounds;
pub use session::Session;
pub use transfer::{ColorPreset, OpacityFunction, TransferFunction};
pub use volume::VoxelVolume;
