//! Error types for voxscope-core.

use thiserror::Error;

/// Result type alias for voxscope operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Core error types for voxscope operations.
///
/// None of these is fatal to the application: the GUI reports each variant
/// through a modal dialog and leaves the prior state untouched.
#[derive(Error, Debug)]
pub enum Error {
    /// The volume file path is inaccessible.
    #[error("cannot read volume file: {0}")]
    Io(#[from] std::io::Error),

    /// The volume file exists but cannot be parsed as VTK ImageData.
    #[error("malformed volume file: {0}")]
    Format(String),

    /// The parsed dataset carries no point scalar array.
    #[error("volume contains no point scalar data")]
    NoScalars,

    /// An operation that requires a loaded volume was attempted on an
    /// empty session.
    #[error("no volume is loaded")]
    NoVolume,

    /// A region of interest encloses no voxels, either because it lies
    /// outside the volume extent or because it is degenerate.
    #[error("selection encloses no voxels")]
    EmptySelection,
}
