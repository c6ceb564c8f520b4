//! `.vti` (VTK XML ImageData) volume loading.

use std::path::Path;

use ndarray::Array3;
use vtkio::model::{Attribute, DataSet, Vtk};

use crate::error::{Error, Result};
use crate::volume::VoxelVolume;

/// Load a voxel grid from a VTK XML ImageData file.
///
/// The first point data array is taken as the scalar field; its values are
/// widened to `f32` regardless of the on-disk scalar type.
///
/// # Errors
///
/// * [`Error::Io`] when the path is inaccessible.
/// * [`Error::Format`] when the file is not parseable ImageData or the
///   scalar count does not match the extent.
/// * [`Error::NoScalars`] when the file carries no point data array.
pub fn load_vti(path: &Path) -> Result<VoxelVolume> {
    // Surface a plain I/O error for missing/unreadable paths before handing
    // the file to the format parser.
    std::fs::metadata(path)?;

    let vtk = Vtk::import(path).map_err(|err| Error::Format(format!("{err:?}")))?;

    let DataSet::ImageData { pieces, .. } = vtk.data else {
        return Err(Error::Format("dataset is not ImageData".to_string()));
    };
    let piece = pieces
        .into_iter()
        .next()
        .ok_or_else(|| Error::Format("ImageData contains no pieces".to_string()))?;
    let piece = piece
        .load_piece_data(None)
        .map_err(|err| Error::Format(format!("{err:?}")))?;

    let extent = extent_bounds(piece.extent);
    let scalars = piece
        .data
        .point
        .into_iter()
        .find_map(|attribute| match attribute {
            Attribute::DataArray(array) => array.data.cast_into::<f32>(),
            Attribute::Field { .. } => None,
        })
        .ok_or(Error::NoScalars)?;

    let volume = build_volume(scalars, extent)?;
    let [nx, ny, nz] = volume.dims();
    log::info!(
        "loaded volume {}x{}x{} ({} voxels) from {}",
        nx,
        ny,
        nz,
        volume.voxel_count(),
        path.display()
    );
    Ok(volume)
}

/// Assemble a [`VoxelVolume`] from a flat scalar buffer in VTK point order
/// (x fastest, then y, then z).
fn build_volume(scalars: Vec<f32>, extent: [[i32; 2]; 3]) -> Result<VoxelVolume> {
    let dims = extent_dims(extent)?;
    let [nx, ny, nz] = dims;
    let expected = nx * ny * nz;
    if scalars.len() != expected {
        return Err(Error::Format(format!(
            "extent implies {expected} points, scalar array has {}",
            scalars.len()
        )));
    }
    let scalars = Array3::from_shape_vec((nz, ny, nx), scalars)
        .map_err(|err| Error::Format(err.to_string()))?;
    VoxelVolume::new(scalars, extent)
}

fn extent_bounds(extent: vtkio::model::Extent) -> [[i32; 2]; 3] {
    let ranges = extent.into_ranges();
    [
        [*ranges[0].start(), *ranges[0].end()],
        [*ranges[1].start(), *ranges[1].end()],
        [*ranges[2].start(), *ranges[2].end()],
    ]
}

fn extent_dims(extent: [[i32; 2]; 3]) -> Result<[usize; 3]> {
    let mut dims = [0usize; 3];
    for (axis, bounds) in extent.iter().enumerate() {
        dims[axis] = crate::volume::axis_span(*bounds).ok_or_else(|| {
            Error::Format(format!(
                "inverted extent on axis {axis}: {} > {}",
                bounds[0], bounds[1]
            ))
        })?;
    }
    Ok(dims)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fmt::Write as _;
    use std::path::PathBuf;

    /// Write a small ascii `.vti` fixture and return its path.
    fn write_fixture(dir: &tempfile::TempDir, extent: [[i32; 2]; 3]) -> PathBuf {
        let [nx, ny, nz] = extent_dims(extent).unwrap();
        let mut values = String::new();
        #[allow(clippy::cast_precision_loss)]
        for i in 0..nx * ny * nz {
            let _ = write!(values, "{} ", (i % 256) as f32);
        }
        let whole = format!(
            "{} {} {} {} {} {}",
            extent[0][0], extent[0][1], extent[1][0], extent[1][1], extent[2][0], extent[2][1]
        );
        let xml = format!(
            r#"<?xml version="1.0"?>
<VTKFile type="ImageData" version="1.0" byte_order="LittleEndian" header_type="UInt64">
  <ImageData WholeExtent="{whole}" Origin="0 0 0" Spacing="1 1 1">
    <Piece Extent="{whole}">
      <PointData Scalars="intensity">
        <DataArray type="Float32" Name="intensity" NumberOfComponents="1" format="ascii">
          {values}
        </DataArray>
      </PointData>
      <CellData/>
    </Piece>
  </ImageData>
</VTKFile>
"#
        );
        let path = dir.path().join("volume.vti");
        std::fs::write(&path, xml).unwrap();
        path
    }

    #[test]
    fn loads_ascii_image_data() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_fixture(&dir, [[0, 3], [0, 3], [0, 199]]);
        let volume = load_vti(&path).unwrap();
        assert_eq!(volume.dims(), [4, 4, 200]);
        assert_eq!(volume.z_extent(), [0, 199]);
        assert_eq!(volume.voxel_count(), 4 * 4 * 200);
        // Point order is x-fastest: linear index 1 lands at (z=0, y=0, x=1).
        assert_eq!(volume.scalars()[[0, 0, 1]], 1.0);
    }

    #[test]
    fn missing_path_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("does-not-exist.vti");
        assert!(matches!(load_vti(&path), Err(Error::Io(_))));
    }

    #[test]
    fn garbage_file_is_format_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("garbage.vti");
        std::fs::write(&path, "this is not a vti file").unwrap();
        assert!(matches!(load_vti(&path), Err(Error::Format(_))));
    }

    #[test]
    fn missing_scalars_is_no_scalars_error() {
        let dir = tempfile::tempdir().unwrap();
        let xml = r#"<?xml version="1.0"?>
<VTKFile type="ImageData" version="1.0" byte_order="LittleEndian" header_type="UInt64">
  <ImageData WholeExtent="0 1 0 1 0 1" Origin="0 0 0" Spacing="1 1 1">
    <Piece Extent="0 1 0 1 0 1">
      <PointData/>
      <CellData/>
    </Piece>
  </ImageData>
</VTKFile>
"#;
        let path = dir.path().join("empty.vti");
        std::fs::write(&path, xml).unwrap();
        assert!(matches!(load_vti(&path), Err(Error::NoScalars)));
    }

    #[test]
    fn scalar_count_mismatch_is_format_error() {
        let err = build_volume(vec![0.0; 7], [[0, 1], [0, 1], [0, 1]]).unwrap_err();
        assert!(matches!(err, Error::Format(_)));
    }
}
