//! End-to-end exercise of the public API: load a `.vti` file from disk,
//! install it in a session, select a region, and read back the histogram
//! samples.

use std::fmt::Write as _;
use std::path::PathBuf;

use approx::assert_relative_eq;
use voxscope_core::{loader, RoiBounds, Session};

fn write_gradient_vti(dir: &tempfile::TempDir, n: usize) -> PathBuf {
    let mut values = String::new();
    #[allow(clippy::cast_precision_loss)]
    for i in 0..n * n * n {
        let _ = write!(values, "{} ", i as f32);
    }
    let hi = n - 1;
    let whole = format!("0 {hi} 0 {hi} 0 {hi}");
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
    let path = dir.path().join("gradient.vti");
    std::fs::write(&path, xml).unwrap();
    path
}

#[test]
fn load_select_and_histogram() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_gradient_vti(&dir, 8);

    let volume = loader::load_vti(&path).unwrap();
    assert_eq!(volume.dims(), [8, 8, 8]);

    let mut session = Session::default();
    session.load(volume);
    assert!(session.is_loaded());
    assert_eq!(session.histogram().whole_samples().len(), 512);

    // A 2x2x2 corner selection holds the eight smallest values.
    let count = session
        .set_roi(RoiBounds::new([0, 1], [0, 1], [0, 1]))
        .unwrap();
    assert_eq!(count, 8);
    let samples = session.histogram().roi_samples().unwrap();
    assert_eq!(samples.len(), 8);
    assert_relative_eq!(samples.iter().copied().fold(f32::MIN, f32::max), 73.0);

    session.unload();
    assert!(!session.is_loaded());
    assert!(session.histogram().whole_samples().is_empty());
    assert!(session.roi().is_none());
}

#[test]
fn reload_replaces_roi_state() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_gradient_vti(&dir, 4);

    let mut session = Session::default();
    session.load(loader::load_vti(&path).unwrap());
    session
        .set_roi(RoiBounds::new([0, 3], [0, 3], [0, 3]))
        .unwrap();
    assert!(session.roi().is_some());

    // Loading again starts from a clean slate.
    session.load(loader::load_vti(&path).unwrap());
    assert!(session.roi().is_none());
    assert!(session.histogram().roi_samples().is_none());
    assert_eq!(session.histogram().whole_samples().len(), 64);
}
