//! Fixed anatomical annotations and their marker palette.

/// A load-time-defined 3D label: name, position in volume index space, and
/// the description shown in the popup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Annotation {
    pub name: &'static str,
    pub position: [f64; 3],
    pub description: &'static str,
}

/// Marker colors, assigned to annotations by index modulo 3.
pub const MARKER_PALETTE: [[u8; 3]; 3] = [[255, 0, 0], [0, 255, 0], [0, 0, 255]];

const ANNOTATIONS: [Annotation; 3] = [
    Annotation {
        name: "Region 1",
        position: [50.0, 50.0, 50.0],
        description: "Lungs: oxygen uptake and gas exchange.",
    },
    Annotation {
        name: "Region 2",
        position: [100.0, 100.0, 100.0],
        description: "Heart: pumps blood through the body.",
    },
    Annotation {
        name: "Region 3",
        position: [160.0, 150.0, 150.0],
        description: "Ribs: protect the chest cavity and its organs.",
    },
];

/// The fixed annotation table for the bundled dataset.
#[must_use]
pub fn default_annotations() -> &'static [Annotation] {
    &ANNOTATIONS
}

/// Marker color for the annotation at `index`.
#[must_use]
pub fn marker_color(index: usize) -> [u8; 3] {
    MARKER_PALETTE[index % MARKER_PALETTE.len()]
}
