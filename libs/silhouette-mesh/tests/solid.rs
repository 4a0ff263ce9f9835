//! End-to-end: contour set → curve group → STL file.

use std::fs::File;

use glam::IVec2;
use silhouette_core::{build_solid, ContourSet, ReconstructSettings};
use silhouette_mesh::{MeshBackend, MeshError};
use tempfile::TempDir;

fn square(x0: i32, y0: i32, x1: i32, y1: i32) -> Vec<IVec2> {
    vec![
        IVec2::new(x0, y0),
        IVec2::new(x0, y1),
        IVec2::new(x1, y1),
        IVec2::new(x1, y0),
    ]
}

/// Frame touching the border, a ring with a hole, and a lone blob.
fn sample_set() -> ContourSet {
    ContourSet::new(
        100,
        100,
        vec![
            (square(0, 0, 99, 99), None),
            (square(20, 20, 60, 60), None),
            (square(30, 30, 50, 50), Some(1)),
            (square(70, 70, 80, 80), None),
        ],
    )
    .unwrap()
}

#[test]
fn test_build_solid_writes_stl() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("model.stl");

    let group = build_solid(
        &MeshBackend::new(),
        &sample_set(),
        &ReconstructSettings::default(),
        0.1,
        &path,
    )
    .unwrap();
    assert_eq!(group.len(), 3);

    let mut file = File::open(&path).unwrap();
    let stl = stl_io::read_stl(&mut file).unwrap();
    // ring with hole: 8 verts, blob: 4 verts, both doubled
    assert_eq!(stl.vertices.len(), 24);
    // caps 2 * 8 + walls 8 * 2, then caps 2 * 2 + walls 4 * 2
    assert_eq!(stl.faces.len(), 44);
}

#[test]
fn test_build_solid_rejects_empty_result() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("model.stl");
    let set = ContourSet::new(10, 10, vec![(square(0, 0, 9, 9), None)]).unwrap();

    let result = build_solid(
        &MeshBackend::new(),
        &set,
        &ReconstructSettings::default(),
        0.1,
        &path,
    );
    assert!(matches!(result, Err(MeshError::EmptyGroup)));
    assert!(!path.exists());
}

#[test]
fn test_orphan_hole_does_not_export_empty_stl() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("model.stl");
    // The two-point outer is dropped as degenerate, leaving its hole alone
    let set = ContourSet::new(
        20,
        20,
        vec![
            (vec![IVec2::new(5, 5), IVec2::new(15, 15)], None),
            (square(8, 8, 12, 12), Some(0)),
        ],
    )
    .unwrap();

    let result = build_solid(
        &MeshBackend::new(),
        &set,
        &ReconstructSettings::default(),
        0.1,
        &path,
    );
    assert!(matches!(result, Err(MeshError::EmptyGroup)));
    assert!(!path.exists());
}

#[test]
fn test_build_solid_empty_allowed() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("model.stl");
    let set = ContourSet::new(10, 10, vec![(square(0, 0, 9, 9), None)]).unwrap();

    let group = build_solid(
        &MeshBackend::new().allow_empty(true),
        &set,
        &ReconstructSettings::default(),
        0.1,
        &path,
    )
    .unwrap();
    assert!(group.is_empty());
    assert!(path.exists());
}

#[test]
fn test_invalid_settings_surface_as_reconstruction_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("model.stl");
    let settings = ReconstructSettings {
        step: 0,
        ..ReconstructSettings::default()
    };

    let result = build_solid(&MeshBackend::new(), &sample_set(), &settings, 0.1, &path);
    assert!(matches!(result, Err(MeshError::Reconstruction(_))));
    assert!(!path.exists());
}
