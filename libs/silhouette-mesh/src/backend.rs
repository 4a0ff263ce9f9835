//! # Mesh Backend
//!
//! [`ExtrusionBackend`] implementation producing triangle meshes and binary
//! STL files.

use std::path::Path;

use log::{info, warn};
use silhouette_core::{CurveGroup, ExtrusionBackend};

use crate::error::{MeshError, Result};
use crate::export::save_stl;
use crate::extrude::{extrude_group, ExtrudeParams};
use crate::mesh::Mesh;

/// Extruded solid held by the mesh backend.
#[derive(Debug, Clone)]
pub struct MeshHandle {
    mesh: Mesh,
    name: String,
}

impl MeshHandle {
    /// The extruded mesh.
    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    /// Object name for the solid.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Consumes the handle, returning the mesh.
    pub fn into_mesh(self) -> Mesh {
        self.mesh
    }
}

/// Geometry engine built on linear extrusion and STL export.
#[derive(Debug, Clone)]
pub struct MeshBackend {
    symmetric: bool,
    allow_empty: bool,
    name: String,
}

impl Default for MeshBackend {
    fn default() -> Self {
        Self {
            symmetric: true,
            allow_empty: false,
            name: config::constants::DEFAULT_SOLID_NAME.to_string(),
        }
    }
}

impl MeshBackend {
    /// Creates a backend with symmetric extrusion that rejects empty groups.
    pub fn new() -> Self {
        Self::default()
    }

    /// Extrudes to both sides of the curve plane (default) or upward only.
    pub fn symmetric(mut self, symmetric: bool) -> Self {
        self.symmetric = symmetric;
        self
    }

    /// Accepts an empty curve group and exports an empty solid.
    pub fn allow_empty(mut self, allow_empty: bool) -> Self {
        self.allow_empty = allow_empty;
        self
    }

    /// Sets the object name given to extruded solids.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}

impl ExtrusionBackend for MeshBackend {
    type Handle = MeshHandle;
    type Error = MeshError;

    fn extrude(&self, group: &CurveGroup, depth: f64) -> Result<MeshHandle> {
        let params = ExtrudeParams {
            depth,
            symmetric: self.symmetric,
        };
        let mut mesh = extrude_group(group, &params)?;

        // Orphan holes and flat outers leave nothing to extrude even when
        // the group itself has curves.
        if mesh.is_empty() {
            if !self.allow_empty {
                return Err(MeshError::EmptyGroup);
            }
            warn!(
                "no solid geometry left from {} curves, exporting an empty solid",
                group.len()
            );
        }
        mesh.compute_normals();

        info!(
            "extruded {} curves into {} vertices, {} triangles",
            group.len(),
            mesh.vertex_count(),
            mesh.triangle_count()
        );

        Ok(MeshHandle {
            mesh,
            name: self.name.clone(),
        })
    }

    fn export(&self, handle: &MeshHandle, path: &Path) -> Result<()> {
        save_stl(&handle.mesh, path)?;
        info!("exported '{}' to {}", handle.name, path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec2;
    use silhouette_core::{ClosedCurve, CurveRole};

    fn square_group() -> CurveGroup {
        let points = vec![
            DVec2::new(-1.0, -1.0),
            DVec2::new(1.0, -1.0),
            DVec2::new(1.0, 1.0),
            DVec2::new(-1.0, 1.0),
        ];
        std::iter::once(ClosedCurve::new(points, CurveRole::Outer, 0, None).unwrap()).collect()
    }

    #[test]
    fn test_empty_group_rejected_by_default() {
        let result = MeshBackend::new().extrude(&CurveGroup::new(), 0.1);
        assert!(matches!(result, Err(MeshError::EmptyGroup)));
    }

    #[test]
    fn test_empty_group_allowed() {
        let handle = MeshBackend::new()
            .allow_empty(true)
            .extrude(&CurveGroup::new(), 0.1)
            .unwrap();
        assert!(handle.mesh().is_empty());
    }

    #[test]
    fn test_group_without_solid_area_rejected() {
        let flat_outer = vec![DVec2::ZERO, DVec2::new(0.5, 0.5), DVec2::ONE];
        let hole = vec![
            DVec2::new(0.2, 0.1),
            DVec2::new(0.2, 0.3),
            DVec2::new(0.4, 0.3),
        ];
        let group: CurveGroup = vec![
            ClosedCurve::new(flat_outer, CurveRole::Outer, 0, None).unwrap(),
            ClosedCurve::new(hole, CurveRole::Hole, 1, Some(0)).unwrap(),
        ]
        .into_iter()
        .collect();

        let result = MeshBackend::new().extrude(&group, 0.1);
        assert!(matches!(result, Err(MeshError::EmptyGroup)));

        let handle = MeshBackend::new()
            .allow_empty(true)
            .extrude(&group, 0.1)
            .unwrap();
        assert!(handle.mesh().is_empty());
    }

    #[test]
    fn test_symmetric_extrusion_straddles_plane() {
        let handle = MeshBackend::new().extrude(&square_group(), 0.25).unwrap();
        let (min, max) = handle.mesh().bounding_box();
        assert_eq!(min.z, -0.25);
        assert_eq!(max.z, 0.25);
        assert!(handle.mesh().normals().is_some());
    }

    #[test]
    fn test_asymmetric_extrusion_starts_at_plane() {
        let handle = MeshBackend::new()
            .symmetric(false)
            .named("plate")
            .extrude(&square_group(), 0.25)
            .unwrap();
        let (min, max) = handle.mesh().bounding_box();
        assert_eq!(min.z, 0.0);
        assert_eq!(max.z, 0.25);
        assert_eq!(handle.name(), "plate");
    }

    #[test]
    fn test_non_positive_depth_rejected() {
        let result = MeshBackend::new().extrude(&square_group(), 0.0);
        assert!(matches!(result, Err(MeshError::DegenerateGeometry { .. })));
    }
}
