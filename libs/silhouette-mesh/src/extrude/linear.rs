//! # Linear Extrusion
//!
//! Extrudes a 2D polygon with holes along the Z axis into a closed solid.
//!
//! Bottom and top rings share their vertices between the caps and the side
//! walls, so the result is watertight. With the outer ring counter-clockwise
//! and holes clockwise, the same wall winding faces outward on both.

use config::constants::{MAX_TRIANGLES, MAX_VERTICES};
use glam::DVec3;
use log::debug;
use silhouette_core::CurveGroup;

use super::triangulate::triangulate_cap;
use super::{polygons_from_group, Polygon2D};
use crate::error::{MeshError, Result};
use crate::mesh::Mesh;

/// Parameters for linear extrusion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExtrudeParams {
    /// Extrusion depth along Z
    pub depth: f64,
    /// Extend `depth` to both sides of the curve plane instead of only
    /// upward
    pub symmetric: bool,
}

impl Default for ExtrudeParams {
    fn default() -> Self {
        Self {
            depth: config::constants::DEFAULT_EXTRUDE_DEPTH,
            symmetric: true,
        }
    }
}

impl ExtrudeParams {
    /// Z range covered by the solid.
    pub fn z_range(&self) -> (f64, f64) {
        if self.symmetric {
            (-self.depth, self.depth)
        } else {
            (0.0, self.depth)
        }
    }

    fn validate(&self) -> Result<()> {
        if !self.depth.is_finite() || self.depth <= 0.0 {
            return Err(MeshError::degenerate(format!(
                "extrusion depth must be positive, got {}",
                self.depth
            )));
        }
        Ok(())
    }
}

/// Extrudes one polygon along the Z axis.
///
/// The polygon must already be normalized (see [`Polygon2D::normalized`]).
///
/// # Example
///
/// ```rust
/// use glam::DVec2;
/// use silhouette_mesh::extrude::{linear_extrude, ExtrudeParams, Polygon2D};
///
/// let square = Polygon2D::new(0, vec![
///     DVec2::new(0.0, 0.0),
///     DVec2::new(1.0, 0.0),
///     DVec2::new(1.0, 1.0),
///     DVec2::new(0.0, 1.0),
/// ]);
/// let mesh = linear_extrude(&square, &ExtrudeParams::default()).unwrap();
/// assert_eq!(mesh.vertex_count(), 8);
/// assert_eq!(mesh.triangle_count(), 12);
/// ```
pub fn linear_extrude(polygon: &Polygon2D, params: &ExtrudeParams) -> Result<Mesh> {
    params.validate()?;

    if polygon.outer.len() < 3 {
        return Err(MeshError::degenerate(
            "Polygon must have at least 3 vertices",
        ));
    }

    let n = polygon.vertex_count();
    let cap = triangulate_cap(polygon)?;

    let vertex_count = 2 * n;
    let triangle_count = 2 * cap.len() + 2 * n;
    check_limits(vertex_count, triangle_count)?;

    let (z0, z1) = params.z_range();
    let mut mesh = Mesh::with_capacity(vertex_count, triangle_count);

    // Bottom ring block [0, n), top ring block [n, 2n)
    for z in [z0, z1] {
        let rings = std::iter::once(&polygon.outer).chain(polygon.holes.iter());
        for point in rings.flatten() {
            mesh.add_vertex(DVec3::new(point.x, point.y, z));
        }
    }

    let top = n as u32;
    for &[a, b, c] in &cap {
        // Bottom faces -Z
        mesh.add_triangle(a, c, b);
        // Top faces +Z
        mesh.add_triangle(top + a, top + b, top + c);
    }

    let mut start = 0u32;
    let rings = std::iter::once(&polygon.outer).chain(polygon.holes.iter());
    for ring in rings {
        let len = ring.len() as u32;
        for i in 0..len {
            let j = (i + 1) % len;
            let (bi, bj) = (start + i, start + j);
            let (ti, tj) = (top + bi, top + bj);
            mesh.add_triangle(bi, bj, tj);
            mesh.add_triangle(bi, tj, ti);
        }
        start += len;
    }

    Ok(mesh)
}

/// Extrudes every outer curve of `group`, with its holes, into one mesh.
///
/// Outer curves with no area left after cleanup are skipped.
pub fn extrude_group(group: &CurveGroup, params: &ExtrudeParams) -> Result<Mesh> {
    params.validate()?;

    let mut mesh = Mesh::new();
    let mut skipped = 0usize;

    for polygon in polygons_from_group(group) {
        let contour = polygon.contour;
        let Some(polygon) = polygon.normalized() else {
            skipped += 1;
            debug!("outer contour {contour} has no area, skipped");
            continue;
        };
        let part = linear_extrude(&polygon, params)?;
        check_limits(
            mesh.vertex_count() + part.vertex_count(),
            mesh.triangle_count() + part.triangle_count(),
        )?;
        mesh.merge(&part);
    }

    debug!(
        "extruded {} vertices, {} triangles ({} polygons skipped)",
        mesh.vertex_count(),
        mesh.triangle_count(),
        skipped
    );

    Ok(mesh)
}

fn check_limits(vertices: usize, triangles: usize) -> Result<()> {
    if vertices > MAX_VERTICES {
        return Err(MeshError::TooManyVertices {
            count: vertices,
            max: MAX_VERTICES,
        });
    }
    if triangles > MAX_TRIANGLES {
        return Err(MeshError::TooManyTriangles {
            count: triangles,
            max: MAX_TRIANGLES,
        });
    }
    Ok(())
}
