//! Cap triangulation for polygons with holes (ear clipping via `earcutr`).

use earcutr::earcut;
use glam::DVec2;

use super::Polygon2D;
use crate::error::{MeshError, Result};

/// Triangulates the area between the outer ring and the holes.
///
/// Indices refer to the rings concatenated in order (outer first). Every
/// triangle is returned counter-clockwise in the XY plane.
pub(crate) fn triangulate_cap(polygon: &Polygon2D) -> Result<Vec<[u32; 3]>> {
    let rings = std::iter::once(&polygon.outer).chain(polygon.holes.iter());

    let mut ring_points: Vec<DVec2> = Vec::with_capacity(polygon.vertex_count());
    let mut hole_starts = Vec::with_capacity(polygon.holes.len());
    for (i, ring) in rings.enumerate() {
        if i > 0 {
            hole_starts.push(ring_points.len());
        }
        ring_points.extend_from_slice(ring);
    }

    let coords: Vec<f64> = ring_points.iter().flat_map(|p| [p.x, p.y]).collect();
    let indices = earcut(&coords, &hole_starts, 2)
        .map_err(|e| MeshError::triangulation(polygon.contour, format!("{e:?}")))?;

    if indices.is_empty() || indices.len() % 3 != 0 {
        return Err(MeshError::triangulation(
            polygon.contour,
            format!("ear clipping returned {} indices", indices.len()),
        ));
    }

    Ok(indices
        .chunks_exact(3)
        .map(|tri| {
            let [a, b, c] = [tri[0], tri[1], tri[2]];
            let (pa, pb, pc) = (ring_points[a], ring_points[b], ring_points[c]);
            if (pb - pa).perp_dot(pc - pa) < 0.0 {
                [a as u32, c as u32, b as u32]
            } else {
                [a as u32, b as u32, c as u32]
            }
        })
        .collect())
}
