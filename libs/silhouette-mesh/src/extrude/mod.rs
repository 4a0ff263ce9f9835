//! # Extrusion
//!
//! Turns a curve group into a closed solid:
//! - **Polygon2D**: one outer ring with its holes, winding normalized
//! - **linear_extrude**: caps plus side walls for one polygon
//! - **extrude_group**: every polygon of a group merged into one mesh

mod linear;
mod triangulate;


pub use linear::{extrude_group, linear_extrude, ExtrudeParams};

use config::constants::{AREA_EPSILON, MIN_CURVE_POINTS};
use glam::DVec2;
use log::warn;
use silhouette_core::{signed_area, CurveGroup};

/// A 2D polygon for extrusion.
///
/// After [`Polygon2D::normalized`] the outer ring winds counter-clockwise
/// and every hole clockwise, whatever order the curves arrived in.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon2D {
    /// Contour index the outer ring was built from
    pub contour: usize,
    /// Outer boundary vertices
    pub outer: Vec<DVec2>,
    /// Holes cut out of the outer boundary
    pub holes: Vec<Vec<DVec2>>,
}

impl Polygon2D {
    /// Creates a polygon without holes.
    pub fn new(contour: usize, outer: Vec<DVec2>) -> Self {
        Self {
            contour,
            outer,
            holes: Vec::new(),
        }
    }

    /// Creates a polygon with holes.
    pub fn with_holes(contour: usize, outer: Vec<DVec2>, holes: Vec<Vec<DVec2>>) -> Self {
        Self {
            contour,
            outer,
            holes,
        }
    }

    /// Returns the number of vertices across all rings.
    pub fn vertex_count(&self) -> usize {
        self.outer.len() + self.holes.iter().map(Vec::len).sum::<usize>()
    }

    /// Returns true if the polygon has holes.
    pub fn has_holes(&self) -> bool {
        !self.holes.is_empty()
    }

    /// Cleans every ring and fixes its winding.
    ///
    /// Consecutive duplicate points are merged and a repeated closing point
    /// is dropped. Holes that collapse are discarded.
    ///
    /// Returns `None` if the outer ring has no area left.
    pub fn normalized(self) -> Option<Self> {
        let outer = orient(clean_ring(self.outer)?, true)?;
        let holes = self
            .holes
            .into_iter()
            .filter_map(|hole| orient(clean_ring(hole)?, false))
            .collect();

        Some(Self {
            contour: self.contour,
            outer,
            holes,
        })
    }
}

/// Drops consecutive duplicates, including a closing copy of the first point.
fn clean_ring(mut ring: Vec<DVec2>) -> Option<Vec<DVec2>> {
    ring.dedup();
    while ring.len() > 1 && ring.first() == ring.last() {
        ring.pop();
    }
    (ring.len() >= MIN_CURVE_POINTS).then_some(ring)
}

/// Reverses `ring` if its winding does not match `counter_clockwise`.
fn orient(mut ring: Vec<DVec2>, counter_clockwise: bool) -> Option<Vec<DVec2>> {
    let area = signed_area(&ring);
    if area.abs() <= AREA_EPSILON {
        return None;
    }
    if (area > 0.0) != counter_clockwise {
        ring.reverse();
    }
    Some(ring)
}

/// Splits a curve group into one polygon per outer curve.
///
/// Holes are attached to the outer curve built from their parent contour.
/// A hole whose outer curve did not survive reconstruction has nothing to
/// be cut from and is skipped.
pub fn polygons_from_group(group: &CurveGroup) -> Vec<Polygon2D> {
    let polygons: Vec<Polygon2D> = group
        .outers()
        .map(|outer| {
            let holes = group
                .holes_of(outer.contour())
                .map(|hole| hole.points().to_vec())
                .collect();
            Polygon2D::with_holes(outer.contour(), outer.points().to_vec(), holes)
        })
        .collect();

    let attached: usize = polygons.iter().map(|p| p.holes.len()).sum();
    let total_holes = group.len() - polygons.len();
    if attached < total_holes {
        warn!(
            "skipping {} hole curves whose outer curve was dropped",
            total_holes - attached
        );
    }

    polygons
}
