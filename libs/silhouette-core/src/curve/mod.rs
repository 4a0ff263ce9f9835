//! # Curve Builder
//!
//! Turns the pixel-space point sequence of one contour into a closed curve
//! in centered world space.
//!
//! ## Pipeline
//!
//! ```text
//! pixel points → subsample (every step-th) → reverse (holes) → normalize → ClosedCurve
//! ```
//!
//! Normalization maps the pixel extents onto `[0, 1]` and then onto
//! `[-scale/2, scale/2]`, flipping the vertical axis because image rows grow
//! downward while world Y grows upward:
//!
//! ```text
//! u  = x / (width - 1)        v  = y / (height - 1)
//! xw = (u - 0.5) * scale      yw = (0.5 - v) * scale
//! ```

use config::constants::MIN_CURVE_POINTS;
use glam::{DVec2, IVec2};
use serde::{Deserialize, Serialize};

use crate::contour::{Contour, ContourSet};
use crate::error::{Result, SilhouetteError};
use crate::settings::ReconstructSettings;

/// Whether a curve bounds material or cuts it away.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CurveRole {
    /// Outer boundary of a filled region
    Outer,
    /// Interior cut-out, wound opposite to its outer curve
    Hole,
}

impl CurveRole {
    /// Holes are emitted in reversed point order.
    #[inline]
    pub fn is_reversed(self) -> bool {
        matches!(self, CurveRole::Hole)
    }
}

/// A closed polyline in world coordinates.
///
/// Always holds at least [`MIN_CURVE_POINTS`] points; the last point
/// implicitly connects back to the first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClosedCurve {
    points: Vec<DVec2>,
    role: CurveRole,
    contour: usize,
    parent: Option<usize>,
    cyclic: bool,
}

impl ClosedCurve {
    /// Creates a curve, or `None` if fewer than three points are given.
    pub fn new(
        points: Vec<DVec2>,
        role: CurveRole,
        contour: usize,
        parent: Option<usize>,
    ) -> Option<Self> {
        if points.len() < MIN_CURVE_POINTS {
            return None;
        }
        Some(Self {
            points,
            role,
            contour,
            parent,
            cyclic: true,
        })
    }

    /// World-space points in emission order.
    #[inline]
    pub fn points(&self) -> &[DVec2] {
        &self.points
    }

    /// Outer boundary or hole.
    #[inline]
    pub fn role(&self) -> CurveRole {
        self.role
    }

    /// Index of the contour this curve was built from.
    #[inline]
    pub fn contour(&self) -> usize {
        self.contour
    }

    /// Contour index of the enclosing outer curve, for holes.
    #[inline]
    pub fn parent(&self) -> Option<usize> {
        self.parent
    }

    /// Closed curves are always cyclic.
    #[inline]
    pub fn is_cyclic(&self) -> bool {
        self.cyclic
    }

    /// Number of points.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Never true for a constructed curve; provided for API symmetry.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Shoelace signed area. Positive for counter-clockwise winding.
    pub fn signed_area(&self) -> f64 {
        signed_area(&self.points)
    }
}

/// Shoelace signed area of a closed ring. Positive for counter-clockwise
/// winding in a Y-up frame.
pub fn signed_area(ring: &[DVec2]) -> f64 {
    let n = ring.len();
    if n < MIN_CURVE_POINTS {
        return 0.0;
    }
    let twice: f64 = (0..n)
        .map(|i| ring[i].perp_dot(ring[(i + 1) % n]))
        .sum();
    twice * 0.5
}

/// Ordered set of closed curves extruded together as one solid.
///
/// Each outer curve is immediately followed by its own holes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CurveGroup {
    curves: Vec<ClosedCurve>,
}

impl CurveGroup {
    /// Creates an empty group.
    pub fn new() -> Self {
        Self::default()
    }

    /// Curves in generation order.
    #[inline]
    pub fn curves(&self) -> &[ClosedCurve] {
        &self.curves
    }

    /// Number of curves.
    #[inline]
    pub fn len(&self) -> usize {
        self.curves.len()
    }

    /// Returns true if no curve survived reconstruction.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.curves.is_empty()
    }

    /// Iterates over the curves in generation order.
    pub fn iter(&self) -> std::slice::Iter<'_, ClosedCurve> {
        self.curves.iter()
    }

    /// Outer curves only.
    pub fn outers(&self) -> impl Iterator<Item = &ClosedCurve> + '_ {
        self.curves.iter().filter(|c| c.role == CurveRole::Outer)
    }

    /// Hole curves whose parent is contour `outer`.
    pub fn holes_of(&self, outer: usize) -> impl Iterator<Item = &ClosedCurve> + '_ {
        self.curves
            .iter()
            .filter(move |c| c.role == CurveRole::Hole && c.parent == Some(outer))
    }

    /// Total number of points across all curves.
    pub fn point_count(&self) -> usize {
        self.curves.iter().map(ClosedCurve::len).sum()
    }
}

impl FromIterator<ClosedCurve> for CurveGroup {
    fn from_iter<I: IntoIterator<Item = ClosedCurve>>(iter: I) -> Self {
        Self {
            curves: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a CurveGroup {
    type Item = &'a ClosedCurve;
    type IntoIter = std::slice::Iter<'a, ClosedCurve>;

    fn into_iter(self) -> Self::IntoIter {
        self.curves.iter()
    }
}

impl IntoIterator for CurveGroup {
    type Item = ClosedCurve;
    type IntoIter = std::vec::IntoIter<ClosedCurve>;

    fn into_iter(self) -> Self::IntoIter {
        self.curves.into_iter()
    }
}

// =============================================================================
// BUILDER
// =============================================================================

/// Builds closed curves for one image frame.
///
/// # Example
///
/// ```rust
/// use glam::IVec2;
/// use silhouette_core::CurveBuilder;
///
/// let builder = CurveBuilder::new(10, 10, 2.0, 1).unwrap();
/// let square = [IVec2::new(3, 3), IVec2::new(3, 6), IVec2::new(6, 6), IVec2::new(6, 3)];
///
/// let points = builder.build_points(&square, false).unwrap();
/// assert_eq!(points.len(), 4);
/// assert!((points[0].x - (3.0 / 9.0 - 0.5) * 2.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveBuilder {
    x_extent: f64,
    y_extent: f64,
    scale: f64,
    step: usize,
}

impl CurveBuilder {
    /// Creates a builder for a `width` x `height` pixel frame.
    ///
    /// # Errors
    ///
    /// Rejects frames of one pixel or less, non-positive or non-finite
    /// scales and a zero step.
    pub fn new(width: u32, height: u32, scale: f64, step: usize) -> Result<Self> {
        if width <= 1 || height <= 1 {
            return Err(SilhouetteError::InvalidDimensions { width, height });
        }
        ReconstructSettings {
            scale,
            step,
            ..Default::default()
        }
        .validate()?;

        Ok(Self {
            x_extent: f64::from(width - 1),
            y_extent: f64::from(height - 1),
            scale,
            step,
        })
    }

    /// Creates a builder for the frame of `set`.
    pub fn for_set(set: &ContourSet, settings: &ReconstructSettings) -> Result<Self> {
        Self::new(set.width(), set.height(), settings.scale, settings.step)
    }

    /// Subsampling step in use.
    #[inline]
    pub fn step(&self) -> usize {
        self.step
    }

    /// Maps one pixel to world space.
    #[inline]
    pub fn to_world(&self, pixel: IVec2) -> DVec2 {
        let u = f64::from(pixel.x) / self.x_extent;
        let v = f64::from(pixel.y) / self.y_extent;
        DVec2::new((u - 0.5) * self.scale, (0.5 - v) * self.scale)
    }

    /// Runs the curve algorithm on a raw point sequence.
    ///
    /// Points are subsampled on their original order (indices `0, step,
    /// 2*step, ...`), so a reversed curve is the exact mirror of the forward
    /// one. Reversing before subsampling would keep a different point set
    /// whenever `(len - 1) % step != 0`. Returns `None` when fewer than three
    /// points remain.
    pub fn build_points(&self, points: &[IVec2], reverse: bool) -> Option<Vec<DVec2>> {
        let mut kept: Vec<IVec2> = points.iter().step_by(self.step).copied().collect();
        if kept.len() < MIN_CURVE_POINTS {
            return None;
        }
        if reverse {
            kept.reverse();
        }
        Some(kept.into_iter().map(|p| self.to_world(p)).collect())
    }

    /// Builds the curve for `contour` with the winding implied by `role`.
    pub fn build(&self, contour: &Contour, role: CurveRole) -> Option<ClosedCurve> {
        let points = self.build_points(contour.points(), role.is_reversed())?;
        ClosedCurve::new(points, role, contour.index(), contour.parent())
    }
}
