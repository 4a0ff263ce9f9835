//! # Border-Clip Filter
//!
//! A region whose boundary runs along the image frame is almost always a
//! shape cut off by the camera, not a closed silhouette. Extruding it would
//! add a spurious wall along the image edge, so such top-level contours are
//! excluded before curve reconstruction.
//!
//! Holes are never border-tested on their own; they follow their outer
//! contour.

use glam::IVec2;

use crate::contour::ContourSet;

/// Returns true if any point lies within `margin` pixels of the image frame.
///
/// The comparison is inclusive on every side: a point satisfies the
/// predicate when `x <= margin`, `y <= margin`, `x >= width - margin` or
/// `y >= height - margin`.
///
/// # Example
///
/// ```rust
/// use glam::IVec2;
/// use silhouette_core::touches_border;
///
/// let square = [IVec2::new(2, 2), IVec2::new(2, 7), IVec2::new(7, 7), IVec2::new(7, 2)];
/// assert!(touches_border(&square, 10, 10, 2));
/// assert!(!touches_border(&square, 10, 10, 1));
/// ```
pub fn touches_border(points: &[IVec2], width: u32, height: u32, margin: u32) -> bool {
    let margin = i64::from(margin);
    let right = i64::from(width) - margin;
    let bottom = i64::from(height) - margin;

    points.iter().any(|p| {
        let (x, y) = (i64::from(p.x), i64::from(p.y));
        x <= margin || y <= margin || x >= right || y >= bottom
    })
}

/// Indices of the top-level contours that are not clipped by the frame,
/// in original order.
pub fn eligible_outers(set: &ContourSet, margin: u32) -> Vec<usize> {
    set.top_level()
        .filter(|c| !touches_border(c.points(), set.width(), set.height(), margin))
        .map(|c| c.index())
        .collect()
}
