//! # Contour Extraction
//!
//! Border following on a binary mask, flattened to the two-level
//! outer / hole hierarchy the reconstruction core works with.
//!
//! Border following yields a full nesting tree: a blob sitting inside a hole
//! is an outer border whose parent is that hole. Flattening re-roots every
//! outer border, so each one is top-level and each hole keeps the outer
//! border that encloses it.

use glam::IVec2;
use image::GrayImage;
use imageproc::contours::{find_contours, BorderType};
use log::debug;
use silhouette_core::ContourSet;

use crate::error::Result;

/// Extracts the flattened contour set of a binary mask.
///
/// Non-zero pixels are foreground. Contours keep their extraction order;
/// straight pixel runs are reduced to their end points.
pub fn extract_contours(mask: &GrayImage) -> Result<ContourSet> {
    let raw = find_contours::<i32>(mask);

    let mut rerooted = 0usize;
    let entries: Vec<(Vec<IVec2>, Option<usize>)> = raw
        .iter()
        .map(|contour| {
            let points: Vec<IVec2> = contour
                .points
                .iter()
                .map(|p| IVec2::new(p.x, p.y))
                .collect();
            let parent = match contour.border_type {
                BorderType::Outer => {
                    if contour.parent.is_some() {
                        rerooted += 1;
                    }
                    None
                }
                BorderType::Hole => contour.parent,
            };
            (compress_runs(&points), parent)
        })
        .collect();

    debug!(
        "extracted {} contours ({} nested outer borders re-rooted)",
        entries.len(),
        rerooted
    );

    Ok(ContourSet::new(mask.width(), mask.height(), entries)?)
}

/// Reduces straight horizontal, vertical and diagonal runs of a closed
/// pixel chain to their end points.
///
/// A point is kept when the step leading into it differs from the step
/// leading out of it. Chains shorter than three points are returned as-is.
pub fn compress_runs(points: &[IVec2]) -> Vec<IVec2> {
    let n = points.len();
    if n < 3 {
        return points.to_vec();
    }

    let compressed: Vec<IVec2> = (0..n)
        .filter(|&i| {
            let prev = points[(i + n - 1) % n];
            let next = points[(i + 1) % n];
            let current = points[i];
            (current - prev).signum() != (next - current).signum()
        })
        .map(|i| points[i])
        .collect();

    if compressed.is_empty() {
        points.to_vec()
    } else {
        compressed
    }
}
