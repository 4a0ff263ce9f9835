//! # Hierarchy Assembler
//!
//! Decides which contours of a set become curves and with which role.
//!
//! ## Algorithm
//!
//! 1. Keep top-level contours that do not touch the image border.
//! 2. For each kept contour, in original order, build its outer curve, then
//!    the reversed curves of its direct holes, in original order.
//! 3. Drop degenerate curves and collect the rest.
//!
//! A clipped outer contour takes all of its holes with it, whether or not a
//! hole touches the border itself. Holes of a kept outer contour are not
//! border-tested at all.

use log::debug;

use crate::border::eligible_outers;
use crate::contour::ContourSet;
use crate::curve::{CurveBuilder, CurveGroup, CurveRole};
use crate::error::Result;
use crate::settings::ReconstructSettings;

/// Reconstructs the curve group for a whole contour set.
///
/// The result is a fresh value; calling this twice with the same input
/// yields identical groups. An empty group is a valid result.
///
/// # Errors
///
/// Returns `InvalidSettings` before any work is done if `settings` are out
/// of range.
///
/// # Example
///
/// ```rust
/// use glam::IVec2;
/// use silhouette_core::{assemble, ContourSet, CurveRole, ReconstructSettings};
///
/// let outer = vec![IVec2::new(3, 3), IVec2::new(3, 8), IVec2::new(8, 8), IVec2::new(8, 3)];
/// let hole = vec![IVec2::new(4, 4), IVec2::new(6, 4), IVec2::new(6, 6)];
/// let set = ContourSet::new(12, 12, vec![(outer, None), (hole, Some(0))]).unwrap();
///
/// let group = assemble(&set, &ReconstructSettings::default()).unwrap();
/// let roles: Vec<CurveRole> = group.iter().map(|c| c.role()).collect();
/// assert_eq!(roles, vec![CurveRole::Outer, CurveRole::Hole]);
/// ```
pub fn assemble(set: &ContourSet, settings: &ReconstructSettings) -> Result<CurveGroup> {
    settings.validate()?;
    let builder = CurveBuilder::for_set(set, settings)?;

    let outers = eligible_outers(set, settings.margin);
    debug!(
        "{} of {} top-level contours clear the {}px border margin",
        outers.len(),
        set.top_level().count(),
        settings.margin
    );

    let mut curves = Vec::new();
    let mut dropped = 0usize;

    for &outer in &outers {
        let members = std::iter::once((outer, CurveRole::Outer))
            .chain(set.holes_of(outer).iter().map(|&hole| (hole, CurveRole::Hole)));

        for (index, role) in members {
            let Some(contour) = set.contour(index) else {
                continue;
            };
            match builder.build(contour, role) {
                Some(curve) => curves.push(curve),
                None => dropped += 1,
            }
        }
    }

    debug!(
        "built {} curves, dropped {} degenerate (step {})",
        curves.len(),
        dropped,
        builder.step()
    );

    Ok(curves.into_iter().collect())
}
