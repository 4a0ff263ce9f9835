//! # Extrusion Backend Interface
//!
//! The narrow seam between curve reconstruction and whatever geometry engine
//! turns curves into a solid. The core only ever hands a backend a finished
//! curve group; partial groups are never streamed.

use std::path::Path;

use log::info;

use crate::contour::ContourSet;
use crate::curve::CurveGroup;
use crate::error::SilhouetteError;
use crate::hierarchy::assemble;
use crate::settings::ReconstructSettings;

/// A geometry engine able to extrude a curve group and export the result.
pub trait ExtrusionBackend {
    /// Engine-side handle to an extruded solid.
    type Handle;
    /// Engine error type. Reconstruction errors convert into it.
    type Error: From<SilhouetteError>;

    /// Extrudes all curves of `group` as one solid, `depth` along the curve
    /// plane normal.
    fn extrude(&self, group: &CurveGroup, depth: f64) -> Result<Self::Handle, Self::Error>;

    /// Writes the solid behind `handle` to `path`.
    fn export(&self, handle: &Self::Handle, path: &Path) -> Result<(), Self::Error>;
}

/// Reconstructs the curves of `set`, extrudes them and exports the solid.
///
/// Returns the curve group that was handed to the backend. The group may
/// be empty; deciding whether that is acceptable is left to the backend and
/// the caller.
pub fn build_solid<B: ExtrusionBackend>(
    backend: &B,
    set: &ContourSet,
    settings: &ReconstructSettings,
    depth: f64,
    path: &Path,
) -> Result<CurveGroup, B::Error> {
    let group = assemble(set, settings)?;
    info!(
        "reconstructed {} curves ({} outer) with {} points",
        group.len(),
        group.outers().count(),
        group.point_count()
    );

    let handle = backend.extrude(&group, depth)?;
    backend.export(&handle, path)?;
    Ok(group)
}
