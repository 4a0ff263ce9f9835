//! # Silhouette Core
//!
//! Reconstructs closed, correctly wound curves from the contour hierarchy
//! of a binarized image, ready to be extruded into a solid.
//!
//! ## Architecture
//!
//! ```text
//! ContourSetRecord (tracer) → ContourSet (validated arena)
//!       ↓
//! Border-Clip Filter (eligible top-level contours)
//!       ↓
//! Hierarchy Assembler + Curve Builder
//!       ↓
//! CurveGroup → ExtrusionBackend (mesh, file)
//! ```
//!
//! Everything here is pure, synchronous and deterministic.
//!
//! ## Usage
//!
//! ```rust
//! use glam::IVec2;
//! use silhouette_core::{assemble, ContourSet, ReconstructSettings};
//!
//! let square = vec![IVec2::new(3, 3), IVec2::new(3, 6), IVec2::new(6, 6), IVec2::new(6, 3)];
//! let set = ContourSet::new(10, 10, vec![(square, None)])?;
//! let group = assemble(&set, &ReconstructSettings::default())?;
//! assert_eq!(group.len(), 1);
//! # Ok::<(), silhouette_core::SilhouetteError>(())
//! ```

pub mod backend;
pub mod border;
pub mod contour;
pub mod curve;
pub mod error;
pub mod hierarchy;
pub mod settings;

pub use backend::{build_solid, ExtrusionBackend};
pub use border::{eligible_outers, touches_border};
pub use contour::{Contour, ContourRecord, ContourSet, ContourSetRecord};
pub use curve::{signed_area, ClosedCurve, CurveBuilder, CurveGroup, CurveRole};
pub use error::{HierarchyFault, Result, SilhouetteError};
pub use hierarchy::assemble;
pub use settings::ReconstructSettings;
