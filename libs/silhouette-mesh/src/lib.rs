//! # Silhouette Mesh
//!
//! Extrusion backend for reconstructed curve groups. Turns the closed curves
//! of a [`silhouette_core::CurveGroup`] into a watertight triangle mesh and
//! writes it as binary STL.
//!
//! ## Architecture
//!
//! ```text
//! CurveGroup → Polygon2D (outer + holes) → linear_extrude → Mesh → STL
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use silhouette_core::{build_solid, ReconstructSettings};
//! use silhouette_mesh::MeshBackend;
//!
//! let backend = MeshBackend::new();
//! build_solid(&backend, &set, &ReconstructSettings::default(), 0.1, path)?;
//! ```

pub mod backend;
pub mod error;
pub mod export;
pub mod extrude;
pub mod mesh;

pub use backend::{MeshBackend, MeshHandle};
pub use error::{MeshError, Result};
pub use export::{save_stl, write_stl};
pub use extrude::{extrude_group, linear_extrude, polygons_from_group, ExtrudeParams, Polygon2D};
pub use mesh::Mesh;
