//! # Mesh Errors
//!
//! Error types for extrusion and export.

use silhouette_core::SilhouetteError;
use thiserror::Error;

/// Errors that can occur while turning curves into a solid.
#[derive(Debug, Error)]
pub enum MeshError {
    /// Curve reconstruction failed before extrusion started
    #[error(transparent)]
    Reconstruction(#[from] SilhouetteError),

    /// Input cannot produce a solid
    #[error("Degenerate geometry: {message}")]
    DegenerateGeometry { message: String },

    /// The backend was asked to extrude an empty curve group
    #[error("Curve group is empty: no closed region survived reconstruction")]
    EmptyGroup,

    /// Cap triangulation failed
    #[error("Triangulation failed for outer contour {contour}: {message}")]
    TriangulationFailed { contour: usize, message: String },

    /// Too many vertices
    #[error("Too many vertices: {count} (max: {max})")]
    TooManyVertices { count: usize, max: usize },

    /// Too many triangles
    #[error("Too many triangles: {count} (max: {max})")]
    TooManyTriangles { count: usize, max: usize },

    /// Writing the mesh failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl MeshError {
    /// Creates a degenerate geometry error.
    pub fn degenerate(message: impl Into<String>) -> Self {
        Self::DegenerateGeometry {
            message: message.into(),
        }
    }

    /// Creates a triangulation error.
    pub fn triangulation(contour: usize, message: impl Into<String>) -> Self {
        Self::TriangulationFailed {
            contour,
            message: message.into(),
        }
    }
}

/// Result type alias for mesh operations.
pub type Result<T> = std::result::Result<T, MeshError>;
