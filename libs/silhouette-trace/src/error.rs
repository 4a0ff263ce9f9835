//! # Trace Errors
//!
//! Error types for image preparation and contour persistence.

use std::path::PathBuf;

use silhouette_core::SilhouetteError;
use thiserror::Error;

/// Errors that can occur while turning an image into a contour set.
#[derive(Debug, Error)]
pub enum TraceError {
    /// The image could not be decoded or encoded
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    /// Reading or writing a file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The contours JSON could not be parsed or written
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Blur kernel sizes must be odd
    #[error("Invalid blur kernel {kernel}: must be an odd number >= 1")]
    InvalidBlur { kernel: u32 },

    /// Border following found nothing in the binary mask
    #[error("No contours found in {}", path.display())]
    NoContours { path: PathBuf },

    /// The extracted or loaded contours do not form a valid set
    #[error(transparent)]
    Contours(#[from] SilhouetteError),
}

impl TraceError {
    /// Creates a no-contours error for `path`.
    pub fn no_contours(path: impl Into<PathBuf>) -> Self {
        Self::NoContours { path: path.into() }
    }
}

/// Result type alias for trace operations.
pub type Result<T> = std::result::Result<T, TraceError>;
