//! # Configuration Constants
//!
//! Centralized constants for the image-to-solid pipeline.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Reconstruction**: Border margin, world scale, subsampling
//! - **Tracing**: Threshold and blur used when binarizing the source image
//! - **Extrusion**: Default solid depth
//! - **Limits**: Maximum values for safety bounds
//! - **Files**: Names of the artifacts written to the output directory

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Minimum absolute signed area below which a ring is treated as having no
/// orientation (collinear or collapsed points).
pub const AREA_EPSILON: f64 = 1e-12;

// =============================================================================
// RECONSTRUCTION CONSTANTS
// =============================================================================

/// Distance in pixels from the image frame inside which a top-level contour
/// is considered clipped by the image edge.
///
/// A point `(x, y)` touches the border when `x <= margin`, `y <= margin`,
/// `x >= width - margin` or `y >= height - margin`.
///
/// # Example
///
/// ```rust
/// use config::constants::DEFAULT_BORDER_MARGIN;
///
/// let (x, width) = (2_i64, 10_i64);
/// let margin = DEFAULT_BORDER_MARGIN as i64;
/// assert!(x <= margin || x >= width - margin);
/// ```
pub const DEFAULT_BORDER_MARGIN: u32 = 2;

/// World-space edge length of the normalized image frame.
///
/// Normalized coordinates in `[0, 1]` are centered and multiplied by this
/// factor, so the default maps the image onto `[-1, 1]` on both axes.
pub const DEFAULT_WORLD_SCALE: f64 = 2.0;

/// Default subsampling step: keep every point.
pub const DEFAULT_SUBSAMPLE_STEP: usize = 1;

/// Minimum number of points a closed curve needs to enclose an area.
///
/// # Example
///
/// ```rust
/// use config::constants::MIN_CURVE_POINTS;
///
/// let subsampled = vec![[0, 0], [4, 4]];
/// assert!(subsampled.len() < MIN_CURVE_POINTS);
/// ```
pub const MIN_CURVE_POINTS: usize = 3;

/// Parent sentinel used by the contour record format for top-level contours.
pub const NO_PARENT: i64 = -1;

// =============================================================================
// TRACING CONSTANTS
// =============================================================================

/// Intensity threshold (0-255) used to binarize the grayscale source image.
///
/// Pixels brighter than the threshold become background; everything else
/// becomes foreground.
pub const DEFAULT_THRESHOLD: u8 = 180;

/// Gaussian blur kernel size. Must be odd; `1` disables blurring.
pub const DEFAULT_BLUR: u32 = 1;

// =============================================================================
// EXTRUSION CONSTANTS
// =============================================================================

/// Default extrusion depth in world units.
///
/// With symmetric extrusion the solid spans `[-depth, depth]` along Z.
///
/// # Example
///
/// ```rust
/// use config::constants::DEFAULT_EXTRUDE_DEPTH;
///
/// let thickness = 2.0 * DEFAULT_EXTRUDE_DEPTH;
/// assert!(thickness > 0.0);
/// ```
pub const DEFAULT_EXTRUDE_DEPTH: f64 = 0.1;

// =============================================================================
// LIMIT CONSTANTS
// =============================================================================

/// Maximum number of vertices in a single mesh.
///
/// Safety limit to prevent memory exhaustion from extremely noisy images.
///
/// # Example
///
/// ```rust
/// use config::constants::MAX_VERTICES;
///
/// let vertex_count = 1000;
/// assert!(vertex_count < MAX_VERTICES);
/// ```
pub const MAX_VERTICES: usize = 10_000_000;

/// Maximum number of triangles in a single mesh.
pub const MAX_TRIANGLES: usize = 10_000_000;

// =============================================================================
// FILE CONSTANTS
// =============================================================================

/// Directory used for all generated artifacts when none is given.
pub const DEFAULT_OUTPUT_DIR: &str = "outputs";

/// File name of the binarized mask written by the tracer.
pub const BINARY_IMAGE_NAME: &str = "binary.png";

/// File name of the contour hierarchy written by the tracer.
pub const CONTOURS_JSON_NAME: &str = "contours.json";

/// File name of the exported solid.
pub const DEFAULT_STL_NAME: &str = "model.stl";

/// Solid name embedded in exported meshes.
pub const DEFAULT_SOLID_NAME: &str = "silhouette";

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Gaussian sigma for an odd kernel size, using the derivation image
/// libraries apply when the caller leaves sigma unspecified.
///
/// # Example
///
/// ```rust
/// use config::constants::gaussian_sigma_for_kernel;
///
/// assert!((gaussian_sigma_for_kernel(3) - 0.8).abs() < 1e-12);
/// assert!((gaussian_sigma_for_kernel(5) - 1.1).abs() < 1e-12);
/// ```
pub fn gaussian_sigma_for_kernel(kernel: u32) -> f64 {
    0.3 * ((kernel as f64 - 1.0) * 0.5 - 1.0) + 0.8
}
