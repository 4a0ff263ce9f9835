//! # Silhouette Trace
//!
//! Image side of the pipeline: turns a grayscale picture into the contour
//! set consumed by [`silhouette_core`].
//!
//! ## Architecture
//!
//! ```text
//! image → grayscale → blur → inverted threshold → border following → ContourSet
//!                                   ↓                                   ↓
//!                              binary.png                         contours.json
//! ```

pub mod contours;
pub mod error;
pub mod params;
pub mod persist;
pub mod prepare;

pub use contours::{compress_runs, extract_contours};
pub use error::{Result, TraceError};
pub use params::TraceParams;
pub use persist::{load_contours, save_contours};
pub use prepare::{binarize, prepare_image, TraceOutput};
