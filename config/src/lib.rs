//! # Config Crate
//!
//! Centralized configuration constants for the silhouette pipeline.
//! Every default the tracer, the curve reconstruction and the extruder
//! fall back to is defined here, so the crates and the command line agree
//! on a single set of values.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{DEFAULT_BORDER_MARGIN, DEFAULT_WORLD_SCALE, DEFAULT_SUBSAMPLE_STEP};
//!
//! let margin = DEFAULT_BORDER_MARGIN;
//! let scale = DEFAULT_WORLD_SCALE;
//! let step = DEFAULT_SUBSAMPLE_STEP;
//! assert_eq!((margin, scale, step), (2, 2.0, 1));
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **No Dependencies**: Safe to pull into every crate of the workspace
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;
