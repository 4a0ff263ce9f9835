//! # Reconstruction Settings
//!
//! The configuration surface consumed by the curve reconstruction:
//! border margin, world scale and subsampling step.

use config::constants::{DEFAULT_BORDER_MARGIN, DEFAULT_SUBSAMPLE_STEP, DEFAULT_WORLD_SCALE};
use serde::{Deserialize, Serialize};

use crate::error::{Result, SilhouetteError};

/// Parameters controlling which contours become curves and how their
/// points are mapped into world space.
///
/// # Example
///
/// ```rust
/// use silhouette_core::ReconstructSettings;
///
/// let settings = ReconstructSettings {
///     step: 3,
///     ..Default::default()
/// };
/// assert!(settings.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReconstructSettings {
    /// Border-clip margin in pixels
    pub margin: u32,
    /// World-space scale factor, must be finite and positive
    pub scale: f64,
    /// Keep every `step`-th point; 1 keeps all points
    pub step: usize,
}

impl Default for ReconstructSettings {
    fn default() -> Self {
        Self {
            margin: DEFAULT_BORDER_MARGIN,
            scale: DEFAULT_WORLD_SCALE,
            step: DEFAULT_SUBSAMPLE_STEP,
        }
    }
}

impl ReconstructSettings {
    /// Rejects settings that would make the reconstruction undefined.
    pub fn validate(&self) -> Result<()> {
        if !self.scale.is_finite() || self.scale <= 0.0 {
            return Err(SilhouetteError::invalid_settings(format!(
                "scale must be a positive finite number, got {}",
                self.scale
            )));
        }
        if self.step == 0 {
            return Err(SilhouetteError::invalid_settings(
                "subsampling step must be at least 1",
            ));
        }
        Ok(())
    }
}
