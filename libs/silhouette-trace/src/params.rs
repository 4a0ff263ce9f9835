//! # Trace Parameters

use config::constants::{gaussian_sigma_for_kernel, DEFAULT_BLUR, DEFAULT_THRESHOLD};
use serde::{Deserialize, Serialize};

use crate::error::{Result, TraceError};

/// Binarization parameters.
///
/// # Example
///
/// ```rust
/// use silhouette_trace::TraceParams;
///
/// let params = TraceParams { blur: 3, ..TraceParams::default() };
/// assert!(params.validate().is_ok());
/// assert!(params.sigma().is_some());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TraceParams {
    /// Pixels brighter than this become background
    pub threshold: u8,
    /// Odd Gaussian kernel size; 1 disables blurring
    pub blur: u32,
}

impl Default for TraceParams {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            blur: DEFAULT_BLUR,
        }
    }
}

impl TraceParams {
    /// Rejects even or zero kernel sizes.
    pub fn validate(&self) -> Result<()> {
        if self.blur == 0 || self.blur % 2 == 0 {
            return Err(TraceError::InvalidBlur { kernel: self.blur });
        }
        Ok(())
    }

    /// Gaussian sigma for the blur kernel, or `None` when blurring is off.
    pub fn sigma(&self) -> Option<f32> {
        (self.blur > 1).then(|| gaussian_sigma_for_kernel(self.blur) as f32)
    }
}
