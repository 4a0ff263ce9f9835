//! # Image Preparation
//!
//! Grayscale load → optional Gaussian blur → inverted threshold → contour
//! extraction. The binary mask and the contour JSON are written next to
//! each other in the output directory.

use std::fs;
use std::path::{Path, PathBuf};

use config::constants::{BINARY_IMAGE_NAME, CONTOURS_JSON_NAME};
use image::GrayImage;
use imageproc::contrast::{threshold, ThresholdType};
use imageproc::filter::gaussian_blur_f32;
use log::info;
use silhouette_core::ContourSet;

use crate::contours::extract_contours;
use crate::error::{Result, TraceError};
use crate::params::TraceParams;
use crate::persist::save_contours;

/// Files written by [`prepare_image`] and the extracted contours.
#[derive(Debug, Clone)]
pub struct TraceOutput {
    /// Binary mask, foreground white
    pub binary: PathBuf,
    /// Contour set as JSON
    pub contours_json: PathBuf,
    /// The contour set that was saved
    pub set: ContourSet,
}

/// Binarizes `gray` so that dark pixels become white foreground.
///
/// Pixels brighter than `params.threshold` become 0, all others 255.
pub fn binarize(gray: &GrayImage, params: &TraceParams) -> Result<GrayImage> {
    params.validate()?;
    let mask = match params.sigma() {
        Some(sigma) => threshold(
            &gaussian_blur_f32(gray, sigma),
            params.threshold,
            ThresholdType::BinaryInverted,
        ),
        None => threshold(gray, params.threshold, ThresholdType::BinaryInverted),
    };
    Ok(mask)
}

/// Turns the image at `input` into a binary mask and a contour set, both
/// saved under `output_dir`.
///
/// # Errors
///
/// Fails when the image cannot be decoded, the blur kernel is even, or the
/// mask contains no contours at all.
pub fn prepare_image(input: &Path, output_dir: &Path, params: &TraceParams) -> Result<TraceOutput> {
    params.validate()?;
    fs::create_dir_all(output_dir)?;

    let gray = image::open(input)?.to_luma8();
    info!(
        "loaded {} ({}x{})",
        input.display(),
        gray.width(),
        gray.height()
    );

    let mask = binarize(&gray, params)?;
    let binary = output_dir.join(BINARY_IMAGE_NAME);
    mask.save(&binary)?;

    let set = extract_contours(&mask)?;
    if set.is_empty() {
        return Err(TraceError::no_contours(input));
    }

    let contours_json = output_dir.join(CONTOURS_JSON_NAME);
    save_contours(&set, &contours_json)?;
    info!(
        "found {} contours ({} top-level), saved to {}",
        set.len(),
        set.top_level().count(),
        contours_json.display()
    );

    Ok(TraceOutput {
        binary,
        contours_json,
        set,
    })
}
