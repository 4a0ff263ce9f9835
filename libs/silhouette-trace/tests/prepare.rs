//! Image file → binary mask + contours JSON.

use std::path::PathBuf;

use image::{GrayImage, Luma};
use silhouette_core::{assemble, CurveRole, ReconstructSettings};
use silhouette_trace::{load_contours, prepare_image, TraceError, TraceParams};
use tempfile::TempDir;

/// Writes a white image with dark pixels wherever `dark` holds.
fn write_image(dir: &TempDir, dark: impl Fn(u32, u32) -> bool) -> PathBuf {
    let path = dir.path().join("input.png");
    GrayImage::from_fn(60, 40, |x, y| Luma([if dark(x, y) { 20 } else { 240 }]))
        .save(&path)
        .unwrap();
    path
}

fn in_rect(x: u32, y: u32, x0: u32, y0: u32, x1: u32, y1: u32) -> bool {
    (x0..x1).contains(&x) && (y0..y1).contains(&y)
}

#[test]
fn test_prepare_writes_mask_and_contours() {
    let dir = TempDir::new().unwrap();
    let input = write_image(&dir, |x, y| {
        in_rect(x, y, 10, 10, 40, 30) && !in_rect(x, y, 18, 15, 30, 25)
    });
    let out_dir = dir.path().join("out");

    let output = prepare_image(&input, &out_dir, &TraceParams::default()).unwrap();

    assert!(output.binary.exists());
    assert!(output.contours_json.exists());
    assert_eq!(output.set.len(), 2);
    assert_eq!((output.set.width(), output.set.height()), (60, 40));

    let mask = image::open(&output.binary).unwrap().to_luma8();
    assert_eq!(mask.get_pixel(12, 12).0[0], 255);
    assert_eq!(mask.get_pixel(0, 0).0[0], 0);

    let loaded = load_contours(&output.contours_json).unwrap();
    assert_eq!(loaded.to_record(), output.set.to_record());
}

#[test]
fn test_prepared_contours_reconstruct() {
    let dir = TempDir::new().unwrap();
    // A dark band along the top edge plus a ring in the middle
    let input = write_image(&dir, |x, y| {
        y < 3 || (in_rect(x, y, 10, 10, 40, 30) && !in_rect(x, y, 18, 15, 30, 25))
    });

    let output = prepare_image(&input, dir.path(), &TraceParams::default()).unwrap();
    let group = assemble(&output.set, &ReconstructSettings::default()).unwrap();

    assert_eq!(group.outers().count(), 1);
    assert_eq!(
        group.iter().filter(|c| c.role() == CurveRole::Hole).count(),
        1
    );
}

#[test]
fn test_blank_image_has_no_contours() {
    let dir = TempDir::new().unwrap();
    let input = write_image(&dir, |_, _| false);

    let result = prepare_image(&input, dir.path(), &TraceParams::default());
    assert!(matches!(result, Err(TraceError::NoContours { .. })));
}

#[test]
fn test_undecodable_image() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("broken.png");
    std::fs::write(&input, b"definitely not a png").unwrap();

    let result = prepare_image(&input, dir.path(), &TraceParams::default());
    assert!(matches!(result, Err(TraceError::Image(_))));
}

#[test]
fn test_even_blur_rejected_before_reading() {
    let dir = TempDir::new().unwrap();
    let params = TraceParams {
        blur: 4,
        ..TraceParams::default()
    };

    let result = prepare_image(&dir.path().join("absent.png"), dir.path(), &params);
    assert!(matches!(result, Err(TraceError::InvalidBlur { kernel: 4 })));
}
