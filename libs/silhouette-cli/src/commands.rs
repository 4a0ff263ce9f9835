//! Subcommand implementations.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use log::info;
use silhouette_core::{build_solid, ContourSet, CurveGroup, ReconstructSettings};
use silhouette_mesh::MeshBackend;
use silhouette_trace::{load_contours, prepare_image, TraceOutput, TraceParams};

use crate::{BuildArgs, TraceArgs};

/// Binarizes `image` and writes the mask and contours JSON.
pub fn trace(image: &Path, args: &TraceArgs) -> Result<TraceOutput> {
    let params = TraceParams {
        threshold: args.threshold,
        blur: args.blur,
    };
    let output = prepare_image(image, &args.output_dir, &params)
        .with_context(|| format!("failed to trace {}", image.display()))?;

    info!("binary mask: {}", output.binary.display());
    info!("contours: {}", output.contours_json.display());
    Ok(output)
}

/// Loads a contours JSON written by `trace`.
pub fn load(path: &Path) -> Result<ContourSet> {
    load_contours(path).with_context(|| format!("failed to load contours from {}", path.display()))
}

/// Reconstructs, extrudes and exports `set` to `output`.
pub fn build(set: &ContourSet, output: &Path, args: &BuildArgs) -> Result<CurveGroup> {
    let settings = ReconstructSettings {
        margin: args.margin,
        scale: args.scale,
        step: args.step,
    };
    let backend = MeshBackend::new()
        .symmetric(!args.asymmetric)
        .allow_empty(args.allow_empty);

    let group = build_solid(&backend, set, &settings, args.depth, output)
        .with_context(|| format!("failed to build {}", output.display()))?;

    if let Some(path) = &args.curves_json {
        write_curves(&group, path)
            .with_context(|| format!("failed to write curves to {}", path.display()))?;
        info!("curves: {}", path.display());
    }

    info!(
        "solid: {} ({} outer, {} hole curves)",
        output.display(),
        group.outers().count(),
        group.len() - group.outers().count()
    );
    Ok(group)
}

fn write_curves(group: &CurveGroup, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, group)?;
    writer.flush()?;
    Ok(())
}
