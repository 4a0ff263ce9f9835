//! # Silhouette
//!
//! Turns a dark-on-light silhouette image into an extruded solid.
//!
//! ```text
//! silhouette trace drawing.png --output-dir outputs
//! silhouette build outputs/contours.json --output outputs/model.stl
//! silhouette run drawing.png --depth 0.2 --step 2
//! ```

mod commands;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use config::constants::{
    DEFAULT_BLUR, DEFAULT_BORDER_MARGIN, DEFAULT_EXTRUDE_DEPTH, DEFAULT_OUTPUT_DIR,
    DEFAULT_STL_NAME, DEFAULT_SUBSAMPLE_STEP, DEFAULT_THRESHOLD, DEFAULT_WORLD_SCALE,
};

#[derive(Parser, Debug)]
#[command(name = "silhouette")]
#[command(about = "Turn silhouette images into extruded STL solids", long_about = None)]
#[command(version)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace); RUST_LOG overrides
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Binarize an image and save its contours as JSON
    Trace {
        /// Source image, read as grayscale
        image: PathBuf,

        #[command(flatten)]
        trace: TraceArgs,
    },

    /// Reconstruct curves from a contours JSON and export an STL solid
    Build {
        /// Contours JSON written by `trace`
        contours: PathBuf,

        /// Output STL path [default: outputs/model.stl]
        #[arg(short, long)]
        output: Option<PathBuf>,

        #[command(flatten)]
        build: BuildArgs,
    },

    /// Trace an image and build its solid in one go
    Run {
        /// Source image, read as grayscale
        image: PathBuf,

        #[command(flatten)]
        trace: TraceArgs,

        /// Output STL path [default: outputs/model.stl]
        #[arg(short, long)]
        output: Option<PathBuf>,

        #[command(flatten)]
        build: BuildArgs,
    },
}

/// Image preparation options.
#[derive(Args, Debug, Clone)]
struct TraceArgs {
    /// Directory for binary.png and contours.json
    #[arg(long, default_value = DEFAULT_OUTPUT_DIR)]
    output_dir: PathBuf,

    /// Intensity threshold (0-255); brighter pixels become background
    #[arg(long, default_value_t = DEFAULT_THRESHOLD)]
    threshold: u8,

    /// Odd Gaussian kernel size; 1 disables blurring
    #[arg(long, default_value_t = DEFAULT_BLUR)]
    blur: u32,
}

/// Curve reconstruction and extrusion options.
#[derive(Args, Debug, Clone)]
struct BuildArgs {
    /// Extrusion depth in world units
    #[arg(long, default_value_t = DEFAULT_EXTRUDE_DEPTH)]
    depth: f64,

    /// World-space size of the image frame
    #[arg(long, default_value_t = DEFAULT_WORLD_SCALE)]
    scale: f64,

    /// Keep every n-th contour point
    #[arg(long, default_value_t = DEFAULT_SUBSAMPLE_STEP)]
    step: usize,

    /// Border margin in pixels; outer contours this close to the frame are dropped
    #[arg(long, default_value_t = DEFAULT_BORDER_MARGIN)]
    margin: u32,

    /// Extrude upward from the curve plane only instead of to both sides
    #[arg(long)]
    asymmetric: bool,

    /// Also write the reconstructed curves as JSON
    #[arg(long)]
    curves_json: Option<PathBuf>,

    /// Export an empty solid instead of failing when no curve survives
    #[arg(long)]
    allow_empty: bool,
}

fn stl_path(output: Option<PathBuf>) -> PathBuf {
    output.unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR).join(DEFAULT_STL_NAME))
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Command::Trace { image, trace } => {
            commands::trace(&image, &trace)?;
        }
        Command::Build {
            contours,
            output,
            build,
        } => {
            let set = commands::load(&contours)?;
            commands::build(&set, &stl_path(output), &build)?;
        }
        Command::Run {
            image,
            trace,
            output,
            build,
        } => {
            let traced = commands::trace(&image, &trace)?;
            commands::build(&traced.set, &stl_path(output), &build)?;
        }
    }

    Ok(())
}
