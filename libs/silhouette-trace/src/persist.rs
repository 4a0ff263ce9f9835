//! # Contour Persistence
//!
//! Reads and writes contour sets as pretty-printed JSON:
//!
//! ```json
//! {
//!   "width": 640,
//!   "height": 480,
//!   "contours": [
//!     { "points": [[10, 12], [10, 40], [52, 40]], "parent": -1 }
//!   ]
//! }
//! ```

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use log::debug;
use silhouette_core::{ContourSet, ContourSetRecord};

use crate::error::Result;

/// Loads and validates a contour set.
///
/// Hierarchy faults surface as [`crate::TraceError::Contours`] before any
/// curve could be built from the set.
pub fn load_contours(path: &Path) -> Result<ContourSet> {
    let reader = BufReader::new(File::open(path)?);
    let record: ContourSetRecord = serde_json::from_reader(reader)?;
    let set = ContourSet::try_from(record)?;
    debug!("loaded {} contours from {}", set.len(), path.display());
    Ok(set)
}

/// Writes `set` to `path` as pretty-printed JSON.
pub fn save_contours(set: &ContourSet, path: &Path) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, &set.to_record())?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    debug!("saved {} contours to {}", set.len(), path.display());
    Ok(())
}
