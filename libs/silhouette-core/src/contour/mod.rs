//! # Contour Model
//!
//! Index-based representation of the contour hierarchy produced by the
//! tracer. Contours live in a flat arena; parent links and the derived
//! child lists are plain indices into it.
//!
//! The hierarchy is validated once, on construction: every parent index must
//! be in range, the parent relation must be acyclic, and nesting may not go
//! beyond outer boundary / hole. A `ContourSet` is immutable afterwards.

use config::constants::NO_PARENT;
use glam::IVec2;
use serde::{Deserialize, Serialize};

use crate::error::{HierarchyFault, Result, SilhouetteError};

/// Deepest nesting level accepted: 1 = outer boundary, 2 = hole.
const MAX_NESTING_DEPTH: usize = 2;

/// A closed polyline boundary in pixel coordinates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contour {
    index: usize,
    points: Vec<IVec2>,
    parent: Option<usize>,
}

impl Contour {
    /// Position of this contour within its set.
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Boundary points in extraction order.
    #[inline]
    pub fn points(&self) -> &[IVec2] {
        &self.points
    }

    /// Index of the enclosing contour, `None` for top-level contours.
    #[inline]
    pub fn parent(&self) -> Option<usize> {
        self.parent
    }

    /// Returns true if the contour has no parent.
    #[inline]
    pub fn is_top_level(&self) -> bool {
        self.parent.is_none()
    }
}

/// All contours of one image together with the image frame.
///
/// # Example
///
/// ```rust
/// use glam::IVec2;
/// use silhouette_core::ContourSet;
///
/// let square = vec![IVec2::new(3, 3), IVec2::new(3, 6), IVec2::new(6, 6), IVec2::new(6, 3)];
/// let hole = vec![IVec2::new(4, 4), IVec2::new(5, 4), IVec2::new(5, 5)];
/// let set = ContourSet::new(10, 10, vec![(square, None), (hole, Some(0))]).unwrap();
///
/// assert_eq!(set.holes_of(0), &[1]);
/// assert_eq!(set.top_level().count(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContourSet {
    width: u32,
    height: u32,
    contours: Vec<Contour>,
    children: Vec<Vec<usize>>,
}

impl ContourSet {
    /// Builds a validated contour set.
    ///
    /// # Arguments
    ///
    /// * `width`, `height` - Source image size in pixels, both must exceed 1
    /// * `entries` - Point sequence and optional parent index per contour
    ///
    /// # Errors
    ///
    /// `InvalidDimensions` for a degenerate frame, `MalformedHierarchy` for an
    /// out-of-range, cyclic or too deep parent relation.
    pub fn new(width: u32, height: u32, entries: Vec<(Vec<IVec2>, Option<usize>)>) -> Result<Self> {
        if width <= 1 || height <= 1 {
            return Err(SilhouetteError::InvalidDimensions { width, height });
        }

        let parents: Vec<Option<usize>> = entries.iter().map(|(_, parent)| *parent).collect();
        validate_hierarchy(&parents)?;

        let mut children = vec![Vec::new(); entries.len()];
        for (index, parent) in parents.iter().enumerate() {
            if let Some(parent) = parent {
                children[*parent].push(index);
            }
        }

        let contours = entries
            .into_iter()
            .enumerate()
            .map(|(index, (points, parent))| Contour {
                index,
                points,
                parent,
            })
            .collect();

        Ok(Self {
            width,
            height,
            contours,
            children,
        })
    }

    /// Source image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Source image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of contours.
    #[inline]
    pub fn len(&self) -> usize {
        self.contours.len()
    }

    /// Returns true if the set holds no contours.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.contours.is_empty()
    }

    /// All contours in original order.
    #[inline]
    pub fn contours(&self) -> &[Contour] {
        &self.contours
    }

    /// Returns the contour at `index`.
    pub fn contour(&self, index: usize) -> Option<&Contour> {
        self.contours.get(index)
    }

    /// Contours without a parent, in original order.
    pub fn top_level(&self) -> impl Iterator<Item = &Contour> + '_ {
        self.contours.iter().filter(|c| c.is_top_level())
    }

    /// Indices of the contours whose parent is `index`, in original order.
    ///
    /// Returns an empty slice for an unknown index.
    pub fn holes_of(&self, index: usize) -> &[usize] {
        self.children.get(index).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Converts the set back into its serializable record form.
    pub fn to_record(&self) -> ContourSetRecord {
        ContourSetRecord {
            width: self.width,
            height: self.height,
            contours: self
                .contours
                .iter()
                .map(|c| ContourRecord {
                    points: c.points.iter().map(|p| [p.x, p.y]).collect(),
                    parent: c.parent.map_or(NO_PARENT, |p| p as i64),
                })
                .collect(),
        }
    }
}

// =============================================================================
// RECORD FORMAT
// =============================================================================

fn no_parent() -> i64 {
    NO_PARENT
}

/// One contour as exchanged with the tracer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContourRecord {
    /// `[x, y]` pixel coordinates
    pub points: Vec<[i32; 2]>,
    /// Index of the enclosing contour, or `-1`
    #[serde(default = "no_parent")]
    pub parent: i64,
}

/// The contour set as exchanged with the tracer.
///
/// # Example
///
/// ```rust
/// use silhouette_core::{ContourSet, ContourSetRecord};
///
/// let record: ContourSetRecord = serde_json::from_str(r#"{
///     "width": 10, "height": 10,
///     "contours": [{ "points": [[3, 3], [3, 6], [6, 6]], "parent": -1 }]
/// }"#).unwrap();
/// let set = ContourSet::try_from(record).unwrap();
/// assert_eq!(set.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContourSetRecord {
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Contours in extraction order
    pub contours: Vec<ContourRecord>,
}

impl TryFrom<ContourSetRecord> for ContourSet {
    type Error = SilhouetteError;

    fn try_from(record: ContourSetRecord) -> Result<Self> {
        let len = record.contours.len();
        let mut entries = Vec::with_capacity(len);

        for (contour, raw) in record.contours.into_iter().enumerate() {
            let parent = match raw.parent {
                NO_PARENT => None,
                p if p >= 0 && (p as u64) < len as u64 => Some(p as usize),
                parent => {
                    return Err(HierarchyFault::ParentOutOfRange {
                        contour,
                        parent,
                        len,
                    }
                    .into())
                }
            };
            let points = raw.points.into_iter().map(IVec2::from).collect();
            entries.push((points, parent));
        }

        ContourSet::new(record.width, record.height, entries)
    }
}

// =============================================================================
// HIERARCHY VALIDATION
// =============================================================================

/// Checks that `parents` describes a forest at most two levels deep.
///
/// Depths are memoized so each contour is walked once.
fn validate_hierarchy(parents: &[Option<usize>]) -> Result<()> {
    let len = parents.len();

    for (contour, parent) in parents.iter().enumerate() {
        if let Some(parent) = *parent {
            if parent >= len {
                return Err(HierarchyFault::ParentOutOfRange {
                    contour,
                    parent: parent as i64,
                    len,
                }
                .into());
            }
        }
    }

    // 0 = not yet known
    let mut depth = vec![0usize; len];
    let mut on_path = vec![false; len];
    let mut path = Vec::new();

    for start in 0..len {
        if depth[start] != 0 {
            continue;
        }

        let mut base = 0;
        let mut cursor = Some(start);
        while let Some(current) = cursor {
            if depth[current] != 0 {
                base = depth[current];
                break;
            }
            if on_path[current] {
                return Err(HierarchyFault::ParentCycle { contour: current }.into());
            }
            on_path[current] = true;
            path.push(current);
            cursor = parents[current];
        }

        for current in path.drain(..).rev() {
            base += 1;
            depth[current] = base;
            on_path[current] = false;
        }
    }

    if let Some((contour, &depth)) = depth
        .iter()
        .enumerate()
        .find(|&(_, &d)| d > MAX_NESTING_DEPTH)
    {
        return Err(HierarchyFault::NestingTooDeep { contour, depth }.into());
    }

    Ok(())
}

#[cfg(test)]
mod tests;
