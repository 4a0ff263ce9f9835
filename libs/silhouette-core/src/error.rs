//! # Error Types
//!
//! Error types for contour reconstruction. Every failure of the core is a
//! data-validity failure; nothing here is transient or retryable.
//!
//! ## Error Policy
//!
//! - Hierarchy corruption aborts before any curve is built
//! - Invalid settings or image dimensions are rejected up front
//! - Degenerate curves are NOT errors; they are dropped silently

use thiserror::Error;

/// The specific way a contour hierarchy is malformed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HierarchyFault {
    /// A parent reference points outside the contour list.
    #[error("contour {contour} references parent {parent}, but the set holds {len} contours")]
    ParentOutOfRange {
        /// Index of the offending contour
        contour: usize,
        /// Parent value as declared in the input
        parent: i64,
        /// Number of contours in the set
        len: usize,
    },

    /// Following parent references from a contour leads back to it.
    #[error("parent chain starting at contour {contour} is cyclic")]
    ParentCycle {
        /// Index of a contour on the cycle
        contour: usize,
    },

    /// A contour sits deeper than outer boundary / hole.
    #[error("contour {contour} is nested {depth} levels deep; only outer boundaries and their holes are supported")]
    NestingTooDeep {
        /// Index of the offending contour
        contour: usize,
        /// Nesting depth (1 = top-level, 2 = hole)
        depth: usize,
    },
}

/// Errors that can occur while reconstructing curves from contours.
///
/// ## Example
///
/// ```rust
/// use silhouette_core::{ContourSet, SilhouetteError};
///
/// match ContourSet::new(1, 10, Vec::new()) {
///     Err(SilhouetteError::InvalidDimensions { width, .. }) => assert_eq!(width, 1),
///     other => panic!("unexpected: {other:?}"),
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SilhouetteError {
    /// The parent relation is out of range, cyclic or too deep.
    #[error("Malformed hierarchy: {0}")]
    MalformedHierarchy(#[from] HierarchyFault),

    /// The image frame cannot serve as a normalization reference.
    #[error("Invalid image dimensions {width}x{height}: both must be greater than 1")]
    InvalidDimensions {
        /// Image width in pixels
        width: u32,
        /// Image height in pixels
        height: u32,
    },

    /// A reconstruction setting is out of its valid range.
    #[error("Invalid settings: {0}")]
    InvalidSettings(String),
}

impl SilhouetteError {
    /// Creates an invalid settings error.
    pub fn invalid_settings(message: impl Into<String>) -> Self {
        Self::InvalidSettings(message.into())
    }
}

/// Result type alias for reconstruction operations.
pub type Result<T> = std::result::Result<T, SilhouetteError>;

#[cfg(test)]
mod tests {
    use super::*;

    /// Test error display messages.
    #[test]
    fn test_error_display() {
        let err = SilhouetteError::from(HierarchyFault::ParentOutOfRange {
            contour: 3,
            parent: 9,
            len: 4,
        });
        let text = err.to_string();
        assert!(text.contains("Malformed hierarchy"));
        assert!(text.contains("parent 9"));

        let err = SilhouetteError::InvalidDimensions { width: 1, height: 5 };
        assert!(err.to_string().contains("1x5"));
    }

    /// Errors cross thread boundaries in the command line driver.
    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SilhouetteError>();
    }
}
