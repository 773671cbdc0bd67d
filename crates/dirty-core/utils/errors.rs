//! Error type for tracker operations
//!
//! The tracker has a single failure condition: a caller passed parameters that
//! do not describe live state, such as an index past the stored rectangles.
//! Errors never leave the tracker partially mutated.
//!
//! # Examples
//!
//! ```rust
//! use dirty_core::{DirtyRects, RegionError};
//!
//! let mut dirty: DirtyRects = DirtyRects::new();
//! let err = dirty.remove(0).unwrap_err();
//!
//! assert_eq!(err, RegionError::IndexOutOfRange { index: 0, count: 0 });
//! assert!(err.is_usage_error());
//! ```

#[cfg(not(feature = "std"))]
use core::fmt;

#[cfg(feature = "std")]
use thiserror::Error;

/// Result type alias for tracker operations
pub type Result<T> = core::result::Result<T, RegionError>;

/// Bad parameters passed to a tracker operation
#[cfg_attr(feature = "std", derive(Error))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegionError {
    /// Index does not address a stored rectangle
    #[cfg_attr(
        feature = "std",
        error("Index {index} out of range for {count} dirty rectangles")
    )]
    IndexOutOfRange {
        /// Requested index
        index: usize,
        /// Number of stored rectangles at the time of the call
        count: usize,
    },
}

impl RegionError {
    /// Check if the error stems from a programming mistake in the caller
    #[must_use]
    pub const fn is_usage_error(&self) -> bool {
        matches!(self, Self::IndexOutOfRange { .. })
    }

    /// Get suggested action for this error
    #[must_use]
    pub const fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::IndexOutOfRange { .. } => Some("Check the index against `len()` first"),
        }
    }
}

// Manual Display implementation for no_std
#[cfg(not(feature = "std"))]
impl fmt::Display for RegionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IndexOutOfRange { index, count } => write!(
                f,
                "Index {index} out of range for {count} dirty rectangles"
            ),
        }
    }
}

#[cfg(not(feature = "std"))]
impl core::error::Error for RegionError {}
