//! # dirty-core
//!
//! Bounded dirty rectangle tracking for render loops. Invalidated screen areas
//! are accumulated as axis-aligned rectangles; overlapping rectangles are merged,
//! the number of stored rectangles is capped, and a running bounding rectangle
//! is kept alongside so a renderer can choose between precise and cheap repaints.
//!
//! ## Features
//!
//! - **Allocation-free**: rectangles live in a fixed inline array
//! - **Bounded cost**: capacity is a const generic, every operation is `O(N^2)` worst case
//! - **`no_std`**: disable the default `std` feature for embedded targets
//! - **Selectable fix-up**: first-entry reconciliation or full pairwise merging
//!
//! ## Quick Start
//!
//! ```rust
//! use dirty_core::{DirtyRects, Rect};
//!
//! let mut dirty: DirtyRects = DirtyRects::new();
//! dirty.add(Rect::new(0, 0, 10, 10));
//! dirty.add(Rect::new(100, 100, 10, 10));
//! dirty.add(Rect::new(5, 5, 10, 10));
//!
//! assert_eq!(dirty.len(), 2);
//! assert_eq!(dirty.rects()[0], Rect::new(0, 0, 15, 15));
//! assert_eq!(dirty.bound(), Rect::new(0, 0, 110, 110));
//!
//! // Renderer consumed the frame
//! dirty.reset();
//! assert!(dirty.is_empty());
//! ```

#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(clippy::all)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod diagnostics;
pub mod geometry;
pub mod tracker;
pub mod utils;

pub use diagnostics::Dump;
pub use geometry::Rect;
pub use tracker::{AddOutcome, DirtyRects, FixupMode, DEFAULT_CAPACITY};
pub use utils::{RegionError, Result};

/// Crate version for runtime compatibility checks
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
