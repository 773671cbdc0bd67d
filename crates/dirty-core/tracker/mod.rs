//! Bounded dirty rectangle tracker
//!
//! [`DirtyRects`] accumulates invalidated rectangles for one frame. Dirty
//! rectangles are usually few and rarely overlap, so the tracker:
//!
//! - appends a rectangle that overlaps nothing already stored,
//! - merges a rectangle into the first stored rectangle it overlaps, then runs
//!   a fix-up pass to absorb entries the grown rectangle now overlaps,
//! - collapses every stored rectangle into one when capacity is reached.
//!
//! Alongside the list it keeps `bound`, the union of everything added since the
//! last reset. The bound only grows; evicting or merging entries never shrinks it.
//!
//! # Example
//!
//! ```rust
//! use dirty_core::{AddOutcome, DirtyRects, Rect};
//!
//! let mut dirty = DirtyRects::<4>::new();
//! assert_eq!(
//!     dirty.add(Rect::new(0, 0, 10, 10)),
//!     AddOutcome::Appended { index: 0, collapsed: false }
//! );
//! assert_eq!(dirty.add(Rect::new(0, 0, 0, 10)), AddOutcome::Degenerate);
//! assert_eq!(dirty.len(), 1);
//! ```

use core::slice;

use log::{debug, trace};

use crate::geometry::Rect;
use crate::utils::{RegionError, Result};

/// Default number of rectangles a tracker stores before collapsing
pub const DEFAULT_CAPACITY: usize = 10;

/// Which stored pairs the fix-up pass reconciles after a merge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FixupMode {
    /// Only check entries against `rects[0]`
    ///
    /// Kept as the default for compatibility with existing render loops. When a
    /// merge grows an entry other than the first, overlaps between that entry
    /// and later entries are left in place.
    #[default]
    FirstEntry,
    /// Check every pair of stored entries, guaranteeing full disjointness
    Pairwise,
}

/// What [`DirtyRects::add`] did with a rectangle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// Zero width or height, nothing changed
    Degenerate,
    /// Stored as a new entry
    Appended {
        /// Slot the rectangle landed in
        index: usize,
        /// Whether a capacity collapse ran first
        collapsed: bool,
    },
    /// Merged into an overlapping entry
    Merged {
        /// Entry the rectangle was merged into
        index: usize,
        /// Entries absorbed by the fix-up pass afterwards
        absorbed: usize,
        /// Whether a capacity collapse ran first
        collapsed: bool,
    },
}

/// Fixed-capacity set of dirty rectangles plus their running bound
///
/// `N` is the maximum number of stored rectangles and must be non-zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirtyRects<const N: usize = DEFAULT_CAPACITY> {
    count: usize,
    bound: Rect,
    rects: [Rect; N],
    mode: FixupMode,
}

impl<const N: usize> DirtyRects<N> {
    /// Create an empty tracker using [`FixupMode::FirstEntry`]
    #[must_use]
    pub const fn new() -> Self {
        Self::with_mode(FixupMode::FirstEntry)
    }

    /// Create an empty tracker with the given fix-up mode
    #[must_use]
    pub const fn with_mode(mode: FixupMode) -> Self {
        const { assert!(N > 0, "dirty rectangle capacity must be non-zero") };
        Self {
            count: 0,
            bound: Rect::ZERO,
            rects: [Rect::ZERO; N],
            mode,
        }
    }

    /// Clear every stored rectangle and the bound
    ///
    /// The fix-up mode is configuration and survives the reset.
    pub fn reset(&mut self) {
        *self = Self::with_mode(self.mode);
    }

    /// Hand the current state to the caller and leave an empty tracker behind
    #[must_use]
    pub fn take(&mut self) -> Self {
        core::mem::replace(self, Self::with_mode(self.mode))
    }

    /// Number of stored rectangles
    #[must_use]
    pub const fn len(&self) -> usize {
        self.count
    }

    /// Check if no rectangle is stored
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Maximum number of stored rectangles
    #[must_use]
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Union of every rectangle added since the last reset
    #[must_use]
    pub const fn bound(&self) -> Rect {
        self.bound
    }

    /// Configured fix-up mode
    #[must_use]
    pub const fn mode(&self) -> FixupMode {
        self.mode
    }

    /// Stored rectangles in order
    #[must_use]
    pub fn rects(&self) -> &[Rect] {
        &self.rects[..self.count]
    }

    /// Iterate over stored rectangles
    pub fn iter(&self) -> slice::Iter<'_, Rect> {
        self.rects().iter()
    }

    /// Total pixels covered by the stored rectangles
    ///
    /// Exact when the stored rectangles are disjoint; an over-estimate otherwise.
    #[must_use]
    pub fn redraw_area(&self) -> u64 {
        self.iter().map(Rect::area).sum()
    }

    /// Add a rectangle given as coordinates
    pub fn add_xywh(&mut self, x: i32, y: i32, w: u32, h: u32) -> AddOutcome {
        self.add(Rect::new(x, y, w, h))
    }

    /// Mark a rectangle dirty
    pub fn add(&mut self, rect: Rect) -> AddOutcome {
        if rect.is_degenerate() {
            return AddOutcome::Degenerate;
        }

        let collapsed = self.count >= N;
        if collapsed {
            self.collapse();
        }

        self.bound.merge(&rect);

        let hit = self.rects().iter().position(|stored| stored.intersects(&rect));
        if let Some(index) = hit {
            self.rects[index].merge(&rect);
            debug!("merge {rect} into {} at {index}", self.rects[index]);
            let absorbed = self.fix();
            return AddOutcome::Merged {
                index,
                absorbed,
                collapsed,
            };
        }

        if self.count == N {
            // Single-slot tracker: the collapsed entry is the only place left
            self.rects[0].merge(&rect);
            debug!("merge {rect} into {} at 0, no free slot", self.rects[0]);
            return AddOutcome::Merged {
                index: 0,
                absorbed: 0,
                collapsed,
            };
        }

        let index = self.count;
        self.rects[index] = rect;
        self.count += 1;
        debug!("add {rect} at {index}, {} stored", self.count);

        AddOutcome::Appended { index, collapsed }
    }

    /// Remove the rectangle at `index`, shifting later entries forward
    ///
    /// The bound is left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`RegionError::IndexOutOfRange`] if `index >= len()`.
    pub fn remove(&mut self, index: usize) -> Result<Rect> {
        if index >= self.count {
            return Err(RegionError::IndexOutOfRange {
                index,
                count: self.count,
            });
        }

        Ok(self.shift_out(index))
    }

    /// Merge away overlaps between stored rectangles
    ///
    /// On the first overlapping pair found, the later entry is merged into the
    /// earlier one and removed, then the scan restarts. Which pairs are checked
    /// depends on [`FixupMode`]. Returns the number of absorbed entries.
    pub fn fix(&mut self) -> usize {
        let mut absorbed = 0;

        while let Some((keep, absorb)) = self.find_overlap() {
            let victim = self.shift_out(absorb);
            self.rects[keep].merge(&victim);
            absorbed += 1;
            trace!("fix: absorbed {victim} from {absorb} into {keep}");
        }

        absorbed
    }

    /// Caller guarantees `index < count`
    fn shift_out(&mut self, index: usize) -> Rect {
        let removed = self.rects[index];
        self.rects.copy_within(index + 1..self.count, index);
        self.count -= 1;
        self.rects[self.count] = Rect::ZERO;
        removed
    }

    fn find_overlap(&self) -> Option<(usize, usize)> {
        let rects = self.rects();
        let firsts = match self.mode {
            FixupMode::FirstEntry => rects.len().min(1),
            FixupMode::Pairwise => rects.len(),
        };

        (0..firsts).find_map(|keep| {
            rects[keep + 1..]
                .iter()
                .position(|other| rects[keep].intersects(other))
                .map(|offset| (keep, keep + 1 + offset))
        })
    }

    fn collapse(&mut self) {
        let mut merged = self.rects[0];
        for rect in &self.rects[1..self.count] {
            merged.merge(rect);
        }

        debug!("collapse {} rects into {merged}", self.count);
        self.rects = [Rect::ZERO; N];
        self.rects[0] = merged;
        self.count = 1;
    }
}

impl<const N: usize> Default for DirtyRects<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, const N: usize> IntoIterator for &'a DirtyRects<N> {
    type Item = &'a Rect;
    type IntoIter = slice::Iter<'a, Rect>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(feature = "serde")]
impl<const N: usize> serde::Serialize for DirtyRects<N> {
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> core::result::Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("DirtyRects", 3)?;
        state.serialize_field("mode", &self.mode)?;
        state.serialize_field("bound", &self.bound)?;
        state.serialize_field("rects", self.rects())?;
        state.end()
    }
}
