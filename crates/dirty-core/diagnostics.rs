//! Development dump of tracker state
//!
//! Nothing here affects tracking; release builds can leave the log level above
//! `debug` and the dump costs a level check.

use core::fmt;

use log::{debug, log_enabled, Level};

use crate::tracker::DirtyRects;

const RULE: &str = "===========================================================";

/// Printable snapshot of a tracker's bound and stored rectangles
///
/// Renders as:
///
/// ```text
/// max: (0 0 110 110)
/// ===========================================================
/// (0 0 15 15) (100 100 10 10)
/// ===========================================================
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Dump<'a, const N: usize> {
    dirty: &'a DirtyRects<N>,
}

impl<const N: usize> fmt::Display for Dump<'_, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "max: {}", self.dirty.bound())?;
        writeln!(f, "{RULE}")?;
        for (i, rect) in self.dirty.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{rect}")?;
        }
        writeln!(f)?;
        writeln!(f, "{RULE}")
    }
}

impl<const N: usize> DirtyRects<N> {
    /// Borrow the state as a [`Dump`] for formatting
    #[must_use]
    pub const fn dump_report(&self) -> Dump<'_, N> {
        Dump { dirty: self }
    }

    /// Log the bound and stored rectangles at `debug` level
    pub fn dump(&self) {
        if log_enabled!(Level::Debug) {
            debug!("dirty rects ({}/{}):\n{}", self.len(), N, self.dump_report());
        }
    }
}
