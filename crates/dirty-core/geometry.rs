//! Axis-aligned integer rectangles in surface-local pixel coordinates

use core::fmt;

/// Axis-aligned rectangle with a signed origin and unsigned extent
///
/// A rectangle with zero width or zero height is *degenerate*: it is a valid
/// value but covers no pixels, never intersects anything and acts as the
/// identity for [`Rect::merge`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    /// Left coordinate
    pub x: i32,
    /// Top coordinate
    pub y: i32,
    /// Width
    pub w: u32,
    /// Height
    pub h: u32,
}

impl Rect {
    /// The zero rectangle at the origin
    pub const ZERO: Self = Self::new(0, 0, 0, 0);

    /// Create a new rectangle
    #[must_use]
    pub const fn new(x: i32, y: i32, w: u32, h: u32) -> Self {
        Self { x, y, w, h }
    }

    /// Check whether the rectangle covers no pixels
    #[must_use]
    pub const fn is_degenerate(&self) -> bool {
        self.w == 0 || self.h == 0
    }

    /// Exclusive right edge
    #[must_use]
    pub const fn right(&self) -> i64 {
        self.x as i64 + self.w as i64
    }

    /// Exclusive bottom edge
    #[must_use]
    pub const fn bottom(&self) -> i64 {
        self.y as i64 + self.h as i64
    }

    /// Number of pixels covered
    #[must_use]
    pub const fn area(&self) -> u64 {
        self.w as u64 * self.h as u64
    }

    /// Check whether the two rectangles share at least one pixel
    ///
    /// Rectangles that only touch along an edge do not intersect.
    #[must_use]
    pub fn intersects(&self, other: &Self) -> bool {
        if self.is_degenerate() || other.is_degenerate() {
            return false;
        }

        i64::from(self.x) < other.right()
            && i64::from(other.x) < self.right()
            && i64::from(self.y) < other.bottom()
            && i64::from(other.y) < self.bottom()
    }

    /// Grow `self` into the smallest rectangle enclosing both rectangles
    ///
    /// Degenerate rectangles are ignored on either side, so merging into
    /// [`Rect::ZERO`] simply copies `other`.
    pub fn merge(&mut self, other: &Self) {
        if other.is_degenerate() {
            return;
        }
        if self.is_degenerate() {
            *self = *other;
            return;
        }

        let x = self.x.min(other.x);
        let y = self.y.min(other.y);
        let right = self.right().max(other.right());
        let bottom = self.bottom().max(other.bottom());

        *self = Self {
            x,
            y,
            w: saturating_extent(right - i64::from(x)),
            h: saturating_extent(bottom - i64::from(y)),
        };
    }

    /// Smallest rectangle enclosing both rectangles
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        let mut merged = *self;
        merged.merge(other);
        merged
    }

    /// Check if the rectangle contains a point
    #[must_use]
    pub fn contains_point(&self, x: i32, y: i32) -> bool {
        (i64::from(self.x)..self.right()).contains(&i64::from(x))
            && (i64::from(self.y)..self.bottom()).contains(&i64::from(y))
    }

    /// Check if every pixel of `other` lies inside `self`
    ///
    /// A degenerate `other` is contained in anything.
    #[must_use]
    pub fn contains(&self, other: &Self) -> bool {
        if other.is_degenerate() {
            return true;
        }

        !self.is_degenerate()
            && other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }
}

fn saturating_extent(extent: i64) -> u32 {
    u32::try_from(extent).unwrap_or(u32::MAX)
}

impl From<(i32, i32, u32, u32)> for Rect {
    fn from((x, y, w, h): (i32, i32, u32, u32)) -> Self {
        Self::new(x, y, w, h)
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({} {} {} {})", self.x, self.y, self.w, self.h)
    }
}
