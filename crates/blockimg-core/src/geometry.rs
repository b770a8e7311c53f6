#![forbid(unsafe_code)]

//! Geometric primitives.
//!
//! All coordinates are pixels with the origin at the top-left corner and `y`
//! growing downwards. Values are signed: intermediate layout arithmetic may
//! dip below zero when a configuration uses negative paddings, and that is
//! left to show up as cosmetic breakage rather than being clamped here.

/// A pixel position `(x, y)`.
pub type Point = (i32, i32);

/// The width/height of something that has been (or will be) drawn.
///
/// `Extent` is a plain value: every operation returns a new one. Width and
/// height are the rendered pixel extents and never include an outer margin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Extent {
    /// Width in pixels.
    pub width: i32,
    /// Height in pixels.
    pub height: i32,
}

impl Extent {
    /// The empty extent.
    pub const ZERO: Extent = Extent::new(0, 0);

    /// Create a new extent.
    #[inline]
    #[must_use]
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Build an extent from measured text bounds.
    #[inline]
    #[must_use]
    pub const fn from_text_bounds(bounds: TextBounds) -> Self {
        Self::new(bounds.right - bounds.left, bounds.bottom - bounds.top)
    }

    /// Place the extent at `(x, y)`.
    ///
    /// The result is inclusive on all four sides: a 10x4 extent at the origin
    /// spans `(0, 0)..=(9, 3)`. Shapes that stroke a one pixel outline rely
    /// on the right/bottom edges being the last covered pixel.
    #[inline]
    #[must_use]
    pub const fn to_rect(self, x: i32, y: i32) -> PixelRect {
        PixelRect::new(x, y, x + self.width - 1, y + self.height - 1)
    }

    /// Grow both dimensions by `n` on each side.
    #[inline]
    #[must_use]
    pub const fn outset(self, n: i32) -> Self {
        Self::new(self.width + n * 2, self.height + n * 2)
    }

    /// Grow the width by `n` on each side.
    #[inline]
    #[must_use]
    pub const fn outset_x(self, n: i32) -> Self {
        Self::new(self.width + n * 2, self.height)
    }

    /// Grow the height by `n` on each side.
    #[inline]
    #[must_use]
    pub const fn outset_y(self, n: i32) -> Self {
        Self::new(self.width, self.height + n * 2)
    }

    /// Add `n` to the width.
    #[inline]
    #[must_use]
    pub const fn grow_x(self, n: i32) -> Self {
        Self::new(self.width + n, self.height)
    }

    /// Add `n` to the height.
    #[inline]
    #[must_use]
    pub const fn grow_y(self, n: i32) -> Self {
        Self::new(self.width, self.height + n)
    }

    /// Subtract `n` from the width.
    #[inline]
    #[must_use]
    pub const fn shrink_x(self, n: i32) -> Self {
        Self::new(self.width - n, self.height)
    }

    /// Subtract `n` from the height.
    #[inline]
    #[must_use]
    pub const fn shrink_y(self, n: i32) -> Self {
        Self::new(self.width, self.height - n)
    }

    /// Lay `other` out to the right of `self`.
    ///
    /// Widths add up, the taller of the two wins.
    #[inline]
    #[must_use]
    pub fn place_beside(self, other: Extent) -> Self {
        Self::new(self.width + other.width, self.height.max(other.height))
    }

    /// Lay `other` out underneath `self`.
    ///
    /// Heights add up, the wider of the two wins.
    #[inline]
    #[must_use]
    pub fn place_below(self, other: Extent) -> Self {
        Self::new(self.width.max(other.width), self.height + other.height)
    }

    /// Check if either dimension is zero or negative.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }
}

/// An absolute rectangle with inclusive bounds on every side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PixelRect {
    /// Left column (inclusive).
    pub x0: i32,
    /// Top row (inclusive).
    pub y0: i32,
    /// Right column (inclusive).
    pub x1: i32,
    /// Bottom row (inclusive).
    pub y1: i32,
}

impl PixelRect {
    /// Create a new rectangle from inclusive corners.
    #[inline]
    #[must_use]
    pub const fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// Number of columns covered.
    #[inline]
    pub const fn width(&self) -> i32 {
        self.x1 - self.x0 + 1
    }

    /// Number of rows covered.
    #[inline]
    pub const fn height(&self) -> i32 {
        self.y1 - self.y0 + 1
    }

    /// Check if the rectangle covers no pixels.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.x1 < self.x0 || self.y1 < self.y0
    }

    /// Check if a pixel is inside the rectangle.
    #[inline]
    pub fn contains(&self, (x, y): Point) -> bool {
        x >= self.x0 && x <= self.x1 && y >= self.y0 && y <= self.y1
    }

    /// Check if `other` lies entirely inside `self`.
    ///
    /// An empty `other` is contained by anything.
    #[inline]
    pub const fn contains_rect(&self, other: &PixelRect) -> bool {
        other.is_empty()
            || (other.x0 >= self.x0
                && other.y0 >= self.y0
                && other.x1 <= self.x1
                && other.y1 <= self.y1)
    }

    /// Smallest rectangle covering both.
    #[must_use]
    pub fn union(&self, other: &PixelRect) -> PixelRect {
        if self.is_empty() {
            return *other;
        }
        if other.is_empty() {
            return *self;
        }
        PixelRect::new(
            self.x0.min(other.x0),
            self.y0.min(other.y0),
            self.x1.max(other.x1),
            self.y1.max(other.y1),
        )
    }

    /// Grow the rectangle so that it covers `point`.
    #[must_use]
    pub fn include(&self, point: Point) -> PixelRect {
        self.union(&PixelRect::new(point.0, point.1, point.0, point.1))
    }

    /// The extent of this rectangle.
    #[inline]
    #[must_use]
    pub const fn extent(&self) -> Extent {
        Extent::new(self.width(), self.height())
    }
}

/// Bounds reported by text measurement.
///
/// Unlike [`PixelRect`], `right` and `bottom` are exclusive, relative to the
/// position the text would be drawn at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TextBounds {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl TextBounds {
    /// Create new text bounds.
    #[inline]
    #[must_use]
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// The pixels covered when drawn at `(x, y)`, or `None` for empty text.
    #[must_use]
    pub const fn placed_at(&self, x: i32, y: i32) -> Option<PixelRect> {
        if self.right <= self.left || self.bottom <= self.top {
            return None;
        }
        Some(PixelRect::new(
            x + self.left,
            y + self.top,
            x + self.right - 1,
            y + self.bottom - 1,
        ))
    }
}
