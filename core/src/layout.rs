//! Geometry types and the two-phase layout protocol.
//!
//! All values are logical pixels (points). Layout happens in two passes:
//! a container is asked for the size it wants given a [`ProposalSize`]
//! ([`Layout::size_that_fits`]), then told to position its children within
//! final bounds ([`Layout::place`]). Children are queried through the
//! [`SubView`] proxy, which may be probed several times with different
//! proposals.

use core::fmt::Debug;

use alloc::vec::Vec;

/// The direction along which a container lays out or scrolls its content.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    /// Content flows left-to-right (or right-to-left under a reversed
    /// layout direction).
    Horizontal,
    /// Content flows top-to-bottom.
    #[default]
    Vertical,
}

impl Axis {
    /// Returns `true` for the horizontal axis.
    #[must_use]
    pub const fn is_horizontal(&self) -> bool {
        matches!(self, Self::Horizontal)
    }

    /// Returns `true` for the vertical axis.
    #[must_use]
    pub const fn is_vertical(&self) -> bool {
        matches!(self, Self::Vertical)
    }

    /// The perpendicular axis.
    #[must_use]
    pub const fn cross(&self) -> Self {
        match self {
            Self::Horizontal => Self::Vertical,
            Self::Vertical => Self::Horizontal,
        }
    }

    /// The extent of `size` along this axis.
    #[must_use]
    pub const fn length_of(&self, size: &Size) -> f32 {
        match self {
            Self::Horizontal => size.width,
            Self::Vertical => size.height,
        }
    }

    /// The extent of `size` across this axis.
    #[must_use]
    pub const fn cross_length_of(&self, size: &Size) -> f32 {
        match self {
            Self::Horizontal => size.height,
            Self::Vertical => size.width,
        }
    }

    /// The minimum coordinate of `rect` along this axis.
    #[must_use]
    pub const fn min_of(&self, rect: &Rect) -> f32 {
        match self {
            Self::Horizontal => rect.min_x(),
            Self::Vertical => rect.min_y(),
        }
    }

    /// The maximum coordinate of `rect` along this axis.
    #[must_use]
    pub const fn max_of(&self, rect: &Rect) -> f32 {
        match self {
            Self::Horizontal => rect.max_x(),
            Self::Vertical => rect.max_y(),
        }
    }

    /// Builds a [`Size`] from extents along and across this axis.
    #[must_use]
    pub const fn pack(&self, main: f32, cross: f32) -> Size {
        match self {
            Self::Horizontal => Size::new(main, cross),
            Self::Vertical => Size::new(cross, main),
        }
    }
}

/// The reading/layout flow direction supplied by the host.
///
/// Affects which edge counts as leading and therefore the sign conventions of
/// horizontal scroll offsets. May change at runtime (locale switch), so
/// consumers must treat it as an event, not a constant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LayoutDirection {
    /// Leading edge on the left.
    #[default]
    LeftToRight,
    /// Leading edge on the right.
    RightToLeft,
}

impl LayoutDirection {
    /// Returns `true` for right-to-left flow.
    #[must_use]
    pub const fn is_right_to_left(&self) -> bool {
        matches!(self, Self::RightToLeft)
    }
}

/// Which axis (or axes) a view stretches to fill available space.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StretchAxis {
    /// No stretching; the view uses its intrinsic size.
    #[default]
    None,
    /// Expands width only.
    Horizontal,
    /// Expands height only.
    Vertical,
    /// Expands in both directions.
    Both,
    /// Expands along the parent container's main axis (spacers).
    MainAxis,
    /// Expands across the parent container's main axis (dividers).
    CrossAxis,
}

impl StretchAxis {
    /// Returns `true` if this stretches horizontally.
    #[must_use]
    pub const fn stretches_horizontal(&self) -> bool {
        matches!(self, Self::Horizontal | Self::Both)
    }

    /// Returns `true` if this stretches vertically.
    #[must_use]
    pub const fn stretches_vertical(&self) -> bool {
        matches!(self, Self::Vertical | Self::Both)
    }

    /// Returns `true` if this stretches in any direction.
    #[must_use]
    pub const fn stretches_any(&self) -> bool {
        !matches!(self, Self::None)
    }
}

/// A proxy for querying child view sizes during layout.
///
/// Containers negotiate with children by asking "if I propose this size, how
/// big would you be?", possibly several times with different proposals. All
/// methods are pure; measurement caching belongs to the backend.
pub trait SubView {
    /// Queries the child's size for a given proposal.
    fn size_that_fits(&self, proposal: ProposalSize) -> Size;

    /// Which axis (or axes) this child stretches to fill available space.
    fn stretch_axis(&self) -> StretchAxis;

    /// Layout priority for space distribution; higher wins.
    fn priority(&self) -> i32 {
        0
    }
}

/// A layout algorithm for arranging child views.
///
/// 1. **Sizing**: [`size_that_fits`](Self::size_that_fits) answers the
///    parent's proposal.
/// 2. **Placement**: [`place`](Self::place) positions children inside the
///    bounds the parent settled on, returning one rectangle per child.
pub trait Layout: Debug {
    /// Calculates the size this layout wants given a proposal.
    fn size_that_fits(&self, proposal: ProposalSize, children: &[&dyn SubView]) -> Size;

    /// Places children within the given bounds, one rectangle per child.
    fn place(&self, bounds: Rect, children: &[&dyn SubView]) -> Vec<Rect>;

    /// Which axis this container stretches to fill available space.
    fn stretch_axis(&self) -> StretchAxis {
        StretchAxis::None
    }
}

/// Axis-aligned rectangle relative to its parent's coordinate space.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    origin: Point,
    size: Size,
}

impl Rect {
    /// Creates a rectangle from its origin (top-left corner) and size.
    #[must_use]
    pub const fn new(origin: Point, size: Size) -> Self {
        Self { origin, size }
    }

    /// Creates a rectangle at the origin with the given size.
    #[must_use]
    pub const fn from_size(size: Size) -> Self {
        Self {
            origin: Point::zero(),
            size,
        }
    }

    /// Returns the rectangle's origin.
    #[must_use]
    pub const fn origin(&self) -> Point {
        self.origin
    }

    /// Returns the rectangle's size.
    #[must_use]
    pub const fn size(&self) -> &Size {
        &self.size
    }

    /// Returns the x-coordinate of the left edge.
    #[must_use]
    pub const fn x(&self) -> f32 {
        self.origin.x
    }

    /// Returns the y-coordinate of the top edge.
    #[must_use]
    pub const fn y(&self) -> f32 {
        self.origin.y
    }

    /// Returns the rectangle's width.
    #[must_use]
    pub const fn width(&self) -> f32 {
        self.size.width
    }

    /// Returns the rectangle's height.
    #[must_use]
    pub const fn height(&self) -> f32 {
        self.size.height
    }

    /// Returns the minimum x-coordinate (left edge).
    #[must_use]
    pub const fn min_x(&self) -> f32 {
        self.origin.x
    }

    /// Returns the minimum y-coordinate (top edge).
    #[must_use]
    pub const fn min_y(&self) -> f32 {
        self.origin.y
    }

    /// Returns the maximum x-coordinate (right edge).
    #[must_use]
    pub const fn max_x(&self) -> f32 {
        self.origin.x + self.size.width
    }

    /// Returns the maximum y-coordinate (bottom edge).
    #[must_use]
    pub const fn max_y(&self) -> f32 {
        self.origin.y + self.size.height
    }

    /// Returns the midpoint x-coordinate.
    #[must_use]
    pub const fn mid_x(&self) -> f32 {
        self.origin.x + self.size.width / 2.0
    }

    /// Returns the midpoint y-coordinate.
    #[must_use]
    pub const fn mid_y(&self) -> f32 {
        self.origin.y + self.size.height / 2.0
    }
}

/// Two-dimensional size in points.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    /// The width in points.
    pub width: f32,
    /// The height in points.
    pub height: f32,
}

impl Size {
    /// Constructs a size from width and height.
    #[must_use]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// A size with zero width and height.
    #[must_use]
    pub const fn zero() -> Self {
        Self {
            width: 0.0,
            height: 0.0,
        }
    }

    /// Returns `true` if both dimensions are zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.width == 0.0 && self.height == 0.0
    }
}

/// Coordinate relative to a parent layout's origin.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    /// The x-coordinate in points.
    pub x: f32,
    /// The y-coordinate in points.
    pub y: f32,
}

impl Point {
    /// Constructs a point from its coordinates.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// The origin (0, 0).
    #[must_use]
    pub const fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }
}

/// A size proposal from parent to child during layout negotiation.
///
/// Each dimension is either a suggestion (`Some(value)`) or unspecified
/// (`None`, "tell me your ideal size"). Children are free to answer with any
/// size.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProposalSize {
    /// Width proposal.
    pub width: Option<f32>,
    /// Height proposal.
    pub height: Option<f32>,
}

impl ProposalSize {
    /// Creates a proposal from optional width and height.
    #[must_use]
    pub fn new(width: impl Into<Option<f32>>, height: impl Into<Option<f32>>) -> Self {
        Self {
            width: width.into(),
            height: height.into(),
        }
    }

    /// Unspecified proposal; asks for the ideal size.
    pub const UNSPECIFIED: Self = Self {
        width: None,
        height: None,
    };

    /// Zero proposal; asks for the minimum size.
    pub const ZERO: Self = Self {
        width: Some(0.0),
        height: Some(0.0),
    };

    /// Infinite proposal; asks for the maximum size.
    pub const INFINITY: Self = Self {
        width: Some(f32::INFINITY),
        height: Some(f32::INFINITY),
    };

    /// Returns the width, or `default` if unspecified.
    #[must_use]
    pub fn width_or(&self, default: f32) -> f32 {
        self.width.unwrap_or(default)
    }

    /// Returns the height, or `default` if unspecified.
    #[must_use]
    pub fn height_or(&self, default: f32) -> f32 {
        self.height.unwrap_or(default)
    }

    /// The proposed extent along `axis`.
    #[must_use]
    pub const fn along(&self, axis: Axis) -> Option<f32> {
        match axis {
            Axis::Horizontal => self.width,
            Axis::Vertical => self.height,
        }
    }

    /// The proposed extent across `axis`.
    #[must_use]
    pub const fn across(&self, axis: Axis) -> Option<f32> {
        match axis {
            Axis::Horizontal => self.height,
            Axis::Vertical => self.width,
        }
    }

    /// Builds a proposal from extents along and across `axis`.
    #[must_use]
    pub const fn packed(axis: Axis, main: Option<f32>, cross: Option<f32>) -> Self {
        match axis {
            Axis::Horizontal => Self {
                width: main,
                height: cross,
            },
            Axis::Vertical => Self {
                width: cross,
                height: main,
            },
        }
    }

    /// Replaces only the width, keeping the height.
    #[must_use]
    pub const fn with_width(self, width: Option<f32>) -> Self {
        Self {
            width,
            height: self.height,
        }
    }

    /// Replaces only the height, keeping the width.
    #[must_use]
    pub const fn with_height(self, height: Option<f32>) -> Self {
        Self {
            width: self.width,
            height,
        }
    }
}
