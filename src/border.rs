//! Borders drawn along a selected subset of a view's edges.

use std::fmt;

use bitflags::bitflags;

use ripple_core::layout::{Point, Rect, Size, StretchAxis};
use ripple_core::{AnyView, Color, Environment, Native, NativeView, View};

bitflags! {
    /// A set of rectangle edges.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct EdgeSet: u8 {
        /// The top edge.
        const TOP = 0b0001;
        /// The bottom edge.
        const BOTTOM = 0b0010;
        /// The leading edge (minimum x).
        const LEADING = 0b0100;
        /// The trailing edge (maximum x).
        const TRAILING = 0b1000;
        /// Both horizontal edges.
        const HORIZONTAL = Self::LEADING.bits() | Self::TRAILING.bits();
        /// Both vertical edges.
        const VERTICAL = Self::TOP.bits() | Self::BOTTOM.bits();
        /// All four edges.
        const ALL = Self::HORIZONTAL.bits() | Self::VERTICAL.bits();
    }
}

/// The stripes a border of `width` occupies inside `bounds` along the
/// selected `edges`.
///
/// Stripes are drawn inward from each edge, so the border never extends the
/// view's bounds. Corner cells are covered twice when adjacent edges are both
/// selected, which is invisible for opaque colors.
#[must_use]
pub fn edge_rects(bounds: &Rect, width: f32, edges: EdgeSet) -> Vec<Rect> {
    let mut rects = Vec::new();
    if edges.contains(EdgeSet::TOP) {
        rects.push(Rect::new(
            Point::new(bounds.min_x(), bounds.min_y()),
            Size::new(bounds.width(), width),
        ));
    }
    if edges.contains(EdgeSet::BOTTOM) {
        rects.push(Rect::new(
            Point::new(bounds.min_x(), bounds.max_y() - width),
            Size::new(bounds.width(), width),
        ));
    }
    if edges.contains(EdgeSet::LEADING) {
        rects.push(Rect::new(
            Point::new(bounds.min_x(), bounds.min_y()),
            Size::new(width, bounds.height()),
        ));
    }
    if edges.contains(EdgeSet::TRAILING) {
        rects.push(Rect::new(
            Point::new(bounds.max_x() - width, bounds.min_y()),
            Size::new(width, bounds.height()),
        ));
    }
    rects
}

/// Overlays a border along selected edges of its content.
///
/// The border is decoration: it does not participate in layout, and the
/// backend draws the stripes returned by [`rects`](Self::rects) over the
/// content's final bounds.
pub struct EdgeBorder {
    width: f32,
    edges: EdgeSet,
    color: Color,
    content: AnyView,
}

impl fmt::Debug for EdgeBorder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EdgeBorder")
            .field("width", &self.width)
            .field("edges", &self.edges)
            .field("color", &self.color)
            .finish()
    }
}

impl EdgeBorder {
    /// Wraps `content` with a border of `width` points along `edges`.
    pub fn new(content: impl View, width: f32, edges: EdgeSet, color: Color) -> Self {
        Self {
            width,
            edges,
            color,
            content: AnyView::new(content),
        }
    }

    /// The border width in points.
    #[must_use]
    pub const fn width(&self) -> f32 {
        self.width
    }

    /// The selected edges.
    #[must_use]
    pub const fn edges(&self) -> EdgeSet {
        self.edges
    }

    /// The border color.
    #[must_use]
    pub const fn color(&self) -> Color {
        self.color
    }

    /// The wrapped content.
    #[must_use]
    pub const fn content(&self) -> &AnyView {
        &self.content
    }

    /// The stripes to draw for the given content bounds.
    #[must_use]
    pub fn rects(&self, bounds: &Rect) -> Vec<Rect> {
        edge_rects(bounds, self.width, self.edges)
    }
}

impl NativeView for EdgeBorder {
    fn stretch_axis(&self) -> StretchAxis {
        self.content.stretch_axis()
    }
}

impl View for EdgeBorder {
    fn body(self, _env: &Environment) -> impl View + use<> {
        Native::new(self)
    }

    fn stretch_axis(&self) -> StretchAxis {
        self.content.stretch_axis()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds() -> Rect {
        Rect::new(Point::new(10.0, 20.0), Size::new(100.0, 50.0))
    }

    #[test]
    fn top_edge_spans_the_width() {
        let rects = edge_rects(&bounds(), 1.5, EdgeSet::TOP);
        assert_eq!(
            rects,
            vec![Rect::new(Point::new(10.0, 20.0), Size::new(100.0, 1.5))]
        );
    }

    #[test]
    fn bottom_edge_is_inset_by_width() {
        let rects = edge_rects(&bounds(), 2.0, EdgeSet::BOTTOM);
        assert_eq!(
            rects,
            vec![Rect::new(Point::new(10.0, 68.0), Size::new(100.0, 2.0))]
        );
    }

    #[test]
    fn leading_and_trailing_span_the_height() {
        let rects = edge_rects(&bounds(), 2.0, EdgeSet::HORIZONTAL);
        assert_eq!(rects.len(), 2);
        assert_eq!(
            rects[0],
            Rect::new(Point::new(10.0, 20.0), Size::new(2.0, 50.0))
        );
        assert_eq!(
            rects[1],
            Rect::new(Point::new(108.0, 20.0), Size::new(2.0, 50.0))
        );
    }

    #[test]
    fn all_edges_yield_four_stripes() {
        assert_eq!(edge_rects(&bounds(), 1.0, EdgeSet::ALL).len(), 4);
        assert!(edge_rects(&bounds(), 1.0, EdgeSet::empty()).is_empty());
    }

    #[test]
    fn border_view_carries_its_configuration() {
        let border = EdgeBorder::new((), 1.5, EdgeSet::VERTICAL, Color::BLUE);
        assert_eq!(border.width(), 1.5);
        assert_eq!(border.edges(), EdgeSet::VERTICAL);
        assert_eq!(border.rects(&bounds()).len(), 2);
    }
}
