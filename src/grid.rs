//! Adaptive multi-column grid layout.

use ripple_core::layout::{Layout, Point, ProposalSize, Rect, Size, SubView};
use ripple_core::views::Views;
use ripple_core::{Environment, View};

use crate::container::LazyContainer;
use crate::stack::{Alignment, HorizontalAlignment, VerticalAlignment};

/// A grid that derives its column count from the available width.
///
/// The grid fits as many columns of at least `min_column_width` as the bounds
/// allow, then divides the width equally among them. Rows take the height of
/// their tallest cell; children are aligned within their cells.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdaptiveGridLayout {
    min_column_width: f32,
    spacing: Size,
    alignment: Alignment,
}

impl AdaptiveGridLayout {
    /// Creates a grid with the given minimum column width, default spacing,
    /// and centered cell alignment.
    #[must_use]
    pub const fn new(min_column_width: f32) -> Self {
        Self {
            min_column_width,
            spacing: Size::new(8.0, 8.0),
            alignment: Alignment::CENTER,
        }
    }

    /// Sets both the horizontal and vertical spacing.
    #[must_use]
    pub const fn spacing(mut self, spacing: f32) -> Self {
        self.spacing = Size::new(spacing, spacing);
        self
    }

    /// Sets the alignment of children within their cells.
    #[must_use]
    pub const fn alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// Number of columns that fit in `width`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn column_count(&self, width: f32) -> usize {
        let slot = self.min_column_width + self.spacing.width;
        if slot <= 0.0 || width < self.min_column_width {
            return 1;
        }
        let count = ((width + self.spacing.width) / slot).floor() as usize;
        count.max(1)
    }

    #[allow(clippy::cast_precision_loss)]
    fn column_width(&self, width: f32, columns: usize) -> f32 {
        let total_spacing = self.spacing.width * (columns - 1) as f32;
        ((width - total_spacing) / columns as f32).max(0.0)
    }
}

#[allow(clippy::cast_precision_loss)]
impl Layout for AdaptiveGridLayout {
    fn size_that_fits(&self, proposal: ProposalSize, children: &[&dyn SubView]) -> Size {
        if children.is_empty() {
            return Size::zero();
        }

        // A grid needs a width from its parent; without one it degrades to a
        // single column at the minimum width.
        let width = proposal.width.unwrap_or(self.min_column_width);
        let columns = self.column_count(width);
        let column_width = self.column_width(width, columns);

        let child_proposal = ProposalSize::new(Some(column_width), None);
        let heights: Vec<f32> = children
            .iter()
            .map(|child| child.size_that_fits(child_proposal).height)
            .collect();

        let rows = heights.len().div_ceil(columns);
        let mut total_height = 0.0;
        for row in heights.chunks(columns) {
            total_height += row
                .iter()
                .copied()
                .filter(|h| h.is_finite())
                .fold(0.0, f32::max);
        }
        total_height += self.spacing.height * (rows.saturating_sub(1)) as f32;

        Size::new(width, total_height)
    }

    fn place(&self, bounds: Rect, children: &[&dyn SubView]) -> Vec<Rect> {
        if children.is_empty() || !bounds.width().is_finite() {
            return vec![Rect::new(Point::zero(), Size::zero()); children.len()];
        }

        let columns = self.column_count(bounds.width());
        let column_width = self.column_width(bounds.width(), columns);
        let child_proposal = ProposalSize::new(Some(column_width), None);

        let sizes: Vec<Size> = children
            .iter()
            .map(|child| child.size_that_fits(child_proposal))
            .collect();

        let row_heights: Vec<f32> = sizes
            .chunks(columns)
            .map(|row| {
                row.iter()
                    .map(|size| size.height)
                    .filter(|h| h.is_finite())
                    .fold(0.0, f32::max)
            })
            .collect();

        let mut placements = Vec::with_capacity(children.len());
        let mut cursor_y = bounds.y();

        for (row_index, row_sizes) in sizes.chunks(columns).enumerate() {
            let row_height = row_heights.get(row_index).copied().unwrap_or(0.0);
            let mut cursor_x = bounds.x();

            for size in row_sizes {
                let cell = Rect::new(
                    Point::new(cursor_x, cursor_y),
                    Size::new(column_width, row_height),
                );

                let child_width = if size.width.is_infinite() {
                    column_width
                } else {
                    size.width
                };
                let child_height = if size.height.is_infinite() {
                    row_height
                } else {
                    size.height
                };

                let x = match self.alignment.horizontal() {
                    HorizontalAlignment::Leading => cell.x(),
                    HorizontalAlignment::Center => cell.x() + (cell.width() - child_width) / 2.0,
                    HorizontalAlignment::Trailing => cell.max_x() - child_width,
                };
                let y = match self.alignment.vertical() {
                    VerticalAlignment::Top => cell.y(),
                    VerticalAlignment::Center => cell.y() + (cell.height() - child_height) / 2.0,
                    VerticalAlignment::Bottom => cell.max_y() - child_height,
                };

                placements.push(Rect::new(Point::new(x, y), Size::new(child_width, child_height)));
                cursor_x += column_width + self.spacing.width;
            }

            cursor_y += row_height + self.spacing.height;
        }

        placements
    }
}

/// A lazily instantiated grid of equal-width, adaptive columns.
#[derive(Debug)]
pub struct AdaptiveGrid {
    layout: AdaptiveGridLayout,
    contents: ripple_core::views::AnyViews,
}

impl AdaptiveGrid {
    /// Creates a grid over a reconstructable view collection.
    pub fn new(min_column_width: f32, contents: impl Views + 'static) -> Self {
        Self {
            layout: AdaptiveGridLayout::new(min_column_width),
            contents: ripple_core::views::AnyViews::new(contents),
        }
    }

    /// Sets both the horizontal and vertical spacing.
    #[must_use]
    pub const fn spacing(mut self, spacing: f32) -> Self {
        self.layout = self.layout.spacing(spacing);
        self
    }

    /// Sets the alignment of children within their cells.
    #[must_use]
    pub const fn alignment(mut self, alignment: Alignment) -> Self {
        self.layout = self.layout.alignment(alignment);
        self
    }
}

impl View for AdaptiveGrid {
    fn body(self, _env: &Environment) -> impl View + use<> {
        LazyContainer::new(self.layout, self.contents)
    }
}

#[cfg(test)]
mod tests {
    use ripple_core::layout::StretchAxis;

    use super::*;

    struct MockSubView {
        size: Size,
    }

    impl SubView for MockSubView {
        fn size_that_fits(&self, _proposal: ProposalSize) -> Size {
            self.size
        }

        fn stretch_axis(&self) -> StretchAxis {
            StretchAxis::None
        }
    }

    #[test]
    fn column_count_adapts_to_width() {
        let layout = AdaptiveGridLayout::new(120.0).spacing(10.0);
        // One 120pt column needs 120pt; two need 250; three need 380.
        assert_eq!(layout.column_count(119.0), 1);
        assert_eq!(layout.column_count(120.0), 1);
        assert_eq!(layout.column_count(250.0), 2);
        assert_eq!(layout.column_count(379.0), 2);
        assert_eq!(layout.column_count(380.0), 3);
    }

    #[test]
    fn size_sums_tallest_cell_per_row() {
        let layout = AdaptiveGridLayout::new(90.0).spacing(10.0);

        let a = MockSubView {
            size: Size::new(90.0, 30.0),
        };
        let b = MockSubView {
            size: Size::new(90.0, 40.0),
        };
        let c = MockSubView {
            size: Size::new(90.0, 20.0),
        };
        let d = MockSubView {
            size: Size::new(90.0, 50.0),
        };
        let children: Vec<&dyn SubView> = vec![&a, &b, &c, &d];

        // 200pt fits two 95pt columns.
        let size = layout.size_that_fits(ProposalSize::new(Some(200.0), None), &children);
        assert_eq!(size.width, 200.0);
        // Rows: max(30, 40) + 10 + max(20, 50) = 100.
        assert_eq!(size.height, 100.0);
    }

    #[test]
    fn placement_walks_rows_and_columns() {
        let layout = AdaptiveGridLayout::new(40.0)
            .spacing(10.0)
            .alignment(Alignment::TOP_LEADING);

        let a = MockSubView {
            size: Size::new(40.0, 30.0),
        };
        let b = MockSubView {
            size: Size::new(40.0, 30.0),
        };
        let c = MockSubView {
            size: Size::new(40.0, 30.0),
        };
        let children: Vec<&dyn SubView> = vec![&a, &b, &c];

        // 100pt fits two columns of (100 - 10) / 2 = 45pt.
        let bounds = Rect::new(Point::zero(), Size::new(100.0, 100.0));
        let rects = layout.place(bounds, &children);

        assert_eq!(rects[0].origin(), Point::new(0.0, 0.0));
        assert_eq!(rects[1].origin(), Point::new(55.0, 0.0));
        assert_eq!(rects[2].origin(), Point::new(0.0, 40.0));
    }

    #[test]
    fn degrades_to_single_column_without_width() {
        let layout = AdaptiveGridLayout::new(100.0);
        let a = MockSubView {
            size: Size::new(100.0, 25.0),
        };
        let children: Vec<&dyn SubView> = vec![&a];

        let size = layout.size_that_fits(ProposalSize::UNSPECIFIED, &children);
        assert_eq!(size.width, 100.0);
        assert_eq!(size.height, 25.0);
    }
}
