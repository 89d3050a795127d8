//! Picks the first of several arrangements that fits the available space.

use ripple_core::layout::{Layout, ProposalSize, Rect, Size, SubView};
use ripple_core::{Environment, TupleViews, View};

use crate::container::FixedContainer;

/// Layout that measures its children in order and keeps the first whose size
/// fits the proposal, falling back to the last child.
///
/// Unchosen children are placed with zero size; only the chosen arrangement
/// is visible.
#[derive(Debug, Clone, Copy, Default)]
pub struct FitLayout;

impl FitLayout {
    fn fits(size: Size, proposal: ProposalSize) -> bool {
        const TOLERANCE: f32 = 0.001;
        let width_ok = proposal.width.is_none_or(|w| size.width <= w + TOLERANCE);
        let height_ok = proposal.height.is_none_or(|h| size.height <= h + TOLERANCE);
        width_ok && height_ok
    }

    fn choose(proposal: ProposalSize, children: &[&dyn SubView]) -> usize {
        for (index, child) in children.iter().enumerate() {
            if Self::fits(child.size_that_fits(proposal), proposal) {
                return index;
            }
        }
        children.len().saturating_sub(1)
    }
}

impl Layout for FitLayout {
    fn size_that_fits(&self, proposal: ProposalSize, children: &[&dyn SubView]) -> Size {
        if children.is_empty() {
            return Size::zero();
        }
        let chosen = Self::choose(proposal, children);
        children[chosen].size_that_fits(proposal)
    }

    fn place(&self, bounds: Rect, children: &[&dyn SubView]) -> Vec<Rect> {
        let proposal = ProposalSize::new(Some(bounds.width()), Some(bounds.height()));
        let chosen = Self::choose(proposal, children);

        children
            .iter()
            .enumerate()
            .map(|(index, child)| {
                if index == chosen {
                    let size = child.size_that_fits(proposal);
                    let size = Size::new(
                        size.width.min(bounds.width()),
                        size.height.min(bounds.height()),
                    );
                    Rect::new(bounds.origin(), size)
                } else {
                    Rect::new(bounds.origin(), Size::zero())
                }
            })
            .collect()
    }
}

/// A view presenting the first of its children that fits.
///
/// Children are alternatives for the same content, ordered from most to
/// least preferred; the collection item uses it to fall from a one-line row
/// back to a column when the row would overflow.
#[derive(Debug)]
pub struct FitStack {
    contents: Vec<ripple_core::AnyView>,
}

impl FitStack {
    /// Creates a fit stack from alternative arrangements.
    pub fn new(contents: impl TupleViews) -> Self {
        Self {
            contents: contents.into_views(),
        }
    }
}

impl View for FitStack {
    fn body(self, _env: &Environment) -> impl View + use<> {
        FixedContainer::new(FitLayout, self.contents)
    }
}

/// Creates a [`FitStack`] from alternative arrangements.
pub fn fit_stack(contents: impl TupleViews) -> FitStack {
    FitStack::new(contents)
}

#[cfg(test)]
mod tests {
    use ripple_core::layout::{Point, StretchAxis};

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
    fn first_fitting_child_wins() {
        let wide = MockSubView {
            size: Size::new(300.0, 20.0),
        };
        let narrow = MockSubView {
            size: Size::new(80.0, 60.0),
        };
        let children: Vec<&dyn SubView> = vec![&wide, &narrow];

        let proposal = ProposalSize::new(Some(100.0), Some(100.0));
        assert_eq!(FitLayout::choose(proposal, &children), 1);
        assert_eq!(
            FitLayout.size_that_fits(proposal, &children),
            Size::new(80.0, 60.0)
        );
    }

    #[test]
    fn falls_back_to_last_when_nothing_fits() {
        let a = MockSubView {
            size: Size::new(300.0, 20.0),
        };
        let b = MockSubView {
            size: Size::new(200.0, 20.0),
        };
        let children: Vec<&dyn SubView> = vec![&a, &b];

        let proposal = ProposalSize::new(Some(100.0), Some(100.0));
        assert_eq!(FitLayout::choose(proposal, &children), 1);
    }

    #[test]
    fn unspecified_dimension_always_fits() {
        let tall = MockSubView {
            size: Size::new(50.0, 900.0),
        };
        let children: Vec<&dyn SubView> = vec![&tall];
        let proposal = ProposalSize::new(Some(100.0), None);
        assert_eq!(FitLayout::choose(proposal, &children), 0);
    }

    #[test]
    fn unchosen_children_collapse() {
        let wide = MockSubView {
            size: Size::new(300.0, 20.0),
        };
        let narrow = MockSubView {
            size: Size::new(80.0, 60.0),
        };
        let children: Vec<&dyn SubView> = vec![&wide, &narrow];

        let bounds = Rect::new(Point::new(5.0, 5.0), Size::new(100.0, 100.0));
        let rects = FitLayout.place(bounds, &children);
        assert_eq!(rects[0].size(), &Size::zero());
        assert_eq!(rects[1].size(), &Size::new(80.0, 60.0));
        assert_eq!(rects[1].origin(), Point::new(5.0, 5.0));
    }
}
