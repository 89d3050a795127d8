//! Size constraints and alignment for a single child.

use ripple_core::layout::{Layout, Point, ProposalSize, Rect, Size, SubView};
use ripple_core::{AnyView, Environment, View};

use crate::container::FixedContainer;
use crate::stack::{Alignment, HorizontalAlignment, VerticalAlignment};

/// Layout that overrides a single child's proposal.
///
/// The ideal dimensions replace the parent's proposal where set, clamped by
/// the minimum/maximum constraints. An aspect ratio (width divided by height)
/// takes precedence over the other constraints: the frame reports the largest
/// size with that ratio fitting the proposal.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FrameLayout {
    /// Minimum width, in points.
    pub min_width: Option<f32>,
    /// Ideal width, in points.
    pub ideal_width: Option<f32>,
    /// Maximum width, in points.
    pub max_width: Option<f32>,
    /// Minimum height, in points.
    pub min_height: Option<f32>,
    /// Ideal height, in points.
    pub ideal_height: Option<f32>,
    /// Maximum height, in points.
    pub max_height: Option<f32>,
    /// Width divided by height, if constrained.
    pub aspect_ratio: Option<f32>,
    /// Placement of the child within the frame.
    pub alignment: Alignment,
}

impl FrameLayout {
    fn aspect_size(ratio: f32, proposal: ProposalSize, children: &[&dyn SubView]) -> Size {
        match (proposal.width, proposal.height) {
            (Some(width), Some(height)) => {
                if height <= 0.0 || width / height > ratio {
                    Size::new(height * ratio, height)
                } else {
                    Size::new(width, width / ratio)
                }
            }
            (Some(width), None) => Size::new(width, width / ratio),
            (None, Some(height)) => Size::new(height * ratio, height),
            (None, None) => {
                let intrinsic = children
                    .first()
                    .map_or(Size::zero(), |child| {
                        child.size_that_fits(ProposalSize::UNSPECIFIED)
                    });
                Size::new(intrinsic.width, intrinsic.width / ratio)
            }
        }
    }
}

impl Layout for FrameLayout {
    fn size_that_fits(&self, proposal: ProposalSize, children: &[&dyn SubView]) -> Size {
        if let Some(ratio) = self.aspect_ratio {
            return Self::aspect_size(ratio, proposal, children);
        }

        let proposed_width = self.ideal_width.or(proposal.width);
        let proposed_height = self.ideal_height.or(proposal.height);

        let clamp_width = |w: f32| {
            w.max(self.min_width.unwrap_or(f32::NEG_INFINITY))
                .min(self.max_width.unwrap_or(f32::INFINITY))
        };
        let clamp_height = |h: f32| {
            h.max(self.min_height.unwrap_or(f32::NEG_INFINITY))
                .min(self.max_height.unwrap_or(f32::INFINITY))
        };

        let child_proposal = ProposalSize {
            width: proposed_width.map(clamp_width),
            height: proposed_height.map(clamp_height),
        };
        let child_size = children
            .first()
            .map_or(Size::zero(), |child| child.size_that_fits(child_proposal));

        let target_width = clamp_width(self.ideal_width.unwrap_or(child_size.width));
        let target_height = clamp_height(self.ideal_height.unwrap_or(child_size.height));

        Size::new(target_width, target_height)
    }

    fn place(&self, bounds: Rect, children: &[&dyn SubView]) -> Vec<Rect> {
        if children.is_empty() {
            return vec![];
        }

        let child_proposal = ProposalSize::new(Some(bounds.width()), Some(bounds.height()));
        let child_size = children
            .first()
            .map_or(Size::zero(), |child| child.size_that_fits(child_proposal));

        let child_width = if child_size.width.is_infinite() {
            bounds.width()
        } else {
            child_size.width.min(bounds.width())
        };
        let child_height = if child_size.height.is_infinite() {
            bounds.height()
        } else {
            child_size.height.min(bounds.height())
        };

        let x = match self.alignment.horizontal() {
            HorizontalAlignment::Leading => bounds.x(),
            HorizontalAlignment::Center => bounds.x() + (bounds.width() - child_width) / 2.0,
            HorizontalAlignment::Trailing => bounds.max_x() - child_width,
        };
        let y = match self.alignment.vertical() {
            VerticalAlignment::Top => bounds.y(),
            VerticalAlignment::Center => bounds.y() + (bounds.height() - child_height) / 2.0,
            VerticalAlignment::Bottom => bounds.max_y() - child_height,
        };

        vec![Rect::new(
            Point::new(x, y),
            Size::new(child_width, child_height),
        )]
    }
}

/// A view that constrains and aligns a single child.
#[derive(Debug)]
pub struct Frame {
    layout: FrameLayout,
    content: AnyView,
}

impl Frame {
    /// Wraps a child with no constraints.
    #[must_use]
    pub fn new(content: impl View) -> Self {
        Self {
            layout: FrameLayout::default(),
            content: AnyView::new(content),
        }
    }

    /// Sets the placement of the child within the frame.
    #[must_use]
    pub const fn alignment(mut self, alignment: Alignment) -> Self {
        self.layout.alignment = alignment;
        self
    }

    /// Sets the ideal width.
    #[must_use]
    pub const fn width(mut self, width: f32) -> Self {
        self.layout.ideal_width = Some(width);
        self
    }

    /// Sets the ideal height.
    #[must_use]
    pub const fn height(mut self, height: f32) -> Self {
        self.layout.ideal_height = Some(height);
        self
    }

    /// Sets the minimum width.
    #[must_use]
    pub const fn min_width(mut self, width: f32) -> Self {
        self.layout.min_width = Some(width);
        self
    }

    /// Sets the maximum width.
    #[must_use]
    pub const fn max_width(mut self, width: f32) -> Self {
        self.layout.max_width = Some(width);
        self
    }

    /// Sets the minimum height.
    #[must_use]
    pub const fn min_height(mut self, height: f32) -> Self {
        self.layout.min_height = Some(height);
        self
    }

    /// Sets the maximum height.
    #[must_use]
    pub const fn max_height(mut self, height: f32) -> Self {
        self.layout.max_height = Some(height);
        self
    }

    /// Constrains the frame to a width/height ratio, fitting the proposal.
    #[must_use]
    pub const fn aspect_ratio(mut self, ratio: f32) -> Self {
        self.layout.aspect_ratio = Some(ratio);
        self
    }
}

impl View for Frame {
    fn body(self, _env: &Environment) -> impl View + use<> {
        FixedContainer::new(self.layout, vec![self.content])
    }
}
