//! Axis-parameterized stacks for list-style content.
//!
//! A [`ListStack`] lays out its children in a line along either axis, with
//! the axis chosen at runtime. Its engine, [`StackLayout`], therefore works
//! in main/cross coordinates rather than widths and heights: the main axis is
//! the stacking direction, the cross axis the other one.

use std::fmt;

use ripple_core::layout::{Axis, Layout, Point, ProposalSize, Rect, Size, StretchAxis, SubView};
use ripple_core::views::Views;
use ripple_core::{Environment, TupleViews, View};

use crate::container::{FixedContainer, LazyContainer};

/// Horizontal placement of a child inside a wider slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HorizontalAlignment {
    /// Align to the leading (left) edge.
    Leading,
    /// Center horizontally.
    #[default]
    Center,
    /// Align to the trailing (right) edge.
    Trailing,
}

/// Vertical placement of a child inside a taller slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VerticalAlignment {
    /// Align to the top edge.
    Top,
    /// Center vertically.
    #[default]
    Center,
    /// Align to the bottom edge.
    Bottom,
}

/// Two-dimensional alignment used by grids and frames.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Alignment {
    horizontal: HorizontalAlignment,
    vertical: VerticalAlignment,
}

impl Alignment {
    /// Centered on both axes.
    pub const CENTER: Self = Self::new(HorizontalAlignment::Center, VerticalAlignment::Center);
    /// Top-leading corner.
    pub const TOP_LEADING: Self = Self::new(HorizontalAlignment::Leading, VerticalAlignment::Top);
    /// Top-trailing corner.
    pub const TOP_TRAILING: Self = Self::new(HorizontalAlignment::Trailing, VerticalAlignment::Top);
    /// Bottom-leading corner.
    pub const BOTTOM_LEADING: Self =
        Self::new(HorizontalAlignment::Leading, VerticalAlignment::Bottom);
    /// Bottom-trailing corner.
    pub const BOTTOM_TRAILING: Self =
        Self::new(HorizontalAlignment::Trailing, VerticalAlignment::Bottom);

    /// Combines a horizontal and a vertical alignment.
    #[must_use]
    pub const fn new(horizontal: HorizontalAlignment, vertical: VerticalAlignment) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }

    /// The horizontal component.
    #[must_use]
    pub const fn horizontal(&self) -> HorizontalAlignment {
        self.horizontal
    }

    /// The vertical component.
    #[must_use]
    pub const fn vertical(&self) -> VerticalAlignment {
        self.vertical
    }
}

/// Cross-axis placement of children in a [`ListStack`].
///
/// `Start` is the top edge in a horizontal stack and the left edge in a
/// vertical one; callers that honor a right-to-left layout direction pick
/// `Start` or `End` accordingly.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CrossAlignment {
    /// Align to the minimum cross coordinate.
    Start,
    /// Center across the stack.
    #[default]
    Center,
    /// Align to the maximum cross coordinate.
    End,
}

/// Layout engine shared by [`ListStack`] on both axes.
///
/// Children are measured with an unspecified main extent and the stack's
/// cross extent. The intrinsic main extent is the sum of every child's
/// measured extent plus spacing; stretch-capable children count with their
/// measured minimum and absorb the surplus, equally divided, during
/// placement. A trailing spacer with a reactive minimum length therefore
/// occupies exactly that minimum when the stack is unbounded along its main
/// axis, which is what scroll content relies on.
#[derive(Debug, Clone, PartialEq)]
pub struct StackLayout {
    /// The stacking direction.
    pub axis: Axis,
    /// Cross-axis placement of children.
    pub alignment: CrossAlignment,
    /// Gap between adjacent children, in points.
    pub spacing: f32,
}

impl StackLayout {
    /// Creates a stack layout with centered alignment and no spacing.
    #[must_use]
    pub const fn new(axis: Axis) -> Self {
        Self {
            axis,
            alignment: CrossAlignment::Center,
            spacing: 0.0,
        }
    }
}

struct ChildMeasurement {
    size: Size,
    stretch: StretchAxis,
}

impl ChildMeasurement {
    fn stretches_main(&self, axis: Axis) -> bool {
        match self.stretch {
            StretchAxis::MainAxis | StretchAxis::Both => true,
            StretchAxis::Horizontal => axis.is_horizontal(),
            StretchAxis::Vertical => axis.is_vertical(),
            StretchAxis::None | StretchAxis::CrossAxis => false,
        }
    }

    fn stretches_cross(&self, axis: Axis) -> bool {
        match self.stretch {
            StretchAxis::CrossAxis | StretchAxis::Both => true,
            StretchAxis::Horizontal => axis.is_vertical(),
            StretchAxis::Vertical => axis.is_horizontal(),
            StretchAxis::None | StretchAxis::MainAxis => false,
        }
    }
}

#[allow(clippy::cast_precision_loss)]
impl StackLayout {
    fn measure(&self, proposal: ProposalSize, children: &[&dyn SubView]) -> Vec<ChildMeasurement> {
        children
            .iter()
            .map(|child| ChildMeasurement {
                size: child.size_that_fits(proposal),
                stretch: child.stretch_axis(),
            })
            .collect()
    }

    fn total_spacing(&self, count: usize) -> f32 {
        if count > 1 {
            (count - 1) as f32 * self.spacing
        } else {
            0.0
        }
    }
}

#[allow(clippy::cast_precision_loss)]
impl Layout for StackLayout {
    fn size_that_fits(&self, proposal: ProposalSize, children: &[&dyn SubView]) -> Size {
        if children.is_empty() {
            return Size::zero();
        }

        let axis = self.axis;
        let child_proposal = ProposalSize::packed(axis, None, proposal.across(axis));
        let measurements = self.measure(child_proposal, children);

        let measured_main: f32 = measurements
            .iter()
            .map(|m| axis.length_of(&m.size))
            .filter(|main| main.is_finite())
            .sum();
        let intrinsic_main = measured_main + self.total_spacing(children.len());

        let has_main_stretch = measurements.iter().any(|m| m.stretches_main(axis));
        let final_main = if has_main_stretch {
            proposal.along(axis).unwrap_or(intrinsic_main)
        } else {
            match proposal.along(axis) {
                Some(proposed) => intrinsic_main.min(proposed),
                None => intrinsic_main,
            }
        };

        // Cross-stretching children adapt to whatever the stack settles on,
        // so they do not contribute to the intrinsic cross extent.
        let max_cross = measurements
            .iter()
            .filter(|m| !m.stretches_cross(axis))
            .map(|m| axis.cross_length_of(&m.size))
            .filter(|cross| cross.is_finite())
            .max_by(f32::total_cmp)
            .unwrap_or(0.0);

        let final_cross = match proposal.across(axis) {
            Some(proposed) => max_cross.min(proposed),
            None => max_cross,
        };

        axis.pack(final_main, final_cross)
    }

    fn place(&self, bounds: Rect, children: &[&dyn SubView]) -> Vec<Rect> {
        if children.is_empty() {
            return vec![];
        }

        let axis = self.axis;
        let bounds_main = axis.length_of(bounds.size());
        let bounds_cross = axis.cross_length_of(bounds.size());

        let child_proposal = ProposalSize::packed(axis, None, Some(bounds_cross));
        let measurements = self.measure(child_proposal, children);

        let measured_main: f32 = measurements
            .iter()
            .map(|m| axis.length_of(&m.size))
            .filter(|main| main.is_finite())
            .sum();
        let stretch_count = measurements
            .iter()
            .filter(|m| m.stretches_main(axis))
            .count();

        let surplus = bounds_main - measured_main - self.total_spacing(children.len());
        let stretch_extra = if stretch_count > 0 {
            (surplus / stretch_count as f32).max(0.0)
        } else {
            0.0
        };

        let main_origin = axis.min_of(&bounds);
        let cross_origin = axis.cross().min_of(&bounds);

        let mut rects = Vec::with_capacity(children.len());
        let mut cursor = main_origin;

        for (index, measurement) in measurements.iter().enumerate() {
            if index > 0 {
                cursor += self.spacing;
            }

            let measured = axis.length_of(&measurement.size);
            let measured = if measured.is_finite() { measured } else { bounds_main };
            let child_main = if measurement.stretches_main(axis) {
                measured + stretch_extra
            } else {
                measured
            };

            let cross = axis.cross_length_of(&measurement.size);
            let child_cross = if measurement.stretches_cross(axis) || cross.is_infinite() {
                bounds_cross
            } else {
                cross.min(bounds_cross)
            };

            let cross_position = match self.alignment {
                CrossAlignment::Start => cross_origin,
                CrossAlignment::Center => cross_origin + (bounds_cross - child_cross) / 2.0,
                CrossAlignment::End => cross_origin + bounds_cross - child_cross,
            };

            let origin = match axis {
                Axis::Horizontal => Point::new(cursor, cross_position),
                Axis::Vertical => Point::new(cross_position, cursor),
            };
            rects.push(Rect::new(origin, axis.pack(child_main, child_cross)));

            cursor += child_main;
        }

        rects
    }

    /// Stacks fill the available cross extent and size to content along the
    /// main axis.
    fn stretch_axis(&self) -> StretchAxis {
        match self.axis {
            Axis::Horizontal => StretchAxis::Vertical,
            Axis::Vertical => StretchAxis::Horizontal,
        }
    }
}

/// A stack for displaying a list of items along a runtime-chosen axis.
///
/// ```
/// use ripple::stack::ListStack;
/// use ripple_core::layout::Axis;
///
/// let _row = ListStack::new(Axis::Horizontal, ((), (), ())).spacing(4.0);
/// ```
///
/// [`ListStack::for_each`] produces the lazy variant, whose children the
/// backend may instantiate on demand.
#[derive(Clone)]
pub struct ListStack<C> {
    layout: StackLayout,
    contents: C,
}

impl<C> fmt::Debug for ListStack<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListStack").field("layout", &self.layout).finish()
    }
}

impl<C: TupleViews> ListStack<(C,)> {
    /// Creates a stack with collected children.
    pub const fn new(axis: Axis, contents: C) -> Self {
        Self {
            layout: StackLayout::new(axis),
            contents: (contents,),
        }
    }
}

/// Marker for the lazy [`ListStack`] variant.
pub struct Lazy(ripple_core::views::AnyViews);

ripple_core::impl_debug!(Lazy);

impl ListStack<Lazy> {
    /// Creates a stack whose children are reconstructed on demand.
    pub fn for_each(axis: Axis, contents: impl Views + 'static) -> Self {
        Self {
            layout: StackLayout::new(axis),
            contents: Lazy(ripple_core::views::AnyViews::new(contents)),
        }
    }
}

impl<C> ListStack<C> {
    /// Sets the cross-axis alignment for children.
    #[must_use]
    pub const fn alignment(mut self, alignment: CrossAlignment) -> Self {
        self.layout.alignment = alignment;
        self
    }

    /// Sets the spacing between children.
    #[must_use]
    pub const fn spacing(mut self, spacing: f32) -> Self {
        self.layout.spacing = spacing;
        self
    }
}

impl<C: TupleViews + 'static> View for ListStack<(C,)> {
    fn body(self, _env: &Environment) -> impl View + use<C> {
        FixedContainer::new(self.layout, self.contents.0)
    }
}

impl View for ListStack<Lazy> {
    fn body(self, _env: &Environment) -> impl View + use<> {
        LazyContainer::new(self.layout, self.contents.0)
    }
}

/// Convenience constructor for a fixed [`ListStack`].
pub const fn list_stack<C: TupleViews>(axis: Axis, contents: C) -> ListStack<(C,)> {
    ListStack::new(axis, contents)
}
