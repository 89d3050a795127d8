//! Modifier-style extension methods available on every view.

use ripple_core::layout::Rect;
use ripple_core::{AnyView, Color, View};
use ripple_reactive::Binding;

use crate::border::{EdgeBorder, EdgeSet};
use crate::collection::CollectionStyle;
use crate::frame::Frame;
use crate::observe::{Dimension, FrameObserver, LengthReader};
use crate::stack::Alignment;

/// Builder-style modifiers for views.
pub trait ViewExt: View + Sized {
    /// Erases this view into an [`AnyView`].
    fn anyview(self) -> AnyView {
        AnyView::new(self)
    }

    /// Fixes this view's ideal width.
    fn width(self, width: f32) -> Frame {
        Frame::new(self).width(width)
    }

    /// Fixes this view's ideal height.
    fn height(self, height: f32) -> Frame {
        Frame::new(self).height(height)
    }

    /// Fixes both the ideal width and height.
    fn size(self, width: f32, height: f32) -> Frame {
        Frame::new(self).width(width).height(height)
    }

    /// Applies a minimum width constraint.
    fn min_width(self, width: f32) -> Frame {
        Frame::new(self).min_width(width)
    }

    /// Applies a maximum width constraint.
    fn max_width(self, width: f32) -> Frame {
        Frame::new(self).max_width(width)
    }

    /// Applies a minimum height constraint.
    fn min_height(self, height: f32) -> Frame {
        Frame::new(self).min_height(height)
    }

    /// Applies a maximum height constraint.
    fn max_height(self, height: f32) -> Frame {
        Frame::new(self).max_height(height)
    }

    /// Constrains this view to a width/height ratio.
    fn aspect_ratio(self, ratio: f32) -> Frame {
        Frame::new(self).aspect_ratio(ratio)
    }

    /// Aligns this view within its frame.
    fn alignment(self, alignment: Alignment) -> Frame {
        Frame::new(self).alignment(alignment)
    }

    /// Draws a border along the selected edges of this view.
    fn border(self, width: f32, edges: EdgeSet, color: Color) -> EdgeBorder {
        EdgeBorder::new(self, width, edges, color)
    }

    /// Publishes this view's measured width into a binding.
    fn width_reader(self, width: &Binding<f32>) -> LengthReader {
        LengthReader::new(self, Dimension::Width, width)
    }

    /// Publishes this view's measured height into a binding.
    fn height_reader(self, height: &Binding<f32>) -> LengthReader {
        LengthReader::new(self, Dimension::Height, height)
    }

    /// Publishes one measured dimension of this view into a binding.
    fn length_reader(self, dimension: Dimension, length: &Binding<f32>) -> LengthReader {
        LengthReader::new(self, dimension, length)
    }

    /// Delivers this view's frame to a callback on every geometry pass.
    fn observe_frame(self, handler: impl Fn(Rect) + 'static) -> FrameObserver {
        FrameObserver::new(self, handler)
    }

    /// Sizes this view as a collection thumbnail.
    ///
    /// In the list style the thumbnail is fixed at `width × width / ratio`;
    /// in the grid and horizontal styles it keeps the ratio and fits the
    /// space the cell proposes.
    fn collection_thumbnail(self, style: CollectionStyle, width: f32, ratio: f32) -> Frame {
        if style == CollectionStyle::List {
            Frame::new(self).width(width).height(width / ratio)
        } else {
            Frame::new(self).aspect_ratio(ratio)
        }
    }
}

impl<V: View + Sized> ViewExt for V {}
