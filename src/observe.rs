//! Geometry observation: raw views through which the backend reports
//! measured lengths and content frames.
//!
//! The host layout system is the event source here. Whenever it lays a
//! wrapped view out, it calls [`LengthReader::report`] with the measured
//! extent, or [`FrameObserver::observe`] with the content frame, at least
//! once per actual geometry change.

use std::fmt;
use std::rc::Rc;

use ripple_core::layout::{Axis, Rect, StretchAxis};
use ripple_core::{AnyView, Environment, Native, NativeView, View};
use ripple_reactive::Binding;
use tracing::trace;

/// The dimension a [`LengthReader`] measures.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Dimension {
    /// The horizontal extent.
    Width,
    /// The vertical extent.
    #[default]
    Height,
}

impl Dimension {
    /// The dimension measuring extent along `axis`.
    #[must_use]
    pub const fn along(axis: Axis) -> Self {
        match axis {
            Axis::Horizontal => Self::Width,
            Axis::Vertical => Self::Height,
        }
    }
}

/// Publishes one measured dimension of a view into a binding.
///
/// The binding is written only when the measured value actually changed, so
/// downstream watchers are not re-notified by layout passes that left the
/// view alone.
#[derive(Debug)]
pub struct LengthReader {
    dimension: Dimension,
    value: Binding<f32>,
    content: AnyView,
}

impl LengthReader {
    /// Wraps `content`, reporting its measured `dimension` into `value`.
    pub fn new(content: impl View, dimension: Dimension, value: &Binding<f32>) -> Self {
        Self {
            dimension,
            value: value.clone(),
            content: AnyView::new(content),
        }
    }

    /// The measured dimension.
    #[must_use]
    pub const fn dimension(&self) -> Dimension {
        self.dimension
    }

    /// The wrapped content.
    #[must_use]
    pub const fn content(&self) -> &AnyView {
        &self.content
    }

    /// Takes the wrapped content out, leaving the empty view behind.
    ///
    /// Backends take the content to build the subtree while keeping the
    /// reader itself alive as the reporting probe.
    pub fn take_content(&mut self) -> AnyView {
        std::mem::replace(&mut self.content, AnyView::new(()))
    }

    /// Reports a measured length; called by the backend after layout.
    pub fn report(&self, length: f32) {
        if self.value.get() != length {
            trace!(
                target: "ripple::observe",
                dimension = ?self.dimension,
                length,
                "dimension changed"
            );
            self.value.set(length);
        }
    }
}

impl NativeView for LengthReader {
    fn stretch_axis(&self) -> StretchAxis {
        self.content.stretch_axis()
    }
}

impl View for LengthReader {
    fn body(self, _env: &Environment) -> impl View + use<> {
        Native::new(self)
    }

    fn stretch_axis(&self) -> StretchAxis {
        self.content.stretch_axis()
    }
}

/// Delivers a view's frame, in the enclosing coordinate space, to a callback.
///
/// The backend calls [`observe`](Self::observe) with the wrapped view's frame
/// on every geometry pass.
pub struct FrameObserver {
    content: AnyView,
    handler: Rc<dyn Fn(Rect)>,
}

impl fmt::Debug for FrameObserver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FrameObserver")
            .field("content", &self.content)
            .finish()
    }
}

impl FrameObserver {
    /// Wraps `content`, delivering its frames to `handler`.
    pub fn new(content: impl View, handler: impl Fn(Rect) + 'static) -> Self {
        Self {
            content: AnyView::new(content),
            handler: Rc::new(handler),
        }
    }

    /// The wrapped content.
    #[must_use]
    pub const fn content(&self) -> &AnyView {
        &self.content
    }

    /// Takes the wrapped content out, leaving the empty view behind.
    ///
    /// The handler, and any subscriptions it owns, stay with the observer;
    /// backends keep the observer alive for as long as the wrapped subtree
    /// is on screen.
    pub fn take_content(&mut self) -> AnyView {
        std::mem::replace(&mut self.content, AnyView::new(()))
    }

    /// Delivers one geometry event; called by the backend.
    pub fn observe(&self, frame: Rect) {
        (self.handler)(frame);
    }
}

impl NativeView for FrameObserver {
    fn stretch_axis(&self) -> StretchAxis {
        self.content.stretch_axis()
    }
}

impl View for FrameObserver {
    fn body(self, _env: &Environment) -> impl View + use<> {
        Native::new(self)
    }

    fn stretch_axis(&self) -> StretchAxis {
        self.content.stretch_axis()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use ripple_core::layout::{Point, Size};
    use ripple_reactive::{binding, Signal};

    use super::*;

    #[test]
    fn report_writes_only_on_change() {
        let height = binding(0.0_f32);
        let reader = LengthReader::new((), Dimension::Height, &height);

        let writes = Rc::new(RefCell::new(0));
        let _guard = height.watch({
            let writes = writes.clone();
            move |_| *writes.borrow_mut() += 1
        });

        reader.report(120.0);
        reader.report(120.0);
        reader.report(120.0);
        assert_eq!(height.get(), 120.0);
        assert_eq!(*writes.borrow(), 1);

        reader.report(90.0);
        assert_eq!(*writes.borrow(), 2);
    }

    #[test]
    fn dimension_follows_axis() {
        assert_eq!(Dimension::along(Axis::Vertical), Dimension::Height);
        assert_eq!(Dimension::along(Axis::Horizontal), Dimension::Width);
    }

    #[test]
    fn observer_forwards_frames() {
        let frames = Rc::new(RefCell::new(Vec::new()));
        let observer = FrameObserver::new((), {
            let frames = frames.clone();
            move |frame| frames.borrow_mut().push(frame)
        });

        let frame = Rect::new(Point::new(0.0, -40.0), Size::new(100.0, 400.0));
        observer.observe(frame);
        assert_eq!(frames.borrow().len(), 1);
        assert_eq!(frames.borrow()[0], frame);
    }
}
