//! View wrappers that let arbitrary [`Layout`] implementations participate in
//! the view tree.

use std::fmt;

use ripple_core::layout::{Layout, StretchAxis};
use ripple_core::views::{AnyViews, Views};
use ripple_core::{AnyView, Environment, Native, NativeView, TupleViews, View};

/// A container whose children are collected up front.
///
/// The backend measures and places the children with the boxed [`Layout`].
pub struct FixedContainer {
    layout: Box<dyn Layout>,
    contents: Vec<AnyView>,
}

impl fmt::Debug for FixedContainer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FixedContainer")
            .field("layout", &self.layout)
            .field("contents", &self.contents)
            .finish()
    }
}

impl FixedContainer {
    /// Wraps a layout and a tuple of child views.
    pub fn new(layout: impl Layout + 'static, contents: impl TupleViews) -> Self {
        Self {
            layout: Box::new(layout),
            contents: contents.into_views(),
        }
    }

    /// The layout driving this container.
    #[must_use]
    pub fn layout(&self) -> &dyn Layout {
        &*self.layout
    }

    /// The collected children.
    #[must_use]
    pub fn children(&self) -> &[AnyView] {
        &self.contents
    }

    /// Decomposes the container into its layout and children.
    #[must_use]
    pub fn into_inner(self) -> (Box<dyn Layout>, Vec<AnyView>) {
        (self.layout, self.contents)
    }
}

impl NativeView for FixedContainer {
    fn stretch_axis(&self) -> StretchAxis {
        self.layout.stretch_axis()
    }
}

impl View for FixedContainer {
    fn body(self, _env: &Environment) -> impl View + use<> {
        Native::new(self)
    }

    fn stretch_axis(&self) -> StretchAxis {
        self.layout.stretch_axis()
    }
}

/// A container whose children are reconstructed on demand.
///
/// Holding a [`Views`] collection instead of flat children signals to the
/// backend that instantiation may be deferred and windowed (lazy stacks and
/// grids).
pub struct LazyContainer {
    layout: Box<dyn Layout>,
    contents: AnyViews,
}

impl fmt::Debug for LazyContainer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LazyContainer")
            .field("layout", &self.layout)
            .field("contents", &self.contents)
            .finish()
    }
}

impl LazyContainer {
    /// Wraps a layout and a reconstructable view collection.
    pub fn new(layout: impl Layout + 'static, contents: impl Views + 'static) -> Self {
        Self {
            layout: Box::new(layout),
            contents: AnyViews::new(contents),
        }
    }

    /// The layout driving this container.
    #[must_use]
    pub fn layout(&self) -> &dyn Layout {
        &*self.layout
    }

    /// The reconstructable children.
    #[must_use]
    pub fn contents(&self) -> &AnyViews {
        &self.contents
    }

    /// Decomposes the container into its layout and contents.
    #[must_use]
    pub fn into_inner(self) -> (Box<dyn Layout>, AnyViews) {
        (self.layout, self.contents)
    }
}

impl NativeView for LazyContainer {
    fn stretch_axis(&self) -> StretchAxis {
        self.layout.stretch_axis()
    }
}

impl View for LazyContainer {
    fn body(self, _env: &Environment) -> impl View + use<> {
        Native::new(self)
    }

    fn stretch_axis(&self) -> StretchAxis {
        self.layout.stretch_axis()
    }
}
