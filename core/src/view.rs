//! The view protocol.
//!
//! A view is a cheap descriptor of a piece of interface. Composite views
//! implement [`View::body`] in terms of other views; the chain bottoms out in
//! [`Native`]-wrapped configurations that a rendering backend consumes
//! directly. [`AnyView`] erases concrete view types so heterogeneous children
//! can travel together, and supports downcasting back to raw configurations.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::any::{type_name, Any};
use core::fmt;

use crate::env::Environment;
use crate::layout::StretchAxis;

/// A declarative description of a piece of user interface.
///
/// `body` consumes the descriptor and produces the next view in the
/// resolution chain. Raw views wrap themselves in [`Native`] instead (see
/// [`raw_view!`](crate::raw_view)); resolving a `Native` is a backend error.
pub trait View: 'static {
    /// Resolves this view one step, against the given environment.
    fn body(self, env: &Environment) -> impl View + use<Self>;

    /// Which axis (or axes) this view stretches to fill available space.
    fn stretch_axis(&self) -> StretchAxis {
        StretchAxis::None
    }
}

/// The empty view. Renders nothing and never resolves further.
impl View for () {
    fn body(self, _env: &Environment) -> impl View + use<> {
        self
    }
}

/// A view handled directly by the rendering backend.
///
/// The wrapped configuration is the payload the backend inspects (via
/// [`AnyView::downcast_ref`]). Resolving a `Native` view's body is a contract
/// violation and panics.
#[derive(Debug)]
pub struct Native<T: NativeView>(pub T);

impl<T: NativeView> Native<T> {
    /// Wraps a backend configuration.
    pub const fn new(config: T) -> Self {
        Self(config)
    }

    /// Returns the wrapped configuration.
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T: NativeView + 'static> View for Native<T> {
    #[allow(unused)]
    #[allow(clippy::needless_return)]
    fn body(self, _env: &Environment) -> impl View + use<T> {
        panic!("native view ({}) has no body", type_name::<T>());
        return;
    }

    fn stretch_axis(&self) -> StretchAxis {
        NativeView::stretch_axis(&self.0)
    }
}

/// A configuration rendered by the backend rather than resolved in Rust.
pub trait NativeView {
    /// Which axis (or axes) this view stretches to fill available space.
    fn stretch_axis(&self) -> StretchAxis {
        StretchAxis::None
    }
}

trait ErasedView: Any {
    fn erased_body(self: Box<Self>, env: &Environment) -> AnyView;
    fn erased_stretch_axis(&self) -> StretchAxis;
    fn as_any(&self) -> &dyn Any;
    fn into_any(self: Box<Self>) -> Box<dyn Any>;
    fn type_name(&self) -> &'static str;
}

impl<V: View> ErasedView for V {
    fn erased_body(self: Box<Self>, env: &Environment) -> AnyView {
        AnyView::new((*self).body(env))
    }

    fn erased_stretch_axis(&self) -> StretchAxis {
        self.stretch_axis()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }

    fn type_name(&self) -> &'static str {
        type_name::<V>()
    }
}

/// A type-erased view.
pub struct AnyView(Box<dyn ErasedView>);

impl fmt::Debug for AnyView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AnyView").field(&self.0.type_name()).finish()
    }
}

impl AnyView {
    /// Erases a concrete view.
    pub fn new(view: impl View) -> Self {
        Self(Box::new(view))
    }

    /// Resolves the wrapped view one step.
    ///
    /// Bodies that already return an `AnyView` are unwrapped, so resolution
    /// never nests erasure.
    #[must_use]
    pub fn resolve(self, env: &Environment) -> Self {
        self.0.erased_body(env).flatten()
    }

    fn flatten(self) -> Self {
        match self.downcast::<Self>() {
            Ok(inner) => inner.flatten(),
            Err(view) => view,
        }
    }

    /// Returns the wrapped view if it is a `T`.
    #[must_use]
    pub fn downcast_ref<T: View>(&self) -> Option<&T> {
        self.0.as_any().downcast_ref()
    }

    /// Takes the wrapped view out if it is a `T`.
    ///
    /// # Errors
    ///
    /// Returns `self` unchanged when the wrapped view is not a `T`.
    pub fn downcast<T: View>(self) -> Result<T, Self> {
        if self.0.as_any().is::<T>() {
            match self.0.into_any().downcast::<T>() {
                Ok(view) => Ok(*view),
                Err(_) => unreachable!("type was checked before the downcast"),
            }
        } else {
            Err(self)
        }
    }

    /// Returns `true` if the wrapped view is a `T`.
    #[must_use]
    pub fn is<T: View>(&self) -> bool {
        self.0.as_any().is::<T>()
    }

    /// The type name of the wrapped view, for diagnostics.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        self.0.type_name()
    }
}

impl View for AnyView {
    fn body(self, env: &Environment) -> impl View + use<> {
        self.0.erased_body(env)
    }

    fn stretch_axis(&self) -> StretchAxis {
        self.0.erased_stretch_axis()
    }
}

/// Conversion from tuples of heterogeneous views into erased children.
///
/// Layout containers accept their children as a tuple so call sites read like
/// a view hierarchy; this trait flattens the tuple.
pub trait TupleViews {
    /// Erases the tuple into a list of children.
    fn into_views(self) -> Vec<AnyView>;
}

impl TupleViews for Vec<AnyView> {
    fn into_views(self) -> Vec<AnyView> {
        self
    }
}

macro_rules! impl_tuple_views {
    ($(($idx:tt, $ty:ident)),*) => {
        impl<$($ty: View),*> TupleViews for ($($ty,)*) {
            fn into_views(self) -> Vec<AnyView> {
                alloc::vec![$(AnyView::new(self.$idx)),*]
            }
        }
    };
}

impl_tuple_views!();
impl_tuple_views!((0, V0));
impl_tuple_views!((0, V0), (1, V1));
impl_tuple_views!((0, V0), (1, V1), (2, V2));
impl_tuple_views!((0, V0), (1, V1), (2, V2), (3, V3));
impl_tuple_views!((0, V0), (1, V1), (2, V2), (3, V3), (4, V4));
impl_tuple_views!((0, V0), (1, V1), (2, V2), (3, V3), (4, V4), (5, V5));
impl_tuple_views!((0, V0), (1, V1), (2, V2), (3, V3), (4, V4), (5, V5), (6, V6));
impl_tuple_views!(
    (0, V0),
    (1, V1),
    (2, V2),
    (3, V3),
    (4, V4),
    (5, V5),
    (6, V6),
    (7, V7)
);
impl_tuple_views!(
    (0, V0),
    (1, V1),
    (2, V2),
    (3, V3),
    (4, V4),
    (5, V5),
    (6, V6),
    (7, V7),
    (8, V8)
);
impl_tuple_views!(
    (0, V0),
    (1, V1),
    (2, V2),
    (3, V3),
    (4, V4),
    (5, V5),
    (6, V6),
    (7, V7),
    (8, V8),
    (9, V9)
);
impl_tuple_views!(
    (0, V0),
    (1, V1),
    (2, V2),
    (3, V3),
    (4, V4),
    (5, V5),
    (6, V6),
    (7, V7),
    (8, V8),
    (9, V9),
    (10, V10)
);
impl_tuple_views!(
    (0, V0),
    (1, V1),
    (2, V2),
    (3, V3),
    (4, V4),
    (5, V5),
    (6, V6),
    (7, V7),
    (8, V8),
    (9, V9),
    (10, V10),
    (11, V11)
);
