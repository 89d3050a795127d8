#![doc = include_str!("../README.md")]

pub mod border;
pub mod collection;
pub mod container;
pub mod fit;
pub mod frame;
pub mod grid;
pub mod observe;
pub mod scroll;
pub mod spacer;
pub mod stack;
mod view_ext;

#[doc(inline)]
pub use view_ext::ViewExt;

pub use ripple_core::layout::{Axis, LayoutDirection};
#[doc(inline)]
pub use ripple_core::{
    env::{self, Environment},
    id::{self, Identifable},
    impl_debug, layout, raw_view,
    views::{self, ForEach},
    AnyView, Color, NativeView, TupleViews, View,
};

pub use ripple_reactive as reactive;
#[doc(inline)]
pub use reactive::{binding, Binding, Computed, Signal, SignalExt};

pub use border::{edge_rects, EdgeBorder, EdgeSet};
pub use collection::{
    AdaptiveCollection, CollectionContext, CollectionItem, CollectionStyle, SizeClass,
};
pub use scroll::{ObservingScrollView, OffsetTracker, ScrollView};
pub use spacer::{spacer, spacer_min, spacer_with, Spacer};
pub use stack::{list_stack, ListStack};

pub mod prelude {
    //! Commonly used components, traits, and types in one import.

    pub use crate::border::{EdgeBorder, EdgeSet};
    pub use crate::collection::{
        AdaptiveCollection, CollectionContext, CollectionItem, CollectionStyle, SizeClass,
    };
    pub use crate::fit::{fit_stack, FitStack};
    pub use crate::frame::Frame;
    pub use crate::grid::AdaptiveGrid;
    pub use crate::observe::{Dimension, FrameObserver, LengthReader};
    pub use crate::scroll::{
        scroll, scroll_horizontal, ObservingScrollView, OffsetTracker, ScrollAnchor, ScrollView,
    };
    pub use crate::spacer::{spacer, spacer_min, spacer_with, Spacer};
    pub use crate::stack::{list_stack, Alignment, CrossAlignment, ListStack};
    pub use crate::view_ext::ViewExt;

    pub use ripple_core::id::Identifable;
    pub use ripple_core::layout::{Axis, LayoutDirection};
    pub use ripple_core::views::{enumerated, ForEach};
    pub use ripple_core::{AnyView, Color, Environment, View};

    pub use ripple_reactive::{binding, Binding, Computed, Signal, SignalExt};
}

#[cfg(test)]
mod tests;
