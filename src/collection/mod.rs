//! Adaptive collections: one data set, three presentations.

mod item;
mod style;

pub use item::CollectionItem;
pub use style::{CollectionContext, CollectionStyle, ParseStyleError, SizeClass};

use std::fmt;

use ripple_core::views::{AnyViews, Views, ViewsExt};
use ripple_core::{AnyView, Environment, View};

use crate::frame::Frame;
use crate::grid::AdaptiveGrid;
use crate::scroll::{ScrollAnchor, ScrollView};
use crate::stack::{CrossAlignment, ListStack};

use ripple_core::layout::Axis;

/// A scrollable collection that presents its items as a list, an adaptive
/// grid, or a horizontal rail, per its explicit [`CollectionContext`].
///
/// Items are held as a reconstructable collection, so every presentation is
/// lazy. The scroll view anchors at the collection's natural leading edge,
/// honoring the context's layout direction.
pub struct AdaptiveCollection {
    context: CollectionContext,
    tile_width: f32,
    spacing: f32,
    shows_indicators: bool,
    contents: AnyViews,
}

impl fmt::Debug for AdaptiveCollection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdaptiveCollection")
            .field("context", &self.context)
            .field("tile_width", &self.tile_width)
            .field("spacing", &self.spacing)
            .finish()
    }
}

impl AdaptiveCollection {
    /// Creates a collection with the given context and tile width.
    ///
    /// `tile_width` is the minimum column width in the grid style and the
    /// ideal item width in the horizontal style; the list style ignores it.
    pub fn new(context: CollectionContext, tile_width: f32, contents: impl Views + 'static) -> Self {
        Self {
            context,
            tile_width,
            spacing: 0.0,
            shows_indicators: true,
            contents: AnyViews::new(contents),
        }
    }

    /// Sets the spacing between items.
    #[must_use]
    pub const fn spacing(mut self, spacing: f32) -> Self {
        self.spacing = spacing;
        self
    }

    /// Sets whether scroll indicators are shown.
    #[must_use]
    pub const fn shows_indicators(mut self, shows_indicators: bool) -> Self {
        self.shows_indicators = shows_indicators;
        self
    }
}

impl View for AdaptiveCollection {
    fn body(self, _env: &Environment) -> impl View + use<> {
        let context = self.context;

        let inner = match context.style {
            CollectionStyle::List => {
                let alignment = if context.direction.is_right_to_left() {
                    CrossAlignment::End
                } else {
                    CrossAlignment::Start
                };
                AnyView::new(
                    ListStack::for_each(Axis::Vertical, self.contents)
                        .alignment(alignment)
                        .spacing(self.spacing),
                )
            }
            CollectionStyle::Grid => {
                AnyView::new(AdaptiveGrid::new(self.tile_width, self.contents).spacing(self.spacing))
            }
            CollectionStyle::Horizontal => {
                let tile_width = self.tile_width;
                let tiles = self
                    .contents
                    .map(move |view| Frame::new(view).width(tile_width));
                AnyView::new(
                    ListStack::for_each(Axis::Horizontal, tiles).spacing(self.spacing),
                )
            }
        };

        ScrollView::new(context.axis, inner)
            .anchor(ScrollAnchor::natural(context.axis, context.direction))
            .shows_indicators(self.shows_indicators)
    }
}
