//! A thumbnail/detail pair that adapts to the collection style.

use std::fmt;

use ripple_core::{AnyView, Environment, View};

use crate::collection::CollectionStyle;
use crate::fit::fit_stack;
use crate::spacer::spacer;
use crate::stack::{CrossAlignment, ListStack};

use ripple_core::layout::Axis;

/// One collection entry: a thumbnail and a detail view, arranged per style.
///
/// In the list style the item prefers a single centered row, pinned to the
/// leading edge by a trailing spacer; when the row would overflow, it falls
/// back to a leading-aligned column. Grid and horizontal styles always use
/// the column.
///
/// The style is passed explicitly; pair it with the context that configured
/// the surrounding [`AdaptiveCollection`](crate::collection::AdaptiveCollection).
#[derive(Clone)]
pub struct CollectionItem<T, D> {
    style: CollectionStyle,
    spacing: f32,
    thumbnail: T,
    detail: D,
}

impl<T, D> fmt::Debug for CollectionItem<T, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CollectionItem")
            .field("style", &self.style)
            .field("spacing", &self.spacing)
            .finish()
    }
}

impl<T, D> CollectionItem<T, D>
where
    T: View + Clone,
    D: View + Clone,
{
    /// Creates an item for the given style.
    pub const fn new(style: CollectionStyle, thumbnail: T, detail: D) -> Self {
        Self {
            style,
            spacing: 0.0,
            thumbnail,
            detail,
        }
    }

    /// Sets the spacing between thumbnail and detail.
    #[must_use]
    pub const fn spacing(mut self, spacing: f32) -> Self {
        self.spacing = spacing;
        self
    }
}

impl<T, D> View for CollectionItem<T, D>
where
    T: View + Clone,
    D: View + Clone,
{
    fn body(self, _env: &Environment) -> impl View + use<T, D> {
        let column = ListStack::new(Axis::Vertical, (self.thumbnail.clone(), self.detail.clone()))
            .alignment(CrossAlignment::Start)
            .spacing(self.spacing);

        match self.style {
            CollectionStyle::List => {
                let row = ListStack::new(
                    Axis::Horizontal,
                    (self.thumbnail, self.detail, spacer()),
                )
                .spacing(self.spacing);
                let stacked = ListStack::new(Axis::Horizontal, (column, spacer()));
                AnyView::new(fit_stack((row, stacked)))
            }
            CollectionStyle::Grid | CollectionStyle::Horizontal => AnyView::new(column),
        }
    }
}
