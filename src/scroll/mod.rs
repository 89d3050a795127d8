//! Scroll containers, including the offset-observing variant.

mod offset;

pub use offset::OffsetTracker;

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use ripple_core::layout::{Axis, LayoutDirection, StretchAxis};
use ripple_core::views::Views;
use ripple_core::{raw_view, AnyView, Environment, TupleViews, View};
use ripple_reactive::{binding, Binding, Computed, IntoComputed, Signal};

use crate::observe::{Dimension, FrameObserver, LengthReader};
use crate::spacer::spacer_with;
use crate::stack::ListStack;

/// Where a scroll view rests before the user interacts with it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollAnchor {
    /// The top edge (vertical scrolling).
    #[default]
    Top,
    /// The leading edge (horizontal scrolling).
    Leading,
    /// The trailing edge (horizontal scrolling under right-to-left layout).
    Trailing,
}

impl ScrollAnchor {
    /// The natural resting edge for the given axis and layout direction.
    #[must_use]
    pub const fn natural(axis: Axis, direction: LayoutDirection) -> Self {
        match axis {
            Axis::Vertical => Self::Top,
            Axis::Horizontal => {
                if direction.is_right_to_left() {
                    Self::Trailing
                } else {
                    Self::Leading
                }
            }
        }
    }
}

/// A scrollable viewport over content larger than itself.
///
/// Scrolling behavior belongs to the backend; this view only carries the
/// axis, indicator visibility, resting anchor, and content.
#[derive(Debug)]
pub struct ScrollView {
    axis: Axis,
    shows_indicators: bool,
    anchor: ScrollAnchor,
    content: AnyView,
}

impl ScrollView {
    /// Creates a scroll view over `content`, resting at the axis's natural
    /// anchor under left-to-right layout.
    pub fn new(axis: Axis, content: impl View) -> Self {
        Self {
            axis,
            shows_indicators: true,
            anchor: ScrollAnchor::natural(axis, LayoutDirection::LeftToRight),
            content: AnyView::new(content),
        }
    }

    /// Sets whether scroll indicators are shown.
    #[must_use]
    pub const fn shows_indicators(mut self, shows_indicators: bool) -> Self {
        self.shows_indicators = shows_indicators;
        self
    }

    /// Sets the resting anchor.
    #[must_use]
    pub const fn anchor(mut self, anchor: ScrollAnchor) -> Self {
        self.anchor = anchor;
        self
    }

    /// The scroll axis.
    #[must_use]
    pub const fn axis(&self) -> Axis {
        self.axis
    }

    /// The resting anchor.
    #[must_use]
    pub const fn resting_anchor(&self) -> ScrollAnchor {
        self.anchor
    }

    /// Whether scroll indicators are shown.
    #[must_use]
    pub const fn indicators_visible(&self) -> bool {
        self.shows_indicators
    }

    /// The scrollable content.
    #[must_use]
    pub const fn content(&self) -> &AnyView {
        &self.content
    }

    /// Decomposes the scroll view into its axis and content.
    #[must_use]
    pub fn into_inner(self) -> (Axis, AnyView) {
        (self.axis, self.content)
    }
}

raw_view!(ScrollView, StretchAxis::Both);

/// Creates a vertical [`ScrollView`].
pub fn scroll(content: impl View) -> ScrollView {
    ScrollView::new(Axis::Vertical, content)
}

/// Creates a horizontal [`ScrollView`].
pub fn scroll_horizontal(content: impl View) -> ScrollView {
    ScrollView::new(Axis::Horizontal, content)
}

/// A scroll view that derives and publishes its scroll offset.
///
/// The offset lands in the caller-owned binding handed to the constructor,
/// with the sign conventions of [`OffsetTracker`]. Content is stacked along
/// the scroll axis with a trailing spacer sized by the tracker, so content
/// smaller than the viewport stays pinned to its natural leading edge.
///
/// The layout direction may be supplied explicitly through
/// [`direction`](Self::direction); otherwise a host-installed
/// `Computed<LayoutDirection>` is looked up from the environment, falling
/// back to left-to-right. Direction changes reach the tracker reactively.
///
/// ```
/// use ripple::scroll::ObservingScrollView;
/// use ripple::{binding, Axis};
///
/// let offset = binding(0.0_f32);
/// let _list = ObservingScrollView::new(Axis::Vertical, &offset, ((), ()))
///     .spacing(4.0);
/// ```
pub struct ObservingScrollView<C> {
    axis: Axis,
    spacing: f32,
    shows_indicators: bool,
    offset: Binding<f32>,
    direction: Option<Computed<LayoutDirection>>,
    contents: C,
}

impl<C> fmt::Debug for ObservingScrollView<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObservingScrollView")
            .field("axis", &self.axis)
            .field("spacing", &self.spacing)
            .finish()
    }
}

impl<C: TupleViews> ObservingScrollView<(C,)> {
    /// Creates an observing scroll view with collected children.
    pub fn new(axis: Axis, offset: &Binding<f32>, contents: C) -> Self {
        Self {
            axis,
            spacing: 0.0,
            shows_indicators: true,
            offset: offset.clone(),
            direction: None,
            contents: (contents,),
        }
    }
}

impl ObservingScrollView<ripple_core::views::AnyViews> {
    /// Creates an observing scroll view whose children are reconstructed on
    /// demand.
    pub fn for_each(axis: Axis, offset: &Binding<f32>, contents: impl Views + 'static) -> Self {
        Self {
            axis,
            spacing: 0.0,
            shows_indicators: true,
            offset: offset.clone(),
            direction: None,
            contents: ripple_core::views::AnyViews::new(contents),
        }
    }
}

impl<C> ObservingScrollView<C> {
    /// Sets the spacing between children.
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

    /// Supplies the layout direction explicitly, constant or reactive.
    ///
    /// Overrides any host-installed direction.
    #[must_use]
    pub fn direction(mut self, direction: impl IntoComputed<LayoutDirection>) -> Self {
        self.direction = Some(direction.into_computed());
        self
    }
}

impl<C: TupleViews + 'static> View for ObservingScrollView<(C,)> {
    fn body(self, env: &Environment) -> impl View + use<C> {
        let inner = ListStack::new(self.axis, self.contents.0).spacing(self.spacing);
        assemble(
            self.axis,
            self.shows_indicators,
            &self.offset,
            self.direction,
            AnyView::new(inner),
            env,
        )
    }
}

impl View for ObservingScrollView<ripple_core::views::AnyViews> {
    fn body(self, env: &Environment) -> impl View + use<> {
        let inner = ListStack::for_each(self.axis, self.contents).spacing(self.spacing);
        assemble(
            self.axis,
            self.shows_indicators,
            &self.offset,
            self.direction,
            AnyView::new(inner),
            env,
        )
    }
}

/// Wires the tracker between the geometry observers and the trailing spacer.
fn assemble(
    axis: Axis,
    shows_indicators: bool,
    offset: &Binding<f32>,
    direction: Option<Computed<LayoutDirection>>,
    inner: AnyView,
    env: &Environment,
) -> LengthReader {
    let direction = direction
        .or_else(|| env.get::<Computed<LayoutDirection>>())
        .unwrap_or_else(|| Computed::constant(LayoutDirection::default()));

    let mut tracker = OffsetTracker::new(axis, offset);
    tracker.set_direction(direction.get());
    let spacer_length = tracker.spacer_length().clone();
    let anchor = ScrollAnchor::natural(axis, direction.get());
    let tracker = Rc::new(RefCell::new(tracker));

    // The viewport extent arrives through its own measurement pass.
    let overall = binding(0.0_f32);
    let guards = [
        overall.watch({
            let tracker = Rc::clone(&tracker);
            move |ctx| tracker.borrow_mut().set_overall_length(ctx.into_value())
        }),
        direction.watch({
            let tracker = Rc::clone(&tracker);
            move |ctx| tracker.borrow_mut().set_direction(ctx.into_value())
        }),
    ];

    // The observer handler owns the subscriptions: they must live exactly as
    // long as the observed content subtree.
    let observed = FrameObserver::new(inner, {
        let tracker = Rc::clone(&tracker);
        move |frame| {
            let _ = &guards;
            tracker.borrow_mut().frame_changed(frame);
        }
    });

    // The spacer sits outside the observed content so the geometry events
    // never include it.
    let column = ListStack::new(axis, (observed, spacer_with(spacer_length)));

    let scroll_view = ScrollView::new(axis, column)
        .anchor(anchor)
        .shows_indicators(shows_indicators);

    LengthReader::new(scroll_view, Dimension::along(axis), &overall)
}
