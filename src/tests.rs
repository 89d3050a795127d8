//! Component resolution and wiring tests.
//!
//! These drive view bodies the way a backend would: resolve down to raw
//! views, decompose their configurations, and feed geometry events through
//! the observation probes.

use ripple_core::layout::{
    Axis, LayoutDirection, Point, ProposalSize, Rect, Size, StretchAxis, SubView,
};
use ripple_core::views::{enumerated, ForEach, Views};
use ripple_core::{AnyView, Environment};
use ripple_reactive::{binding, Binding, Computed};

use crate::collection::{
    AdaptiveCollection, CollectionContext, CollectionItem, CollectionStyle, SizeClass,
};
use crate::container::{FixedContainer, LazyContainer};
use crate::fit::FitStack;
use crate::observe::{Dimension, FrameObserver, LengthReader};
use crate::scroll::{ObservingScrollView, ScrollAnchor, ScrollView};
use crate::spacer::Spacer;
use crate::stack::{Lazy, ListStack};
use crate::view_ext::ViewExt;

struct FixedSizeView {
    size: Size,
}

impl SubView for FixedSizeView {
    fn size_that_fits(&self, _proposal: ProposalSize) -> Size {
        self.size
    }

    fn stretch_axis(&self) -> StretchAxis {
        StretchAxis::None
    }
}

fn frame(min_x: f32, min_y: f32, width: f32, height: f32) -> Rect {
    Rect::new(Point::new(min_x, min_y), Size::new(width, height))
}

/// Resolves an observing scroll view the way a backend would, returning the
/// reporting probes and the trailing spacer.
fn decompose_observing(
    view: AnyView,
    env: &Environment,
) -> (LengthReader, FrameObserver, Spacer, Axis, ScrollAnchor) {
    let mut reader: LengthReader = view
        .resolve(env)
        .downcast()
        .expect("observing scroll view resolves to a length reader");

    let scroll: ScrollView = reader
        .take_content()
        .downcast()
        .expect("the reader wraps the scroll view");
    let anchor = scroll.resting_anchor();
    let (axis, content) = scroll.into_inner();

    let container: FixedContainer = content
        .resolve(env)
        .downcast()
        .expect("the scroll content is a fixed stack");
    let (_, children) = container.into_inner();
    let mut children = children.into_iter();

    let observer: FrameObserver = children
        .next()
        .expect("observed content")
        .downcast()
        .expect("first child is the frame observer");
    let spacer: Spacer = children
        .next()
        .expect("trailing spacer")
        .downcast()
        .expect("second child is the spacer");

    (reader, observer, spacer, axis, anchor)
}

#[test]
fn observing_scroll_view_publishes_offset_end_to_end() {
    let env = Environment::new();
    let offset = binding(0.0_f32);
    let view = ObservingScrollView::new(Axis::Vertical, &offset, ((), ())).spacing(2.0);

    let (reader, observer, spacer, axis, anchor) =
        decompose_observing(AnyView::new(view), &env);
    assert_eq!(axis, Axis::Vertical);
    assert_eq!(anchor, ScrollAnchor::Top);
    assert_eq!(reader.dimension(), Dimension::Height);

    // Viewport measured at 500pt, content 800pt tall scrolled 120pt down.
    reader.report(500.0);
    observer.observe(frame(0.0, -120.0, 40.0, 800.0));
    assert_eq!(offset.get(), 120.0);
    assert_eq!(spacer.min_length(), 0.0);

    // Content shrinks below the viewport: the trailing spacer fills the rest.
    observer.observe(frame(0.0, 0.0, 40.0, 300.0));
    assert_eq!(offset.get(), 0.0);
    assert_eq!(spacer.min_length(), 200.0);
}

#[test]
fn observing_scroll_view_reversed_orientation_snaps_then_tracks() {
    let env = Environment::new();
    let offset = binding(0.0_f32);
    let view = ObservingScrollView::new(Axis::Horizontal, &offset, ((),))
        .direction(LayoutDirection::RightToLeft);

    let (reader, observer, spacer, _, anchor) = decompose_observing(AnyView::new(view), &env);
    assert_eq!(anchor, ScrollAnchor::Trailing);
    assert_eq!(reader.dimension(), Dimension::Width);

    reader.report(300.0);

    // Content grows to 280pt: a size change, so the offset pins to the edge.
    observer.observe(frame(-30.0, 0.0, 280.0, 40.0));
    assert_eq!(offset.get(), 0.0);
    assert_eq!(spacer.min_length(), 20.0);

    // The same geometry again is a plain scroll report.
    observer.observe(frame(-30.0, 0.0, 280.0, 40.0));
    assert_eq!(offset.get(), -50.0);
}

#[test]
fn host_installed_direction_reaches_the_tracker() {
    let direction = binding(LayoutDirection::LeftToRight);
    let env = Environment::new().with(Computed::new(direction.clone()));

    let offset = binding(0.0_f32);
    let view = ObservingScrollView::new(Axis::Horizontal, &offset, ((),));
    let (reader, observer, _, _, anchor) = decompose_observing(AnyView::new(view), &env);
    assert_eq!(anchor, ScrollAnchor::Leading);

    reader.report(300.0);
    observer.observe(frame(-50.0, 0.0, 600.0, 40.0));
    assert_eq!(offset.get(), 50.0);

    // Locale switch: subsequent geometry uses the reversed convention.
    direction.set(LayoutDirection::RightToLeft);
    observer.observe(frame(-50.0, 0.0, 600.0, 40.0));
    assert_eq!(offset.get(), 250.0);
}

#[test]
fn lazy_observing_scroll_view_reconstructs_children() {
    let env = Environment::new();
    let offset = binding(0.0_f32);
    let view = ObservingScrollView::for_each(
        Axis::Vertical,
        &offset,
        ForEach::new(vec![1_u32, 2, 3], |_| ()),
    );

    let mut reader: LengthReader = AnyView::new(view).resolve(&env).downcast().unwrap();
    let scroll: ScrollView = reader.take_content().downcast().unwrap();
    let (_, content) = scroll.into_inner();
    let container: FixedContainer = content.resolve(&env).downcast().unwrap();
    let (_, children) = container.into_inner();

    let mut observer: FrameObserver = children.into_iter().next().unwrap().downcast().unwrap();
    let inner: LazyContainer = observer
        .take_content()
        .resolve(&env)
        .downcast()
        .expect("lazy contents resolve to a lazy container");
    assert_eq!(inner.contents().len(), 3);
    assert!(inner.contents().get_view(2).is_some());
}

#[test]
fn adaptive_collection_resolves_to_an_anchored_scroll_view() {
    let env = Environment::new();

    let grid = CollectionContext::from_size_classes(
        SizeClass::Regular,
        SizeClass::Regular,
        LayoutDirection::LeftToRight,
    );
    let view = AdaptiveCollection::new(grid, 120.0, ForEach::new(vec![1_u32, 2], |_| ()));
    let resolved = AnyView::new(view).resolve(&env);
    let scroll: &ScrollView = resolved.downcast_ref().expect("scroll viewport");
    assert_eq!(scroll.axis(), Axis::Vertical);
    assert_eq!(scroll.resting_anchor(), ScrollAnchor::Top);

    let rail = CollectionContext::from_size_classes(
        SizeClass::Regular,
        SizeClass::Compact,
        LayoutDirection::RightToLeft,
    );
    let view = AdaptiveCollection::new(rail, 120.0, ForEach::new(vec![1_u32, 2], |_| ()));
    let resolved = AnyView::new(view).resolve(&env);
    let scroll: &ScrollView = resolved.downcast_ref().expect("scroll viewport");
    assert_eq!(scroll.axis(), Axis::Horizontal);
    assert_eq!(scroll.resting_anchor(), ScrollAnchor::Trailing);
}

#[test]
fn adaptive_collection_list_is_lazy() {
    let env = Environment::new();
    let context = CollectionContext::new(
        Axis::Vertical,
        LayoutDirection::LeftToRight,
        CollectionStyle::List,
    );
    let items = enumerated(["a", "b", "c"], |_, _| ());
    let view = AdaptiveCollection::new(context, 120.0, items);

    let scroll: ScrollView = AnyView::new(view).resolve(&env).downcast().unwrap();
    let (_, content) = scroll.into_inner();
    assert!(content.is::<ListStack<Lazy>>());

    let container: LazyContainer = content.resolve(&env).downcast().unwrap();
    assert_eq!(container.contents().len(), 3);
}

#[test]
fn collection_item_list_style_offers_row_and_column() {
    let env = Environment::new();
    let item = CollectionItem::new(CollectionStyle::List, (), ()).spacing(4.0);

    let fit: FitStack = AnyView::new(item).resolve(&env).downcast().unwrap();
    let container: FixedContainer = AnyView::new(fit).resolve(&env).downcast().unwrap();
    let (_, alternatives) = container.into_inner();
    assert_eq!(alternatives.len(), 2);
}

#[test]
fn collection_item_grid_style_is_a_leading_column() {
    let env = Environment::new();
    let item = CollectionItem::new(CollectionStyle::Grid, (), ());

    let resolved = AnyView::new(item).resolve(&env);
    assert!(resolved.is::<ListStack<(((), ()),)>>());

    let container: FixedContainer = resolved.resolve(&env).downcast().unwrap();
    assert_eq!(container.children().len(), 2);
}

#[test]
fn thumbnail_modifier_is_fixed_in_lists_and_aspect_fit_in_grids() {
    let env = Environment::new();

    // List style: 64pt wide at 2:1 is fixed at 64 × 32.
    let fixed = ().collection_thumbnail(CollectionStyle::List, 64.0, 2.0);
    let container: FixedContainer = AnyView::new(fixed).resolve(&env).downcast().unwrap();
    let child = FixedSizeView {
        size: Size::new(10.0, 10.0),
    };
    let children: Vec<&dyn SubView> = vec![&child];
    assert_eq!(
        container
            .layout()
            .size_that_fits(ProposalSize::UNSPECIFIED, &children),
        Size::new(64.0, 32.0)
    );

    // Grid style: the cell proposes the width, the ratio fixes the height.
    let fitted = ().collection_thumbnail(CollectionStyle::Grid, 64.0, 2.0);
    let container: FixedContainer = AnyView::new(fitted).resolve(&env).downcast().unwrap();
    let children: Vec<&dyn SubView> = vec![&child];
    assert_eq!(
        container
            .layout()
            .size_that_fits(ProposalSize::new(Some(100.0), None), &children),
        Size::new(100.0, 50.0)
    );
}

#[test]
fn length_reader_modifier_wraps_any_view() {
    let env = Environment::new();
    let height: Binding<f32> = binding(0.0);
    let reader = ().height_reader(&height);

    let resolved = AnyView::new(reader).resolve(&env);
    let native: &ripple_core::Native<LengthReader> =
        resolved.downcast_ref().expect("raw length reader");
    native.0.report(44.0);
    assert_eq!(height.get(), 44.0);
}

#[test]
fn border_modifier_carries_edges_through_resolution() {
    use crate::border::{EdgeBorder, EdgeSet};
    use ripple_core::Color;

    let env = Environment::new();
    let bordered = ().border(1.5, EdgeSet::TOP | EdgeSet::BOTTOM, Color::GREEN);

    let resolved = AnyView::new(bordered).resolve(&env);
    let native: &ripple_core::Native<EdgeBorder> = resolved.downcast_ref().expect("raw border");
    assert_eq!(native.0.edges(), EdgeSet::VERTICAL);
    assert_eq!(
        native.0.rects(&frame(0.0, 0.0, 100.0, 40.0)).len(),
        2
    );
}
