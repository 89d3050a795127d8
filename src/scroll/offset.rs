//! Derives a scalar scroll offset from content-frame geometry events.

use ripple_core::layout::{Axis, LayoutDirection, Rect};
use ripple_reactive::{binding, Binding};
use tracing::trace;

/// Turns raw content-frame geometry into a published scroll offset.
///
/// The host layout system reports the content frame (in the scroll view's
/// coordinate space) on every geometry pass, the scroll viewport's extent
/// through a separate measurement event, and layout-direction changes as they
/// happen. The tracker derives two values from that stream:
///
/// - the **offset**, written into a caller-owned [`Binding`] — written only,
///   never read back for decisions;
/// - the **spacer length**, `max(0, overall − content)`, the trailing gap
///   that keeps undersized content pinned to its natural leading edge.
///
/// In the standard orientation (vertical, or horizontal left-to-right) the
/// offset is the negated minimum coordinate of the content frame along the
/// axis, so it is `0` at rest and grows negative as the user scrolls forward.
/// Under horizontal right-to-left layout the zero position anchors at the
/// trailing (right) edge instead and the offset is `frame.max_x − overall`.
///
/// Content-size changes and user scrolls arrive through the same geometry
/// callback. In the reversed orientation the two must be told apart, or an
/// insertion would read as a scroll to an arbitrary offset: a changed,
/// positive spacer length is taken to mean the content size changed and the
/// offset snaps to `0`. A user scroll that lands in the same geometry pass as
/// a spacer-length change is indistinguishable from that and snaps too; this
/// is a known approximation.
///
/// Every input is a well-formed scalar; there are no error states. An
/// `overall_length` of zero (before the first viewport measurement) simply
/// yields a zero spacer.
#[derive(Debug)]
pub struct OffsetTracker {
    axis: Axis,
    direction: LayoutDirection,
    overall_length: f32,
    spacer_length: Binding<f32>,
    offset: Binding<f32>,
}

impl OffsetTracker {
    /// Creates a tracker for `axis` publishing into the caller-owned
    /// `offset` cell.
    ///
    /// The axis is fixed for the tracker's lifetime; the layout direction
    /// starts at its default and follows [`set_direction`](Self::set_direction)
    /// events.
    #[must_use]
    pub fn new(axis: Axis, offset: &Binding<f32>) -> Self {
        Self {
            axis,
            direction: LayoutDirection::default(),
            overall_length: 0.0,
            spacer_length: binding(0.0),
            offset: offset.clone(),
        }
    }

    /// The scroll axis.
    #[must_use]
    pub const fn axis(&self) -> Axis {
        self.axis
    }

    /// The layout direction currently in effect.
    #[must_use]
    pub const fn direction(&self) -> LayoutDirection {
        self.direction
    }

    /// The scrollable viewport extent last measured along the axis.
    #[must_use]
    pub const fn overall_length(&self) -> f32 {
        self.overall_length
    }

    /// The trailing spacer length, as a reactive cell the trailing spacer
    /// can consume.
    #[must_use]
    pub const fn spacer_length(&self) -> &Binding<f32> {
        &self.spacer_length
    }

    /// Records a layout-direction change.
    ///
    /// Takes effect on the next geometry event; no stale sign state is kept.
    pub fn set_direction(&mut self, direction: LayoutDirection) {
        self.direction = direction;
    }

    /// Records the viewport extent from the separate measurement pass.
    pub fn set_overall_length(&mut self, length: f32) {
        self.overall_length = length;
    }

    /// Handles one content-frame geometry event.
    pub fn frame_changed(&mut self, frame: Rect) {
        let content_length = self.axis.length_of(frame.size());
        let new_spacer_length = (self.overall_length - content_length).max(0.0);
        let previous_spacer_length = self.spacer_length.get();

        if self.axis.is_horizontal() && self.direction.is_right_to_left() {
            // Scrolling is reversed and the zero position is the right edge.
            if new_spacer_length != previous_spacer_length && new_spacer_length > 0.0 {
                // The spacer changed, so the geometry event came from a
                // content-size change, not a user scroll: pin to the edge.
                self.offset.set(0.0);
            } else {
                self.offset.set(frame.max_x() - self.overall_length);
            }
        } else {
            self.offset.set(-self.axis.min_of(&frame));
        }

        trace!(
            target: "ripple::scroll",
            offset = self.offset.get(),
            spacer = new_spacer_length,
            "content frame changed"
        );
        self.spacer_length.set(new_spacer_length);
    }
}

#[cfg(test)]
mod tests {
    use ripple_core::layout::{Point, Size};

    use super::*;

    fn frame(min_x: f32, min_y: f32, width: f32, height: f32) -> Rect {
        Rect::new(Point::new(min_x, min_y), Size::new(width, height))
    }

    #[test]
    fn spacer_is_overall_minus_content_clamped_to_zero() {
        let offset = binding(0.0);
        let mut tracker = OffsetTracker::new(Axis::Vertical, &offset);
        tracker.set_overall_length(500.0);

        tracker.frame_changed(frame(0.0, 0.0, 40.0, 300.0));
        assert_eq!(tracker.spacer_length().get(), 200.0);

        tracker.frame_changed(frame(0.0, 0.0, 40.0, 800.0));
        assert_eq!(tracker.spacer_length().get(), 0.0);
    }

    #[test]
    fn vertical_offset_is_negated_min_y() {
        // overall 500, frame {min_y: -120, height: 800}.
        let offset = binding(0.0);
        let mut tracker = OffsetTracker::new(Axis::Vertical, &offset);
        tracker.set_overall_length(500.0);

        tracker.frame_changed(frame(0.0, -120.0, 40.0, 800.0));
        assert_eq!(tracker.spacer_length().get(), 0.0);
        assert_eq!(offset.get(), 120.0);
    }

    #[test]
    fn horizontal_ltr_offset_is_negated_min_x() {
        let offset = binding(0.0);
        let mut tracker = OffsetTracker::new(Axis::Horizontal, &offset);
        tracker.set_overall_length(300.0);

        tracker.frame_changed(frame(75.5, 0.0, 600.0, 40.0));
        assert_eq!(offset.get(), -75.5);

        // Forward scrolling keeps the offset non-positive.
        tracker.frame_changed(frame(0.0, 0.0, 600.0, 40.0));
        assert_eq!(offset.get(), 0.0);
        tracker.frame_changed(frame(150.0, 0.0, 600.0, 40.0));
        assert!(offset.get() <= 0.0);
    }

    #[test]
    fn reversed_orientation_snaps_on_content_size_change() {
        // overall 300, previous spacer 0, frame {max_x: 250, width: 280}:
        // the spacer becomes 20, which differs and is positive, so the
        // offset snaps to zero regardless of max_x.
        let offset = binding(-1.0);
        let mut tracker = OffsetTracker::new(Axis::Horizontal, &offset);
        tracker.set_direction(LayoutDirection::RightToLeft);
        tracker.set_overall_length(300.0);

        tracker.frame_changed(frame(-30.0, 0.0, 280.0, 40.0));
        assert_eq!(tracker.spacer_length().get(), 20.0);
        assert_eq!(offset.get(), 0.0);
    }

    #[test]
    fn reversed_orientation_reports_trailing_relative_offset() {
        // Same geometry again: the spacer is unchanged at 20, so the offset
        // is max_x − overall = 250 − 300.
        let offset = binding(0.0);
        let mut tracker = OffsetTracker::new(Axis::Horizontal, &offset);
        tracker.set_direction(LayoutDirection::RightToLeft);
        tracker.set_overall_length(300.0);

        tracker.frame_changed(frame(-30.0, 0.0, 280.0, 40.0));
        tracker.frame_changed(frame(-30.0, 0.0, 280.0, 40.0));
        assert_eq!(offset.get(), -50.0);

        // And it stays put on further identical events.
        tracker.frame_changed(frame(-30.0, 0.0, 280.0, 40.0));
        assert_eq!(offset.get(), -50.0);
    }

    #[test]
    fn reversed_orientation_with_filled_viewport_never_snaps() {
        // Content larger than the viewport keeps the spacer at zero, so
        // plain scrolling reports trailing-relative offsets.
        let offset = binding(0.0);
        let mut tracker = OffsetTracker::new(Axis::Horizontal, &offset);
        tracker.set_direction(LayoutDirection::RightToLeft);
        tracker.set_overall_length(300.0);

        tracker.frame_changed(frame(0.0, 0.0, 600.0, 40.0));
        assert_eq!(offset.get(), 300.0);
        tracker.frame_changed(frame(-300.0, 0.0, 600.0, 40.0));
        assert_eq!(offset.get(), 0.0);
    }

    #[test]
    fn standard_orientation_is_idempotent() {
        let offset = binding(0.0);
        let mut tracker = OffsetTracker::new(Axis::Vertical, &offset);
        tracker.set_overall_length(500.0);

        tracker.frame_changed(frame(0.0, -64.0, 40.0, 800.0));
        let first = offset.get();
        tracker.frame_changed(frame(0.0, -64.0, 40.0, 800.0));
        assert_eq!(offset.get(), first);
    }

    #[test]
    fn zero_overall_length_is_valid_first_pass() {
        let offset = binding(0.0);
        let mut tracker = OffsetTracker::new(Axis::Vertical, &offset);

        tracker.frame_changed(frame(0.0, 0.0, 40.0, 120.0));
        assert_eq!(tracker.spacer_length().get(), 0.0);
        assert_eq!(offset.get(), 0.0);
    }

    #[test]
    fn direction_change_takes_effect_without_stale_state() {
        let offset = binding(0.0);
        let mut tracker = OffsetTracker::new(Axis::Horizontal, &offset);
        tracker.set_overall_length(300.0);

        tracker.frame_changed(frame(-50.0, 0.0, 600.0, 40.0));
        assert_eq!(offset.get(), 50.0);

        tracker.set_direction(LayoutDirection::RightToLeft);
        tracker.frame_changed(frame(-50.0, 0.0, 600.0, 40.0));
        assert_eq!(offset.get(), 250.0); // max_x 550 − overall 300

        tracker.set_direction(LayoutDirection::LeftToRight);
        tracker.frame_changed(frame(-50.0, 0.0, 600.0, 40.0));
        assert_eq!(offset.get(), 50.0);
    }

    #[test]
    fn vertical_axis_ignores_direction() {
        let offset = binding(0.0);
        let mut tracker = OffsetTracker::new(Axis::Vertical, &offset);
        tracker.set_direction(LayoutDirection::RightToLeft);
        tracker.set_overall_length(500.0);

        tracker.frame_changed(frame(0.0, -10.0, 40.0, 800.0));
        assert_eq!(offset.get(), 10.0);
    }
}
