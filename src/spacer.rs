//! Flexible gaps between stacked views.

use ripple_core::layout::StretchAxis;
use ripple_core::raw_view;
use ripple_reactive::{Computed, IntoComputed};

/// A flexible space that expands along its parent stack's main axis.
///
/// Use it to push siblings apart, or pin content to one edge of a stack:
///
/// ```
/// use ripple::{spacer, stack::ListStack, Axis};
///
/// let _pinned = ListStack::new(Axis::Horizontal, ((), spacer()));
/// ```
///
/// The minimum length may be reactive; the scroll components drive a trailing
/// spacer from the tracked spacer length so undersized content stays pinned
/// to its natural edge.
#[derive(Debug, Clone)]
pub struct Spacer {
    min_length: Computed<f32>,
}

impl Spacer {
    /// Creates a spacer that never shrinks below `min_length`.
    pub fn new(min_length: impl IntoComputed<f32>) -> Self {
        Self {
            min_length: min_length.into_computed(),
        }
    }

    /// The current minimum length, in points.
    #[must_use]
    pub fn min_length(&self) -> f32 {
        self.min_length.get()
    }

    /// The reactive minimum length.
    #[must_use]
    pub fn min_length_signal(&self) -> &Computed<f32> {
        &self.min_length
    }
}

raw_view!(Spacer, StretchAxis::MainAxis);

/// Creates a flexible spacer with zero minimum length.
#[must_use]
pub fn spacer() -> Spacer {
    Spacer::new(0.0)
}

/// Creates a spacer that never shrinks below `min_length` points.
#[must_use]
pub fn spacer_min(min_length: f32) -> Spacer {
    Spacer::new(min_length)
}

/// Creates a spacer whose minimum length tracks a reactive value.
pub fn spacer_with(min_length: impl IntoComputed<f32>) -> Spacer {
    Spacer::new(min_length)
}
