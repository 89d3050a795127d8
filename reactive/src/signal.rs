//! The [`Signal`] abstraction shared by bindings and computed values.

use crate::computed::Computed;
use crate::watcher::{Context, WatcherGuard};

/// A value that can change over time.
///
/// `get` returns the current value; `watch` registers an observer that is
/// notified with every subsequent value. The returned [`WatcherGuard`] keeps
/// the observation alive.
pub trait Signal {
    /// The value produced by this signal.
    type Output: Clone + 'static;

    /// Returns the current value.
    fn get(&self) -> Self::Output;

    /// Registers a watcher for future values.
    fn watch(&self, watcher: impl Fn(Context<Self::Output>) + 'static) -> WatcherGuard;
}

/// Extension methods available on every [`Signal`].
pub trait SignalExt: Signal {
    /// Derives a new reactive value by applying `f` to every value of `self`.
    fn map<U, F>(&self, f: F) -> Computed<U>
    where
        Self: Clone + 'static,
        U: Clone + 'static,
        F: Fn(Self::Output) -> U + Clone + 'static,
    {
        Computed::derived(self.clone(), f)
    }

    /// Erases this signal into a [`Computed`].
    fn computed(&self) -> Computed<Self::Output>
    where
        Self: Clone + 'static,
    {
        Computed::new(self.clone())
    }
}

impl<S: Signal> SignalExt for S {}

/// Conversion accepted by builder APIs that take either a constant or a
/// reactive value.
pub trait IntoComputed<T: Clone + 'static> {
    /// Converts `self` into a [`Computed`].
    fn into_computed(self) -> Computed<T>;
}

impl<T: Clone + 'static> IntoComputed<T> for T {
    fn into_computed(self) -> Computed<T> {
        Computed::constant(self)
    }
}

impl<T: Clone + 'static> IntoComputed<T> for crate::Binding<T> {
    fn into_computed(self) -> Computed<T> {
        Computed::new(self)
    }
}

impl<T: Clone + 'static> IntoComputed<T> for Computed<T> {
    fn into_computed(self) -> Computed<T> {
        self
    }
}
