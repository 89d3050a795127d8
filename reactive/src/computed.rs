//! Read-only reactive values.

use alloc::boxed::Box;
use alloc::rc::Rc;
use core::fmt;

use crate::signal::Signal;
use crate::watcher::{Context, WatcherGuard};

type Getter<T> = Rc<dyn Fn() -> T>;
type Watch<T> = Rc<dyn Fn(Box<dyn Fn(Context<T>)>) -> WatcherGuard>;

/// A type-erased, read-only reactive value.
///
/// A `Computed` is either a constant or a live derivation of another signal.
/// It is the currency of configuration APIs: components store a
/// `Computed<T>` and stay agnostic about whether the caller passed a plain
/// value, a [`Binding`](crate::Binding), or another derivation.
pub struct Computed<T> {
    get: Getter<T>,
    watch: Watch<T>,
}

impl<T> Clone for Computed<T> {
    fn clone(&self) -> Self {
        Self {
            get: self.get.clone(),
            watch: self.watch.clone(),
        }
    }
}

impl<T: fmt::Debug + Clone + 'static> fmt::Debug for Computed<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Computed").field("value", &self.get()).finish()
    }
}

impl<T: Clone + 'static> Computed<T> {
    /// Wraps a value that never changes.
    ///
    /// Watchers registered on a constant are never notified.
    pub fn constant(value: T) -> Self {
        Self {
            get: Rc::new(move || value.clone()),
            watch: Rc::new(|_| WatcherGuard::empty()),
        }
    }

    /// Erases any signal into a `Computed`.
    pub fn new<S>(source: S) -> Self
    where
        S: Signal<Output = T> + Clone + 'static,
    {
        let getter = source.clone();
        Self {
            get: Rc::new(move || getter.get()),
            watch: Rc::new(move |watcher| source.watch(move |ctx| watcher(ctx))),
        }
    }

    /// Derives a value by mapping another signal.
    pub fn derived<S, F>(source: S, f: F) -> Self
    where
        S: Signal + Clone + 'static,
        F: Fn(S::Output) -> T + Clone + 'static,
    {
        let getter = source.clone();
        let get_f = f.clone();
        Self {
            get: Rc::new(move || get_f(getter.get())),
            watch: Rc::new(move |watcher| {
                let f = f.clone();
                source.watch(move |ctx| watcher(ctx.map(&f)))
            }),
        }
    }
}

impl<T: Clone + 'static> Signal for Computed<T> {
    type Output = T;

    fn get(&self) -> T {
        (self.get)()
    }

    fn watch(&self, watcher: impl Fn(Context<T>) + 'static) -> WatcherGuard {
        (self.watch)(Box::new(watcher))
    }
}

impl<T: Clone + 'static> Computed<T> {
    /// Returns the current value.
    #[must_use]
    pub fn get(&self) -> T {
        (self.get)()
    }

    /// Registers a watcher for future values.
    pub fn watch(&self, watcher: impl Fn(Context<T>) + 'static) -> WatcherGuard {
        (self.watch)(Box::new(watcher))
    }
}
