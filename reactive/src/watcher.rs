//! Watcher registration and notification.
//!
//! Signals notify their observers through a [`Watchers`] registry. Each
//! registration hands back a [`WatcherGuard`]; dropping the guard removes the
//! watcher, so subscriptions follow ordinary ownership.

use alloc::boxed::Box;
use alloc::collections::BTreeMap;
use alloc::rc::{Rc, Weak};
use alloc::vec::Vec;
use core::cell::RefCell;
use core::fmt;

/// The value envelope delivered to a watcher on every notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Context<T> {
    value: T,
}

impl<T> Context<T> {
    /// Wraps a value for delivery to watchers.
    #[must_use]
    pub const fn new(value: T) -> Self {
        Self { value }
    }

    /// Returns a reference to the delivered value.
    pub const fn value(&self) -> &T {
        &self.value
    }

    /// Consumes the context and returns the delivered value.
    pub fn into_value(self) -> T {
        self.value
    }

    /// Transforms the delivered value, keeping the envelope.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Context<U> {
        Context::new(f(self.value))
    }
}

type WatcherFn<T> = Rc<dyn Fn(Context<T>)>;

struct Registry<T> {
    watchers: BTreeMap<u64, WatcherFn<T>>,
    next_id: u64,
}

impl<T> Registry<T> {
    const fn new() -> Self {
        Self {
            watchers: BTreeMap::new(),
            next_id: 0,
        }
    }
}

/// A set of watchers observing a single value.
pub struct Watchers<T> {
    registry: Rc<RefCell<Registry<T>>>,
}

impl<T: 'static> Default for Watchers<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for Watchers<T> {
    fn clone(&self) -> Self {
        Self {
            registry: self.registry.clone(),
        }
    }
}

impl<T> fmt::Debug for Watchers<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Watchers")
            .field("count", &self.registry.borrow().watchers.len())
            .finish()
    }
}

impl<T: 'static> Watchers<T> {
    /// Creates an empty watcher set.
    #[must_use]
    pub fn new() -> Self {
        Self {
            registry: Rc::new(RefCell::new(Registry::new())),
        }
    }

    /// Registers a watcher and returns the guard that keeps it alive.
    pub fn register(&self, watcher: impl Fn(Context<T>) + 'static) -> WatcherGuard {
        let mut registry = self.registry.borrow_mut();
        let id = registry.next_id;
        registry.next_id += 1;
        registry.watchers.insert(id, Rc::new(watcher));

        let weak: Weak<RefCell<Registry<T>>> = Rc::downgrade(&self.registry);
        WatcherGuard::new(move || {
            if let Some(registry) = weak.upgrade() {
                registry.borrow_mut().watchers.remove(&id);
            }
        })
    }

    /// Returns the number of live watchers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.registry.borrow().watchers.len()
    }

    /// Returns `true` when no watcher is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T: Clone> Watchers<T> {
    /// Delivers a value to every registered watcher.
    ///
    /// Watchers are collected before invocation so a watcher may register or
    /// drop other watchers without poisoning the registry borrow.
    pub fn notify(&self, value: &T) {
        let watchers: Vec<WatcherFn<T>> =
            self.registry.borrow().watchers.values().cloned().collect();
        for watcher in watchers {
            watcher(Context::new(value.clone()));
        }
    }
}

/// RAII guard for a watcher registration.
///
/// Dropping the guard unregisters the watcher. Hold it for as long as the
/// subscription should stay alive, typically by retaining it next to the view
/// that created it.
#[must_use = "dropping a WatcherGuard unregisters the watcher"]
pub struct WatcherGuard {
    cleanup: Option<Box<dyn FnOnce()>>,
}

impl WatcherGuard {
    /// Creates a guard that runs `cleanup` when dropped.
    pub fn new(cleanup: impl FnOnce() + 'static) -> Self {
        Self {
            cleanup: Some(Box::new(cleanup)),
        }
    }

    /// A guard that does nothing, for signals that never change.
    #[must_use]
    pub const fn empty() -> Self {
        Self { cleanup: None }
    }
}

impl fmt::Debug for WatcherGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WatcherGuard")
            .field("active", &self.cleanup.is_some())
            .finish()
    }
}

impl Drop for WatcherGuard {
    fn drop(&mut self) {
        if let Some(cleanup) = self.cleanup.take() {
            cleanup();
        }
    }
}
