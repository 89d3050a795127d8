//! Shared mutable state cells.

use alloc::rc::Rc;
use core::cell::RefCell;
use core::fmt;

use crate::signal::Signal;
use crate::watcher::{Context, WatcherGuard, Watchers};

struct Shared<T> {
    value: RefCell<T>,
    watchers: Watchers<T>,
}

/// A shared mutable value with change notification.
///
/// Cloning a `Binding` produces another handle to the same cell; every handle
/// observes every write. Reads clone the value out, writes replace it
/// unconditionally and notify the registered watchers.
///
/// ```
/// use ripple_reactive::binding;
///
/// let count = binding(0);
/// let other = count.clone();
/// other.set(3);
/// assert_eq!(count.get(), 3);
/// ```
pub struct Binding<T> {
    shared: Rc<Shared<T>>,
}

impl<T> Clone for Binding<T> {
    fn clone(&self) -> Self {
        Self {
            shared: self.shared.clone(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Binding<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Binding")
            .field("value", &*self.shared.value.borrow())
            .finish()
    }
}

impl<T: Default + 'static> Default for Binding<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: 'static> Binding<T> {
    /// Creates a binding holding `value`.
    #[must_use]
    pub fn new(value: T) -> Self {
        Self {
            shared: Rc::new(Shared {
                value: RefCell::new(value),
                watchers: Watchers::new(),
            }),
        }
    }
}

impl<T: Clone + 'static> Binding<T> {
    /// Returns a clone of the current value.
    #[must_use]
    pub fn get(&self) -> T {
        self.shared.value.borrow().clone()
    }

    /// Replaces the value and notifies watchers.
    pub fn set(&self, value: T) {
        *self.shared.value.borrow_mut() = value.clone();
        self.shared.watchers.notify(&value);
    }
}

impl<T: Clone + 'static> Signal for Binding<T> {
    type Output = T;

    fn get(&self) -> T {
        Self::get(self)
    }

    fn watch(&self, watcher: impl Fn(Context<T>) + 'static) -> WatcherGuard {
        self.shared.watchers.register(watcher)
    }
}

/// Creates a [`Binding`] holding `value`.
pub fn binding<T: 'static>(value: T) -> Binding<T> {
    Binding::new(value)
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;
    use core::cell::RefCell;

    use super::*;

    #[test]
    fn set_updates_every_handle() {
        let a = binding(1);
        let b = a.clone();
        b.set(2);
        assert_eq!(a.get(), 2);
        assert_eq!(b.get(), 2);
    }

    #[test]
    fn watchers_observe_writes() {
        let value = binding(0);
        let seen = Rc::new(RefCell::new(Vec::new()));

        let _guard = value.watch({
            let seen = seen.clone();
            move |ctx| seen.borrow_mut().push(ctx.into_value())
        });

        value.set(1);
        value.set(1);
        value.set(2);
        assert_eq!(&*seen.borrow(), &[1, 1, 2]);
    }

    #[test]
    fn dropped_guard_stops_observation() {
        let value = binding(0);
        let seen = Rc::new(RefCell::new(Vec::new()));

        let guard = value.watch({
            let seen = seen.clone();
            move |ctx| seen.borrow_mut().push(ctx.into_value())
        });
        value.set(1);
        drop(guard);
        value.set(2);
        assert_eq!(&*seen.borrow(), &[1]);
    }
}
