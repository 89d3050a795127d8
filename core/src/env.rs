//! Values installed by the host at the edge of the view tree.
//!
//! Components in this kit take their configuration explicitly; the
//! environment exists for the handful of values only the host can know, such
//! as the platform layout direction. The backend installs them once at the
//! root, and builder arguments always win over environment lookups.

use alloc::collections::BTreeMap;
use alloc::rc::Rc;
use core::any::{Any, TypeId};
use core::fmt;

/// A type-indexed map of host-supplied values.
///
/// Each entry is keyed by its type, so a type is installed at most once.
/// Values are shared and cheap to clone out.
#[derive(Clone, Default)]
pub struct Environment {
    values: BTreeMap<TypeId, Rc<dyn Any>>,
}

impl fmt::Debug for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Environment")
            .field("values", &self.values.len())
            .finish()
    }
}

impl Environment {
    /// Creates an empty environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a clone of the installed `T`, if any.
    #[must_use]
    pub fn get<T: Clone + 'static>(&self) -> Option<T> {
        self.values
            .get(&TypeId::of::<T>())
            .and_then(|value| value.downcast_ref::<T>())
            .cloned()
    }

    /// Installs `value`, replacing any previous `T`.
    pub fn insert<T: 'static>(&mut self, value: T) {
        self.values.insert(TypeId::of::<T>(), Rc::new(value));
    }

    /// Builder form of [`insert`](Self::insert).
    #[must_use]
    pub fn with<T: 'static>(mut self, value: T) -> Self {
        self.insert(value);
        self
    }

    /// Returns `true` if a `T` is installed.
    #[must_use]
    pub fn contains<T: 'static>(&self) -> bool {
        self.values.contains_key(&TypeId::of::<T>())
    }
}
