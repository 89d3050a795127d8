//! # Ripple Reactive
//!
//! Reactive primitives for the Ripple component kit: shared mutable
//! [`Binding`]s, read-only [`Computed`] values, the [`Signal`] abstraction
//! that unifies them, and RAII watcher guards.
//!
//! The data-flow model is deliberately small: values are cloned out of cells,
//! writes notify watchers synchronously, and a subscription lives exactly as
//! long as its [`WatcherGuard`](watcher::WatcherGuard).
//!
//! ```
//! use ripple_reactive::{binding, SignalExt};
//!
//! let offset = binding(0.0_f32);
//! let label = offset.map(|v| if v < 0.0 { "scrolled" } else { "at rest" });
//!
//! offset.set(-42.0);
//! assert_eq!(label.get(), "scrolled");
//! ```

#![no_std]

extern crate alloc;

mod binding;
mod computed;
mod signal;
pub mod watcher;

pub use binding::{binding, Binding};
pub use computed::Computed;
pub use signal::{IntoComputed, Signal, SignalExt};
pub use watcher::{Context, WatcherGuard};
