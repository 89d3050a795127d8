//! # Ripple Core
//!
//! The substrate of the Ripple component kit: the [`View`] protocol and its
//! type-erased form [`AnyView`], raw views handled by a rendering backend
//! ([`Native`], [`NativeView`], [`raw_view!`]), the host [`Environment`],
//! stable identity for collection elements ([`id`]), reconstructable view
//! collections ([`views`]), and the geometry/layout protocol ([`layout`]).
//!
//! No renderer lives here. A backend walks resolved view trees, measures and
//! places children through [`layout::Layout`]/[`layout::SubView`], and drives
//! the observation components with geometry events.

#![no_std]

extern crate alloc;

#[macro_use]
mod macros;

mod color;
pub mod env;
pub mod id;
pub mod layout;
mod view;
pub mod views;

pub use color::Color;
pub use env::Environment;
pub use view::{AnyView, Native, NativeView, TupleViews, View};
