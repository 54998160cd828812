// Copyright 2026 the Undersheet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Undersheet Detent: named rest heights and the drag-settlement state machine.
//!
//! A *detent* is a named, ordered height level a bottom sheet can rest at.
//! This crate models:
//!
//! - [`DetentLevel`]: the four levels `Bottom < Lower < Upper < Top`.
//! - [`Detent`]: a level paired with a [`DetentHeight`] (absolute, or a ratio
//!   of a reference maximum). Equality and ordering consider only the level,
//!   so a set lookup finds the registered instance regardless of its
//!   configured height.
//! - [`DetentSet`]: a non-empty collection of registered detents plus the
//!   current one, with neighbor queries derived purely from which levels are
//!   present.
//! - [`DetentState`]: a [`DetentSet`] plus a lock flag, implementing
//!   raise/lower stepping and [`DetentState::settle_from_drag`], the
//!   end-of-drag snapping algorithm (velocity flick override, then a
//!   nearest-detent midpoint walk).
//! - [`OrientationDetents`]: two independent [`DetentState`]s (portrait and
//!   landscape) behind an O(1) orientation flag, with optional shade-trigger
//!   levels per orientation.
//!
//! It deliberately knows nothing about views, gestures, or animation; hosts
//! feed it release velocities and live heights and read back the detent to
//! settle on.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Vec2;
//! use undersheet_detent::{Detent, DetentHeight, DetentLevel, DetentSet, DetentState};
//!
//! let set = DetentSet::new([
//!     Detent::bottom(DetentHeight::Absolute(100.0)),
//!     Detent::upper(DetentHeight::Absolute(500.0)),
//!     Detent::top(DetentHeight::Absolute(900.0)),
//! ]);
//! let mut state = DetentState::new(set);
//!
//! // A slow release at height 650 is below the Upper/Top midpoint (700),
//! // so the sheet settles on Upper.
//! let settled = state.settle_from_drag(Vec2::ZERO, 650.0, 900.0);
//! assert_eq!(settled.level(), DetentLevel::Upper);
//!
//! // A fast upward release is a flick: raise one level regardless of height.
//! let settled = state.settle_from_drag(Vec2::new(0.0, -600.0), 650.0, 900.0);
//! assert_eq!(settled.level(), DetentLevel::Top);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod detent;
mod orientation;
mod set;
mod state;

pub use detent::{Detent, DetentHeight, DetentLevel};
pub use orientation::{Orientation, OrientationDetents};
pub use set::DetentSet;
pub use state::DetentState;
