// Copyright 2026 the Undersheet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Undersheet Container: the host-facing sheet, fully wired.
//!
//! [`SheetContainer`] composes the detent state machine, the stretch engine,
//! the gesture router, and the shade model into one synchronous surface. The
//! host forwards raw pan phase events and animation completions; the
//! container answers each call with a [`SheetResponse`]: an ordered batch of
//! [`HostCommand`]s to apply and [`SheetEvent`]s to observe. Nothing here
//! draws, animates, or spawns; all timing and rendering stay host-side.
//!
//! ```
//! use kurbo::Vec2;
//! use undersheet_container::{
//!     Detent, DetentHeight, DetentLevel, DetentSet, DragSample, GesturePhase, Orientation,
//!     ShadeTone, SheetConfig, SheetContainer, SheetEvent,
//! };
//!
//! let detents = DetentSet::new([
//!     Detent::bottom(DetentHeight::Absolute(100.0)),
//!     Detent::upper(DetentHeight::Absolute(500.0)),
//!     Detent::top(DetentHeight::Absolute(900.0)),
//! ]);
//! let mut sheet = SheetContainer::new(SheetConfig {
//!     portrait_detents: detents.clone(),
//!     landscape_detents: detents,
//!     portrait_shade_trigger: None,
//!     landscape_shade_trigger: None,
//!     shade_tone: ShadeTone::Normal,
//!     allow_slide_down: true,
//!     orientation: Orientation::Portrait,
//! });
//! sheet.set_layout(900.0, 34.0);
//!
//! // An upward flick from the bottom detent settles one detent higher.
//! sheet.handle_container_pan(GesturePhase::Began, DragSample::ZERO);
//! sheet.handle_container_pan(
//!     GesturePhase::Changed,
//!     DragSample::new(Vec2::new(0.0, -20.0), Vec2::new(0.0, -700.0)),
//! );
//! let response = sheet.handle_container_pan(
//!     GesturePhase::Ended,
//!     DragSample::new(Vec2::ZERO, Vec2::new(0.0, -700.0)),
//! );
//! assert!(
//!     response
//!         .events
//!         .contains(&SheetEvent::DidChangeDetentAnimation(DetentLevel::Upper))
//! );
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod command;
mod container;

pub use command::{HostCommand, SheetEvent, SheetResponse};
pub use container::{SheetConfig, SheetContainer};

// Everything a host needs to configure and drive a sheet, in one place.
pub use undersheet_detent::{
    Detent, DetentHeight, DetentLevel, DetentSet, Orientation, OrientationDetents,
};
pub use undersheet_gesture::{DragSample, GesturePhase};
pub use undersheet_shade::ShadeTone;
pub use undersheet_stretch::{AnimationRequest, AnimationSpec, AnimationTarget};
