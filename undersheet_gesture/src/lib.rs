// Copyright 2026 the Undersheet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Undersheet Gesture: arbitration between the sheet pan and nested scrolling.
//!
//! A bottom sheet owns a vertical pan gesture, but so does any scroll view
//! embedded in its content. This crate decides, per gesture phase event, who
//! consumes the drag stream:
//!
//! - Normally the sheet's own pan wins; the nested scroll view's pan is
//!   required to fail first ([`GestureRouter::container_requires_scroll_failure`]).
//! - When the sheet sits at its maximum height, *content may scroll*: the
//!   nested scroll view's native scrolling wins. The sheet takes over only if
//!   the content is already scrolled to its top edge and the user keeps
//!   dragging downward. At that instant the router enters
//!   [`RouterState::StretchedBySlideFromScroll`], pins the scroll offset to
//!   zero, suppresses native bounce, and forwards subsequent samples as if
//!   they came from the sheet itself.
//!
//! The router is a pure state machine: it consumes [`GesturePhase`] events
//! with [`DragSample`]s and emits short [`RouterEffect`] sequences for the
//! host to execute. It never errors; events outside an active stream are
//! ignored, and a sheet without nested scroll content simply never produces
//! scroll-pan events.
//!
//! ## Example
//!
//! ```rust
//! use kurbo::Vec2;
//! use undersheet_gesture::{DragSample, GesturePhase, GestureRouter, RouterEffect};
//!
//! let mut router = GestureRouter::new();
//! let sample = DragSample::new(Vec2::new(0.0, 12.0), Vec2::new(0.0, 300.0));
//!
//! router.handle_container_pan(GesturePhase::Began, DragSample::ZERO);
//! let effects = router.handle_container_pan(GesturePhase::Changed, sample);
//! assert!(matches!(effects[0], RouterEffect::Stretch(_)));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod router;
mod sample;

pub use router::{GestureRouter, RouterEffect, RouterEffects, RouterState};
pub use sample::{DragSample, GesturePhase};
