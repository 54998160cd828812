// Copyright 2026 the Undersheet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Undersheet Stretch: the drag-to-height engine.
//!
//! [`StretchEngine`] turns a stream of [`DragSample`]s into height and
//! bottom-margin changes for a sheet panel:
//!
//! - **Height mode** (the usual case): each sample moves the height by
//!   `-translation.y` scaled by a per-sample damping factor. The factor
//!   drops from [`StretchSpeed::Default`] to [`StretchSpeed::Slow`] when the
//!   drag pushes past the configured maximum or minimum, producing a
//!   rubber-band feel at the bounds without hard clamping.
//! - **Slide mode**: once the sheet is at its minimum height and the drag
//!   keeps moving down, the gesture stops resizing and starts sliding the
//!   whole sheet off the bottom edge by moving its margin. The mode is
//!   sticky for the remainder of the gesture.
//!
//! On release, slide mode resolves to an appear-or-disappear [`Transition`]
//! depending on how far the sheet was pulled; height mode reports a
//! [`FinishOutcome::Settle`] for the owner to resolve against its detent
//! state machine.
//!
//! Discrete moves ([`StretchEngine::stretch_to`], [`StretchEngine::appear`],
//! [`StretchEngine::disappear`]) are expressed as [`Transition`] value types
//! carrying literal [`AnimationSpec`] parameter sets; the host runs the
//! animations and reports completion back to the owner. The engine itself
//! never animates and never blocks.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod engine;
mod transition;

pub use engine::{FinishOutcome, StretchConfig, StretchEngine, StretchSpeed, StretchUpdate};
pub use transition::{AnimationRequest, AnimationSpec, AnimationTarget, Transition, TransitionKind};

pub use undersheet_gesture::DragSample;
