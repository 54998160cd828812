// Copyright 2026 the Undersheet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Animation requests as plain values.
//!
//! The engine never runs animations. It emits [`Transition`]s (one or two
//! [`AnimationRequest`] stages plus hide/show bookkeeping) and the host
//! plays them with whatever animation primitive it has, reporting each
//! stage's completion back to the owning container.

use smallvec::SmallVec;

/// Timing parameters for one animation stage.
///
/// The three constants carry the literal parameter sets the sheet uses; a
/// `None` damping/velocity pair means a plain ease-out with no spring.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationSpec {
    /// Duration in seconds.
    pub duration: f64,
    /// Spring damping ratio, if the stage is spring-driven.
    pub spring_damping: Option<f64>,
    /// Initial spring velocity, if the stage is spring-driven.
    pub initial_velocity: Option<f64>,
}

impl AnimationSpec {
    /// Settling onto a detent after a drag.
    pub const STRETCH: Self = Self {
        duration: 0.4,
        spring_damping: Some(0.65),
        initial_velocity: Some(1.5),
    };

    /// Returning a slid sheet to its resting margin.
    pub const APPEAR: Self = Self {
        duration: 0.45,
        spring_damping: Some(0.6),
        initial_velocity: Some(1.5),
    };

    /// Pushing the sheet fully off-screen.
    pub const DISAPPEAR: Self = Self {
        duration: 0.2,
        spring_damping: None,
        initial_velocity: None,
    };
}

/// Which layout property a stage animates, and to what value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AnimationTarget {
    /// Animate the sheet's height constraint to this value.
    Height(f64),
    /// Animate the sheet's bottom margin constraint to this value.
    MarginFromBottom(f64),
}

/// One animation stage: a target property/value and its timing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationRequest {
    /// Timing parameters.
    pub spec: AnimationSpec,
    /// What to animate.
    pub target: AnimationTarget,
}

/// What a [`Transition`] accomplishes, for the owner's event bookkeeping.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransitionKind {
    /// Move to a new height (detent settle or programmatic stretch).
    Stretch,
    /// Bring the sheet on screen / back to its resting margin.
    Appear,
    /// Push the sheet off screen and hide it.
    Disappear,
}

/// A discrete move expressed as ordered animation stages.
///
/// Stages run one at a time, each started only after the previous one's
/// completion. An appear transition unhides the view before its first stage;
/// a disappear transition hides it after its last.
#[derive(Clone, Debug, PartialEq)]
pub struct Transition {
    /// What this transition accomplishes.
    pub kind: TransitionKind,
    /// Unhide the view before running the first stage.
    pub show_before: bool,
    /// Hide the view after the last stage completes.
    pub hide_after: bool,
    /// The stages, in execution order. Never empty.
    pub stages: SmallVec<[AnimationRequest; 2]>,
}
