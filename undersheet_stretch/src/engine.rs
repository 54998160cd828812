// Copyright 2026 the Undersheet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The stretch engine: per-sample height/margin mutation and release outcomes.

use smallvec::smallvec;

use crate::transition::{
    AnimationRequest, AnimationSpec, AnimationTarget, Transition, TransitionKind,
};
use undersheet_gesture::DragSample;

/// Extra distance past the sheet's height when pushing it off-screen, so the
/// disappear animation clears rounded corners and shadows.
const DISAPPEAR_OVERSHOOT: f64 = 50.0;

/// Fraction of the minimum height that must remain on screen after a slide
/// for the release to return to the appeared state rather than dismiss.
const SLIDE_DISMISS_RATIO: f64 = 0.6;

/// Per-sample damping applied to a drag translation.
///
/// These are linear multipliers re-applied on every sample, not a one-shot
/// interpolation; the rubber-band feel at the bounds comes from the factor
/// dropping while the drag keeps pushing past them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StretchSpeed {
    /// Free movement.
    Default,
    /// Heavily damped movement near or past a bound.
    Slow,
}

impl StretchSpeed {
    /// The translation multiplier for this speed.
    #[must_use]
    pub const fn factor(self) -> f64 {
        match self {
            Self::Default => 0.8,
            Self::Slow => 0.05,
        }
    }
}

/// Layout snapshot the engine stretches within.
///
/// Recomputed by the owner whenever detents, orientation, or the reference
/// screen height change. The engine assumes
/// `minimum_height <= initial_height <= maximum_height`; this is the
/// caller's responsibility and is not enforced here.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StretchConfig {
    /// Height the sheet rests at when (re)configured.
    pub initial_height: f64,
    /// Height of the bottommost detent.
    pub minimum_height: f64,
    /// Height of the topmost detent.
    pub maximum_height: f64,
    /// Resting bottom margin.
    pub initial_margin_from_bottom: f64,
}

/// The engine's outputs after absorbing one drag sample.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StretchUpdate {
    /// Sheet height after this sample.
    pub height: f64,
    /// Bottom margin after this sample.
    pub margin_from_bottom: f64,
    /// True when the sample was consumed in slide mode (margin moved, height
    /// untouched).
    pub sliding: bool,
}

/// What a finished drag resolves to.
#[derive(Clone, Debug, PartialEq)]
pub enum FinishOutcome {
    /// A height-mode drag ended; the owner picks a detent from the release
    /// velocity and this height, then issues a stretch transition to it.
    Settle {
        /// The release sample.
        sample: DragSample,
        /// Sheet height at release.
        height: f64,
    },
    /// A slide-mode drag ended; the engine already chose between appearing
    /// and disappearing.
    Transition(Transition),
}

/// Converts drag samples into height/margin changes and release transitions.
///
/// The engine owns the numeric `height` and `margin_from_bottom` the host
/// mirrors onto its layout constraints. All mutation is synchronous; discrete
/// moves come back as [`Transition`] values for the host to animate.
#[derive(Clone, Debug)]
pub struct StretchEngine {
    config: StretchConfig,
    height: f64,
    margin_from_bottom: f64,
    hidden: bool,
    /// Sticky per-gesture latch: once a drag enters slide mode it stays there
    /// until the finish resets it.
    can_slide: bool,
    allow_slide_down: bool,
}

impl StretchEngine {
    /// Creates an engine resting at the configuration's initial values.
    ///
    /// `allow_slide_down` enables full dismissal by sliding: when false,
    /// slide-mode drags are heavily damped in every direction and release
    /// always returns to the appeared state.
    #[must_use]
    pub const fn new(config: StretchConfig, allow_slide_down: bool) -> Self {
        Self {
            config,
            height: config.initial_height,
            margin_from_bottom: config.initial_margin_from_bottom,
            hidden: false,
            can_slide: false,
            allow_slide_down,
        }
    }

    /// Returns the active configuration.
    #[must_use]
    pub const fn config(&self) -> StretchConfig {
        self.config
    }

    /// Replaces the configuration and snaps height/margin to its initial values.
    pub const fn set_config(&mut self, config: StretchConfig) {
        self.config = config;
        self.height = config.initial_height;
        self.margin_from_bottom = config.initial_margin_from_bottom;
    }

    /// Sheet height as last computed.
    #[must_use]
    pub const fn height(&self) -> f64 {
        self.height
    }

    /// Bottom margin as last computed.
    #[must_use]
    pub const fn margin_from_bottom(&self) -> f64 {
        self.margin_from_bottom
    }

    /// Whether the sheet is logically hidden (a disappear has been issued).
    #[must_use]
    pub const fn is_hidden(&self) -> bool {
        self.hidden
    }

    /// Whether the active gesture is in slide mode.
    #[must_use]
    pub const fn is_sliding(&self) -> bool {
        self.can_slide
    }

    /// Whether nested content should scroll natively instead of stretching
    /// the sheet: true once the sheet is at (or past) its maximum height.
    #[must_use]
    pub fn content_may_scroll(&self) -> bool {
        self.height >= self.config.maximum_height
    }

    /// Absorbs one drag sample, returning the resulting height and margin.
    pub fn on_stretch(&mut self, sample: DragSample) -> StretchUpdate {
        if !self.can_slide {
            let at_minimum = self.height <= self.config.minimum_height;
            let panned_down = sample.translation.y > 0.0;
            self.can_slide = at_minimum && panned_down;
        }

        if self.can_slide {
            self.slide(sample);
        } else {
            self.stretch(sample);
        }

        StretchUpdate {
            height: self.height,
            margin_from_bottom: self.margin_from_bottom,
            sliding: self.can_slide,
        }
    }

    /// Resolves the end of a drag.
    ///
    /// Slide mode picks between disappearing (pulled past
    /// [`SLIDE_DISMISS_RATIO`] of the minimum height, sliding down allowed)
    /// and re-appearing; height mode defers the detent choice to the owner.
    /// Either way the slide latch resets for the next gesture.
    pub fn on_finish_stretch(&mut self, sample: DragSample) -> FinishOutcome {
        let outcome = if self.can_slide {
            let remaining = self.margin_from_bottom + self.config.minimum_height;
            if self.allow_slide_down && remaining < self.config.minimum_height * SLIDE_DISMISS_RATIO
            {
                FinishOutcome::Transition(self.disappear())
            } else {
                FinishOutcome::Transition(self.appear_to_resting())
            }
        } else {
            FinishOutcome::Settle {
                sample,
                height: self.height,
            }
        };
        self.can_slide = false;
        outcome
    }

    /// Builds a transition that animates the height to `height`.
    pub fn stretch_to(&mut self, height: f64) -> Transition {
        self.height = height;
        Transition {
            kind: TransitionKind::Stretch,
            show_before: false,
            hide_after: false,
            stages: smallvec![AnimationRequest {
                spec: AnimationSpec::STRETCH,
                target: AnimationTarget::Height(height),
            }],
        }
    }

    /// Builds a transition that unhides the sheet, animates the margin back
    /// to its resting value, then the height to `height`.
    pub fn appear(&mut self, height: f64) -> Transition {
        self.hidden = false;
        self.margin_from_bottom = self.config.initial_margin_from_bottom;
        self.height = height;
        Transition {
            kind: TransitionKind::Appear,
            show_before: true,
            hide_after: false,
            stages: smallvec![
                AnimationRequest {
                    spec: AnimationSpec::APPEAR,
                    target: AnimationTarget::MarginFromBottom(
                        self.config.initial_margin_from_bottom
                    ),
                },
                AnimationRequest {
                    spec: AnimationSpec::STRETCH,
                    target: AnimationTarget::Height(height),
                },
            ],
        }
    }

    /// Builds a margin-only appear transition (used after a partial slide).
    pub fn appear_to_resting(&mut self) -> Transition {
        self.hidden = false;
        self.margin_from_bottom = self.config.initial_margin_from_bottom;
        Transition {
            kind: TransitionKind::Appear,
            show_before: true,
            hide_after: false,
            stages: smallvec![AnimationRequest {
                spec: AnimationSpec::APPEAR,
                target: AnimationTarget::MarginFromBottom(self.config.initial_margin_from_bottom),
            }],
        }
    }

    /// Builds a transition that pushes the sheet fully off-screen and hides it.
    pub fn disappear(&mut self) -> Transition {
        let off_screen = -(self.height + DISAPPEAR_OVERSHOOT);
        self.margin_from_bottom = off_screen;
        self.hidden = true;
        Transition {
            kind: TransitionKind::Disappear,
            show_before: false,
            hide_after: true,
            stages: smallvec![AnimationRequest {
                spec: AnimationSpec::DISAPPEAR,
                target: AnimationTarget::MarginFromBottom(off_screen),
            }],
        }
    }

    fn slide(&mut self, sample: DragSample) {
        let over_initial_margin = self.margin_from_bottom > self.config.initial_margin_from_bottom;
        let slide_up = over_initial_margin && sample.translation.y < 0.0;
        let speed = if self.allow_slide_down && !slide_up {
            StretchSpeed::Default
        } else {
            StretchSpeed::Slow
        };
        self.margin_from_bottom -= sample.translation.y * speed.factor();
    }

    fn stretch(&mut self, sample: DragSample) {
        let speed = if sample.velocity.y < 0.0 {
            // Dragging up: damp once the height reaches the maximum.
            if self.height >= self.config.maximum_height {
                StretchSpeed::Slow
            } else {
                StretchSpeed::Default
            }
        } else if self.height < self.config.minimum_height {
            // Dragging down: damp under the minimum.
            StretchSpeed::Slow
        } else {
            StretchSpeed::Default
        };
        self.height += -sample.translation.y * speed.factor();
    }
}
