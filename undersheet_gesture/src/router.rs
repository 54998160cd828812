// Copyright 2026 the Undersheet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The per-gesture routing state machine.

use smallvec::SmallVec;

use crate::{DragSample, GesturePhase};

/// Where the active drag stream currently lives.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouterState {
    /// No active gesture.
    Idle,
    /// The sheet's own pan recognizer owns the stream.
    TrackingContainer,
    /// The nested scroll view's pan owns the stream; content is scrolling.
    TrackingNestedScroll,
    /// The stream started as a nested scroll but was handed off to the sheet
    /// when the content hit its top edge while dragging downward.
    StretchedBySlideFromScroll,
}

/// An instruction the router asks the host (or the stretch engine) to carry out.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RouterEffect {
    /// Feed this sample to the stretch engine.
    Stretch(DragSample),
    /// The drag ended; feed this sample to the stretch engine's finish path.
    FinishStretch(DragSample),
    /// Pin the nested scroll view's vertical content offset to zero.
    ZeroScrollOffset,
    /// Enable or disable the nested scroll view's edge bounce.
    SetScrollBounce(bool),
    /// Hold or release the hosting surface's interactive dismissal while a
    /// nested-scroll drag is in flight.
    SetDismissLock(bool),
}

/// Effect sequence emitted for one gesture phase event.
pub type RouterEffects = SmallVec<[RouterEffect; 3]>;

/// Arbitrates one container pan and at most one nested scroll pan.
///
/// The router tracks a single active gesture stream at a time. Its one piece
/// of cross-gesture configuration is the *content may scroll* flag, set by
/// the owner whenever the sheet reaches (or leaves) its maximum height via
/// [`GestureRouter::reset`]. The flag steers two things:
///
/// - [`GestureRouter::container_requires_scroll_failure`], which the host
///   consults when wiring recognizer precedence: while content may scroll
///   the nested pan wins, otherwise the sheet's pan does.
/// - Whether a nested scroll stream is eligible for the slide hand-off into
///   [`RouterState::StretchedBySlideFromScroll`].
///
/// A container `Began` suppresses content scrolling for the remainder of
/// that gesture; `reset` (typically called after the finish-stretch settle)
/// restores it.
#[derive(Clone, Debug)]
pub struct GestureRouter {
    state: RouterState,
    /// Configured value: true while the sheet rests at its maximum height.
    can_scroll_content: bool,
    /// Live arbitration flag for the gesture in flight.
    content_may_scroll_now: bool,
}

impl Default for GestureRouter {
    fn default() -> Self {
        Self::new()
    }
}

impl GestureRouter {
    /// Creates an idle router with content scrolling disabled.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: RouterState::Idle,
            can_scroll_content: false,
            content_may_scroll_now: false,
        }
    }

    /// Returns the current routing state.
    #[must_use]
    pub const fn state(&self) -> RouterState {
        self.state
    }

    /// Returns the configured content-may-scroll flag.
    #[must_use]
    pub const fn can_scroll_content(&self) -> bool {
        self.can_scroll_content
    }

    /// Reconfigures the content-may-scroll flag (configured and live).
    ///
    /// Call after every finish-stretch settle and after every layout pass,
    /// with "sheet height is at or above its maximum".
    pub const fn reset(&mut self, can_scroll_content: bool) {
        self.can_scroll_content = can_scroll_content;
        self.content_may_scroll_now = can_scroll_content;
    }

    /// Whether the nested scroll pan must fail before the sheet's pan runs.
    ///
    /// Hosts use this to configure recognizer precedence: true means the
    /// sheet's pan takes priority (the usual case); false means native
    /// content scrolling wins.
    #[must_use]
    pub const fn container_requires_scroll_failure(&self) -> bool {
        !self.content_may_scroll_now
    }

    /// Processes a phase event from the sheet's own pan recognizer.
    pub fn handle_container_pan(
        &mut self,
        phase: GesturePhase,
        sample: DragSample,
    ) -> RouterEffects {
        let mut effects = RouterEffects::new();
        match phase {
            GesturePhase::Began => {
                if self.state == RouterState::Idle {
                    // The sheet owns this stream; content must not scroll
                    // underneath it until the gesture settles.
                    self.content_may_scroll_now = false;
                    self.state = RouterState::TrackingContainer;
                }
            }
            GesturePhase::Changed => {
                if self.state == RouterState::TrackingContainer {
                    effects.push(RouterEffect::Stretch(sample));
                }
            }
            GesturePhase::Ended => {
                if self.state == RouterState::TrackingContainer {
                    effects.push(RouterEffect::FinishStretch(sample));
                    self.state = RouterState::Idle;
                }
            }
        }
        effects
    }

    /// Processes a phase event from the nested scroll view's pan recognizer.
    ///
    /// `scroll_offset_y` is the nested view's current vertical content
    /// offset, sampled by the host at event time.
    pub fn handle_scroll_pan(
        &mut self,
        phase: GesturePhase,
        sample: DragSample,
        scroll_offset_y: f64,
    ) -> RouterEffects {
        let mut effects = RouterEffects::new();
        match phase {
            GesturePhase::Began => {
                if self.state == RouterState::Idle {
                    self.state = RouterState::TrackingNestedScroll;
                    effects.push(RouterEffect::SetDismissLock(true));
                }
            }
            GesturePhase::Changed => match self.state {
                RouterState::TrackingNestedScroll => {
                    // Hand-off: content is at its top edge and the finger
                    // keeps moving down, so the sheet takes over. This fires
                    // at most once per gesture; the state change makes the
                    // condition unreachable afterwards.
                    if scroll_offset_y <= 0.0 && sample.translation.y > 0.0 {
                        self.state = RouterState::StretchedBySlideFromScroll;
                        self.content_may_scroll_now = false;
                        effects.push(RouterEffect::ZeroScrollOffset);
                        effects.push(RouterEffect::SetScrollBounce(false));
                        // The accumulated scroll translation is consumed by
                        // the hand-off; only the velocity carries over.
                        effects.push(RouterEffect::Stretch(sample.consumed()));
                    }
                }
                RouterState::StretchedBySlideFromScroll => {
                    effects.push(RouterEffect::ZeroScrollOffset);
                    effects.push(RouterEffect::Stretch(sample));
                }
                RouterState::Idle | RouterState::TrackingContainer => {}
            },
            GesturePhase::Ended => match self.state {
                RouterState::StretchedBySlideFromScroll => {
                    effects.push(RouterEffect::SetDismissLock(false));
                    effects.push(RouterEffect::SetScrollBounce(true));
                    effects.push(RouterEffect::FinishStretch(sample));
                    self.state = RouterState::Idle;
                }
                RouterState::TrackingNestedScroll => {
                    effects.push(RouterEffect::SetDismissLock(false));
                    effects.push(RouterEffect::SetScrollBounce(true));
                    self.state = RouterState::Idle;
                }
                RouterState::Idle | RouterState::TrackingContainer => {}
            },
        }
        effects
    }
}
