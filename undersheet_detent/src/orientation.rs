// Copyright 2026 the Undersheet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Orientation-keyed pair of detent state machines.

use crate::{DetentLevel, DetentSet, DetentState};

/// The two layout orientations a sheet distinguishes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    /// Taller than wide.
    Portrait,
    /// Wider than tall.
    Landscape,
}

/// Two independent [`DetentState`]s behind an orientation flag.
///
/// Portrait and landscape each get their own detent configuration and their
/// own optional *shade trigger*: the detent level at or above which the
/// background shade is shown. Switching orientation is an O(1) flag flip;
/// nothing is recomputed until the host's next layout pass.
#[derive(Clone, Debug)]
pub struct OrientationDetents {
    orientation: Orientation,
    portrait: DetentState,
    landscape: DetentState,
    portrait_shade_trigger: Option<DetentLevel>,
    landscape_shade_trigger: Option<DetentLevel>,
}

impl OrientationDetents {
    /// Creates the pair from per-orientation detent sets and shade triggers.
    #[must_use]
    pub fn new(
        orientation: Orientation,
        portrait_detents: DetentSet,
        landscape_detents: DetentSet,
        portrait_shade_trigger: Option<DetentLevel>,
        landscape_shade_trigger: Option<DetentLevel>,
    ) -> Self {
        Self {
            orientation,
            portrait: DetentState::new(portrait_detents),
            landscape: DetentState::new(landscape_detents),
            portrait_shade_trigger,
            landscape_shade_trigger,
        }
    }

    /// Returns the active orientation.
    #[must_use]
    pub const fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Switches the active orientation.
    pub const fn set_orientation(&mut self, orientation: Orientation) {
        self.orientation = orientation;
    }

    /// Returns the state machine for the active orientation.
    #[must_use]
    pub const fn state(&self) -> &DetentState {
        match self.orientation {
            Orientation::Portrait => &self.portrait,
            Orientation::Landscape => &self.landscape,
        }
    }

    /// Returns the mutable state machine for the active orientation.
    pub const fn state_mut(&mut self) -> &mut DetentState {
        match self.orientation {
            Orientation::Portrait => &mut self.portrait,
            Orientation::Landscape => &mut self.landscape,
        }
    }

    /// Returns the shade-trigger level for the active orientation, if any.
    #[must_use]
    pub const fn shade_trigger(&self) -> Option<DetentLevel> {
        match self.orientation {
            Orientation::Portrait => self.portrait_shade_trigger,
            Orientation::Landscape => self.landscape_shade_trigger,
        }
    }

    /// Returns whether the background shade should currently be visible.
    ///
    /// True iff a shade trigger is configured for the active orientation and
    /// the current detent is at or above it.
    #[must_use]
    pub fn should_show_shade(&self) -> bool {
        let Some(trigger) = self.shade_trigger() else {
            return false;
        };
        self.state().detents().current().level() >= trigger
    }
}
