// Copyright 2026 the Undersheet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The drag-settlement state machine: current detent, lock flag, snapping.

use kurbo::Vec2;

use crate::{Detent, DetentLevel, DetentSet};

/// Detent state machine for one sheet configuration.
///
/// Wraps a [`DetentSet`] with a lock flag. While locked, [`DetentState::raise`],
/// [`DetentState::lower`], and [`DetentState::settle_from_drag`] are all
/// no-ops, regardless of inputs.
///
/// The interesting operation is [`DetentState::settle_from_drag`]: given the
/// release velocity and the live sheet height, pick the detent to settle on.
/// A release faster than [`DetentState::FLICK_VELOCITY`] steps one detent in
/// the flick direction; otherwise the nearest detent by position wins, using
/// a midpoint walk over adjacent registered detents. The flick test runs
/// first; the two tests are not commutative at the threshold.
#[derive(Clone, Debug)]
pub struct DetentState {
    detents: DetentSet,
    locked: bool,
}

impl DetentState {
    /// Release speed (units/s on the y axis) beyond which a drag counts as a
    /// flick and overrides position-based settlement.
    pub const FLICK_VELOCITY: f64 = 500.0;

    /// Creates a state machine over the given detent set, unlocked.
    #[must_use]
    pub const fn new(detents: DetentSet) -> Self {
        Self {
            detents,
            locked: false,
        }
    }

    /// Returns the underlying detent set.
    #[must_use]
    pub const fn detents(&self) -> &DetentSet {
        &self.detents
    }

    /// Returns a mutable reference to the underlying detent set.
    ///
    /// This bypasses the lock flag; it is meant for reconfiguration between
    /// gestures, not for drag-driven changes.
    pub const fn detents_mut(&mut self) -> &mut DetentSet {
        &mut self.detents
    }

    /// Returns whether drag-driven detent changes are suppressed.
    #[must_use]
    pub const fn is_locked(&self) -> bool {
        self.locked
    }

    /// Locks or unlocks drag-driven detent changes.
    pub const fn set_locked(&mut self, locked: bool) {
        self.locked = locked;
    }

    /// Moves the current detent one registered step up; no-op while locked.
    pub fn raise(&mut self) {
        if self.locked {
            return;
        }
        self.detents.raise();
    }

    /// Moves the current detent one registered step down; no-op while locked.
    pub fn lower(&mut self) {
        if self.locked {
            return;
        }
        self.detents.lower();
    }

    /// Picks and adopts the detent to settle on after a drag ends.
    ///
    /// `velocity` is the release velocity; `view_height` is the sheet height
    /// at release; `reference_max` resolves ratio-based detent heights.
    /// Returns the (possibly unchanged) current detent.
    ///
    /// A downward flick (`velocity.y > FLICK_VELOCITY`) lowers one step, an
    /// upward flick raises one step, and anything slower falls through to the
    /// nearest-detent walk of [`DetentState::nearest_level`].
    pub fn settle_from_drag(
        &mut self,
        velocity: Vec2,
        view_height: f64,
        reference_max: f64,
    ) -> Detent {
        if self.locked {
            return self.detents.current();
        }

        if velocity.y > Self::FLICK_VELOCITY {
            self.lower();
            return self.detents.current();
        }
        if velocity.y < -Self::FLICK_VELOCITY {
            self.raise();
            return self.detents.current();
        }

        let level = self.nearest_level(view_height, reference_max);
        self.detents.set_current(level);
        self.detents.current()
    }

    /// Returns the registered level a sheet at `view_height` is nearest to.
    ///
    /// Heights beyond the extreme registered detents clamp to them. In
    /// between, adjacent registered pairs are walked top to bottom and the
    /// height is compared against each pair's midpoint; the boundary is
    /// inclusive on the upper side, so a height exactly at a midpoint
    /// resolves to the upper candidate. A single-detent set always returns
    /// that detent's level.
    #[must_use]
    pub fn nearest_level(&self, view_height: f64, reference_max: f64) -> DetentLevel {
        let top = self.detents.top();
        let bottom = self.detents.bottom();
        if view_height > top.resolved(reference_max) {
            return top.level();
        }
        if view_height < bottom.resolved(reference_max) {
            return bottom.level();
        }

        let mut check = top;
        while let Some(below) = self.detents.below(check.level()) {
            let check_height = check.resolved(reference_max);
            let below_height = below.resolved(reference_max);
            let midpoint = below_height + (check_height - below_height) / 2.0;
            if view_height >= midpoint && view_height <= check_height {
                return check.level();
            }
            if view_height >= below_height && view_height < midpoint {
                return below.level();
            }
            check = below;
        }
        bottom.level()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DetentHeight;

    fn three_level_state() -> DetentState {
        let mut set = DetentSet::new([
            Detent::bottom(DetentHeight::Absolute(100.0)),
            Detent::upper(DetentHeight::Absolute(500.0)),
            Detent::top(DetentHeight::Absolute(900.0)),
        ]);
        set.set_current(DetentLevel::Upper);
        DetentState::new(set)
    }

    #[test]
    fn slow_release_below_midpoint_settles_on_upper() {
        let mut state = three_level_state();
        // midpoint(Upper, Top) = 700; 650 is in [500, 700).
        let settled = state.settle_from_drag(Vec2::ZERO, 650.0, 900.0);
        assert_eq!(settled.level(), DetentLevel::Upper);
    }

    #[test]
    fn slow_release_above_midpoint_settles_on_top() {
        let mut state = three_level_state();
        // 750 is in [700, 900].
        let settled = state.settle_from_drag(Vec2::ZERO, 750.0, 900.0);
        assert_eq!(settled.level(), DetentLevel::Top);
    }

    #[test]
    fn midpoint_boundary_resolves_to_the_upper_candidate() {
        let mut state = three_level_state();
        let settled = state.settle_from_drag(Vec2::ZERO, 700.0, 900.0);
        assert_eq!(settled.level(), DetentLevel::Top);
    }

    #[test]
    fn heights_beyond_the_extremes_clamp() {
        let mut state = three_level_state();
        let settled = state.settle_from_drag(Vec2::ZERO, 2000.0, 900.0);
        assert_eq!(settled.level(), DetentLevel::Top);
        let settled = state.settle_from_drag(Vec2::ZERO, 10.0, 900.0);
        assert_eq!(settled.level(), DetentLevel::Bottom);
    }

    #[test]
    fn downward_flick_lowers_regardless_of_height() {
        let mut state = three_level_state();
        let settled = state.settle_from_drag(Vec2::new(0.0, 501.0), 899.0, 900.0);
        assert_eq!(settled.level(), DetentLevel::Bottom);
    }

    #[test]
    fn upward_flick_raises_regardless_of_height() {
        let mut state = three_level_state();
        let settled = state.settle_from_drag(Vec2::new(0.0, -501.0), 120.0, 900.0);
        assert_eq!(settled.level(), DetentLevel::Top);
    }

    #[test]
    fn upward_flick_from_mid_height_example() {
        // Height 300 with velocity (0, -600): the flick wins and Upper → Top.
        let mut state = three_level_state();
        let settled = state.settle_from_drag(Vec2::new(0.0, -600.0), 300.0, 900.0);
        assert_eq!(settled.level(), DetentLevel::Top);
    }

    #[test]
    fn velocity_exactly_at_threshold_is_not_a_flick() {
        // The flick test is strict; 500.0 falls through to the position walk.
        let mut state = three_level_state();
        let settled = state.settle_from_drag(Vec2::new(0.0, 500.0), 750.0, 900.0);
        assert_eq!(settled.level(), DetentLevel::Top);
    }

    #[test]
    fn settle_is_deterministic() {
        for _ in 0..3 {
            let mut state = three_level_state();
            let settled = state.settle_from_drag(Vec2::new(0.0, 100.0), 480.0, 900.0);
            assert_eq!(settled.level(), DetentLevel::Upper);
        }
    }

    #[test]
    fn locked_state_ignores_everything() {
        let mut state = three_level_state();
        state.set_locked(true);
        state.raise();
        assert_eq!(state.detents().current().level(), DetentLevel::Upper);
        state.lower();
        assert_eq!(state.detents().current().level(), DetentLevel::Upper);
        let settled = state.settle_from_drag(Vec2::new(0.0, 900.0), 100.0, 900.0);
        assert_eq!(settled.level(), DetentLevel::Upper);
    }

    #[test]
    fn single_detent_set_always_settles_on_it() {
        let set = DetentSet::new([Detent::lower(DetentHeight::Absolute(240.0))]);
        let mut state = DetentState::new(set);
        let settled = state.settle_from_drag(Vec2::ZERO, 240.0, 900.0);
        assert_eq!(settled.level(), DetentLevel::Lower);
    }

    #[test]
    fn ratio_detents_resolve_against_reference_max() {
        let mut set = DetentSet::new([
            Detent::bottom(DetentHeight::Ratio(0.1)),
            Detent::top(DetentHeight::Ratio(0.9)),
        ]);
        set.set_current(DetentLevel::Top);
        let mut state = DetentState::new(set);
        // Reference max 1000: heights 100 and 900, midpoint 500.
        let settled = state.settle_from_drag(Vec2::ZERO, 480.0, 1000.0);
        assert_eq!(settled.level(), DetentLevel::Bottom);
    }
}
