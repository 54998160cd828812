// Copyright 2026 the Undersheet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Undersheet Shade: drag-driven dimming behind the sheet.
//!
//! A sheet may dim the content behind it while resting at (or above) a
//! configured *trigger* detent. [`ShadeModel`] owns the dimming opacity and
//! moves it in step with the drag:
//!
//! - Dragging **down** from the trigger toward the registered detent below it
//!   fades the shade out, proportionally to the fraction of remaining travel
//!   covered by each sample.
//! - Dragging **up** from below the trigger toward it fades the shade in,
//!   symmetrically.
//!
//! Per sample, the travel fraction is scaled by 5000, integer-ceiled, then
//! divided back by 100, so opacity moves in small discrete steps rather than
//! continuously. The opacity is clamped to `[0, tone]` and never propagates
//! an error: an unregistered trigger, or a trigger with no registered detent
//! below it, makes [`ShadeModel::update`] a no-op.
//!
//! The model knows nothing about views; the host applies
//! [`ShadeModel::alpha`] to whatever dimming surface it draws.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

#[cfg(all(not(feature = "std"), not(feature = "libm")))]
compile_error!("undersheet_shade requires either the `std` or `libm` feature");

use undersheet_detent::{DetentLevel, DetentSet};
use undersheet_gesture::DragSample;

/// Scale applied to the per-sample travel fraction before ceiling.
const PERCENTAGE_SCALE: f64 = 5000.0;

#[cfg(feature = "std")]
fn ceil(x: f64) -> f64 {
    x.ceil()
}

#[cfg(all(not(feature = "std"), feature = "libm"))]
fn ceil(x: f64) -> f64 {
    libm::ceil(x)
}

/// How dark the shade gets at full opacity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShadeTone {
    /// Barely-there dimming.
    Light,
    /// The default dimming.
    Normal,
    /// Heavy dimming.
    Dark,
}

impl ShadeTone {
    /// The opacity ceiling for this tone.
    #[must_use]
    pub const fn max_alpha(self) -> f64 {
        match self {
            Self::Light => 0.2,
            Self::Normal => 0.4,
            Self::Dark => 0.6,
        }
    }
}

/// The background shade's opacity, driven by drag position.
#[derive(Clone, Copy, Debug)]
pub struct ShadeModel {
    tone: ShadeTone,
    alpha: f64,
}

impl ShadeModel {
    /// Creates an invisible shade with the given tone.
    #[must_use]
    pub const fn new(tone: ShadeTone) -> Self {
        Self { tone, alpha: 0.0 }
    }

    /// Returns the current opacity, in `[0, tone]`.
    #[must_use]
    pub const fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Returns the configured tone.
    #[must_use]
    pub const fn tone(&self) -> ShadeTone {
        self.tone
    }

    /// Changes the tone, clamping the current opacity to the new ceiling.
    pub fn set_tone(&mut self, tone: ShadeTone) {
        self.tone = tone;
        self.alpha = self.alpha.clamp(0.0, tone.max_alpha());
    }

    /// Snaps the shade fully visible or fully hidden (used when settling).
    pub const fn set_visible(&mut self, visible: bool) {
        self.alpha = if visible { self.tone.max_alpha() } else { 0.0 };
    }

    /// Steps the opacity for one drag sample.
    ///
    /// `showing_height` is the sheet height after the sample; `trigger` is
    /// the shade's trigger level in `detents`; `reference_max` resolves
    /// ratio-based detent heights. Returns the (possibly unchanged) opacity.
    ///
    /// The step only applies while the height sits strictly between the
    /// trigger detent and the registered detent below it; outside that band,
    /// or without such a pair, this is a no-op.
    pub fn update(
        &mut self,
        sample: DragSample,
        showing_height: f64,
        trigger: DetentLevel,
        detents: &DetentSet,
        reference_max: f64,
    ) -> f64 {
        let Some(below) = detents.below(trigger) else {
            return self.alpha;
        };
        let Some(trigger_detent) = detents.find(trigger) else {
            return self.alpha;
        };
        let trigger_height = trigger_detent.resolved(reference_max);
        let below_height = below.resolved(reference_max);

        if sample.velocity.y > 0.0 {
            // Moving down: fade out over the travel that remains to the
            // detent below.
            if showing_height > below_height && showing_height < trigger_height {
                let fraction = sample.translation.y / (showing_height - below_height);
                self.fade_out(Self::quantize(fraction));
            }
        } else if showing_height < trigger_height && showing_height > below_height {
            // Moving up: fade in over the travel that remains to the trigger.
            let fraction = -sample.translation.y / (trigger_height - showing_height);
            self.fade_in(Self::quantize(fraction));
        }
        self.alpha
    }

    /// Scales a travel fraction into a stepped percentage.
    fn quantize(fraction: f64) -> f64 {
        ceil(fraction * PERCENTAGE_SCALE) / 100.0
    }

    fn fade_in(&mut self, percentage: f64) {
        let delta = percentage / 100.0 * self.tone.max_alpha();
        self.alpha = (self.alpha + delta).clamp(0.0, self.tone.max_alpha());
    }

    fn fade_out(&mut self, percentage: f64) {
        let delta = percentage / 100.0 * self.tone.max_alpha();
        self.alpha = (self.alpha - delta).clamp(0.0, self.tone.max_alpha());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Vec2;
    use undersheet_detent::{Detent, DetentHeight};

    fn detents() -> DetentSet {
        DetentSet::new([
            Detent::bottom(DetentHeight::Absolute(100.0)),
            Detent::upper(DetentHeight::Absolute(500.0)),
            Detent::top(DetentHeight::Absolute(900.0)),
        ])
    }

    fn down(translation_y: f64) -> DragSample {
        DragSample::new(Vec2::new(0.0, translation_y), Vec2::new(0.0, 300.0))
    }

    fn up(translation_y: f64) -> DragSample {
        DragSample::new(Vec2::new(0.0, translation_y), Vec2::new(0.0, -300.0))
    }

    #[test]
    fn single_downward_step_is_quantized() {
        let mut shade = ShadeModel::new(ShadeTone::Normal);
        shade.set_visible(true);
        // fraction 10/200 = 0.05 → ×5000 = 250 → /100 = 2.5% of the tone.
        let alpha = shade.update(down(10.0), 700.0, DetentLevel::Top, &detents(), 900.0);
        assert!((alpha - 0.39).abs() < 1e-12);
    }

    #[test]
    fn single_upward_step_is_symmetric() {
        let mut shade = ShadeModel::new(ShadeTone::Normal);
        let alpha = shade.update(up(-10.0), 700.0, DetentLevel::Top, &detents(), 900.0);
        assert!((alpha - 0.01).abs() < 1e-12);
    }

    #[test]
    fn fading_out_is_monotonic_and_never_negative() {
        let mut shade = ShadeModel::new(ShadeTone::Normal);
        shade.set_visible(true);
        let set = detents();
        let mut previous = shade.alpha();
        let mut height = 880.0;
        while height > 500.0 {
            let alpha = shade.update(down(20.0), height, DetentLevel::Top, &set, 900.0);
            assert!(alpha <= previous, "opacity must not grow while fading out");
            assert!(alpha >= 0.0, "opacity must not go negative");
            previous = alpha;
            height -= 20.0;
        }
    }

    #[test]
    fn fading_in_is_monotonic_and_capped_at_the_tone() {
        let mut shade = ShadeModel::new(ShadeTone::Light);
        let set = detents();
        let mut previous = shade.alpha();
        let mut height = 520.0;
        while height < 900.0 {
            let alpha = shade.update(up(-20.0), height, DetentLevel::Top, &set, 900.0);
            assert!(alpha >= previous, "opacity must not drop while fading in");
            assert!(
                alpha <= ShadeTone::Light.max_alpha() + 1e-12,
                "opacity must not exceed the tone"
            );
            previous = alpha;
            height += 20.0;
        }
    }

    #[test]
    fn no_registered_detent_below_the_trigger_is_a_no_op() {
        let set = DetentSet::new([Detent::top(DetentHeight::Absolute(900.0))]);
        let mut shade = ShadeModel::new(ShadeTone::Normal);
        shade.set_visible(true);
        let alpha = shade.update(down(10.0), 700.0, DetentLevel::Top, &set, 900.0);
        assert_eq!(alpha, 0.4);
    }

    #[test]
    fn unregistered_trigger_is_a_no_op() {
        let mut shade = ShadeModel::new(ShadeTone::Normal);
        let alpha = shade.update(up(-10.0), 300.0, DetentLevel::Lower, &detents(), 900.0);
        assert_eq!(alpha, 0.0);
    }

    #[test]
    fn heights_outside_the_trigger_band_do_not_step() {
        let mut shade = ShadeModel::new(ShadeTone::Normal);
        shade.set_visible(true);
        let set = detents();
        // At or above the trigger height: nothing moves.
        let alpha = shade.update(down(10.0), 900.0, DetentLevel::Top, &set, 900.0);
        assert_eq!(alpha, 0.4);
        // At or below the detent-below height: nothing moves.
        let alpha = shade.update(down(10.0), 500.0, DetentLevel::Top, &set, 900.0);
        assert_eq!(alpha, 0.4);
    }

    #[test]
    fn set_visible_snaps_to_tone_or_zero() {
        let mut shade = ShadeModel::new(ShadeTone::Dark);
        shade.set_visible(true);
        assert_eq!(shade.alpha(), 0.6);
        shade.set_visible(false);
        assert_eq!(shade.alpha(), 0.0);
    }

    #[test]
    fn set_tone_clamps_the_current_alpha() {
        let mut shade = ShadeModel::new(ShadeTone::Dark);
        shade.set_visible(true);
        shade.set_tone(ShadeTone::Light);
        assert_eq!(shade.alpha(), 0.2);
    }
}
