// Copyright 2026 the Undersheet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The container: one struct wiring detents, stretch, routing, and shade.

use smallvec::SmallVec;

use crate::{HostCommand, SheetEvent, SheetResponse};
use undersheet_detent::{DetentLevel, DetentSet, Orientation, OrientationDetents};
use undersheet_gesture::{DragSample, GesturePhase, GestureRouter, RouterEffect, RouterEffects};
use undersheet_shade::{ShadeModel, ShadeTone};
use undersheet_stretch::{
    AnimationRequest, FinishOutcome, StretchConfig, StretchEngine, Transition, TransitionKind,
};

/// Bottom margin applied when the host reports no safe-area bottom inset, so
/// the sheet does not sit flush against the screen edge.
const NO_INSET_BOTTOM_MARGIN: f64 = 10.0;

/// Everything needed to construct a [`SheetContainer`].
#[derive(Clone, Debug)]
pub struct SheetConfig {
    /// Detents used while in portrait orientation.
    pub portrait_detents: DetentSet,
    /// Detents used while in landscape orientation.
    pub landscape_detents: DetentSet,
    /// Detent level at or above which the shade shows, in portrait.
    pub portrait_shade_trigger: Option<DetentLevel>,
    /// Detent level at or above which the shade shows, in landscape.
    pub landscape_shade_trigger: Option<DetentLevel>,
    /// How dark the shade gets at full opacity.
    pub shade_tone: ShadeTone,
    /// Whether sliding down past the bottom detent can dismiss the sheet.
    pub allow_slide_down: bool,
    /// Orientation at construction.
    pub orientation: Orientation,
}

/// A multi-stage transition in flight, waiting on host animation completions.
#[derive(Clone, Debug)]
struct PendingTransition {
    kind: TransitionKind,
    /// Stages not yet handed to the host.
    stages: SmallVec<[AnimationRequest; 2]>,
    hide_after: bool,
    /// The detent a stretch transition settles on, reported at completion.
    settled: Option<DetentLevel>,
}

/// The host-facing sheet: detent state, stretch engine, gesture router, and
/// shade behind one synchronous entry-point surface.
///
/// Every entry point returns a [`SheetResponse`]; the host applies the
/// commands in order and forwards the events to whoever observes the sheet.
/// The container never calls out and never blocks. Animations run host-side:
/// each [`HostCommand::Animate`] is answered by one later call to
/// [`SheetContainer::animation_finished`], which advances multi-stage
/// transitions and emits their terminal events.
///
/// Call [`SheetContainer::set_layout`] before driving gestures; heights are
/// meaningless until the reference maximum is known.
#[derive(Clone, Debug)]
pub struct SheetContainer {
    detents: OrientationDetents,
    engine: StretchEngine,
    router: GestureRouter,
    shade: ShadeModel,
    reference_max: f64,
    margin_from_bottom: f64,
    pending: Option<PendingTransition>,
    /// Nearest detent reported mid-drag, for edge-triggered hint events.
    hinted_level: Option<DetentLevel>,
}

impl SheetContainer {
    /// Creates a container resting at each orientation's first detent.
    #[must_use]
    pub fn new(config: SheetConfig) -> Self {
        let detents = OrientationDetents::new(
            config.orientation,
            config.portrait_detents,
            config.landscape_detents,
            config.portrait_shade_trigger,
            config.landscape_shade_trigger,
        );
        let set = detents.state().detents();
        let engine_config = StretchConfig {
            initial_height: set.current().resolved(0.0),
            minimum_height: set.bottom().resolved(0.0),
            maximum_height: set.top().resolved(0.0),
            initial_margin_from_bottom: 0.0,
        };
        Self {
            detents,
            engine: StretchEngine::new(engine_config, config.allow_slide_down),
            router: GestureRouter::new(),
            shade: ShadeModel::new(config.shade_tone),
            reference_max: 0.0,
            margin_from_bottom: 0.0,
            pending: None,
            hinted_level: None,
        }
    }

    /// Sheet height as last computed.
    #[must_use]
    pub const fn height(&self) -> f64 {
        self.engine.height()
    }

    /// Bottom margin as last computed.
    #[must_use]
    pub const fn margin_from_bottom(&self) -> f64 {
        self.engine.margin_from_bottom()
    }

    /// Current shade opacity.
    #[must_use]
    pub const fn shade_alpha(&self) -> f64 {
        self.shade.alpha()
    }

    /// Whether the sheet is logically hidden.
    #[must_use]
    pub const fn is_hidden(&self) -> bool {
        self.engine.is_hidden()
    }

    /// Whether a transition is waiting on a host animation completion.
    #[must_use]
    pub const fn is_animating(&self) -> bool {
        self.pending.is_some()
    }

    /// The active orientation.
    #[must_use]
    pub const fn orientation(&self) -> Orientation {
        self.detents.orientation()
    }

    /// The current detent's level in the active orientation.
    #[must_use]
    pub fn current_level(&self) -> DetentLevel {
        self.detents.state().detents().current().level()
    }

    /// Whether drag-driven detent changes are suppressed (active orientation).
    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.detents.state().is_locked()
    }

    /// Locks or unlocks drag-driven detent changes for the active orientation.
    ///
    /// Programmatic moves ([`SheetContainer::stretch_to`]) are unaffected.
    pub fn set_locked(&mut self, locked: bool) {
        self.detents.state_mut().set_locked(locked);
    }

    /// Whether the nested scroll pan must fail before the sheet's pan runs.
    ///
    /// Hosts consult this when wiring recognizer precedence.
    #[must_use]
    pub const fn container_requires_scroll_failure(&self) -> bool {
        self.router.container_requires_scroll_failure()
    }

    /// Adopts a new layout: reference maximum height and safe-area inset.
    ///
    /// The bottom margin is 10.0 on hosts without a bottom safe-area inset
    /// and zero otherwise. Heights are recomputed from
    /// the active detent set and re-issued as commands.
    pub fn set_layout(&mut self, reference_max: f64, safe_area_bottom_inset: f64) -> SheetResponse {
        let mut response = SheetResponse::new();
        self.reference_max = reference_max;
        self.margin_from_bottom = if safe_area_bottom_inset == 0.0 {
            NO_INSET_BOTTOM_MARGIN
        } else {
            0.0
        };
        self.rebuild_config();
        response.command(HostCommand::SetHeight(self.engine.height()));
        response.command(HostCommand::SetMargin(self.engine.margin_from_bottom()));
        response
    }

    /// Switches orientation, recomputing the stretch configuration.
    ///
    /// A visible sheet animates back to its (new) current detent height; a
    /// hidden one just adopts the configuration. Same-orientation calls are
    /// no-ops. Must not be called mid-drag.
    pub fn set_orientation(&mut self, orientation: Orientation) -> SheetResponse {
        let mut response = SheetResponse::new();
        if orientation == self.detents.orientation() {
            return response;
        }
        self.detents.set_orientation(orientation);
        self.rebuild_config();
        if !self.engine.is_hidden() {
            let target = self.engine.config().initial_height;
            let transition = self.engine.appear(target);
            self.snap_shade(&mut response);
            self.begin_transition(transition, None, &mut response);
        }
        response
    }

    /// Processes a phase event from the sheet's own pan recognizer.
    pub fn handle_container_pan(&mut self, phase: GesturePhase, sample: DragSample) -> SheetResponse {
        let mut response = SheetResponse::new();
        let effects = self.router.handle_container_pan(phase, sample);
        self.apply_effects(effects, &mut response);
        response
    }

    /// Processes a phase event from the nested scroll view's pan recognizer.
    ///
    /// `scroll_offset_y` is the nested view's vertical content offset at
    /// event time, sampled by the host.
    pub fn handle_scroll_pan(
        &mut self,
        phase: GesturePhase,
        sample: DragSample,
        scroll_offset_y: f64,
    ) -> SheetResponse {
        let mut response = SheetResponse::new();
        let effects = self.router.handle_scroll_pan(phase, sample, scroll_offset_y);
        self.apply_effects(effects, &mut response);
        response
    }

    /// Reports that the host finished the last requested animation.
    ///
    /// Advances a multi-stage transition by one `Animate` command, or emits
    /// the transition's terminal event when no stages remain. Calls with no
    /// transition in flight return an empty response.
    pub fn animation_finished(&mut self) -> SheetResponse {
        let mut response = SheetResponse::new();
        let Some(mut pending) = self.pending.take() else {
            return response;
        };
        if !pending.stages.is_empty() {
            let next = pending.stages.remove(0);
            response.command(HostCommand::Animate(next));
            self.pending = Some(pending);
            return response;
        }
        match pending.kind {
            TransitionKind::Stretch => {
                let level = pending.settled.unwrap_or_else(|| self.current_level());
                response.event(SheetEvent::DidFinishDetentAnimation(level));
            }
            TransitionKind::Appear => response.event(SheetEvent::DidAppear),
            TransitionKind::Disappear => {
                if pending.hide_after {
                    response.command(HostCommand::SetHidden(true));
                }
                response.event(SheetEvent::DidDisappear);
            }
        }
        response
    }

    /// Animates to the registered detent at `level`; unregistered levels are
    /// silent no-ops. Works regardless of the lock flag.
    pub fn stretch_to(&mut self, level: DetentLevel) -> SheetResponse {
        let mut response = SheetResponse::new();
        let Some(detent) = self.detents.state().detents().find(level) else {
            return response;
        };
        self.detents.state_mut().detents_mut().set_current(level);
        let target = detent.resolved(self.reference_max) + self.margin_from_bottom;
        let transition = self.engine.stretch_to(target);
        response.event(SheetEvent::DidChangeDetentAnimation(level));
        self.begin_transition(transition, Some(level), &mut response);
        self.snap_shade(&mut response);
        self.router.reset(self.engine.content_may_scroll());
        response
    }

    /// Brings a (hidden or off-screen) sheet back to its current detent.
    pub fn appear(&mut self) -> SheetResponse {
        let mut response = SheetResponse::new();
        let target = self.detents.state().detents().current().resolved(self.reference_max)
            + self.margin_from_bottom;
        let transition = self.engine.appear(target);
        self.snap_shade(&mut response);
        self.begin_transition(transition, None, &mut response);
        self.router.reset(self.engine.content_may_scroll());
        response
    }

    /// Pushes the sheet off-screen and hides it; no-op while already hidden.
    pub fn disappear(&mut self) -> SheetResponse {
        let mut response = SheetResponse::new();
        if self.engine.is_hidden() {
            return response;
        }
        let transition = self.engine.disappear();
        self.shade.set_visible(false);
        response.command(HostCommand::SetShadeAlpha(self.shade.alpha()));
        self.begin_transition(transition, None, &mut response);
        response
    }

    /// Animates one registered detent up; no-op at the top or while locked.
    pub fn raise(&mut self) -> SheetResponse {
        let before = self.current_level();
        self.detents.state_mut().raise();
        self.settle_if_moved(before)
    }

    /// Animates one registered detent down; no-op at the bottom or while locked.
    pub fn lower(&mut self) -> SheetResponse {
        let before = self.current_level();
        self.detents.state_mut().lower();
        self.settle_if_moved(before)
    }

    /// Animates to the current detent if a raise/lower actually moved it.
    fn settle_if_moved(&mut self, before: DetentLevel) -> SheetResponse {
        let mut response = SheetResponse::new();
        let current = self.detents.state().detents().current();
        if current.level() == before {
            return response;
        }
        let target = current.resolved(self.reference_max) + self.margin_from_bottom;
        let transition = self.engine.stretch_to(target);
        response.event(SheetEvent::DidChangeDetentAnimation(current.level()));
        self.begin_transition(transition, Some(current.level()), &mut response);
        self.snap_shade(&mut response);
        self.router.reset(self.engine.content_may_scroll());
        response
    }

    /// Recomputes the stretch configuration from the active detent set and
    /// the current margin, snapping the engine to its initial values.
    fn rebuild_config(&mut self) {
        let set = self.detents.state().detents();
        let margin = self.margin_from_bottom;
        let config = StretchConfig {
            initial_height: set.current().resolved(self.reference_max) + margin,
            minimum_height: set.bottom().resolved(self.reference_max) + margin,
            maximum_height: set.top().resolved(self.reference_max) + margin,
            initial_margin_from_bottom: margin,
        };
        self.engine.set_config(config);
        self.router.reset(self.engine.content_may_scroll());
    }

    fn apply_effects(&mut self, effects: RouterEffects, response: &mut SheetResponse) {
        for effect in effects {
            match effect {
                RouterEffect::Stretch(sample) => self.apply_stretch(sample, response),
                RouterEffect::FinishStretch(sample) => self.apply_finish(sample, response),
                RouterEffect::ZeroScrollOffset => response.command(HostCommand::ZeroScrollOffset),
                RouterEffect::SetScrollBounce(on) => {
                    response.command(HostCommand::SetScrollBounce(on));
                }
                RouterEffect::SetDismissLock(on) => {
                    response.command(HostCommand::SetDismissLock(on));
                }
            }
        }
    }

    fn apply_stretch(&mut self, sample: DragSample, response: &mut SheetResponse) {
        let update = self.engine.on_stretch(sample);
        if update.sliding {
            response.command(HostCommand::SetMargin(update.margin_from_bottom));
            return;
        }
        response.command(HostCommand::SetHeight(update.height));
        response.event(SheetEvent::DidStretch(update.height));
        if let Some(trigger) = self.detents.shade_trigger() {
            let alpha = self.shade.update(
                sample,
                update.height,
                trigger,
                self.detents.state().detents(),
                self.reference_max,
            );
            response.command(HostCommand::SetShadeAlpha(alpha));
        }
        // Edge-triggered hint: tell the host which detent the sheet would
        // settle on, but only when that answer changes.
        let nearest = self.detents.state().nearest_level(update.height, self.reference_max);
        let baseline = self.hinted_level.unwrap_or_else(|| self.current_level());
        if nearest != baseline {
            response.event(SheetEvent::DidChangeDetent(nearest));
        }
        self.hinted_level = Some(nearest);
    }

    fn apply_finish(&mut self, sample: DragSample, response: &mut SheetResponse) {
        self.hinted_level = None;
        match self.engine.on_finish_stretch(sample) {
            FinishOutcome::Settle { sample, height } => {
                let settled = self.detents.state_mut().settle_from_drag(
                    sample.velocity,
                    height,
                    self.reference_max,
                );
                let target = settled.resolved(self.reference_max) + self.margin_from_bottom;
                let transition = self.engine.stretch_to(target);
                response.event(SheetEvent::DidChangeDetentAnimation(settled.level()));
                self.begin_transition(transition, Some(settled.level()), response);
                self.snap_shade(response);
            }
            FinishOutcome::Transition(transition) => {
                if transition.kind == TransitionKind::Disappear {
                    self.shade.set_visible(false);
                    response.command(HostCommand::SetShadeAlpha(self.shade.alpha()));
                } else {
                    self.snap_shade(response);
                }
                self.begin_transition(transition, None, response);
            }
        }
        self.router.reset(self.engine.content_may_scroll());
    }

    /// Hands the first stage to the host and parks the rest for
    /// [`SheetContainer::animation_finished`].
    fn begin_transition(
        &mut self,
        transition: Transition,
        settled: Option<DetentLevel>,
        response: &mut SheetResponse,
    ) {
        if transition.show_before {
            response.command(HostCommand::SetHidden(false));
        }
        let mut stages = transition.stages;
        // Transitions always carry at least one stage.
        let first = stages.remove(0);
        response.command(HostCommand::Animate(first));
        self.pending = Some(PendingTransition {
            kind: transition.kind,
            stages,
            hide_after: transition.hide_after,
            settled,
        });
    }

    /// Snaps the shade to fully-on or fully-off per the current detent.
    fn snap_shade(&mut self, response: &mut SheetResponse) {
        self.shade.set_visible(self.detents.should_show_shade());
        response.command(HostCommand::SetShadeAlpha(self.shade.alpha()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Vec2;
    use undersheet_detent::{Detent, DetentHeight};
    use undersheet_stretch::AnimationTarget;

    fn three_level_detents() -> DetentSet {
        DetentSet::new([
            Detent::bottom(DetentHeight::Absolute(100.0)),
            Detent::upper(DetentHeight::Absolute(500.0)),
            Detent::top(DetentHeight::Absolute(900.0)),
        ])
    }

    fn landscape_detents() -> DetentSet {
        DetentSet::new([
            Detent::bottom(DetentHeight::Absolute(80.0)),
            Detent::top(DetentHeight::Absolute(400.0)),
        ])
    }

    fn container(shade_trigger: Option<DetentLevel>) -> SheetContainer {
        SheetContainer::new(SheetConfig {
            portrait_detents: three_level_detents(),
            landscape_detents: landscape_detents(),
            portrait_shade_trigger: shade_trigger,
            landscape_shade_trigger: None,
            shade_tone: ShadeTone::Normal,
            allow_slide_down: true,
            orientation: Orientation::Portrait,
        })
    }

    fn sample(translation_y: f64, velocity_y: f64) -> DragSample {
        DragSample::new(Vec2::new(0.0, translation_y), Vec2::new(0.0, velocity_y))
    }

    fn animate_target(response: &SheetResponse) -> Option<AnimationTarget> {
        response.commands.iter().find_map(|c| match c {
            HostCommand::Animate(request) => Some(request.target),
            _ => None,
        })
    }

    fn shade_alpha(response: &SheetResponse) -> Option<f64> {
        response.commands.iter().find_map(|c| match c {
            HostCommand::SetShadeAlpha(alpha) => Some(*alpha),
            _ => None,
        })
    }

    #[test]
    fn layout_without_a_bottom_inset_adds_a_margin() {
        let mut sheet = container(None);
        let response = sheet.set_layout(900.0, 0.0);
        assert_eq!(
            response.commands.as_slice(),
            &[HostCommand::SetHeight(110.0), HostCommand::SetMargin(10.0)]
        );
    }

    #[test]
    fn layout_with_a_bottom_inset_sits_flush() {
        let mut sheet = container(None);
        let response = sheet.set_layout(900.0, 34.0);
        assert_eq!(
            response.commands.as_slice(),
            &[HostCommand::SetHeight(100.0), HostCommand::SetMargin(0.0)]
        );
    }

    #[test]
    fn drag_stretches_then_flick_settles_one_detent_up() {
        let mut sheet = container(None);
        sheet.set_layout(900.0, 34.0);
        sheet.stretch_to(DetentLevel::Upper);
        sheet.animation_finished();

        sheet.handle_container_pan(GesturePhase::Began, DragSample::ZERO);
        let response = sheet.handle_container_pan(GesturePhase::Changed, sample(-10.0, -400.0));
        assert!(response.commands.contains(&HostCommand::SetHeight(508.0)));
        assert!(response.events.contains(&SheetEvent::DidStretch(508.0)));

        let response = sheet.handle_container_pan(GesturePhase::Ended, sample(0.0, -600.0));
        assert!(
            response
                .events
                .contains(&SheetEvent::DidChangeDetentAnimation(DetentLevel::Top))
        );
        assert_eq!(animate_target(&response), Some(AnimationTarget::Height(900.0)));
        assert_eq!(sheet.current_level(), DetentLevel::Top);

        let response = sheet.animation_finished();
        assert!(
            response
                .events
                .contains(&SheetEvent::DidFinishDetentAnimation(DetentLevel::Top))
        );
        assert!(!sheet.is_animating());
    }

    #[test]
    fn detent_hint_fires_only_when_the_nearest_detent_changes() {
        let mut sheet = container(None);
        sheet.set_layout(900.0, 34.0);
        sheet.stretch_to(DetentLevel::Upper);
        sheet.animation_finished();

        sheet.handle_container_pan(GesturePhase::Began, DragSample::ZERO);
        // Crossing the midpoint between Upper and Top (700).
        let response = sheet.handle_container_pan(GesturePhase::Changed, sample(-275.0, -300.0));
        assert!(response.events.contains(&SheetEvent::DidChangeDetent(DetentLevel::Top)));

        // Still nearest Top: no repeat.
        let response = sheet.handle_container_pan(GesturePhase::Changed, sample(-5.0, -300.0));
        assert!(
            !response
                .events
                .iter()
                .any(|e| matches!(e, SheetEvent::DidChangeDetent(_)))
        );

        // Dropping back under the midpoint hints Upper again.
        let response = sheet.handle_container_pan(GesturePhase::Changed, sample(50.0, 300.0));
        assert!(response.events.contains(&SheetEvent::DidChangeDetent(DetentLevel::Upper)));
    }

    #[test]
    fn scroll_hand_off_stretches_the_sheet_and_settles() {
        let mut sheet = container(None);
        sheet.set_layout(900.0, 34.0);
        sheet.stretch_to(DetentLevel::Top);
        sheet.animation_finished();
        // At maximum height, content scrolling wins precedence.
        assert!(!sheet.container_requires_scroll_failure());

        let response = sheet.handle_scroll_pan(GesturePhase::Began, DragSample::ZERO, 120.0);
        assert_eq!(
            response.commands.as_slice(),
            &[HostCommand::SetDismissLock(true)]
        );

        // Content reaches its top edge while dragging down: hand-off.
        let response = sheet.handle_scroll_pan(GesturePhase::Changed, sample(10.0, 300.0), 0.0);
        assert!(response.commands.contains(&HostCommand::ZeroScrollOffset));
        assert!(response.commands.contains(&HostCommand::SetScrollBounce(false)));
        // The hand-off sample's translation is consumed; height holds.
        assert!(response.commands.contains(&HostCommand::SetHeight(900.0)));

        let response = sheet.handle_scroll_pan(GesturePhase::Changed, sample(10.0, 300.0), 0.0);
        assert!(response.commands.contains(&HostCommand::SetHeight(892.0)));

        let response = sheet.handle_scroll_pan(GesturePhase::Ended, sample(0.0, 600.0), 0.0);
        assert!(response.commands.contains(&HostCommand::SetDismissLock(false)));
        assert!(response.commands.contains(&HostCommand::SetScrollBounce(true)));
        assert!(
            response
                .events
                .contains(&SheetEvent::DidChangeDetentAnimation(DetentLevel::Upper))
        );
        // Off the maximum height, the sheet's pan takes priority again.
        assert!(sheet.container_requires_scroll_failure());
    }

    #[test]
    fn deep_slide_release_dismisses_the_sheet() {
        let mut sheet = container(None);
        sheet.set_layout(900.0, 34.0);

        sheet.handle_container_pan(GesturePhase::Began, DragSample::ZERO);
        for _ in 0..6 {
            let response = sheet.handle_container_pan(GesturePhase::Changed, sample(10.0, 300.0));
            // Slide mode moves the margin, not the height.
            assert!(
                response
                    .commands
                    .iter()
                    .any(|c| matches!(c, HostCommand::SetMargin(_)))
            );
            assert!(response.events.is_empty());
        }

        let response = sheet.handle_container_pan(GesturePhase::Ended, sample(0.0, 300.0));
        assert_eq!(shade_alpha(&response), Some(0.0));
        assert_eq!(
            animate_target(&response),
            Some(AnimationTarget::MarginFromBottom(-150.0))
        );

        let response = sheet.animation_finished();
        assert!(response.commands.contains(&HostCommand::SetHidden(true)));
        assert!(response.events.contains(&SheetEvent::DidDisappear));
        assert!(sheet.is_hidden());
    }

    #[test]
    fn appear_runs_margin_then_height_then_reports() {
        let mut sheet = container(None);
        sheet.set_layout(900.0, 34.0);
        sheet.disappear();
        sheet.animation_finished();

        let response = sheet.appear();
        assert!(response.commands.contains(&HostCommand::SetHidden(false)));
        assert_eq!(
            animate_target(&response),
            Some(AnimationTarget::MarginFromBottom(0.0))
        );

        let response = sheet.animation_finished();
        assert_eq!(animate_target(&response), Some(AnimationTarget::Height(100.0)));

        let response = sheet.animation_finished();
        assert!(response.events.contains(&SheetEvent::DidAppear));
        assert!(!sheet.is_hidden());
    }

    #[test]
    fn orientation_swap_reissues_the_configuration() {
        let mut sheet = container(None);
        sheet.set_layout(900.0, 34.0);
        sheet.stretch_to(DetentLevel::Upper);
        sheet.animation_finished();

        let response = sheet.set_orientation(Orientation::Landscape);
        // The landscape set rests at its own first detent.
        assert_eq!(sheet.height(), 80.0);
        assert_eq!(
            animate_target(&response),
            Some(AnimationTarget::MarginFromBottom(0.0))
        );
        assert_eq!(sheet.orientation(), Orientation::Landscape);

        // Same-orientation calls do nothing.
        assert!(sheet.set_orientation(Orientation::Landscape).is_empty());
    }

    #[test]
    fn shade_fades_with_the_drag_and_snaps_on_settle() {
        let mut sheet = container(Some(DetentLevel::Top));
        sheet.set_layout(900.0, 34.0);
        let response = sheet.stretch_to(DetentLevel::Top);
        assert_eq!(shade_alpha(&response), Some(0.4));

        sheet.animation_finished();
        sheet.handle_container_pan(GesturePhase::Began, DragSample::ZERO);
        let response = sheet.handle_container_pan(GesturePhase::Changed, sample(10.0, 300.0));
        let alpha = shade_alpha(&response).unwrap();
        assert!(alpha < 0.4 && alpha > 0.39);

        // A slow release from 892 settles back on Top; the shade snaps on.
        let response = sheet.handle_container_pan(GesturePhase::Ended, sample(0.0, 100.0));
        assert_eq!(shade_alpha(&response), Some(0.4));
    }

    #[test]
    fn locked_sheet_ignores_raise_and_lower() {
        let mut sheet = container(None);
        sheet.set_layout(900.0, 34.0);
        sheet.set_locked(true);
        assert!(sheet.raise().is_empty());
        assert!(sheet.lower().is_empty());
        assert_eq!(sheet.current_level(), DetentLevel::Bottom);
    }

    #[test]
    fn raise_and_lower_step_through_registered_detents() {
        let mut sheet = container(None);
        sheet.set_layout(900.0, 34.0);

        let response = sheet.raise();
        assert!(
            response
                .events
                .contains(&SheetEvent::DidChangeDetentAnimation(DetentLevel::Upper))
        );
        assert_eq!(animate_target(&response), Some(AnimationTarget::Height(500.0)));
        sheet.animation_finished();

        // Lowering from the bottom is a no-op.
        sheet.lower();
        sheet.animation_finished();
        assert!(sheet.lower().is_empty());
    }

    #[test]
    fn stretch_to_an_unregistered_level_is_a_no_op() {
        let mut sheet = container(None);
        sheet.set_layout(900.0, 34.0);
        assert!(sheet.stretch_to(DetentLevel::Lower).is_empty());
        assert_eq!(sheet.current_level(), DetentLevel::Bottom);
    }

    #[test]
    fn animation_finished_without_a_transition_is_empty() {
        let mut sheet = container(None);
        assert!(sheet.animation_finished().is_empty());
    }
}
