// Copyright 2026 the Undersheet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The host-facing command and event vocabularies.

use smallvec::SmallVec;

use undersheet_detent::DetentLevel;
use undersheet_stretch::AnimationRequest;

/// An instruction for the host to apply to its view hierarchy.
///
/// Commands are ordered; the host applies each batch front to back. The
/// numeric commands (`SetHeight`, `SetMargin`, `SetShadeAlpha`) mirror the
/// container's synchronous state onto layout constraints, while [`Animate`]
/// asks the host to run one animation and report back through
/// [`SheetContainer::animation_finished`].
///
/// [`Animate`]: HostCommand::Animate
/// [`SheetContainer::animation_finished`]: crate::SheetContainer::animation_finished
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum HostCommand {
    /// Set the sheet's height constraint, without animation.
    SetHeight(f64),
    /// Set the sheet's bottom-margin constraint, without animation.
    SetMargin(f64),
    /// Set the background shade's opacity.
    SetShadeAlpha(f64),
    /// Hide or show the sheet view.
    SetHidden(bool),
    /// Run one animation; call `animation_finished` on completion.
    Animate(AnimationRequest),
    /// Pin the nested scroll view's vertical content offset to zero.
    ZeroScrollOffset,
    /// Enable or disable the nested scroll view's edge bounce.
    SetScrollBounce(bool),
    /// Hold or release the hosting surface's own interactive dismissal.
    SetDismissLock(bool),
}

/// A notification about something the sheet did, for the host to observe.
///
/// Events carry no obligation; hosts that do not care may drop them.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SheetEvent {
    /// The sheet's height changed under an active drag.
    DidStretch(f64),
    /// Mid-drag: the detent the sheet would settle on changed.
    DidChangeDetent(DetentLevel),
    /// A settle animation toward this detent started.
    DidChangeDetentAnimation(DetentLevel),
    /// The settle animation toward this detent completed.
    DidFinishDetentAnimation(DetentLevel),
    /// The sheet finished appearing.
    DidAppear,
    /// The sheet finished disappearing.
    DidDisappear,
}

/// The commands and events produced by one container entry point.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SheetResponse {
    /// Instructions for the host, in application order.
    pub commands: SmallVec<[HostCommand; 4]>,
    /// Notifications for the host's observers.
    pub events: SmallVec<[SheetEvent; 2]>,
}

impl SheetResponse {
    /// An empty response.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true when there is nothing for the host to do or observe.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty() && self.events.is_empty()
    }

    pub(crate) fn command(&mut self, command: HostCommand) {
        self.commands.push(command);
    }

    pub(crate) fn event(&mut self, event: SheetEvent) {
        self.events.push(event);
    }
}
