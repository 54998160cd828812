// Copyright 2026 the Undersheet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Raw pan-gesture inputs shared across the Undersheet crates.

use kurbo::Vec2;

/// Phase of a pan gesture, as reported by the host's gesture source.
///
/// Hosts translate their platform's recognizer states into these three
/// phases. Anything else (cancellation, possible/failed states) should not be
/// forwarded; the engine treats a stream as `Began`, zero or more `Changed`,
/// then `Ended`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GesturePhase {
    /// The drag stream started.
    Began,
    /// A continuous drag sample arrived.
    Changed,
    /// The drag stream ended (finger lifted).
    Ended,
}

/// One continuous drag sample.
///
/// `translation` is the movement *since the previous sample* (hosts that get
/// cumulative translations reset them after each read); `velocity` is the
/// instantaneous velocity in units per second. Only the vertical components
/// are semantically used, but both axes are carried so hosts can forward
/// their native gesture payloads unchanged.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragSample {
    /// Movement since the previous sample.
    pub translation: Vec2,
    /// Instantaneous velocity, units per second.
    pub velocity: Vec2,
}

impl DragSample {
    /// A sample with no translation and no velocity.
    pub const ZERO: Self = Self {
        translation: Vec2::ZERO,
        velocity: Vec2::ZERO,
    };

    /// Creates a sample from a translation delta and a velocity.
    #[must_use]
    pub const fn new(translation: Vec2, velocity: Vec2) -> Self {
        Self {
            translation,
            velocity,
        }
    }

    /// Returns this sample with its translation zeroed, keeping velocity.
    ///
    /// Used at the scroll-to-stretch hand-off, where the translation that
    /// accumulated while the content was scrolling must not be replayed
    /// against the sheet.
    #[must_use]
    pub const fn consumed(self) -> Self {
        Self {
            translation: Vec2::ZERO,
            velocity: self.velocity,
        }
    }
}
