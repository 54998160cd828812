// Copyright 2026 the Undersheet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A non-empty collection of registered detents plus the current one.

use smallvec::SmallVec;

use crate::{Detent, DetentLevel};

/// The registered detents of one sheet configuration plus a `current` pointer.
///
/// A set holds at most four detents (one per [`DetentLevel`]), so it is
/// stored inline. Neighbor queries ([`DetentSet::above`], [`DetentSet::below`])
/// derive purely from which levels are registered: missing levels are skipped,
/// never synthesized. "Above `Bottom`" is `Lower` if registered, else `Upper`
/// if registered, else `Top` if registered, else nothing.
///
/// # Panics
///
/// Construction panics on an empty iterator; there is no sensible default
/// detent to rest at.
#[derive(Clone, Debug)]
pub struct DetentSet {
    registered: SmallVec<[Detent; 4]>,
    current: Detent,
}

impl DetentSet {
    /// Creates a set from the given detents, with `current` at the first one.
    ///
    /// If a level appears more than once, the first occurrence wins.
    ///
    /// # Panics
    ///
    /// Panics if `registered` is empty.
    #[must_use]
    pub fn new(registered: impl IntoIterator<Item = Detent>) -> Self {
        let mut detents: SmallVec<[Detent; 4]> = SmallVec::new();
        for detent in registered {
            if !detents.iter().any(|d| d.level() == detent.level()) {
                detents.push(detent);
            }
        }
        assert!(
            !detents.is_empty(),
            "a DetentSet needs at least one registered detent"
        );
        let current = detents[0];
        Self {
            registered: detents,
            current,
        }
    }

    /// Returns the registered detents in registration order.
    #[must_use]
    pub fn registered(&self) -> &[Detent] {
        &self.registered
    }

    /// Returns the current detent.
    #[must_use]
    pub const fn current(&self) -> Detent {
        self.current
    }

    /// Moves `current` to the registered detent at `level`, if there is one.
    pub fn set_current(&mut self, level: DetentLevel) {
        if let Some(detent) = self.find(level) {
            self.current = detent;
        }
    }

    /// Returns the registered detent at `level`, if any.
    #[must_use]
    pub fn find(&self, level: DetentLevel) -> Option<Detent> {
        self.registered.iter().copied().find(|d| d.level() == level)
    }

    /// Returns the topmost registered detent.
    #[must_use]
    pub fn top(&self) -> Detent {
        // The set is never empty.
        *self
            .registered
            .iter()
            .max_by_key(|d| d.level())
            .unwrap_or(&self.current)
    }

    /// Returns the bottommost registered detent.
    #[must_use]
    pub fn bottom(&self) -> Detent {
        *self
            .registered
            .iter()
            .min_by_key(|d| d.level())
            .unwrap_or(&self.current)
    }

    /// Returns the nearest registered detent strictly above `level`, if any.
    #[must_use]
    pub fn above(&self, level: DetentLevel) -> Option<Detent> {
        self.registered
            .iter()
            .copied()
            .filter(|d| d.level() > level)
            .min_by_key(Detent::level)
    }

    /// Returns the nearest registered detent strictly below `level`, if any.
    #[must_use]
    pub fn below(&self, level: DetentLevel) -> Option<Detent> {
        self.registered
            .iter()
            .copied()
            .filter(|d| d.level() < level)
            .max_by_key(Detent::level)
    }

    /// Returns the registered detent just above the current one, if any.
    #[must_use]
    pub fn above_current(&self) -> Option<Detent> {
        self.above(self.current.level())
    }

    /// Returns the registered detent just below the current one, if any.
    #[must_use]
    pub fn below_current(&self) -> Option<Detent> {
        self.below(self.current.level())
    }

    /// Moves `current` one registered step up; no-op at the top.
    pub fn raise(&mut self) {
        self.current = self.above_current().unwrap_or(self.current);
    }

    /// Moves `current` one registered step down; no-op at the bottom.
    pub fn lower(&mut self) {
        self.current = self.below_current().unwrap_or(self.current);
    }
}
