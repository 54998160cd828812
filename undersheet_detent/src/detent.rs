// Copyright 2026 the Undersheet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Detent value types: levels and configured heights.

use core::cmp::Ordering;

/// One of the four named rest levels, ordered bottom to top.
///
/// The discriminant order gives `Bottom < Lower < Upper < Top`, which is the
/// total order every neighbor and settlement query relies on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DetentLevel {
    /// The lowest rest level.
    Bottom,
    /// Between `Bottom` and `Upper`.
    Lower,
    /// Between `Lower` and `Top`.
    Upper,
    /// The highest rest level.
    Top,
}

/// How a detent's height is expressed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DetentHeight {
    /// A height in the host's logical units.
    Absolute(f64),
    /// A fraction of a reference maximum height, resolved at layout time.
    Ratio(f64),
}

impl DetentHeight {
    /// Resolves this height against a reference maximum.
    #[must_use]
    pub fn resolve(self, reference_max: f64) -> f64 {
        match self {
            Self::Absolute(height) => height,
            Self::Ratio(ratio) => ratio * reference_max,
        }
    }
}

/// A named rest level paired with its configured height.
///
/// Equality and ordering consider only [`DetentLevel`]: two `Upper` detents
/// with different heights compare equal. This lets a [`DetentSet`] lookup by
/// level find the registered instance, the one carrying the height that
/// actually applies.
///
/// [`DetentSet`]: crate::DetentSet
#[derive(Clone, Copy, Debug)]
pub struct Detent {
    level: DetentLevel,
    height: DetentHeight,
}

impl Detent {
    /// Creates a detent at the given level.
    #[must_use]
    pub const fn new(level: DetentLevel, height: DetentHeight) -> Self {
        Self { level, height }
    }

    /// Creates a `Top` detent.
    #[must_use]
    pub const fn top(height: DetentHeight) -> Self {
        Self::new(DetentLevel::Top, height)
    }

    /// Creates an `Upper` detent.
    #[must_use]
    pub const fn upper(height: DetentHeight) -> Self {
        Self::new(DetentLevel::Upper, height)
    }

    /// Creates a `Lower` detent.
    #[must_use]
    pub const fn lower(height: DetentHeight) -> Self {
        Self::new(DetentLevel::Lower, height)
    }

    /// Creates a `Bottom` detent.
    #[must_use]
    pub const fn bottom(height: DetentHeight) -> Self {
        Self::new(DetentLevel::Bottom, height)
    }

    /// Returns this detent's level.
    #[must_use]
    pub const fn level(&self) -> DetentLevel {
        self.level
    }

    /// Returns this detent's configured height expression.
    #[must_use]
    pub const fn height(&self) -> DetentHeight {
        self.height
    }

    /// Resolves this detent's height against a reference maximum.
    #[must_use]
    pub fn resolved(&self, reference_max: f64) -> f64 {
        self.height.resolve(reference_max)
    }
}

impl PartialEq for Detent {
    fn eq(&self, other: &Self) -> bool {
        self.level == other.level
    }
}

impl Eq for Detent {}

impl core::hash::Hash for Detent {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        self.level.hash(state);
    }
}

impl PartialOrd for Detent {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Detent {
    fn cmp(&self, other: &Self) -> Ordering {
        self.level.cmp(&other.level)
    }
}
