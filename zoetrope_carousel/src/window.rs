// Copyright 2026 the Zoetrope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sizing policy for the virtual coordinate space.

use core::num::NonZeroI64;

/// Default size of the virtual space under [`WindowPolicy::Fixed`].
pub const DEFAULT_FIXED_WINDOW: NonZeroI64 = NonZeroI64::new(100_000).unwrap();

/// Default multiplier under [`WindowPolicy::Proportional`].
pub const DEFAULT_PROPORTIONAL_FACTOR: NonZeroI64 = NonZeroI64::new(500).unwrap();

/// How large the virtual coordinate space is, relative to the item list.
///
/// The paging widget scrolls through `[0, space_size)`; the space must be big
/// enough that no single interactive session plausibly exhausts it in either
/// direction from the initial target. Two policies are supported:
///
/// - [`WindowPolicy::Fixed`]: a large constant, independent of the item
///   count. Simplest; an extremely long session on a very small list could in
///   principle reach an edge.
/// - [`WindowPolicy::Proportional`]: a constant multiplier times the item
///   count. Scales with data size; recomputed at every recalibration since
///   the count can change.
///
/// Whichever policy is chosen, [`WindowPolicy::space_size`] is re-evaluated
/// on every data change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowPolicy {
    /// A constant virtual space size.
    Fixed(NonZeroI64),
    /// `multiplier * item_count` slots, recomputed per recalibration.
    Proportional(NonZeroI64),
}

impl WindowPolicy {
    /// Returns the size of the virtual space for `item_count` items.
    ///
    /// An empty list has no virtual space: the widget should report zero
    /// slots and show its empty state.
    #[must_use]
    pub const fn space_size(&self, item_count: usize) -> i64 {
        if item_count == 0 {
            return 0;
        }
        match self {
            Self::Fixed(size) => size.get(),
            Self::Proportional(factor) => factor.get().saturating_mul(item_count as i64),
        }
    }

    /// Returns the virtual position a fresh calibration should land on.
    ///
    /// The center of the space, leaving equal swipe margin on both sides.
    #[must_use]
    pub const fn initial_target(&self, item_count: usize) -> i64 {
        self.space_size(item_count) / 2
    }
}

impl Default for WindowPolicy {
    fn default() -> Self {
        Self::Fixed(DEFAULT_FIXED_WINDOW)
    }
}
