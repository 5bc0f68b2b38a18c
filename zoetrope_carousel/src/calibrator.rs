// Copyright 2026 the Zoetrope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Recalibration: keeping the actual/virtual mapping stable across data changes.

use crate::ring::Calibration;
use crate::window::WindowPolicy;

/// Outcome of a recalibration.
///
/// The host applies `target_virtual` to the widget as a non-animated jump
/// (no intermediate frame) before anything else happens; `calibration` is the
/// mapping that makes that position show the anchored item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Recalibration {
    /// The replacement calibration.
    pub calibration: Calibration,
    /// The virtual position the widget must now sit on.
    pub target_virtual: i64,
}

/// Owns the current [`Calibration`] and the recalibration algorithm.
///
/// A calibrator is in one of two states: *uninitialized* (no data yet, or the
/// list emptied; the calibration is [`Calibration::EMPTY`]) or *calibrated*
/// for a specific item count. Every data change replaces the calibration
/// wholesale via [`Calibrator::recalibrate`].
///
/// The calibrator is synchronous and single-threaded; the host must apply
/// each [`Recalibration::target_virtual`] to its widget before triggering the
/// next recalibration, otherwise the anchor passed to that next call would
/// describe a position the widget never reached.
#[derive(Debug, Clone, Copy)]
pub struct Calibrator {
    policy: WindowPolicy,
    calibration: Calibration,
}

impl Calibrator {
    /// Creates an uninitialized calibrator with the given sizing policy.
    #[must_use]
    pub const fn new(policy: WindowPolicy) -> Self {
        Self {
            policy,
            calibration: Calibration::EMPTY,
        }
    }

    /// Returns the sizing policy.
    #[must_use]
    pub const fn policy(&self) -> WindowPolicy {
        self.policy
    }

    /// Returns the current calibration ([`Calibration::EMPTY`] while
    /// uninitialized).
    #[must_use]
    pub const fn calibration(&self) -> Calibration {
        self.calibration
    }

    /// Returns `true` once a non-empty data set has been calibrated.
    #[must_use]
    pub const fn is_calibrated(&self) -> bool {
        !self.calibration.is_empty()
    }

    /// Resolves a virtual position under the current calibration.
    #[must_use]
    pub const fn resolve(&self, virtual_position: i64) -> Option<usize> {
        self.calibration.to_actual(virtual_position)
    }

    /// Replaces the calibration for a changed item count.
    ///
    /// `previous_actual` and `previous_virtual` are the positions the widget
    /// was showing before the data changed (`None` and `0` on first load).
    /// The returned target is chosen so the displayed item does not visibly
    /// change:
    ///
    /// - `new_item_count == 0`: back to uninitialized; the host shows its
    ///   empty state.
    /// - First calibration (or no previously valid item): land in the center
    ///   of the virtual space, far from both ends, anchored so the center
    ///   resolves to `previous_actual` (default `0`).
    /// - Widget already deep in virtual space (`previous_virtual` at or past
    ///   `new_item_count`): the widget does not move; only the offset is
    ///   re-solved so `previous_virtual` still resolves to `previous_actual`.
    /// - Widget still shallow: re-anchor at the center, as on first load.
    ///
    /// A `previous_actual` that no longer exists after a shrink is clamped
    /// into range via modulo, anchoring on the surviving index. Hosts that
    /// need to keep following a *specific item* across reorders must map the
    /// item to its new index themselves before calling this.
    ///
    /// Never panics for any `new_item_count`.
    pub fn recalibrate(
        &mut self,
        previous_actual: Option<usize>,
        previous_virtual: i64,
        new_item_count: usize,
    ) -> Recalibration {
        if new_item_count == 0 {
            #[cfg(feature = "tracing")]
            tracing::debug!("recalibrate: no data, dropping to uninitialized");
            self.calibration = Calibration::EMPTY;
            return Recalibration {
                calibration: Calibration::EMPTY,
                target_virtual: 0,
            };
        }

        let anchor_actual = previous_actual.map_or(0, |a| a % new_item_count);
        let keep_position = self.is_calibrated()
            && previous_actual.is_some()
            && previous_virtual >= new_item_count as i64;
        let target_virtual = if keep_position {
            previous_virtual
        } else {
            self.policy.initial_target(new_item_count)
        };

        #[cfg(feature = "tracing")]
        tracing::debug!(
            anchor_actual,
            previous_virtual,
            target_virtual,
            new_item_count,
            moved = !keep_position,
            "recalibrate"
        );

        let calibration = Calibration::anchored(anchor_actual, target_virtual, new_item_count);
        self.calibration = calibration;
        Recalibration {
            calibration,
            target_virtual,
        }
    }
}

impl Default for Calibrator {
    fn default() -> Self {
        Self::new(WindowPolicy::default())
    }
}
