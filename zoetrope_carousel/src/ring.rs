// Copyright 2026 the Zoetrope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pure conversions between virtual and actual positions.

/// The `(offset, item_count)` pair defining the current actual/virtual mapping.
///
/// A calibration is created whole (either [`Calibration::EMPTY`] or via
/// [`Calibration::anchored`]) and replaced whole on every recalibration; it is
/// never patched field by field. Constructors maintain the invariants:
///
/// - `item_count == 0` implies `offset == 0` (the degenerate, empty mapping),
/// - otherwise `offset` is in `[0, item_count)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Calibration {
    offset: usize,
    item_count: usize,
}

impl Calibration {
    /// The degenerate calibration for an empty item list.
    pub const EMPTY: Self = Self {
        offset: 0,
        item_count: 0,
    };

    /// Creates the calibration that maps `virtual_anchor` onto `actual`.
    ///
    /// This is the fixed-point solve used during recalibration: the returned
    /// calibration satisfies
    /// `to_actual(virtual_anchor, &cal) == Some(actual % item_count)`.
    ///
    /// An `actual` at or beyond `item_count` is clamped into range via modulo
    /// (the anchor item may have been removed by a shrink; the surviving index
    /// is used instead). An `item_count` of zero yields [`Calibration::EMPTY`].
    #[must_use]
    pub fn anchored(actual: usize, virtual_anchor: i64, item_count: usize) -> Self {
        if item_count == 0 {
            return Self::EMPTY;
        }
        Self {
            offset: anchor_offset(actual, virtual_anchor, item_count),
            item_count,
        }
    }

    /// Reassembles a calibration from raw parts.
    ///
    /// `offset` is normalized into `[0, item_count)`; a zero `item_count`
    /// yields [`Calibration::EMPTY`]. Useful for hosts restoring a saved
    /// mapping.
    #[must_use]
    pub const fn from_parts(offset: usize, item_count: usize) -> Self {
        if item_count == 0 {
            return Self::EMPTY;
        }
        Self {
            offset: offset % item_count,
            item_count,
        }
    }

    /// Returns the offset between the zero-offset ring position and the
    /// actual index.
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.offset
    }

    /// Returns the item count this calibration was computed for.
    #[must_use]
    pub const fn item_count(&self) -> usize {
        self.item_count
    }

    /// Returns `true` if this is the degenerate empty calibration.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.item_count == 0
    }

    /// Resolves a virtual position to an actual index under this calibration.
    ///
    /// See [`to_actual`].
    #[must_use]
    pub const fn to_actual(&self, virtual_position: i64) -> Option<usize> {
        to_actual(virtual_position, self)
    }
}

impl Default for Calibration {
    fn default() -> Self {
        Self::EMPTY
    }
}

/// Resolves a virtual position to an actual index under `calibration`.
///
/// Returns `None` when the calibration is empty (no items). Otherwise the
/// result is always in `[0, item_count)`: the virtual position is reduced
/// with a Euclidean remainder, so arbitrarily negative inputs normalize into
/// range instead of being rejected, and the calibration offset is subtracted
/// on the ring.
///
/// The mapping is periodic in `item_count`:
/// `to_actual(v, c) == to_actual(v + k * item_count, c)` for any `k`.
#[must_use]
pub const fn to_actual(virtual_position: i64, calibration: &Calibration) -> Option<usize> {
    let count = calibration.item_count;
    if count == 0 {
        return None;
    }
    #[allow(
        clippy::cast_possible_truncation,
        reason = "rem_euclid by a usize-ranged modulus lands in [0, count)"
    )]
    let raw = virtual_position.rem_euclid(count as i64) as usize;
    // `offset < count` by construction, so the sum stays below `2 * count`.
    Some((raw + count - calibration.offset) % count)
}

/// Solves for the offset that maps `virtual_anchor` onto `actual`.
///
/// Returns `offset` such that
/// `to_actual(virtual_anchor, &Calibration { offset, item_count }) == Some(actual)`.
/// `actual` is clamped into `[0, item_count)` via modulo first.
///
/// `item_count` must be non-zero; callers branch on the empty case before
/// solving (debug-asserted, returns `0` in release builds).
#[must_use]
pub const fn anchor_offset(actual: usize, virtual_anchor: i64, item_count: usize) -> usize {
    debug_assert!(
        item_count > 0,
        "anchor_offset requires a non-empty item list"
    );
    if item_count == 0 {
        return 0;
    }
    #[allow(
        clippy::cast_possible_truncation,
        reason = "rem_euclid by a usize-ranged modulus lands in [0, count)"
    )]
    let raw = virtual_anchor.rem_euclid(item_count as i64) as usize;
    let actual = actual % item_count;
    (raw + item_count - actual) % item_count
}
