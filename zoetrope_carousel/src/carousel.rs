// Copyright 2026 the Zoetrope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A small controller that owns the calibrator, gate, and widget-side state.

use smallvec::SmallVec;

use crate::calibrator::Calibrator;
use crate::gate::SwipeGate;
use crate::ring::Calibration;
use crate::window::WindowPolicy;

/// Inline capacity for the instantiated-slot registry. Paging widgets keep a
/// handful of neighbor pages alive around the current one.
const INLINE_SLOTS: usize = 8;

/// Content refresh for one instantiated page slot after a data change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRefresh {
    /// The slot's virtual position (unchanged by recalibration).
    pub virtual_position: i64,
    /// The item the slot must now display, or `None` if the list emptied.
    pub actual: Option<usize>,
}

/// Outcome of [`Carousel::data_changed`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataChange {
    /// The virtual position the widget must now sit on.
    pub target_virtual: i64,
    /// `true` if the widget must perform a silent (non-animated) jump to
    /// `target_virtual`; `false` if it is already there.
    pub jumped: bool,
    /// Fresh content for every registered page slot, resolved under the new
    /// calibration. Hosts push these synchronously, in order, before the
    /// next frame.
    pub refreshes: SmallVec<[PageRefresh; INLINE_SLOTS]>,
}

/// Controller for an endless carousel over a finite, mutable item list.
///
/// This type:
/// - owns a [`Calibrator`], a [`SwipeGate`], and the widget's current
///   virtual position,
/// - tracks which page slots the widget currently has instantiated,
/// - turns data-change notifications into a silent-jump target plus a
///   synchronous refresh plan.
///
/// It does *not* render, own gesture input, or decide when data changes.
/// Host widgets are expected to wrap one of these, constructed at attach
/// time and dropped at detach time, and to serialize all calls on their
/// event thread.
#[derive(Debug, Clone)]
pub struct Carousel {
    calibrator: Calibrator,
    gate: SwipeGate,
    item_count: usize,
    current_virtual: i64,
    slots: SmallVec<[i64; INLINE_SLOTS]>,
}

impl Carousel {
    /// Creates an empty carousel with the given sizing policy.
    #[must_use]
    pub fn new(policy: WindowPolicy) -> Self {
        Self {
            calibrator: Calibrator::new(policy),
            gate: SwipeGate::new(),
            item_count: 0,
            current_virtual: 0,
            slots: SmallVec::new(),
        }
    }

    /// Returns the number of items in the backing list, as of the last
    /// [`Carousel::data_changed`].
    #[must_use]
    pub const fn item_count(&self) -> usize {
        self.item_count
    }

    /// Returns the slot count the paging widget should report: zero while
    /// empty, otherwise the virtual space size for the current item count.
    #[must_use]
    pub const fn page_count(&self) -> i64 {
        self.calibrator.policy().space_size(self.item_count)
    }

    /// Returns the widget's current virtual position as mirrored here.
    #[must_use]
    pub const fn current_virtual(&self) -> i64 {
        self.current_virtual
    }

    /// Records that the widget settled on a new virtual position (a swipe
    /// completed or the host moved programmatically).
    pub fn set_current_virtual(&mut self, virtual_position: i64) {
        self.current_virtual = virtual_position;
    }

    /// Returns the item the widget is currently showing, if any.
    #[must_use]
    pub const fn current_actual(&self) -> Option<usize> {
        self.calibrator.resolve(self.current_virtual)
    }

    /// Resolves an arbitrary virtual position under the live calibration.
    #[must_use]
    pub const fn resolve(&self, virtual_position: i64) -> Option<usize> {
        self.calibrator.resolve(virtual_position)
    }

    /// Returns the live calibration (empty until the first data load).
    #[must_use]
    pub const fn calibration(&self) -> Calibration {
        self.calibrator.calibration()
    }

    /// Returns `true` if a drag gesture should be allowed to begin right
    /// now. Evaluated against the live item count on every call.
    #[must_use]
    pub const fn can_swipe(&self) -> bool {
        self.gate.allows(self.item_count)
    }

    /// Returns the swipe gate for configuration.
    pub fn gate_mut(&mut self) -> &mut SwipeGate {
        &mut self.gate
    }

    /// Records that the widget instantiated a page at `virtual_position`.
    ///
    /// Re-attaching an already-registered slot moves it to the back of the
    /// refresh order.
    pub fn page_attached(&mut self, virtual_position: i64) {
        self.page_detached(virtual_position);
        self.slots.push(virtual_position);
    }

    /// Records that the widget destroyed the page at `virtual_position`.
    pub fn page_detached(&mut self, virtual_position: i64) {
        self.slots.retain(|slot| *slot != virtual_position);
    }

    /// Returns the registered page slots in refresh order.
    #[must_use]
    pub fn attached_pages(&self) -> &[i64] {
        &self.slots
    }

    /// Recalibrates for a new item count.
    ///
    /// Called whenever the data provider signals a change (including the
    /// first load). The controller anchors on what the widget is currently
    /// showing, replaces the calibration, mirrors the jump target, and
    /// returns fresh content for every registered slot. The host must apply
    /// [`DataChange::target_virtual`] (when `jumped`) and push the refreshes
    /// before handing control back to the user; there is no asynchronous
    /// dispatch behind this call.
    pub fn data_changed(&mut self, new_item_count: usize) -> DataChange {
        let previous_actual = self.current_actual();
        let out = self
            .calibrator
            .recalibrate(previous_actual, self.current_virtual, new_item_count);

        self.item_count = new_item_count;
        let jumped = self.current_virtual != out.target_virtual;
        self.current_virtual = out.target_virtual;

        let refreshes = self
            .slots
            .iter()
            .map(|&slot| PageRefresh {
                virtual_position: slot,
                actual: self.calibrator.resolve(slot),
            })
            .collect();

        #[cfg(feature = "tracing")]
        tracing::debug!(
            new_item_count,
            target_virtual = out.target_virtual,
            jumped,
            slots = self.slots.len(),
            "data_changed"
        );

        DataChange {
            target_virtual: out.target_virtual,
            jumped,
            refreshes,
        }
    }
}

impl Default for Carousel {
    fn default() -> Self {
        Self::new(WindowPolicy::default())
    }
}

#[cfg(test)]
mod tests {
    use super::Carousel;
    use crate::window::WindowPolicy;

    #[test]
    fn empty_carousel_reports_nothing() {
        let carousel = Carousel::default();
        assert_eq!(carousel.page_count(), 0);
        assert_eq!(carousel.current_actual(), None);
        assert!(!carousel.can_swipe());
    }

    #[test]
    fn first_load_jumps_to_center() {
        let mut carousel = Carousel::default();
        let change = carousel.data_changed(5);

        assert!(change.jumped);
        assert_eq!(change.target_virtual, 50_000);
        assert_eq!(carousel.current_actual(), Some(0));
        assert_eq!(carousel.page_count(), 100_000);
        assert!(carousel.can_swipe());
    }

    #[test]
    fn swiping_wraps_in_both_directions() {
        let mut carousel = Carousel::default();
        carousel.data_changed(3);
        let center = carousel.current_virtual();

        let mut seen = [false; 3];
        for step in 0..3_i64 {
            carousel.set_current_virtual(center + step);
            seen[carousel.current_actual().unwrap()] = true;
        }
        assert_eq!(seen, [true; 3]);

        carousel.set_current_virtual(center - 1);
        assert_eq!(carousel.current_actual(), Some(2));
    }

    #[test]
    fn mid_session_change_refreshes_slots_without_moving() {
        let mut carousel = Carousel::default();
        carousel.data_changed(5);

        // Swipe away from the landing position, with three pages alive.
        let here = carousel.current_virtual() + 17;
        carousel.set_current_virtual(here);
        for slot in [here - 1, here, here + 1] {
            carousel.page_attached(slot);
        }
        let shown = carousel.current_actual().unwrap() % 3;

        let change = carousel.data_changed(3);
        assert!(!change.jumped);
        assert_eq!(change.target_virtual, here);
        assert_eq!(carousel.current_actual(), Some(shown));

        assert_eq!(change.refreshes.len(), 3);
        for refresh in &change.refreshes {
            let expected = carousel.resolve(refresh.virtual_position);
            assert_eq!(refresh.actual, expected);
            assert!(refresh.actual.unwrap() < 3);
        }
    }

    #[test]
    fn neighbor_slots_stay_adjacent_after_refresh() {
        let mut carousel = Carousel::default();
        carousel.data_changed(4);
        let here = carousel.current_virtual() + 9;
        carousel.set_current_virtual(here);
        carousel.page_attached(here - 1);
        carousel.page_attached(here);
        carousel.page_attached(here + 1);

        let change = carousel.data_changed(7);
        let shown = carousel.current_actual().unwrap();
        let left = carousel.resolve(here - 1).unwrap();
        let right = carousel.resolve(here + 1).unwrap();
        assert_eq!((shown + 1) % 7, right);
        assert_eq!((left + 1) % 7, shown);
        assert_eq!(change.refreshes.len(), 3);
    }

    #[test]
    fn emptying_resolves_slots_to_none() {
        let mut carousel = Carousel::default();
        carousel.data_changed(2);
        carousel.page_attached(carousel.current_virtual());

        let change = carousel.data_changed(0);
        assert_eq!(carousel.page_count(), 0);
        assert_eq!(carousel.current_actual(), None);
        assert!(!carousel.can_swipe());
        assert_eq!(change.refreshes.len(), 1);
        assert_eq!(change.refreshes[0].actual, None);
    }

    #[test]
    fn detached_pages_drop_out_of_the_plan() {
        let mut carousel = Carousel::default();
        carousel.data_changed(3);
        let here = carousel.current_virtual();
        carousel.page_attached(here);
        carousel.page_attached(here + 1);
        carousel.page_detached(here);

        let change = carousel.data_changed(4);
        assert_eq!(change.refreshes.len(), 1);
        assert_eq!(change.refreshes[0].virtual_position, here + 1);
    }

    #[test]
    fn reattach_moves_slot_to_back_of_refresh_order() {
        let mut carousel = Carousel::default();
        carousel.data_changed(3);
        let here = carousel.current_virtual();
        carousel.page_attached(here);
        carousel.page_attached(here + 1);
        carousel.page_attached(here);

        assert_eq!(carousel.attached_pages(), &[here + 1, here]);
    }

    #[test]
    fn gate_toggle_reaches_through_controller() {
        let mut carousel = Carousel::default();
        carousel.data_changed(1);
        assert!(!carousel.can_swipe());

        carousel.gate_mut().set_enabled(false);
        assert!(carousel.can_swipe());
    }

    #[test]
    fn default_policy_is_fixed_window() {
        let mut carousel = Carousel::new(WindowPolicy::default());
        carousel.data_changed(1_000);
        assert_eq!(carousel.page_count(), 100_000);
    }
}
