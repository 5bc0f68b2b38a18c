// Copyright 2026 the Zoetrope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=zoetrope_carousel --heading-base-level=0

//! Zoetrope Carousel: the position core for endless (circular) paging.
//!
//! A paging widget can only scroll a finite strip of slots, but a carousel
//! should wrap: swiping right or left must always produce a next or previous
//! item, with no visible "reset" jump at the list boundary and none when the
//! backing list is replaced or resized mid-session. This crate provides the
//! renderer-agnostic core that makes that work:
//!
//! - [`Calibration`] and the `ring` conversions ([`to_actual`],
//!   [`anchor_offset`]): pure modular arithmetic mapping the widget's huge
//!   *virtual* positions onto *actual* indices in the real item list.
//! - [`Calibrator`]: owns the current [`Calibration`] and replaces it
//!   wholesale whenever the item count changes, choosing a
//!   [`Recalibration::target_virtual`] so the displayed item does not
//!   visibly change.
//! - [`WindowPolicy`]: how large the virtual space is, either a fixed window
//!   or one proportional to the item count.
//! - [`can_swipe`] / [`SwipeGate`]: interaction is only permitted with two
//!   or more items.
//! - [`Carousel`]: a small controller wrapping all of the above plus the
//!   widget's current position and instantiated page slots; one data-change
//!   call yields the silent-jump target and a synchronous refresh plan.
//!
//! This crate deliberately does **not** know about widgets, gestures, or any
//! particular UI framework. Host frameworks are responsible for:
//!
//! - Owning the paging widget and the item data.
//! - Consulting [`Carousel::can_swipe`] before intercepting a drag.
//! - Reporting settled positions via [`Carousel::set_current_virtual`] and
//!   slot lifecycle via [`Carousel::page_attached`] /
//!   [`Carousel::page_detached`].
//! - Calling [`Carousel::data_changed`] when the provider's data changes,
//!   then applying the returned jump without animation and pushing the
//!   returned [`PageRefresh`] content before the next frame.
//!
//! ## Minimal example
//!
//! ```rust
//! use zoetrope_carousel::{Carousel, WindowPolicy};
//!
//! let mut carousel = Carousel::new(WindowPolicy::default());
//!
//! // First data load: the widget silently jumps to the center of the
//! // virtual space, showing item 0.
//! let change = carousel.data_changed(5);
//! assert!(change.jumped);
//! assert_eq!(carousel.current_actual(), Some(0));
//!
//! // Swiping forward wraps 0, 1, 2, 3, 4, 0, ...
//! for step in 1..=5 {
//!     carousel.set_current_virtual(change.target_virtual + step);
//! }
//! assert_eq!(carousel.current_actual(), Some(0));
//!
//! // The list shrinks mid-session: the widget does not move and the
//! // mapping stays consistent.
//! let shrink = carousel.data_changed(3);
//! assert!(!shrink.jumped);
//! assert!(carousel.current_actual().unwrap() < 3);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

#[cfg(test)]
extern crate std;

mod calibrator;
mod carousel;
mod gate;
mod ring;
mod window;

pub use calibrator::{Calibrator, Recalibration};
pub use carousel::{Carousel, DataChange, PageRefresh};
pub use gate::{SwipeGate, can_swipe};
pub use ring::{Calibration, anchor_offset, to_actual};
pub use window::{DEFAULT_FIXED_WINDOW, DEFAULT_PROPORTIONAL_FACTOR, WindowPolicy};
