// Copyright 2026 the Zoetrope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A mock paging host driving `zoetrope_carousel` end to end.
//!
//! This example stands in for a real UI framework: a `MockPager` owns a
//! window of instantiated page slots around its current position, and a
//! plain `Vec<String>` plays the data provider. It walks through:
//! - the first data load and the silent jump to the center of the space,
//! - wrap-around swiping in both directions,
//! - a mid-session shrink that refreshes live pages without moving,
//! - emptying the list and recovering from it.
//!
//! Run:
//! - `cargo run -p zoetrope_examples --example endless_host`

use zoetrope_carousel::{Carousel, DataChange, WindowPolicy};

/// A stand-in for a framework paging widget: a current position plus one
/// instantiated page on each side of it.
struct MockPager {
    current: i64,
    carousel: Carousel,
}

impl MockPager {
    fn new() -> Self {
        Self {
            current: 0,
            carousel: Carousel::new(WindowPolicy::default()),
        }
    }

    /// Instantiates the slot window around `position`, mirroring what a
    /// widget does as pages scroll in and out of reach.
    fn settle_on(&mut self, position: i64) {
        for slot in self.carousel.attached_pages().to_vec() {
            if (slot - position).abs() > 1 {
                self.carousel.page_detached(slot);
            }
        }
        for slot in [position - 1, position, position + 1] {
            self.carousel.page_attached(slot);
        }
        self.current = position;
        self.carousel.set_current_virtual(position);
    }

    /// One user swipe, if the gate allows it. `delta` is +1 or -1.
    fn swipe(&mut self, delta: i64, items: &[String]) {
        if !self.carousel.can_swipe() {
            println!("  swipe blocked: {} item(s)", items.len());
            return;
        }
        self.settle_on(self.current + delta);
        self.show(items);
    }

    /// The provider signalled new data; apply the jump and push refreshes.
    fn data_changed(&mut self, items: &[String]) {
        let change: DataChange = self.carousel.data_changed(items.len());
        if change.jumped {
            println!(
                "  silent jump: {} -> {}",
                self.current, change.target_virtual
            );
            self.settle_on(change.target_virtual);
        }
        for refresh in &change.refreshes {
            match refresh.actual {
                Some(actual) => println!(
                    "  refresh slot {} -> {:?}",
                    refresh.virtual_position, items[actual]
                ),
                None => println!("  refresh slot {} -> empty", refresh.virtual_position),
            }
        }
    }

    fn show(&self, items: &[String]) {
        match self.carousel.current_actual() {
            Some(actual) => println!(
                "  showing item {actual} ({:?}) at virtual {}",
                items[actual], self.current
            ),
            None => println!("  showing empty state"),
        }
    }
}

fn main() {
    let mut pager = MockPager::new();
    let mut items: Vec<String> = ["alpha", "beta", "gamma", "delta", "epsilon"]
        .iter()
        .map(|s| (*s).to_string())
        .collect();

    println!("first load ({} items):", items.len());
    pager.data_changed(&items);
    pager.show(&items);

    println!("swiping forward past the boundary:");
    for _ in 0..6 {
        pager.swipe(1, &items);
    }

    println!("swiping back:");
    pager.swipe(-1, &items);

    println!("provider shrinks the list to 3:");
    items.truncate(3);
    pager.data_changed(&items);
    pager.show(&items);

    println!("provider empties the list:");
    items.clear();
    pager.data_changed(&items);
    pager.show(&items);
    pager.swipe(1, &items);

    println!("provider reloads 4 items:");
    items.extend(
        ["one", "two", "three", "four"]
            .iter()
            .map(|s| (*s).to_string()),
    );
    pager.data_changed(&items);
    pager.show(&items);
}
