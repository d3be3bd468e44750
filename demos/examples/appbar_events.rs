// Copyright 2026 the Overstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Navigation events and subscriber bookkeeping.
//!
//! Shows the component surfacing navigation-icon clicks as named events, and
//! the registry making unsubscription idempotent for teardown paths.
//!
//! Run:
//! - `cargo run -p overstory_demos --example appbar_events`

use overstory_appbar::adapters::host::{AppBar, AppBarEvent};
use overstory_appbar::classes;
use overstory_host::{IconFlags, Root};
use overstory_notify::Registry;

fn main() {
    let mut root = Root::new();
    root.add_class(classes::SHORT);
    let nav = root.add_icon(IconFlags::NAVIGATION);
    let action = root.add_icon(IconFlags::ACTION);

    let mut bar = AppBar::attach_to(root);

    // Only the navigation icon emits; action clicks are the ripple's business.
    bar.click(nav);
    bar.click(action);
    bar.click(nav);
    let events = bar.drain_events();
    println!("== Events ==");
    for event in &events {
        println!("  {}", event.name());
    }
    assert_eq!(events, [AppBarEvent::Navigation, AppBarEvent::Navigation]);
    assert!(events.iter().all(|e| e.name() == classes::NAVIGATION_EVENT));

    // The registry underneath tolerates repeated unsubscription.
    let mut registry: Registry<&str> = Registry::new();
    let key = registry.subscribe("scroll");
    registry.unsubscribe(key);
    registry.unsubscribe(key);
    println!("== Registry ==\n  live subscriptions: {}", registry.len());
    assert!(registry.is_empty());
}
