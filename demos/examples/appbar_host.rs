// Copyright 2026 the Overstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-to-end short app bar over the headless host model.
//!
//! Builds a short-variant root with icons, attaches the component, and walks
//! the collapse round trip through coalesced scroll deliveries.
//!
//! Run:
//! - `cargo run -p overstory_demos --example appbar_host`

use overstory_appbar::adapters::host::AppBar;
use overstory_appbar::classes;
use overstory_host::{IconFlags, Root};

fn main() {
    let mut root = Root::new();
    root.add_class(classes::SHORT);
    root.add_icon(IconFlags::NAVIGATION);
    root.add_icon(IconFlags::ACTION);
    root.add_icon(IconFlags::ACTION);

    let mut bar = AppBar::attach_to(root);
    println!(
        "== Attached ==\n  classes: {:?}\n  ripples: {}",
        bar.root().classes().iter().collect::<Vec<_>>(),
        bar.ripples().len(),
    );
    assert!(bar.root().has_class(classes::SHORT_HAS_ACTION_ITEM));
    assert_eq!(bar.ripples().len(), 3);

    // A burst of scroll changes coalesces into a single delivery.
    bar.set_viewport_scroll(24.0);
    bar.set_viewport_scroll(210.0);
    bar.pump();
    println!(
        "== Scrolled ==\n  classes: {:?}",
        bar.root().classes().iter().collect::<Vec<_>>(),
    );
    assert!(bar.root().has_class(classes::SHORT_COLLAPSED));

    // Returning to the top expands the bar again.
    bar.set_viewport_scroll(0.0);
    bar.pump();
    println!(
        "== At rest ==\n  classes: {:?}",
        bar.root().classes().iter().collect::<Vec<_>>(),
    );
    assert!(!bar.root().has_class(classes::SHORT_COLLAPSED));

    // Teardown hands the root back with the subscription released.
    let root = bar.destroy();
    assert!(!root.has_scroll_subscribers());
    println!("== Destroyed ==\n  subscribers released");
}
