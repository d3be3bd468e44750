// Copyright 2026 the Overstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Foundation basics with a hand-rolled adapter.
//!
//! This example wires the collapse foundation to a minimal custom host,
//! showing the capability seam: the foundation sees nothing but the adapter.
//!
//! Run:
//! - `cargo run -p overstory_demos --example appbar_foundation`

use overstory_appbar::adapter::AppBarAdapter;
use overstory_appbar::classes;
use overstory_appbar::foundation::Foundation;

/// A tiny host: a vector of class names plus an ambient scroll offset.
#[derive(Debug, Default)]
struct MiniHost {
    classes: Vec<String>,
    scroll_y: f64,
    scroll_subscribed: bool,
}

impl AppBarAdapter for MiniHost {
    fn has_class(&self, name: &str) -> bool {
        self.classes.iter().any(|c| c == name)
    }
    fn add_class(&mut self, name: &str) {
        if !self.has_class(name) {
            self.classes.push(name.to_string());
        }
    }
    fn remove_class(&mut self, name: &str) {
        self.classes.retain(|c| c != name);
    }
    fn register_scroll_handler(&mut self) {
        self.scroll_subscribed = true;
    }
    fn deregister_scroll_handler(&mut self) {
        self.scroll_subscribed = false;
    }
    fn viewport_scroll_y(&self) -> f64 {
        self.scroll_y
    }
    fn total_action_icons(&self) -> usize {
        2
    }
}

fn main() {
    let mut host = MiniHost::default();
    host.classes.push(classes::SHORT.to_string());

    let mut foundation = Foundation::new(host);
    foundation.init();
    println!("== After init ==\n  classes: {:?}", foundation.adapter().classes);
    assert!(foundation.adapter().scroll_subscribed);
    assert!(foundation.adapter().has_class(classes::SHORT_HAS_ACTION_ITEM));

    // Scroll away from the top: the bar collapses once.
    foundation.adapter_mut().scroll_y = 180.0;
    foundation.handle_scroll();
    println!("== Scrolled to 180 ==\n  classes: {:?}", foundation.adapter().classes);
    assert!(foundation.is_collapsed());
    assert!(foundation.adapter().has_class(classes::SHORT_COLLAPSED));

    // Back to rest: the collapse marker is removed.
    foundation.adapter_mut().scroll_y = 0.0;
    foundation.handle_scroll();
    println!("== Back at rest ==\n  classes: {:?}", foundation.adapter().classes);
    assert!(!foundation.is_collapsed());
    assert!(!foundation.adapter().has_class(classes::SHORT_COLLAPSED));

    foundation.destroy();
    assert!(!foundation.adapter().scroll_subscribed);
}
