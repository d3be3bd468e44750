// Copyright 2026 the Overstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Foundation implementation: the scroll-collapse state machine.
//!
//! ## Overview
//!
//! Two states, collapsed and expanded, starting expanded. Each delivered
//! scroll notification reads the viewport offset through the adapter and
//! toggles the [`SHORT_COLLAPSED`](crate::classes::SHORT_COLLAPSED) marker
//! class when — and only when — the offset crosses the zero edge.
//!
//! ## Lifecycle
//!
//! - [`Foundation::init`] samples the short-variant marker once. On a
//!   short-variant root it registers for scroll notifications and applies the
//!   initial action-item styling; otherwise the machine is inert for the
//!   lifetime of the instance.
//! - [`Foundation::destroy`] deregisters unconditionally; deregistration
//!   without a prior registration is a no-op by the adapter contract.
//!
//! ## Delivery model
//!
//! Single-threaded and non-reentrant: the host delivers notifications on one
//! logical timeline, so the check-then-mutate pair in
//! [`Foundation::handle_scroll`] needs no synchronization.

use crate::adapter::AppBarAdapter;
use crate::classes;

/// The scroll-collapse state machine for a short top app bar.
///
/// Owns its adapter and one boolean of state. The state is observable through
/// [`Foundation::is_collapsed`] but never externally mutable; only the scroll
/// transition function changes it.
///
/// ## Usage
///
/// - Construct with [`Foundation::new`] over any [`AppBarAdapter`].
/// - Call [`Foundation::init`] exactly once after construction. Calling it
///   twice registers the scroll handler twice on a short-variant root.
/// - Deliver scroll notifications via [`Foundation::handle_scroll`].
/// - Call [`Foundation::destroy`] exactly once at teardown; the instance is
///   not usable afterwards.
pub struct Foundation<A: AppBarAdapter> {
    adapter: A,
    collapsed: bool,
}

impl<A: AppBarAdapter> core::fmt::Debug for Foundation<A> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Foundation")
            .field("collapsed", &self.collapsed)
            .finish_non_exhaustive()
    }
}

impl<A: AppBarAdapter> Foundation<A> {
    /// Create a foundation over `adapter`, starting expanded.
    pub fn new(adapter: A) -> Self {
        Self {
            adapter,
            collapsed: false,
        }
    }

    /// Initialize the machine. Call exactly once.
    ///
    /// Samples the short-variant marker; on a short-variant root, registers
    /// the scroll handler and adds
    /// [`SHORT_HAS_ACTION_ITEM`](crate::classes::SHORT_HAS_ACTION_ITEM) when
    /// at least one action icon is present. On a non-short root this does
    /// nothing and the machine stays inert.
    pub fn init(&mut self) {
        if self.is_short_app_bar() {
            self.adapter.register_scroll_handler();
            self.style_short_app_bar();
        }
    }

    /// Tear down the machine. Call exactly once.
    ///
    /// Deregisters the scroll handler unconditionally; safe even when `init`
    /// never registered one.
    pub fn destroy(&mut self) {
        self.adapter.deregister_scroll_handler();
    }

    /// Whether the root is the short variant. Pure query, callable any time.
    pub fn is_short_app_bar(&self) -> bool {
        self.adapter.has_class(classes::SHORT)
    }

    /// Whether the bar is currently collapsed.
    ///
    /// Meaningful only on a short-variant root; on any other root the machine
    /// never leaves the expanded state.
    pub fn is_collapsed(&self) -> bool {
        self.collapsed
    }

    /// Handle one delivered scroll notification.
    ///
    /// Reads the viewport offset and toggles the collapse marker class on the
    /// zero edge. Gated on the current state: notifications that do not cross
    /// the edge perform no host mutation.
    pub fn handle_scroll(&mut self) {
        let current = self.adapter.viewport_scroll_y();
        if current == 0.0 {
            if self.collapsed {
                self.adapter.remove_class(classes::SHORT_COLLAPSED);
                self.collapsed = false;
            }
        } else if !self.collapsed {
            self.adapter.add_class(classes::SHORT_COLLAPSED);
            self.collapsed = true;
        }
    }

    /// Borrow the adapter.
    pub fn adapter(&self) -> &A {
        &self.adapter
    }

    /// Mutably borrow the adapter (for host-side updates between deliveries).
    pub fn adapter_mut(&mut self) -> &mut A {
        &mut self.adapter
    }

    /// Consume the foundation, returning the adapter to the host.
    pub fn into_adapter(self) -> A {
        self.adapter
    }

    /// Initial styling for a short app bar: mark the presence of action icons.
    fn style_short_app_bar(&mut self) {
        if self.adapter.total_action_icons() > 0 {
            self.adapter.add_class(classes::SHORT_HAS_ACTION_ITEM);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::String;
    use alloc::vec::Vec;
    use core::cell::Cell;

    /// Scripted adapter recording every mutator call and query count.
    #[derive(Debug, Default)]
    struct Recording {
        short: bool,
        action_icons: usize,
        scroll_y: f64,
        added: Vec<String>,
        removed: Vec<String>,
        registers: u32,
        deregisters: u32,
        icon_queries: Cell<u32>,
    }

    impl Recording {
        fn short_bar(action_icons: usize) -> Self {
            Self {
                short: true,
                action_icons,
                ..Self::default()
            }
        }

        fn mutations(&self) -> usize {
            self.added.len() + self.removed.len()
        }
    }

    impl AppBarAdapter for Recording {
        fn has_class(&self, name: &str) -> bool {
            self.short && name == classes::SHORT
        }
        fn add_class(&mut self, name: &str) {
            self.added.push(String::from(name));
        }
        fn remove_class(&mut self, name: &str) {
            self.removed.push(String::from(name));
        }
        fn register_scroll_handler(&mut self) {
            self.registers += 1;
        }
        fn deregister_scroll_handler(&mut self) {
            self.deregisters += 1;
        }
        fn viewport_scroll_y(&self) -> f64 {
            self.scroll_y
        }
        fn total_action_icons(&self) -> usize {
            self.icon_queries.set(self.icon_queries.get() + 1);
            self.action_icons
        }
    }

    // Non-short roots get no subscription and no icon query at init.
    #[test]
    fn init_is_inert_on_non_short_root() {
        let mut f = Foundation::new(Recording::default());
        f.init();
        assert_eq!(f.adapter().registers, 0);
        assert_eq!(f.adapter().icon_queries.get(), 0);
        assert_eq!(f.adapter().mutations(), 0);
        assert!(!f.is_short_app_bar());
    }

    #[test]
    fn init_registers_once_on_short_root() {
        let mut f = Foundation::new(Recording::short_bar(0));
        f.init();
        assert!(f.is_short_app_bar());
        assert_eq!(f.adapter().registers, 1);
    }

    // Repeated notifications at rest never touch the host.
    #[test]
    fn scrolls_at_rest_perform_no_mutation() {
        let mut f = Foundation::new(Recording::short_bar(0));
        f.init();
        for _ in 0..5 {
            f.handle_scroll();
        }
        assert!(!f.is_collapsed());
        assert_eq!(f.adapter().mutations(), 0);
    }

    // One mutation per edge: a second nonzero notification adds nothing.
    #[test]
    fn collapse_mutates_once_per_edge() {
        let mut f = Foundation::new(Recording::short_bar(0));
        f.init();
        f.adapter_mut().scroll_y = 42.0;
        f.handle_scroll();
        assert!(f.is_collapsed());
        assert_eq!(f.adapter().added, [classes::SHORT_COLLAPSED]);

        f.adapter_mut().scroll_y = 300.0;
        f.handle_scroll();
        assert!(f.is_collapsed());
        assert_eq!(f.adapter().mutations(), 1, "no redundant class sync");
    }

    // Collapse then return to rest yields exactly one add and one remove.
    #[test]
    fn round_trip_restores_expanded() {
        let mut f = Foundation::new(Recording::short_bar(0));
        f.init();
        f.adapter_mut().scroll_y = 5.0;
        f.handle_scroll();
        f.adapter_mut().scroll_y = 0.0;
        f.handle_scroll();
        assert!(!f.is_collapsed());
        assert_eq!(f.adapter().added, [classes::SHORT_COLLAPSED]);
        assert_eq!(f.adapter().removed, [classes::SHORT_COLLAPSED]);
    }

    #[test]
    fn no_action_icons_means_no_initial_styling() {
        let mut f = Foundation::new(Recording::short_bar(0));
        f.init();
        assert_eq!(f.adapter().added, [] as [&str; 0]);
    }

    #[test]
    fn action_icons_styled_exactly_once_at_init() {
        let mut f = Foundation::new(Recording::short_bar(3));
        f.init();
        assert_eq!(f.adapter().added, [classes::SHORT_HAS_ACTION_ITEM]);
    }

    // Teardown without init must still deregister, exactly once.
    #[test]
    fn destroy_without_init_deregisters_once() {
        let mut f = Foundation::new(Recording::default());
        f.destroy();
        assert_eq!(f.adapter().deregisters, 1);
    }

    #[test]
    fn destroy_after_init_deregisters_once() {
        let mut f = Foundation::new(Recording::short_bar(1));
        f.init();
        f.destroy();
        assert_eq!(f.adapter().registers, 1);
        assert_eq!(f.adapter().deregisters, 1);
    }

    // Full lifecycle: init styling, collapse at 120, expand back at 0.
    #[test]
    fn short_bar_lifecycle_end_to_end() {
        let mut f = Foundation::new(Recording::short_bar(2));
        f.init();
        assert_eq!(f.adapter().registers, 1);
        assert_eq!(f.adapter().added, [classes::SHORT_HAS_ACTION_ITEM]);

        f.adapter_mut().scroll_y = 120.0;
        f.handle_scroll();
        assert!(f.is_collapsed());
        assert_eq!(
            f.adapter().added,
            [classes::SHORT_HAS_ACTION_ITEM, classes::SHORT_COLLAPSED]
        );

        f.adapter_mut().scroll_y = 0.0;
        f.handle_scroll();
        assert!(!f.is_collapsed());
        assert_eq!(f.adapter().removed, [classes::SHORT_COLLAPSED]);
    }

    // The machine only compares the offset with zero; magnitude is irrelevant.
    #[test]
    fn any_nonzero_offset_collapses() {
        let mut f = Foundation::new(Recording::short_bar(0));
        f.init();
        f.adapter_mut().scroll_y = 0.25;
        f.handle_scroll();
        assert!(f.is_collapsed());
    }

    #[test]
    fn foundation_over_all_default_adapter_is_harmless() {
        struct Bare;
        impl AppBarAdapter for Bare {}
        let mut f = Foundation::new(Bare);
        f.init();
        f.handle_scroll();
        f.destroy();
        assert!(!f.is_collapsed());
    }
}
