// Copyright 2026 the Overstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The capability interface between the foundation and its host environment.

/// Capabilities the foundation requires from its host.
///
/// Implement this for whatever owns the real root — an element wrapper, a
/// retained widget, or a headless model. Every method has a default body
/// (no-op mutators, `false`/`0` queries), so a partial adapter for a host
/// that lacks some capability still satisfies the trait and cannot crash the
/// foundation. The defaults are a defensive contract, not a behavior
/// guarantee: a foundation over an all-default adapter is simply inert.
///
/// All operations are infallible from the foundation's point of view; host
/// failures are the adapter's concern and propagate to whoever triggered the
/// adapter call.
pub trait AppBarAdapter {
    /// Whether the host root currently carries the named marker class.
    /// No side effects.
    fn has_class(&self, name: &str) -> bool {
        let _ = name;
        false
    }

    /// Add a marker class to the host root. Idempotent.
    fn add_class(&mut self, name: &str) {
        let _ = name;
    }

    /// Remove a marker class from the host root. Idempotent.
    fn remove_class(&mut self, name: &str) {
        let _ = name;
    }

    /// Subscribe the foundation to the ambient viewport's scroll
    /// notifications. The host delivers each notification by calling
    /// [`Foundation::handle_scroll`](crate::foundation::Foundation::handle_scroll);
    /// delivery may lag and coalesce, but fires at least once per scroll
    /// change, eventually.
    fn register_scroll_handler(&mut self) {}

    /// Unsubscribe from scroll notifications. Must be a no-op when no
    /// subscription is live, so teardown can deregister unconditionally.
    /// A notification already in flight is not retroactively suppressed.
    fn deregister_scroll_handler(&mut self) {}

    /// Current vertical scroll offset of the ambient viewport. Non-negative;
    /// units are irrelevant, only the comparison with zero matters.
    fn viewport_scroll_y(&self) -> f64 {
        0.0
    }

    /// Number of action icons currently present on the root.
    fn total_action_icons(&self) -> usize {
        0
    }
}
