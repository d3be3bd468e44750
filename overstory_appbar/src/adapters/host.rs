// Copyright 2026 the Overstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Adapter and component wrapper over the headless host-root model.
//!
//! ## Feature
//!
//! Enable with `host_adapter`.
//!
//! ## Notes
//!
//! [`RootAdapter`] implements [`AppBarAdapter`] for an owned
//! [`overstory_host::Root`], translating scroll registration into the root's
//! subscriber registry. [`AppBar`] is the component layer: it wires a root to
//! a foundation, forwards lifecycle calls, manages ripple attachments on the
//! icons, surfaces navigation-icon clicks as events, and pumps coalesced
//! scroll deliveries into the foundation.

use alloc::vec::Vec;

use overstory_host::{IconFlags, IconId, Root, ScrollKey};

use crate::adapter::AppBarAdapter;
use crate::classes;
use crate::foundation::Foundation;

/// [`AppBarAdapter`] over an owned host [`Root`].
///
/// Scroll registration subscribes to the root's scroll registry and holds the
/// generational key; deregistration releases it. Registering while already
/// registered keeps the existing subscription, matching the listener
/// semantics of real host environments.
#[derive(Clone, Debug)]
pub struct RootAdapter {
    root: Root,
    scroll_key: Option<ScrollKey>,
}

impl RootAdapter {
    /// Wrap a root.
    pub fn new(root: Root) -> Self {
        Self {
            root,
            scroll_key: None,
        }
    }

    /// Borrow the root.
    pub fn root(&self) -> &Root {
        &self.root
    }

    /// Mutably borrow the root.
    pub fn root_mut(&mut self) -> &mut Root {
        &mut self.root
    }

    /// Consume the adapter, returning the root.
    pub fn into_root(self) -> Root {
        self.root
    }

    /// Whether a scroll subscription is currently held.
    pub fn is_registered(&self) -> bool {
        self.scroll_key.is_some()
    }
}

impl AppBarAdapter for RootAdapter {
    fn has_class(&self, name: &str) -> bool {
        self.root.has_class(name)
    }

    fn add_class(&mut self, name: &str) {
        self.root.add_class(name);
    }

    fn remove_class(&mut self, name: &str) {
        self.root.remove_class(name);
    }

    fn register_scroll_handler(&mut self) {
        if self.scroll_key.is_none() {
            self.scroll_key = Some(self.root.subscribe_scroll());
        }
    }

    fn deregister_scroll_handler(&mut self) {
        if let Some(key) = self.scroll_key.take() {
            self.root.unsubscribe_scroll(key);
        }
    }

    fn viewport_scroll_y(&self) -> f64 {
        self.root.scroll_y()
    }

    fn total_action_icons(&self) -> usize {
        self.root.total_action_icons()
    }
}

/// An event surfaced by the [`AppBar`] component.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum AppBarEvent {
    /// The navigation icon was clicked. No payload beyond the name.
    Navigation,
}

impl AppBarEvent {
    /// The event's wire name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Navigation => classes::NAVIGATION_EVENT,
        }
    }
}

/// Bookkeeping for a decorative ripple attached to an icon.
///
/// The visual effect itself lives elsewhere; this records only which icon the
/// ripple is bound to and whether the attachment is live.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RippleHandle {
    icon: IconId,
    unbounded: bool,
    attached: bool,
}

impl RippleHandle {
    fn attach(icon: IconId) -> Self {
        Self {
            icon,
            // Icon ripples radiate past the icon bounds.
            unbounded: true,
            attached: true,
        }
    }

    /// The icon this ripple is bound to.
    pub fn icon(self) -> IconId {
        self.icon
    }

    /// Whether the ripple radiates past the icon bounds.
    pub fn is_unbounded(self) -> bool {
        self.unbounded
    }

    /// Whether the attachment is live.
    pub fn is_attached(self) -> bool {
        self.attached
    }
}

/// Component wrapper: a [`Root`] wired to a [`Foundation`].
///
/// Mirrors a host component's duties around the foundation: icon discovery
/// and ripple attachment at construction, navigation-click forwarding,
/// coalesced scroll delivery, and teardown.
#[derive(Debug)]
pub struct AppBar {
    foundation: Foundation<RootAdapter>,
    nav_icon: Option<IconId>,
    ripples: Vec<RippleHandle>,
    events: Vec<AppBarEvent>,
}

impl AppBar {
    /// Attach to a root: discover icons, attach ripples, and initialize the
    /// foundation.
    pub fn attach_to(root: Root) -> Self {
        let nav_icon = root.navigation_icon();
        let mut ripples: Vec<RippleHandle> = root
            .icons()
            .filter(|(_, icon)| icon.flags.contains(IconFlags::ACTION))
            .map(|(id, _)| RippleHandle::attach(id))
            .collect();
        if let Some(nav) = nav_icon {
            ripples.push(RippleHandle::attach(nav));
        }

        let mut foundation = Foundation::new(RootAdapter::new(root));
        foundation.init();

        Self {
            foundation,
            nav_icon,
            ripples,
            events: Vec::new(),
        }
    }

    /// Borrow the foundation.
    pub fn foundation(&self) -> &Foundation<RootAdapter> {
        &self.foundation
    }

    /// Borrow the root.
    pub fn root(&self) -> &Root {
        self.foundation.adapter().root()
    }

    /// Ripple attachments, action icons first, then the navigation icon.
    pub fn ripples(&self) -> &[RippleHandle] {
        &self.ripples
    }

    /// Update the ambient viewport scroll offset.
    ///
    /// Records a pending delivery; nothing reaches the foundation until
    /// [`AppBar::pump`] runs, so bursts of changes coalesce.
    pub fn set_viewport_scroll(&mut self, y: f64) {
        self.foundation.adapter_mut().root_mut().set_scroll_y(y);
    }

    /// Deliver the pending scroll notification, if any.
    ///
    /// Notifications are dropped while no scroll subscription is live (a
    /// non-short bar never registers one).
    pub fn pump(&mut self) {
        let adapter = self.foundation.adapter_mut();
        let delivered = adapter.root_mut().take_scroll_delivery().is_some();
        let registered = adapter.is_registered();
        if delivered && registered {
            self.foundation.handle_scroll();
        }
    }

    /// Click an icon. Clicks on the navigation icon emit
    /// [`AppBarEvent::Navigation`]; clicks elsewhere are ignored.
    pub fn click(&mut self, icon: IconId) {
        if self.nav_icon == Some(icon) {
            self.events.push(AppBarEvent::Navigation);
        }
    }

    /// Drain events emitted since the last call, oldest first.
    pub fn drain_events(&mut self) -> Vec<AppBarEvent> {
        core::mem::take(&mut self.events)
    }

    /// Tear down: detach every ripple, destroy the foundation, and return the
    /// root to the host.
    pub fn destroy(mut self) -> Root {
        self.detach_ripples();
        self.foundation.destroy();
        self.foundation.into_adapter().into_root()
    }

    fn detach_ripples(&mut self) {
        for ripple in &mut self.ripples {
            ripple.attached = false;
        }
    }
}
