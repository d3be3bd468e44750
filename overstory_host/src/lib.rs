// Copyright 2026 the Overstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=overstory_host --heading-base-level=0

//! Overstory Host: a headless host-root model for app bar behavior.
//!
//! Overstory Host stands in for the environment a real toolkit supplies to a
//! behavior module: a root element carrying marker classes, a collection of
//! icons with roles, and an ambient viewport scroll source with subscriber
//! bookkeeping.
//!
//! - [`Root`]: the host root. Marker classes, icons, scroll offset, scroll
//!   subscriptions.
//! - [`ClassList`]: ordered, duplicate-free marker class set with idempotent
//!   add/remove.
//! - [`IconFlags`] / [`Icon`] / [`IconId`]: icon roles (action items are
//!   counted for initial styling; the navigation icon forwards clicks).
//!
//! ## Not a renderer
//!
//! This crate models structure and notification plumbing only. It performs no
//! layout, painting, styling, or accessibility work; marker classes are plain
//! named tags for a downstream styling layer to interpret.
//!
//! ## Scroll delivery
//!
//! Scroll changes are recorded into a coalescing feed
//! ([`overstory_notify::ScrollFeed`]). The embedding component drains the feed
//! on its own timeline and notifies subscribers, so a burst of changes
//! produces a single delivery carrying the latest offset.
//!
//! # Example
//!
//! ```rust
//! use overstory_host::{IconFlags, Root};
//!
//! let mut root = Root::new();
//! root.add_class("app-bar--short");
//! let _nav = root.add_icon(IconFlags::NAVIGATION);
//! let _a = root.add_icon(IconFlags::ACTION);
//! let _b = root.add_icon(IconFlags::ACTION);
//!
//! assert!(root.has_class("app-bar--short"));
//! assert_eq!(root.total_action_icons(), 2);
//!
//! root.set_scroll_y(64.0);
//! assert_eq!(root.take_scroll_delivery(), Some(64.0));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod root;
mod types;

pub use root::Root;
pub use types::{ClassList, Icon, IconFlags, IconId};

/// Key type for scroll subscriptions handed out by [`Root::subscribe_scroll`].
pub use overstory_notify::Key as ScrollKey;
