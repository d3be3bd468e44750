// Copyright 2026 the Overstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=overstory_notify --heading-base-level=0

//! Overstory Notify: subscriber bookkeeping and coalesced delivery for UI hosts.
//!
//! Overstory Notify is a reusable building block for host environments that
//! fan out ambient notifications (viewport scroll, resize, and similar) to
//! interested behavior modules.
//!
//! - [`Registry`]: a generational-key subscriber registry. Subscriptions hand
//!   out small copyable [`Key`]s; unsubscribing a stale or never-issued key is
//!   a no-op, so teardown paths can deregister unconditionally.
//! - [`ScrollFeed`]: batches scroll-offset changes between delivery cycles and
//!   yields at most one coalesced pending delivery per cycle.
//!
//! Delivery is pull-based: the host records changes as they happen and drains
//! them on its own timeline. Subscribers are guaranteed to observe at least
//! one delivery per change batch, eventually — intermediate offsets within a
//! batch are intentionally dropped.
//!
//! # Example
//!
//! ```rust
//! use overstory_notify::{Registry, ScrollFeed};
//!
//! // A host with one scroll subscriber.
//! let mut subs: Registry<&str> = Registry::new();
//! let key = subs.subscribe("collapse-machine");
//!
//! // Several scroll changes arrive before the host gets around to delivering.
//! let mut feed = ScrollFeed::new();
//! feed.record(12.0);
//! feed.record(48.0);
//!
//! // One coalesced delivery carrying the latest offset.
//! assert_eq!(feed.take(), Some(48.0));
//! assert_eq!(feed.take(), None);
//!
//! // Unsubscribing twice is harmless.
//! subs.unsubscribe(key);
//! subs.unsubscribe(key);
//! assert!(subs.is_empty());
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod feed;
mod registry;

pub use feed::ScrollFeed;
pub use registry::{Key, Registry};
