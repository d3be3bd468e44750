// Copyright 2026 the Overstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=overstory_appbar --heading-base-level=0

//! Overstory App Bar: an adapter-driven collapse foundation for a short top app bar.
//!
//! ## Overview
//!
//! A "short" top app bar collapses to a condensed visual state once the page
//! scrolls away from the top and expands again at rest. This crate implements
//! that behavior as a small deterministic state machine — the
//! [`Foundation`](crate::foundation::Foundation) — decoupled from any concrete
//! host environment through the
//! [`AppBarAdapter`](crate::adapter::AppBarAdapter) capability trait.
//! The foundation never touches an ambient scroll source or a real element
//! tree; everything it observes or mutates goes through the adapter.
//!
//! ## Inputs
//!
//! The adapter supplies marker-class membership on the host root, the current
//! viewport scroll offset, the action-icon count, and scroll subscription
//! hooks. All adapter operations have defensive defaults, so a partial
//! adapter implements only what its host supports.
//!
//! ## State
//!
//! Exactly one bit: collapsed or expanded, starting expanded. The transition
//! function gates host mutation on that bit, so a stream of scroll
//! notifications that does not cross the zero edge performs no class mutation
//! at all. Host mutation is assumed expensive relative to the boolean check.
//!
//! ## Workflow
//!
//! 1) Implement [`AppBarAdapter`](crate::adapter::AppBarAdapter) for your
//!    host root, or enable the `host_adapter` feature for a ready-made
//!    adapter and component over the `overstory_host` model.
//! 2) Construct the foundation with the adapter and call
//!    [`Foundation::init`](crate::foundation::Foundation::init) exactly once.
//!    On a short-variant root this registers for scroll notifications and
//!    applies the initial action-item styling.
//! 3) Deliver each scroll notification by calling
//!    [`Foundation::handle_scroll`](crate::foundation::Foundation::handle_scroll);
//!    the foundation toggles the
//!    [`SHORT_COLLAPSED`](crate::classes::SHORT_COLLAPSED) marker class on the
//!    zero edge.
//! 4) Call [`Foundation::destroy`](crate::foundation::Foundation::destroy)
//!    once at teardown; deregistration is safe even if `init` never
//!    registered.
//!
//! ## Minimal example
//!
//! ```
//! use overstory_appbar::adapter::AppBarAdapter;
//! use overstory_appbar::classes;
//! use overstory_appbar::foundation::Foundation;
//!
//! /// A toy host: one class set as a bit per known marker, plus an offset.
//! #[derive(Default)]
//! struct Host {
//!     collapsed_marker: bool,
//!     scroll_y: f64,
//! }
//!
//! impl AppBarAdapter for Host {
//!     fn has_class(&self, name: &str) -> bool {
//!         // Always short-variant; the collapse marker is tracked explicitly.
//!         name == classes::SHORT || (name == classes::SHORT_COLLAPSED && self.collapsed_marker)
//!     }
//!     fn add_class(&mut self, name: &str) {
//!         if name == classes::SHORT_COLLAPSED {
//!             self.collapsed_marker = true;
//!         }
//!     }
//!     fn remove_class(&mut self, name: &str) {
//!         if name == classes::SHORT_COLLAPSED {
//!             self.collapsed_marker = false;
//!         }
//!     }
//!     fn viewport_scroll_y(&self) -> f64 {
//!         self.scroll_y
//!     }
//! }
//!
//! let mut foundation = Foundation::new(Host::default());
//! foundation.init();
//!
//! foundation.adapter_mut().scroll_y = 96.0;
//! foundation.handle_scroll();
//! assert!(foundation.is_collapsed());
//!
//! foundation.adapter_mut().scroll_y = 0.0;
//! foundation.handle_scroll();
//! assert!(!foundation.is_collapsed());
//! ```
//!
//! This crate is `no_std`; the core has no allocations, and `alloc` is used
//! only by the `host_adapter` feature and the tests.

#![no_std]

#[cfg(any(test, feature = "host_adapter"))]
extern crate alloc;

pub mod adapter;
pub mod adapters;
pub mod classes;
pub mod foundation;
