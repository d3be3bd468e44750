// Copyright 2026 the Overstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Marker class and event name constants.
//!
//! Marker classes are named boolean-presence tags on the host root; a styling
//! layer downstream maps them to visuals. The foundation references them by
//! name only and attaches no meaning to the literal spellings.

/// Marks the root as the short (condensed-capable) variant.
///
/// Sampled once at [`Foundation::init`](crate::foundation::Foundation::init);
/// the foundation does not react to later changes.
pub const SHORT: &str = "ov-app-bar--short";

/// Toggled by the collapse state machine as the viewport crosses the zero
/// scroll edge. Present exactly while the bar is collapsed.
pub const SHORT_COLLAPSED: &str = "ov-app-bar--short-collapsed";

/// Applied once at init when a short-variant bar has at least one action
/// icon. Never removed by the foundation.
pub const SHORT_HAS_ACTION_ITEM: &str = "ov-app-bar--short-has-action-item";

/// Event name for navigation-icon clicks surfaced by the host component.
/// Carries no payload beyond the name.
pub const NAVIGATION_EVENT: &str = "overstory:nav";
