// Copyright 2026 the Overstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the host root: icon identifiers, roles, and the class list.

use alloc::string::String;
use alloc::vec::Vec;

/// Identifier for an icon on the root.
///
/// A small, copyable handle consisting of a slot index and a generation
/// counter. It stays stable while the icon is present and becomes invalid when
/// the icon is removed; a reused slot gets a higher generation, so a stale
/// `IconId` never aliases a different live icon.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct IconId(pub(crate) u32, pub(crate) u32);

impl IconId {
    pub(crate) const fn new(idx: u32, generation: u32) -> Self {
        Self(idx, generation)
    }

    pub(crate) const fn idx(self) -> usize {
        self.0 as usize
    }
}

bitflags::bitflags! {
    /// Icon roles on the host root.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct IconFlags: u8 {
        /// Action item at the trailing edge; counted for initial short styling.
        const ACTION     = 0b0000_0001;
        /// Navigation icon at the leading edge; clicks are surfaced as events.
        const NAVIGATION = 0b0000_0010;
    }
}

/// An icon present on the host root.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Icon {
    /// Roles this icon plays.
    pub flags: IconFlags,
}

impl Icon {
    /// Create an icon with the given roles.
    pub const fn new(flags: IconFlags) -> Self {
        Self { flags }
    }
}

/// An ordered, duplicate-free set of marker classes.
///
/// Marker classes are named boolean-presence tags on the root; a styling layer
/// downstream maps them to visuals. `add` and `remove` are idempotent, per the
/// class-list semantics behavior modules rely on.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClassList {
    classes: Vec<String>,
}

impl ClassList {
    /// Create an empty class list.
    pub const fn new() -> Self {
        Self {
            classes: Vec::new(),
        }
    }

    /// Whether `name` is present.
    pub fn contains(&self, name: &str) -> bool {
        self.classes.iter().any(|c| c == name)
    }

    /// Add `name` if absent.
    pub fn add(&mut self, name: &str) {
        if !self.contains(name) {
            self.classes.push(String::from(name));
        }
    }

    /// Remove `name` if present.
    pub fn remove(&mut self, name: &str) {
        self.classes.retain(|c| c != name);
    }

    /// Number of classes present.
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    /// True when no classes are present.
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Iterate classes in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.classes.iter().map(String::as_str)
    }
}
