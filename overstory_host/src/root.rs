// Copyright 2026 the Overstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The host root: classes, icons, and the viewport scroll source.

use alloc::vec::Vec;

use overstory_notify::{Key, Registry, ScrollFeed};

use crate::types::{ClassList, Icon, IconFlags, IconId};

#[derive(Clone, Debug)]
struct IconSlot {
    // Survives removal so a reused slot always yields a higher generation.
    generation: u32,
    icon: Option<Icon>, // None while the slot is free
}

/// The host root a behavior module is attached to.
///
/// Holds the marker [`ClassList`], the icon collection, the current viewport
/// scroll offset, and scroll subscriber bookkeeping. Everything is
/// deterministic and synchronous; the embedding component decides when to
/// drain pending scroll deliveries and notify subscribers.
#[derive(Clone, Debug, Default)]
pub struct Root {
    classes: ClassList,
    icons: Vec<IconSlot>, // generational slots
    free_list: Vec<usize>,
    scroll_y: f64,
    scroll_subscribers: Registry<()>,
    scroll_feed: ScrollFeed,
}

impl Root {
    /// Create an empty root with no classes, no icons, scroll offset zero.
    pub fn new() -> Self {
        Self {
            classes: ClassList::new(),
            icons: Vec::new(),
            free_list: Vec::new(),
            scroll_y: 0.0,
            scroll_subscribers: Registry::new(),
            scroll_feed: ScrollFeed::new(),
        }
    }

    // --- marker classes ---

    /// Whether the root carries the named marker class.
    pub fn has_class(&self, name: &str) -> bool {
        self.classes.contains(name)
    }

    /// Add a marker class (idempotent).
    pub fn add_class(&mut self, name: &str) {
        self.classes.add(name);
    }

    /// Remove a marker class (idempotent).
    pub fn remove_class(&mut self, name: &str) {
        self.classes.remove(name);
    }

    /// Borrow the class list.
    pub fn classes(&self) -> &ClassList {
        &self.classes
    }

    // --- icons ---

    /// Add an icon with the given roles.
    pub fn add_icon(&mut self, flags: IconFlags) -> IconId {
        let icon = Icon::new(flags);
        let (idx, generation) = if let Some(idx) = self.free_list.pop() {
            let slot = &mut self.icons[idx];
            slot.generation += 1;
            slot.icon = Some(icon);
            (idx, slot.generation)
        } else {
            let generation = 1_u32;
            self.icons.push(IconSlot {
                generation,
                icon: Some(icon),
            });
            (self.icons.len() - 1, generation)
        };
        #[allow(
            clippy::cast_possible_truncation,
            reason = "IconId uses 32-bit indices by design."
        )]
        let id = IconId::new(idx as u32, generation);
        id
    }

    /// Remove an icon. Stale ids are ignored.
    pub fn remove_icon(&mut self, id: IconId) {
        if self.icon(id).is_some() {
            self.icons[id.idx()].icon = None;
            self.free_list.push(id.idx());
        }
    }

    /// Look up a live icon.
    pub fn icon(&self, id: IconId) -> Option<&Icon> {
        let slot = self.icons.get(id.idx())?;
        if slot.generation != id.1 {
            return None;
        }
        slot.icon.as_ref()
    }

    /// Iterate live icons as `(IconId, &Icon)` pairs, in slot order.
    pub fn icons(&self) -> impl Iterator<Item = (IconId, &Icon)> + '_ {
        self.icons.iter().enumerate().filter_map(|(i, slot)| {
            slot.icon.as_ref().map(|icon| {
                #[allow(
                    clippy::cast_possible_truncation,
                    reason = "IconId uses 32-bit indices by design."
                )]
                let id = IconId::new(i as u32, slot.generation);
                (id, icon)
            })
        })
    }

    /// Count of icons carrying the [`IconFlags::ACTION`] role.
    pub fn total_action_icons(&self) -> usize {
        self.icons()
            .filter(|(_, icon)| icon.flags.contains(IconFlags::ACTION))
            .count()
    }

    /// The first icon carrying the [`IconFlags::NAVIGATION`] role, if any.
    pub fn navigation_icon(&self) -> Option<IconId> {
        self.icons()
            .find(|(_, icon)| icon.flags.contains(IconFlags::NAVIGATION))
            .map(|(id, _)| id)
    }

    // --- viewport scroll ---

    /// Current vertical scroll offset of the ambient viewport.
    pub fn scroll_y(&self) -> f64 {
        self.scroll_y
    }

    /// Update the scroll offset and record a pending delivery.
    pub fn set_scroll_y(&mut self, y: f64) {
        self.scroll_y = y;
        self.scroll_feed.record(y);
    }

    /// Take the pending (coalesced) scroll delivery, if any.
    pub fn take_scroll_delivery(&mut self) -> Option<f64> {
        self.scroll_feed.take()
    }

    /// Subscribe to scroll deliveries.
    pub fn subscribe_scroll(&mut self) -> Key {
        self.scroll_subscribers.subscribe(())
    }

    /// Unsubscribe from scroll deliveries. Stale keys are ignored.
    pub fn unsubscribe_scroll(&mut self, key: Key) {
        self.scroll_subscribers.unsubscribe(key);
    }

    /// Whether any scroll subscription is live.
    pub fn has_scroll_subscribers(&self) -> bool {
        !self.scroll_subscribers.is_empty()
    }
}
