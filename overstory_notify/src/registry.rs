// Copyright 2026 the Overstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Generational subscriber registry.

use alloc::vec::Vec;

/// Generational handle for a subscription.
///
/// A `Key` stays valid until its subscription is removed. Once removed, the
/// slot may be reused for a later subscriber under a higher generation, so a
/// stale `Key` never aliases a live subscription.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Key(u32, u32);

impl Key {
    #[allow(
        clippy::cast_possible_truncation,
        reason = "Registry keys are intentionally 32-bit; higher bits are truncated by design."
    )]
    const fn new(idx: usize, generation: u32) -> Self {
        Self(idx as u32, generation)
    }

    const fn idx(self) -> usize {
        self.0 as usize
    }
}

#[derive(Clone, Debug)]
struct Entry<P> {
    // Survives removal so a reused slot always gets a higher generation.
    generation: u32,
    payload: Option<P>, // None while the slot is free
}

/// A subscriber registry with generational keys.
///
/// Each subscription carries a payload `P` (a callback token, a widget id, or
/// simply `()` when only membership matters). [`Registry::unsubscribe`] with a
/// stale key is a no-op; callers may deregister unconditionally during
/// teardown without tracking whether they ever registered.
#[derive(Clone, Debug)]
pub struct Registry<P> {
    entries: Vec<Entry<P>>,
    free_list: Vec<usize>,
}

impl<P> Default for Registry<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> Registry<P> {
    /// Create an empty registry.
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
            free_list: Vec::new(),
        }
    }

    /// Add a subscriber. Returns a stable handle `Key`.
    pub fn subscribe(&mut self, payload: P) -> Key {
        let (idx, generation) = if let Some(idx) = self.free_list.pop() {
            let entry = &mut self.entries[idx];
            entry.generation += 1;
            entry.payload = Some(payload);
            (idx, entry.generation)
        } else {
            let generation = 1_u32;
            self.entries.push(Entry {
                generation,
                payload: Some(payload),
            });
            (self.entries.len() - 1, generation)
        };
        Key::new(idx, generation)
    }

    /// Remove a subscriber. Stale or reused keys are ignored.
    pub fn unsubscribe(&mut self, key: Key) {
        if self.entry(key).is_some() {
            self.entries[key.idx()].payload = None;
            self.free_list.push(key.idx());
        }
    }

    /// Whether `key` still refers to a live subscription.
    pub fn is_subscribed(&self, key: Key) -> bool {
        self.entry(key).is_some()
    }

    /// Borrow the payload for a live subscription.
    pub fn payload(&self, key: Key) -> Option<&P> {
        self.entry(key).and_then(|e| e.payload.as_ref())
    }

    /// Number of live subscriptions.
    pub fn len(&self) -> usize {
        self.entries.iter().filter(|e| e.payload.is_some()).count()
    }

    /// True when no subscriptions are live.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate live subscriptions as `(Key, &P)` pairs, in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (Key, &P)> + '_ {
        self.entries.iter().enumerate().filter_map(|(i, e)| {
            e.payload
                .as_ref()
                .map(|payload| (Key::new(i, e.generation), payload))
        })
    }

    fn entry(&self, key: Key) -> Option<&Entry<P>> {
        let e = self.entries.get(key.idx())?;
        if e.generation != key.1 || e.payload.is_none() {
            return None;
        }
        Some(e)
    }
}
