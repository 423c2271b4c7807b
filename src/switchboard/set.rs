//! # ListenerSet: one axis of the dispatch index.
//!
//! Maps a key (sender identity or message type) to the set of listeners
//! registered under it, plus one permanent **generic** set for wildcard
//! registrations.
//!
//! ```text
//!   keyed:   user42 ──► {B}
//!            user7  ──► {C, D}
//!   generic: {A}            ◄── Id::ZERO and Id::ANY both land here
//!
//!   get(user42) = {B} ∪ {A}
//!   get(user9)  = {A}
//! ```
//!
//! ## Rules
//! - Every wildcard alias resolves to the same generic set; it is never removed.
//! - Removing the last listener of a concrete key deletes the key's entry.
//! - `get` returns an owned copy, so callers cannot mutate the generic set through it.

use std::collections::{HashMap, HashSet};

use crate::item::Item;
use crate::listeners::ListenerRef;

use super::key::Key;

/// Key → listeners map with a permanent wildcard set.
pub struct ListenerSet<K: Key, I: Item> {
    keyed: HashMap<K, HashSet<ListenerRef<I>>>,
    generic: HashSet<ListenerRef<I>>,
}

impl<K: Key, I: Item> ListenerSet<K, I> {
    /// Creates an empty index with its generic set in place.
    #[must_use]
    pub fn new() -> Self {
        Self {
            keyed: HashMap::new(),
            generic: HashSet::new(),
        }
    }

    /// Listeners matching `key`: its own set unioned with the generic set.
    ///
    /// Always returns a fresh set; an unknown key yields a copy of the generic set.
    #[must_use]
    pub fn get(&self, key: &K) -> HashSet<ListenerRef<I>> {
        let mut out = self.generic.clone();
        if !key.is_wildcard() {
            if let Some(set) = self.keyed.get(key) {
                out.extend(set.iter().cloned());
            }
        }
        out
    }

    /// Inserts `listener` under `key` and returns that key's own set.
    ///
    /// Wildcard keys insert into (and return) the generic set.
    /// Inserting the same listener twice is a no-op.
    pub fn add(&mut self, key: K, listener: ListenerRef<I>) -> &HashSet<ListenerRef<I>> {
        let set = if key.is_wildcard() {
            &mut self.generic
        } else {
            self.keyed.entry(key).or_default()
        };
        set.insert(listener);
        set
    }

    /// Removes `listener` from `key`'s set. Returns whether it was present.
    pub fn remove(&mut self, key: &K, listener: &ListenerRef<I>) -> bool {
        if key.is_wildcard() {
            return self.generic.remove(listener);
        }

        let Some(set) = self.keyed.get_mut(key) else {
            return false;
        };
        let removed = set.remove(listener);
        if set.is_empty() {
            self.keyed.remove(key);
        }
        removed
    }

    /// True if `key` has its own entry. Wildcards are always present.
    #[must_use]
    pub fn contains_key(&self, key: &K) -> bool {
        key.is_wildcard() || self.keyed.contains_key(key)
    }

    /// Number of concrete keys with at least one listener.
    #[must_use]
    pub fn key_count(&self) -> usize {
        self.keyed.len()
    }

    /// Number of listeners registered under the wildcard.
    #[must_use]
    pub fn generic_len(&self) -> usize {
        self.generic.len()
    }

    /// Every distinct listener in this index, across all keys.
    #[must_use]
    pub fn listeners(&self) -> HashSet<ListenerRef<I>> {
        let mut out = self.generic.clone();
        for set in self.keyed.values() {
            out.extend(set.iter().cloned());
        }
        out
    }
}

impl<K: Key, I: Item> Default for ListenerSet<K, I> {
    fn default() -> Self {
        Self::new()
    }
}
